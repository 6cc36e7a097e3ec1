use featmap::{FieldMapping, Mappable, ModelBuilder, Registry};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Hydrant {
    facility_id: Option<i32>,
    name: Option<String>,
    pressure: Option<f64>,

    // Not mapped
    #[allow(dead_code)]
    dirty: bool,
    #[allow(dead_code)]
    notes: Vec<String>,
}

impl Mappable for Hydrant {
    fn describe(model: &mut ModelBuilder<Self>) {
        model
            .field(
                "facility_id",
                FieldMapping::new("FACILITYID"),
                |h| &h.facility_id,
                |h| &mut h.facility_id,
            )
            .field(
                "name",
                FieldMapping::new("NAME").max_length(50),
                |h| &h.name,
                |h| &mut h.name,
            )
            .field(
                "pressure",
                FieldMapping::new("PRESSURE"),
                |h| &h.pressure,
                |h| &mut h.pressure,
            );
    }
}

struct Unmapped;

impl Mappable for Unmapped {
    fn describe(_model: &mut ModelBuilder<Self>) {}
}

#[test]
fn returns_only_declared_properties() {
    let registry = Registry::new();
    let properties = registry.mapped_properties::<Hydrant>();

    assert_eq!(properties.len(), 3);
}

#[test]
fn keeps_declaration_order() {
    let registry = Registry::new();
    let properties = registry.mapped_properties::<Hydrant>();

    let fields: Vec<_> = properties.field_names().collect();
    assert_eq!(fields, ["FACILITYID", "NAME", "PRESSURE"]);

    let names: Vec<_> = properties.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["facility_id", "name", "pressure"]);
}

#[test]
fn repeated_lookups_return_cached_list() {
    let registry = Registry::new();
    let first = registry.mapped_properties::<Hydrant>();
    let second = registry.mapped_properties::<Hydrant>();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
}

#[test]
fn type_without_mappings_yields_empty_list() {
    let registry = Registry::new();
    let properties = registry.mapped_properties::<Unmapped>();

    assert!(properties.is_empty());
    assert_eq!(registry.len(), 1);
}

#[test]
fn registries_are_independent() {
    let a = Registry::new();
    let b = Registry::new();

    let from_a = a.mapped_properties::<Hydrant>();
    let from_b = b.mapped_properties::<Hydrant>();

    assert!(!Arc::ptr_eq(&from_a, &from_b));
    assert_eq!(from_a.len(), from_b.len());
}

#[test]
fn register_describes_eagerly() {
    let registry = Registry::new();
    assert!(registry.is_empty());

    registry.register::<Hydrant>().register::<Unmapped>();

    assert_eq!(registry.len(), 2);
}

#[test]
fn global_registry_is_shared() {
    let first = Registry::global().mapped_properties::<Hydrant>();
    let second = Registry::global().mapped_properties::<Hydrant>();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn lookup_by_field_and_name() {
    let registry = Registry::new();
    let properties = registry.mapped_properties::<Hydrant>();

    let by_field = properties.by_field("NAME").unwrap();
    assert_eq!(by_field.name(), "name");
    assert_eq!(by_field.mapping().max_length, Some(50));

    let by_name = properties.by_name("pressure").unwrap();
    assert_eq!(by_name.field_name(), "PRESSURE");

    assert!(properties.by_field("SHAPE").is_none());
    assert_eq!(properties[0].field_name(), "FACILITYID");
}
