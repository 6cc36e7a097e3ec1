use featmap::{stmt::Value, Mappable, ModelBuilder, Registry};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Feature {
    docid: Option<i32>,
    global_id: Option<Uuid>,
    photo: Option<Vec<u8>>,
    count: i32,
}

impl Mappable for Feature {
    fn describe(model: &mut ModelBuilder<Self>) {
        model
            .field("docid", "DOCID", |f| &f.docid, |f| &mut f.docid)
            .field("global_id", "GlobalID", |f| &f.global_id, |f| &mut f.global_id)
            .field("photo", "PHOTO", |f| &f.photo, |f| &mut f.photo)
            .field("count", "COUNT", |f| &f.count, |f| &mut f.count);
    }
}

#[test]
fn null_extracts_as_null() {
    let registry = Registry::new();
    let properties = registry.mapped_properties::<Feature>();
    let feature = Feature::default();

    // The blob and GUID rules would reject or wrap a value; null bypasses them
    for property in properties.iter().take(3) {
        assert_eq!(property.extract(&feature, true).unwrap(), Value::Null);
        assert_eq!(property.extract(&feature, false).unwrap(), Value::Null);
    }
}

#[test]
fn null_injects_without_conversion() {
    let registry = Registry::new();
    let properties = registry.mapped_properties::<Feature>();

    let mut feature = Feature {
        docid: Some(5),
        global_id: Some(Uuid::nil()),
        photo: Some(vec![1, 2]),
        count: 0,
    };

    for property in properties.iter().take(3) {
        property.inject(&mut feature, Value::Null, true).unwrap();
    }

    assert_eq!(feature.docid, None);
    assert_eq!(feature.global_id, None);
    assert_eq!(feature.photo, None);
}

#[test]
fn null_survives_store_and_reload() {
    let registry = Registry::new();
    let properties = registry.mapped_properties::<Feature>();
    let docid = &properties[0];

    let source = Feature::default();
    let value = docid.extract(&source, true).unwrap();

    let mut target = Feature {
        docid: Some(9),
        ..Default::default()
    };
    docid.inject(&mut target, value, true).unwrap();

    assert_eq!(target.docid, None);
    assert_eq!(docid.extract(&target, true).unwrap(), Value::Null);
}

#[test]
fn null_into_non_nullable_fails_in_accessor() {
    let registry = Registry::new();
    let properties = registry.mapped_properties::<Feature>();
    let mut feature = Feature::default();

    let err = properties[3]
        .inject(&mut feature, Value::Null, true)
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert Null to i32");
}
