use featmap::{
    bail,
    stmt::{Type, Value},
    Accessor, FieldAccessor, FnAccessor, Mappable, ModelBuilder, PropertyType, Registry,
};

#[derive(Debug, Default)]
struct Span {
    length_m: f64,
    locked: bool,
}

impl Mappable for Span {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field_with(
            "length_ft",
            "LENGTH_FT",
            PropertyType {
                ty: Type::F64,
                nullable: false,
            },
            FnAccessor::new(
                |span: &Span| -> featmap::Result<Value> {
                    Ok(Value::F64(span.length_m / 0.3048))
                },
                |span: &mut Span, value: Value| -> featmap::Result<()> {
                    if span.locked {
                        bail!("span is locked");
                    }
                    span.length_m = f64::try_from(value)? * 0.3048;
                    Ok(())
                },
            ),
        );
    }
}

#[test]
fn computed_property_reads_and_writes() {
    let registry = Registry::new();
    let properties = registry.mapped_properties::<Span>();
    let length = &properties[0];

    let mut span = Span {
        length_m: 3.048,
        locked: false,
    };

    let value = length.extract(&span, true).unwrap();
    let Value::F64(feet) = value else {
        panic!("expected F64; actual={value:?}");
    };
    assert!((feet - 10.0).abs() < 1e-9);

    // Default rule coerces the store integer before the setter runs
    length.inject(&mut span, Value::I32(20), true).unwrap();
    assert!((span.length_m - 6.096).abs() < 1e-9);
}

#[test]
fn accessor_failure_propagates_unwrapped() {
    let registry = Registry::new();
    let properties = registry.mapped_properties::<Span>();

    let mut span = Span {
        length_m: 1.0,
        locked: true,
    };

    let err = properties[0]
        .inject(&mut span, Value::F64(1.0), true)
        .unwrap_err();

    assert_eq!(err.to_string(), "span is locked");
    assert!(!err.is_field_conversion());
}

#[test]
fn field_accessor_round_trip() {
    let accessor = FieldAccessor::<Span, bool>::new(|s| &s.locked, |s| &mut s.locked);
    let mut span = Span::default();

    accessor.set(&mut span, Value::Bool(true)).unwrap();

    assert!(span.locked);
    assert_eq!(accessor.get(&span).unwrap(), true);
}
