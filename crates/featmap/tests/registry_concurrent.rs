use featmap::{FieldMapping, Mappable, ModelBuilder, Registry};
use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Default)]
struct Manhole {
    depth: Option<f64>,
    cover: Option<String>,
}

impl Mappable for Manhole {
    fn describe(model: &mut ModelBuilder<Self>) {
        model
            .field("depth", FieldMapping::new("DEPTH"), |m| &m.depth, |m| &mut m.depth)
            .field(
                "cover",
                FieldMapping::new("COVER").max_length(20),
                |m| &m.cover,
                |m| &mut m.cover,
            );
    }
}

#[derive(Default)]
struct Gauge<const N: usize> {
    reading: Option<i32>,
}

impl<const N: usize> Mappable for Gauge<N> {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("reading", "READING", |g| &g.reading, |g| &mut g.reading);
    }
}

fn register_gauges(registry: &Registry) {
    registry
        .register::<Gauge<0>>()
        .register::<Gauge<1>>()
        .register::<Gauge<2>>()
        .register::<Gauge<3>>()
        .register::<Gauge<4>>()
        .register::<Gauge<5>>()
        .register::<Gauge<6>>()
        .register::<Gauge<7>>();
}

#[test]
fn concurrent_first_lookups_converge() {
    const THREADS: usize = 16;

    let registry = Arc::new(Registry::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.mapped_properties::<Manhole>()
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    // Every caller sees the one published list
    for properties in &results {
        assert!(Arc::ptr_eq(properties, &results[0]));
        let fields: Vec<_> = properties.field_names().collect();
        assert_eq!(fields, ["DEPTH", "COVER"]);
    }

    assert_eq!(registry.len(), 1);
    assert!(Arc::ptr_eq(
        &registry.mapped_properties::<Manhole>(),
        &results[0]
    ));
}

#[test]
fn concurrent_use_on_distinct_instances() {
    let registry = Arc::new(Registry::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                let properties = registry.mapped_properties::<Manhole>();
                let depth = properties.by_field("DEPTH").unwrap();

                let mut manhole = Manhole::default();
                depth
                    .inject(&mut manhole, featmap::stmt::Value::I32(i), true)
                    .unwrap();
                manhole.depth
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i as f64));
    }
}

#[test]
fn cached_lookups_unaffected_by_publishing_other_types() {
    const READERS: usize = 8;

    let registry = Arc::new(Registry::new());
    let cached = registry.mapped_properties::<Manhole>();
    let barrier = Arc::new(Barrier::new(READERS + 1));

    let writer = {
        let registry = registry.clone();
        let barrier = barrier.clone();
        thread::spawn(move || {
            barrier.wait();
            register_gauges(&registry);
        })
    };

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                (0..1_000)
                    .map(|_| registry.mapped_properties::<Manhole>())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        for properties in reader.join().unwrap() {
            assert!(Arc::ptr_eq(&properties, &cached));
        }
    }

    // Publishing the gauges kept the earlier entry
    assert_eq!(registry.len(), 9);
    assert!(Arc::ptr_eq(
        &registry.mapped_properties::<Manhole>(),
        &cached
    ));
    assert_eq!(registry.mapped_properties::<Gauge<7>>().len(), 1);
}
