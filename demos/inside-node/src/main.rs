use featmap::{FieldMapping, FieldRecord, Mappable, ModelBuilder, Registry};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct InsideNode {
    docid: Option<i32>,
    ty: Option<String>,
    subtype: Option<String>,
    related_fc_name: Option<String>,
    related_foid: Option<i32>,
    x_geo: Option<f64>,
    y_geo: Option<f64>,
    name: Option<String>,
    info1: Option<String>,
    info2: Option<String>,
    info3: Option<String>,
    global_id: Option<uuid::Uuid>,
}

impl Mappable for InsideNode {
    fn describe(model: &mut ModelBuilder<Self>) {
        model
            .field("docid", "DOCID", |n| &n.docid, |n| &mut n.docid)
            .field("ty", ("Type", 100u32), |n| &n.ty, |n| &mut n.ty)
            .field("subtype", ("Subtype", 30u32), |n| &n.subtype, |n| &mut n.subtype)
            .field(
                "related_fc_name",
                ("RelatedFCName", 50u32),
                |n| &n.related_fc_name,
                |n| &mut n.related_fc_name,
            )
            .field(
                "related_foid",
                "RelatedFOID",
                |n| &n.related_foid,
                |n| &mut n.related_foid,
            )
            .field("x_geo", "XGeo", |n| &n.x_geo, |n| &mut n.x_geo)
            .field("y_geo", "YGeo", |n| &n.y_geo, |n| &mut n.y_geo)
            .field("name", ("NAME", 100u32), |n| &n.name, |n| &mut n.name)
            .field("info1", ("INFO1", 100u32), |n| &n.info1, |n| &mut n.info1)
            .field("info2", ("INFO2", 100u32), |n| &n.info2, |n| &mut n.info2)
            .field("info3", ("INFO3", 100u32), |n| &n.info3, |n| &mut n.info3)
            .field(
                "global_id",
                FieldMapping::new("GlobalID"),
                |n| &n.global_id,
                |n| &mut n.global_id,
            );
    }
}

fn main() -> featmap::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = Registry::new();
    registry.register::<InsideNode>();

    let field_defs = registry.field_defs::<InsideNode>();
    let schema = serde_json::to_string_pretty(&field_defs)
        .map_err(|e| featmap::err!("failed to serialize field definitions: {e}"))?;
    println!("==> field definitions\n{schema}");

    let node = InsideNode {
        docid: Some(1001),
        ty: Some("Splice".to_string()),
        related_fc_name: Some("FiberCable".to_string()),
        related_foid: Some(77),
        x_geo: Some(-122.4194),
        y_geo: Some(37.7749),
        name: Some("SP-1001".to_string()),
        global_id: Some(uuid::Uuid::new_v4()),
        ..Default::default()
    };
    registry.validate(&node)?;

    let mut record = FieldRecord::new();
    registry.store(&node, &mut record)?;

    println!("\n==> stored record");
    for (field, value) in record.iter() {
        println!("{field:>14} = {value}");
    }

    let loaded: InsideNode = registry.load(&record)?;
    if loaded != node {
        featmap::bail!("loaded node differs from the stored one");
    }
    println!("\n==> loaded {loaded:#?}");

    Ok(())
}
