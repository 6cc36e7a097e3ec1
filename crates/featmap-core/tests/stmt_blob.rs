use featmap_core::stmt::{MemoryBlobStream, Value};

#[test]
fn import_then_export_bytes() {
    let mut blob = MemoryBlobStream::new();
    blob.import_from_variant(Value::Bytes(vec![0x01, 0x02, 0x03]))
        .unwrap();

    assert_eq!(blob.len(), 3);
    assert_eq!(blob.export_to_variant(), Value::Bytes(vec![0x01, 0x02, 0x03]));
}

#[test]
fn import_replaces_previous_contents() {
    let mut blob = MemoryBlobStream::from(vec![1, 2, 3, 4]);
    blob.import_from_variant(Value::Bytes(vec![5])).unwrap();

    assert_eq!(blob.as_bytes(), &[5]);
}

#[test]
fn import_null_empties_stream() {
    let mut blob = MemoryBlobStream::from(vec![1, 2]);
    blob.import_from_variant(Value::Null).unwrap();

    assert!(blob.is_empty());
    assert_eq!(blob.export_to_variant(), Value::Bytes(vec![]));
}

#[test]
fn import_rejects_non_byte_values() {
    let mut blob = MemoryBlobStream::new();
    let err = blob.import_from_variant(Value::from("abc")).unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert String to MemoryBlobStream");
}

#[test]
fn export_does_not_consume_stream() {
    let blob = MemoryBlobStream::from(&[7u8, 7][..]);
    let _ = blob.export_to_variant();

    assert_eq!(blob.into_bytes(), vec![7, 7]);
}
