use super::Value;
use crate::{Error, Result};

/// In-memory blob stream, the feature store's handle for blob fields.
///
/// Values move in and out of the stream through the generic [`Value`]
/// container: [`import_from_variant`](Self::import_from_variant) loads a
/// byte sequence and [`export_to_variant`](Self::export_to_variant) hands
/// one back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MemoryBlobStream {
    data: Vec<u8>,
}

impl MemoryBlobStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of the stream with the bytes held by `value`.
    ///
    /// `Null` empties the stream. Any value other than `Bytes` or another
    /// blob is rejected.
    pub fn import_from_variant(&mut self, value: Value) -> Result<()> {
        self.data = match value {
            Value::Bytes(data) => data,
            Value::Blob(blob) => blob.data,
            Value::Null => Vec::new(),
            value => return Err(Error::type_conversion(value, "MemoryBlobStream")),
        };
        Ok(())
    }

    /// Copies the contents of the stream out as a `Bytes` value.
    pub fn export_to_variant(&self) -> Value {
        Value::Bytes(self.data.clone())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for MemoryBlobStream {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for MemoryBlobStream {
    fn from(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}
