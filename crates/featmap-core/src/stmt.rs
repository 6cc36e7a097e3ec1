mod blob;
pub use blob::MemoryBlobStream;

mod num;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_cmp;
