use crate::{stmt, Error, Result};

use uuid::Uuid;

/// A native type that a mapped property can hold.
///
/// `load` is strict: it only accepts the [`stmt::Value`] variant that
/// matches `TYPE`. Coercion between representations is the job of the
/// property's conversion rule, not of the property itself.
pub trait Primitive: Sized + Send + Sync + 'static {
    const TYPE: stmt::Type;
    const NULLABLE: bool = false;

    fn load(value: stmt::Value) -> Result<Self>;

    fn to_value(&self) -> stmt::Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: stmt::Type = stmt::Type::$variant;

                fn load(value: stmt::Value) -> Result<Self> {
                    match value {
                        stmt::Value::$variant(v) => Ok(v),
                        _ => Err(Error::type_conversion(value, Self::TYPE.name())),
                    }
                }

                fn to_value(&self) -> stmt::Value {
                    stmt::Value::$variant(self.clone())
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    Uuid => Uuid,
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: stmt::Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> stmt::Value {
        match self {
            Some(v) => v.to_value(),
            None => stmt::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_unwraps_type() {
        assert_eq!(<Option<i32>>::TYPE, stmt::Type::I32);
        assert!(<Option<i32>>::NULLABLE);
        assert!(!i32::NULLABLE);
    }

    #[test]
    fn load_matching_variant() {
        assert_eq!(i32::load(stmt::Value::I32(5)).unwrap(), 5);
        assert_eq!(<Option<String>>::load(stmt::Value::Null).unwrap(), None);
    }

    #[test]
    fn load_rejects_other_variants() {
        let err = i32::load(stmt::Value::I64(5)).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert I64 to i32");
    }

    #[test]
    fn load_null_into_non_nullable() {
        let err = f64::load(stmt::Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert Null to f64");
    }
}
