use super::{Type, Value};

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    I8(i8) { is_i8 }
    I16(i16) { is_i16 }
    I32(i32) { is_i32 }
    I64(i64) { is_i64 }
    U8(u8) { is_u8 }
    U16(u16) { is_u16 }
    U32(u32) { is_u32 }
    U64(u64) { is_u64 }
    F32(f32) { is_f32 }
    F64(f64) { is_f64 }
}

/// Rounds half to even, then narrows to `T` with a checked conversion.
///
/// Goes through `i128` so the bounds are exact; `MAX as f64` rounds up past
/// the range of the 64-bit types.
fn round_to_int<T: TryFrom<i128>>(value: f64) -> Option<T> {
    if !value.is_finite() {
        return None;
    }

    T::try_from(value.round_ties_even() as i128).ok()
}

// Integer conversions accept every numeric variant that fits the target,
// booleans as 0/1, and strings that parse after trimming whitespace.
macro_rules! impl_try_from_value_int {
    ( $( $ty:ty ),* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = crate::Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let converted: Option<$ty> = match &value {
                        Value::Bool(v) => Some(<$ty>::from(*v)),
                        Value::I8(v) => (*v).try_into().ok(),
                        Value::I16(v) => (*v).try_into().ok(),
                        Value::I32(v) => (*v).try_into().ok(),
                        Value::I64(v) => (*v).try_into().ok(),
                        Value::U8(v) => (*v).try_into().ok(),
                        Value::U16(v) => (*v).try_into().ok(),
                        Value::U32(v) => (*v).try_into().ok(),
                        Value::U64(v) => (*v).try_into().ok(),
                        Value::F32(v) => round_to_int(f64::from(*v)),
                        Value::F64(v) => round_to_int(*v),
                        Value::String(s) => s.trim().parse::<$ty>().ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| crate::Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_try_from_value_int!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_try_from_value_float {
    ( $( $ty:ty ),* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = crate::Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let converted: Option<$ty> = match &value {
                        Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
                        Value::I8(v) => Some(*v as $ty),
                        Value::I16(v) => Some(*v as $ty),
                        Value::I32(v) => Some(*v as $ty),
                        Value::I64(v) => Some(*v as $ty),
                        Value::U8(v) => Some(*v as $ty),
                        Value::U16(v) => Some(*v as $ty),
                        Value::U32(v) => Some(*v as $ty),
                        Value::U64(v) => Some(*v as $ty),
                        Value::F32(v) => Some(*v as $ty),
                        Value::F64(v) => Some(*v as $ty),
                        Value::String(s) => s.trim().parse::<$ty>().ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| crate::Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_try_from_value_float!(f32, f64);
