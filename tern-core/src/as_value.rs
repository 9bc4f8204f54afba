use crate::Value;
use rust_decimal::Decimal;
use std::borrow::Cow;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Conversion of native Rust values into [`Value`] arguments.
///
/// `as_empty_value` returns the typed `NULL` of the implementing type, it is what an `Option`
/// holding `None` turns into.
pub trait AsValue {
    fn as_empty_value() -> Value
    where
        Self: Sized;
    fn as_value(self) -> Value;
}

macro_rules! impl_as_value {
    ($variant:ident, $($source:ty),+ $(,)?) => {
        $(
            impl AsValue for $source {
                fn as_empty_value() -> Value {
                    Value::$variant(None)
                }
                fn as_value(self) -> Value {
                    Value::$variant(Some(self.into()))
                }
            }
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    value.as_value()
                }
            }
        )+
    };
}
impl_as_value!(Boolean, bool);
impl_as_value!(Int8, i8);
impl_as_value!(Int16, i16);
impl_as_value!(Int32, i32);
impl_as_value!(Int64, i64);
impl_as_value!(Int128, i128);
impl_as_value!(UInt8, u8);
impl_as_value!(UInt16, u16);
impl_as_value!(UInt32, u32);
impl_as_value!(UInt64, u64);
impl_as_value!(UInt128, u128);
impl_as_value!(Float32, f32);
impl_as_value!(Float64, f64);
impl_as_value!(Decimal, Decimal);
impl_as_value!(Char, char);
impl_as_value!(Varchar, String, &str, Cow<'_, str>);
impl_as_value!(Blob, Vec<u8>, &[u8]);
impl_as_value!(Date, Date);
impl_as_value!(Time, Time);
impl_as_value!(Timestamp, PrimitiveDateTime);
impl_as_value!(TimestampWithTimezone, OffsetDateTime);
impl_as_value!(Uuid, Uuid);

impl AsValue for Value {
    fn as_empty_value() -> Value {
        Value::Null
    }
    fn as_value(self) -> Value {
        self
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
}

impl<T: AsValue> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.as_value()
    }
}
