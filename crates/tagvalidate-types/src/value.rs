use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::record::Record;

/// The kind of a reflected value, as seen by validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A signed integer that fits in `i64`.
    Int,
    /// A UTF-8 string.
    String,
    /// A record with named fields.
    Struct,
    /// Anything else. Rules never apply to these values.
    Unsupported,
}

impl Kind {
    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Struct => "struct",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed, reflected view of a runtime value.
pub enum Value<'a> {
    /// Integer value.
    Int(i64),
    /// String value.
    String(&'a str),
    /// Nested record.
    Struct(Box<dyn Record + 'a>),
    /// A value of a kind validation does not inspect.
    Unsupported,
}

impl<'a> Value<'a> {
    /// Wraps a borrowed record.
    pub fn record<R: Record + ?Sized>(record: &'a R) -> Self {
        Self::Struct(Box::new(record))
    }

    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::String(_) => Kind::String,
            Self::Struct(_) => Kind::Struct,
            Self::Unsupported => Kind::Unsupported,
        }
    }

    /// Returns the integer if this is an `Int` value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string if this is a `String` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::String(s) => Some(*s),
            _ => None,
        }
    }

    /// Returns the record if this is a `Struct` value.
    #[must_use]
    pub fn as_record(&self) -> Option<&(dyn Record + 'a)> {
        match self {
            Self::Struct(r) => Some(r.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Struct(r) => {
                let names: Vec<_> = r.fields().iter().map(|field| field.name).collect();
                f.debug_tuple("Struct").field(&names).finish()
            }
            Self::Unsupported => f.write_str("Unsupported"),
        }
    }
}

/// Types that can expose themselves as a [`Value`].
///
/// Records get an implementation from [`record!`](crate::record!); scalars and
/// common wrappers are covered here.
///
/// Only integers that always fit in `i64` reflect as [`Kind::Int`]: `i8` to
/// `i64`, `u8` to `u32`, and `isize`. `u64`, `usize`, `i128`, `u128`, floats,
/// `bool`, `char`, `Option` and containers reflect as
/// [`Kind::Unsupported`], so directives on such fields are parsed but never
/// checked and never fail.
pub trait Reflect {
    /// Returns a reflected view of `self`.
    fn reflect(&self) -> Value<'_>;
}

macro_rules! reflect_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! reflect_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    Value::Unsupported
                }
            }
        )*
    };
}

reflect_int!(i8, i16, i32, i64, u8, u16, u32);
reflect_unsupported!(bool, char, f32, f64, u64, usize, i128, u128, ());

impl Reflect for isize {
    fn reflect(&self) -> Value<'_> {
        i64::try_from(*self).map_or(Value::Unsupported, Value::Int)
    }
}

impl Reflect for str {
    fn reflect(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl Reflect for String {
    fn reflect(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl<T: Reflect + ToOwned + ?Sized> Reflect for Cow<'_, T> {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for Rc<T> {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for Arc<T> {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

// Optional values and containers are not followed.
impl<T> Reflect for Option<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Unsupported
    }
}

impl<T> Reflect for Vec<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Unsupported
    }
}

impl<T> Reflect for [T] {
    fn reflect(&self) -> Value<'_> {
        Value::Unsupported
    }
}

impl<T, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value<'_> {
        Value::Unsupported
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> Value<'_> {
        Value::Unsupported
    }
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Value<'_> {
        Value::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::rc::Rc;
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::{Kind, Reflect, Value};

    #[test]
    fn integers_that_fit_i64_reflect_as_int() {
        assert_eq!(7_i8.reflect().as_int(), Some(7));
        assert_eq!((-3_i32).reflect().as_int(), Some(-3));
        assert_eq!(u32::MAX.reflect().as_int(), Some(i64::from(u32::MAX)));
        assert_eq!(42_isize.reflect().as_int(), Some(42));
        assert_eq!(i64::MIN.reflect().kind(), Kind::Int);
    }

    #[test]
    fn wide_unsigned_and_non_integer_scalars_are_unsupported() {
        assert_eq!(1_u64.reflect().kind(), Kind::Unsupported);
        assert_eq!(1_usize.reflect().kind(), Kind::Unsupported);
        assert_eq!(true.reflect().kind(), Kind::Unsupported);
        assert_eq!(1.5_f64.reflect().kind(), Kind::Unsupported);
        assert_eq!('x'.reflect().kind(), Kind::Unsupported);
    }

    #[test]
    fn strings_and_smart_pointers_reflect_transparently() {
        assert_eq!("abc".reflect().as_str(), Some("abc"));
        assert_eq!(String::from("abc").reflect().as_str(), Some("abc"));
        assert_eq!(Cow::<str>::Borrowed("x").reflect().as_str(), Some("x"));
        assert_eq!(Box::<str>::from("boxed").reflect().as_str(), Some("boxed"));
        assert_eq!(Rc::new(5_i32).reflect().as_int(), Some(5));
        assert_eq!(Arc::new(String::from("y")).reflect().as_str(), Some("y"));
        assert_eq!((&&9_i16).reflect().as_int(), Some(9));
    }

    #[test]
    fn containers_and_options_are_unsupported() {
        assert_eq!(Some(5_i64).reflect().kind(), Kind::Unsupported);
        assert_eq!(vec![1, 2].reflect().kind(), Kind::Unsupported);
        assert_eq!([1_u8; 4].reflect().kind(), Kind::Unsupported);
        assert_eq!(
            std::collections::HashMap::<String, i64>::new()
                .reflect()
                .kind(),
            Kind::Unsupported
        );
    }

    #[test]
    fn debug_output_names_the_variant() {
        assert_eq!(format!("{:?}", Value::Int(3)), "Int(3)");
        assert_eq!(format!("{:?}", Value::String("a")), "String(\"a\")");
        assert_eq!(format!("{:?}", Value::Unsupported), "Unsupported");
        assert_eq!(Kind::Struct.to_string(), "struct");
    }
}
