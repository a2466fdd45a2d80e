use std::{cmp::Ordering, fmt::Display};

use crate::Error;

/// The ordering contract for values stored in a [`Tree`](crate::Tree).
///
/// Every comparison the tree performs routes through [`Compare::compare()`],
/// making it the single extension point for new value domains.
///
/// Implementations exist for the primitive integer types, `char`, floats,
/// strings, and the dynamically-typed [`Value`].
pub trait Compare {
    /// Order `self` relative to `other`.
    ///
    /// Returns [`Error::TypeMismatch`] if the two values are of different
    /// comparable kinds, or [`Error::UnsupportedType`] if no ordering applies.
    fn compare(&self, other: &Self) -> Result<Ordering, Error>;
}

impl<T> Compare for &T
where
    T: Compare + ?Sized,
{
    fn compare(&self, other: &Self) -> Result<Ordering, Error> {
        (**self).compare(*other)
    }
}

macro_rules! total_order {
    ($($t:ty),+) => {
        $(
            impl Compare for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Result<Ordering, Error> {
                    Ok(self.cmp(other))
                }
            }
        )+
    };
}

total_order!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, str, String);

macro_rules! float_order {
    ($($t:ty),+) => {
        $(
            impl Compare for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Result<Ordering, Error> {
                    self.partial_cmp(other).ok_or(Error::UnsupportedType("NaN"))
                }
            }
        )+
    };
}

float_order!(f32, f64);

/// A dynamically-typed tree value.
///
/// Numbers are ordered numerically and text lexicographically. Comparing two
/// values of different kinds is an [`Error::TypeMismatch`], and booleans have
/// no ordering at all ([`Error::UnsupportedType`]).
///
/// ```
/// use rebuildable_bst::{Compare, Error, Value};
///
/// let a = Value::from(1);
/// let b = Value::from("1");
///
/// assert!(matches!(a.compare(&b), Err(Error::TypeMismatch { .. })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A string value.
    Text(String),
    /// A boolean, which can be stored but not ordered.
    Boolean(bool),
}

impl Value {
    /// The name of this value's kind, as reported in errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Boolean(_) => "boolean",
        }
    }
}

impl Compare for Value {
    fn compare(&self, other: &Self) -> Result<Ordering, Error> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.compare(b),
            (Self::Text(a), Self::Text(b)) => a.compare(b),
            (a, b) if a.kind() != b.kind() => Err(Error::TypeMismatch {
                left: a.kind(),
                right: b.kind(),
            }),
            (a, _) => Err(Error::UnsupportedType(a.kind())),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}
