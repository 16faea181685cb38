//! The displayable-value sum type.
//!
//! Every argument a check site passes along with its message template
//! becomes one `Value`. The set of variants covers what failure messages
//! actually carry: nothing, scalars, text, and "some object with a string
//! form". Arbitrary objects are captured as [`Value::Opaque`], whose
//! display text is rendered *at construction*, so substitution later on
//! the failure path never calls back into foreign code.

use std::fmt;

/// A single, nullable, dynamically-typed message argument.
///
/// Order within an argument sequence is significant: position `i`
/// corresponds to the `i`-th live specifier of the translated template.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An absent value. Renders as the literal text `null`.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value. All lossless integer widths funnel into `i64`.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Character value.
    Char(char),
    /// String value.
    Str(String),
    /// An arbitrary object, reduced to its display form up front.
    Opaque {
        /// The object's type name, for diagnostics.
        type_name: &'static str,
        /// The object's display form, captured at construction.
        display: String,
    },
}

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Capture an arbitrary displayable object.
    ///
    /// The display form is rendered immediately; the object itself is not
    /// retained. This keeps later substitution pure and panic-free no
    /// matter what the object's `Display` impl does on a second call.
    pub fn opaque<T: fmt::Display>(object: &T) -> Self {
        Value::Opaque {
            type_name: std::any::type_name::<T>(),
            display: object.to_string(),
        }
    }

    /// Short name of this value's kind, for diagnostics.
    ///
    /// `Opaque` reports the captured type name of the original object.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::Opaque { type_name, .. } => type_name,
        }
    }

    /// Check if this is the absent value.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => f.write_str(s),
            Value::Opaque { display, .. } => f.write_str(display),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

/// `Option<T>` maps `None` to the absent value.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, u8, u16, u32);
