//! Option declarations and the accessor contract for options structures.
//!
//! An options structure describes itself through the [`Options`] trait: it
//! lists one [`OptionDeclaration`] per field it wants filled from the command
//! line, names the fields it can read and write, and exposes typed get/set
//! for those fields. The engine never looks inside the structure beyond that.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::AccessError;

/// Raw value meaning "no value". Coerces to an absent value for every kind.
pub const NO_VALUE: &str = "<<THENULLVALUE>>";

/// Value types an option can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    /// 32-bit signed integer
    Integer,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// 64-bit signed integer
    Long,
    /// Arbitrary-precision decimal
    Decimal,
    /// One of a fixed set of case-sensitive symbolic names
    Enumeration {
        type_name: &'static str,
        variants: &'static [&'static str],
    },
    /// A field type with no coercion rule. Coercing into it always fails.
    Custom(&'static str),
}

impl ValueKind {
    /// Human-readable name of the kind, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Long => "long",
            ValueKind::Decimal => "decimal",
            ValueKind::Enumeration { type_name, .. } => *type_name,
            ValueKind::Custom(type_name) => *type_name,
        }
    }
}

/// A coerced, typed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i32),
    Float(f32),
    Double(f64),
    Long(i64),
    Decimal(Decimal),
    /// The matched symbolic name of an enumeration variant
    Enumeration(String),
}

impl OptionValue {
    /// Name of the kind this value belongs to.
    pub fn kind_name(&self) -> &'static str {
        match self {
            OptionValue::String(_) => "string",
            OptionValue::Integer(_) => "integer",
            OptionValue::Float(_) => "float",
            OptionValue::Double(_) => "double",
            OptionValue::Long(_) => "long",
            OptionValue::Decimal(_) => "decimal",
            OptionValue::Enumeration(_) => "enumeration",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::String(v) | OptionValue::Enumeration(v) => f.write_str(v),
            OptionValue::Integer(v) => write!(f, "{}", v),
            OptionValue::Float(v) => write!(f, "{}", v),
            OptionValue::Double(v) => write!(f, "{}", v),
            OptionValue::Long(v) => write!(f, "{}", v),
            OptionValue::Decimal(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! option_value_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    OptionValue::$variant(value)
                }
            }

            impl TryFrom<OptionValue> for $ty {
                type Error = OptionValue;

                fn try_from(value: OptionValue) -> std::result::Result<Self, Self::Error> {
                    match value {
                        OptionValue::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

option_value_conversions! {
    String => String,
    i32 => Integer,
    f32 => Float,
    f64 => Double,
    i64 => Long,
    Decimal => Decimal,
}

/// Store a coerced value into an optional field.
///
/// Meant for [`Options::write`] implementations. Any type convertible from
/// [`OptionValue`] works, including enumerations that implement
/// `TryFrom<OptionValue, Error = OptionValue>`.
pub fn assign<V>(field: &str, slot: &mut Option<V>, value: Option<OptionValue>) -> Result<(), AccessError>
where
    V: TryFrom<OptionValue, Error = OptionValue>,
{
    *slot = match value {
        Some(value) => Some(V::try_from(value).map_err(|other| AccessError::TypeMismatch {
            field: field.to_string(),
            expected: std::any::type_name::<V>(),
            found: other.kind_name(),
        })?),
        None => None,
    };
    Ok(())
}

/// Metadata attached to one field of an options structure.
///
/// The short token is mandatory; everything else has a default. Names are
/// given without their dashes: `short("l")` becomes `-l` and `long("left")`
/// becomes `--left`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDeclaration {
    pub field: &'static str,
    pub short: String,
    pub long: String,
    pub kind: ValueKind,
    pub default_value: String,
    pub required: bool,
    pub description: String,
    pub possible_values: String,
}

impl OptionDeclaration {
    /// Declare a string option for `field` with the given short token.
    pub fn new(field: &'static str, short: impl Into<String>) -> Self {
        Self {
            field,
            short: short.into(),
            long: String::new(),
            kind: ValueKind::String,
            default_value: NO_VALUE.to_string(),
            required: false,
            description: String::new(),
            possible_values: String::new(),
        }
    }

    /// Long name without the `--` prefix. Left unset it resolves to `--`.
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }

    /// Value kind the raw token is coerced to.
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Raw default, coerced and written when the engine is created.
    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    /// Whether parsing fails when the field is still absent afterwards.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Text shown in help and missing-parameter lines.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Free-text hint shown as `sample:` in help output.
    pub fn possible_values(mut self, possible_values: impl Into<String>) -> Self {
        self.possible_values = possible_values.into();
        self
    }
}

/// Accessor capability implemented by an options structure.
pub trait Options {
    /// Option declarations, in field declaration order.
    fn declarations() -> Vec<OptionDeclaration>;

    /// Fields that have both a read and a write accessor.
    fn accessors() -> &'static [&'static str];

    /// Current value of `field`, `None` when absent.
    fn read(&self, field: &str) -> Option<OptionValue>;

    /// Replace the value of `field`.
    fn write(&mut self, field: &str, value: Option<OptionValue>) -> Result<(), AccessError>;

    /// Name of the structure, used in declaration errors.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
