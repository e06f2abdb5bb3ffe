//! Conversion of raw tokens into typed option values.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::declaration::{NO_VALUE, OptionValue, ValueKind};
use crate::error::CoercionError;
use crate::options::DecimalMode;

/// Convert `token` into a value of `kind`, reading decimals the legacy way.
///
/// Returns `Ok(None)` for [`NO_VALUE`], whatever the kind.
pub fn coerce(kind: &ValueKind, token: &str) -> Result<Option<OptionValue>, CoercionError> {
    coerce_with(kind, token, DecimalMode::default())
}

/// Convert `token` into a value of `kind`.
pub fn coerce_with(
    kind: &ValueKind,
    token: &str,
    decimal: DecimalMode,
) -> Result<Option<OptionValue>, CoercionError> {
    if token == NO_VALUE {
        return Ok(None);
    }

    let value = match kind {
        ValueKind::String => OptionValue::String(token.to_string()),
        ValueKind::Integer => OptionValue::Integer(parse_number(kind, token)?),
        ValueKind::Float => OptionValue::Float(parse_number(kind, token)?),
        ValueKind::Double => OptionValue::Double(parse_number(kind, token)?),
        ValueKind::Long => OptionValue::Long(parse_number(kind, token)?),
        ValueKind::Decimal => OptionValue::Decimal(parse_decimal(token, decimal)?),
        ValueKind::Enumeration { type_name, variants } => {
            if !variants.iter().any(|variant| *variant == token) {
                return Err(CoercionError::UnknownVariant {
                    type_name: *type_name,
                    token: token.to_string(),
                });
            }
            OptionValue::Enumeration(token.to_string())
        }
        ValueKind::Custom(type_name) => return Err(CoercionError::UnsupportedType(*type_name)),
    };

    Ok(Some(value))
}

fn parse_number<N>(kind: &ValueKind, token: &str) -> Result<N, CoercionError>
where
    N: FromStr,
    N::Err: std::fmt::Display,
{
    token.parse::<N>().map_err(|e| invalid(kind, token, e))
}

// ViaDouble: a token with a '.' after its first character is read as an f64
// and converted from the shortest string that round-trips it, keeping at
// least scale 1. Anything else must be a whole i64.
fn parse_decimal(token: &str, mode: DecimalMode) -> Result<Decimal, CoercionError> {
    let kind = &ValueKind::Decimal;
    match mode {
        DecimalMode::Exact => Decimal::from_str(token).map_err(|e| invalid(kind, token, e)),
        DecimalMode::ViaDouble => {
            if token.find('.').is_some_and(|pos| pos > 0) {
                let double: f64 = parse_number(kind, token)?;
                let mut decimal =
                    Decimal::from_str(&double.to_string()).map_err(|e| invalid(kind, token, e))?;
                if decimal.scale() == 0 {
                    decimal.rescale(1);
                }
                Ok(decimal)
            } else {
                let whole: i64 = parse_number(kind, token)?;
                Ok(Decimal::from(whole))
            }
        }
    }
}

fn invalid(kind: &ValueKind, token: &str, reason: impl std::fmt::Display) -> CoercionError {
    CoercionError::InvalidValue {
        kind: kind.name(),
        token: token.to_string(),
        reason: reason.to_string(),
    }
}
