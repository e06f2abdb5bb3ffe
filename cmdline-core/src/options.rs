//! Configuration options for the command line engine.

use serde::{Deserialize, Serialize};

/// What to do with an option name given as the very last token, with no value
/// after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingToken {
    /// Drop it and carry on with the required-option check
    #[default]
    Ignore,
    /// Fail parsing with [`crate::EngineError::TrailingToken`]
    Reject,
}

/// How decimal option values are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalMode {
    /// Fractional literals go through a 64-bit float first, so `0.1` reads
    /// as the shortest decimal that round-trips that float. A fractional
    /// literal keeps at least one digit after the point: `10.0` reads as
    /// `10.0`, not `10`.
    #[default]
    ViaDouble,
    /// The literal is parsed directly as a decimal.
    Exact,
}

/// Configuration for an [`crate::Engine`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Command shown in the usage line of the help text
    pub base_command: String,

    /// Handling of an unpaired option name at the end of the arguments
    pub trailing_token: TrailingToken,

    /// Decimal coercion mode
    pub decimal: DecimalMode,
}

impl EngineOptions {
    /// Default options with the given base command.
    pub fn new(base_command: impl Into<String>) -> Self {
        Self {
            base_command: base_command.into(),
            ..Self::default()
        }
    }

    /// Set the handling of an unpaired trailing option name.
    pub fn trailing_token(mut self, policy: TrailingToken) -> Self {
        self.trailing_token = policy;
        self
    }

    /// Set the decimal coercion mode.
    pub fn decimal(mut self, mode: DecimalMode) -> Self {
        self.decimal = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_keep_legacy_behaviour() {
        let options = EngineOptions::new("calc");
        assert_eq!(options.base_command, "calc");
        assert_eq!(options.trailing_token, TrailingToken::Ignore);
        assert_eq!(options.decimal, DecimalMode::ViaDouble);
    }

    #[test]
    fn loads_from_partial_json() {
        let options: EngineOptions =
            serde_json::from_str(r#"{"trailing_token": "reject", "decimal": "exact"}"#).unwrap();
        assert_eq!(
            options,
            EngineOptions::default()
                .trailing_token(TrailingToken::Reject)
                .decimal(DecimalMode::Exact)
        );
    }
}
