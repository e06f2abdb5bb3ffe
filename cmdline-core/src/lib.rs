//! Declarative command line parsing.
//!
//! An options structure declares its fields as command line options through
//! the [`Options`] trait. The [`Engine`] derives everything else from those
//! declarations: defaults, parsing of `-x value` / `--name value` pairs, type
//! coercion, required-option checks and help text.
//!
//! ```ignore
//! let mut params = Params::default();
//! let mut engine = Engine::new(&mut params, "calc")?;
//! if !engine.parse_command_line(&args)? {
//!     for line in engine.output() {
//!         println!("{}", line);
//!     }
//! }
//! ```

mod declaration;
mod engine;
mod error;
mod options;

pub use declaration::{NO_VALUE, OptionDeclaration, OptionValue, Options, ValueKind, assign};
pub use engine::{
    ArgPair, Engine, HELP_FLAGS, MetadataTable, OptionDescriptor, coerce, coerce_with, parse_args,
    render_help, render_option_line, render_usage,
};
pub use error::{AccessError, CoercionError, DeclarationError, EngineError, Result};
pub use options::{DecimalMode, EngineOptions, TrailingToken};

/// Re-export of the decimal type used for [`ValueKind::Decimal`] values
pub use rust_decimal::Decimal;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
