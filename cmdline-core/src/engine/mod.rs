//! Command line parsing engine.
//!
//! This module turns an options structure's declarations into a metadata
//! table, reads `<name> <value>` argument pairs into the structure, and
//! renders help text from the same table.

mod coerce;
mod help;
mod metadata;
mod parser;
mod processor;

pub use coerce::{coerce, coerce_with};
pub use help::{render_help, render_option_line, render_usage};
pub use metadata::{MetadataTable, OptionDescriptor};
pub use parser::{ArgPair, HELP_FLAGS, parse_args};
pub use processor::Engine;
