//! The command line engine.
//!
//! An [`Engine`] is bound to one options structure. Creating it builds the
//! metadata table and writes every declared default into the structure.
//! Parsing then fills the structure from `<name> <value>` pairs and checks
//! that every required option ended up with a value.
//!
//! Problems with the arguments are reported through the diagnostic log and a
//! `false` result. Only declaration mistakes and failing accessors are errors.

use tracing::{debug, trace, warn};

use super::coerce::coerce_with;
use super::help::{render_help, render_option_line};
use super::metadata::{MetadataTable, OptionDescriptor};
use super::parser::parse_args;
use crate::declaration::Options;
use crate::error::{CoercionError, EngineError, Result};
use crate::options::{EngineOptions, TrailingToken};

/// Parses command line arguments into an options structure.
pub struct Engine<'a, T: Options> {
    target: &'a mut T,
    table: MetadataTable,
    options: EngineOptions,
    output: Vec<String>,
}

impl<'a, T: Options> Engine<'a, T> {
    /// Create an engine for `target` with default options.
    pub fn new(target: &'a mut T, base_command: impl Into<String>) -> Result<Self> {
        Self::with_options(target, EngineOptions::new(base_command))
    }

    /// Create an engine for `target`.
    ///
    /// Fails when the declarations of `T` are malformed or a declared default
    /// cannot be coerced. Options without a default keep whatever value the
    /// structure already holds.
    pub fn with_options(target: &'a mut T, options: EngineOptions) -> Result<Self> {
        let table = MetadataTable::build::<T>()?;

        for descriptor in table.descriptors() {
            let value = coerce_with(&descriptor.kind, &descriptor.default_value, options.decimal)
                .map_err(|err| match err {
                    CoercionError::UnsupportedType(type_name) => EngineError::UnsupportedType(type_name),
                    source => EngineError::Default {
                        option: descriptor.long_name.clone(),
                        source,
                    },
                })?;

            if value.is_some() {
                target.write(descriptor.field, value)?;
            }
        }

        debug!(
            base_command = %options.base_command,
            options = table.len(),
            "Applied option defaults"
        );

        Ok(Self {
            target,
            table,
            options,
            output: Vec::new(),
        })
    }

    /// Parse `args` into the target structure.
    ///
    /// Returns `Ok(true)` when every pair was applied and all required options
    /// hold a value. Returns `Ok(false)` when help was requested or the
    /// arguments were wrong; the reason is in [`Engine::output`]. Pairs before
    /// the failing one stay applied, pairs after it are never looked at.
    pub fn parse_command_line<S: AsRef<str>>(&mut self, args: &[S]) -> Result<bool> {
        for pair in parse_args(args) {
            if pair.is_help() {
                debug!(name = pair.name, "Help requested");
                self.provide_help();
                return Ok(false);
            }

            if !pair.has_option_prefix() {
                debug!(name = pair.name, "Malformed parameter name");
                self.output.push(format!(
                    "Wrong parameter name format: {}. Parameter name should be started with - or --",
                    pair.name
                ));
                self.provide_help();
                return Ok(false);
            }

            let Some(value) = pair.value else {
                match self.options.trailing_token {
                    TrailingToken::Ignore => {
                        warn!(name = pair.name, "Dropping parameter without a value");
                        break;
                    }
                    TrailingToken::Reject => {
                        return Err(EngineError::TrailingToken(pair.name.to_string()));
                    }
                }
            };

            let Some(descriptor) = self.table.lookup(pair.name) else {
                debug!(name = pair.name, "Unknown parameter");
                self.output.push(format!("Unknown parameter {}", pair.name));
                return Ok(false);
            };

            trace!(name = pair.name, value, field = descriptor.field, "Applying parameter");

            match coerce_with(&descriptor.kind, value, self.options.decimal) {
                Ok(typed) => self.target.write(descriptor.field, typed)?,
                Err(CoercionError::UnsupportedType(type_name)) => {
                    return Err(EngineError::UnsupportedType(type_name));
                }
                Err(err) => {
                    debug!(name = pair.name, error = %err, "Rejected parameter value");
                    self.output.push(format!(
                        "Can't accept value of '{}' for parameter '{}'",
                        value, pair.name
                    ));
                    return Ok(false);
                }
            }
        }

        Ok(self.check_required())
    }

    /// Append the help text to the log and return the whole log.
    pub fn provide_help(&mut self) -> &[String] {
        let help = render_help(&self.options.base_command, self.table.descriptors());
        self.output.extend(help);
        &self.output
    }

    /// Diagnostic log, oldest entry first. Never cleared by the engine.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Descriptors of every declared option, in declaration order.
    pub fn descriptors(&self) -> &[OptionDescriptor] {
        self.table.descriptors()
    }

    /// Find a descriptor by its short or long name.
    pub fn descriptor(&self, name: &str) -> Option<&OptionDescriptor> {
        self.table.lookup(name)
    }

    /// The options structure being filled.
    pub fn target(&self) -> &T {
        &*self.target
    }

    /// Configuration the engine was created with.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    // Collects every required option still absent, then reports them together.
    fn check_required(&mut self) -> bool {
        let missing: Vec<String> = self
            .table
            .descriptors()
            .iter()
            .filter(|d| d.required && self.target.read(d.field).is_none())
            .map(render_option_line)
            .collect();

        if missing.is_empty() {
            return true;
        }

        debug!(missing = missing.len(), "Required parameters missing");
        self.output.push("You have missed required parameters:".to_string());
        self.output.extend(missing);
        false
    }
}
