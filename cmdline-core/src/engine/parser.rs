//! Tokenizer for command line arguments.
//!
//! Arguments are read strictly as `<name> <value>` pairs from left to right.
//! There are no flags, no `--name=value` forms and no positional arguments.

/// Short and long forms of the help request.
pub const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

/// One option name and the token that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgPair<'a> {
    /// Token in name position (even index)
    pub name: &'a str,

    /// Token in value position, `None` for a trailing name
    pub value: Option<&'a str>,
}

impl<'a> ArgPair<'a> {
    /// Whether the name asks for help.
    pub fn is_help(&self) -> bool {
        HELP_FLAGS.iter().any(|flag| *flag == self.name)
    }

    /// Whether the name has the `-` or `--` prefix of an option.
    pub fn has_option_prefix(&self) -> bool {
        self.name.starts_with('-')
    }
}

/// Split a list of arguments into name/value pairs.
///
/// `["-l", "10", "--right"]` yields `(-l, 10)` then `(--right, None)`.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> impl Iterator<Item = ArgPair<'_>> {
    args.chunks(2).map(|chunk| ArgPair {
        name: chunk[0].as_ref(),
        value: chunk.get(1).map(|value| value.as_ref()),
    })
}
