//! Command line parameters for the calculator.

use cmdline_core::{AccessError, OptionDeclaration, OptionValue, Options, ValueKind, assign};
use strum::{Display, EnumString, VariantNames};

/// Arithmetic operation applied to the two operands.
#[derive(Debug, Display, EnumString, VariantNames, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Plus,
    Minus,
    Mul,
    Div,
}

impl From<Operation> for OptionValue {
    fn from(op: Operation) -> Self {
        OptionValue::Enumeration(op.to_string())
    }
}

impl TryFrom<OptionValue> for Operation {
    type Error = OptionValue;

    fn try_from(value: OptionValue) -> Result<Self, Self::Error> {
        if let OptionValue::Enumeration(name) = &value {
            if let Ok(op) = name.parse() {
                return Ok(op);
            }
        }
        Err(value)
    }
}

/// Calculator parameters. Every option is required and has no default.
#[derive(Debug, Default)]
pub struct Params {
    pub left: Option<i32>,
    pub right: Option<i32>,
    pub operation: Option<Operation>,
}

impl Options for Params {
    fn declarations() -> Vec<OptionDeclaration> {
        vec![
            OptionDeclaration::new("left", "l")
                .long("left")
                .kind(ValueKind::Integer)
                .required(true)
                .description("Left operand")
                .possible_values("any int"),
            OptionDeclaration::new("right", "r")
                .long("right")
                .kind(ValueKind::Integer)
                .required(true)
                .description("Right operand")
                .possible_values("any int"),
            OptionDeclaration::new("operation", "o")
                .long("operation")
                .kind(ValueKind::Enumeration {
                    type_name: "Operation",
                    variants: Operation::VARIANTS,
                })
                .required(true)
                .description("The operation")
                .possible_values(format!("any of [{}]", Operation::VARIANTS.join(", "))),
        ]
    }

    fn accessors() -> &'static [&'static str] {
        &["left", "right", "operation"]
    }

    fn read(&self, field: &str) -> Option<OptionValue> {
        match field {
            "left" => self.left.map(OptionValue::from),
            "right" => self.right.map(OptionValue::from),
            "operation" => self.operation.map(OptionValue::from),
            _ => None,
        }
    }

    fn write(&mut self, field: &str, value: Option<OptionValue>) -> Result<(), AccessError> {
        match field {
            "left" => assign(field, &mut self.left, value),
            "right" => assign(field, &mut self.right, value),
            "operation" => assign(field, &mut self.operation, value),
            _ => Err(AccessError::UnknownField(field.to_string())),
        }
    }

    fn type_name() -> &'static str {
        "Params"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdline_core::Engine;
    use pretty_assertions::assert_eq;

    #[test]
    fn operation_variants_are_lowercase() {
        assert_eq!(Operation::VARIANTS, &["plus", "minus", "mul", "div"]);
        assert_eq!(Operation::Mul.to_string(), "mul");
    }

    #[test]
    fn parses_full_command_line() {
        let mut params = Params::default();
        let mut engine = Engine::new(&mut params, "simplecalc ").unwrap();
        assert!(engine
            .parse_command_line(&["--left", "6", "-r", "3", "--operation", "div"])
            .unwrap());
        assert_eq!(params.left, Some(6));
        assert_eq!(params.right, Some(3));
        assert_eq!(params.operation, Some(Operation::Div));
    }

    #[test]
    fn empty_command_line_reports_every_option() {
        let mut params = Params::default();
        let mut engine = Engine::new(&mut params, "simplecalc ").unwrap();
        assert!(!engine.parse_command_line::<&str>(&[]).unwrap());
        assert_eq!(
            engine.output(),
            [
                "You have missed required parameters:",
                "-l( --left )  mandatory Left operand  sample: any int",
                "-r( --right )  mandatory Right operand  sample: any int",
                "-o( --operation )  mandatory The operation  sample: any of [plus, minus, mul, div]",
            ]
        );
    }

    #[test]
    fn missing_operation_is_reported() {
        let mut params = Params::default();
        let mut engine = Engine::new(&mut params, "simplecalc ").unwrap();
        assert!(!engine.parse_command_line(&["-l", "1", "-r", "2"]).unwrap());
        assert_eq!(
            engine.output(),
            [
                "You have missed required parameters:",
                "-o( --operation )  mandatory The operation  sample: any of [plus, minus, mul, div]",
            ]
        );
    }
}
