#![allow(dead_code)]

use cmdline_core::{AccessError, OptionDeclaration, OptionValue, Options, ValueKind, assign};
use strum::{Display, EnumString, VariantNames};

#[derive(Debug, Display, EnumString, VariantNames, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Plus,
    Minus,
    Mul,
    Div,
}

impl Operation {
    pub const KIND: ValueKind = ValueKind::Enumeration {
        type_name: "Operation",
        variants: Self::VARIANTS,
    };
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

/// Calculator parameters with defaults for every option.
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
                .default_value("0")
                .required(true)
                .description("Left operand")
                .possible_values("any int"),
            OptionDeclaration::new("right", "r")
                .long("right")
                .kind(ValueKind::Integer)
                .default_value("1")
                .required(true)
                .description("Right operand")
                .possible_values("any int"),
            OptionDeclaration::new("operation", "o")
                .long("operation")
                .kind(Operation::KIND)
                .default_value("plus")
                .required(true)
                .description("The operation")
                .possible_values("any of [plus, minus, mul, div]"),
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

/// Two integer options, `b` required with no default.
#[derive(Debug, Default)]
pub struct TestParams {
    pub field_a: Option<i32>,
    pub field_b: Option<i32>,
}

impl Options for TestParams {
    fn declarations() -> Vec<OptionDeclaration> {
        vec![
            OptionDeclaration::new("field_a", "a").long("a").kind(ValueKind::Integer),
            OptionDeclaration::new("field_b", "b")
                .long("b")
                .kind(ValueKind::Integer)
                .required(true),
        ]
    }

    fn accessors() -> &'static [&'static str] {
        &["field_a", "field_b"]
    }

    fn read(&self, field: &str) -> Option<OptionValue> {
        match field {
            "field_a" => self.field_a.map(OptionValue::from),
            "field_b" => self.field_b.map(OptionValue::from),
            _ => None,
        }
    }

    fn write(&mut self, field: &str, value: Option<OptionValue>) -> Result<(), AccessError> {
        match field {
            "field_a" => assign(field, &mut self.field_a, value),
            "field_b" => assign(field, &mut self.field_b, value),
            _ => Err(AccessError::UnknownField(field.to_string())),
        }
    }
}
