//! Option metadata table.
//!
//! Resolves the declarations of an options structure into descriptors with
//! their full `-x`/`--name` forms, checks the declarations are usable, and
//! indexes the descriptors by option name and by field.

use std::collections::HashMap;

use tracing::debug;

use crate::declaration::{NO_VALUE, OptionDeclaration, Options, ValueKind};
use crate::error::DeclarationError;

/// Resolved metadata for one declared option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDescriptor {
    /// `-` followed by the declared short token
    pub short_name: String,

    /// `--` followed by the declared long token
    pub long_name: String,

    /// Field of the options structure this option fills
    pub field: &'static str,

    pub kind: ValueKind,

    /// Raw default, [`NO_VALUE`] when none was declared
    pub default_value: String,

    pub required: bool,

    pub description: String,

    pub possible_values: String,
}

impl OptionDescriptor {
    /// Whether a default value was declared.
    pub fn has_default(&self) -> bool {
        self.default_value != NO_VALUE
    }
}

impl From<OptionDeclaration> for OptionDescriptor {
    fn from(decl: OptionDeclaration) -> Self {
        Self {
            short_name: format!("-{}", decl.short),
            long_name: format!("--{}", decl.long),
            field: decl.field,
            kind: decl.kind,
            default_value: decl.default_value,
            required: decl.required,
            description: decl.description,
            possible_values: decl.possible_values,
        }
    }
}

/// Descriptors of one options structure plus their lookup indices.
///
/// Built once; immutable afterwards.
#[derive(Debug, Clone)]
pub struct MetadataTable {
    descriptors: Vec<OptionDescriptor>,
    by_name: HashMap<String, usize>,
    by_field: HashMap<&'static str, usize>,
}

impl MetadataTable {
    /// Build the table for an options structure type.
    ///
    /// Fails when nothing is declared, when a declared field has no accessor
    /// pair, when two options share a name, or when one field is declared
    /// twice. Collisions are reported for the first one met in declaration
    /// order, short name before long.
    pub fn build<T: Options>() -> Result<Self, DeclarationError> {
        let descriptors: Vec<OptionDescriptor> = T::declarations()
            .into_iter()
            .map(OptionDescriptor::from)
            .collect();

        if descriptors.is_empty() {
            return Err(DeclarationError::NoOptions {
                type_name: T::type_name().to_string(),
            });
        }

        let accessors = T::accessors();
        let missing: Vec<String> = descriptors
            .iter()
            .filter(|d| !accessors.contains(&d.field))
            .map(|d| d.field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DeclarationError::MissingAccessors {
                type_name: T::type_name().to_string(),
                fields: missing,
            });
        }

        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut by_field = HashMap::new();

        for (idx, descriptor) in descriptors.iter().enumerate() {
            for name in [&descriptor.short_name, &descriptor.long_name] {
                if let Some(&existing) = by_name.get(name) {
                    return Err(DeclarationError::DuplicateName {
                        name: name.clone(),
                        first: descriptors[existing].field.to_string(),
                        second: descriptor.field.to_string(),
                    });
                }
                by_name.insert(name.clone(), idx);
            }
            if by_field.insert(descriptor.field, idx).is_some() {
                return Err(DeclarationError::DuplicateField {
                    field: descriptor.field.to_string(),
                });
            }
        }

        debug!(
            options = descriptors.len(),
            type_name = T::type_name(),
            "Built option metadata table"
        );

        Ok(Self {
            descriptors,
            by_name,
            by_field,
        })
    }

    /// All descriptors, in declaration order.
    pub fn descriptors(&self) -> &[OptionDescriptor] {
        &self.descriptors
    }

    /// Find a descriptor by its short (`-x`) or long (`--name`) form.
    pub fn lookup(&self, name: &str) -> Option<&OptionDescriptor> {
        self.by_name.get(name).map(|&idx| &self.descriptors[idx])
    }

    /// Find the descriptor of a field.
    pub fn by_field(&self, field: &str) -> Option<&OptionDescriptor> {
        self.by_field.get(field).map(|&idx| &self.descriptors[idx])
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no option is declared. Always `false` for a built table.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::OptionValue;
    use crate::error::AccessError;
    use pretty_assertions::assert_eq;

    const OPERATIONS: ValueKind = ValueKind::Enumeration {
        type_name: "Operation",
        variants: &["plus", "minus", "mul", "div"],
    };

    struct Calc;

    impl Options for Calc {
        fn declarations() -> Vec<OptionDeclaration> {
            vec![
                OptionDeclaration::new("left", "l").long("left").kind(ValueKind::Integer),
                OptionDeclaration::new("right", "r").long("right").kind(ValueKind::Integer),
                OptionDeclaration::new("operation", "o").long("operation").kind(OPERATIONS),
            ]
        }

        fn accessors() -> &'static [&'static str] {
            &["left", "right", "operation"]
        }

        fn read(&self, _field: &str) -> Option<OptionValue> {
            None
        }

        fn write(&mut self, _field: &str, _value: Option<OptionValue>) -> Result<(), AccessError> {
            Ok(())
        }

        fn type_name() -> &'static str {
            "Calc"
        }
    }

    #[test]
    fn descriptors_follow_declaration_order() {
        let table = MetadataTable::build::<Calc>().unwrap();
        let shorts: Vec<_> = table.descriptors().iter().map(|d| d.short_name.as_str()).collect();
        assert_eq!(shorts, vec!["-l", "-r", "-o"]);
        assert_eq!(table.descriptors()[2].kind, OPERATIONS);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn lookup_by_either_name_and_field() {
        let table = MetadataTable::build::<Calc>().unwrap();
        assert_eq!(table.lookup("-r").unwrap().field, "right");
        assert_eq!(table.lookup("--right").unwrap().field, "right");
        assert_eq!(table.by_field("operation").unwrap().long_name, "--operation");
        assert!(table.lookup("right").is_none());
        assert!(table.lookup("--r").is_none());
    }

    #[test]
    fn unset_long_token_gives_bare_dashes() {
        let descriptor = OptionDescriptor::from(OptionDeclaration::new("x", "x"));
        assert_eq!(descriptor.long_name, "--");
        assert!(!descriptor.has_default());
    }
}
