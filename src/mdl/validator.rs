//! Semantic validation and canonical ordering
//!
//!     The validator checks a parsed [Model] for internal consistency and returns a
//!     new model whose top-level declarations are in canonical order. The input model
//!     is left untouched.
//!
//!     Passes, in order:
//!
//!     1. Extraction: each of the six top-level families (modules, types, functionals,
//!        aspects, classes, instances) is loaded into a table keyed by its normalized
//!        name. Two declarations with the same key are rejected.
//!     2. Canonicalization: the canonical model is assembled from the tables, so every
//!        family is sorted by key.
//!     3. Structural validation: every declaration, abstraction, parameter, result and
//!        member is walked. Abstractions register the types and module aliases they
//!        use; attribute names and shapes, and enumeration values, are checked.
//!     4. Cross-reference validation: used aliases must be imported, declared types,
//!        functionals and aspects must be used, classes and instances must pair up
//!        and module aliases must have the configured length.
//!
//!     Validation is fail-fast: the first violation is returned.
//!
//!     Normalized keys are lower case. Class keys drop the `ClassLike` suffix and
//!     instance keys drop the `Like` suffix first, so `ListClassLike` and `ListLike`
//!     share the key `list`.

pub mod error;

pub use error::ValidationError;

use crate::mdl::ast::interface::{CLASS_MARKER, INSTANCE_MARKER};
use crate::mdl::ast::{
    Abstraction, Aspect, Attribute, Class, Declaration, Functional, Instance, Method, Model,
    Module, Output, Parameter, Prefix, Type,
};
use crate::mdl::config::ValidationConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Attribute names: an accessor verb followed by a capitalized name
static ATTRIBUTE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Get|Set|Is|Was|Has|Are|Were|Had)[A-Z][a-zA-Z0-9]*_?$").unwrap());

type Table<'m, T> = BTreeMap<String, &'m T>;

/// Checks models and puts them in canonical order.
///
/// A validator keeps the sets of used types and aliases while it runs, so one
/// instance must not be shared between concurrent calls. The sets are reset at the
/// start of every [validate](Validator::validate).
#[derive(Debug, Default)]
pub struct Validator {
    config: ValidationConfig,
    used_types: BTreeSet<String>,
    used_aliases: BTreeSet<String>,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            used_types: BTreeSet::new(),
            used_aliases: BTreeSet::new(),
        }
    }

    /// Validate `model`, returning its canonical form.
    pub fn validate(&mut self, model: &Model) -> Result<Model, ValidationError> {
        self.used_types.clear();
        self.used_aliases.clear();

        let modules = extract("module", model.modules(), |module| module.alias(), None)?;
        let types = extract("type", model.types(), |item| item.declaration().name(), None)?;
        let functionals = extract(
            "functional",
            model.functionals(),
            |item| item.declaration().name(),
            None,
        )?;
        let aspects = extract("aspect", model.aspects(), |item| item.declaration().name(), None)?;
        let classes = extract(
            "class",
            model.classes(),
            |item| item.declaration().name(),
            Some(CLASS_MARKER),
        )?;
        let instances = extract(
            "instance",
            model.instances(),
            |item| item.declaration().name(),
            Some(INSTANCE_MARKER),
        )?;
        debug!(
            modules = modules.len(),
            types = types.len(),
            functionals = functionals.len(),
            aspects = aspects.len(),
            classes = classes.len(),
            instances = instances.len(),
            "extracted declarations"
        );

        let canonical = Model::new(model.notice().clone(), model.header().clone())
            .with_modules(sorted(&modules))
            .with_types(sorted(&types))
            .with_functionals(sorted(&functionals))
            .with_aspects(sorted(&aspects))
            .with_classes(sorted(&classes))
            .with_instances(sorted(&instances));

        self.check_model(&canonical)?;
        debug!(
            used_types = self.used_types.len(),
            used_aliases = self.used_aliases.len(),
            "structure is valid"
        );

        self.check_aliases(&modules)?;
        self.check_used("type", &types, |item| item.declaration().name())?;
        self.check_used("functional", &functionals, |item| item.declaration().name())?;
        self.check_used("aspect", &aspects, |item| item.declaration().name())?;
        check_pairs(&classes, &instances)?;
        self.check_alias_lengths(&modules)?;
        debug!(package = canonical.header().name(), "model is valid");

        Ok(canonical)
    }

    // Structural validation

    fn check_model(&mut self, model: &Model) -> Result<(), ValidationError> {
        for definition in model.types() {
            self.check_type(definition)?;
        }
        for functional in model.functionals() {
            self.check_functional(functional);
        }
        for aspect in model.aspects() {
            self.check_aspect(aspect);
        }
        for class in model.classes() {
            self.check_class(class);
        }
        for instance in model.instances() {
            self.check_instance(instance)?;
        }
        Ok(())
    }

    fn check_declaration(&mut self, declaration: &Declaration) {
        self.check_parameters(declaration.parameters());
    }

    fn check_type(&mut self, definition: &Type) -> Result<(), ValidationError> {
        self.check_declaration(definition.declaration());
        self.check_abstraction(definition.abstraction());
        if let Some(enumeration) = definition.enumeration() {
            if enumeration.values().is_empty() {
                return Err(ValidationError::EmptyEnumeration {
                    name: definition.declaration().name().to_string(),
                });
            }
            self.check_parameter(enumeration.parameter());
        }
        Ok(())
    }

    fn check_functional(&mut self, functional: &Functional) {
        self.check_declaration(functional.declaration());
        self.check_parameters(functional.parameters());
        self.check_output(functional.output());
    }

    fn check_aspect(&mut self, aspect: &Aspect) {
        self.check_declaration(aspect.declaration());
        self.check_methods(aspect.methods());
    }

    fn check_class(&mut self, class: &Class) {
        self.check_declaration(class.declaration());
        for constant in class.constants() {
            self.check_abstraction(constant.abstraction());
        }
        for constructor in class.constructors() {
            self.check_parameters(constructor.parameters());
            self.check_abstraction(constructor.abstraction());
        }
        for function in class.functions() {
            self.check_parameters(function.parameters());
            self.check_output(function.output());
        }
    }

    fn check_instance(&mut self, instance: &Instance) -> Result<(), ValidationError> {
        self.check_declaration(instance.declaration());
        for attribute in instance.attributes() {
            self.check_attribute(attribute)?;
        }
        for abstraction in instance.abstractions() {
            self.check_abstraction(abstraction);
        }
        self.check_methods(instance.methods());
        Ok(())
    }

    fn check_methods(&mut self, methods: &[Method]) {
        for method in methods {
            self.check_parameters(method.parameters());
            if let Some(output) = method.output() {
                self.check_output(output);
            }
        }
    }

    fn check_attribute(&mut self, attribute: &Attribute) -> Result<(), ValidationError> {
        let name = attribute.name();
        let verb = ATTRIBUTE_NAME
            .captures(name)
            .and_then(|captures| captures.get(1))
            .map(|verb| verb.as_str())
            .ok_or_else(|| ValidationError::MalformedAttribute {
                name: name.to_string(),
            })?;

        match (verb, attribute.parameter(), attribute.abstraction()) {
            ("Set", Some(parameter), None) => {
                self.check_parameter(parameter);
                Ok(())
            }
            ("Set", _, _) => Err(ValidationError::AttributeShape {
                name: name.to_string(),
                expected: "is a setter and must take one parameter and return nothing",
            }),
            (_, None, Some(abstraction)) => {
                if verb != "Get" && !abstraction.is_plain("bool") {
                    return Err(ValidationError::NonBooleanQuestion {
                        name: name.to_string(),
                        found: abstraction.to_string(),
                    });
                }
                self.check_abstraction(abstraction);
                Ok(())
            }
            _ => Err(ValidationError::AttributeShape {
                name: name.to_string(),
                expected: "is a getter and must return a value without taking a parameter",
            }),
        }
    }

    fn check_parameters(&mut self, parameters: &[Parameter]) {
        for parameter in parameters {
            self.check_parameter(parameter);
        }
    }

    fn check_parameter(&mut self, parameter: &Parameter) {
        self.check_abstraction(parameter.abstraction());
    }

    fn check_output(&mut self, output: &Output) {
        match output {
            Output::Abstraction(abstraction) => self.check_abstraction(abstraction),
            Output::Parameters(parameters) => self.check_parameters(parameters),
        }
    }

    fn check_abstraction(&mut self, abstraction: &Abstraction) {
        match abstraction.prefix() {
            // Names qualified by an alias belong to the imported module.
            Some(Prefix::Alias(alias)) => {
                self.used_aliases.insert(alias.clone());
            }
            Some(Prefix::Map(key)) => {
                self.used_types.insert(key.clone());
                self.used_types.insert(abstraction.name().to_string());
            }
            _ => {
                self.used_types.insert(abstraction.name().to_string());
            }
        }
        for argument in abstraction.arguments() {
            self.check_abstraction(argument);
        }
    }

    // Cross-reference validation

    fn check_aliases(&self, modules: &Table<'_, Module>) -> Result<(), ValidationError> {
        match self
            .used_aliases
            .iter()
            .find(|alias| !modules.values().any(|module| module.alias() == alias.as_str()))
        {
            Some(alias) => Err(ValidationError::UnknownModuleAlias {
                alias: alias.clone(),
            }),
            None => Ok(()),
        }
    }

    fn check_used<T>(
        &self,
        family: &'static str,
        table: &Table<'_, T>,
        name: fn(&T) -> &str,
    ) -> Result<(), ValidationError> {
        for item in table.values() {
            let name = name(item);
            if !self.used_types.contains(name) {
                return Err(ValidationError::UnusedDeclaration {
                    family,
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn check_alias_lengths(&self, modules: &Table<'_, Module>) -> Result<(), ValidationError> {
        let expected = self.config.module_alias_length;
        if expected == 0 {
            return Ok(());
        }
        for module in modules.values() {
            if module.alias().chars().count() != expected {
                return Err(ValidationError::InvalidModuleAlias {
                    alias: module.alias().to_string(),
                    expected,
                });
            }
        }
        Ok(())
    }
}

/// Lower-cased `name` without its `marker` suffix.
pub fn normalized_key(name: &str, marker: Option<&str>) -> String {
    marker
        .and_then(|marker| name.strip_suffix(marker))
        .unwrap_or(name)
        .to_lowercase()
}

fn extract<'m, T>(
    family: &'static str,
    items: &'m [T],
    name: fn(&T) -> &str,
    marker: Option<&str>,
) -> Result<Table<'m, T>, ValidationError> {
    let mut table = BTreeMap::new();
    for item in items {
        let name = name(item);
        if table.insert(normalized_key(name, marker), item).is_some() {
            return Err(ValidationError::DuplicateDeclaration {
                family,
                name: name.to_string(),
            });
        }
    }
    Ok(table)
}

fn sorted<T: Clone>(table: &Table<'_, T>) -> Vec<T> {
    table.values().copied().cloned().collect()
}

fn check_pairs(
    classes: &Table<'_, Class>,
    instances: &Table<'_, Instance>,
) -> Result<(), ValidationError> {
    for (key, class) in classes {
        if !instances.contains_key(key) {
            return Err(ValidationError::MismatchedInterfaces {
                name: class.declaration().name().to_string(),
                found: "class",
                missing: "instance",
            });
        }
    }
    for (key, instance) in instances {
        if !classes.contains_key(key) {
            return Err(ValidationError::MismatchedInterfaces {
                name: instance.declaration().name().to_string(),
                found: "instance",
                missing: "class",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdl::ast::{Constructor, Header, Notice};
    use crate::mdl::parser::parse;

    const MODEL: &str = r#"/* Notice */

/* Header */
package example

import (
	abs "example.com/abstractions"
)

// Types

/* Rank */
type Rank uint8

const (
	LesserRank Rank = iota
	EqualRank
	GreaterRank
)

// Classes

/* QueueClassLike */
type QueueClassLike[V any] interface {
	// Constructors
	Make() QueueLike[V]
}

/* ListClassLike */
type ListClassLike[V any] interface {
	// Constructors
	Make() ListLike[V]
}

// Instances

/* QueueLike */
type QueueLike[V any] interface {
	// Methods
	GetRank() Rank
}

/* ListLike */
type ListLike[V any] interface {
	// Abstractions
	abs.Sequential[V]
}
"#;

    fn validate(source: &str) -> Result<Model, ValidationError> {
        let model = parse(source).expect("test model to parse");
        Validator::new(ValidationConfig::default()).validate(&model)
    }

    fn declaration(name: &str) -> Declaration {
        Declaration::new(format!("/* {} */", name), name, Vec::new())
    }

    fn bare_model() -> Model {
        Model::new(Notice::new("/* Notice */"), Header::new("/* Header */", "example"))
    }

    #[test]
    fn test_families_are_sorted_by_key() {
        let model = validate(MODEL).unwrap();
        let classes: Vec<_> = model
            .classes()
            .iter()
            .map(|class| class.declaration().name())
            .collect();
        assert_eq!(classes, ["ListClassLike", "QueueClassLike"]);
        let instances: Vec<_> = model
            .instances()
            .iter()
            .map(|instance| instance.declaration().name())
            .collect();
        assert_eq!(instances, ["ListLike", "QueueLike"]);
    }

    #[test]
    fn test_input_model_is_untouched() {
        let parsed = parse(MODEL).unwrap();
        let canonical = Validator::new(ValidationConfig::default())
            .validate(&parsed)
            .unwrap();
        assert_eq!(parsed.classes()[0].declaration().name(), "QueueClassLike");
        assert_ne!(parsed, canonical);
    }

    #[test]
    fn test_normalized_keys() {
        assert_eq!(normalized_key("ListClassLike", Some(CLASS_MARKER)), "list");
        assert_eq!(normalized_key("ListLike", Some(INSTANCE_MARKER)), "list");
        assert_eq!(normalized_key("Rank", None), "rank");
    }

    #[test]
    fn test_unknown_module_alias() {
        let source = MODEL.replace("abs.Sequential", "xyz.Sequential");
        assert_eq!(
            validate(&source).unwrap_err(),
            ValidationError::UnknownModuleAlias {
                alias: "xyz".to_string()
            }
        );
    }

    #[test]
    fn test_module_alias_match_is_exact() {
        let source = MODEL.replace("abs.Sequential", "ABS.Sequential");
        assert_eq!(
            validate(&source).unwrap_err(),
            ValidationError::UnknownModuleAlias {
                alias: "ABS".to_string()
            }
        );
    }

    #[test]
    fn test_unused_type() {
        let source = MODEL.replace("GetRank() Rank", "GetRank() int");
        // The enumeration still names `Rank` as the type of its first constant.
        assert!(validate(&source).is_ok());

        let model = bare_model().with_types(vec![Type::new(
            declaration("Size"),
            Abstraction::named("int"),
            None,
        )]);
        let error = Validator::default().validate(&model).unwrap_err();
        assert_eq!(
            error,
            ValidationError::UnusedDeclaration {
                family: "type",
                name: "Size".to_string()
            }
        );
    }

    #[test]
    fn test_class_without_instance() {
        let model = bare_model().with_classes(vec![Class::new(
            declaration("SetClassLike"),
            Vec::new(),
            vec![Constructor::new("Make", Vec::new(), Abstraction::named("int"))],
            Vec::new(),
        )]);
        let error = Validator::default().validate(&model).unwrap_err();
        assert_eq!(
            error.to_string(),
            "The class interface `SetClassLike` has no matching instance interface."
        );
    }

    #[test]
    fn test_duplicate_keys() {
        let model = bare_model().with_modules(vec![
            Module::new("abs", "example.com/one"),
            Module::new("ABS", "example.com/two"),
        ]);
        let error = Validator::default().validate(&model).unwrap_err();
        assert_eq!(
            error,
            ValidationError::DuplicateDeclaration {
                family: "module",
                name: "ABS".to_string()
            }
        );
    }

    #[test]
    fn test_alias_length_is_policy() {
        let source = MODEL
            .replace("abs \"example.com", "abstractions \"example.com")
            .replace("abs.Sequential", "abstractions.Sequential");
        assert!(matches!(
            validate(&source),
            Err(ValidationError::InvalidModuleAlias { expected: 3, .. })
        ));

        let model = parse(&source).unwrap();
        let relaxed = ValidationConfig {
            module_alias_length: 0,
        };
        assert!(Validator::new(relaxed).validate(&model).is_ok());
    }

    #[test]
    fn test_enumeration_needs_values() {
        let source = MODEL.replace("\tEqualRank\n\tGreaterRank\n", "");
        assert_eq!(
            validate(&source).unwrap_err(),
            ValidationError::EmptyEnumeration {
                name: "Rank".to_string()
            }
        );
    }

    #[test]
    fn test_state_resets_between_runs() {
        let mut validator = Validator::default();
        validator.validate(&parse(MODEL).unwrap()).unwrap();

        // `Rank` was used by the previous model only.
        let model = bare_model().with_types(vec![Type::new(
            declaration("Rank"),
            Abstraction::named("uint8"),
            None,
        )]);
        assert!(matches!(
            validator.validate(&model),
            Err(ValidationError::UnusedDeclaration { .. })
        ));
    }
}
