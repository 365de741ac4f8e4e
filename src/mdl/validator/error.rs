use thiserror::Error;

/// A violated semantic invariant. Validation stops at the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The {family} `{name}` is declared more than once.")]
    DuplicateDeclaration { family: &'static str, name: String },

    #[error("The module alias `{alias}` is used but no module is imported under it.")]
    UnknownModuleAlias { alias: String },

    #[error("The module alias `{alias}` must be exactly {expected} characters long.")]
    InvalidModuleAlias { alias: String, expected: usize },

    #[error("The {family} `{name}` is declared but never referenced.")]
    UnusedDeclaration { family: &'static str, name: String },

    #[error("The {found} interface `{name}` has no matching {missing} interface.")]
    MismatchedInterfaces {
        name: String,
        found: &'static str,
        missing: &'static str,
    },

    #[error(
        "The attribute name `{name}` must be Get, Set, Is, Was, Has, Are, Were or Had followed by a capitalized name."
    )]
    MalformedAttribute { name: String },

    #[error("The attribute `{name}` {expected}.")]
    AttributeShape { name: String, expected: &'static str },

    #[error("The attribute `{name}` must return `bool`, not `{found}`.")]
    NonBooleanQuestion { name: String, found: String },

    #[error("The enumeration of `{name}` lists no values after its first constant.")]
    EmptyEnumeration { name: String },
}
