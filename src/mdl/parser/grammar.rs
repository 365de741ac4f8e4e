//! Grammar of the model notation
//!
//! The productions are data here so that syntax errors can show the fragment of the
//! grammar each active rule was trying to match. The parser in
//! [engine](super::engine) implements one function per production.

/// Productions by rule name, in the order the grammar is usually read
pub const GRAMMAR: &[(&str, &str)] = &[
    ("Model", "Notice Header Modules? Types? Functionals? Aspects? Classes? Instances?"),
    ("Notice", "comment"),
    ("Header", "comment \"package\" identifier"),
    ("Modules", "\"import\" \"(\" Module+ \")\""),
    ("Module", "identifier text"),
    ("Types", "\"// Types\" Type+"),
    ("Type", "Declaration Abstraction Enumeration?"),
    ("Declaration", "comment \"type\" identifier (\"[\" Parameters \"]\")?"),
    ("Parameters", "Parameter (\",\" Parameter)* \",\"?"),
    ("Parameter", "identifier Abstraction"),
    ("Abstraction", "Prefix? identifier (\"[\" Arguments \"]\")?"),
    (
        "Prefix",
        "\"[\" \"]\" | \"map\" \"[\" identifier \"]\" | \"chan\" | identifier \".\"",
    ),
    ("Arguments", "Abstraction (\",\" Abstraction)* \",\"?"),
    (
        "Enumeration",
        "\"const\" \"(\" Parameter \"=\" \"iota\" identifier* \")\"",
    ),
    ("Functionals", "\"// Functionals\" Functional+"),
    ("Functional", "Declaration \"func\" \"(\" Parameters? \")\" Result"),
    ("Result", "Abstraction | \"(\" Parameters \")\""),
    ("Aspects", "\"// Aspects\" Aspect+"),
    ("Aspect", "Declaration \"interface\" \"{\" Methods? \"}\""),
    ("Classes", "\"// Classes\" Class+"),
    (
        "Class",
        "Declaration \"interface\" \"{\" Constants? Constructors? Functions? \"}\"",
    ),
    ("Constants", "\"// Constants\" Constant+"),
    ("Constant", "identifier \"(\" \")\" Abstraction"),
    ("Constructors", "\"// Constructors\" Constructor+"),
    ("Constructor", "identifier \"(\" Parameters? \")\" Abstraction"),
    ("Functions", "\"// Functions\" Function+"),
    ("Function", "identifier \"(\" Parameters? \")\" Result"),
    ("Instances", "\"// Instances\" Instance+"),
    (
        "Instance",
        "Declaration \"interface\" \"{\" Attributes? Abstractions? Methods? \"}\"",
    ),
    ("Attributes", "\"// Attributes\" Attribute+"),
    ("Attribute", "identifier \"(\" Parameter? \")\" Abstraction?"),
    ("Abstractions", "\"// Abstractions\" Abstraction+"),
    ("Methods", "\"// Methods\" Method+"),
    ("Method", "identifier \"(\" Parameters? \")\" Result?"),
];

/// Section notes, shared with the formatter
pub const TYPES_NOTE: &str = "// Types";
pub const FUNCTIONALS_NOTE: &str = "// Functionals";
pub const ASPECTS_NOTE: &str = "// Aspects";
pub const CLASSES_NOTE: &str = "// Classes";
pub const INSTANCES_NOTE: &str = "// Instances";
pub const CONSTANTS_NOTE: &str = "// Constants";
pub const CONSTRUCTORS_NOTE: &str = "// Constructors";
pub const FUNCTIONS_NOTE: &str = "// Functions";
pub const ATTRIBUTES_NOTE: &str = "// Attributes";
pub const ABSTRACTIONS_NOTE: &str = "// Abstractions";
pub const METHODS_NOTE: &str = "// Methods";

/// Look up the production for `rule`.
pub fn production(rule: &str) -> Option<&'static str> {
    GRAMMAR
        .iter()
        .find(|(name, _)| *name == rule)
        .map(|(_, production)| *production)
}
