//! Aspect, class and instance interface definitions

use super::abstraction::Abstraction;
use super::declaration::Declaration;
use super::member::{Attribute, Constant, Constructor, Function, Method};
use serde::Serialize;

/// Suffix marking a class interface name (`ListClassLike`)
pub const CLASS_MARKER: &str = "ClassLike";

/// Suffix marking an instance interface name (`ListLike`)
pub const INSTANCE_MARKER: &str = "Like";

/// An interface that instances can mix in through their abstractions section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aspect {
    declaration: Declaration,
    methods: Vec<Method>,
}

impl Aspect {
    pub fn new(declaration: Declaration, methods: Vec<Method>) -> Self {
        Self {
            declaration,
            methods,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

/// The class-level interface of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    declaration: Declaration,
    constants: Vec<Constant>,
    constructors: Vec<Constructor>,
    functions: Vec<Function>,
}

impl Class {
    pub fn new(
        declaration: Declaration,
        constants: Vec<Constant>,
        constructors: Vec<Constructor>,
        functions: Vec<Function>,
    ) -> Self {
        Self {
            declaration,
            constants,
            constructors,
            functions,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }
}

/// The instance-level interface of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    declaration: Declaration,
    attributes: Vec<Attribute>,
    abstractions: Vec<Abstraction>,
    methods: Vec<Method>,
}

impl Instance {
    pub fn new(
        declaration: Declaration,
        attributes: Vec<Attribute>,
        abstractions: Vec<Abstraction>,
        methods: Vec<Method>,
    ) -> Self {
        Self {
            declaration,
            attributes,
            abstractions,
            methods,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn abstractions(&self) -> &[Abstraction] {
        &self.abstractions
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}
