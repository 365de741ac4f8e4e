//! Model, notice, header and module element definitions

use super::definition::{Functional, Type};
use super::interface::{Aspect, Class, Instance};
use serde::Serialize;

/// The leading comment of a document, usually a copyright notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    comment: String,
}

impl Notice {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// The package comment and `package name` clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    comment: String,
    name: String,
}

impl Header {
    pub fn new(comment: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            name: name.into(),
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One imported module: `abs "example.com/abstractions"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    alias: String,
    path: String,
}

impl Module {
    /// `path` is the module path without its surrounding quotes.
    pub fn new(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            path: path.into(),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Root node of one parsed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    notice: Notice,
    header: Header,
    modules: Vec<Module>,
    types: Vec<Type>,
    functionals: Vec<Functional>,
    aspects: Vec<Aspect>,
    classes: Vec<Class>,
    instances: Vec<Instance>,
}

impl Model {
    pub fn new(notice: Notice, header: Header) -> Self {
        Self {
            notice,
            header,
            modules: Vec::new(),
            types: Vec::new(),
            functionals: Vec::new(),
            aspects: Vec::new(),
            classes: Vec::new(),
            instances: Vec::new(),
        }
    }

    pub fn with_modules(mut self, modules: Vec<Module>) -> Self {
        self.modules = modules;
        self
    }

    pub fn with_types(mut self, types: Vec<Type>) -> Self {
        self.types = types;
        self
    }

    pub fn with_functionals(mut self, functionals: Vec<Functional>) -> Self {
        self.functionals = functionals;
        self
    }

    pub fn with_aspects(mut self, aspects: Vec<Aspect>) -> Self {
        self.aspects = aspects;
        self
    }

    pub fn with_classes(mut self, classes: Vec<Class>) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_instances(mut self, instances: Vec<Instance>) -> Self {
        self.instances = instances;
        self
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn functionals(&self) -> &[Functional] {
        &self.functionals
    }

    pub fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }
}
