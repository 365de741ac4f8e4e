//! Canonical text emitter
//!
//! The formatter walks a model in grammar order and writes the canonical layout:
//! tab indentation, one blank line before every section and declaration, generic
//! parameters and arguments inline, and parameter lists of more than one parameter
//! split one per line. For any model the parser produced from canonical text,
//! formatting reproduces that text exactly.
//!
//! Text accumulates in an internal buffer that every `format_*` entry point drains,
//! so an instance can be reused but must not be shared between concurrent calls.

use crate::mdl::ast::{
    Abstraction, Aspect, Attribute, Class, Constant, Constructor, Declaration, Enumeration,
    Function, Functional, Instance, Method, Model, Output, Parameter, Type,
};
use crate::mdl::parser::grammar::{
    ABSTRACTIONS_NOTE, ASPECTS_NOTE, ATTRIBUTES_NOTE, CLASSES_NOTE, CONSTANTS_NOTE,
    CONSTRUCTORS_NOTE, FUNCTIONALS_NOTE, FUNCTIONS_NOTE, INSTANCES_NOTE, METHODS_NOTE,
    TYPES_NOTE,
};
use std::fmt::Write;

const INDENT: &str = "\t";

#[derive(Debug, Default)]
pub struct Formatter {
    buffer: String,
    depth: usize,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a whole document.
    pub fn format_model(&mut self, model: &Model) -> String {
        self.model(model);
        self.drain()
    }

    /// Render a type reference, e.g. for use in generated code.
    pub fn format_abstraction(&mut self, abstraction: &Abstraction) -> String {
        self.abstraction(abstraction);
        self.drain()
    }

    /// Render a method signature without indentation or trailing newline.
    pub fn format_method(&mut self, method: &Method) -> String {
        self.method(method);
        self.drain()
    }

    fn drain(&mut self) -> String {
        self.depth = 0;
        std::mem::take(&mut self.buffer)
    }

    fn push(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn newline(&mut self) {
        self.buffer.push('\n');
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
    }

    /// Write a comment, indenting its continuation lines to the current depth.
    fn comment(&mut self, comment: &str) {
        for (index, line) in comment.split('\n').enumerate() {
            if index > 0 {
                self.newline();
                if !line.is_empty() {
                    self.indent();
                }
            }
            self.push(line);
        }
    }

    // Document

    fn model(&mut self, model: &Model) {
        self.comment(model.notice().comment());
        self.newline();
        self.newline();
        self.comment(model.header().comment());
        self.newline();
        let _ = writeln!(self.buffer, "package {}", model.header().name());

        if !model.modules().is_empty() {
            self.push("\nimport (\n");
            for module in model.modules() {
                let _ = writeln!(self.buffer, "{}{} \"{}\"", INDENT, module.alias(), module.path());
            }
            self.push(")\n");
        }

        self.top_level(TYPES_NOTE, model.types(), Self::type_definition);
        self.top_level(FUNCTIONALS_NOTE, model.functionals(), Self::functional);
        self.top_level(ASPECTS_NOTE, model.aspects(), Self::aspect);
        self.top_level(CLASSES_NOTE, model.classes(), Self::class);
        self.top_level(INSTANCES_NOTE, model.instances(), Self::instance);
    }

    fn top_level<T>(&mut self, note: &str, items: &[T], emit: fn(&mut Self, &T)) {
        if items.is_empty() {
            return;
        }
        self.newline();
        self.push(note);
        self.newline();
        for item in items {
            self.newline();
            emit(self, item);
        }
    }

    fn declaration(&mut self, declaration: &Declaration) {
        self.comment(declaration.comment());
        self.newline();
        self.push("type ");
        self.push(declaration.name());
        if declaration.is_generic() {
            self.push("[");
            self.inline_parameters(declaration.parameters());
            self.push("]");
        }
    }

    // Definitions

    fn type_definition(&mut self, definition: &Type) {
        self.declaration(definition.declaration());
        self.push(" ");
        self.abstraction(definition.abstraction());
        self.newline();
        if let Some(enumeration) = definition.enumeration() {
            self.enumeration(enumeration);
        }
    }

    fn enumeration(&mut self, enumeration: &Enumeration) {
        self.push("\nconst (\n");
        self.push(INDENT);
        self.parameter(enumeration.parameter());
        self.push(" = iota\n");
        for value in enumeration.values() {
            self.push(INDENT);
            self.push(value);
            self.newline();
        }
        self.push(")\n");
    }

    fn functional(&mut self, functional: &Functional) {
        self.declaration(functional.declaration());
        self.push(" func");
        self.parameter_list(functional.parameters());
        self.push(" ");
        self.output(functional.output());
        self.newline();
    }

    // Interfaces

    fn aspect(&mut self, aspect: &Aspect) {
        self.declaration(aspect.declaration());
        self.interface(|f| {
            f.section(METHODS_NOTE, aspect.methods(), Self::method);
        });
    }

    fn class(&mut self, class: &Class) {
        self.declaration(class.declaration());
        self.interface(|f| {
            f.section(CONSTANTS_NOTE, class.constants(), Self::constant);
            f.section(CONSTRUCTORS_NOTE, class.constructors(), Self::constructor);
            f.section(FUNCTIONS_NOTE, class.functions(), Self::function);
        });
    }

    fn instance(&mut self, instance: &Instance) {
        self.declaration(instance.declaration());
        self.interface(|f| {
            f.section(ATTRIBUTES_NOTE, instance.attributes(), Self::attribute);
            f.section(ABSTRACTIONS_NOTE, instance.abstractions(), Self::abstraction);
            f.section(METHODS_NOTE, instance.methods(), Self::method);
        });
    }

    /// ` interface {` ... `}` around the sections written by `body`.
    fn interface(&mut self, body: impl FnOnce(&mut Self)) {
        self.push(" interface {\n");
        self.depth += 1;
        let start = self.buffer.len();
        body(self);
        // Sections are separated by blank lines; the first one needs none.
        if self.buffer[start..].starts_with('\n') {
            self.buffer.remove(start);
        }
        self.depth -= 1;
        self.push("}\n");
    }

    fn section<T>(&mut self, note: &str, members: &[T], emit: fn(&mut Self, &T)) {
        if members.is_empty() {
            return;
        }
        self.newline();
        self.indent();
        self.push(note);
        self.newline();
        for member in members {
            self.indent();
            emit(self, member);
            self.newline();
        }
    }

    // Members

    fn constant(&mut self, constant: &Constant) {
        self.push(constant.name());
        self.push("() ");
        self.abstraction(constant.abstraction());
    }

    fn constructor(&mut self, constructor: &Constructor) {
        self.push(constructor.name());
        self.parameter_list(constructor.parameters());
        self.push(" ");
        self.abstraction(constructor.abstraction());
    }

    fn function(&mut self, function: &Function) {
        self.push(function.name());
        self.parameter_list(function.parameters());
        self.push(" ");
        self.output(function.output());
    }

    fn attribute(&mut self, attribute: &Attribute) {
        self.push(attribute.name());
        self.push("(");
        if let Some(parameter) = attribute.parameter() {
            self.parameter(parameter);
        }
        self.push(")");
        if let Some(abstraction) = attribute.abstraction() {
            self.push(" ");
            self.abstraction(abstraction);
        }
    }

    fn method(&mut self, method: &Method) {
        self.push(method.name());
        self.parameter_list(method.parameters());
        if let Some(output) = method.output() {
            self.push(" ");
            self.output(output);
        }
    }

    // Building blocks

    fn output(&mut self, output: &Output) {
        match output {
            Output::Abstraction(abstraction) => self.abstraction(abstraction),
            Output::Parameters(parameters) => self.parameter_list(parameters),
        }
    }

    /// `()`, `(name Type)`, or one parameter per line with trailing commas.
    fn parameter_list(&mut self, parameters: &[Parameter]) {
        match parameters {
            [] => self.push("()"),
            [parameter] => {
                self.push("(");
                self.parameter(parameter);
                self.push(")");
            }
            _ => {
                self.push("(\n");
                self.depth += 1;
                for parameter in parameters {
                    self.indent();
                    self.parameter(parameter);
                    self.push(",\n");
                }
                self.depth -= 1;
                self.indent();
                self.push(")");
            }
        }
    }

    fn inline_parameters(&mut self, parameters: &[Parameter]) {
        for (index, parameter) in parameters.iter().enumerate() {
            if index > 0 {
                self.push(", ");
            }
            self.parameter(parameter);
        }
    }

    fn parameter(&mut self, parameter: &Parameter) {
        self.push(parameter.name());
        self.push(" ");
        self.abstraction(parameter.abstraction());
    }

    fn abstraction(&mut self, abstraction: &Abstraction) {
        let _ = write!(self.buffer, "{}", abstraction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdl::ast::{Header, Module, Notice, Prefix};

    fn model() -> Model {
        Model::new(
            Notice::new("/* Notice */"),
            Header::new("/* Header */", "example"),
        )
    }

    #[test]
    fn test_minimal_model() {
        let text = Formatter::new().format_model(&model());
        assert_eq!(text, "/* Notice */\n\n/* Header */\npackage example\n");
    }

    #[test]
    fn test_imports() {
        let text = Formatter::new()
            .format_model(&model().with_modules(vec![Module::new("abs", "example.com/abs")]));
        assert!(text.ends_with("package example\n\nimport (\n\tabs \"example.com/abs\"\n)\n"));
    }

    #[test]
    fn test_parameter_list_layouts() {
        let value = Parameter::new("value", Abstraction::named("V"));
        let index = Parameter::new("index", Abstraction::named("int"));
        let mut formatter = Formatter::new();

        let none = Method::new("Clear", Vec::new(), None);
        assert_eq!(formatter.format_method(&none), "Clear()");

        let one = Method::new("AppendValue", vec![value.clone()], None);
        assert_eq!(formatter.format_method(&one), "AppendValue(value V)");

        let two = Method::new(
            "SetValue",
            vec![index, value],
            Some(Output::Abstraction(Abstraction::named("bool"))),
        );
        assert_eq!(
            formatter.format_method(&two),
            "SetValue(\n\tindex int,\n\tvalue V,\n) bool"
        );
    }

    #[test]
    fn test_buffer_is_drained_between_calls() {
        let mut formatter = Formatter::new();
        let abstraction = Abstraction::new(
            Some(Prefix::Map("string".to_string())),
            "V",
            Vec::new(),
        );
        assert_eq!(formatter.format_abstraction(&abstraction), "map[string]V");
        assert_eq!(formatter.format_abstraction(&abstraction), "map[string]V");
    }

    #[test]
    fn test_empty_interface() {
        let aspect = Aspect::new(
            Declaration::new("/* Empty */", "Empty", Vec::new()),
            Vec::new(),
        );
        let text = Formatter::new().format_model(&model().with_aspects(vec![aspect]));
        assert!(text.ends_with("\n// Aspects\n\n/* Empty */\ntype Empty interface {\n}\n"));
    }

    #[test]
    fn test_comments_follow_depth() {
        let mut formatter = Formatter::new();
        formatter.depth = 1;
        formatter.comment("/*\n\tFirst.\n\n    Second.\n*/");
        assert_eq!(formatter.buffer, "/*\n\t\tFirst.\n\n\t    Second.\n\t*/");
    }
}
