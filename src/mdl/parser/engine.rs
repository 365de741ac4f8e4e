//! Recursive descent rules
//!
//!     One method per grammar production (see [grammar](super::grammar)). Every rule
//!     returns a [Parsed] value:
//!
//!     - `Ok(Some(node))`: the rule matched and its tokens are consumed.
//!     - `Ok(None)`: the rule did not match. Every token it took has been pushed back,
//!       so the caller can try an alternative or skip an optional construct.
//!     - `Err(error)`: a required part was missing after the rule committed.
//!
//!     Rules run through [Engine::rule], which keeps the stack of active rule names for
//!     diagnostics and rewinds the token stream when the body reports no match. Rule
//!     bodies therefore return `Ok(None)` at any point without tidying up.
//!
//!     The grammar has one real ambiguity: inside interfaces an optional result or
//!     abstraction is followed by the next member, which also starts with an
//!     identifier. An abstraction whose identifier is directly followed by `(` is
//!     therefore rejected, leaving the identifier to the member rule.

use super::error::{ParseError, SyntaxError};
use super::grammar::{
    ABSTRACTIONS_NOTE, ASPECTS_NOTE, ATTRIBUTES_NOTE, CLASSES_NOTE, CONSTANTS_NOTE,
    CONSTRUCTORS_NOTE, FUNCTIONALS_NOTE, FUNCTIONS_NOTE, INSTANCES_NOTE, METHODS_NOTE,
    TYPES_NOTE,
};
use super::stream::TokenStream;
use crate::mdl::ast::{
    Abstraction, Aspect, Attribute, Class, Constant, Constructor, Declaration, Enumeration,
    Function, Functional, Header, Instance, Method, Model, Module, Notice, Output, Parameter,
    Prefix, Type,
};
use crate::mdl::lexer::{SourceLocation, Token, TokenKind};

/// Outcome of one grammar rule
pub type Parsed<T> = Result<Option<T>, ParseError>;

pub struct Engine<'src> {
    location: SourceLocation<'src>,
    stream: TokenStream<'src>,
    rules: Vec<&'static str>,
}

impl<'src> Engine<'src> {
    pub fn new(source: &'src str, tokens: impl Iterator<Item = Token> + 'src) -> Self {
        Self {
            location: SourceLocation::new(source),
            stream: TokenStream::new(tokens),
            rules: Vec::new(),
        }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.stream.position()
    }

    /// Number of consumed tokens still held for backtracking.
    pub fn retained(&self) -> usize {
        self.stream.retained()
    }

    // Plumbing

    fn rule<T>(
        &mut self,
        name: &'static str,
        body: impl FnOnce(&mut Self) -> Parsed<T>,
    ) -> Parsed<T> {
        let checkpoint = self.stream.checkpoint();
        self.rules.push(name);
        let result = body(self);
        self.rules.pop();
        match result {
            Ok(None) => self.stream.rewind(checkpoint),
            _ => self.stream.commit(checkpoint),
        }
        result
    }

    fn lexical(&self, token: &Token) -> ParseError {
        ParseError::Lexical {
            line: token.line(),
            column: token.column(),
            text: token.text().to_string(),
            excerpt: self.location.excerpt(token.line(), token.column()),
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let token = self.stream.next().ok_or(ParseError::TokenStreamClosed)?;
        if token.kind() == TokenKind::Error {
            return Err(self.lexical(&token));
        }
        Ok(token)
    }

    /// Build the error for a required `expected` that is not next in the stream.
    fn unexpected(&mut self, expected: &str) -> ParseError {
        let Some(token) = self.stream.next() else {
            return ParseError::TokenStreamClosed;
        };
        self.stream.push_back();
        if token.kind() == TokenKind::Error {
            return self.lexical(&token);
        }
        let excerpt = self.location.excerpt(token.line(), token.column());
        ParseError::Syntax(Box::new(SyntaxError::new(
            token,
            expected,
            self.rules.clone(),
            excerpt,
        )))
    }

    fn take_kind(&mut self, kind: TokenKind) -> Result<Option<Token>, ParseError> {
        let token = self.next_token()?;
        if token.kind() == kind {
            Ok(Some(token))
        } else {
            self.stream.push_back();
            Ok(None)
        }
    }

    fn take_delimiter(&mut self, text: &str) -> Result<bool, ParseError> {
        let token = self.next_token()?;
        if token.is_delimiter(text) {
            Ok(true)
        } else {
            self.stream.push_back();
            Ok(false)
        }
    }

    fn peek_delimiter(&mut self, text: &str) -> Result<bool, ParseError> {
        let found = self.take_delimiter(text)?;
        if found {
            self.stream.push_back();
        }
        Ok(found)
    }

    fn take_note(&mut self, text: &str) -> Result<bool, ParseError> {
        match self.take_kind(TokenKind::Note)? {
            Some(token) if token.text() == text => Ok(true),
            Some(_) => {
                self.stream.push_back();
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn take_name(&mut self) -> Result<Option<String>, ParseError> {
        Ok(self.take_kind(TokenKind::Name)?.map(Token::into_text))
    }

    fn require_delimiter(&mut self, text: &str) -> Result<(), ParseError> {
        if self.take_delimiter(text)? {
            Ok(())
        } else {
            Err(self.unexpected(&format!("\"{}\"", text)))
        }
    }

    fn require_name(&mut self) -> Result<String, ParseError> {
        match self.take_name()? {
            Some(name) => Ok(name),
            None => Err(self.unexpected("identifier")),
        }
    }

    fn required<T>(
        &mut self,
        expected: &str,
        rule: fn(&mut Self) -> Parsed<T>,
    ) -> Result<T, ParseError> {
        match rule(self)? {
            Some(node) => Ok(node),
            None => Err(self.unexpected(expected)),
        }
    }

    /// Zero or more matches, greedily.
    fn many<T>(&mut self, rule: fn(&mut Self) -> Parsed<T>) -> Result<Vec<T>, ParseError> {
        let mut nodes = Vec::new();
        while let Some(node) = rule(self)? {
            nodes.push(node);
        }
        Ok(nodes)
    }

    fn one_or_more<T>(
        &mut self,
        expected: &str,
        rule: fn(&mut Self) -> Parsed<T>,
    ) -> Result<Vec<T>, ParseError> {
        let first = self.required(expected, rule)?;
        let mut nodes = vec![first];
        nodes.extend(self.many(rule)?);
        Ok(nodes)
    }

    /// `X ("," X)* ","?`
    fn separated<T>(&mut self, rule: fn(&mut Self) -> Parsed<T>) -> Parsed<Vec<T>> {
        let Some(first) = rule(self)? else {
            return Ok(None);
        };
        let mut nodes = vec![first];
        while self.take_delimiter(",")? {
            match rule(self)? {
                Some(node) => nodes.push(node),
                None => break,
            }
        }
        Ok(Some(nodes))
    }

    /// `note X+`, absent when the note is.
    ///
    /// The section is committed once its note matches, so the tokens of earlier
    /// items are not held while later ones are parsed.
    fn section<T>(
        &mut self,
        name: &'static str,
        note: &'static str,
        item: &'static str,
        rule: fn(&mut Self) -> Parsed<T>,
    ) -> Result<Vec<T>, ParseError> {
        self.rules.push(name);
        let items = match self.take_note(note) {
            Ok(true) => self.one_or_more(item, rule),
            Ok(false) => Ok(Vec::new()),
            Err(error) => Err(error),
        };
        self.rules.pop();
        items
    }

    // Document structure

    /// Parse a complete document, which must end at the end of the stream.
    pub fn model(&mut self) -> Result<Model, ParseError> {
        self.rules.push("Model");
        let model = self.model_body();
        self.rules.pop();
        model
    }

    fn model_body(&mut self) -> Result<Model, ParseError> {
        let notice = self.required("Notice", Self::notice)?;
        let header = self.required("Header", Self::header)?;
        let modules = self.modules()?.unwrap_or_default();
        let types = self.section("Types", TYPES_NOTE, "Type", Self::type_definition)?;
        let functionals =
            self.section("Functionals", FUNCTIONALS_NOTE, "Functional", Self::functional)?;
        let aspects = self.section("Aspects", ASPECTS_NOTE, "Aspect", Self::aspect)?;
        let classes = self.section("Classes", CLASSES_NOTE, "Class", Self::class)?;
        let instances = self.section("Instances", INSTANCES_NOTE, "Instance", Self::instance)?;

        if self.take_kind(TokenKind::Eof)?.is_none() {
            return Err(self.unexpected("end of input"));
        }

        Ok(Model::new(notice, header)
            .with_modules(modules)
            .with_types(types)
            .with_functionals(functionals)
            .with_aspects(aspects)
            .with_classes(classes)
            .with_instances(instances))
    }

    fn notice(&mut self) -> Parsed<Notice> {
        self.rule("Notice", |p| {
            Ok(p.take_kind(TokenKind::Comment)?
                .map(|comment| Notice::new(comment.into_text())))
        })
    }

    fn header(&mut self) -> Parsed<Header> {
        self.rule("Header", |p| {
            let Some(comment) = p.take_kind(TokenKind::Comment)? else {
                return Ok(None);
            };
            p.require_delimiter("package")?;
            let name = p.require_name()?;
            Ok(Some(Header::new(comment.into_text(), name)))
        })
    }

    fn modules(&mut self) -> Parsed<Vec<Module>> {
        self.rule("Modules", |p| {
            if !p.take_delimiter("import")? {
                return Ok(None);
            }
            p.require_delimiter("(")?;
            let modules = p.one_or_more("Module", Self::module)?;
            p.require_delimiter(")")?;
            Ok(Some(modules))
        })
    }

    fn module(&mut self) -> Parsed<Module> {
        self.rule("Module", |p| {
            let Some(alias) = p.take_name()? else {
                return Ok(None);
            };
            let Some(text) = p.take_kind(TokenKind::Text)? else {
                return Err(p.unexpected("text"));
            };
            let quoted = text.text();
            let path = quoted
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or(quoted);
            Ok(Some(Module::new(alias, path)))
        })
    }

    // Shared building blocks

    fn declaration(&mut self) -> Parsed<Declaration> {
        self.rule("Declaration", |p| {
            let Some(comment) = p.take_kind(TokenKind::Comment)? else {
                return Ok(None);
            };
            p.require_delimiter("type")?;
            let name = p.require_name()?;

            // `[` either opens the generic parameters or starts an array prefix of
            // the type's abstraction.
            let mut parameters = Vec::new();
            if p.take_delimiter("[")? {
                match p.parameters()? {
                    Some(list) => {
                        p.require_delimiter("]")?;
                        parameters = list;
                    }
                    None => p.stream.push_back(),
                }
            }
            Ok(Some(Declaration::new(comment.into_text(), name, parameters)))
        })
    }

    fn parameters(&mut self) -> Parsed<Vec<Parameter>> {
        self.rule("Parameters", |p| p.separated(Self::parameter))
    }

    fn parameter(&mut self) -> Parsed<Parameter> {
        self.rule("Parameter", |p| {
            let Some(name) = p.take_name()? else {
                return Ok(None);
            };
            let abstraction = p.required("Abstraction", Self::abstraction)?;
            Ok(Some(Parameter::new(name, abstraction)))
        })
    }

    fn abstraction(&mut self) -> Parsed<Abstraction> {
        self.rule("Abstraction", |p| {
            let prefix = p.prefix()?;
            let Some(name) = p.take_name()? else {
                return Ok(None);
            };
            // A name followed by `(` starts the next member.
            if p.peek_delimiter("(")? {
                return Ok(None);
            }

            let mut arguments = Vec::new();
            if p.take_delimiter("[")? {
                match p.arguments()? {
                    Some(list) => {
                        p.require_delimiter("]")?;
                        arguments = list;
                    }
                    None => p.stream.push_back(),
                }
            }
            Ok(Some(Abstraction::new(prefix, name, arguments)))
        })
    }

    fn prefix(&mut self) -> Parsed<Prefix> {
        self.rule("Prefix", |p| {
            if p.take_delimiter("[")? {
                return Ok(p.take_delimiter("]")?.then_some(Prefix::Array));
            }
            if p.take_delimiter("map")? {
                p.require_delimiter("[")?;
                let key = p.require_name()?;
                p.require_delimiter("]")?;
                return Ok(Some(Prefix::Map(key)));
            }
            if p.take_delimiter("chan")? {
                return Ok(Some(Prefix::Channel));
            }
            match p.take_name()? {
                Some(alias) if p.take_delimiter(".")? => Ok(Some(Prefix::Alias(alias))),
                _ => Ok(None),
            }
        })
    }

    fn arguments(&mut self) -> Parsed<Vec<Abstraction>> {
        self.rule("Arguments", |p| p.separated(Self::abstraction))
    }

    fn output(&mut self) -> Parsed<Output> {
        self.rule("Result", |p| {
            if let Some(abstraction) = p.abstraction()? {
                return Ok(Some(Output::Abstraction(abstraction)));
            }
            if !p.take_delimiter("(")? {
                return Ok(None);
            }
            let parameters = p.required("Parameters", Self::parameters)?;
            p.require_delimiter(")")?;
            Ok(Some(Output::Parameters(parameters)))
        })
    }

    /// `"(" Parameters? ")"`
    fn signature(&mut self) -> Result<Vec<Parameter>, ParseError> {
        self.require_delimiter("(")?;
        let parameters = self.parameters()?.unwrap_or_default();
        self.require_delimiter(")")?;
        Ok(parameters)
    }

    // Definitions

    fn type_definition(&mut self) -> Parsed<Type> {
        self.rule("Type", |p| {
            let Some(declaration) = p.declaration()? else {
                return Ok(None);
            };
            let abstraction = p.required("Abstraction", Self::abstraction)?;
            let enumeration = p.enumeration()?;
            Ok(Some(Type::new(declaration, abstraction, enumeration)))
        })
    }

    fn enumeration(&mut self) -> Parsed<Enumeration> {
        self.rule("Enumeration", |p| {
            if !p.take_delimiter("const")? {
                return Ok(None);
            }
            p.require_delimiter("(")?;
            let parameter = p.required("Parameter", Self::parameter)?;
            p.require_delimiter("=")?;
            p.require_delimiter("iota")?;
            let mut values = Vec::new();
            while let Some(value) = p.take_name()? {
                values.push(value);
            }
            p.require_delimiter(")")?;
            Ok(Some(Enumeration::new(parameter, values)))
        })
    }

    fn functional(&mut self) -> Parsed<Functional> {
        self.rule("Functional", |p| {
            let Some(declaration) = p.declaration()? else {
                return Ok(None);
            };
            p.require_delimiter("func")?;
            let parameters = p.signature()?;
            let output = p.required("Result", Self::output)?;
            Ok(Some(Functional::new(declaration, parameters, output)))
        })
    }

    // Interfaces

    /// `Declaration "interface" "{"`, the opening shared by every interface.
    fn interface_opening(&mut self) -> Parsed<Declaration> {
        let Some(declaration) = self.declaration()? else {
            return Ok(None);
        };
        self.require_delimiter("interface")?;
        self.require_delimiter("{")?;
        Ok(Some(declaration))
    }

    fn aspect(&mut self) -> Parsed<Aspect> {
        self.rule("Aspect", |p| {
            let Some(declaration) = p.interface_opening()? else {
                return Ok(None);
            };
            let methods = p.section("Methods", METHODS_NOTE, "Method", Self::method)?;
            p.require_delimiter("}")?;
            Ok(Some(Aspect::new(declaration, methods)))
        })
    }

    fn class(&mut self) -> Parsed<Class> {
        self.rule("Class", |p| {
            let Some(declaration) = p.interface_opening()? else {
                return Ok(None);
            };
            let constants = p.section("Constants", CONSTANTS_NOTE, "Constant", Self::constant)?;
            let constructors = p.section(
                "Constructors",
                CONSTRUCTORS_NOTE,
                "Constructor",
                Self::constructor,
            )?;
            let functions = p.section("Functions", FUNCTIONS_NOTE, "Function", Self::function)?;
            p.require_delimiter("}")?;
            Ok(Some(Class::new(declaration, constants, constructors, functions)))
        })
    }

    fn instance(&mut self) -> Parsed<Instance> {
        self.rule("Instance", |p| {
            let Some(declaration) = p.interface_opening()? else {
                return Ok(None);
            };
            let attributes =
                p.section("Attributes", ATTRIBUTES_NOTE, "Attribute", Self::attribute)?;
            let abstractions = p.section(
                "Abstractions",
                ABSTRACTIONS_NOTE,
                "Abstraction",
                Self::abstraction,
            )?;
            let methods = p.section("Methods", METHODS_NOTE, "Method", Self::method)?;
            p.require_delimiter("}")?;
            Ok(Some(Instance::new(declaration, attributes, abstractions, methods)))
        })
    }

    // Members

    fn constant(&mut self) -> Parsed<Constant> {
        self.rule("Constant", |p| {
            let Some(name) = p.take_name()? else {
                return Ok(None);
            };
            p.require_delimiter("(")?;
            p.require_delimiter(")")?;
            let abstraction = p.required("Abstraction", Self::abstraction)?;
            Ok(Some(Constant::new(name, abstraction)))
        })
    }

    fn constructor(&mut self) -> Parsed<Constructor> {
        self.rule("Constructor", |p| {
            let Some(name) = p.take_name()? else {
                return Ok(None);
            };
            let parameters = p.signature()?;
            let abstraction = p.required("Abstraction", Self::abstraction)?;
            Ok(Some(Constructor::new(name, parameters, abstraction)))
        })
    }

    fn function(&mut self) -> Parsed<Function> {
        self.rule("Function", |p| {
            let Some(name) = p.take_name()? else {
                return Ok(None);
            };
            let parameters = p.signature()?;
            let output = p.required("Result", Self::output)?;
            Ok(Some(Function::new(name, parameters, output)))
        })
    }

    fn attribute(&mut self) -> Parsed<Attribute> {
        self.rule("Attribute", |p| {
            let Some(name) = p.take_name()? else {
                return Ok(None);
            };
            p.require_delimiter("(")?;
            let parameter = p.parameter()?;
            p.require_delimiter(")")?;
            let abstraction = p.abstraction()?;
            Ok(Some(Attribute::new(name, parameter, abstraction)))
        })
    }

    fn method(&mut self) -> Parsed<Method> {
        self.rule("Method", |p| {
            let Some(name) = p.take_name()? else {
                return Ok(None);
            };
            let parameters = p.signature()?;
            let output = p.output()?;
            Ok(Some(Method::new(name, parameters, output)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdl::lexer::Tokenizer;

    fn engine(source: &str) -> Engine<'_> {
        Engine::new(source, Tokenizer::new(source))
    }

    fn parse(source: &str) -> Result<Model, ParseError> {
        engine(source).model()
    }

    const PREAMBLE: &str = "/* Notice */\n\n/* Header */\npackage example\n";

    #[test]
    fn test_minimal_model() {
        let model = parse(PREAMBLE).unwrap();
        assert_eq!(model.notice().comment(), "/* Notice */");
        assert_eq!(model.header().comment(), "/* Header */");
        assert_eq!(model.header().name(), "example");
        assert!(model.modules().is_empty());
        assert!(model.types().is_empty());
    }

    #[test]
    fn test_enumerated_type_keeps_value_order() {
        let source = format!(
            "{}\n// Types\n\n/* State */\ntype State uint8\n\nconst (\n\tUndefinedState State = iota\n\tReady\n\tRunning\n\tStopped\n)\n",
            PREAMBLE
        );
        let model = parse(&source).unwrap();
        assert_eq!(model.types().len(), 1);
        let enumeration = model.types()[0].enumeration().unwrap();
        assert_eq!(enumeration.parameter().name(), "UndefinedState");
        assert_eq!(enumeration.values(), ["Ready", "Running", "Stopped"]);
    }

    #[test]
    fn test_modules_strip_quotes() {
        let source = format!("{}\nimport (\n\tabs \"example.com/abs\"\n)\n", PREAMBLE);
        let model = parse(&source).unwrap();
        assert_eq!(model.modules()[0].alias(), "abs");
        assert_eq!(model.modules()[0].path(), "example.com/abs");
    }

    #[test]
    fn test_prefixes() {
        let mut p = engine("[]V map[string]V chan V abs.Sequential[V]");
        let array = p.abstraction().unwrap().unwrap();
        assert_eq!(array.prefix(), Some(&Prefix::Array));
        let map = p.abstraction().unwrap().unwrap();
        assert_eq!(map.prefix(), Some(&Prefix::Map("string".to_string())));
        let channel = p.abstraction().unwrap().unwrap();
        assert_eq!(channel.prefix(), Some(&Prefix::Channel));
        let alias = p.abstraction().unwrap().unwrap();
        assert_eq!(alias.alias(), Some("abs"));
        assert_eq!(alias.arguments().len(), 1);
    }

    #[test]
    fn test_abstraction_rejects_member_names() {
        let mut p = engine("GetValue(index int) V");
        assert_eq!(p.abstraction().unwrap(), None);
        assert_eq!(p.position(), 0);
    }

    #[test]
    fn test_failed_optional_rule_restores_position() {
        let mut p = engine("abs.GetValue(");
        assert_eq!(p.abstraction().unwrap(), None);
        assert_eq!(p.position(), 0);
        assert_eq!(p.take_name().unwrap().as_deref(), Some("abs"));
    }

    #[test]
    fn test_declaration_array_type_is_not_generics() {
        let mut p = engine("/* Values */\ntype Values []string\n");
        let definition = p.type_definition().unwrap().unwrap();
        assert!(!definition.declaration().is_generic());
        assert_eq!(definition.abstraction().prefix(), Some(&Prefix::Array));
    }

    #[test]
    fn test_trailing_commas_are_accepted() {
        let mut p = engine("(\n\tfirst V,\n\tsecond V,\n) Rank");
        let parameters = p.signature().unwrap();
        assert_eq!(parameters.len(), 2);
        assert!(p.output().unwrap().is_some());
    }

    #[test]
    fn test_method_without_result_before_next_method() {
        let mut p = engine("AppendValue(value V)\n\tRemoveAll()\n}");
        let first = p.method().unwrap().unwrap();
        assert_eq!(first.name(), "AppendValue");
        assert!(first.output().is_none());
        let second = p.method().unwrap().unwrap();
        assert_eq!(second.name(), "RemoveAll");
        assert!(p.peek_delimiter("}").unwrap());
    }

    #[test]
    fn test_multi_valued_result() {
        let mut p = engine("GetValue(index int) (\n\tvalue V,\n\tok bool,\n)");
        let method = p.method().unwrap().unwrap();
        let output = method.output().unwrap();
        assert_eq!(output.parameters().len(), 2);
    }

    #[test]
    fn test_unclosed_parameter_list_in_constructor() {
        let source = format!(
            "{}\n// Classes\n\n/* ListClassLike */\ntype ListClassLike interface {{\n\t// Constructors\n\tMakeWith(value V, other)\n}}\n",
            PREAMBLE
        );
        let error = parse(&source).unwrap_err();
        let syntax = error.syntax().unwrap();
        assert_eq!(syntax.expected(), "Abstraction");
        assert_eq!(syntax.token().text(), ")");
        assert!(syntax
            .rule_chain()
            .ends_with("Constructor → Parameters → Parameter → Abstraction"));
    }

    #[test]
    fn test_missing_closing_parenthesis() {
        let source = format!(
            "{}\n// Classes\n\n/* ListClassLike */\ntype ListClassLike interface {{\n\t// Constructors\n\tMakeWith(value V ListLike\n}}\n",
            PREAMBLE
        );
        let error = parse(&source).unwrap_err();
        let syntax = error.syntax().unwrap();
        assert_eq!(syntax.expected(), "\")\"");
        assert_eq!(syntax.token().text(), "ListLike");
        // The parameter list itself matched; the closing parenthesis belongs to the
        // member rule.
        assert_eq!(
            syntax.rule_chain(),
            "Model → Classes → Class → Constructors → Constructor → \")\""
        );
    }

    #[test]
    fn test_parsed_tokens_are_released() {
        let source = include_str!("../../../docs/samples/collection.mdl");
        let mut p = engine(source);
        p.model().unwrap();
        assert_eq!(p.position(), crate::mdl::lexer::tokenize(source).len());
        assert_eq!(p.retained(), 1);
    }

    #[test]
    fn test_committed_definitions_are_not_retained() {
        let mut p = engine(concat!(
            "/* A */\ntype A int\n\n",
            "/* B */\ntype B []string\n\n",
            "/* C */\ntype C map[string]B\n",
        ));
        for name in ["A", "B", "C"] {
            let definition = p.type_definition().unwrap().unwrap();
            assert_eq!(definition.declaration().name(), name);
            assert!(p.retained() <= 1);
        }
        assert_eq!(p.position(), 18);
    }

    #[test]
    fn test_lexical_error_surfaces() {
        let error = parse("/* Notice */\n/* Header */\npackage example\n@").unwrap_err();
        assert!(matches!(
            error,
            ParseError::Lexical { line: 4, column: 1, .. }
        ));
    }

    #[test]
    fn test_trailing_garbage_expects_end_of_input() {
        let error = parse(&format!("{}\n// Typos\n", PREAMBLE)).unwrap_err();
        assert_eq!(error.syntax().unwrap().expected(), "end of input");
    }

    #[test]
    fn test_closed_stream_without_eof() {
        let source = "/* Notice */";
        let tokens = Tokenizer::new(source).filter(|token| !token.is_eof());
        let error = Engine::new(source, tokens).model().unwrap_err();
        assert_eq!(error, ParseError::TokenStreamClosed);
    }
}
