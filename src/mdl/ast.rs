//! AST node set for the model notation
//!
//!     Every grammar rule has a node type here. Nodes are plain immutable data: they are
//!     built once by the parser (or by the validator when it produces the canonical
//!     model), own their children outright, and only expose accessors.
//!
//!     Optional children are `Option`s. Repeated children are `Vec`s whose order is the
//!     source order; a grammar construct written as `X+` that is absent from the source
//!     is an empty `Vec`.
//!
//! Layout
//!
//!     - [model]: the root [Model] plus [Notice], [Header] and [Module]
//!     - [declaration]: the comment, name and generic parameters shared by every
//!       top-level declaration
//!     - [abstraction]: type references and their prefixes
//!     - [parameter]: named parameters and signature results
//!     - [definition]: [Type], [Enumeration] and [Functional]
//!     - [interface]: [Aspect], [Class] and [Instance]
//!     - [member]: the members found inside interfaces
//!     - [substitution]: generic parameter binding for emitters

pub mod abstraction;
pub mod declaration;
pub mod definition;
pub mod interface;
pub mod member;
pub mod model;
pub mod parameter;
pub mod substitution;

pub use abstraction::{Abstraction, Prefix};
pub use declaration::Declaration;
pub use definition::{Enumeration, Functional, Type};
pub use interface::{Aspect, Class, Instance};
pub use member::{Attribute, Constant, Constructor, Function, Method};
pub use model::{Header, Model, Module, Notice};
pub use parameter::{Output, Parameter};
pub use substitution::{GenericBindings, PreconditionError};
