//! # mdl
//!
//! A compiler for the mdl class model notation.
//!
//! ## Testing
//!
//! Curated sample models live under `docs/samples/` and are reachable through
//! [`ModelSources`](mdl::processor::model_sources::ModelSources). Tests should
//! prefer them over ad-hoc model text whenever a complete document is needed.

pub mod mdl;
