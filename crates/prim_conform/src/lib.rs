//! Conformance harness for the primitive operations.
//!
//! A [`Suite`] is a list of literal [`Case`]s (operation, arguments, expected
//! outcome). Suites come from the built-in matrix or from JSON files shared
//! with other language ports; the [`Runner`] drives them through a
//! [`prim_core::Registry`] and collects a [`Report`]. The [`laws`] module
//! checks the algebraic properties over fixed sample grids.

pub mod builtin;
pub mod laws;

mod case;
mod config;
mod errors;
mod format;
mod runner;
mod suite;

pub use case::{Case, Expectation, Sign};
pub use config::{ConfigFile, ConformConfig, DEFAULT_TOLERANCE};
pub use errors::{ConformError, ConformResult};
pub use format::{CaseSpec, ExpectSpec, SuiteSpec};
pub use runner::{Outcome, Report, Runner, Status};
pub use suite::Suite;
