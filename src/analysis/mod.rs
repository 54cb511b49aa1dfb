//! Ontological classification and consistency verification over the graph.

pub mod classification;
pub mod verification;

pub use classification::ClassificationError;
pub use verification::{Diagnostic, DiagnosticCode, DiagnosticSource, Severity};
