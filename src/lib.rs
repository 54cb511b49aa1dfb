//! Specialization-graph core for ontology-driven conceptual models.
//!
//! Models are built from classifiers (classes and relations) connected by
//! generalization edges, each classifier optionally decorated with a
//! stereotype from a closed, ontologically-motivated vocabulary. The crate
//! provides:
//!
//! - the stereotype and nature vocabularies with their taxonomy tables
//!   ([`model`]),
//! - the generalization graph store and a cycle-safe traversal engine
//!   ([`graph`]),
//! - classification predicates derived from stereotype plus graph position,
//!   and cross-edge consistency rules producing typed diagnostics
//!   ([`analysis`]).
//!
//! Containment trees, construction sugar, interchange-format schemas, and
//! any CLI or file-loading surface are collaborators outside this crate;
//! they populate a [`Model`](graph::store::Model) and consume its query
//! results.

pub mod analysis;
pub mod graph;
pub mod model;

pub use analysis::{
    ClassificationError, Diagnostic, DiagnosticCode, DiagnosticSource, Severity,
};
pub use graph::store::{
    Generalization, GeneralizationId, GeneralizationSet, GeneralizationSetId, Model,
};
pub use graph::GraphError;
pub use model::{
    ArityError, Class, Classifier, ClassifierId, ClassStereotype, Nature, Order, Relation,
    RelationEnd, RelationStereotype,
};
