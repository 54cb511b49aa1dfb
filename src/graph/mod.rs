//! Specialization graph: the edge/set store and the traversal engine.

pub mod store;
pub mod traversal;

use std::fmt;

use crate::model::ClassifierId;
use self::store::{GeneralizationId, GeneralizationSetId};

/// Structural errors raised by the graph store and traversal engine.
///
/// These indicate programming or data errors in the caller; they abort only
/// the offending operation. Malformed topology (cycles, self-loops) is not
/// an error.
#[derive(Debug)]
pub enum GraphError {
    /// The referenced classifier is not registered in the store.
    UnknownClassifier(ClassifierId),
    /// The referenced edge does not exist (or was removed).
    UnknownGeneralization(GeneralizationId),
    /// The referenced generalization set does not exist.
    UnknownGeneralizationSet(GeneralizationSetId),
    /// An edge's endpoints are not the same concrete variant.
    TypeMismatch {
        general: ClassifierId,
        specific: ClassifierId,
    },
    /// An edge between relations of different arity.
    ArityMismatch {
        general: ClassifierId,
        specific: ClassifierId,
        general_arity: usize,
        specific_arity: usize,
    },
    /// The edges of a generalization set do not share a general endpoint.
    InconsistentGeneralizationSet(GeneralizationSetId),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownClassifier(id) => write!(f, "unknown classifier: {id}"),
            GraphError::UnknownGeneralization(id) => {
                write!(f, "unknown generalization: {}", id.0)
            }
            GraphError::UnknownGeneralizationSet(id) => {
                write!(f, "unknown generalization set: {}", id.0)
            }
            GraphError::TypeMismatch { general, specific } => write!(
                f,
                "generalization endpoints are not the same variant: {general} / {specific}"
            ),
            GraphError::ArityMismatch {
                general,
                specific,
                general_arity,
                specific_arity,
            } => write!(
                f,
                "generalization between relations of different arity: \
                 {general} ({general_arity}) / {specific} ({specific_arity})"
            ),
            GraphError::InconsistentGeneralizationSet(id) => write!(
                f,
                "generalization set {} has no shared general endpoint",
                id.0
            ),
        }
    }
}

impl std::error::Error for GraphError {}
