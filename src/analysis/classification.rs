//! Ontological classification engine.
//!
//! Direct predicates read a single classifier's stereotype or
//! nature-restriction set through the taxonomy tables; they never consult
//! the graph. Composite queries compose the direct predicates with the
//! traversal engine's filtered walks -- classification never re-implements
//! traversal, and traversal knows nothing about stereotypes.
//!
//! Direct stereotype predicates are strict: invoking one on an undecorated
//! classifier is a precondition violation, not `false`. Callers wanting a
//! tolerant check test [`has_stereotype`](Model::has_stereotype) first.
//! The composite queries are tolerant by construction: an undecorated or
//! wrong-variant ancestor simply does not match the filter.

use std::fmt;

use crate::graph::store::Model;
use crate::graph::GraphError;
use crate::model::nature::{
    ENDURANT_NATURES, EXTRINSIC_MOMENT_NATURES, INTRINSIC_MOMENT_NATURES, MOMENT_NATURES,
    SUBSTANTIAL_NATURES,
};
use crate::model::{Classifier, ClassifierId, ClassStereotype, Nature, RelationStereotype};

/// Precondition errors from classification predicates.
#[derive(Debug)]
pub enum ClassificationError {
    /// A stereotype-dependent predicate was invoked on a classifier with
    /// no stereotype.
    Undecorated(ClassifierId),
    /// A class predicate was invoked on a relation.
    NotAClass(ClassifierId),
    /// A relation predicate was invoked on a class.
    NotARelation(ClassifierId),
    /// The underlying graph lookup failed.
    Graph(GraphError),
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationError::Undecorated(id) => {
                write!(f, "classifier {id} has no stereotype")
            }
            ClassificationError::NotAClass(id) => write!(f, "classifier {id} is not a class"),
            ClassificationError::NotARelation(id) => {
                write!(f, "classifier {id} is not a relation")
            }
            ClassificationError::Graph(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ClassificationError {}

impl From<GraphError> for ClassificationError {
    fn from(e: GraphError) -> Self {
        ClassificationError::Graph(e)
    }
}

impl Model {
    // -----------------------------------------------------------------------
    // Stereotype access
    // -----------------------------------------------------------------------

    /// Tolerant presence check; fails only on an unknown classifier.
    pub fn has_stereotype(&self, x: &ClassifierId) -> Result<bool, GraphError> {
        Ok(self.classifier(x)?.has_stereotype())
    }

    /// The stereotype of a class, or the precondition error naming what is
    /// missing.
    pub fn class_stereotype(
        &self,
        x: &ClassifierId,
    ) -> Result<ClassStereotype, ClassificationError> {
        let classifier = self.classifier(x)?;
        let class = classifier
            .as_class()
            .ok_or_else(|| ClassificationError::NotAClass(x.clone()))?;
        class
            .stereotype
            .ok_or_else(|| ClassificationError::Undecorated(x.clone()))
    }

    /// The stereotype of a relation.
    pub fn relation_stereotype(
        &self,
        x: &ClassifierId,
    ) -> Result<RelationStereotype, ClassificationError> {
        let classifier = self.classifier(x)?;
        let relation = classifier
            .as_relation()
            .ok_or_else(|| ClassificationError::NotARelation(x.clone()))?;
        relation
            .stereotype
            .ok_or_else(|| ClassificationError::Undecorated(x.clone()))
    }

    // -----------------------------------------------------------------------
    // Direct rigidity/sortality predicates (strict)
    // -----------------------------------------------------------------------

    pub fn is_rigid(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        Ok(self.class_stereotype(x)?.is_rigid())
    }

    pub fn is_anti_rigid(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        Ok(self.class_stereotype(x)?.is_anti_rigid())
    }

    pub fn is_semi_rigid(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        Ok(self.class_stereotype(x)?.is_semi_rigid())
    }

    pub fn is_sortal(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        Ok(self.class_stereotype(x)?.is_sortal())
    }

    pub fn is_non_sortal(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        Ok(self.class_stereotype(x)?.is_non_sortal())
    }

    pub fn is_identity_provider(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        Ok(self.class_stereotype(x)?.is_identity_provider())
    }

    pub fn is_base_sortal(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        Ok(self.class_stereotype(x)?.is_base_sortal())
    }

    /// Datatype-like stereotype («abstract», «datatype», «enumeration»).
    pub fn is_abstract_stereotype(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        Ok(self.class_stereotype(x)?.is_abstract())
    }

    // -----------------------------------------------------------------------
    // Nature-restriction comparisons
    // -----------------------------------------------------------------------

    /// Non-empty intersection between the class's restriction set and
    /// `natures`. False when either set is empty: a class restricted to
    /// nothing allows nothing.
    pub fn allows_some(
        &self,
        x: &ClassifierId,
        natures: &[Nature],
    ) -> Result<bool, ClassificationError> {
        let restricted = self.restriction_set(x)?;
        Ok(!restricted.is_empty()
            && !natures.is_empty()
            && restricted.iter().any(|n| natures.contains(n)))
    }

    /// Every nature the class allows is in `natures` (restriction set is a
    /// subset of the queried set). False when either set is empty.
    pub fn allows_only(
        &self,
        x: &ClassifierId,
        natures: &[Nature],
    ) -> Result<bool, ClassificationError> {
        let restricted = self.restriction_set(x)?;
        Ok(!restricted.is_empty()
            && !natures.is_empty()
            && restricted.iter().all(|n| natures.contains(n)))
    }

    /// Every queried nature is allowed (queried set is a subset of the
    /// restriction set). False when either set is empty.
    pub fn allows_all(
        &self,
        x: &ClassifierId,
        natures: &[Nature],
    ) -> Result<bool, ClassificationError> {
        let restricted = self.restriction_set(x)?;
        Ok(!restricted.is_empty()
            && !natures.is_empty()
            && natures.iter().all(|n| restricted.contains(n)))
    }

    /// The restriction set and the queried set are equal as sets. False
    /// when either is empty.
    pub fn allows_exactly(
        &self,
        x: &ClassifierId,
        natures: &[Nature],
    ) -> Result<bool, ClassificationError> {
        Ok(self.allows_only(x, natures)? && self.allows_all(x, natures)?)
    }

    fn restriction_set(&self, x: &ClassifierId) -> Result<&[Nature], ClassificationError> {
        let classifier = self.classifier(x)?;
        let class = classifier
            .as_class()
            .ok_or_else(|| ClassificationError::NotAClass(x.clone()))?;
        Ok(&class.restricted_to)
    }

    // -----------------------------------------------------------------------
    // Nature-shape predicates
    // -----------------------------------------------------------------------

    pub fn is_endurant_type(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        self.allows_only(x, ENDURANT_NATURES)
    }

    pub fn is_substantial_type(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        self.allows_only(x, SUBSTANTIAL_NATURES)
    }

    pub fn is_moment_type(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        self.allows_only(x, MOMENT_NATURES)
    }

    pub fn is_intrinsic_moment_type(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        self.allows_only(x, INTRINSIC_MOMENT_NATURES)
    }

    pub fn is_extrinsic_moment_type(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        self.allows_only(x, EXTRINSIC_MOMENT_NATURES)
    }

    pub fn is_event_type(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        self.allows_only(x, &[Nature::Event])
    }

    pub fn is_situation_type(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        self.allows_only(x, &[Nature::Situation])
    }

    pub fn is_high_order_type(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        self.allows_only(x, &[Nature::Type])
    }

    pub fn is_abstract_type(&self, x: &ClassifierId) -> Result<bool, ClassificationError> {
        self.allows_only(x, &[Nature::Abstract])
    }

    // -----------------------------------------------------------------------
    // Composite traversal queries (tolerant)
    // -----------------------------------------------------------------------

    pub fn rigid_ancestors(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_ancestors(x, |c| stereotype_matches(c, ClassStereotype::is_rigid))
    }

    pub fn rigid_descendants(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_descendants(x, |c| stereotype_matches(c, ClassStereotype::is_rigid))
    }

    pub fn anti_rigid_ancestors(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_ancestors(x, |c| stereotype_matches(c, ClassStereotype::is_anti_rigid))
    }

    pub fn anti_rigid_descendants(
        &self,
        x: &ClassifierId,
    ) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_descendants(x, |c| stereotype_matches(c, ClassStereotype::is_anti_rigid))
    }

    pub fn semi_rigid_ancestors(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_ancestors(x, |c| stereotype_matches(c, ClassStereotype::is_semi_rigid))
    }

    pub fn semi_rigid_descendants(
        &self,
        x: &ClassifierId,
    ) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_descendants(x, |c| stereotype_matches(c, ClassStereotype::is_semi_rigid))
    }

    pub fn sortal_ancestors(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_ancestors(x, |c| stereotype_matches(c, ClassStereotype::is_sortal))
    }

    pub fn sortal_descendants(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_descendants(x, |c| stereotype_matches(c, ClassStereotype::is_sortal))
    }

    pub fn non_sortal_ancestors(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_ancestors(x, |c| stereotype_matches(c, ClassStereotype::is_non_sortal))
    }

    pub fn non_sortal_descendants(
        &self,
        x: &ClassifierId,
    ) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_descendants(x, |c| stereotype_matches(c, ClassStereotype::is_non_sortal))
    }

    pub fn identity_provider_ancestors(
        &self,
        x: &ClassifierId,
    ) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_ancestors(x, |c| {
            stereotype_matches(c, ClassStereotype::is_identity_provider)
        })
    }

    pub fn identity_provider_descendants(
        &self,
        x: &ClassifierId,
    ) -> Result<Vec<ClassifierId>, GraphError> {
        self.filtered_descendants(x, |c| {
            stereotype_matches(c, ClassStereotype::is_identity_provider)
        })
    }
}

/// Tolerant stereotype filter: relations and undecorated classes do not
/// match.
fn stereotype_matches(classifier: &Classifier, table: fn(ClassStereotype) -> bool) -> bool {
    classifier
        .as_class()
        .and_then(|c| c.stereotype)
        .map(table)
        .unwrap_or(false)
}
