//! The generalization graph store.
//!
//! [`Model`] is the authoritative index of classifiers, specialization
//! edges, and grouped edge sets for one project. It is a read-mostly index:
//! the construction layer populates it, everything else queries it. Edge
//! insertion checks variant/arity compatibility but never acyclicity --
//! cycles are tolerated and handled by the traversal engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::GraphError;
use crate::model::{Class, Classifier, ClassifierId, Relation};

/// Stable handle for a generalization edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneralizationId(pub usize);

/// Stable handle for a generalization set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneralizationSetId(pub usize);

/// A directed specialization edge `(general, specific)`.
///
/// Self-loops (`general == specific`) are structurally permitted; the
/// consistency checker flags them as a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generalization {
    pub general: ClassifierId,
    pub specific: ClassifierId,
}

impl Generalization {
    pub fn is_self_loop(&self) -> bool {
        self.general == self.specific
    }
}

/// A group of generalization edges with disjointness/completeness flags
/// and an optional categorizer class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralizationSet {
    pub generalizations: Vec<GeneralizationId>,
    pub is_disjoint: bool,
    pub is_complete: bool,
    #[serde(default)]
    pub categorizer: Option<ClassifierId>,
}

impl GeneralizationSet {
    /// True iff the set is both disjoint and complete.
    pub fn is_partition(&self) -> bool {
        self.is_disjoint && self.is_complete
    }
}

/// The authoritative graph store for one project.
#[derive(Debug, Default)]
pub struct Model {
    classifiers: HashMap<ClassifierId, Classifier>,
    // Insertion order, for deterministic iteration.
    classifier_order: Vec<ClassifierId>,
    // Removal leaves a tombstone so edge ids stay stable.
    generalizations: Vec<Option<Generalization>>,
    generalization_sets: Vec<GeneralizationSet>,
}

impl Model {
    pub fn new() -> Self {
        Model::default()
    }

    // -----------------------------------------------------------------------
    // Classifier registration and lookup
    // -----------------------------------------------------------------------

    /// Register a classifier. Re-registering an id replaces the record.
    pub fn add_classifier(
        &mut self,
        id: impl Into<ClassifierId>,
        classifier: Classifier,
    ) -> ClassifierId {
        let id = id.into();
        if self.classifiers.insert(id.clone(), classifier).is_none() {
            self.classifier_order.push(id.clone());
        }
        id
    }

    pub fn add_class(&mut self, id: impl Into<ClassifierId>, class: Class) -> ClassifierId {
        self.add_classifier(id, Classifier::Class(class))
    }

    pub fn add_relation(
        &mut self,
        id: impl Into<ClassifierId>,
        relation: Relation,
    ) -> ClassifierId {
        self.add_classifier(id, Classifier::Relation(relation))
    }

    pub fn contains_classifier(&self, id: &ClassifierId) -> bool {
        self.classifiers.contains_key(id)
    }

    pub fn classifier(&self, id: &ClassifierId) -> Result<&Classifier, GraphError> {
        self.classifiers
            .get(id)
            .ok_or_else(|| GraphError::UnknownClassifier(id.clone()))
    }

    /// All registered classifiers, in insertion order.
    pub fn classifiers(&self) -> impl Iterator<Item = (&ClassifierId, &Classifier)> {
        self.classifier_order
            .iter()
            .filter_map(|id| self.classifiers.get(id).map(|c| (id, c)))
    }

    // -----------------------------------------------------------------------
    // Edge registration
    // -----------------------------------------------------------------------

    /// Register a specialization edge after checking that its endpoints are
    /// registered, of the same concrete variant, and (for relations) of
    /// equal arity. No cycle check is performed.
    pub fn add_generalization(
        &mut self,
        general: impl Into<ClassifierId>,
        specific: impl Into<ClassifierId>,
    ) -> Result<GeneralizationId, GraphError> {
        let general = general.into();
        let specific = specific.into();
        let general_cls = self.classifier(&general)?;
        let specific_cls = self.classifier(&specific)?;

        match (general_cls, specific_cls) {
            (Classifier::Class(_), Classifier::Class(_)) => {}
            (Classifier::Relation(g), Classifier::Relation(s)) => {
                if g.arity() != s.arity() {
                    return Err(GraphError::ArityMismatch {
                        general_arity: g.arity(),
                        specific_arity: s.arity(),
                        general,
                        specific,
                    });
                }
            }
            _ => return Err(GraphError::TypeMismatch { general, specific }),
        }

        let id = GeneralizationId(self.generalizations.len());
        self.generalizations
            .push(Some(Generalization { general, specific }));
        Ok(id)
    }

    /// Register `parent` as a general of `x`.
    pub fn add_parent(
        &mut self,
        x: impl Into<ClassifierId>,
        parent: impl Into<ClassifierId>,
    ) -> Result<GeneralizationId, GraphError> {
        self.add_generalization(parent.into(), x.into())
    }

    /// Remove an edge. The edge is also dropped from every set that groups
    /// it; edge ids of the remaining edges are unaffected.
    pub fn remove_generalization(&mut self, id: GeneralizationId) -> Result<(), GraphError> {
        let slot = self
            .generalizations
            .get_mut(id.0)
            .ok_or(GraphError::UnknownGeneralization(id))?;
        if slot.take().is_none() {
            return Err(GraphError::UnknownGeneralization(id));
        }
        for set in &mut self.generalization_sets {
            set.generalizations.retain(|g| *g != id);
        }
        Ok(())
    }

    pub fn generalization(&self, id: GeneralizationId) -> Result<&Generalization, GraphError> {
        self.generalizations
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .ok_or(GraphError::UnknownGeneralization(id))
    }

    /// All live edges, in insertion order.
    pub fn generalizations(&self) -> impl Iterator<Item = (GeneralizationId, &Generalization)> {
        self.generalizations
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|g| (GeneralizationId(i), g)))
    }

    // -----------------------------------------------------------------------
    // Set registration
    // -----------------------------------------------------------------------

    /// Register a generalization set over previously registered edges.
    pub fn add_generalization_set(
        &mut self,
        generalizations: Vec<GeneralizationId>,
        is_disjoint: bool,
        is_complete: bool,
        categorizer: Option<ClassifierId>,
    ) -> Result<GeneralizationSetId, GraphError> {
        for edge in &generalizations {
            self.generalization(*edge)?;
        }
        if let Some(cat) = &categorizer {
            self.classifier(cat)?;
        }
        let id = GeneralizationSetId(self.generalization_sets.len());
        self.generalization_sets.push(GeneralizationSet {
            generalizations,
            is_disjoint,
            is_complete,
            categorizer,
        });
        Ok(id)
    }

    pub fn generalization_set(
        &self,
        id: GeneralizationSetId,
    ) -> Result<&GeneralizationSet, GraphError> {
        self.generalization_sets
            .get(id.0)
            .ok_or(GraphError::UnknownGeneralizationSet(id))
    }

    pub fn generalization_sets(
        &self,
    ) -> impl Iterator<Item = (GeneralizationSetId, &GeneralizationSet)> {
        self.generalization_sets
            .iter()
            .enumerate()
            .map(|(i, s)| (GeneralizationSetId(i), s))
    }

    // -----------------------------------------------------------------------
    // Direct-role queries
    // -----------------------------------------------------------------------

    /// Edges where `x` is the general endpoint, in insertion order.
    pub fn edges_where_general(&self, x: &ClassifierId) -> Vec<GeneralizationId> {
        self.generalizations()
            .filter(|(_, g)| &g.general == x)
            .map(|(id, _)| id)
            .collect()
    }

    /// Edges where `x` is the specific endpoint, in insertion order.
    pub fn edges_where_specific(&self, x: &ClassifierId) -> Vec<GeneralizationId> {
        self.generalizations()
            .filter(|(_, g)| &g.specific == x)
            .map(|(id, _)| id)
            .collect()
    }

    /// Sets with at least one edge whose general endpoint is `x`.
    pub fn sets_where_general(&self, x: &ClassifierId) -> Vec<GeneralizationSetId> {
        self.generalization_sets()
            .filter(|(_, set)| {
                set.generalizations
                    .iter()
                    .any(|e| matches!(self.generalization(*e), Ok(g) if &g.general == x))
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Sets with at least one edge whose specific endpoint is `x`.
    pub fn sets_where_specific(&self, x: &ClassifierId) -> Vec<GeneralizationSetId> {
        self.generalization_sets()
            .filter(|(_, set)| {
                set.generalizations
                    .iter()
                    .any(|e| matches!(self.generalization(*e), Ok(g) if &g.specific == x))
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Sets whose categorizer is `x`.
    pub fn sets_where_categorizer(&self, x: &ClassifierId) -> Vec<GeneralizationSetId> {
        self.generalization_sets()
            .filter(|(_, set)| set.categorizer.as_ref() == Some(x))
            .map(|(id, _)| id)
            .collect()
    }
}
