//! Cycle-safe transitive traversal over the specialization graph.
//!
//! The edge set is an arbitrary directed graph by contract, not a DAG:
//! cycles and self-loops occur in practice and must terminate. Every
//! transitive query runs a visited-set-guarded breadth-first walk, so each
//! reachable node is reported at most once and in discovery order.
//!
//! The filtered variants materialize the full closure first and filter it
//! afterwards. Filtering must never prune the walk: classification-derived
//! predicates are not prefix-closed along the specialization order, so a
//! matching ancestor behind a non-matching one is still a result.

use std::collections::{HashSet, VecDeque};

use super::store::Model;
use super::GraphError;
use crate::model::{Classifier, ClassifierId};

impl Model {
    /// Distinct classifiers `g` with an edge `(g, x)`. A self-loop puts
    /// `x` in its own parent set.
    pub fn parents(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.classifier(x)?;
        Ok(self.direct_neighbors(x, Direction::Up))
    }

    /// Distinct classifiers `s` with an edge `(x, s)`.
    pub fn children(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.classifier(x)?;
        Ok(self.direct_neighbors(x, Direction::Down))
    }

    /// Transitive closure of [`parents`](Model::parents). `x` itself
    /// appears only when a cycle leads back to it.
    pub fn ancestors(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.classifier(x)?;
        Ok(self.closure(x, Direction::Up))
    }

    /// Transitive closure of [`children`](Model::children).
    pub fn descendants(&self, x: &ClassifierId) -> Result<Vec<ClassifierId>, GraphError> {
        self.classifier(x)?;
        Ok(self.closure(x, Direction::Down))
    }

    /// The full ancestor set of `x`, filtered by `predicate` after the
    /// walk. Each ancestor is tested exactly once.
    pub fn filtered_ancestors<P>(
        &self,
        x: &ClassifierId,
        predicate: P,
    ) -> Result<Vec<ClassifierId>, GraphError>
    where
        P: Fn(&Classifier) -> bool,
    {
        let ancestors = self.ancestors(x)?;
        Ok(self.retain_matching(ancestors, predicate))
    }

    /// The full descendant set of `x`, filtered by `predicate` after the
    /// walk.
    pub fn filtered_descendants<P>(
        &self,
        x: &ClassifierId,
        predicate: P,
    ) -> Result<Vec<ClassifierId>, GraphError>
    where
        P: Fn(&Classifier) -> bool,
    {
        let descendants = self.descendants(x)?;
        Ok(self.retain_matching(descendants, predicate))
    }

    // -----------------------------------------------------------------------
    // Walk internals
    // -----------------------------------------------------------------------

    fn direct_neighbors(&self, x: &ClassifierId, direction: Direction) -> Vec<ClassifierId> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for (_, edge) in self.generalizations() {
            let neighbor = match direction {
                Direction::Up if &edge.specific == x => &edge.general,
                Direction::Down if &edge.general == x => &edge.specific,
                _ => continue,
            };
            if seen.insert(neighbor.clone()) {
                result.push(neighbor.clone());
            }
        }
        result
    }

    fn closure(&self, x: &ClassifierId, direction: Direction) -> Vec<ClassifierId> {
        let mut visited: HashSet<ClassifierId> = HashSet::new();
        let mut result = Vec::new();
        let mut queue: VecDeque<ClassifierId> =
            self.direct_neighbors(x, direction).into_iter().collect();

        while let Some(node) = queue.pop_front() {
            if !visited.insert(node.clone()) {
                continue;
            }
            for neighbor in self.direct_neighbors(&node, direction) {
                if !visited.contains(&neighbor) {
                    queue.push_back(neighbor);
                }
            }
            result.push(node);
        }
        result
    }

    fn retain_matching<P>(&self, nodes: Vec<ClassifierId>, predicate: P) -> Vec<ClassifierId>
    where
        P: Fn(&Classifier) -> bool,
    {
        // Edge endpoints are always registered (checked at insertion), so
        // the lookup cannot fail for a node produced by a walk.
        nodes
            .into_iter()
            .filter(|id| self.classifier(id).map(&predicate).unwrap_or(false))
            .collect()
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}
