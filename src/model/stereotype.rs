//! Closed stereotype vocabularies and their taxonomy tables.
//!
//! Every classification partition (rigidity, sortality, identity provision,
//! existential dependence) is a total function of the stereotype enum,
//! written as an exhaustive `match` so the compiler flags any vocabulary
//! change that leaves a partition undecided. An unlisted combination means
//! "not a member", never an error.

use serde::{Deserialize, Serialize};

/// Stereotype vocabulary for classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassStereotype {
    Kind,
    Collective,
    Quantity,
    Relator,
    Mode,
    Quality,
    Subkind,
    Phase,
    Role,
    HistoricalRole,
    Category,
    Mixin,
    PhaseMixin,
    RoleMixin,
    HistoricalRoleMixin,
    Event,
    Situation,
    Type,
    Abstract,
    Datatype,
    Enumeration,
}

impl ClassStereotype {
    /// Instances necessarily keep this classification for their entire
    /// existence.
    pub fn is_rigid(self) -> bool {
        use ClassStereotype::*;
        match self {
            Kind | Collective | Quantity | Relator | Mode | Quality | Subkind | Category
            | Event | Situation | Type | Abstract | Datatype | Enumeration => true,
            Phase | Role | HistoricalRole | Mixin | PhaseMixin | RoleMixin
            | HistoricalRoleMixin => false,
        }
    }

    /// Instances necessarily do not keep this classification for their
    /// entire existence.
    pub fn is_anti_rigid(self) -> bool {
        use ClassStereotype::*;
        match self {
            Phase | Role | HistoricalRole | PhaseMixin | RoleMixin | HistoricalRoleMixin => true,
            Kind | Collective | Quantity | Relator | Mode | Quality | Subkind | Category
            | Mixin | Event | Situation | Type | Abstract | Datatype | Enumeration => false,
        }
    }

    /// Rigid for some instances, anti-rigid for others.
    pub fn is_semi_rigid(self) -> bool {
        matches!(self, ClassStereotype::Mixin)
    }

    /// Carries a principle of identity (supplied by itself or inherited).
    pub fn is_sortal(self) -> bool {
        use ClassStereotype::*;
        match self {
            Kind | Collective | Quantity | Relator | Mode | Quality | Subkind | Phase | Role
            | HistoricalRole => true,
            Category | Mixin | PhaseMixin | RoleMixin | HistoricalRoleMixin | Event
            | Situation | Type | Abstract | Datatype | Enumeration => false,
        }
    }

    /// Classifies instances of distinct identity principles.
    pub fn is_non_sortal(self) -> bool {
        use ClassStereotype::*;
        matches!(
            self,
            Category | Mixin | PhaseMixin | RoleMixin | HistoricalRoleMixin
        )
    }

    /// Supplies the principle of identity to its instances (ultimate
    /// sortal).
    pub fn is_identity_provider(self) -> bool {
        use ClassStereotype::*;
        matches!(self, Kind | Collective | Quantity | Relator | Mode | Quality)
    }

    /// Sortal that inherits rather than supplies its identity principle.
    pub fn is_base_sortal(self) -> bool {
        use ClassStereotype::*;
        matches!(self, Subkind | Phase | Role | HistoricalRole)
    }

    /// Datatype-like stereotypes over abstract individuals.
    pub fn is_abstract(self) -> bool {
        use ClassStereotype::*;
        matches!(self, Abstract | Datatype | Enumeration)
    }
}

/// Stereotype vocabulary for relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationStereotype {
    Material,
    Derivation,
    Comparative,
    Mediation,
    Characterization,
    ExternalDependence,
    ComponentOf,
    MemberOf,
    SubCollectionOf,
    SubQuantityOf,
    Instantiation,
    BringsAbout,
    Creation,
    Historical,
    HistoricalDependence,
    Manifestation,
    Participation,
    Participational,
    Termination,
    Triggers,
}

impl RelationStereotype {
    /// The relation's source end is existentially dependent on the target.
    pub fn is_existentially_dependent_on_source(self) -> bool {
        use RelationStereotype::*;
        match self {
            BringsAbout | Creation | Manifestation | Participation | Termination | Triggers => {
                true
            }
            Material | Derivation | Comparative | Mediation | Characterization
            | ExternalDependence | ComponentOf | MemberOf | SubCollectionOf | SubQuantityOf
            | Instantiation | Historical | HistoricalDependence | Participational => false,
        }
    }

    /// The relation's target end is existentially dependent on the source.
    pub fn is_existentially_dependent_on_target(self) -> bool {
        use RelationStereotype::*;
        match self {
            BringsAbout | Characterization | Creation | ExternalDependence
            | HistoricalDependence | Mediation | Participational => true,
            Material | Derivation | Comparative | ComponentOf | MemberOf | SubCollectionOf
            | SubQuantityOf | Instantiation | Historical | Manifestation | Participation
            | Termination | Triggers => false,
        }
    }

    /// Existential dependence in either direction.
    pub fn is_existential_dependence(self) -> bool {
        self.is_existentially_dependent_on_source() || self.is_existentially_dependent_on_target()
    }

    /// Parthood relations.
    pub fn is_part_whole(self) -> bool {
        use RelationStereotype::*;
        matches!(
            self,
            ComponentOf | MemberOf | SubCollectionOf | SubQuantityOf | Participational
        )
    }
}
