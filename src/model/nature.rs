//! Ontological natures and their partitions.
//!
//! A class's nature-restriction set is a subset of this vocabulary; the
//! partition slices below are the caller sets used by the `allows_*`
//! comparisons in the classification engine.

use serde::{Deserialize, Serialize};

/// The possible ontological natures of a class's instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Nature {
    FunctionalComplex,
    Collective,
    Quantity,
    Relator,
    IntrinsicMode,
    ExtrinsicMode,
    Quality,
    Event,
    Situation,
    Type,
    Abstract,
}

/// Natures of endurants (individuals that persist through time).
pub const ENDURANT_NATURES: &[Nature] = &[
    Nature::FunctionalComplex,
    Nature::Collective,
    Nature::Quantity,
    Nature::Relator,
    Nature::IntrinsicMode,
    Nature::ExtrinsicMode,
    Nature::Quality,
];

/// Natures of substantials (existentially independent endurants).
pub const SUBSTANTIAL_NATURES: &[Nature] =
    &[Nature::FunctionalComplex, Nature::Collective, Nature::Quantity];

/// Natures of moments (endurants that inhere in other individuals).
pub const MOMENT_NATURES: &[Nature] = &[
    Nature::Relator,
    Nature::IntrinsicMode,
    Nature::ExtrinsicMode,
    Nature::Quality,
];

/// Moments depending on a single bearer.
pub const INTRINSIC_MOMENT_NATURES: &[Nature] = &[Nature::IntrinsicMode, Nature::Quality];

/// Moments depending on multiple individuals.
pub const EXTRINSIC_MOMENT_NATURES: &[Nature] = &[Nature::Relator, Nature::ExtrinsicMode];

impl Nature {
    pub fn is_endurant(self) -> bool {
        ENDURANT_NATURES.contains(&self)
    }

    pub fn is_substantial(self) -> bool {
        SUBSTANTIAL_NATURES.contains(&self)
    }

    pub fn is_moment(self) -> bool {
        MOMENT_NATURES.contains(&self)
    }

    pub fn is_intrinsic_moment(self) -> bool {
        INTRINSIC_MOMENT_NATURES.contains(&self)
    }

    pub fn is_extrinsic_moment(self) -> bool {
        EXTRINSIC_MOMENT_NATURES.contains(&self)
    }
}
