//! Data model: classifier identities, stereotype vocabularies, and
//! ontological natures.

pub mod classifier;
pub mod nature;
pub mod stereotype;

pub use classifier::{ArityError, Class, Classifier, ClassifierId, Order, Relation, RelationEnd};
pub use nature::Nature;
pub use stereotype::{ClassStereotype, RelationStereotype};
