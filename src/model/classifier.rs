//! Classifier data model: classes, relations, and their identities.
//!
//! Classifiers are owned by the graph store and referenced everywhere else
//! by [`ClassifierId`]. The store is the single authority over identity;
//! edges and generalization sets never hold classifier data directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::nature::Nature;
use super::stereotype::{ClassStereotype, RelationStereotype};

/// Newtype for classifier identities.
///
/// Identities are opaque strings assigned by the construction layer; the
/// core only compares and hashes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassifierId(pub String);

impl ClassifierId {
    pub fn new(id: impl Into<String>) -> Self {
        ClassifierId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassifierId {
    fn from(id: &str) -> Self {
        ClassifierId(id.to_string())
    }
}

/// The order of a class: first-order classes classify individuals, higher
/// orders classify classes.
///
/// Serialized as an integer, or the string `"*"` for [`Order::Unbounded`],
/// matching the interchange convention. A custom deserializer accepts both
/// forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Bounded(u32),
    Unbounded,
}

impl Default for Order {
    fn default() -> Self {
        Order::Bounded(1)
    }
}

impl Serialize for Order {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Order::Bounded(n) => serializer.serialize_u32(*n),
            Order::Unbounded => serializer.serialize_str("*"),
        }
    }
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct OrderVisitor;

        impl<'de> serde::de::Visitor<'de> for OrderVisitor {
            type Value = Order;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer order or \"*\"")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Order, E>
            where
                E: serde::de::Error,
            {
                match u32::try_from(v) {
                    Ok(n) if n >= 1 => Ok(Order::Bounded(n)),
                    _ => Err(E::custom(format!("order must be an integer >= 1, got {v}"))),
                }
            }

            fn visit_i64<E>(self, v: i64) -> Result<Order, E>
            where
                E: serde::de::Error,
            {
                match u32::try_from(v) {
                    Ok(n) if n >= 1 => Ok(Order::Bounded(n)),
                    _ => Err(E::custom(format!("order must be an integer >= 1, got {v}"))),
                }
            }

            fn visit_str<E>(self, v: &str) -> Result<Order, E>
            where
                E: serde::de::Error,
            {
                if v == "*" {
                    return Ok(Order::Unbounded);
                }
                match v.parse::<u32>() {
                    Ok(n) if n >= 1 => Ok(Order::Bounded(n)),
                    _ => Err(E::custom(format!("invalid order: {v}"))),
                }
            }
        }

        deserializer.deserialize_any(OrderVisitor)
    }
}

/// A class: optionally stereotyped, with a nature-restriction set and an
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stereotype: Option<ClassStereotype>,
    /// Natures the class's instances may have. Order-insensitive; read as
    /// a set.
    #[serde(default)]
    pub restricted_to: Vec<Nature>,
    #[serde(default)]
    pub order: Order,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_derived: bool,
}

impl Class {
    pub fn new(stereotype: Option<ClassStereotype>, restricted_to: Vec<Nature>) -> Self {
        Class {
            name: None,
            stereotype,
            restricted_to,
            order: Order::default(),
            is_abstract: false,
            is_derived: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn restricts_to(&self, nature: Nature) -> bool {
        self.restricted_to.contains(&nature)
    }
}

/// One end of a relation, typed by a classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationEnd {
    pub classifier: ClassifierId,
}

impl RelationEnd {
    pub fn new(classifier: impl Into<ClassifierId>) -> Self {
        RelationEnd {
            classifier: classifier.into(),
        }
    }
}

/// Errors from relation-end accessors invoked with an unsupported arity.
#[derive(Debug)]
pub enum ArityError {
    /// `source`/`target` called on a relation that is not binary.
    NotBinary { arity: usize },
    /// `member_end` called on a binary relation or with an out-of-range
    /// position.
    NoMemberEnd { arity: usize, position: usize },
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityError::NotBinary { arity } => {
                write!(f, "relation is {arity}-ary, not binary")
            }
            ArityError::NoMemberEnd { arity, position } => {
                write!(f, "no member end {position} on a {arity}-ary relation")
            }
        }
    }
}

impl std::error::Error for ArityError {}

/// A relation: optionally stereotyped, with an ordered list of ends.
///
/// Arity is the number of ends. A derivation relation is a binary relation
/// whose source end is itself a relation; the store treats it like any
/// other relation and the consistency checker validates the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stereotype: Option<RelationStereotype>,
    pub ends: Vec<RelationEnd>,
}

impl Relation {
    pub fn new(stereotype: Option<RelationStereotype>, ends: Vec<RelationEnd>) -> Self {
        Relation {
            name: None,
            stereotype,
            ends,
        }
    }

    pub fn binary(
        stereotype: Option<RelationStereotype>,
        source: impl Into<ClassifierId>,
        target: impl Into<ClassifierId>,
    ) -> Self {
        Relation {
            name: None,
            stereotype,
            ends: vec![RelationEnd::new(source), RelationEnd::new(target)],
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn arity(&self) -> usize {
        self.ends.len()
    }

    pub fn is_binary(&self) -> bool {
        self.arity() == 2
    }

    /// The source end of a binary relation.
    pub fn source(&self) -> Result<&RelationEnd, ArityError> {
        if self.is_binary() {
            Ok(&self.ends[0])
        } else {
            Err(ArityError::NotBinary { arity: self.arity() })
        }
    }

    /// The target end of a binary relation.
    pub fn target(&self) -> Result<&RelationEnd, ArityError> {
        if self.is_binary() {
            Ok(&self.ends[1])
        } else {
            Err(ArityError::NotBinary { arity: self.arity() })
        }
    }

    /// A member end of an n-ary relation. Binary relations have a source
    /// and a target, not member ends.
    pub fn member_end(&self, position: usize) -> Result<&RelationEnd, ArityError> {
        if self.is_binary() || position >= self.arity() {
            Err(ArityError::NoMemberEnd {
                arity: self.arity(),
                position,
            })
        } else {
            Ok(&self.ends[position])
        }
    }
}

/// A classifier: the node type of the specialization graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Classifier {
    Class(Class),
    Relation(Relation),
}

impl Classifier {
    pub fn is_class(&self) -> bool {
        matches!(self, Classifier::Class(_))
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Classifier::Relation(_))
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Classifier::Class(c) => Some(c),
            Classifier::Relation(_) => None,
        }
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Classifier::Class(_) => None,
            Classifier::Relation(r) => Some(r),
        }
    }

    /// True when the classifier carries a stereotype of its variant.
    pub fn has_stereotype(&self) -> bool {
        match self {
            Classifier::Class(c) => c.stereotype.is_some(),
            Classifier::Relation(r) => r.stereotype.is_some(),
        }
    }
}
