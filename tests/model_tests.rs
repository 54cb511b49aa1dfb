//! Tests for the vocabulary tables and the classifier data model.

use ontograph::model::nature::{
    ENDURANT_NATURES, EXTRINSIC_MOMENT_NATURES, INTRINSIC_MOMENT_NATURES, MOMENT_NATURES,
    SUBSTANTIAL_NATURES,
};
use ontograph::{ClassStereotype, Nature, Order, Relation, RelationStereotype};

#[test]
fn test_rigidity_is_a_partition() {
    use ClassStereotype::*;
    let all = [
        Kind, Collective, Quantity, Relator, Mode, Quality, Subkind, Phase, Role,
        HistoricalRole, Category, Mixin, PhaseMixin, RoleMixin, HistoricalRoleMixin, Event,
        Situation, Type, Abstract, Datatype, Enumeration,
    ];
    for s in all {
        let memberships =
            [s.is_rigid(), s.is_anti_rigid(), s.is_semi_rigid()].iter().filter(|m| **m).count();
        assert_eq!(memberships, 1, "{s:?} must be in exactly one rigidity class");
    }
}

#[test]
fn test_sortality_is_a_partition() {
    use ClassStereotype::*;
    let sortals = [
        Kind, Collective, Quantity, Relator, Mode, Quality, Subkind, Phase, Role, HistoricalRole,
    ];
    let non_sortals = [Category, Mixin, PhaseMixin, RoleMixin, HistoricalRoleMixin];
    for s in sortals {
        assert!(s.is_sortal(), "{s:?}");
        assert!(!s.is_non_sortal(), "{s:?}");
    }
    for s in non_sortals {
        assert!(s.is_non_sortal(), "{s:?}");
        assert!(!s.is_sortal(), "{s:?}");
    }
    // Datatype-like stereotypes are in neither camp.
    assert!(!Datatype.is_sortal() && !Datatype.is_non_sortal());
}

#[test]
fn test_identity_providers_and_base_sortals_split_the_sortals() {
    use ClassStereotype::*;
    for s in [Kind, Collective, Quantity, Relator, Mode, Quality] {
        assert!(s.is_identity_provider(), "{s:?}");
        assert!(!s.is_base_sortal(), "{s:?}");
    }
    for s in [Subkind, Phase, Role, HistoricalRole] {
        assert!(s.is_base_sortal(), "{s:?}");
        assert!(!s.is_identity_provider(), "{s:?}");
    }
    assert!(!Category.is_identity_provider());
    assert!(!Category.is_base_sortal());
}

#[test]
fn test_abstract_stereotypes() {
    assert!(ClassStereotype::Datatype.is_abstract());
    assert!(ClassStereotype::Enumeration.is_abstract());
    assert!(ClassStereotype::Abstract.is_abstract());
    assert!(!ClassStereotype::Kind.is_abstract());
}

#[test]
fn test_relation_dependence_categories() {
    assert!(RelationStereotype::Mediation.is_existentially_dependent_on_target());
    assert!(!RelationStereotype::Mediation.is_existentially_dependent_on_source());
    assert!(RelationStereotype::Triggers.is_existentially_dependent_on_source());
    assert!(RelationStereotype::BringsAbout.is_existential_dependence());
    assert!(!RelationStereotype::Material.is_existential_dependence());
    assert!(RelationStereotype::ComponentOf.is_part_whole());
    assert!(!RelationStereotype::Characterization.is_part_whole());
}

#[test]
fn test_nature_partitions() {
    for n in SUBSTANTIAL_NATURES {
        assert!(n.is_endurant(), "{n:?}");
        assert!(!n.is_moment(), "{n:?}");
    }
    for n in MOMENT_NATURES {
        assert!(n.is_endurant(), "{n:?}");
        assert!(!n.is_substantial(), "{n:?}");
        assert!(n.is_intrinsic_moment() != n.is_extrinsic_moment(), "{n:?}");
    }
    assert_eq!(
        SUBSTANTIAL_NATURES.len() + MOMENT_NATURES.len(),
        ENDURANT_NATURES.len()
    );
    assert_eq!(
        INTRINSIC_MOMENT_NATURES.len() + EXTRINSIC_MOMENT_NATURES.len(),
        MOMENT_NATURES.len()
    );
    assert!(!Nature::Event.is_endurant());
    assert!(!Nature::Abstract.is_endurant());
}

#[test]
fn test_binary_relation_end_accessors() {
    let r = Relation::binary(Some(RelationStereotype::Mediation), "enrollment", "student");
    assert!(r.is_binary());
    assert_eq!(r.source().unwrap().classifier.as_str(), "enrollment");
    assert_eq!(r.target().unwrap().classifier.as_str(), "student");
    assert!(r.member_end(0).is_err());
}

#[test]
fn test_ternary_relation_end_accessors() {
    let r = Relation::new(
        None,
        vec!["buyer", "seller", "good"]
            .into_iter()
            .map(ontograph::RelationEnd::new)
            .collect(),
    );
    assert_eq!(r.arity(), 3);
    assert!(r.source().is_err());
    assert!(r.target().is_err());
    assert_eq!(r.member_end(2).unwrap().classifier.as_str(), "good");
    assert!(r.member_end(3).is_err());
}

#[test]
fn test_order_serialization_roundtrip() {
    let bounded: String = serde_json::to_string(&Order::Bounded(2)).unwrap();
    assert_eq!(bounded, "2");
    let unbounded: String = serde_json::to_string(&Order::Unbounded).unwrap();
    assert_eq!(unbounded, "\"*\"");

    let parsed: Order = serde_json::from_str("1").unwrap();
    assert_eq!(parsed, Order::Bounded(1));
    let parsed: Order = serde_json::from_str("\"*\"").unwrap();
    assert_eq!(parsed, Order::Unbounded);
    let parsed: Order = serde_json::from_str("\"3\"").unwrap();
    assert_eq!(parsed, Order::Bounded(3));
}

#[test]
fn test_order_rejects_non_positive_and_overflow() {
    // Orders below 1 are invalid, whether numeric or stringly typed.
    assert!(serde_json::from_str::<Order>("0").is_err());
    assert!(serde_json::from_str::<Order>("-1").is_err());
    assert!(serde_json::from_str::<Order>("\"0\"").is_err());
    // Values beyond u32 must error, not wrap.
    assert!(serde_json::from_str::<Order>("4294967296").is_err());
    assert!(serde_json::from_str::<Order>("\"bogus\"").is_err());
    assert_eq!(
        serde_json::from_str::<Order>("4294967295").unwrap(),
        Order::Bounded(u32::MAX)
    );
}

#[test]
fn test_stereotype_interchange_names() {
    assert_eq!(
        serde_json::to_string(&ClassStereotype::HistoricalRoleMixin).unwrap(),
        "\"historicalRoleMixin\""
    );
    assert_eq!(
        serde_json::to_string(&RelationStereotype::SubCollectionOf).unwrap(),
        "\"subCollectionOf\""
    );
    assert_eq!(
        serde_json::to_string(&Nature::FunctionalComplex).unwrap(),
        "\"functional-complex\""
    );
    let parsed: ClassStereotype = serde_json::from_str("\"kind\"").unwrap();
    assert_eq!(parsed, ClassStereotype::Kind);
}
