//! Tests for the cycle-safe traversal engine.

use ontograph::{Class, ClassStereotype, ClassifierId, GraphError, Model};

fn id(s: &str) -> ClassifierId {
    ClassifierId::from(s)
}

fn add_kind(model: &mut Model, name: &str) {
    model.add_class(name, Class::new(Some(ClassStereotype::Kind), vec![]));
}

fn sorted(ids: Vec<ClassifierId>) -> Vec<String> {
    let mut names: Vec<String> = ids.into_iter().map(|i| i.0).collect();
    names.sort();
    names
}

/// agent <- person <- student, person <- teacher
fn chain_model() -> Model {
    let mut model = Model::new();
    for name in ["agent", "person", "student", "teacher"] {
        add_kind(&mut model, name);
    }
    model.add_generalization("agent", "person").unwrap();
    model.add_generalization("person", "student").unwrap();
    model.add_generalization("person", "teacher").unwrap();
    model
}

#[test]
fn test_parents_and_children() {
    let model = chain_model();
    assert_eq!(sorted(model.parents(&id("student")).unwrap()), ["person"]);
    assert_eq!(sorted(model.parents(&id("agent")).unwrap()), Vec::<String>::new());
    assert_eq!(
        sorted(model.children(&id("person")).unwrap()),
        ["student", "teacher"]
    );
}

#[test]
fn test_duplicate_edges_do_not_duplicate_neighbors() {
    let mut model = chain_model();
    model.add_generalization("person", "student").unwrap();
    assert_eq!(sorted(model.parents(&id("student")).unwrap()), ["person"]);
    assert_eq!(sorted(model.ancestors(&id("student")).unwrap()), ["agent", "person"]);
}

#[test]
fn test_ancestors_are_transitive() {
    let model = chain_model();
    assert_eq!(
        sorted(model.ancestors(&id("student")).unwrap()),
        ["agent", "person"]
    );
    assert_eq!(
        sorted(model.descendants(&id("agent")).unwrap()),
        ["person", "student", "teacher"]
    );
}

#[test]
fn test_ancestor_descendant_symmetry() {
    let model = chain_model();
    for (x, _) in model.classifiers() {
        for y in model.ancestors(x).unwrap() {
            assert!(
                model.descendants(&y).unwrap().contains(x),
                "{y} is an ancestor of {x} but {x} is not a descendant of {y}"
            );
        }
    }
}

#[test]
fn test_re_traversal_adds_nothing() {
    let model = chain_model();
    let ancestors = model.ancestors(&id("student")).unwrap();
    for a in &ancestors {
        for aa in model.ancestors(a).unwrap() {
            assert!(ancestors.contains(&aa));
        }
    }
}

#[test]
fn test_cycle_terminates_and_contains_each_member_once() {
    let mut model = Model::new();
    for name in ["a", "b", "c"] {
        add_kind(&mut model, name);
    }
    model.add_generalization("a", "b").unwrap();
    model.add_generalization("b", "c").unwrap();
    model.add_generalization("c", "a").unwrap();

    let ancestors = model.ancestors(&id("a")).unwrap();
    assert_eq!(sorted(ancestors.clone()), ["a", "b", "c"]);
    assert_eq!(ancestors.len(), 3);

    let descendants = model.descendants(&id("a")).unwrap();
    assert_eq!(sorted(descendants), ["a", "b", "c"]);
}

#[test]
fn test_self_loop_yields_own_parent_and_child() {
    let mut model = Model::new();
    add_kind(&mut model, "thing");
    model.add_generalization("thing", "thing").unwrap();

    assert_eq!(sorted(model.parents(&id("thing")).unwrap()), ["thing"]);
    assert_eq!(sorted(model.children(&id("thing")).unwrap()), ["thing"]);
    assert_eq!(sorted(model.ancestors(&id("thing")).unwrap()), ["thing"]);
}

#[test]
fn test_filtered_ancestors_equals_post_filter() {
    // person is decorated, the node between student and agent is not: a
    // pruning traversal would stop below "middle" and drop "agent".
    let mut model = Model::new();
    add_kind(&mut model, "agent");
    model.add_class("middle", Class::new(None, vec![]));
    add_kind(&mut model, "student");
    model.add_generalization("agent", "middle").unwrap();
    model.add_generalization("middle", "student").unwrap();

    let is_kind = |c: &ontograph::Classifier| {
        c.as_class()
            .and_then(|cl| cl.stereotype)
            .map(|s| s == ClassStereotype::Kind)
            .unwrap_or(false)
    };

    let filtered = model.filtered_ancestors(&id("student"), is_kind).unwrap();
    assert_eq!(sorted(filtered.clone()), ["agent"]);

    let all: Vec<_> = model
        .ancestors(&id("student"))
        .unwrap()
        .into_iter()
        .filter(|a| is_kind(model.classifier(a).unwrap()))
        .collect();
    assert_eq!(sorted(filtered), sorted(all));
}

#[test]
fn test_unknown_classifier_is_an_error() {
    let model = chain_model();
    assert!(matches!(
        model.ancestors(&id("ghost")),
        Err(GraphError::UnknownClassifier(_))
    ));
    assert!(matches!(
        model.parents(&id("ghost")),
        Err(GraphError::UnknownClassifier(_))
    ));
}

#[test]
fn test_removed_edge_leaves_traversal() {
    let mut model = chain_model();
    let edge = model.add_generalization("agent", "teacher").unwrap();
    assert_eq!(
        sorted(model.parents(&id("teacher")).unwrap()),
        ["agent", "person"]
    );
    model.remove_generalization(edge).unwrap();
    assert_eq!(sorted(model.parents(&id("teacher")).unwrap()), ["person"]);
    assert!(model.remove_generalization(edge).is_err());
}
