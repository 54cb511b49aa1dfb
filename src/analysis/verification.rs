//! Generalization-set accessors and cross-edge consistency rules.
//!
//! Structural violations (a set whose edges disagree on the general
//! endpoint) are errors; everything else the checker finds is a
//! [`Diagnostic`] returned as data, so callers aggregate, filter by
//! severity, and decide what is fatal. Rules never abort on malformed
//! input: an undecorated classifier is itself reported under its own code
//! and the stereotype rules skip the edge.
//!
//! Each rule is an independent `fn (model, edge) -> Option<Diagnostic>`;
//! the fixed rule slices are the extension seam for new constraints.

use serde::Serialize;

use crate::graph::store::{
    Generalization, GeneralizationId, GeneralizationSet, GeneralizationSetId, Model,
};
use crate::graph::GraphError;
use crate::model::{Class, ClassifierId, ClassStereotype};

/// How serious a verification finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// Machine-readable codes for verification findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    UndecoratedClassifier,
    RigidSpecializesAntiRigid,
    SortalMergesIdentityLineages,
    IncompatibleNatures,
    DatatypeSpecializationMismatch,
    EnumerationSpecializationMismatch,
    CircularGeneralization,
    InconsistentGeneralizationSet,
    DuplicateSpecifics,
    InvalidCategorizer,
}

/// The model element a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticSource {
    Generalization(GeneralizationId),
    GeneralizationSet(GeneralizationSetId),
}

/// One verification finding.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub source: DiagnosticSource,
    pub description: String,
}

impl Diagnostic {
    fn edge(code: DiagnosticCode, severity: Severity, id: GeneralizationId, description: String) -> Self {
        Diagnostic {
            code,
            severity,
            source: DiagnosticSource::Generalization(id),
            description,
        }
    }

    fn set(code: DiagnosticCode, severity: Severity, id: GeneralizationSetId, description: String) -> Self {
        Diagnostic {
            code,
            severity,
            source: DiagnosticSource::GeneralizationSet(id),
            description,
        }
    }
}

type EdgeRule = fn(&Model, GeneralizationId, &Generalization) -> Option<Diagnostic>;
type SetRule = fn(&Model, GeneralizationSetId, &GeneralizationSet) -> Option<Diagnostic>;

const EDGE_RULES: &[EdgeRule] = &[
    rule_undecorated_endpoint,
    rule_rigid_specializes_anti_rigid,
    rule_sortal_identity_lineages,
    rule_nature_compatibility,
    rule_datatype_mismatch,
    rule_enumeration_mismatch,
    rule_circular_generalization,
];

const SET_RULES: &[SetRule] = &[
    rule_shared_general,
    rule_duplicate_specifics,
    rule_categorizer_shape,
];

impl Model {
    // -----------------------------------------------------------------------
    // Generalization-set accessors
    // -----------------------------------------------------------------------

    /// The shared general endpoint of every edge in the set. Disagreeing
    /// edges (or an empty set) are a structural violation, never a silent
    /// pick of one.
    pub fn set_general(&self, id: GeneralizationSetId) -> Result<ClassifierId, GraphError> {
        let set = self.generalization_set(id)?;
        let mut shared: Option<ClassifierId> = None;
        for edge_id in &set.generalizations {
            let edge = self.generalization(*edge_id)?;
            match &shared {
                None => shared = Some(edge.general.clone()),
                Some(g) if *g == edge.general => {}
                Some(_) => return Err(GraphError::InconsistentGeneralizationSet(id)),
            }
        }
        shared.ok_or(GraphError::InconsistentGeneralizationSet(id))
    }

    /// The deduplicated specific endpoints of the set's edges, in edge
    /// order.
    pub fn set_specifics(&self, id: GeneralizationSetId) -> Result<Vec<ClassifierId>, GraphError> {
        let set = self.generalization_set(id)?;
        let mut specifics: Vec<ClassifierId> = Vec::new();
        for edge_id in &set.generalizations {
            let edge = self.generalization(*edge_id)?;
            if !specifics.contains(&edge.specific) {
                specifics.push(edge.specific.clone());
            }
        }
        Ok(specifics)
    }

    /// True iff every endpoint of every edge in the set is a class.
    pub fn set_involves_classes(&self, id: GeneralizationSetId) -> Result<bool, GraphError> {
        self.set_endpoints_satisfy(id, |c| c.is_class())
    }

    /// True iff every endpoint of every edge in the set is a relation.
    pub fn set_involves_relations(&self, id: GeneralizationSetId) -> Result<bool, GraphError> {
        self.set_endpoints_satisfy(id, |c| c.is_relation())
    }

    fn set_endpoints_satisfy(
        &self,
        id: GeneralizationSetId,
        check: fn(&crate::model::Classifier) -> bool,
    ) -> Result<bool, GraphError> {
        let set = self.generalization_set(id)?;
        for edge_id in &set.generalizations {
            let edge = self.generalization(*edge_id)?;
            if !check(self.classifier(&edge.general)?) || !check(self.classifier(&edge.specific)?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Verification entry points
    // -----------------------------------------------------------------------

    /// Run every edge rule against one edge.
    pub fn verify_generalization(
        &self,
        id: GeneralizationId,
    ) -> Result<Vec<Diagnostic>, GraphError> {
        let edge = self.generalization(id)?;
        Ok(EDGE_RULES
            .iter()
            .filter_map(|rule| rule(self, id, edge))
            .collect())
    }

    /// Run every set rule against one generalization set.
    pub fn verify_generalization_set(
        &self,
        id: GeneralizationSetId,
    ) -> Result<Vec<Diagnostic>, GraphError> {
        let set = self.generalization_set(id)?;
        Ok(SET_RULES
            .iter()
            .filter_map(|rule| rule(self, id, set))
            .collect())
    }

    /// Run every rule over every edge and set, in id order.
    pub fn verify(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (id, edge) in self.generalizations() {
            diagnostics.extend(EDGE_RULES.iter().filter_map(|rule| rule(self, id, edge)));
        }
        for (id, set) in self.generalization_sets() {
            diagnostics.extend(SET_RULES.iter().filter_map(|rule| rule(self, id, set)));
        }
        diagnostics
    }
}

// ---------------------------------------------------------------------------
// Edge rules
// ---------------------------------------------------------------------------

fn rule_undecorated_endpoint(
    model: &Model,
    id: GeneralizationId,
    edge: &Generalization,
) -> Option<Diagnostic> {
    let undecorated: Vec<&ClassifierId> = [&edge.general, &edge.specific]
        .into_iter()
        .filter(|x| matches!(model.classifier(x), Ok(c) if !c.has_stereotype()))
        .collect();
    if undecorated.is_empty() {
        return None;
    }
    let ids = undecorated
        .iter()
        .map(|x| x.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Some(Diagnostic::edge(
        DiagnosticCode::UndecoratedClassifier,
        Severity::Warning,
        id,
        format!("generalization endpoint(s) without a stereotype: {ids}"),
    ))
}

fn rule_rigid_specializes_anti_rigid(
    model: &Model,
    id: GeneralizationId,
    edge: &Generalization,
) -> Option<Diagnostic> {
    let general = decorated_class(model, &edge.general)?;
    let specific = decorated_class(model, &edge.specific)?;
    if (specific.is_rigid() || specific.is_semi_rigid()) && general.is_anti_rigid() {
        Some(Diagnostic::edge(
            DiagnosticCode::RigidSpecializesAntiRigid,
            Severity::Error,
            id,
            format!(
                "rigid classifier {} specializes anti-rigid classifier {}",
                edge.specific, edge.general
            ),
        ))
    } else {
        None
    }
}

fn rule_sortal_identity_lineages(
    model: &Model,
    id: GeneralizationId,
    edge: &Generalization,
) -> Option<Diagnostic> {
    let general = decorated_class(model, &edge.general)?;
    let specific = decorated_class(model, &edge.specific)?;
    if !general.is_sortal() || !specific.is_sortal() {
        return None;
    }

    // Identity providers in the specific's ancestry, itself included.
    let mut providers = model
        .identity_provider_ancestors(&edge.specific)
        .unwrap_or_default();
    if specific.is_identity_provider() && !providers.contains(&edge.specific) {
        providers.push(edge.specific.clone());
    }
    if providers.len() > 1 {
        Some(Diagnostic::edge(
            DiagnosticCode::SortalMergesIdentityLineages,
            Severity::Error,
            id,
            format!(
                "sortal {} inherits identity from multiple ultimate sortals",
                edge.specific
            ),
        ))
    } else {
        None
    }
}

fn rule_nature_compatibility(
    model: &Model,
    id: GeneralizationId,
    edge: &Generalization,
) -> Option<Diagnostic> {
    let general = class_of(model, &edge.general)?;
    let specific = class_of(model, &edge.specific)?;
    let incompatible = specific
        .restricted_to
        .iter()
        .any(|n| !general.restricts_to(*n));
    if incompatible {
        Some(Diagnostic::edge(
            DiagnosticCode::IncompatibleNatures,
            Severity::Error,
            id,
            format!(
                "nature restrictions of {} are not a subset of those of {}",
                edge.specific, edge.general
            ),
        ))
    } else {
        None
    }
}

fn rule_datatype_mismatch(
    model: &Model,
    id: GeneralizationId,
    edge: &Generalization,
) -> Option<Diagnostic> {
    stereotype_parity_rule(
        model,
        id,
        edge,
        ClassStereotype::Datatype,
        DiagnosticCode::DatatypeSpecializationMismatch,
        "datatype",
    )
}

fn rule_enumeration_mismatch(
    model: &Model,
    id: GeneralizationId,
    edge: &Generalization,
) -> Option<Diagnostic> {
    stereotype_parity_rule(
        model,
        id,
        edge,
        ClassStereotype::Enumeration,
        DiagnosticCode::EnumerationSpecializationMismatch,
        "enumeration",
    )
}

/// Flags an edge where exactly one endpoint carries `stereotype`.
fn stereotype_parity_rule(
    model: &Model,
    id: GeneralizationId,
    edge: &Generalization,
    stereotype: ClassStereotype,
    code: DiagnosticCode,
    label: &str,
) -> Option<Diagnostic> {
    let general = decorated_class(model, &edge.general)?;
    let specific = decorated_class(model, &edge.specific)?;
    if (general == stereotype) == (specific == stereotype) {
        return None;
    }
    Some(Diagnostic::edge(
        code,
        Severity::Error,
        id,
        format!(
            "generalization between {} and {} mixes {label} and non-{label} classifiers",
            edge.general, edge.specific
        ),
    ))
}

fn rule_circular_generalization(
    _model: &Model,
    id: GeneralizationId,
    edge: &Generalization,
) -> Option<Diagnostic> {
    if edge.is_self_loop() {
        Some(Diagnostic::edge(
            DiagnosticCode::CircularGeneralization,
            Severity::Warning,
            id,
            format!("classifier {} specializes itself", edge.general),
        ))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Set rules
// ---------------------------------------------------------------------------

fn rule_shared_general(
    model: &Model,
    id: GeneralizationSetId,
    _set: &GeneralizationSet,
) -> Option<Diagnostic> {
    match model.set_general(id) {
        Ok(_) => None,
        Err(_) => Some(Diagnostic::set(
            DiagnosticCode::InconsistentGeneralizationSet,
            Severity::Error,
            id,
            "generalization set has no shared general endpoint".to_string(),
        )),
    }
}

fn rule_duplicate_specifics(
    model: &Model,
    id: GeneralizationSetId,
    set: &GeneralizationSet,
) -> Option<Diagnostic> {
    if !set.is_disjoint {
        return None;
    }
    let mut seen: Vec<&ClassifierId> = Vec::new();
    for edge_id in &set.generalizations {
        let edge = model.generalization(*edge_id).ok()?;
        if seen.contains(&&edge.specific) {
            return Some(Diagnostic::set(
                DiagnosticCode::DuplicateSpecifics,
                Severity::Warning,
                id,
                format!(
                    "disjoint generalization set lists specific {} more than once",
                    edge.specific
                ),
            ));
        }
        seen.push(&edge.specific);
    }
    None
}

fn rule_categorizer_shape(
    model: &Model,
    id: GeneralizationSetId,
    set: &GeneralizationSet,
) -> Option<Diagnostic> {
    let categorizer = set.categorizer.as_ref()?;
    let categorizer_is_class =
        matches!(model.classifier(categorizer), Ok(c) if c.is_class());
    let edges_are_classes = model.set_involves_classes(id).unwrap_or(false);
    if categorizer_is_class && edges_are_classes {
        None
    } else {
        Some(Diagnostic::set(
            DiagnosticCode::InvalidCategorizer,
            Severity::Error,
            id,
            format!("categorizer {categorizer} must be a class categorizing classes"),
        ))
    }
}

// ---------------------------------------------------------------------------
// Rule helpers
// ---------------------------------------------------------------------------

/// The stereotype of `x` when it is a decorated class; rules skip the edge
/// otherwise (undecorated endpoints carry their own diagnostic).
fn decorated_class(model: &Model, x: &ClassifierId) -> Option<ClassStereotype> {
    model.classifier(x).ok()?.as_class()?.stereotype
}

fn class_of<'a>(model: &'a Model, x: &ClassifierId) -> Option<&'a Class> {
    model.classifier(x).ok()?.as_class()
}
