use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::{
    overlay::{OverlayKind, OverlaySubject, PartnerCategory},
    Result, SiteError,
};

/// Options offered by the sponsorship category select.
pub const SPONSORSHIP_CATEGORIES: &[&str] =
    &["financial", "resource", "scholarship", "internship"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Url,
    TextArea,
    Select(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    required: bool,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        required,
    }
}

const APPLICATION_FIELDS: &[FieldSpec] = &[
    field("full_name", "Full Name", FieldKind::Text, true),
    field("email", "Email Address", FieldKind::Email, true),
    field("linkedin", "LinkedIn URL", FieldKind::Url, true),
    field("expertise", "Expertise", FieldKind::TextArea, true),
];

const SPONSORSHIP_FIELDS: &[FieldSpec] = &[
    field("organisation", "Organisation Name", FieldKind::Text, true),
    field("email", "Work Email", FieldKind::Email, true),
    field(
        "category",
        "Category",
        FieldKind::Select(SPONSORSHIP_CATEGORIES),
        true,
    ),
    field("notes", "Additional Notes", FieldKind::TextArea, false),
];

const REGISTRATION_FIELDS: &[FieldSpec] = &[
    field(
        "full_name",
        "Your Professional Identity",
        FieldKind::Text,
        true,
    ),
    field("email", "Digital Contact", FieldKind::Email, true),
    field("intent", "Manifesto of Intent", FieldKind::TextArea, true),
];

/// Field layout rendered inside a form overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormLayout {
    pub title: String,
    pub submit_label: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormLayout {
    /// Layout for the given overlay subject. Video and menu overlays have
    /// none.
    pub fn for_subject(subject: &OverlaySubject) -> Option<Self> {
        match subject {
            OverlaySubject::Partner {
                category: PartnerCategory::Sponsorship,
            } => Some(Self {
                title: "Sponsorship Form".to_string(),
                submit_label: "Submit Interest",
                fields: SPONSORSHIP_FIELDS,
            }),
            OverlaySubject::Partner { category } => Some(Self {
                title: format!("{category:?} Application"),
                submit_label: "Submit Interest",
                fields: APPLICATION_FIELDS,
            }),
            OverlaySubject::Programme { title, .. } => Some(Self {
                title: title.clone(),
                submit_label: "Apply for this Cohort",
                fields: REGISTRATION_FIELDS,
            }),
            OverlaySubject::Video | OverlaySubject::Menu => None,
        }
    }

    /// Checks every field in layout order and reports the first problem.
    pub fn validate(&self, form: &FormData) -> Result<()> {
        for entry in self.fields {
            let value = form.get(entry.name).map(str::trim).unwrap_or_default();
            if value.is_empty() {
                if entry.required {
                    return Err(SiteError::Validation {
                        field: entry.name,
                        reason: "is required",
                    });
                }
                continue;
            }

            let reason = match entry.kind {
                FieldKind::Email if !looks_like_email(value) => Some("is not an email address"),
                FieldKind::Url if !looks_like_url(value) => Some("is not a URL"),
                FieldKind::Select(options) if !options.iter().any(|option| *option == value) => {
                    Some("is not one of the offered options")
                }
                _ => None,
            };
            if let Some(reason) = reason {
                return Err(SiteError::Validation {
                    field: entry.name,
                    reason,
                });
            }
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn looks_like_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value);
    let host = rest.split('/').next().unwrap_or_default();
    host.contains('.') && !value.contains(char::is_whitespace)
}

/// String fields collected from a form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Accepted,
    Rejected { reason: String },
}

/// Collaborator that receives submitted forms once the simulated round trip
/// has elapsed.
pub trait SubmissionBackend: std::fmt::Debug {
    fn submit(&mut self, kind: OverlayKind, form: &FormData) -> SubmissionOutcome;
}

/// Accepts everything, matching the behaviour of the live site.
#[derive(Debug, Default)]
pub struct SimulatedBackend {
    accepted: usize,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

impl SubmissionBackend for SimulatedBackend {
    fn submit(&mut self, kind: OverlayKind, form: &FormData) -> SubmissionOutcome {
        self.accepted += 1;
        tracing::info!(%kind, email = form.get("email"), "form accepted");
        SubmissionOutcome::Accepted
    }
}

/// Replays a fixed sequence of outcomes, then accepts.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    outcomes: VecDeque<SubmissionOutcome>,
}

impl ScriptedBackend {
    pub fn new(outcomes: impl IntoIterator<Item = SubmissionOutcome>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
        }
    }
}

impl SubmissionBackend for ScriptedBackend {
    fn submit(&mut self, kind: OverlayKind, _form: &FormData) -> SubmissionOutcome {
        let outcome = self
            .outcomes
            .pop_front()
            .unwrap_or(SubmissionOutcome::Accepted);
        tracing::debug!(%kind, ?outcome, "scripted submission");
        outcome
    }
}
