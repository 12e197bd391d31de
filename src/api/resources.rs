//! Resource routes of the backend.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::StatusMessages;

/// Entities with CRUD screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Company,
    Process,
    User,
    Role,
    Risk,
    Control,
    Event,
    ActionPlan,
    AuditProgram,
}

impl ResourceKind {
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Company => "companies",
            ResourceKind::Process => "processes",
            ResourceKind::User => "users",
            ResourceKind::Role => "roles",
            ResourceKind::Risk => "risks",
            ResourceKind::Control => "controls",
            ResourceKind::Event => "events",
            ResourceKind::ActionPlan => "action-plans",
            ResourceKind::AuditProgram => "audit-programs",
        }
    }

    /// Noun used inside user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Company => "la empresa",
            ResourceKind::Process => "el proceso",
            ResourceKind::User => "el usuario",
            ResourceKind::Role => "el rol",
            ResourceKind::Risk => "el riesgo",
            ResourceKind::Control => "el control",
            ResourceKind::Event => "el evento",
            ResourceKind::ActionPlan => "el plan de acción",
            ResourceKind::AuditProgram => "el programa de auditoría",
        }
    }
}

/// Phase sub-resources nested under an audit program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditPhase {
    Planning,
    Execution,
    Report,
}

impl AuditPhase {
    pub fn path(self) -> &'static str {
        match self {
            AuditPhase::Planning => "planning",
            AuditPhase::Execution => "execution",
            AuditPhase::Report => "report",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AuditPhase::Planning => "la planificación de la auditoría",
            AuditPhase::Execution => "la ejecución de la auditoría",
            AuditPhase::Report => "el informe de la auditoría",
        }
    }
}

/// A relative endpoint path plus the message table for its failures.
///
/// ```rust
/// use grc_session::api::{AuditPhase, ResourceKind, ResourcePath};
///
/// assert_eq!(ResourcePath::item(ResourceKind::Risk, 12).as_str(), "risks/12");
/// assert_eq!(
///     ResourcePath::audit_phase("anual-2024", AuditPhase::Execution).as_str(),
///     "audit-programs/anual-2024/execution"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    path: String,
    messages: StatusMessages,
}

impl ResourcePath {
    pub fn collection(kind: ResourceKind) -> Self {
        Self {
            path: kind.path().to_owned(),
            messages: StatusMessages::for_resource(kind),
        }
    }

    pub fn item(kind: ResourceKind, id: impl fmt::Display) -> Self {
        Self {
            path: format!("{}/{}", kind.path(), encode_segment(&id.to_string())),
            messages: StatusMessages::for_resource(kind),
        }
    }

    pub fn audit_phase(slug: &str, phase: AuditPhase) -> Self {
        Self {
            path: format!(
                "{}/{}/{}",
                ResourceKind::AuditProgram.path(),
                encode_segment(slug),
                phase.path()
            ),
            messages: StatusMessages::for_audit_phase(phase),
        }
    }

    /// Appends one more segment, e.g. an item id under a phase.
    #[must_use]
    pub fn join(mut self, segment: impl fmt::Display) -> Self {
        self.path.push('/');
        self.path.push_str(&encode_segment(&segment.to_string()));
        self
    }

    /// Replaces the message table for this call.
    #[must_use]
    pub fn with_messages(mut self, messages: StatusMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn messages(&self) -> &StatusMessages {
        &self.messages
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Everything outside the RFC 3986 unreserved set gets encoded.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}
