//! Audit-program snapshot as returned by the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall status of an audit program.
///
/// The backend speaks Spanish status strings. Unknown values are kept
/// verbatim in [`ProgramStatus::Other`] instead of failing deserialization.
/// A missing or null status becomes an empty `Other`, which gates nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ProgramStatus {
    Planning,
    Execution,
    Reporting,
    Completed,
    Suspended,
    Other(String),
}

impl ProgramStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Planning => "En planificación",
            Self::Execution => "En ejecución",
            Self::Reporting => "En reporte",
            Self::Completed => "Completado",
            Self::Suspended => "Suspendido",
            Self::Other(raw) => raw,
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "En planificación" => Self::Planning,
            "En ejecución" => Self::Execution,
            "En reporte" => Self::Reporting,
            "Completado" => Self::Completed,
            "Suspendido" => Self::Suspended,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, Self::Suspended)
    }
}

impl Default for ProgramStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<Option<String>> for ProgramStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map_or_else(Self::default, |raw| Self::parse(&raw))
    }
}

impl From<ProgramStatus> for String {
    fn from(status: ProgramStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for ProgramStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a single phase (planning, execution or reporting).
///
/// Phases the backend has not initialized yet come back as `null`; those read
/// as [`PhaseStatus::NotStarted`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum PhaseStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Other(String),
}

impl PhaseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotStarted => "No iniciado",
            Self::InProgress => "En progreso",
            Self::Completed => "Completado",
            Self::Other(raw) => raw,
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "No iniciado" => Self::NotStarted,
            "En progreso" => Self::InProgress,
            "Completado" => Self::Completed,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<Option<String>> for PhaseStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map_or_else(Self::default, |raw| Self::parse(&raw))
    }
}

impl From<PhaseStatus> for String {
    fn from(status: PhaseStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot of an audit program.
///
/// Fetched fresh on every view mount and never cached across navigations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditProgram {
    /// Routing identifier.
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: ProgramStatus,
    #[serde(default)]
    pub planning_status: PhaseStatus,
    #[serde(default)]
    pub execution_status: PhaseStatus,
    #[serde(default)]
    pub reporting_status: PhaseStatus,
}

impl AuditProgram {
    /// A program in `status` with every phase not yet started.
    pub fn new(slug: impl Into<String>, status: ProgramStatus) -> Self {
        Self {
            slug: slug.into(),
            name: String::new(),
            status,
            planning_status: PhaseStatus::NotStarted,
            execution_status: PhaseStatus::NotStarted,
            reporting_status: PhaseStatus::NotStarted,
        }
    }

    #[must_use]
    pub fn with_planning(mut self, status: PhaseStatus) -> Self {
        self.planning_status = status;
        self
    }

    #[must_use]
    pub fn with_execution(mut self, status: PhaseStatus) -> Self {
        self.execution_status = status;
        self
    }

    #[must_use]
    pub fn with_reporting(mut self, status: PhaseStatus) -> Self {
        self.reporting_status = status;
        self
    }
}
