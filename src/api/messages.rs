//! Static HTTP status → user-facing message tables.

use std::collections::BTreeMap;

use super::{AuditPhase, ResourceKind};

const DEFAULT_FALLBACK: &str = "Ocurrió un error inesperado";

/// Maps HTTP statuses of one endpoint to localized messages.
///
/// Statuses missing from the table use the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessages {
    messages: BTreeMap<u16, String>,
    fallback: String,
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK)
    }
}

impl StatusMessages {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            messages: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    #[must_use]
    pub fn with(mut self, status: u16, message: impl Into<String>) -> Self {
        self.messages.insert(status, message.into());
        self
    }

    pub fn message_for(&self, status: u16) -> &str {
        self.messages
            .get(&status)
            .map_or(self.fallback.as_str(), String::as_str)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Table shared by the CRUD screens of one entity.
    pub fn for_resource(kind: ResourceKind) -> Self {
        Self::for_label(kind.label())
    }

    pub fn for_audit_phase(phase: AuditPhase) -> Self {
        Self::for_label(phase.label())
    }

    fn for_label(label: &str) -> Self {
        Self::default()
            .with(400, format!("Los datos de {label} no son válidos"))
            .with(401, "Su sesión ha expirado, inicie sesión nuevamente")
            .with(403, format!("No tiene permisos sobre {label}"))
            .with(404, format!("No se encontró {label}"))
            .with(409, format!("Ya existe {label} con esos datos"))
            .with(500, "Error interno del servidor")
    }

    pub fn login() -> Self {
        Self::default()
            .with(400, "Correo o contraseña incorrectos")
            .with(401, "Correo o contraseña incorrectos")
            .with(403, "El usuario está deshabilitado")
            .with(500, "Error interno del servidor")
    }

    pub fn profile() -> Self {
        Self::default()
            .with(401, "Su sesión ha expirado, inicie sesión nuevamente")
            .with(404, "No se encontró el perfil del usuario")
    }

    pub fn refresh() -> Self {
        Self::new("No se pudo extender la sesión")
            .with(401, "La sesión ya no es válida, inicie sesión nuevamente")
    }
}
