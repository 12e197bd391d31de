//! Audit-program workflow gating.
//!
//! An audit program moves through planning, execution and reporting. The
//! backend owns those transitions; this module mirrors the ordering rule so
//! views know which phase-entry actions to show and enable. Everything here is
//! a pure function of a fetched [`AuditProgram`] snapshot and the user's
//! [`PermissionSet`](crate::PermissionSet); recompute on every render.

mod colors;
mod gate;
mod types;

pub use colors::{StatusColor, status_color};
pub use gate::{
    PhaseAction, PhaseAffordance, affordances, can_enter, can_enter_execution, can_enter_planning,
    can_enter_reporting,
};
pub use types::{AuditProgram, PhaseStatus, ProgramStatus};
