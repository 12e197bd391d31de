//! Phase-entry gating.

use super::AuditProgram;
use crate::PermissionSet;
use crate::authz::{
    UPDATE_EXECUTION_AUDIT_PROGRAM, UPDATE_PLANNING_AUDIT_PROGRAM, UPDATE_REPORT_AUDIT_PROGRAM,
};

/// Navigation into one phase of an audit program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseAction {
    EnterPlanning,
    EnterExecution,
    EnterReporting,
}

impl PhaseAction {
    pub const ALL: [PhaseAction; 3] = [
        PhaseAction::EnterPlanning,
        PhaseAction::EnterExecution,
        PhaseAction::EnterReporting,
    ];

    /// Permissions the user must hold, all of them, for the action to be shown.
    pub fn required_permissions(self) -> &'static [&'static str] {
        match self {
            PhaseAction::EnterPlanning => &[UPDATE_PLANNING_AUDIT_PROGRAM],
            PhaseAction::EnterExecution => &[UPDATE_EXECUTION_AUDIT_PROGRAM],
            PhaseAction::EnterReporting => &[UPDATE_REPORT_AUDIT_PROGRAM],
        }
    }

    /// Route segment of the phase, appended to the program slug.
    pub fn route_segment(self) -> &'static str {
        match self {
            PhaseAction::EnterPlanning => "planning",
            PhaseAction::EnterExecution => "execution",
            PhaseAction::EnterReporting => "report",
        }
    }
}

/// Enabled iff the program is loaded and not suspended.
pub fn can_enter_planning(program: Option<&AuditProgram>) -> bool {
    program.is_some_and(|p| !p.status.is_suspended())
}

/// Additionally requires planning to be completed.
pub fn can_enter_execution(program: Option<&AuditProgram>) -> bool {
    program.is_some_and(|p| !p.status.is_suspended() && p.planning_status.is_completed())
}

/// Additionally requires both planning and execution to be completed.
pub fn can_enter_reporting(program: Option<&AuditProgram>) -> bool {
    program.is_some_and(|p| {
        !p.status.is_suspended()
            && p.planning_status.is_completed()
            && p.execution_status.is_completed()
    })
}

pub fn can_enter(action: PhaseAction, program: Option<&AuditProgram>) -> bool {
    match action {
        PhaseAction::EnterPlanning => can_enter_planning(program),
        PhaseAction::EnterExecution => can_enter_execution(program),
        PhaseAction::EnterReporting => can_enter_reporting(program),
    }
}

/// A phase-entry control a view should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseAffordance {
    pub action: PhaseAction,
    pub enabled: bool,
}

/// Controls to render for `program`, in phase order.
///
/// An action whose permission check fails is left out entirely; the ones that
/// remain carry whether the phase ordering currently allows entry.
pub fn affordances(program: Option<&AuditProgram>, held: &PermissionSet) -> Vec<PhaseAffordance> {
    PhaseAction::ALL
        .into_iter()
        .filter(|action| held.has_all(action.required_permissions()))
        .map(|action| PhaseAffordance {
            action,
            enabled: can_enter(action, program),
        })
        .collect()
}
