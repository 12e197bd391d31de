//! Permission checks against the user's flat permission set.
//!
//! The backend grants a list of capability strings such as
//! `"update.execution.audit_program"`. The client only ever asks one question
//! of it: does the user hold *every* permission an action requires.

mod permission_set;

pub use permission_set::{PermissionSet, has_all};

/// Required to enter the planning phase of an audit program.
pub const UPDATE_PLANNING_AUDIT_PROGRAM: &str = "update.planning.audit_program";

/// Required to enter the execution phase of an audit program.
pub const UPDATE_EXECUTION_AUDIT_PROGRAM: &str = "update.execution.audit_program";

/// Required to enter the reporting phase of an audit program.
pub const UPDATE_REPORT_AUDIT_PROGRAM: &str = "update.report.audit_program";
