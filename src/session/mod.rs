//! Session lifetime tracking.
//!
//! [`SessionMonitor`] re-reads the token's `exp` on every tick and moves the
//! session through four display states:
//!
//! | time left            | state                                   |
//! |----------------------|-----------------------------------------|
//! | more than 65 s       | [`SessionState::Normal`]                |
//! | 4 s to 65 s          | [`SessionState::Warning`]               |
//! | 0 to 4 s             | [`SessionState::Expired`], marker saved |
//! | below zero           | forced logout                           |
//!
//! The windows come from [`SessionTiming`](crate::config::SessionTiming).

mod context;
mod monitor;
mod state;
mod task;

pub use context::SessionContext;
pub use monitor::SessionMonitor;
pub use state::{SessionPhase, SessionState, TickOutcome, classify};
pub use task::MonitorHandle;

pub use crate::events::LogoutReason;
