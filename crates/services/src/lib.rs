//! Session-scoped services.
//!
//! Learner session lifecycle and the in-process notification hub, created
//! at sign-in and torn down at logout.

#![warn(missing_docs)]

pub mod notify;
pub mod session;

pub use notify::{Notification, NotificationHub, NotifyError};
pub use session::{LearnerProfile, Role, Session};
