//! Learner session lifecycle.
//!
//! One [`Session`] exists per signed-in learner. It owns the notification
//! hub for the duration of the sign-in and tears it down on logout, so
//! nothing session-scoped outlives the session.

use coursetrack_core::LearnerId;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::notify::NotificationHub;

/// What kind of account is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Takes courses
    Student,
    /// Authors courses
    Teacher,
    /// Manages the platform
    Admin,
}

/// The signed-in learner's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerProfile {
    /// Learner identity
    pub id: LearnerId,
    /// Display name
    pub name: String,
    /// Account role
    pub role: Role,
}

/// A signed-in session: identity plus session-scoped services.
#[derive(Debug)]
pub struct Session {
    profile: LearnerProfile,
    hub: NotificationHub,
}

impl Session {
    /// Start a session for a learner. Creates the session's hub.
    pub fn start(profile: LearnerProfile) -> Self {
        info!(learner = %profile.id, role = ?profile.role, "session started");
        Self {
            profile,
            hub: NotificationHub::start(),
        }
    }

    /// The signed-in learner.
    pub fn profile(&self) -> &LearnerProfile {
        &self.profile
    }

    /// The session's notification hub, for injection into consumers.
    pub fn hub(&self) -> &NotificationHub {
        &self.hub
    }

    /// End the session, shutting down everything it owns.
    pub fn logout(mut self) {
        info!(learner = %self.profile.id, "session ended");
        self.hub.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notification;

    fn profile() -> LearnerProfile {
        LearnerProfile {
            id: LearnerId::new(),
            name: "Dana".to_string(),
            role: Role::Student,
        }
    }

    #[tokio::test]
    async fn session_owns_a_working_hub() {
        let session = Session::start(profile());
        let mut rx = session.hub().subscribe();

        session
            .hub()
            .publish(Notification::Announcement {
                message: "welcome".to_string(),
            })
            .unwrap();
        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn logout_tears_the_hub_down() {
        let session = Session::start(profile());
        let mut rx = session.hub().subscribe();

        session.logout();
        assert!(rx.recv().await.is_err());
    }
}
