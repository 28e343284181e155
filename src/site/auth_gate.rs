use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

use crate::modules::auth::domain::{AdminEmail, AdminGrant};
use crate::site::notifications::Notifications;
use crate::site::session::SessionContext;

//
// ──────────────────────────────────────────────────────────
// Backend boundary
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthBackendError {
    #[error("email is not authorized")]
    UnauthorizedEmail,

    #[error("invalid or expired code")]
    InvalidCode,

    #[error("{0}")]
    Unavailable(String),
}

/// `signInWithOtp` / `verifyOtp` as the site sees them.
#[async_trait]
pub trait AdminAuthBackend: Send + Sync {
    async fn sign_in_with_otp(&self, email: &str) -> Result<(), AuthBackendError>;

    async fn verify_otp(&self, email: &str, code: &str) -> Result<AdminGrant, AuthBackendError>;
}

//
// ──────────────────────────────────────────────────────────
// Gate
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Idle,
    CodePending { email: String },
    Authenticated { email: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("This email is not authorized for admin access")]
    UnauthorizedEmail,

    #[error("The code is invalid or has expired")]
    InvalidCode,

    #[error("Request a code first")]
    NoPendingCode,

    #[error("Already signed in; sign out first")]
    AlreadySignedIn,

    #[error("Sign-in is unavailable right now: {0}")]
    Unavailable(String),
}

impl From<AuthBackendError> for GateError {
    fn from(e: AuthBackendError) -> Self {
        match e {
            AuthBackendError::UnauthorizedEmail => GateError::UnauthorizedEmail,
            AuthBackendError::InvalidCode => GateError::InvalidCode,
            AuthBackendError::Unavailable(msg) => GateError::Unavailable(msg),
        }
    }
}

/// `Idle -> CodePending -> Authenticated`.
///
/// A failed attempt never touches the session. The session only turns
/// administrator inside a successful [`AuthGate::verify_code`].
pub struct AuthGate {
    authorized: AdminEmail,
    backend: Arc<dyn AdminAuthBackend>,
    session: SessionContext,
    notifications: Notifications,
    state: Mutex<GateState>,
}

impl AuthGate {
    pub fn new(
        authorized: AdminEmail,
        backend: Arc<dyn AdminAuthBackend>,
        session: SessionContext,
        notifications: Notifications,
    ) -> Self {
        Self {
            authorized,
            backend,
            session,
            notifications,
            state: Mutex::new(GateState::Idle),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> GateState {
        self.lock().clone()
    }

    fn fail<T>(&self, err: GateError) -> Result<T, GateError> {
        self.notifications.error(err.to_string());
        Err(err)
    }

    /// Valid from `Idle`, or from `CodePending` to send a fresh code.
    pub async fn request_code(&self, email: &str) -> Result<(), GateError> {
        if matches!(*self.lock(), GateState::Authenticated { .. }) {
            return self.fail(GateError::AlreadySignedIn);
        }
        if !self.authorized.matches(email) {
            return self.fail(GateError::UnauthorizedEmail);
        }

        let email = self.authorized.as_str().to_string();
        if let Err(e) = self.backend.sign_in_with_otp(&email).await {
            return self.fail(e.into());
        }

        self.notifications
            .info(format!("A sign-in code was sent to {}", email));
        *self.lock() = GateState::CodePending { email };
        Ok(())
    }

    pub async fn verify_code(&self, candidate: &str) -> Result<(), GateError> {
        let email = match &*self.lock() {
            GateState::CodePending { email } => email.clone(),
            _ => return Err(GateError::NoPendingCode),
        };

        let grant = match self.backend.verify_otp(&email, candidate.trim()).await {
            Ok(grant) => grant,
            Err(e) => return self.fail(e.into()),
        };

        {
            let mut state = self.lock();
            // cancelled while the code was in flight
            if *state != (GateState::CodePending {
                email: email.clone(),
            }) {
                return Err(GateError::NoPendingCode);
            }
            *state = GateState::Authenticated {
                email: email.clone(),
            };
        }

        if self.session.grant_admin(&grant) {
            info!(%email, "Admin mode enabled");
        }
        self.notifications.info("Signed in as administrator");
        Ok(())
    }

    pub fn cancel(&self) {
        let mut state = self.lock();
        if matches!(*state, GateState::CodePending { .. }) {
            *state = GateState::Idle;
        }
    }

    pub fn sign_out(&self) {
        self.session.clear();
        *self.lock() = GateState::Idle;
        info!("Admin mode disabled");
    }
}
