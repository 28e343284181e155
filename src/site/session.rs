use std::sync::Arc;
use tokio::sync::watch;

use crate::modules::auth::domain::AdminGrant;

/// What the site knows about the visitor. Memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub is_administrator: bool,
    pub email: Option<String>,
    pub access_token: Option<String>,
}

/// Shared handle to the current [`Session`].
///
/// Clones observe the same session. Views that need to react to sign-in or
/// sign-out hold a receiver from [`SessionContext::subscribe`].
#[derive(Clone)]
pub struct SessionContext {
    tx: Arc<watch::Sender<Session>>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Session::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn is_administrator(&self) -> bool {
        self.tx.borrow().is_administrator
    }

    pub fn access_token(&self) -> Option<String> {
        self.tx.borrow().access_token.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Returns `true` only when this call flipped the visitor to administrator.
    pub(crate) fn grant_admin(&self, grant: &AdminGrant) -> bool {
        let mut promoted = false;
        self.tx.send_modify(|session| {
            promoted = !session.is_administrator;
            session.is_administrator = true;
            session.email = Some(grant.email.clone());
            session.access_token = Some(grant.access_token.clone());
        });
        promoted
    }

    pub(crate) fn clear(&self) {
        self.tx.send_if_modified(|session| {
            if *session == Session::default() {
                return false;
            }
            *session = Session::default();
            true
        });
    }
}
