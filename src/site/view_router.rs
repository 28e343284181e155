use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::site::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Public,
    Admin,
}

#[derive(Default)]
struct RouterState {
    requested: View,
    auth_prompt_open: bool,
}

/// Public/Admin switch. Reads the session on every query, so a sign-out
/// drops the visitor back to [`View::Public`] without any call here.
pub struct ViewRouter {
    session: SessionContext,
    state: Mutex<RouterState>,
}

impl ViewRouter {
    pub fn new(session: SessionContext) -> Self {
        Self {
            session,
            state: Mutex::new(RouterState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RouterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reconcile(&self, state: &mut RouterState) {
        let is_admin = self.session.is_administrator();

        if state.auth_prompt_open && is_admin {
            state.auth_prompt_open = false;
            state.requested = View::Admin;
        }
        if state.requested == View::Admin && !is_admin {
            state.requested = View::Public;
        }
    }

    /// Enters Admin when allowed, otherwise opens the sign-in flow and stays put.
    pub fn request_admin(&self) -> View {
        let mut state = self.lock();
        if self.session.is_administrator() {
            state.requested = View::Admin;
            state.auth_prompt_open = false;
        } else {
            state.auth_prompt_open = true;
        }
        self.reconcile(&mut state);
        state.requested
    }

    pub fn show_public(&self) {
        let mut state = self.lock();
        state.requested = View::Public;
        state.auth_prompt_open = false;
    }

    pub fn close_auth_prompt(&self) {
        self.lock().auth_prompt_open = false;
    }

    pub fn is_auth_prompt_open(&self) -> bool {
        let mut state = self.lock();
        self.reconcile(&mut state);
        state.auth_prompt_open
    }

    pub fn current_view(&self) -> View {
        let mut state = self.lock();
        self.reconcile(&mut state);
        state.requested
    }
}
