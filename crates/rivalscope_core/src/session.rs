//! Owned session context with a subscribe/notify lifecycle.
//!
//! # Responsibility
//! - Hold the authenticated-user state the external auth provider pushes.
//! - Deliver every state change to registered listeners.
//!
//! # Invariants
//! - The hub is an injected, single-owner object, never ambient global
//!   state.
//! - The core's only dependency on auth is `user.id` as the ownership
//!   scope for store queries.

use std::collections::BTreeMap;

/// Authenticated user as delivered by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Session snapshot delivered on every auth state change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub user: Option<AuthUser>,
    pub is_loading: bool,
}

impl SessionState {
    /// Initial state while the auth provider resolves the session.
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }
}

pub type SubscriptionId = u64;

type Listener = Box<dyn Fn(&SessionState)>;

/// In-process session state hub.
///
/// The external auth provider drives [`SessionHub::update`]; views
/// subscribe for changes and unsubscribe when they go away.
pub struct SessionHub {
    state: SessionState,
    listeners: BTreeMap<SubscriptionId, Listener>,
    next_subscription: SubscriptionId,
}

impl SessionHub {
    /// Creates a hub in the loading state, mirroring app startup before
    /// the first auth callback.
    pub fn new() -> Self {
        Self {
            state: SessionState::loading(),
            listeners: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Owner id used to scope store queries; `None` while signed out or
    /// still loading.
    pub fn current_user_id(&self) -> Option<&str> {
        self.state.user.as_ref().map(|user| user.id.as_str())
    }

    /// Registers a listener for subsequent state changes.
    pub fn subscribe(&mut self, listener: impl Fn(&SessionState) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        self.listeners
            .insert(self.next_subscription, Box::new(listener));
        self.next_subscription
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Replaces the session state and notifies every listener.
    pub fn update(&mut self, state: SessionState) {
        self.state = state;
        for listener in self.listeners.values() {
            listener(&self.state);
        }
    }

    /// Convenience transition to the signed-out state.
    pub fn sign_out(&mut self) {
        self.update(SessionState::signed_out());
    }
}

impl Default for SessionHub {
    fn default() -> Self {
        Self::new()
    }
}
