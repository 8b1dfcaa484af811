//! Global application state: session, display preferences and modal
//! visibility. Views never mutate it directly; they dispatch [`Action`]s.

mod persist;
mod theme;

pub use persist::{PersistedState, StorageError};
pub use theme::Theme;

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetModalState { modal: ModalKind, open: bool },
    SetTheme(Theme),
    /// Issued by the authentication flow once credentials are accepted.
    SignIn,
    Logout,
}

impl Action {
    pub fn open(modal: ModalKind) -> Self {
        Action::SetModalState { modal, open: true }
    }

    pub fn close(modal: ModalKind) -> Self {
        Action::SetModalState { modal, open: false }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub login: bool,
    pub register: bool,
}

impl ModalState {
    pub fn is_open(&self, modal: ModalKind) -> bool {
        match modal {
            ModalKind::Login => self.login,
            ModalKind::Register => self.register,
        }
    }

    fn set(&mut self, modal: ModalKind, open: bool) {
        match modal {
            ModalKind::Login => self.login = open,
            ModalKind::Register => self.register = open,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub session: SessionState,
    pub preferences: Preferences,
    pub modals: ModalState,
    /// Number of actions applied so far.
    pub revision: u64,
}

impl AppState {
    pub fn restored(persisted: PersistedState) -> Self {
        Self {
            session: SessionState {
                logged_in: persisted.logged_in,
            },
            preferences: Preferences {
                theme: persisted.theme,
            },
            ..Self::default()
        }
    }

    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            theme: self.preferences.theme,
            logged_in: self.session.logged_in,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetModalState { modal, open } => self.modals.set(modal, open),
            Action::SetTheme(theme) => self.preferences.theme = theme,
            Action::SignIn => {
                self.session.logged_in = true;
                self.modals = ModalState::default();
            }
            Action::Logout => {
                self.session = SessionState::default();
                self.modals = ModalState::default();
            }
        }
        self.revision += 1;
    }
}

/// Copyable handle to the shared state signal.
#[derive(Clone, Copy, PartialEq)]
pub struct Store {
    state: Signal<AppState>,
    persistent: bool,
}

impl Store {
    /// In-memory store. Must be created inside a Dioxus scope.
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Signal::new(initial),
            persistent: false,
        }
    }

    /// Store restored from (and written back to) local storage. Only for
    /// shells that run on the user's machine; a server rendering for many
    /// clients must start each one from [`Store::new`].
    pub fn persistent() -> Self {
        let initial = match persist::load() {
            Ok(Some(saved)) => AppState::restored(saved),
            Ok(None) => AppState::default(),
            Err(err) => {
                tracing::warn!(%err, "discarding unreadable persisted state");
                AppState::default()
            }
        };
        Self {
            state: Signal::new(initial),
            persistent: true,
        }
    }

    pub fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "dispatch");
        let mut state = self.state;
        state.with_mut(|s| s.apply(action));

        if self.persistent {
            let snapshot = self.state.peek().persisted();
            if let Err(err) = persist::save(&snapshot) {
                tracing::warn!(%err, "failed to persist state");
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn theme(&self) -> Theme {
        self.state.read().preferences.theme
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().session.logged_in
    }

    pub fn modals(&self) -> ModalState {
        self.state.read().modals
    }

    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }
}

/// Provide `store` to every descendant and return it.
pub fn use_store_provider(init: impl FnOnce() -> Store) -> Store {
    use_context_provider(init)
}

pub fn use_store() -> Store {
    use_context::<Store>()
}
