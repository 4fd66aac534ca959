use contracts::system::{Role, Session, SessionStore};
use leptos::prelude::*;

use super::storage::LocalStorage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }
}

pub type SessionHandle = StoredValue<SessionStore<LocalStorage>>;

/// Auth context provider component.
///
/// Restores the persisted session synchronously, so the first render already
/// knows whether to show the login page.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let mut store = SessionStore::new(LocalStorage);
    let restored = store.restore().cloned();
    if let Some(session) = &restored {
        log::debug!("restored session for {} ({})", session.name, session.role);
    }

    let (auth_state, set_auth_state) = signal(AuthState { session: restored });
    let handle: SessionHandle = StoredValue::new(store);

    provide_context(auth_state);
    provide_context(set_auth_state);
    provide_context(handle);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn use_session_store() -> SessionHandle {
    use_context::<SessionHandle>().expect("AuthProvider not found in component tree")
}

/// Helper: Perform login
pub fn do_login(
    store: SessionHandle,
    set_auth_state: WriteSignal<AuthState>,
    role: Role,
    display_name: &str,
) {
    let session = store.try_update_value(|s| s.login(role, display_name).clone());
    set_auth_state.set(AuthState { session });
}

/// Helper: Perform logout
pub fn do_logout(store: SessionHandle, set_auth_state: WriteSignal<AuthState>) {
    store.update_value(|s| s.logout());
    set_auth_state.set(AuthState::default());
}
