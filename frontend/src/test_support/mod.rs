pub mod ssr;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub mod helpers {
    use crate::state::session::SessionStore;
    use leptos::*;

    pub fn provide_session(token: Option<&str>) -> SessionStore {
        let store = SessionStore::in_memory();
        if let Some(token) = token {
            store.login(token);
        }
        provide_context(store);
        store
    }

    pub fn provide_authenticated_session() -> SessionStore {
        provide_session(Some("test-token"))
    }

    pub fn provide_anonymous_session() -> SessionStore {
        provide_session(None)
    }
}
