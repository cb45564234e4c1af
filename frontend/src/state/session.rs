use crate::{
    api::{ApiClient, Credentials, LoginError},
    pages::login::repository::LoginRepository,
    utils::storage::{self, MemoryTokenStorage, TokenStorage},
};
use leptos::*;
use std::rc::Rc;

/// Authentication state. There is no separate flag to drift out of sync:
/// a session is authenticated exactly when it holds a token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Single writer for the [`Session`]. The handle is `Copy` and lives in
/// context, so any view can read it without threading it through props.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
    storage: StoredValue<Rc<dyn TokenStorage>>,
}

impl SessionStore {
    /// Rehydrates synchronously from `storage`, once. The stored value is
    /// taken as-is, exactly like [`SessionStore::login`] records it.
    pub fn new(storage: Rc<dyn TokenStorage>) -> Self {
        let restored = storage
            .load()
            .map(Session::with_token)
            .unwrap_or_default();
        if restored.is_authenticated() {
            log::info!("Restored persisted session");
        }
        Self {
            session: create_rw_signal(restored),
            storage: store_value(storage),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryTokenStorage::default()))
    }

    /// Records `token` as-is. Validation is the issuer's business.
    pub fn login(&self, token: impl Into<String>) {
        let token = token.into();
        self.storage.with_value(|s| s.store(&token));
        self.session.set(Session::with_token(token));
        log::info!("Session started");
    }

    pub fn logout(&self) {
        if !self.is_authenticated_untracked() {
            return;
        }
        self.storage.with_value(|s| s.clear());
        self.session.set(Session::default());
        log::info!("Session ended");
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn is_authenticated_untracked(&self) -> bool {
        self.session.with_untracked(Session::is_authenticated)
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token().map(str::to_string))
    }

    pub fn session(&self) -> Signal<Session> {
        self.session.into()
    }
}

#[component]
pub fn SessionProvider(
    #[prop(optional)] store: Option<SessionStore>,
    children: Children,
) -> impl IntoView {
    let store = store.unwrap_or_else(|| SessionStore::new(storage::browser_token_storage()));
    provide_context(store);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionStore {
    match use_context::<SessionStore>() {
        Some(store) => store,
        None => {
            let store = SessionStore::new(storage::browser_token_storage());
            provide_context(store);
            store
        }
    }
}

/// Exchanges credentials for a token and records it. The session is only
/// touched when the backend actually returned a token; the credentials are
/// dropped before this returns, whatever the outcome.
pub async fn login_request(
    credentials: Credentials,
    repo: &LoginRepository,
    session: SessionStore,
) -> Result<(), LoginError> {
    let result = repo.login(&credentials).await;
    drop(credentials);

    let response = result.map_err(|err| {
        log::warn!("Login request failed: {}", err);
        LoginError::from(err)
    })?;

    match response.session_token() {
        Some(token) => {
            session.login(token);
            Ok(())
        }
        None => {
            let detail = response.detail_message();
            log::warn!(
                "Login rejected: {}",
                detail.as_deref().unwrap_or("response carried no access_token")
            );
            Err(LoginError::InvalidCredentials { detail })
        }
    }
}

pub fn use_login_action() -> Action<Credentials, Result<(), LoginError>> {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        let repo = repo.clone();
        async move { login_request(credentials, &repo, session).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::TransportError;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo_for(base_url: String) -> LoginRepository {
        LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(base_url)))
    }

    async fn server_answering(body: serde_json::Value, status: u16) -> MockServer {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/login")
                    .json_body(json!({ "correo": "a@b.com", "contrasena": "x" }));
                then.status(status).json_body(body);
            })
            .await;
        server
    }

    #[tokio::test]
    async fn successful_login_records_token() {
        let server = server_answering(json!({ "access_token": "tok123" }), 200).await;
        let runtime = create_runtime();
        let memory = MemoryTokenStorage::default();
        let session = SessionStore::new(Rc::new(memory.clone()));

        login_request(
            Credentials::new("a@b.com", "x"),
            &repo_for(server.base_url()),
            session,
        )
        .await
        .unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok123"));
        assert_eq!(memory.snapshot().as_deref(), Some("tok123"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn token_is_recorded_despite_mistyped_siblings() {
        let server =
            server_answering(json!({ "access_token": "tok123", "refresh_token": 7 }), 200).await;
        let runtime = create_runtime();
        let session = SessionStore::in_memory();

        login_request(
            Credentials::new("a@b.com", "x"),
            &repo_for(server.base_url()),
            session,
        )
        .await
        .unwrap();

        assert_eq!(session.token().as_deref(), Some("tok123"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn body_without_token_is_invalid_credentials() {
        let server = server_answering(json!({}), 200).await;
        let runtime = create_runtime();
        let session = SessionStore::in_memory();

        let err = login_request(
            Credentials::new("a@b.com", "x"),
            &repo_for(server.base_url()),
            session,
        )
        .await
        .unwrap_err();

        assert_eq!(err, LoginError::InvalidCredentials { detail: None });
        assert!(!session.is_authenticated());
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejection_detail_is_kept_on_the_error() {
        let server =
            server_answering(json!({ "detail": "Correo o contraseña incorrectos" }), 400).await;
        let runtime = create_runtime();
        let session = SessionStore::in_memory();

        let err = login_request(
            Credentials::new("a@b.com", "x"),
            &repo_for(server.base_url()),
            session,
        )
        .await
        .unwrap_err();

        assert_eq!(
            err,
            LoginError::InvalidCredentials {
                detail: Some("Correo o contraseña incorrectos".into())
            }
        );
        assert!(!session.is_authenticated());
        runtime.dispose();
    }

    #[tokio::test]
    async fn network_failure_leaves_session_untouched() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let runtime = create_runtime();
        let memory = MemoryTokenStorage::with_token("previous");
        let session = SessionStore::new(Rc::new(memory.clone()));
        let before = session.session().get_untracked();

        let err = login_request(Credentials::new("a@b.com", "x"), &repo_for(base_url), session)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LoginError::Transport(TransportError::Network(_))
        ));
        assert_eq!(session.session().get_untracked(), before);
        assert_eq!(memory.snapshot().as_deref(), Some("previous"));
        runtime.dispose();
    }
}
