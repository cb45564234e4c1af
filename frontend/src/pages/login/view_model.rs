use super::utils;
use crate::{
    api::{Credentials, LoginError},
    router::{navigate_to, NavigationRequest, DEFAULT_PROTECTED_PATH},
    state::session::{self, use_session},
};
use leptos::*;

/// What the visitor is told after a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginNotice {
    InvalidCredentials,
    ConnectionError,
    Validation(String),
}

impl LoginNotice {
    pub fn from_error(error: &LoginError) -> Self {
        match error {
            LoginError::Transport(_) => LoginNotice::ConnectionError,
            LoginError::InvalidCredentials { .. } => LoginNotice::InvalidCredentials,
        }
    }

    pub fn message(&self) -> String {
        match self {
            LoginNotice::InvalidCredentials => "Credenciales incorrectas".into(),
            LoginNotice::ConnectionError => "Error de conexión".into(),
            LoginNotice::Validation(message) => message.clone(),
        }
    }
}

/// `Failed` behaves like `Idle` (form editable, submit enabled) but keeps
/// the notice on screen until the next attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(LoginNotice),
}

impl LoginPhase {
    pub fn accepts_submit(&self) -> bool {
        matches!(self, LoginPhase::Idle | LoginPhase::Failed(_))
    }

    pub fn begin_submit(&self) -> Option<LoginPhase> {
        self.accepts_submit().then_some(LoginPhase::Submitting)
    }

    pub fn finish(result: &Result<(), LoginError>) -> LoginPhase {
        match result {
            Ok(()) => LoginPhase::Succeeded,
            Err(err) => LoginPhase::Failed(LoginNotice::from_error(err)),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, LoginPhase::Submitting)
    }

    pub fn notice(&self) -> Option<LoginNotice> {
        match self {
            LoginPhase::Failed(notice) => Some(notice.clone()),
            _ => None,
        }
    }
}

/// Where to go once a submission settled. Only a recorded session moves the
/// visitor off the login page.
pub fn redirect_after(result: &Result<(), LoginError>) -> Option<NavigationRequest> {
    result
        .is_ok()
        .then(|| NavigationRequest::push(DEFAULT_PROTECTED_PATH))
}

/// Builds the request from the form fields exactly as typed. Blank fields
/// never reach the backend.
pub fn credentials_for_submit(
    correo: String,
    contrasena: String,
) -> Result<Credentials, LoginNotice> {
    utils::validate_credentials(&correo, &contrasena).map_err(LoginNotice::Validation)?;
    Ok(Credentials::new(correo, contrasena))
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub correo: RwSignal<String>,
    pub contrasena: RwSignal<String>,
    pub phase: RwSignal<LoginPhase>,
    pub login_action: Action<Credentials, Result<(), LoginError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        let Some(next) = self.phase.get_untracked().begin_submit() else {
            return;
        };
        let correo = self.correo.get_untracked();
        let contrasena = self.contrasena.get_untracked();
        match credentials_for_submit(correo, contrasena) {
            Ok(credentials) => {
                self.phase.set(next);
                self.login_action.dispatch(credentials);
            }
            Err(notice) => self.phase.set(LoginPhase::Failed(notice)),
        }
    }

    pub fn notice(&self) -> Signal<Option<LoginNotice>> {
        let phase = self.phase;
        Signal::derive(move || phase.with(LoginPhase::notice))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.with(LoginPhase::is_submitting))
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let session = use_session();
    let vm = LoginViewModel {
        correo: create_rw_signal(String::new()),
        contrasena: create_rw_signal(String::new()),
        phase: create_rw_signal(LoginPhase::Idle),
        login_action: session::use_login_action(),
    };

    let login_action = vm.login_action;
    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            vm.contrasena.set(String::new());
            vm.phase.set(LoginPhase::finish(&result));
            if let Some(request) = redirect_after(&result) {
                navigate_to(&request);
            }
        }
    });

    if session.is_authenticated_untracked() {
        create_effect(move |_| {
            navigate_to(&NavigationRequest::replace(DEFAULT_PROTECTED_PATH));
        });
    }

    vm
}
