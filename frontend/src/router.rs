use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireAuth, layout::AppShell},
    pages::{
        alertas::AlertasPage, analisis::SentimentPage, dashboard::DashboardPage,
        login::LoginPage, not_found::NotFoundPage,
    },
    state::{session::SessionProvider, theme::provide_theme},
};

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_PROTECTED_PATH: &str = "/dashboard";

/// A one-shot instruction for the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target_path: &'static str,
    pub replace: bool,
}

impl NavigationRequest {
    pub fn push(target_path: &'static str) -> Self {
        Self {
            target_path,
            replace: false,
        }
    }

    /// Overwrites the current history entry, so "back" skips the page that
    /// issued the redirect.
    pub fn replace(target_path: &'static str) -> Self {
        Self {
            target_path,
            replace: true,
        }
    }

    pub fn options(&self) -> NavigateOptions {
        NavigateOptions {
            replace: self.replace,
            ..Default::default()
        }
    }
}

/// Must run inside an effect or handler below `<Router>`.
pub fn navigate_to(request: &NavigationRequest) {
    let navigate = use_navigate();
    navigate(request.target_path, request.options());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectedView {
    Dashboard,
    Alertas,
    Sentiment,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Login,
    Protected(ProtectedView),
}

pub const ROUTE_TABLE: &[(&str, RouteTarget)] = &[
    (LOGIN_PATH, RouteTarget::Login),
    ("/", RouteTarget::Protected(ProtectedView::Dashboard)),
    ("/dashboard", RouteTarget::Protected(ProtectedView::Dashboard)),
    ("/alertas", RouteTarget::Protected(ProtectedView::Alertas)),
    ("/analisis", RouteTarget::Protected(ProtectedView::Sentiment)),
];

/// Drops one trailing `/` so `/alertas/` and `/alertas` name the same page.
pub fn normalize_path(path: &str) -> &str {
    match path {
        "" => "/",
        "/" => path,
        _ => path.strip_suffix('/').unwrap_or(path),
    }
}

pub fn resolve(path: &str) -> Option<RouteTarget> {
    let path = normalize_path(path);
    ROUTE_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == path)
        .map(|(_, target)| *target)
}

impl ProtectedView {
    pub fn for_path(path: &str) -> Self {
        match resolve(path) {
            Some(RouteTarget::Protected(view)) => view,
            _ => ProtectedView::NotFound,
        }
    }

    pub fn render(self) -> View {
        match self {
            ProtectedView::Dashboard => view! { <DashboardPage/> }.into_view(),
            ProtectedView::Alertas => view! { <AlertasPage/> }.into_view(),
            ProtectedView::Sentiment => view! { <SentimentPage/> }.into_view(),
            ProtectedView::NotFound => view! { <NotFoundPage/> }.into_view(),
        }
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_theme();
    view! {
        <Title text="Finz"/>
        <SessionProvider>
            <AppRoutes/>
        </SessionProvider>
    }
}

/// The router and its route table. `children` render inside `<Router>`,
/// next to the routes.
#[component]
pub(crate) fn AppRoutes(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <Router>
            {children.map(|children| children())}
            <Routes>
                <Route path=LOGIN_PATH view=LoginPage/>
                <Route path="/*any" view=ProtectedArea/>
            </Routes>
        </Router>
    }
}

/// Every protected path lands on this one route, so the shell survives
/// navigation and only [`ContentSlot`] swaps.
#[component]
fn ProtectedArea() -> impl IntoView {
    let location = use_location();
    let path = Signal::derive(move || location.pathname.get());
    view! {
        <RequireAuth requested_path=path>
            <AppShell current_path=path>
                <ContentSlot path=path/>
            </AppShell>
        </RequireAuth>
    }
}

#[component]
pub fn ContentSlot(#[prop(into)] path: Signal<String>) -> impl IntoView {
    let current = create_memo(move |_| ProtectedView::for_path(&path.get()));
    move || current.get().render()
}



#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use crate::{
        api::LoginError,
        pages::login::view_model::use_login_view_model,
        state::session::SessionStore,
        test_support::browser::{
            active_nav_href, history_length, mount_app_at, navigate, pathname, settle,
        },
    };
    use leptos::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    type LoginAction = Action<crate::api::Credentials, Result<(), LoginError>>;

    thread_local! {
        static LOGIN_ACTION: Cell<Option<LoginAction>> = const { Cell::new(None) };
    }

    fn nothing() -> View {
        ().into_view()
    }

    fn capture_login_action() -> View {
        let vm = use_login_view_model();
        LOGIN_ACTION.with(|slot| slot.set(Some(vm.login_action)));
        ().into_view()
    }

    #[wasm_bindgen_test]
    async fn anonymous_visit_is_replaced_by_login() {
        let app = mount_app_at("/alertas", SessionStore::in_memory(), nothing);
        let before = history_length();
        settle().await;

        assert_eq!(pathname(), "/login");
        assert_eq!(history_length(), before);
        let text = app.inner_text();
        assert!(text.contains("Iniciar sesión"));
        assert!(!text.contains("Alertas financieras"));
    }

    #[wasm_bindgen_test]
    async fn login_success_moves_to_dashboard_after_token_is_recorded() {
        let session = SessionStore::in_memory();
        let app = mount_app_at("/login", session, capture_login_action);
        settle().await;
        let action = LOGIN_ACTION.with(Cell::get).unwrap();
        let before = history_length();

        action
            .value()
            .set(Some(Err(LoginError::InvalidCredentials { detail: None })));
        settle().await;
        assert_eq!(pathname(), "/login");
        assert!(!session.is_authenticated_untracked());

        session.login("tok123");
        action.value().set(Some(Ok(())));
        settle().await;

        assert_eq!(pathname(), "/dashboard");
        assert_eq!(history_length(), before + 1);
        assert_eq!(session.token().as_deref(), Some("tok123"));
        assert!(app.inner_text().contains("Bienvenido, German"));
    }

    #[wasm_bindgen_test]
    async fn shell_survives_navigation_between_sections() {
        let session = SessionStore::in_memory();
        session.login("tok123");
        let app = mount_app_at("/dashboard", session, nothing);
        settle().await;

        let shell = app.query_selector("aside").unwrap().unwrap();
        assert_eq!(active_nav_href(&app).as_deref(), Some("/dashboard"));

        for (path, heading) in [
            ("/alertas", "Alertas financieras"),
            ("/analisis", "Análisis de Sentimiento"),
            ("/dashboard", "Bienvenido, German"),
        ] {
            navigate(path);
            settle().await;

            assert_eq!(pathname(), path);
            assert!(shell.is_connected(), "shell remounted on {}", path);
            assert_eq!(app.query_selector_all("aside").unwrap().length(), 1);
            assert_eq!(active_nav_href(&app).as_deref(), Some(path));
            assert!(app.inner_text().contains(heading));
        }
    }

    #[wasm_bindgen_test]
    async fn logout_sends_the_visitor_back_to_login() {
        let session = SessionStore::in_memory();
        session.login("tok123");
        let app = mount_app_at("/alertas", session, nothing);
        settle().await;
        assert!(app.inner_text().contains("Alertas financieras"));
        let before = history_length();

        session.logout();
        settle().await;

        assert_eq!(pathname(), "/login");
        assert_eq!(history_length(), before);
        assert!(!app.inner_text().contains("Alertas financieras"));
    }
}
