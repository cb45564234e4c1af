use crate::{
    router::{navigate_to, NavigationRequest, LOGIN_PATH},
    state::session::use_session,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    RenderProtected,
    Redirect(NavigationRequest),
}

/// Flat authorization: any authenticated visitor may see any protected
/// path, and the path never changes where an anonymous visitor is sent.
pub fn decide(is_authenticated: bool, _requested_path: &str) -> GuardDecision {
    if is_authenticated {
        GuardDecision::RenderProtected
    } else {
        GuardDecision::Redirect(NavigationRequest::replace(LOGIN_PATH))
    }
}

/// Renders `children` only while the session is authenticated. Children are
/// not built at all otherwise.
#[component]
pub fn RequireAuth(
    #[prop(into)] requested_path: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let decision = create_memo(move |_| {
        requested_path.with(|path| decide(session.is_authenticated(), path))
    });
    create_effect(move |_| {
        if let GuardDecision::Redirect(request) = decision.get() {
            log::debug!(
                "Anonymous access to {} redirected to {}",
                requested_path.get_untracked(),
                request.target_path
            );
            navigate_to(&request);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::RenderProtected
            fallback=|| ()
        >
            {children()}
        </Show>
    }
}
