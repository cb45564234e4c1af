use crate::{router::AppRoutes, state::session::SessionProvider, state::session::SessionStore};
use leptos::*;
use leptos_router::use_navigate;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

thread_local! {
    static NAVIGATE: RefCell<Option<Rc<dyn Fn(&str)>>> = RefCell::new(None);
}

#[component]
fn CaptureNavigate() -> impl IntoView {
    let navigate = use_navigate();
    NAVIGATE.with(|slot| {
        *slot.borrow_mut() = Some(Rc::new(move |path: &str| {
            navigate(path, Default::default())
        }));
    });
}

fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

/// Mounts the real route tree in a fresh container, starting at `path`.
/// `extra` renders inside the router next to the routes.
pub fn mount_app_at(
    path: &str,
    session: SessionStore,
    extra: impl FnOnce() -> View + 'static,
) -> HtmlElement {
    window()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();

    let document = window().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    mount_to(container.clone(), move || {
        view! {
            <SessionProvider store=session>
                <AppRoutes>
                    <CaptureNavigate/>
                    {extra()}
                </AppRoutes>
            </SessionProvider>
        }
    });
    container
}

/// Client-side navigation through the most recently mounted router.
pub fn navigate(path: &str) {
    let navigate = NAVIGATE.with(|slot| slot.borrow().clone()).unwrap();
    navigate(path);
}

/// Lets effects, router updates and history writes run.
pub async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 50)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

pub fn pathname() -> String {
    window().location().pathname().unwrap()
}

pub fn history_length() -> u32 {
    window().history().unwrap().length().unwrap()
}

pub fn active_nav_href(app: &HtmlElement) -> Option<String> {
    app.query_selector("a[aria-current=\"page\"]")
        .unwrap()
        .and_then(|link| link.get_attribute("href"))
}
