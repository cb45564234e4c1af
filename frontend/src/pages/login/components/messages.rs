use crate::pages::login::view_model::LoginNotice;
use leptos::*;

#[component]
pub fn LoginNoticeBanner(#[prop(into)] notice: Signal<Option<LoginNotice>>) -> impl IntoView {
    view! {
        <Show when=move || notice.with(Option::is_some) fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded"
            >
                {move || notice.get().map(|n| n.message()).unwrap_or_default()}
            </div>
        </Show>
    }
}
