use crate::router::DEFAULT_PROTECTED_PATH;
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="space-y-4 text-center py-12">
            <h1 class="text-2xl font-bold text-fg">"Página no encontrada"</h1>
            <a href=DEFAULT_PROTECTED_PATH class="text-sm font-medium text-action-primary-bg hover:underline">
                "Volver al dashboard"
            </a>
        </div>
    }
}
