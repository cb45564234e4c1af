use leptos::*;

#[component]
pub fn SentimentPage() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold text-fg">"Análisis de Sentimiento"</h1>
            <p class="text-sm text-fg-muted">"Sentimiento del mercado por activo seguido."</p>
        </div>
    }
}
