use crate::components::layout::PROFILE_NAME;
use leptos::*;

const SUMMARY_LINES: [&str; 4] = [
    "Activos seguidos: 5",
    "Alertas activas: 3",
    "Última alerta: TSLA cayó 7%",
    "Último análisis de sentimiento: AAPL positivo (0,78)",
];

const WIDGETS: [&str; 3] = [
    "Sentimiento actual por activo",
    "Alertas configuradas",
    "Calendario eventos macro",
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-fg">{format!("Bienvenido, {}", PROFILE_NAME)}</h1>

            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-1">
                <h2 class="text-lg font-semibold text-fg">"Resumen general"</h2>
                {SUMMARY_LINES
                    .iter()
                    .map(|line| view! { <p class="text-sm text-fg-muted">{*line}</p> })
                    .collect_view()}
            </section>

            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                {WIDGETS
                    .iter()
                    .map(|title| {
                        view! {
                            <div class="bg-surface-elevated shadow rounded-lg p-6 text-fg">{*title}</div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_page_renders_summary_and_widgets() {
        let html = render_to_string(|| view! { <DashboardPage/> });
        assert!(html.contains("Bienvenido, German"));
        assert!(html.contains("Resumen general"));
        for title in WIDGETS {
            assert!(html.contains(title));
        }
    }
}
