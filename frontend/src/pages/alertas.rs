use crate::components::icons::{Icon, IconGlyph};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Simple,
    Range,
    Percentage,
    Compound,
}

impl AlertKind {
    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Simple => "Simple",
            AlertKind::Range => "Rango",
            AlertKind::Percentage => "Porcentaje",
            AlertKind::Compound => "Compuesta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertRow {
    pub ticker: &'static str,
    pub kind: AlertKind,
    pub description: &'static str,
}

/// Static rows until alert rules come from the backend.
pub const ALERT_FIXTURES: [AlertRow; 4] = [
    AlertRow {
        ticker: "TSLA",
        kind: AlertKind::Simple,
        description: "precio > 800",
    },
    AlertRow {
        ticker: "BTC",
        kind: AlertKind::Range,
        description: "precio entre 30 k y 40 k",
    },
    AlertRow {
        ticker: "AAPL",
        kind: AlertKind::Percentage,
        description: "cambio > 7 % en 1d",
    },
    AlertRow {
        ticker: "TSLA",
        kind: AlertKind::Compound,
        description: "(precio > 700 AND volumen > 10M)",
    },
];

#[component]
fn AlertTableRow(row: AlertRow) -> impl IntoView {
    view! {
        <tr class="border-t border-border">
            <td class="px-4 py-2 font-medium text-fg">{row.ticker}</td>
            <td class="px-4 py-2 text-fg-muted">{row.kind.label()}</td>
            <td class="px-4 py-2 text-fg-muted">{row.description}</td>
            <td class="px-4 py-2 space-x-2">
                <button type="button" class="text-fg-muted hover:text-fg" aria-label="Editar">
                    <IconGlyph icon=Icon::Pencil/>
                </button>
                <button type="button" class="text-fg-muted hover:text-fg" aria-label="Eliminar">
                    <IconGlyph icon=Icon::Trash/>
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn AlertasPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-fg">"Alertas financieras"</h1>
                <button
                    type="button"
                    class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                >
                    "+ Nueva alerta"
                </button>
            </div>
            <table class="w-full text-sm bg-surface-elevated shadow rounded-lg">
                <thead>
                    <tr class="text-left text-fg">
                        <th class="px-4 py-2">"Ticker"</th>
                        <th class="px-4 py-2">"Tipo"</th>
                        <th class="px-4 py-2">"Descripción"</th>
                        <th class="px-4 py-2">"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    {ALERT_FIXTURES
                        .iter()
                        .map(|row| view! { <AlertTableRow row=*row/> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn alertas_page_lists_every_fixture() {
        let html = render_to_string(|| view! { <AlertasPage/> });
        assert!(html.contains("Alertas financieras"));
        assert!(html.contains("+ Nueva alerta"));
        for kind in [
            AlertKind::Simple,
            AlertKind::Range,
            AlertKind::Percentage,
            AlertKind::Compound,
        ] {
            assert!(html.contains(kind.label()));
        }
        assert_eq!(html.matches(Icon::Trash.class()).count(), ALERT_FIXTURES.len());
    }
}
