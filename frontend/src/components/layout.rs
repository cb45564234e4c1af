use crate::{
    components::icons::{Icon, IconGlyph},
    router::normalize_path,
    state::{
        session::use_session,
        theme::{use_theme, Theme},
    },
};
use leptos::*;

pub const PROFILE_NAME: &str = "German";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub icon: Icon,
    pub label: &'static str,
}

pub const NAV_ENTRIES: [NavEntry; 3] = [
    NavEntry {
        path: "/dashboard",
        icon: Icon::LayoutDashboard,
        label: "Dashboard",
    },
    NavEntry {
        path: "/alertas",
        icon: Icon::Bell,
        label: "Alertas",
    },
    NavEntry {
        path: "/analisis",
        icon: Icon::Heart,
        label: "Análisis de Sentimiento",
    },
];

pub fn is_active(entry_path: &str, current_path: &str) -> bool {
    entry_path == normalize_path(current_path)
}

fn nav_item_class(active: bool) -> &'static str {
    if active {
        "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
    }
}

fn theme_icon(theme: Theme) -> Icon {
    match theme {
        Theme::Light => Icon::Moon,
        Theme::Dark => Icon::Sun,
    }
}

fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[component]
pub fn Sidebar(#[prop(into)] current_path: Signal<String>) -> impl IntoView {
    view! {
        <aside class="w-64 shrink-0 min-h-screen bg-surface-elevated border-r border-border">
            <div class="flex items-center gap-2 h-16 px-6 border-b border-border">
                <img src="/logo.png" alt="Finz Logo" class="h-8 w-8"/>
                <span class="text-xl font-semibold text-fg">"Finz"</span>
            </div>
            <nav class="px-3 py-4 space-y-1">
                {NAV_ENTRIES
                    .iter()
                    .map(|entry| {
                        let path = entry.path;
                        let active = move || current_path.with(|current| is_active(path, current));
                        view! {
                            <a
                                href=path
                                class=move || nav_item_class(active())
                                aria-current=move || active().then_some("page")
                            >
                                <IconGlyph icon=entry.icon/>
                                <span>{entry.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let theme = use_theme();
    let current_theme = theme.current();

    view! {
        <header class="h-16 flex items-center justify-end gap-3 px-6 bg-surface-elevated border-b border-border">
            // Notifications are not wired to a backend yet.
            <button
                type="button"
                class="p-2 rounded-full text-fg-muted hover:bg-action-ghost-bg-hover"
                aria-label="Notificaciones"
            >
                <IconGlyph icon=Icon::Bell/>
            </button>
            <button
                type="button"
                class="p-2 rounded-full text-fg-muted hover:bg-action-ghost-bg-hover"
                aria-label="Cambiar tema"
                on:click=move |_| theme.toggle()
            >
                {move || view! { <IconGlyph icon=theme_icon(current_theme.get())/> }}
            </button>
            <div class="flex items-center gap-2">
                <div class="h-8 w-8 rounded-full flex items-center justify-center bg-action-primary-bg text-action-primary-text text-sm font-semibold">
                    {initial_of(PROFILE_NAME)}
                </div>
                <span class="text-sm font-medium text-fg">{PROFILE_NAME}</span>
            </div>
            <button
                type="button"
                class="flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                on:click=move |_| session.logout()
            >
                <IconGlyph icon=Icon::SignOut/>
                <span>"Salir"</span>
            </button>
        </header>
    }
}

/// Persistent frame around protected content.
#[component]
pub fn AppShell(#[prop(into)] current_path: Signal<String>, children: Children) -> impl IntoView {
    let theme = use_theme().current();
    view! {
        <div class=move || format!("app min-h-screen flex bg-surface {}", theme.get().as_class())>
            <Sidebar current_path=current_path/>
            <div class="flex-1 flex flex-col">
                <Header/>
                <main class="flex-1 p-6">{children()}</main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_entry_requires_exact_path() {
        assert!(is_active("/alertas", "/alertas"));
        assert!(is_active("/alertas", "/alertas/"));
        assert!(!is_active("/alertas", "/alertas/1"));
        assert!(!is_active("/dashboard", "/"));
        assert!(!is_active("/analisis", "/alertas"));
    }

    #[test]
    fn at_most_one_entry_is_active() {
        for current in ["/", "/dashboard", "/alertas", "/analisis", "/unknown"] {
            let active = NAV_ENTRIES
                .iter()
                .filter(|entry| is_active(entry.path, current))
                .count();
            assert!(active <= 1, "{} highlighted {} entries", current, active);
        }
    }

    #[test]
    fn theme_icon_shows_the_mode_to_switch_to() {
        assert_eq!(theme_icon(Theme::Light), Icon::Moon);
        assert_eq!(theme_icon(Theme::Dark), Icon::Sun);
    }

    #[test]
    fn initial_is_uppercased_first_letter() {
        assert_eq!(initial_of("german"), "G");
        assert_eq!(initial_of(""), "");
    }
}
