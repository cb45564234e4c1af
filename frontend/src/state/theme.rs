use leptos::*;

const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => DARK_CLASS,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Session-scoped theme. Nothing is persisted across reloads.
#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme: create_rw_signal(Theme::default()),
        }
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
        self.apply_to_dom();
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    #[cfg(target_arch = "wasm32")]
    fn apply_to_dom(&self) {
        let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let list = html.class_list();
        let _ = match self.theme.get_untracked() {
            Theme::Dark => list.add_1(DARK_CLASS),
            Theme::Light => list.remove_1(DARK_CLASS),
        };
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply_to_dom(&self) {}
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new();
    provide_context(state);
    state
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(provide_theme)
}
