use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    LayoutDashboard,
    Bell,
    Heart,
    Sun,
    Moon,
    SignOut,
    Pencil,
    Trash,
}

impl Icon {
    pub fn class(&self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "fas fa-table-columns",
            Icon::Bell => "fas fa-bell",
            Icon::Heart => "fas fa-heart",
            Icon::Sun => "fas fa-sun",
            Icon::Moon => "fas fa-moon",
            Icon::SignOut => "fas fa-right-from-bracket",
            Icon::Pencil => "fas fa-pen",
            Icon::Trash => "fas fa-trash",
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! { <i class=icon.class() aria-hidden="true"></i> }
}
