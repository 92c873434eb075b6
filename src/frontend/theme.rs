use web_sys::window;
use yew::prelude::*;

pub use crate::theme::Theme;

pub fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

// Session-scoped by design: the flag lives for the document lifetime and is
// never written to storage.
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub on_toggle: Callback<MouseEvent>,
}
