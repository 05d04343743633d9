use super::super::{Model, Msg};
use gloo_storage::{LocalStorage, Storage};
use yew::html::Scope;
use yew::prelude::*;

const THEME_KEY: &str = "pest-detect.theme";

pub fn stored_theme() -> String {
    LocalStorage::get(THEME_KEY).unwrap_or_else(|_| "light".to_string())
}

pub fn store_theme(theme: &str) {
    let _ = LocalStorage::set(THEME_KEY, theme);
}

pub fn apply_theme(theme: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let class_list = body.class_list();
        let _ = if theme == "dark" {
            class_list.add_1("dark-mode")
        } else {
            class_list.remove_1("dark-mode")
        };
    }
}

pub fn render_theme_toggle(theme: &str, link: &Scope<Model>) -> Html {
    html! {
        <div class="top-right">
            <button
                id="theme-toggle"
                class="theme-toggle"
                onclick={link.callback(|_| Msg::ToggleTheme)}
                title={ if theme == "light" { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
            >
                { if theme == "light" {
                    html! { <i class="fa-solid fa-sun"></i> }
                } else {
                    html! { <i class="fa-solid fa-moon"></i> }
                }}
            </button>
        </div>
    }
}
