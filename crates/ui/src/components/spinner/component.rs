use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLoader;
use dioxus_free_icons::Icon;

/// A centered loading placeholder with an animated spinner icon.
///
/// Stateless; shown in place of content while data is pending.
#[component]
pub fn Spinner(#[props(default)] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "spinner", role: "status",
            Icon::<LdLoader> { icon: LdLoader, width: 24, height: 24 }
            if !message.is_empty() {
                span { class: "spinner-message", "{message}" }
            }
        }
    }
}
