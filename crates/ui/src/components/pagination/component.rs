use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Page reached by the Previous control, clamped to the first page.
pub fn previous_page(current: i64) -> i64 {
    (current - 1).max(1)
}

/// Page reached by the Next control, clamped to the last page when the
/// total is known. An unknown total never limits forward navigation.
pub fn next_page(current: i64, total_pages: Option<i64>) -> i64 {
    match total_pages {
        Some(total) => (current + 1).min(total),
        None => current + 1,
    }
}

/// The "Page X of Y" indicator text; an unknown total renders as `?`.
pub fn page_label(current: i64, total_pages: Option<i64>) -> String {
    match total_pages {
        Some(total) => format!("Page {current} of {total}"),
        None => format!("Page {current} of ?"),
    }
}

/// Previous/Next navigation controls with a page indicator.
///
/// Navigation only: reports the new page through `on_navigate`, never
/// windows the data itself. Previous is disabled on the first page; Next
/// is disabled on the last page when `total_pages` is known.
#[component]
pub fn Pagination(
    current_page: i64,
    #[props(default)] total_pages: Option<i64>,
    on_navigate: EventHandler<i64>,
) -> Element {
    let at_first = current_page <= 1;
    let at_last = total_pages.is_some_and(|total| current_page >= total);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: at_first,
                onclick: move |_| on_navigate.call(previous_page(current_page)),
                "Previous"
            }
            span { class: "pagination-info", {page_label(current_page, total_pages)} }
            Button {
                variant: ButtonVariant::Outline,
                disabled: at_last,
                onclick: move |_| on_navigate.call(next_page(current_page, total_pages)),
                "Next"
            }
        }
    }
}
