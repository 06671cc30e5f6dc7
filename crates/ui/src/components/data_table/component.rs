use std::collections::HashMap;

use dioxus::prelude::*;

use crate::components::input::Input;
use crate::components::pagination::Pagination;
use crate::components::spinner::Spinner;
use crate::theme::Theme;

use super::column::{Column, TableRow};
use super::filter::filter_rows;

/// Keystroke handling for a searchable column: store the raw text under the
/// column's accessor, then either delegate to the column's handler or
/// replace the local filter (computed against the full original `data`) and
/// report a pagination reset through `on_page_change(1)`. The page cursor
/// itself is left where it is.
pub(crate) fn apply_search_input<T: TableRow + Clone + PartialEq + 'static>(
    accessor: &str,
    delegate: Option<EventHandler<(String, String)>>,
    data: &[T],
    text: &str,
    mut search_terms: Signal<HashMap<String, String>>,
    mut local_filter: Signal<Option<Vec<T>>>,
    on_page_change: Option<EventHandler<i64>>,
) {
    search_terms
        .write()
        .insert(accessor.to_string(), text.to_string());
    match &delegate {
        Some(handler) => handler.call((accessor.to_string(), text.to_string())),
        None => {
            local_filter.set(Some(filter_rows(data, accessor, text)));
            if let Some(handler) = &on_page_change {
                handler.call(1);
            }
        }
    }
}

/// Move the page cursor and report the new page to the caller.
pub(crate) fn apply_page_navigation(
    page: i64,
    mut current_page: Signal<i64>,
    on_page_change: Option<EventHandler<i64>>,
) {
    current_page.set(page);
    if let Some(handler) = &on_page_change {
        handler.call(page);
    }
}

/// Generic table widget: column definitions plus row data in, a styled
/// table out, with optional per-column search, optional Previous/Next
/// pagination, and a loading state.
///
/// The widget owns its page cursor and search terms; `data` and `columns`
/// are caller-owned and read-only. Pagination is navigation only — the
/// caller supplies the current page's rows in `data`, the widget never
/// slices them by page itself.
///
/// A keystroke in a searchable column either delegates to that column's
/// `on_search` handler, or filters the original `data` locally by
/// case-insensitive substring on that column alone. A local filter replaces
/// any filter from other columns rather than intersecting with it, and
/// reports a pagination reset by calling `on_page_change(1)` without moving
/// the widget's own cursor; callers that track the page externally feed the
/// reset back in through their next render.
#[component]
pub fn DataTable<T: TableRow + Clone + PartialEq + 'static>(
    columns: Vec<Column<T>>,
    data: Vec<T>,
    #[props(default = false)] loading: bool,
    #[props(default = false)] use_pagination: bool,
    #[props(default)] total_pages: Option<i64>,
    #[props(default)] on_page_change: Option<EventHandler<i64>>,
    #[props(default = false)] dark: bool,
    #[props(default)] container_class: Option<String>,
) -> Element {
    let current_page = use_signal(|| 1i64);
    let search_terms = use_signal(HashMap::<String, String>::new);
    let local_filter = use_signal(|| Option::<Vec<T>>::None);

    let theme = Theme::from_dark(dark);
    let container = match &container_class {
        Some(extra) => format!("{extra} data-table {}", theme.as_str()),
        None => format!("data-table {}", theme.as_str()),
    };

    // Effective data set: the local filter result when one is active,
    // otherwise the caller's rows as-is.
    let rows = local_filter.read().clone().unwrap_or_else(|| data.clone());
    let column_count = columns.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "{container}",
            div { class: "data-table-scroll",
                if loading {
                    Spinner {}
                } else {
                    table {
                        thead {
                            tr {
                                for column in columns.clone() {
                                    th {
                                        span { class: "data-table-header-label", "{column.header}" }
                                        if column.searchable {
                                            Input {
                                                value: search_terms
                                                    .read()
                                                    .get(&column.accessor)
                                                    .cloned()
                                                    .unwrap_or_default(),
                                                placeholder: "Search...",
                                                on_input: {
                                                    let accessor = column.accessor.clone();
                                                    let delegate = column.on_search;
                                                    let data = data.clone();
                                                    move |evt: FormEvent| {
                                                        apply_search_input(
                                                            &accessor,
                                                            delegate,
                                                            &data,
                                                            &evt.value().to_string(),
                                                            search_terms,
                                                            local_filter,
                                                            on_page_change,
                                                        );
                                                    }
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td {
                                        class: "data-table-empty",
                                        colspan: "{column_count}",
                                        "No data found"
                                    }
                                }
                            } else {
                                for (index, item) in rows.iter().enumerate() {
                                    tr {
                                        for column in columns.iter() {
                                            td {
                                                {match &column.render_row {
                                                    Some(render) => render.call((item.clone(), index)),
                                                    None => rsx! {
                                                        "{item.field(&column.accessor).unwrap_or_default()}"
                                                    },
                                                }}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if use_pagination {
                        Pagination {
                            current_page: current_page(),
                            total_pages,
                            on_navigate: move |page: i64| {
                                apply_page_navigation(page, current_page, on_page_change);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone, PartialEq)]
    struct Person {
        name: &'static str,
    }

    impl TableRow for Person {
        fn field(&self, accessor: &str) -> Option<String> {
            (accessor == "name").then(|| self.name.to_string())
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person { name: "Alice" },
            Person { name: "Bob" },
            Person { name: "alicia" },
        ]
    }

    /// Handlers need a live runtime for signals and event handlers, so each
    /// test runs inside a fixture component and renders its observations as
    /// text for the assertion.
    fn run_fixture(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn local_search_stores_term_filters_rows_and_reports_page_one() {
        fn app() -> Element {
            let search_terms = use_signal(HashMap::<String, String>::new);
            let local_filter = use_signal(|| Option::<Vec<Person>>::None);
            let mut reported = use_signal(Vec::<i64>::new);
            let on_page_change = EventHandler::new(move |page| reported.write().push(page));

            apply_search_input(
                "name",
                None,
                &people(),
                "ali",
                search_terms,
                local_filter,
                Some(on_page_change),
            );

            let term = search_terms.read().get("name").cloned().unwrap_or_default();
            let rows = local_filter
                .read()
                .clone()
                .unwrap_or_default()
                .iter()
                .map(|person| person.name)
                .collect::<Vec<_>>()
                .join(",");
            let pages = reported
                .read()
                .iter()
                .map(|page| page.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let summary = format!("term={term};rows={rows};pages={pages}");
            rsx! { "{summary}" }
        }

        assert_eq!(run_fixture(app), "term=ali;rows=Alice,alicia;pages=1");
    }

    #[test]
    fn delegated_search_invokes_handler_once_and_skips_local_filtering() {
        fn app() -> Element {
            let search_terms = use_signal(HashMap::<String, String>::new);
            let local_filter = use_signal(|| Option::<Vec<Person>>::None);
            let mut reported = use_signal(Vec::<i64>::new);
            let mut calls = use_signal(Vec::<(String, String)>::new);
            let on_page_change = EventHandler::new(move |page| reported.write().push(page));
            let delegate =
                EventHandler::new(move |(accessor, text)| calls.write().push((accessor, text)));

            apply_search_input(
                "name",
                Some(delegate),
                &people(),
                "ali",
                search_terms,
                local_filter,
                Some(on_page_change),
            );

            let calls = calls
                .read()
                .iter()
                .map(|(accessor, text)| format!("{accessor}:{text}"))
                .collect::<Vec<_>>()
                .join(",");
            let term = search_terms.read().get("name").cloned().unwrap_or_default();
            let filter = match local_filter.read().as_ref() {
                Some(_) => "active",
                None => "none",
            };
            let summary = format!(
                "calls={calls};term={term};filter={filter};resets={}",
                reported.read().len()
            );
            rsx! { "{summary}" }
        }

        assert_eq!(
            run_fixture(app),
            "calls=name:ali;term=ali;filter=none;resets=0"
        );
    }

    #[test]
    fn page_navigation_moves_cursor_and_reports_new_page() {
        fn app() -> Element {
            let current_page = use_signal(|| 1i64);
            let mut reported = use_signal(Vec::<i64>::new);
            let on_page_change = EventHandler::new(move |page| reported.write().push(page));

            apply_page_navigation(2, current_page, Some(on_page_change));
            apply_page_navigation(3, current_page, Some(on_page_change));

            let pages = reported
                .read()
                .iter()
                .map(|page| page.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let summary = format!("cursor={};reported={pages}", current_page());
            rsx! { "{summary}" }
        }

        assert_eq!(run_fixture(app), "cursor=3;reported=2,3");
    }

    #[test]
    fn page_navigation_without_callback_still_moves_cursor() {
        fn app() -> Element {
            let current_page = use_signal(|| 1i64);

            apply_page_navigation(2, current_page, None);

            let summary = format!("cursor={}", current_page());
            rsx! { "{summary}" }
        }

        assert_eq!(run_fixture(app), "cursor=2");
    }

    #[test]
    fn local_search_leaves_page_cursor_in_place() {
        fn app() -> Element {
            let search_terms = use_signal(HashMap::<String, String>::new);
            let local_filter = use_signal(|| Option::<Vec<Person>>::None);
            let current_page = use_signal(|| 3i64);
            let mut reported = use_signal(Vec::<i64>::new);
            let on_page_change = EventHandler::new(move |page| reported.write().push(page));

            apply_search_input(
                "name",
                None,
                &people(),
                "bob",
                search_terms,
                local_filter,
                Some(on_page_change),
            );

            let pages = reported
                .read()
                .iter()
                .map(|page| page.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let summary = format!("cursor={};reported={pages}", current_page());
            rsx! { "{summary}" }
        }

        // The reset is reported outward; the widget's own cursor stays put.
        assert_eq!(run_fixture(app), "cursor=3;reported=1");
    }
}
