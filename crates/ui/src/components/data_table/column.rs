use dioxus::prelude::*;

/// Field access by accessor key.
///
/// Row types implement this so columns can read cell values without the
/// table knowing the concrete type. An unknown accessor returns `None`,
/// which renders as an empty cell and matches no non-empty search text.
pub trait TableRow {
    fn field(&self, accessor: &str) -> Option<String>;
}

/// Configuration for one table column.
///
/// Accessors must be unique within a column list when default rendering or
/// local filtering is relied on; a duplicate accessor makes it ambiguous
/// which column a stored search term belongs to.
#[derive(Clone, PartialEq)]
pub struct Column<T: Clone + PartialEq + 'static> {
    /// Display label for the header cell.
    pub header: String,
    /// Field key used to read a row's value for this column.
    pub accessor: String,
    /// Whether the header cell carries a search input.
    pub searchable: bool,
    /// Custom cell renderer `(row item, row index)`; overrides the
    /// stringified field value.
    pub render_row: Option<Callback<(T, usize), Element>>,
    /// Delegated search handler `(accessor, text)`. When present the table
    /// performs no local filtering and expects the caller to update `data`.
    pub on_search: Option<EventHandler<(String, String)>>,
}

impl<T: Clone + PartialEq + 'static> Column<T> {
    pub fn new(header: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: accessor.into(),
            searchable: false,
            render_row: None,
            on_search: None,
        }
    }

    /// Add a search input to this column's header cell.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Render cells with `render` instead of the stringified field value.
    ///
    /// Must be called from within a component body.
    pub fn render_with(mut self, render: impl FnMut((T, usize)) -> Element + 'static) -> Self {
        self.render_row = Some(Callback::new(render));
        self
    }

    /// Hand search off to `handler` instead of filtering locally.
    ///
    /// Must be called from within a component body.
    pub fn on_search(mut self, handler: impl FnMut((String, String)) + 'static) -> Self {
        self.on_search = Some(EventHandler::new(handler));
        self
    }
}
