use super::column::TableRow;

/// Rows of `data` whose value at `accessor` contains `text` as a
/// case-insensitive substring.
///
/// Always computed against the full original data set with a single
/// column's text; filters never compose across columns. Empty `text`
/// matches every row; rows missing the accessor match only empty `text`.
pub fn filter_rows<T: TableRow + Clone>(data: &[T], accessor: &str, text: &str) -> Vec<T> {
    let needle = text.to_lowercase();
    data.iter()
        .filter(|item| {
            item.field(accessor)
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle)
        })
        .cloned()
        .collect()
}
