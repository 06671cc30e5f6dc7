mod column;
mod component;
mod filter;

pub use column::{Column, TableRow};
pub use component::DataTable;
pub use filter::filter_rows;
