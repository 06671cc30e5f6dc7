// Building blocks used by the table widget
pub mod button;
pub mod input;
pub mod spinner;

// Table widget and its pagination bar
pub mod data_table;
pub mod pagination;

// Re-exports for convenience
pub use button::*;
pub use data_table::*;
pub use input::*;
pub use pagination::*;
pub use spinner::*;
