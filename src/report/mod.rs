//! Console reporting

pub mod table;

pub use table::{print_table, write_table};
