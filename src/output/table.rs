//! Table output formatting

use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::{Columns, Rows}},
};

/// Shown instead of an empty table.
pub const NO_RESULTS: &str = "No results found.";

/// Format rows as a table, one row per item
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format one item as a two-column table of field names and values
pub fn format_details<T: Tabled>(item: &T) -> String {
    let mut builder = Builder::default();
    for (header, value) in T::headers().into_iter().zip(item.fields()) {
        builder.push_record([header.to_string(), value.to_string()]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()));

    table.to_string()
}
