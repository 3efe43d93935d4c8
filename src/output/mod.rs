//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// Print a single resource.
///
/// Tables show the display fields one per line; JSON carries the full API
/// object.
pub fn print_detail<T, D>(item: &T, display: &D, format: OutputFormat) -> Result<()>
where
    T: Serialize,
    D: Tabled,
{
    let output = match format {
        OutputFormat::Table => table::format_details(display),
        OutputFormat::Json => json::format_json(item)?,
    };
    println!("{}", output);
    Ok(())
}
