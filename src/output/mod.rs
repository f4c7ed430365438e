//! Output formatting for CLI results

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::models::report_rows;
use komet::Result;

pub mod json;
pub mod table;

/// Print a resource list, as a table of display rows or as the service payload
///
/// See [`json::format_json`] for how the JSON form differs from the bytes
/// the service sent.
pub fn print_list<R, D>(items: &[R], format: OutputFormat) -> Result<()>
where
    R: Serialize,
    D: Tabled + for<'a> From<&'a R>,
{
    let output = match format {
        OutputFormat::Table => {
            let rows: Vec<D> = items.iter().map(D::from).collect();
            table::format_table(&rows)
        }
        OutputFormat::Json => json::format_json(items)?,
    };
    println!("{}", output);
    Ok(())
}

/// Print a single resource as a one-row table or as the raw payload
pub fn print_record<R, D>(item: &R, format: OutputFormat) -> Result<()>
where
    R: Serialize,
    D: Tabled + for<'a> From<&'a R>,
{
    print_list::<R, D>(std::slice::from_ref(item), format)
}

/// Print a report as FIELD/VALUE rows or as the raw payload.
///
/// Fields named in `skip` are omitted from the table; the JSON form always
/// carries the complete report.
pub fn print_report<T: Serialize>(report: &T, format: OutputFormat, skip: &[&str]) -> Result<()> {
    let output = match format {
        OutputFormat::Table => table::format_table(&report_rows(report, skip)?),
        OutputFormat::Json => json::format_json(report)?,
    };
    println!("{}", output);
    Ok(())
}

/// Print a titled sub-table (table format only)
pub fn print_section<D: Tabled>(title: &str, rows: &[D]) {
    println!();
    println!("{}", table::format_heading(title));
    println!("{}", table::format_table(rows));
}

/// Report a completed write: the payload as JSON, or a one-line summary
pub fn print_done<T: Serialize>(payload: &T, format: OutputFormat, summary: &str) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(payload)?),
        OutputFormat::Table => eprintln!("{} {}", "✓".green(), summary),
    }
    Ok(())
}
