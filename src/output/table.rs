//! Table output formatting

use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format a section heading shown above a secondary table
pub fn format_heading(title: &str) -> String {
    title.bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TeamRow {
        #[tabled(rename = "TEAM ID")]
        id: i64,
        #[tabled(rename = "NAME")]
        name: String,
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<TeamRow> = vec![];
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_format_table_headers_and_values() {
        let rows = vec![
            TeamRow {
                id: 1,
                name: "Platform".to_string(),
            },
            TeamRow {
                id: 2,
                name: "Payments".to_string(),
            },
        ];

        let result = format_table(&rows);

        assert!(result.contains("TEAM ID"));
        assert!(result.contains("Platform"));
        assert!(result.contains("Payments"));
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_format_heading_keeps_text() {
        assert!(format_heading("Pull requests").contains("Pull requests"));
    }
}
