//! Common utilities for output formatters

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize output: {}", e),
    }
}

/// Two-column FIELD / VALUE table for a single object
pub fn detail_table(rows: &[(&str, String)]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    for (field, value) in rows {
        table.add_row(vec![format!("{}:", field), value.clone()]);
    }
    table
}

/// Render an optional string, "-" when absent or empty
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("x")), "x");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn test_detail_table_rows() {
        let table = detail_table(&[("ID", "r-1".to_string()), ("Name", "auditor".to_string())]);
        let rendered = table.to_string();
        assert!(rendered.contains("ID:"));
        assert!(rendered.contains("r-1"));
        assert!(rendered.contains("auditor"));
    }
}
