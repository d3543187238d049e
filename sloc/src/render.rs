//! Rendering a report for the terminal or as JSON

use console::Style;
use sloclib::{LocTable, Report};

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Parse a `--output` value; clap has already restricted the choices.
    pub fn from_arg(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Render `report` in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Aligned table. The header and totals rows are bold when stdout is a
/// terminal; padding is computed on the plain text first.
fn render_table(report: &Report) -> String {
    let table = LocTable::from_report(report);
    let bold = Style::new().bold();

    let mut out = String::new();
    out.push_str(&bold.apply_to(table.header_line()).to_string());
    out.push('\n');

    for row in &table.rows {
        let line = table.format_line(&row.cells);
        if row.is_total {
            out.push_str(&bold.apply_to(line).to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sloclib::{LanguageRegistry, ReportOptions, Tally};

    fn sample_report() -> Report {
        let registry = LanguageRegistry::builtin();
        let mut tally = Tally::new(registry.len());
        let rust = tally.slot_mut(registry.lookup("Rust").unwrap());
        rust.files = 2;
        rust.total = 30;
        rust.code = 20;
        rust.comments = 6;
        rust.blanks = 4;
        Report::from_tally(&registry, &tally, ReportOptions::new())
    }

    #[test]
    fn test_output_format_from_arg() {
        assert_eq!(OutputFormat::from_arg("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_arg("table"), OutputFormat::Table);
    }

    #[test]
    fn test_render_table_plain() {
        console::set_colors_enabled(false);
        let out = render(&sample_report(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Language  Files  Code  Comment  Blank  Total");
        assert_eq!(lines[1], "    Rust      2    20        6      4     30");
        assert_eq!(lines[2], "   Total      2    20        6      4     30");
    }

    #[test]
    fn test_render_json() {
        let out = render(&sample_report(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("Invalid JSON output");

        assert_eq!(parsed["rows"][0]["name"], "Rust");
        assert_eq!(parsed["rows"][0]["code"], 20);
        assert_eq!(parsed["rows"][1]["is_total"], true);
        assert_eq!(parsed["total"]["files"], 2);
    }
}
