//! Rendering audit results in the supported output formats.

pub mod table;

pub use table::Table;

use std::fmt::Write as _;

use clap::ValueEnum;
use console::style;

use crate::audit::ToolCheckResult;
use crate::error::Result;

/// Version text longer than this is truncated in the terminal table.
const MAX_FOUND_WIDTH: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    JsonCompact,
    Csv,
    Xml,
    Html,
}

/// Render `results` in the requested format.
pub fn render(results: &[ToolCheckResult], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Table => render_table(results),
        OutputFormat::Json => serde_json::to_string_pretty(results)
            .map_err(|err| anyhow::anyhow!("serializing results: {err}"))?,
        OutputFormat::JsonCompact => serde_json::to_string(results)
            .map_err(|err| anyhow::anyhow!("serializing results: {err}"))?,
        OutputFormat::Csv => render_csv(results),
        OutputFormat::Xml => render_xml(results),
        OutputFormat::Html => render_html(results),
    };
    Ok(rendered)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn modified_cell(result: &ToolCheckResult) -> String {
    result
        .last_modified
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn render_table(results: &[ToolCheckResult]) -> String {
    let mut table = Table::new(vec![
        "Tool", "Found", "Parsed", "Desired", "Status", "Modified",
    ]);
    for result in results {
        let found = truncate(
            result.found_version.as_deref().unwrap_or(""),
            MAX_FOUND_WIDTH,
        );
        let cells = vec![
            result.tool.clone(),
            found,
            result.parsed_version.clone().unwrap_or_default(),
            result.desired_version.clone(),
            result.status(),
            modified_cell(result),
        ];
        if result.is_problem() {
            table.add_row(cells.iter().map(|c| style(c).red().to_string()).collect());
        } else {
            table.add_row(cells);
        }
    }
    table.render()
}

fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn render_csv(results: &[ToolCheckResult]) -> String {
    let mut out = String::from(
        "tool,desired_version,is_available,is_snapshot,found_version,parsed_version,is_compatible,is_broken,last_modified\n",
    );
    for result in results {
        let row = [
            result.tool.clone(),
            result.desired_version.clone(),
            result.is_available.to_string(),
            result.is_snapshot.to_string(),
            result.found_version.clone().unwrap_or_default(),
            result.parsed_version.clone().unwrap_or_default(),
            result.is_compatible.to_string(),
            result.is_broken.to_string(),
            result
                .last_modified
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_default(),
        ];
        let escaped: Vec<String> = row.iter().map(|field| csv_escape(field)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    out
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_xml(results: &[ToolCheckResult]) -> String {
    let mut out = String::from("<results>\n");
    for result in results {
        out.push_str("  <result>\n");
        let fields = [
            ("tool", result.tool.clone()),
            ("desired_version", result.desired_version.clone()),
            ("is_available", result.is_available.to_string()),
            (
                "found_version",
                result.found_version.clone().unwrap_or_default(),
            ),
            (
                "parsed_version",
                result.parsed_version.clone().unwrap_or_default(),
            ),
            ("status", result.status()),
            ("is_broken", result.is_broken.to_string()),
        ];
        for (name, value) in fields {
            let _ = writeln!(out, "    <{name}>{}</{name}>", xml_escape(&value));
        }
        out.push_str("  </result>\n");
    }
    out.push_str("</results>\n");
    out
}

fn html_escape(text: &str) -> String {
    xml_escape(text)
}

fn render_html(results: &[ToolCheckResult]) -> String {
    let mut out = String::from(
        "<table>\n  <thead>\n    <tr><th>Tool</th><th>Found</th><th>Parsed</th><th>Desired</th><th>Status</th><th>Modified</th><th>Install Command</th><th>Install Docs</th></tr>\n  </thead>\n  <tbody>\n",
    );
    for result in results {
        let cells = [
            result.tool.clone(),
            result.found_version.clone().unwrap_or_default(),
            result.parsed_version.clone().unwrap_or_default(),
            result.desired_version.clone(),
            result.status(),
            modified_cell(result),
            result.tool_config.install_command.clone().unwrap_or_default(),
            result.tool_config.install_docs.clone().unwrap_or_default(),
        ];
        out.push_str("    <tr>");
        for cell in cells {
            let _ = write!(out, "<td>{}</td>", html_escape(&cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("  </tbody>\n</table>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Verdict;
    use crate::config::ToolConfig;

    fn sample() -> Vec<ToolCheckResult> {
        let mut config = ToolConfig::new("jq");
        config.install_command = Some("apt install jq".into());
        vec![
            ToolCheckResult {
                tool: "jq".into(),
                desired_version: ">=1.6".into(),
                is_needed_for_os: true,
                is_available: true,
                is_snapshot: false,
                found_version: Some("jq-1.7".into()),
                parsed_version: Some("1.7.0".into()),
                is_compatible: Verdict::Compatible,
                is_broken: false,
                last_modified: None,
                tool_config: config,
            },
            ToolCheckResult {
                tool: "terraform".into(),
                desired_version: ">=1.5.0".into(),
                is_needed_for_os: true,
                is_available: false,
                is_snapshot: false,
                found_version: None,
                parsed_version: None,
                is_compatible: Verdict::Indeterminate("Can't tell".into()),
                is_broken: true,
                last_modified: None,
                tool_config: ToolConfig::new("terraform"),
            },
        ]
    }

    #[test]
    fn table_contains_every_tool_and_status() {
        let out = render(&sample(), OutputFormat::Table).unwrap();
        assert!(out.contains("jq"));
        assert!(out.contains("Compatible"));
        assert!(out.contains("terraform"));
        assert!(out.contains("Not available"));
    }

    #[test]
    fn long_found_version_is_truncated_in_table() {
        let mut results = sample();
        results[0].found_version =
            Some("a very very long banner that keeps going and going".into());
        let out = render(&results, OutputFormat::Table).unwrap();
        assert!(out.contains("..."));
        assert!(!out.contains("keeps going and going"));
    }

    #[test]
    fn json_is_parseable_and_complete() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: Vec<ToolCheckResult> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn json_compact_is_one_line() {
        let out = render(&sample(), OutputFormat::JsonCompact).unwrap();
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let out = render(&sample(), OutputFormat::Csv).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "tool,desired_version,is_available,is_snapshot,found_version,parsed_version,is_compatible,is_broken,last_modified"
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("plain"), "plain");
    }

    #[test]
    fn xml_escapes_special_characters() {
        let mut results = sample();
        results[0].desired_version = ">=1.6 <2.0".into();
        let out = render(&results, OutputFormat::Xml).unwrap();
        assert!(out.contains("&gt;=1.6 &lt;2.0"));
        assert!(out.contains("<results>"));
    }

    #[test]
    fn html_includes_install_columns() {
        let out = render(&sample(), OutputFormat::Html).unwrap();
        assert!(out.contains("<th>Install Command</th>"));
        assert!(out.contains("apt install jq"));
    }
}
