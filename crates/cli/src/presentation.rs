// crates/cli/src/presentation.rs
use comfy_table::{CellAlignment, Table};
use std::fmt::Write;
use text_stats_engine::Report;
use text_stats_engine::options::OutputFormat;

use crate::error::Result;

const CSV_HEADER: [&str; 9] = [
    "words",
    "characters",
    "characters_without_spaces",
    "sentences",
    "paragraphs",
    "reading_time",
    "avg_word_length",
    "limit",
    "limit_exceeded",
];

/// Render and print `report` to stdout.
///
/// # Errors
///
/// Fails when the report cannot be serialized.
pub fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    let rendered = render(report, format)?;
    println!("{}", rendered.trim_end_matches('\n'));
    Ok(())
}

/// Render `report` in `format` without printing it.
///
/// # Errors
///
/// Fails when the report cannot be serialized.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
        OutputFormat::Jsonl => render_jsonl(report)?,
        OutputFormat::Md => render_markdown(report),
        OutputFormat::Csv => render_sv(report, ","),
        OutputFormat::Tsv => render_sv(report, "\t"),
    })
}

/// Label/value pairs in display order.
fn rows(report: &Report) -> [(&'static str, String); 7] {
    let m = &report.metrics;
    [
        ("Words", m.words.to_string()),
        (
            "Characters",
            format!("{} / {}", report.limit.used, report.limit.limit),
        ),
        ("Characters (no spaces)", m.characters_without_spaces.to_string()),
        ("Sentences", m.sentences.to_string()),
        ("Paragraphs", m.paragraphs.to_string()),
        ("Reading Time", format!("{} min", m.reading_time)),
        (
            "Avg. Word Length",
            format!("{} chars", m.avg_word_length_display()),
        ),
    ]
}

fn render_table(report: &Report) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    for (label, value) in rows(report) {
        table.add_row(vec![label.to_string(), value]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    let mut out = format!(
        "text_stats v{} · {} wpm\n{table}\n",
        crate::VERSION,
        report.words_per_minute
    );
    if report.limit.exceeded {
        let _ = writeln!(
            out,
            "[text_stats] Over display limit by {} characters.",
            report.limit.used - report.limit.limit
        );
    }
    out
}

fn render_jsonl(report: &Report) -> Result<String> {
    let mut value = serde_json::to_value(report)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("type".to_string(), "metrics".into());
    }
    Ok(serde_json::to_string(&value)?)
}

fn render_markdown(report: &Report) -> String {
    let mut out = String::from("### Text Statistics\n\n| Metric | Value |\n|:---|---:|\n");
    for (label, value) in rows(report) {
        let _ = writeln!(out, "| {label} | {value} |");
    }
    out
}

fn render_sv(report: &Report, delimiter: &str) -> String {
    let m = &report.metrics;
    let values = [
        m.words.to_string(),
        m.characters.to_string(),
        m.characters_without_spaces.to_string(),
        m.sentences.to_string(),
        m.paragraphs.to_string(),
        m.reading_time.to_string(),
        m.avg_word_length_display(),
        report.limit.limit.to_string(),
        report.limit.exceeded.to_string(),
    ];
    format!(
        "{}\n{}\n",
        CSV_HEADER.join(delimiter),
        values.join(delimiter)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_stats_engine::analyze;
    use text_stats_engine::config::{Config, ConfigBuilder};

    fn report(text: &str) -> Report {
        analyze(&Config::default(), text).unwrap()
    }

    #[test]
    fn table_lists_every_metric() {
        let out = render(&report("Hello world."), OutputFormat::Table).unwrap();
        for label in [
            "Words",
            "Characters",
            "Sentences",
            "Paragraphs",
            "Reading Time",
            "Avg. Word Length",
        ] {
            assert!(out.contains(label), "missing {label}");
        }
        assert!(out.contains("12 / 5000"));
        assert!(out.contains("5.50 chars"));
        assert!(!out.contains("Over display limit"));
    }

    #[test]
    fn table_mentions_limit_overflow() {
        let config = ConfigBuilder::default().char_limit(4usize).build().unwrap();
        let report = analyze(&config, "abcdef").unwrap();
        let out = render(&report, OutputFormat::Table).unwrap();
        assert!(out.contains("Over display limit by 2 characters."));
    }

    #[test]
    fn csv_has_header_and_one_row() {
        let out = render(&report("Hello world"), OutputFormat::Csv).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("words,characters,"));
        assert_eq!(lines[1], "2,11,10,0,1,1,5.00,5000,false");
    }

    #[test]
    fn tsv_uses_tabs() {
        let out = render(&report("a"), OutputFormat::Tsv).unwrap();
        assert!(out.lines().all(|l| l.contains('\t')));
    }

    #[test]
    fn jsonl_is_single_tagged_line() {
        let out = render(&report("Hi."), OutputFormat::Jsonl).unwrap();
        assert_eq!(out.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["type"], "metrics");
        assert_eq!(value["sentences"], 1);
    }

    #[test]
    fn markdown_renders_table_rows() {
        let out = render(&report("One.\n\nTwo."), OutputFormat::Md).unwrap();
        assert!(out.starts_with("### Text Statistics"));
        assert!(out.contains("| Paragraphs | 2 |"));
    }

    #[test]
    fn yaml_uses_camel_case_keys() {
        let out = render(&report("Hello world"), OutputFormat::Yaml).unwrap();
        assert!(out.contains("charactersWithoutSpaces: 10"));
        assert!(out.contains("readingTime: 1"));
    }
}
