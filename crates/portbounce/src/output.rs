//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`
//! for key/value detail views, structured formats use serde, plain emits a
//! single scriptable value.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Green when the step succeeded, yellow when it was tolerated.
pub fn paint_status(text: &str, ok: bool, color: bool) -> String {
    match (color, ok) {
        (false, _) => text.to_owned(),
        (true, true) => text.green().to_string(),
        (true, false) => text.yellow().to_string(),
    }
}

// ── Render settings ──────────────────────────────────────────────────

/// Resolved presentation flags for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct Render {
    pub format: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

impl Render {
    pub fn print(&self, output: &str) {
        print_output(output, self.quiet);
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// One row of a key/value detail table.
#[derive(Tabled)]
pub struct Field {
    #[tabled(rename = "Field")]
    pub key: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl Field {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// `table` builds a two-column detail view from `fields_fn`; `plain`
/// prints whatever `id_fn` returns.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    fields_fn: impl Fn(&T) -> Vec<Field>,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => Ok(render_table(&fields_fn(data))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(data)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputFormat::Plain => Ok(id_fn(data)),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Sample {
        task_id: String,
        status: String,
    }

    fn sample() -> Sample {
        Sample {
            task_id: "task-1".into(),
            status: "SUCCESS".into(),
        }
    }

    fn render(format: OutputFormat) -> String {
        render_single(
            format,
            &sample(),
            |s| {
                vec![
                    Field::new("Task", s.task_id.clone()),
                    Field::new("Status", s.status.clone()),
                ]
            },
            |s| s.status.clone(),
        )
        .unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn table_lists_fields() {
        let out = render(OutputFormat::Table);
        assert!(out.contains("Task"));
        assert!(out.contains("task-1"));
        assert!(out.contains("SUCCESS"));
    }

    #[test]
    fn structured_formats_use_serde_names() {
        assert!(render(OutputFormat::Json).contains("\"task_id\": \"task-1\""));
        assert_eq!(
            render(OutputFormat::JsonCompact),
            r#"{"task_id":"task-1","status":"SUCCESS"}"#
        );
        assert!(render(OutputFormat::Yaml).contains("status: SUCCESS"));
    }

    #[test]
    fn plain_prints_the_scriptable_value() {
        assert_eq!(render(OutputFormat::Plain), "SUCCESS");
    }

    #[test]
    fn status_is_uncolored_when_disabled() {
        assert_eq!(paint_status("done", true, false), "done");
        assert_ne!(paint_status("done", true, true), "done");
    }
}
