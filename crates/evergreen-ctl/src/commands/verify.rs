//! `evergreen-ctl verify`: structural checks over a task document.

use std::path::Path;

use anyhow::Context;
use evergreen_matrix::{
    expand, verify_document, verify_file, Emitter, ExpansionOptions, Severity,
    VerificationReport,
};

use crate::cli_config::CliConfig;
use crate::output;

pub(crate) fn handle_verify_command(
    path: Option<&Path>,
    json: bool,
    multi_mongos: Option<bool>,
    config: &CliConfig,
) -> anyhow::Result<()> {
    let report = match path {
        Some(path) => verify_file(path)?,
        None => {
            let expansion = expand(&ExpansionOptions {
                multi_mongos: config.multi_mongos(multi_mongos),
            });
            let document = Emitter::new()
                .render(&expansion)
                .context("Failed to render task document")?;
            verify_document(&document)?
        }
    };

    if json {
        output::plain(serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, path);
    }

    let errors = error_count(&report);
    if errors > 0 {
        anyhow::bail!("Document failed verification with {errors} error(s)");
    }
    Ok(())
}

fn error_count(report: &VerificationReport) -> usize {
    report
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count()
}

fn print_report(report: &VerificationReport, path: Option<&Path>) {
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "generated document".to_string());

    output::header(format!("Verification of {source}"));
    output::label("Tasks", report.task_count);
    output::label("Compile tasks", report.compile_task_count);
    output::label("Test tasks", report.test_task_count);
    output::blank();

    if report.findings.is_empty() {
        output::check(true, "Task names unique, all dependencies resolve");
        return;
    }

    for finding in &report.findings {
        match finding.severity {
            Severity::Error => output::check(false, format!("[{}] {}", finding.code, finding.message)),
            Severity::Warning => output::warning(format!("[{}] {}", finding.code, finding.message)),
        }
    }
    if report.valid {
        output::hint("Warnings only; the document is usable.");
    }
}
