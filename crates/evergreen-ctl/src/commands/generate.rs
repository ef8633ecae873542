//! `evergreen-ctl generate`: expand the axes and emit the task document.

use std::path::{Path, PathBuf};

use anyhow::Context;
use evergreen_matrix::{expand, Emitter, ExpansionOptions};

use crate::cli_config::{expand_path, CliConfig};
use crate::output;

pub(crate) fn handle_generate_command(
    output_path: Option<PathBuf>,
    multi_mongos: Option<bool>,
    config: &CliConfig,
) -> anyhow::Result<()> {
    let options = ExpansionOptions {
        multi_mongos: config.multi_mongos(multi_mongos),
    };
    let expansion = expand(&options);
    let emitter = Emitter::new();

    let target = output_path.or_else(|| config.output.as_deref().map(expand_path));

    match target {
        Some(path) => {
            let document = emitter
                .render(&expansion)
                .context("Failed to render task document")?;
            write_document(&path, &document)?;
            tracing::info!(
                path = %path.display(),
                test_tasks = expansion.tests.len(),
                compile_tasks = expansion.compile_tasks.len(),
                "Wrote task document"
            );
            output::success(format!(
                "Generated {} test tasks and {} compile tasks into {}",
                expansion.tests.len(),
                expansion.compile_tasks.len(),
                path.display()
            ));
        }
        None => {
            let stdout = std::io::stdout();
            emitter
                .emit(&expansion, &mut stdout.lock())
                .context("Failed to emit task document")?;
        }
    }

    Ok(())
}

fn write_document(path: &Path, document: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, document)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))
}
