//! `evergreen-ctl init`: write a starter `.evergreen-ctl.toml`.

use std::path::Path;

use anyhow::Context;
use askama::Template;

use crate::cli_config::CONFIG_FILENAME;
use crate::output;

#[derive(Template, Debug)]
#[template(path = "init-config.toml", escape = "none")]
struct InitConfigTemplate<'a> {
    output: Option<&'a str>,
    multi_mongos: bool,
}

pub(crate) fn handle_init_command(
    project_dir: &Path,
    output_path: Option<&str>,
    multi_mongos: bool,
    force: bool,
) -> anyhow::Result<()> {
    let config_path = project_dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        output::warning(format!("{CONFIG_FILENAME} already exists in this directory."));
        output::hint("Pass --force to overwrite it.");
        anyhow::bail!("{CONFIG_FILENAME} already exists");
    }

    let content = InitConfigTemplate {
        output: output_path,
        multi_mongos,
    }
    .render()
    .context("Template rendering failed")?;

    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    output::success(format!("Created {CONFIG_FILENAME}"));
    output::blank();
    output::hint("Next steps:");
    output::plain("  evergreen-ctl summary     # Inspect the axes and totals");
    output::plain("  evergreen-ctl generate    # Emit the task document");
    output::plain("  evergreen-ctl verify      # Check names and dependencies");

    Ok(())
}
