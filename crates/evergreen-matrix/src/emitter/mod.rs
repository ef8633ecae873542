//! Render an [`Expansion`] into the Evergreen task document.
//!
//! The document is assembled in a fixed order:
//!
//! ```text
//! # Compile Matrix {{{
//!   static blocks (release archive, fixed-flag and analysis builds)
//!   one debug-compile-{sasl}-{tls} task per compile task, discovery order
//! # }}}
//! # Test Matrix {{{
//!   one test task per expanded combination, expansion order
//! # }}}
//! ```
//!
//! Rendering happens in memory; the sink only sees a complete document.

mod boilerplate;
mod templates;

use std::io::Write;

use askama::Template;

use crate::axes::TlsBackend;
use crate::expander::Expansion;
use crate::task::{CompileTask, TestTask};

pub use boilerplate::StaticBlock;
use templates::{tag_list, CompileVariantTemplate, TestTaskTemplate};

pub const COMPILE_MATRIX_HEADER: &str = "# Compile Matrix {{{";
pub const TEST_MATRIX_HEADER: &str = "# Test Matrix {{{";
pub const SECTION_FOOTER: &str = "# }}}";

/// Tag shared by every derived compile task.
const DEBUG_COMPILE_TAG: &str = "debug-compile";

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error(
        "Unknown tls backend '{tls_backend}' for compile task '{identity}' (sasl '{sasl}')"
    )]
    UnknownTlsBackend {
        identity: String,
        sasl: String,
        tls_backend: String,
    },
    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        source: askama::Error,
    },
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Value passed as `SASL=` to the compile script.
pub fn sasl_param(sasl: &str) -> &str {
    match sasl {
        "nosasl" => "no",
        other => other,
    }
}

/// Value passed as `SSL=` to the compile script, if the backend is known.
pub fn ssl_param(tls_backend: &str) -> Option<&'static str> {
    tls_backend
        .parse::<TlsBackend>()
        .ok()
        .map(|backend| backend.compile_param())
}

/// Renders task documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter;

impl Emitter {
    pub fn new() -> Self {
        Self
    }

    /// Render the document and write it to `out` in one piece.
    pub fn emit<W: Write>(&self, expansion: &Expansion, out: &mut W) -> Result<(), EmitError> {
        let document = self.render(expansion)?;
        out.write_all(document.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Render the full document into a string.
    pub fn render(&self, expansion: &Expansion) -> Result<String, EmitError> {
        let mut doc = String::from("\n");

        doc.push_str(COMPILE_MATRIX_HEADER);
        doc.push('\n');
        for block in StaticBlock::ALL {
            push_block(&mut doc, block.body());
        }
        tracing::debug!(blocks = StaticBlock::ALL.len(), "Rendered static compile blocks");

        for compile_task in &expansion.compile_tasks {
            push_block(&mut doc, &render_compile_task(compile_task)?);
        }
        tracing::debug!(
            compile_tasks = expansion.compile_tasks.len(),
            "Rendered compile variants"
        );
        doc.push_str(SECTION_FOOTER);
        doc.push_str("\n\n");

        doc.push_str(TEST_MATRIX_HEADER);
        doc.push('\n');
        for test in &expansion.tests {
            push_block(&mut doc, &render_test_task(test)?);
        }
        tracing::debug!(test_tasks = expansion.tests.len(), "Rendered test matrix");
        doc.push_str(SECTION_FOOTER);
        doc.push_str("\n\n");

        Ok(doc)
    }
}

fn push_block(doc: &mut String, block: &str) {
    doc.push_str(block.trim_end());
    doc.push_str("\n\n");
}

/// Render one derived compile task.
pub fn render_compile_task(task: &CompileTask) -> Result<String, EmitError> {
    let ssl = ssl_param(task.tls_backend()).ok_or_else(|| EmitError::UnknownTlsBackend {
        identity: task.identity().to_string(),
        sasl: task.sasl().to_string(),
        tls_backend: task.tls_backend().to_string(),
    })?;

    CompileVariantTemplate {
        identity: task.identity(),
        tags: tag_list(&[DEBUG_COMPILE_TAG, task.sasl(), task.tls_backend()]),
        sasl_param: sasl_param(task.sasl()),
        ssl_param: ssl,
    }
    .render()
    .map_err(|e| EmitError::Render {
        template: task.identity().to_string(),
        source: e,
    })
}

/// Render one test task.
pub fn render_test_task(task: &TestTask) -> Result<String, EmitError> {
    TestTaskTemplate {
        name: &task.name,
        tags: tag_list(&task.tags),
        depends_on: task.depends_on.identity(),
        version: task.version.as_str(),
        topology: task.topology.deployment().as_str(),
        auth: task.auth.as_str(),
        ssl: task.tls_backend.as_str(),
        uri: task.uri_override.as_deref().unwrap_or(""),
    }
    .render()
    .map_err(|e| EmitError::Render {
        template: task.name.clone(),
        source: e,
    })
}
