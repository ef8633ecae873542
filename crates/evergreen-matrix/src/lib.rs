//! Evergreen task matrix generation for the C driver.
//!
//! Turns five orthogonal configuration axes into the test-task and compile-task
//! sections of the Evergreen `config.yml`. Pure computation with no I/O beyond
//! the output sink handed to the emitter.
//!
//! # Modules
//!
//! - [`axes`] — The five fixed axis enumerations and their labels
//! - [`task`] — Test task and compile task records, plus the order-preserving compile task set
//! - [`expander`] — Cartesian expansion, validity filtering, naming and compile-task dedup
//! - [`emitter`] — Askama-backed rendering of the full document in fixed section order
//! - [`verify`] — Structural checks over an emitted document (unique names, resolvable deps)

pub mod axes;
pub mod emitter;
pub mod expander;
pub mod task;
pub mod verify;

pub use axes::{Auth, AxisError, Sasl, TlsBackend, Topology, Version};
pub use emitter::{EmitError, Emitter};
pub use expander::{expand, Expansion, ExpansionOptions};
pub use task::{CompileTask, CompileTaskSet, TestTask};
pub use verify::{verify_document, verify_file, Finding, Severity, VerificationReport, VerifyError};
