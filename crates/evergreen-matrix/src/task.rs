//! Test task and compile task records.
//!
//! A [`CompileTask`] is shared by every [`TestTask`] that needs the same
//! `(sasl, tls_backend)` build. [`CompileTaskSet`] owns the shared instances and
//! keeps them in first-discovery order.

use std::collections::HashMap;
use std::sync::Arc;

use crate::axes::{Auth, Sasl, TlsBackend, Topology, Version};

/// Derive the compile task identity for a `(sasl, tls_backend)` pair.
pub fn compile_task_identity(sasl: &str, tls_backend: &str) -> String {
    format!("debug-compile-{sasl}-{tls_backend}")
}

/// A prerequisite build for one `(sasl, tls_backend)` pair.
///
/// Labels are kept as strings; the emitter's lookup tables decide whether they
/// are renderable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileTask {
    identity: String,
    sasl: String,
    tls_backend: String,
}

impl CompileTask {
    pub fn new(sasl: impl Into<String>, tls_backend: impl Into<String>) -> Self {
        let sasl = sasl.into();
        let tls_backend = tls_backend.into();
        Self {
            identity: compile_task_identity(&sasl, &tls_backend),
            sasl,
            tls_backend,
        }
    }

    pub fn from_axes(sasl: Sasl, tls_backend: TlsBackend) -> Self {
        Self::new(sasl.as_str(), tls_backend.as_str())
    }

    /// Task name other tasks reference in `depends_on`.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn sasl(&self) -> &str {
        &self.sasl
    }

    pub fn tls_backend(&self) -> &str {
        &self.tls_backend
    }
}

/// Order-preserving set of compile tasks keyed by identity.
#[derive(Debug, Clone, Default)]
pub struct CompileTaskSet {
    entries: Vec<Arc<CompileTask>>,
    index: HashMap<String, usize>,
}

impl CompileTaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared task for `candidate`'s identity, recording `candidate`
    /// if this identity has not been seen before.
    pub fn get_or_insert(&mut self, candidate: CompileTask) -> Arc<CompileTask> {
        if let Some(&idx) = self.index.get(candidate.identity()) {
            return Arc::clone(&self.entries[idx]);
        }

        let shared = Arc::new(candidate);
        self.index
            .insert(shared.identity().to_string(), self.entries.len());
        self.entries.push(Arc::clone(&shared));
        shared
    }

    pub fn get(&self, identity: &str) -> Option<&Arc<CompileTask>> {
        self.index.get(identity).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.index.contains_key(identity)
    }

    /// Iterate in first-discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<CompileTask>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CompileTaskSet {
    type Item = &'a Arc<CompileTask>;
    type IntoIter = std::slice::Iter<'a, Arc<CompileTask>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One CI job running the test suite against a server configuration.
#[derive(Debug, Clone)]
pub struct TestTask {
    pub name: String,
    /// `[tls_backend, sasl, auth, topology, version]`, in emission order.
    pub tags: [String; 5],
    pub depends_on: Arc<CompileTask>,
    pub version: Version,
    pub topology: Topology,
    pub auth: Auth,
    pub sasl: Sasl,
    pub tls_backend: TlsBackend,
    pub uri_override: Option<String>,
}

impl TestTask {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
