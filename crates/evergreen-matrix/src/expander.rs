//! Cartesian expansion of the axes into test tasks and their compile tasks.

use crate::axes::{Auth, Sasl, TlsBackend, Topology, Version};
use crate::task::{CompileTask, CompileTaskSet, TestTask};

/// Knobs for the expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// Add the `sharded_cluster_multi_mongos` topology after the standard ones.
    pub multi_mongos: bool,
}

impl ExpansionOptions {
    /// Topologies iterated for these options, in order.
    pub fn topologies(&self) -> Vec<Topology> {
        let mut topologies = Topology::ALL.to_vec();
        if self.multi_mongos {
            topologies.push(Topology::ShardedClusterMultiMongos);
        }
        topologies
    }
}

/// Result of expanding the axes.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// Test tasks in version → topology → auth → sasl → tls order.
    pub tests: Vec<TestTask>,
    /// Compile tasks in first-discovery order.
    pub compile_tasks: CompileTaskSet,
}

/// Authenticated connections require transport security.
pub fn is_allowed(auth: Auth, tls_backend: TlsBackend) -> bool {
    !(auth == Auth::Auth && tls_backend == TlsBackend::NoSsl)
}

/// Name of the test task for one axis combination.
pub fn test_task_name(
    version: Version,
    topology: Topology,
    auth: Auth,
    sasl: Sasl,
    tls_backend: TlsBackend,
) -> String {
    format!(
        "test-{}-{}{}-{}-{}-{}",
        version,
        topology.hyphenated(),
        topology.name_suffix(),
        auth,
        sasl,
        tls_backend
    )
}

/// Expand every valid axis combination.
pub fn expand(options: &ExpansionOptions) -> Expansion {
    let mut tests = Vec::new();
    let mut compile_tasks = CompileTaskSet::new();

    for version in Version::ALL {
        for topology in options.topologies() {
            for auth in Auth::ALL {
                for sasl in Sasl::ALL {
                    for tls_backend in TlsBackend::ALL {
                        if !is_allowed(auth, tls_backend) {
                            tracing::trace!(
                                %version,
                                %topology,
                                %sasl,
                                "Skipping auth without TLS"
                            );
                            continue;
                        }

                        let depends_on = compile_tasks
                            .get_or_insert(CompileTask::from_axes(sasl, tls_backend));

                        tests.push(TestTask {
                            name: test_task_name(version, topology, auth, sasl, tls_backend),
                            tags: [
                                tls_backend.to_string(),
                                sasl.to_string(),
                                auth.to_string(),
                                topology.hyphenated(),
                                version.to_string(),
                            ],
                            depends_on,
                            version,
                            topology,
                            auth,
                            sasl,
                            tls_backend,
                            uri_override: topology.uri_override().map(str::to_string),
                        });
                    }
                }
            }
        }
    }

    tracing::debug!(
        test_tasks = tests.len(),
        compile_tasks = compile_tasks.len(),
        multi_mongos = options.multi_mongos,
        "Expanded task matrix"
    );

    Expansion {
        tests,
        compile_tasks,
    }
}
