//! `evergreen-ctl summary`: axis values and matrix totals.

use evergreen_matrix::{expand, Auth, ExpansionOptions, Sasl, TlsBackend, Version};

use crate::cli_config::CliConfig;
use crate::output;

#[derive(Debug, PartialEq, Eq)]
struct MatrixTotals {
    combinations: usize,
    test_tasks: usize,
    compile_tasks: usize,
}

impl MatrixTotals {
    fn skipped(&self) -> usize {
        self.combinations - self.test_tasks
    }
}

fn totals(options: &ExpansionOptions) -> MatrixTotals {
    let expansion = expand(options);
    MatrixTotals {
        combinations: Version::ALL.len()
            * options.topologies().len()
            * Auth::ALL.len()
            * Sasl::ALL.len()
            * TlsBackend::ALL.len(),
        test_tasks: expansion.tests.len(),
        compile_tasks: expansion.compile_tasks.len(),
    }
}

fn join_labels<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn handle_summary_command(
    multi_mongos: Option<bool>,
    config: &CliConfig,
) -> anyhow::Result<()> {
    let options = ExpansionOptions {
        multi_mongos: config.multi_mongos(multi_mongos),
    };
    let totals = totals(&options);

    output::header("Axes");
    output::label("Versions", join_labels(&Version::ALL));
    output::label("Topologies", join_labels(&options.topologies()));
    output::label("Auth", join_labels(&Auth::ALL));
    output::label("SASL", join_labels(&Sasl::ALL));
    output::label("TLS backends", join_labels(&TlsBackend::ALL));
    output::blank();

    output::header("Matrix");
    output::label("Combinations", totals.combinations);
    output::label("Test tasks", totals.test_tasks);
    output::label("Skipped (auth without TLS)", totals.skipped());
    output::label("Compile tasks", totals.compile_tasks);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_totals() {
        let totals = totals(&ExpansionOptions::default());
        assert_eq!(
            totals,
            MatrixTotals {
                combinations: 240,
                test_tasks: 210,
                compile_tasks: 8,
            }
        );
        // 5 versions × 3 topologies × 2 sasl
        assert_eq!(totals.skipped(), 30);
    }

    #[test]
    fn test_multi_mongos_totals() {
        let totals = totals(&ExpansionOptions { multi_mongos: true });
        assert_eq!(totals.combinations, 320);
        assert_eq!(totals.test_tasks, 280);
        assert_eq!(totals.compile_tasks, 8);
    }

    #[test]
    fn test_join_labels() {
        assert_eq!(join_labels(&Auth::ALL), "noauth, auth");
        assert_eq!(
            join_labels(&TlsBackend::ALL),
            "nossl, openssl, darwinssl, winssl"
        );
    }
}
