//! `evergreen-ctl list`: print task names, one per line.

use std::sync::Arc;

use evergreen_matrix::{expand, Expansion, ExpansionOptions};

use crate::cli_config::CliConfig;
use crate::output;

pub(crate) fn handle_list_command(
    compile: bool,
    filter: Option<&str>,
    multi_mongos: Option<bool>,
    config: &CliConfig,
) -> anyhow::Result<()> {
    let expansion = expand(&ExpansionOptions {
        multi_mongos: config.multi_mongos(multi_mongos),
    });

    let lines = if compile {
        compile_lines(&expansion, filter)
    } else {
        test_lines(&expansion, filter)
    };

    for line in lines {
        output::plain(line);
    }
    Ok(())
}

fn matches(name: &str, filter: Option<&str>) -> bool {
    filter.map_or(true, |f| name.contains(f))
}

fn test_lines(expansion: &Expansion, filter: Option<&str>) -> Vec<String> {
    expansion
        .tests
        .iter()
        .filter(|t| matches(&t.name, filter))
        .map(|t| t.name.clone())
        .collect()
}

/// Compile task identities with the number of test tasks that need each one.
fn compile_lines(expansion: &Expansion, filter: Option<&str>) -> Vec<String> {
    expansion
        .compile_tasks
        .iter()
        .filter(|c| matches(c.identity(), filter))
        .map(|c| {
            let dependents = expansion
                .tests
                .iter()
                .filter(|t| Arc::ptr_eq(&t.depends_on, c))
                .count();
            format!("{}\t{}", c.identity(), dependents)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all_tests() {
        let expansion = expand(&ExpansionOptions::default());
        let lines = test_lines(&expansion, None);
        assert_eq!(lines.len(), 210);
        assert_eq!(lines[0], "test-2.4-server-noauth-nosasl-nossl");
    }

    #[test]
    fn test_list_filtered_tests() {
        let expansion = expand(&ExpansionOptions::default());
        let lines = test_lines(&expansion, Some("3.2-replica-set-noauth"));
        // 2 sasl × 4 tls
        assert_eq!(lines.len(), 8);
        assert!(lines.contains(&"test-3.2-replica-set-noauth-sasl-openssl".to_string()));
    }

    #[test]
    fn test_list_compile_tasks_with_dependents() {
        let expansion = expand(&ExpansionOptions::default());
        let lines = compile_lines(&expansion, None);
        assert_eq!(lines.len(), 8);
        // nossl builds only serve noauth tests: 5 versions × 3 topologies
        assert_eq!(lines[0], "debug-compile-nosasl-nossl\t15");
        // TLS builds serve both auth modes
        assert_eq!(lines[1], "debug-compile-nosasl-openssl\t30");
    }

    #[test]
    fn test_list_compile_tasks_filtered() {
        let expansion = expand(&ExpansionOptions::default());
        let lines = compile_lines(&expansion, Some("-winssl"));
        assert_eq!(
            lines,
            vec![
                "debug-compile-nosasl-winssl\t30".to_string(),
                "debug-compile-sasl-winssl\t30".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_compile_filter_is_substring_match() {
        let expansion = expand(&ExpansionOptions::default());
        // darwinssl contains winssl
        let lines = compile_lines(&expansion, Some("winssl"));
        assert_eq!(
            lines,
            vec![
                "debug-compile-nosasl-darwinssl\t30".to_string(),
                "debug-compile-nosasl-winssl\t30".to_string(),
                "debug-compile-sasl-darwinssl\t30".to_string(),
                "debug-compile-sasl-winssl\t30".to_string(),
            ]
        );
    }
}
