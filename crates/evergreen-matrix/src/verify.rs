//! Structural checks over an emitted task document.
//!
//! The document body is a YAML sequence of task mappings; fold markers are plain
//! comments. Checks here cover what the CI engine relies on: globally unique task
//! names and `depends_on` references that resolve to a task defined earlier.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Tasks that legitimately carry no tags.
const UNTAGGED_ALLOWED: &[&str] = &["make-release-archive"];

/// Severity level for a verification finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single verification finding.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Machine-readable code (e.g., `DUPLICATE_TASK_NAME`).
    pub code: String,
    pub severity: Severity,
    pub message: String,
    /// Task name involved.
    pub task: String,
}

/// Verification result for a whole document.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// No error-level findings.
    pub valid: bool,
    pub findings: Vec<Finding>,
    pub task_count: usize,
    /// Tasks tagged `debug-compile`.
    pub compile_task_count: usize,
    /// Tasks named `test-*`.
    pub test_task_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("failed to read document '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse document YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
struct TaskEntry {
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    depends_on: Vec<DependencyEntry>,
}

#[derive(Debug, Deserialize)]
struct DependencyEntry {
    name: String,
    /// Set when the dependency lives in another build variant.
    variant: Option<String>,
}

/// Verify a document read from disk.
pub fn verify_file(path: &Path) -> Result<VerificationReport, VerifyError> {
    let document = std::fs::read_to_string(path).map_err(|e| VerifyError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    verify_document(&document)
}

/// Verify an in-memory document.
pub fn verify_document(document: &str) -> Result<VerificationReport, VerifyError> {
    let tasks: Vec<TaskEntry> = if has_content(document) {
        serde_yaml::from_str(document)?
    } else {
        Vec::new()
    };

    let mut findings = Vec::new();
    check_duplicate_names(&tasks, &mut findings);
    check_dependencies(&tasks, &mut findings);
    check_tags(&tasks, &mut findings);

    let valid = !findings.iter().any(|f| f.severity == Severity::Error);

    Ok(VerificationReport {
        valid,
        findings,
        task_count: tasks.len(),
        compile_task_count: tasks
            .iter()
            .filter(|t| t.tags.iter().any(|tag| tag == "debug-compile"))
            .count(),
        test_task_count: tasks.iter().filter(|t| t.name.starts_with("test-")).count(),
    })
}

/// Anything besides blank lines and comments.
fn has_content(document: &str) -> bool {
    document.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    })
}

fn check_duplicate_names(tasks: &[TaskEntry], findings: &mut Vec<Finding>) {
    let mut seen = HashSet::new();
    for task in tasks {
        if !seen.insert(task.name.as_str()) {
            findings.push(Finding {
                code: "DUPLICATE_TASK_NAME".into(),
                severity: Severity::Error,
                message: format!("Duplicate task name: '{}'", task.name),
                task: task.name.clone(),
            });
        }
    }
}

fn check_dependencies(tasks: &[TaskEntry], findings: &mut Vec<Finding>) {
    // First definition wins; duplicates are reported separately.
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (idx, task) in tasks.iter().enumerate() {
        positions.entry(task.name.as_str()).or_insert(idx);
    }

    for (idx, task) in tasks.iter().enumerate() {
        for dep in &task.depends_on {
            if dep.name == task.name {
                findings.push(Finding {
                    code: "SELF_DEPENDENCY".into(),
                    severity: Severity::Error,
                    message: format!("Task '{}' depends on itself", task.name),
                    task: task.name.clone(),
                });
                continue;
            }

            match positions.get(dep.name.as_str()) {
                None => findings.push(Finding {
                    code: "MISSING_DEP_REF".into(),
                    severity: Severity::Error,
                    message: format!(
                        "Task '{}' depends on '{}' which does not exist",
                        task.name, dep.name
                    ),
                    task: task.name.clone(),
                }),
                Some(&dep_idx) if dep_idx > idx && dep.variant.is_none() => {
                    findings.push(Finding {
                        code: "FORWARD_DEP_REF".into(),
                        severity: Severity::Error,
                        message: format!(
                            "Task '{}' depends on '{}' which is defined later",
                            task.name, dep.name
                        ),
                        task: task.name.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }
}

fn check_tags(tasks: &[TaskEntry], findings: &mut Vec<Finding>) {
    for task in tasks {
        if task.tags.is_empty() && !UNTAGGED_ALLOWED.contains(&task.name.as_str()) {
            findings.push(Finding {
                code: "NO_TAGS".into(),
                severity: Severity::Warning,
                message: format!("Task '{}' has no tags", task.name),
                task: task.name.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::Emitter;
    use crate::expander::{expand, ExpansionOptions};

    fn codes(report: &VerificationReport) -> Vec<&str> {
        report.findings.iter().map(|f| f.code.as_str()).collect()
    }

    #[test]
    fn test_generated_document_is_valid() {
        let doc = Emitter::new()
            .render(&expand(&ExpansionOptions::default()))
            .unwrap();
        let report = verify_document(&doc).unwrap();

        assert!(report.valid, "findings: {:?}", report.findings);
        assert!(report.findings.is_empty());
        // 10 static blocks + 8 derived compile tasks + 210 tests
        assert_eq!(report.task_count, 228);
        // debug-compile + c11/c99/c89 + valgrind + asan + coverage + scan-build + 8 derived
        assert_eq!(report.compile_task_count, 16);
        assert_eq!(report.test_task_count, 210);
    }

    #[test]
    fn test_multi_mongos_document_is_valid() {
        let doc = Emitter::new()
            .render(&expand(&ExpansionOptions { multi_mongos: true }))
            .unwrap();
        let report = verify_document(&doc).unwrap();
        assert!(report.valid);
        assert_eq!(report.test_task_count, 280);
    }

    #[test]
    fn test_duplicate_name() {
        let doc = r#"
    - name: debug-compile-nosasl-nossl
      tags: ["debug-compile"]
    - name: debug-compile-nosasl-nossl
      tags: ["debug-compile"]
"#;
        let report = verify_document(doc).unwrap();
        assert!(!report.valid);
        assert_eq!(codes(&report), vec!["DUPLICATE_TASK_NAME"]);
    }

    #[test]
    fn test_missing_and_forward_dependencies() {
        let doc = r#"
# Test Matrix {{{
    - name: test-a
      tags: ["a"]
      depends_on:
        - name: "debug-compile-sasl-openssl"
    - name: test-b
      tags: ["b"]
      depends_on:
        - name: "nowhere"
    - name: debug-compile-sasl-openssl
      tags: ["debug-compile"]
# }}}
"#;
        let report = verify_document(doc).unwrap();
        assert!(!report.valid);
        assert_eq!(codes(&report), vec!["FORWARD_DEP_REF", "MISSING_DEP_REF"]);
        assert_eq!(report.findings[0].task, "test-a");
        assert_eq!(report.findings[1].task, "test-b");
    }

    #[test]
    fn test_self_dependency() {
        let doc = r#"
    - name: loop
      tags: ["x"]
      depends_on:
        - name: "loop"
"#;
        let report = verify_document(doc).unwrap();
        assert_eq!(codes(&report), vec!["SELF_DEPENDENCY"]);
    }

    #[test]
    fn test_cross_variant_dependency_only_needs_to_exist() {
        let doc = r#"
    - name: release-compile
      tags: ["release-compile"]
      depends_on:
        - name: "make-release-archive"
          variant: releng
    - name: make-release-archive
"#;
        let report = verify_document(doc).unwrap();
        assert!(report.valid);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn test_untagged_task_warns() {
        let doc = "    - name: orphan\n";
        let report = verify_document(doc).unwrap();
        assert!(report.valid);
        assert_eq!(codes(&report), vec!["NO_TAGS"]);
        assert_eq!(report.findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_comment_only_document() {
        let report = verify_document("# Compile Matrix {{{\n# }}}\n").unwrap();
        assert!(report.valid);
        assert_eq!(report.task_count, 0);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = verify_document("- name: [unterminated");
        assert!(matches!(result, Err(VerifyError::Yaml(_))));
    }

    #[test]
    fn test_verify_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "    - name: debug-compile\n      tags: [\"debug-compile\"]\n")
            .unwrap();

        let report = verify_file(&path).unwrap();
        assert_eq!(report.compile_task_count, 1);

        let missing = verify_file(&dir.path().join("missing.yml"));
        assert!(matches!(missing, Err(VerifyError::Io { .. })));
    }
}
