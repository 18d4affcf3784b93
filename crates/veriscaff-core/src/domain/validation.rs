use std::fmt;

use serde::Serialize;

use crate::domain::GenerationRequest;

/// A request value that will produce malformed output.
///
/// Issues never block generation; callers surface them as warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierIssue {
    pub field: &'static str,
    pub value: String,
    pub problem: &'static str,
}

impl fmt::Display for IdentifierIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' {}", self.field, self.value, self.problem)
    }
}

/// Centralized identifier checks.
///
/// All checks live here, not scattered across templates or services.
pub struct DomainValidator;

impl DomainValidator {
    /// Inspect every interpolated value of a request.
    ///
    /// - `protocol` becomes class and file name prefixes (`axi4_driver`).
    /// - `project_name` becomes the `<Title>_Core` module name.
    /// - `simulator` appears in paths (`sim/output/<sim>_work/`).
    pub fn identifier_issues(request: &GenerationRequest) -> Vec<IdentifierIssue> {
        let mut issues = Self::protocol_issues(request.protocol());

        let module = format!("{}_Core", request.project_title());
        if !is_sv_identifier(&module) {
            issues.push(issue(
                "project_name",
                request.project_name(),
                "does not form a valid SystemVerilog module name",
            ));
        }

        if has_path_separator(request.simulator()) {
            issues.push(issue("simulator", request.simulator(), "contains a path separator"));
        }

        issues
    }

    /// Checks on the protocol alone, shared with the standalone emitter.
    pub fn protocol_issues(protocol: &str) -> Vec<IdentifierIssue> {
        let mut issues = Vec::new();

        if protocol.is_empty() {
            issues.push(issue("protocol", protocol, "is empty"));
        } else if !is_sv_identifier(&protocol.to_lowercase()) {
            issues.push(issue(
                "protocol",
                protocol,
                "is not a valid SystemVerilog identifier",
            ));
        }
        if has_path_separator(protocol) {
            issues.push(issue("protocol", protocol, "contains a path separator"));
        }

        issues
    }
}

fn issue(field: &'static str, value: &str, problem: &'static str) -> IdentifierIssue {
    IdentifierIssue {
        field,
        value: value.to_string(),
        problem,
    }
}

/// `[A-Za-z_][A-Za-z0-9_$]*`
fn is_sv_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn has_path_separator(s: &str) -> bool {
    s.contains('/') || s.contains('\\')
}
