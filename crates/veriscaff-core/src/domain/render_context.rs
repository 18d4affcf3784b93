//! Substitution table for `{{KEY}}` placeholders.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::domain::{GenerationRequest, catalog};

/// Context for template rendering.
///
/// A **Value Object** built once per run. Transformations create new
/// instances (see `with_variable`).
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROTOCOL` | "axi4" | Request, lower-cased |
/// | `PROTOCOL_UPPER` | "AXI4" | Request, upper-cased |
/// | `PROJECT_NAME` | "DemoBus" | Request, verbatim |
/// | `PROJECT_LOWER` | "demobus" | Request, lower-cased |
/// | `PROJECT_TITLE` | "Demobus" | Request, title-cased |
/// | `SIMULATOR` | "dsim" | Request, lower-cased |
/// | `SIMULATOR_UPPER` | "DSIM" | Request, upper-cased |
/// | `DATE` | "2026-01-31" | Clock |
/// | `TIMESTAMP` | "2026-01-31 09:15:00" | Clock |
/// | `TOOL_VERSION` | "0.1.0" | Crate version |
/// | `IMPL_TREE`, `IMPL_SECTION`, `IMPL_IGNORE` | rendered fragments | Empty unless `impl/` is generated |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the full table for a project run.
    pub fn new(request: &GenerationRequest, now: NaiveDateTime) -> Self {
        let base = Self::for_protocol(request.protocol(), now)
            .with_variable("PROJECT_NAME", request.project_name())
            .with_variable("PROJECT_LOWER", request.project_lower())
            .with_variable("PROJECT_TITLE", request.project_title())
            .with_variable("SIMULATOR", request.simulator_lower())
            .with_variable("SIMULATOR_UPPER", request.simulator_upper());

        // Fragments are rendered against the base table up front because
        // substituted values are never re-scanned.
        let fragment = |template: &str| {
            if request.include_implementation() {
                base.render(template)
            } else {
                String::new()
            }
        };
        let tree = fragment(catalog::README_IMPL_TREE);
        let section = fragment(catalog::README_IMPL_SECTION);
        let ignore = fragment(catalog::GITIGNORE_IMPL);

        base.with_variable("IMPL_TREE", tree)
            .with_variable("IMPL_SECTION", section)
            .with_variable("IMPL_IGNORE", ignore)
    }

    /// Minimal table for the component emitter: protocol and timestamps only.
    pub fn for_protocol(protocol: &str, now: NaiveDateTime) -> Self {
        Self {
            variables: HashMap::new(),
        }
        .with_variable("PROTOCOL", protocol.to_lowercase())
        .with_variable("PROTOCOL_UPPER", protocol.to_uppercase())
        .with_variable("DATE", now.format("%Y-%m-%d").to_string())
        .with_variable("TIMESTAMP", now.format("%Y-%m-%d %H:%M:%S").to_string())
        .with_variable("TOOL_VERSION", crate::VERSION)
    }

    /// Add or override a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Single left-to-right scan. Output of a substitution is never scanned
    /// again.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` and `${{ matrix.test }}` stay literal
    /// - `{{PROTOCOL}}{{PROTOCOL}}` → both replaced
    /// - `{{{PROTOCOL}}}` → outer braces preserved, inner replaced
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let resolved = after
                .find("}}")
                .map(|end| &after[..end])
                .and_then(|key| self.get(key).map(|value| (key.len(), value)));

            match resolved {
                Some((key_len, value)) => {
                    out.push_str(value);
                    rest = &after[key_len + 2..];
                }
                None => {
                    // Not a placeholder; emit one brace and rescan from the next.
                    out.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(12, 30, 5)
            .unwrap()
    }

    fn demo_context(include_impl: bool) -> RenderContext {
        let request = GenerationRequest::builder("DemoBus")
            .protocol("AXI4")
            .simulator("dsim")
            .include_implementation(include_impl)
            .build()
            .unwrap();
        RenderContext::new(&request, at_noon())
    }

    #[test]
    fn builtin_variables() {
        let ctx = demo_context(true);

        assert_eq!(ctx.get("PROTOCOL"), Some("axi4"));
        assert_eq!(ctx.get("PROTOCOL_UPPER"), Some("AXI4"));
        assert_eq!(ctx.get("PROJECT_NAME"), Some("DemoBus"));
        assert_eq!(ctx.get("PROJECT_LOWER"), Some("demobus"));
        assert_eq!(ctx.get("PROJECT_TITLE"), Some("Demobus"));
        assert_eq!(ctx.get("SIMULATOR"), Some("dsim"));
        assert_eq!(ctx.get("SIMULATOR_UPPER"), Some("DSIM"));
        assert_eq!(ctx.get("DATE"), Some("2026-03-14"));
        assert_eq!(ctx.get("TIMESTAMP"), Some("2026-03-14 12:30:05"));
        assert_eq!(ctx.get("TOOL_VERSION"), Some(crate::VERSION));
    }

    #[test]
    fn protocol_context_has_no_project_keys() {
        let ctx = RenderContext::for_protocol("Spi", at_noon());
        assert_eq!(ctx.get("PROTOCOL"), Some("spi"));
        assert_eq!(ctx.get("PROJECT_NAME"), None);
    }

    #[test]
    fn renders_known_placeholders() {
        let ctx = demo_context(true);
        assert_eq!(
            ctx.render("class {{PROTOCOL}}_driver; // {{PROTOCOL_UPPER}}"),
            "class axi4_driver; // AXI4"
        );
        assert_eq!(ctx.render("{{PROTOCOL}}{{PROTOCOL}}"), "axi4axi4");
    }

    #[test]
    fn leaves_unknown_placeholders() {
        let ctx = demo_context(true);
        assert_eq!(ctx.render("{{UNKNOWN}}"), "{{UNKNOWN}}");
        assert_eq!(
            ctx.render("name: ${{ matrix.test }}"),
            "name: ${{ matrix.test }}"
        );
        assert_eq!(ctx.render("unterminated {{PROTOCOL"), "unterminated {{PROTOCOL");
    }

    #[test]
    fn nested_braces_keep_outer_pair() {
        let ctx = demo_context(true);
        assert_eq!(ctx.render("{{{PROTOCOL}}}"), "{axi4}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let ctx = RenderContext::for_protocol("x", at_noon()).with_variable("A", "{{PROTOCOL}}");
        assert_eq!(ctx.render("{{A}}"), "{{PROTOCOL}}");
    }

    #[test]
    fn implementation_fragments_follow_flag() {
        let with_impl = demo_context(true);
        let without = demo_context(false);

        assert!(with_impl.get("IMPL_TREE").unwrap().contains("impl/"));
        assert!(with_impl.get("IMPL_SECTION").unwrap().contains("Demobus_Core"));
        assert!(with_impl.get("IMPL_IGNORE").unwrap().contains("impl/projects/"));
        assert_eq!(without.get("IMPL_TREE"), Some(""));
        assert_eq!(without.get("IMPL_SECTION"), Some(""));
        assert_eq!(without.get("IMPL_IGNORE"), Some(""));
    }
}
