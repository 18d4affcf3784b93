//! The `GenerationRequest` value object and its builder.
//!
//! A request is the immutable description of one scaffolding run: which
//! project, which bus protocol, which simulator, and whether the FPGA
//! implementation subtree is wanted. Every derived spelling (lower, upper,
//! title case) is computed here so templates never case-convert on their own.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Protocol used when none is given.
pub const DEFAULT_PROTOCOL: &str = "AXI4";

/// Simulator used when none is given.
pub const DEFAULT_SIMULATOR: &str = "dsim";

/// One scaffolding run's inputs.
///
/// Values are stored verbatim. No sanitization is applied; identifier
/// problems are reported by [`DomainValidator`](crate::domain::DomainValidator)
/// and do not block generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    project_name: String,
    protocol: String,
    simulator: String,
    include_implementation: bool,
}

impl GenerationRequest {
    /// Start building a request for `project_name`.
    pub fn builder(project_name: impl Into<String>) -> GenerationRequestBuilder {
        GenerationRequestBuilder::new(project_name)
    }

    /// Project name as given, used for display and the output directory.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Project name lower-cased, used in file names.
    pub fn project_lower(&self) -> String {
        self.project_name.to_lowercase()
    }

    /// Project name title-cased, used for the `<Title>_Core` module.
    pub fn project_title(&self) -> String {
        title_case(&self.project_name)
    }

    /// Protocol as given.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Protocol for paths and identifiers.
    pub fn protocol_lower(&self) -> String {
        self.protocol.to_lowercase()
    }

    /// Protocol for display.
    pub fn protocol_upper(&self) -> String {
        self.protocol.to_uppercase()
    }

    pub fn simulator(&self) -> &str {
        &self.simulator
    }

    pub fn simulator_lower(&self) -> String {
        self.simulator.to_lowercase()
    }

    pub fn simulator_upper(&self) -> String {
        self.simulator.to_uppercase()
    }

    /// Whether the `impl/` subtree is generated.
    pub const fn include_implementation(&self) -> bool {
        self.include_implementation
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} on {})",
            self.project_name,
            self.protocol_upper(),
            self.simulator_upper()
        )
    }
}

/// Builder for [`GenerationRequest`].
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    project_name: String,
    protocol: Option<String>,
    simulator: Option<String>,
    include_implementation: bool,
}

impl GenerationRequestBuilder {
    fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            protocol: None,
            simulator: None,
            include_implementation: true,
        }
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn simulator(mut self, simulator: impl Into<String>) -> Self {
        self.simulator = Some(simulator.into());
        self
    }

    pub fn include_implementation(mut self, include: bool) -> Self {
        self.include_implementation = include;
        self
    }

    /// Finish the request.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` when the project name is empty or whitespace,
    /// since it names the output directory.
    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        if self.project_name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "project_name",
            });
        }

        Ok(GenerationRequest {
            project_name: self.project_name,
            protocol: self.protocol.unwrap_or_else(|| DEFAULT_PROTOCOL.into()),
            simulator: self.simulator.unwrap_or_else(|| DEFAULT_SIMULATOR.into()),
            include_implementation: self.include_implementation,
        })
    }
}

/// Title-case a name word by word.
///
/// A letter following a non-letter starts a word and is upper-cased; every
/// other letter is lower-cased. `DemoBus` becomes `Demobus` and `axi4lite`
/// becomes `Axi4Lite`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let request = GenerationRequest::builder("DemoBus").build().unwrap();

        assert_eq!(request.protocol(), "AXI4");
        assert_eq!(request.simulator(), "dsim");
        assert!(request.include_implementation());
    }

    #[test]
    fn builder_rejects_blank_project_name() {
        let err = GenerationRequest::builder("   ").build().unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingRequiredField {
                field: "project_name"
            }
        );
    }

    #[test]
    fn derived_spellings() {
        let request = GenerationRequest::builder("DemoBus")
            .protocol("Axi4")
            .simulator("Questa")
            .include_implementation(false)
            .build()
            .unwrap();

        assert_eq!(request.project_lower(), "demobus");
        assert_eq!(request.project_title(), "Demobus");
        assert_eq!(request.protocol_lower(), "axi4");
        assert_eq!(request.protocol_upper(), "AXI4");
        assert_eq!(request.simulator_lower(), "questa");
        assert_eq!(request.simulator_upper(), "QUESTA");
        assert!(!request.include_implementation());
    }

    #[test]
    fn title_case_splits_on_non_letters() {
        assert_eq!(title_case("DemoBus"), "Demobus");
        assert_eq!(title_case("axi4lite"), "Axi4Lite");
        assert_eq!(title_case("my_soc"), "My_Soc");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn display_uses_upper_case_labels() {
        let request = GenerationRequest::builder("DemoBus").build().unwrap();
        assert_eq!(request.to_string(), "DemoBus (AXI4 on DSIM)");
    }
}
