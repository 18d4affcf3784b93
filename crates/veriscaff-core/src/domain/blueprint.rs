//! The fixed project blueprint: directory skeleton, artifacts per step, and
//! the step order of a full run.

use std::fmt;

use serde::Serialize;

use crate::domain::{ArtifactSpec, catalog};

const AGENT_DIR: &str = "verification/uvm/agents/{{PROTOCOL}}_agent";

/// Skeleton directories created before anything else. Parents precede
/// children.
const SKELETON_HEAD: &[&str] = &[
    "rtl",
    "rtl/interfaces",
    "verification",
    "verification/common",
    "verification/testbench",
    "verification/uvm",
    "verification/uvm/agents",
    AGENT_DIR,
    "verification/uvm/env",
    "verification/uvm/sequences",
    "verification/uvm/tests",
    "sim",
    "sim/run",
    "sim/config",
    "sim/config/filelists",
    "sim/output",
];

const SKELETON_IMPL: &[&str] = &[
    "impl",
    "impl/constraints",
    "impl/scripts",
    "impl/reports",
    "impl/bitstream",
    "impl/projects",
    "impl/ip",
    "impl/bd",
];

const SKELETON_TAIL: &[&str] = &["docs", "tools", "diary", ".github", ".github/workflows"];

/// Directory skeleton in creation order.
pub fn directory_skeleton(include_implementation: bool) -> Vec<&'static str> {
    let mut dirs = SKELETON_HEAD.to_vec();
    if include_implementation {
        dirs.extend_from_slice(SKELETON_IMPL);
    }
    dirs.extend_from_slice(SKELETON_TAIL);
    dirs
}

/// The seven reusable component files, in emission order.
pub const COMPONENTS: [ArtifactSpec; 7] = [
    ArtifactSpec::new("verification/common", "{{PROTOCOL}}_transaction.sv", catalog::TRANSACTION),
    ArtifactSpec::new(AGENT_DIR, "{{PROTOCOL}}_driver.sv", catalog::DRIVER),
    ArtifactSpec::new(AGENT_DIR, "{{PROTOCOL}}_monitor.sv", catalog::MONITOR),
    ArtifactSpec::new(AGENT_DIR, "{{PROTOCOL}}_sequencer.sv", catalog::SEQUENCER),
    ArtifactSpec::new("verification/uvm/sequences", "{{PROTOCOL}}_base_seq.sv", catalog::BASE_SEQ),
    ArtifactSpec::new("verification/uvm/sequences", "{{PROTOCOL}}_read_seq.sv", catalog::READ_SEQ),
    ArtifactSpec::new("verification/uvm/sequences", "{{PROTOCOL}}_write_seq.sv", catalog::WRITE_SEQ),
];

pub const RTL: [ArtifactSpec; 2] = [
    ArtifactSpec::new("rtl", "{{PROTOCOL}}_if.sv", catalog::RTL_INTERFACE),
    ArtifactSpec::new("rtl", "{{PROJECT_LOWER}}_core.sv", catalog::RTL_CORE),
];

/// Environment, testbench and tests written after the component bundle.
pub const ENVIRONMENT: [ArtifactSpec; 8] = [
    ArtifactSpec::new(AGENT_DIR, "{{PROTOCOL}}_agent.sv", catalog::AGENT),
    ArtifactSpec::new("verification/uvm/env", "{{PROTOCOL}}_env.sv", catalog::ENV),
    ArtifactSpec::new("verification/uvm/env", "{{PROTOCOL}}_scoreboard.sv", catalog::SCOREBOARD),
    ArtifactSpec::new("verification/testbench", "tb_top.sv", catalog::TB_TOP),
    ArtifactSpec::new("verification/uvm/tests", "{{PROTOCOL}}_base_test.sv", catalog::BASE_TEST),
    ArtifactSpec::new("verification/uvm/tests", "{{PROTOCOL}}_read_test.sv", catalog::READ_TEST),
    ArtifactSpec::new("verification/uvm/tests", "{{PROTOCOL}}_write_test.sv", catalog::WRITE_TEST),
    ArtifactSpec::new("verification/uvm/tests", "{{PROTOCOL}}_mixed_test.sv", catalog::MIXED_TEST),
];

pub const SIMULATION: [ArtifactSpec; 5] = [
    ArtifactSpec::new("sim/config", "test_config.cfg", catalog::TEST_CONFIG),
    ArtifactSpec::new("sim/config/filelists", "{{PROTOCOL}}_base.f", catalog::BASE_FILELIST),
    ArtifactSpec::new("sim/config/filelists", "{{PROTOCOL}}_full.f", catalog::FULL_FILELIST),
    ArtifactSpec::new("sim/run", "run.bat", catalog::RUN_BAT),
    ArtifactSpec::new("sim/run", "run.sh", catalog::RUN_SH).executable(),
];

pub const IMPLEMENTATION: [ArtifactSpec; 5] = [
    ArtifactSpec::new("impl/constraints", "{{PROJECT_LOWER}}.xdc", catalog::CONSTRAINTS),
    ArtifactSpec::new("impl/scripts", "build.tcl", catalog::BUILD_TCL),
    ArtifactSpec::new("impl", "Makefile", catalog::IMPL_MAKEFILE),
    ArtifactSpec::new("impl/ip", "README.md", catalog::IP_README),
    ArtifactSpec::new("impl/bd", "README.md", catalog::BD_README),
];

pub const DOCUMENTATION: [ArtifactSpec; 2] = [
    ArtifactSpec::new("", "README.md", catalog::README),
    ArtifactSpec::new("docs", "{{PROTOCOL}}_verification_guide.md", catalog::VERIFICATION_GUIDE),
];

pub const CI: [ArtifactSpec; 1] = [ArtifactSpec::new(".github/workflows", "ci.yml", catalog::CI_WORKFLOW)];

pub const IGNORE_RULES: [ArtifactSpec; 1] = [ArtifactSpec::new("", ".gitignore", catalog::GITIGNORE)];

/// One step of a full project run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaffoldStep {
    Directories,
    Rtl,
    Uvm,
    Simulation,
    Implementation,
    Documentation,
    GithubActions,
    Gitignore,
}

impl ScaffoldStep {
    /// Steps of a run, in order. `Implementation` only when enabled.
    pub fn plan(include_implementation: bool) -> Vec<Self> {
        let mut steps = vec![Self::Directories, Self::Rtl, Self::Uvm, Self::Simulation];
        if include_implementation {
            steps.push(Self::Implementation);
        }
        steps.extend([Self::Documentation, Self::GithubActions, Self::Gitignore]);
        steps
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Directories => "Creating directory structure",
            Self::Rtl => "Generating RTL templates",
            Self::Uvm => "Generating UVM components",
            Self::Simulation => "Generating simulation configuration",
            Self::Implementation => "Generating implementation templates",
            Self::Documentation => "Generating documentation",
            Self::GithubActions => "Generating GitHub Actions workflow",
            Self::Gitignore => "Generating .gitignore",
        }
    }
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
