//! Compile-time embedded template catalog.
//!
//! Each constant loads a file from `templates/` via [`include_str!`]. Paths are
//! relative to this source file (`crates/veriscaff-core/src/domain/catalog.rs`).
//!
//! Placeholders are `{{KEY}}` names from [`RenderContext`](super::RenderContext).
//! Renaming a template file breaks the build; renaming a placeholder silently
//! leaves it unsubstituted, so check `render_context.rs` when editing.

// -------------------------------------------------------
// Component emitter bundle
// -------------------------------------------------------

pub const TRANSACTION: &str = include_str!("../../templates/uvm/transaction.sv.tmpl");
pub const DRIVER: &str = include_str!("../../templates/uvm/driver.sv.tmpl");
pub const MONITOR: &str = include_str!("../../templates/uvm/monitor.sv.tmpl");
pub const SEQUENCER: &str = include_str!("../../templates/uvm/sequencer.sv.tmpl");
pub const BASE_SEQ: &str = include_str!("../../templates/uvm/base_seq.sv.tmpl");
pub const READ_SEQ: &str = include_str!("../../templates/uvm/read_seq.sv.tmpl");
pub const WRITE_SEQ: &str = include_str!("../../templates/uvm/write_seq.sv.tmpl");

// -------------------------------------------------------
// Environment and testbench
// -------------------------------------------------------

pub const AGENT: &str = include_str!("../../templates/uvm/agent.sv.tmpl");
pub const ENV: &str = include_str!("../../templates/uvm/env.sv.tmpl");
pub const SCOREBOARD: &str = include_str!("../../templates/uvm/scoreboard.sv.tmpl");
pub const TB_TOP: &str = include_str!("../../templates/uvm/tb_top.sv.tmpl");
pub const BASE_TEST: &str = include_str!("../../templates/uvm/base_test.sv.tmpl");
pub const READ_TEST: &str = include_str!("../../templates/uvm/read_test.sv.tmpl");
pub const WRITE_TEST: &str = include_str!("../../templates/uvm/write_test.sv.tmpl");
pub const MIXED_TEST: &str = include_str!("../../templates/uvm/mixed_test.sv.tmpl");

// -------------------------------------------------------
// Design placeholders
// -------------------------------------------------------

pub const RTL_INTERFACE: &str = include_str!("../../templates/rtl/interface.sv.tmpl");
pub const RTL_CORE: &str = include_str!("../../templates/rtl/core.sv.tmpl");

// -------------------------------------------------------
// Simulation configuration
// -------------------------------------------------------

pub const TEST_CONFIG: &str = include_str!("../../templates/sim/test_config.cfg.tmpl");
pub const BASE_FILELIST: &str = include_str!("../../templates/sim/base_filelist.f.tmpl");
pub const FULL_FILELIST: &str = include_str!("../../templates/sim/full_filelist.f.tmpl");
pub const RUN_BAT: &str = include_str!("../../templates/sim/run.bat.tmpl");
pub const RUN_SH: &str = include_str!("../../templates/sim/run.sh.tmpl");

// -------------------------------------------------------
// FPGA implementation
// -------------------------------------------------------

pub const CONSTRAINTS: &str = include_str!("../../templates/impl/constraints.xdc.tmpl");
pub const BUILD_TCL: &str = include_str!("../../templates/impl/build.tcl.tmpl");
pub const IMPL_MAKEFILE: &str = include_str!("../../templates/impl/Makefile.tmpl");
pub const IP_README: &str = include_str!("../../templates/impl/ip_readme.md.tmpl");
pub const BD_README: &str = include_str!("../../templates/impl/bd_readme.md.tmpl");

// -------------------------------------------------------
// Documentation, CI and ignore rules
// -------------------------------------------------------

pub const README: &str = include_str!("../../templates/docs/readme.md.tmpl");
pub const VERIFICATION_GUIDE: &str = include_str!("../../templates/docs/verification_guide.md.tmpl");
pub const CI_WORKFLOW: &str = include_str!("../../templates/docs/ci.yml.tmpl");
pub const GITIGNORE: &str = include_str!("../../templates/docs/gitignore.tmpl");

// Fragments spliced into README and .gitignore when `impl/` is generated.
pub const README_IMPL_TREE: &str = include_str!("../../templates/docs/readme_impl_tree.tmpl");
pub const README_IMPL_SECTION: &str = include_str!("../../templates/docs/readme_impl_section.tmpl");
pub const GITIGNORE_IMPL: &str = include_str!("../../templates/docs/gitignore_impl.tmpl");
