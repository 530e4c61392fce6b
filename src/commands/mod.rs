//! CLI command implementations
//!
//! Each command is in its own submodule.

pub mod init;
pub mod licenses;
pub mod new;
pub mod output;
pub mod render;

pub use init::{execute_init, InitOptions};
pub use licenses::execute_licenses;
pub use new::{execute_new, FormAction, NewOptions};
pub use output::{copy_before_exit, print_diff, print_preview, report_failure};
pub use render::{execute_render, resolve_metadata, RenderOptions};
