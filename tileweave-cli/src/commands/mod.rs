//! CLI command implementations.
//!
//! One file per subcommand plus shared helpers:
//! - `common`: input loading, the variant `ValueEnum`, and the shared
//!   weave driver
//! - `vertical` / `horizontal` / `windowed`: argument structs and `run`
//!   functions, thin over the shared driver

pub mod common;
pub mod horizontal;
pub mod vertical;
pub mod windowed;
