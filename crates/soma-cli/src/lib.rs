//! Library half of the `soma` command-line tool: logging setup and
//! terminal rendering.

pub mod logging;
pub mod render;
