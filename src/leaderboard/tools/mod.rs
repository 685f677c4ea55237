pub mod error;
pub mod format;
pub mod io;
pub mod logging;
pub mod model;
pub mod reformat;

pub use error::{Result, ToolError};
