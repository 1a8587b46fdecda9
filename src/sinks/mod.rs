//! Destinations a [`Logger`](crate::Logger) can write to
//!
//! Any `Write + Send` value works as a destination. The types here cover the
//! cases where the caller needs to keep a handle on the writer after handing
//! it to the logger: capturing output, or flushing a buffered writer from a
//! cleanup hook.

pub mod file;
pub mod shared;

pub use file::open_append;
pub use shared::{SharedBuffer, SharedWriter};
