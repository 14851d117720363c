//! Platform shell: window creation + event pump + render loop driver.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
