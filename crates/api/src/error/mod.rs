//! Error handling for scytale operations

mod traits;
mod types;

pub use traits::ResultExt;
pub use types::{Error, Result};
