pub mod error;
pub mod types;

pub use error::{ForageError, Result};
pub use types::*;
