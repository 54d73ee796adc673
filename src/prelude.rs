//! Crate prelude (`use crate::prelude::*;`)

pub use crate::error::Error;

// Crate Result, with the crate Error.
pub type Result<T> = core::result::Result<T, Error>;

// Personal preference.
pub use std::format as f;
