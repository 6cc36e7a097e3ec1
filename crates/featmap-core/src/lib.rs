#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses featmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
