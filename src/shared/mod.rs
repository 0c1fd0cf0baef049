pub mod error;
pub mod result;
pub mod security;

pub use error::LynxError;
pub use result::Result;
