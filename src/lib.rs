//! Attaches a comparable classification tag to an underlying error cause while keeping both
//! reachable through standard [`std::error::Error::source`] chains.

mod chain;
pub use chain::*;

mod context;
pub use context::*;

mod error_tag;
pub use error_tag::*;

mod tagged_error;
pub use tagged_error::*;

#[cfg(test)]
mod test_support;

/// Boxed cause stored by the wrappers in this crate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
