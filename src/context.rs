use crate::{BoxError, ErrorTag, TaggedError};
use std::error::Error as StdError;
use thiserror::Error;

/// Annotates an inner error with a contextual message, rendering as `"<msg>: <source>"`.
/// The inner error remains reachable through [`StdError::source`].
#[derive(Error, Debug)]
#[error("{msg}: {source}")]
pub struct ContextError {
    msg: String,
    #[source]
    source: BoxError,
}

impl ContextError {
    pub fn new(msg: impl Into<String>, source: impl StdError + Send + Sync + 'static) -> Self {
        Self::new_boxed(msg, Box::new(source))
    }

    pub fn new_boxed(msg: impl Into<String>, source: BoxError) -> Self {
        Self {
            msg: msg.into(),
            source,
        }
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn into_source(self) -> BoxError {
        self.source
    }
}

/// Extension methods to classify or annotate the error of a [`Result`].
pub trait TagResultExt<V, E> {
    fn tag_err<T: ErrorTag>(self, tag: T) -> Result<V, TaggedError<T>>;

    fn with_context_msg(self, msg: impl Into<String>) -> Result<V, ContextError>;
}

impl<V, E> TagResultExt<V, E> for Result<V, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn tag_err<T: ErrorTag>(self, tag: T) -> Result<V, TaggedError<T>> {
        self.map_err(|err| TaggedError::wrap(tag, err))
    }

    fn with_context_msg(self, msg: impl Into<String>) -> Result<V, ContextError> {
        self.map_err(|err| ContextError::new(msg, err))
    }
}
