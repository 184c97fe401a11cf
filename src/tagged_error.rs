use crate::{BoxError, ErrorTag, TagRepr};
use serde::{ser::SerializeStruct, Serialize};
use serde_json::{Map, Value};
use std::{
    error::Error as StdError,
    fmt::{Debug, Display},
};

//===========================
// region:      --- ErrorMatcher

/// Equality test that [`crate::chain_matches`] applies to each element of an error chain.
pub trait ErrorMatcher {
    fn matches(&self, candidate: Option<&(dyn StdError + 'static)>) -> bool;
}

// endregion:   --- ErrorMatcher

//===========================
// region:      --- TaggedError

/// Associates a classification tag of type `T` with an underlying cause.
///
/// Equality, both [`PartialEq`] and [`ErrorMatcher::matches`], looks at the tag only.
pub struct TaggedError<T: ErrorTag> {
    tag: T,
    cause: BoxError,
}

impl<T: ErrorTag> TaggedError<T> {
    pub fn wrap(tag: T, cause: impl StdError + Send + Sync + 'static) -> Self {
        Self::wrap_boxed(tag, Box::new(cause))
    }

    /// Like [`Self::wrap`] but takes ownership of an already boxed cause, which is kept as is.
    pub fn wrap_boxed(tag: T, cause: BoxError) -> Self {
        Self { tag, cause }
    }

    pub fn tag(&self) -> &T {
        &self.tag
    }

    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    pub fn into_cause(self) -> BoxError {
        self.cause
    }

    pub fn into_parts(self) -> (T, BoxError) {
        (self.tag, self.cause)
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("tag".to_owned(), self.tag.repr().to_json());
        map.insert("msg".to_owned(), Value::String(self.cause.to_string()));
        Value::Object(map)
    }
}

/// Shorthand for [`TaggedError::wrap`].
pub fn wrap<T: ErrorTag>(tag: T, cause: impl StdError + Send + Sync + 'static) -> TaggedError<T> {
    TaggedError::wrap(tag, cause)
}

impl<T: ErrorTag> ErrorMatcher for TaggedError<T> {
    fn matches(&self, candidate: Option<&(dyn StdError + 'static)>) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };
        // Downcasting is by TypeId, so a different tag type never matches.
        match candidate.downcast_ref::<Self>() {
            Some(other) => other.tag == self.tag,
            None => false,
        }
    }
}

impl<T: ErrorTag> PartialEq for TaggedError<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl<T: ErrorTag> Eq for TaggedError<T> {}

impl<T: ErrorTag> Debug for TaggedError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggedError")
            .field("tag", &self.tag)
            .field("cause", &self.cause)
            .finish()
    }
}

impl<T: ErrorTag> Display for TaggedError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.tag, self.cause)
    }
}

impl<T: ErrorTag> StdError for TaggedError<T> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}

/// Serialized as `{"tag": <tag repr>, "msg": <cause message>}`.
impl<T: ErrorTag> Serialize for TaggedError<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("TaggedError", 2)?;
        state.serialize_field("tag", &self.tag.repr())?;
        state.serialize_field("msg", &self.cause.to_string())?;
        state.end()
    }
}

// endregion:   --- TaggedError
