//! [`ErrorTag`] trait that restricts the classification values usable with [`crate::TaggedError`].

use serde::Serialize;
use serde_json::Value;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

mod private {
    pub trait Sealed {}

    impl Sealed for &'static str {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for isize {}
}

/// Underlying primitive representation of an [`ErrorTag`]. Sealed: only string-like
/// (`&'static str`) and integer-like (`i32`, `i64`, `isize`) representations exist.
pub trait TagRepr:
    private::Sealed + Copy + Eq + Hash + Debug + Display + Serialize + Send + Sync + 'static
{
    fn to_json(self) -> Value;
}

impl TagRepr for &'static str {
    fn to_json(self) -> Value {
        Value::from(self)
    }
}

impl TagRepr for i32 {
    fn to_json(self) -> Value {
        Value::from(self)
    }
}

impl TagRepr for i64 {
    fn to_json(self) -> Value {
        Value::from(self)
    }
}

impl TagRepr for isize {
    fn to_json(self) -> Value {
        Value::from(self)
    }
}

/// A discrete classification value from a caller-defined taxonomy.
///
/// Each taxonomy should be its own type. Two [`crate::TaggedError`]s are only ever comparable
/// when their tag types are the same, so `OrderKind(1)` and `PaymentKind(1)` never match even
/// though both have the representation `1`.
///
/// ```
/// use std::fmt::Display;
/// use typed_error::ErrorTag;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct DomainKind(&'static str);
///
/// impl Display for DomainKind {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str(self.0)
///     }
/// }
///
/// impl ErrorTag for DomainKind {
///     type Repr = &'static str;
///
///     fn repr(&self) -> &'static str {
///         self.0
///     }
/// }
/// ```
pub trait ErrorTag: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    type Repr: TagRepr;

    /// The raw primitive value of the tag. This is what a [`crate::TaggedError`] serializes
    /// as its `tag` field; matching and `Display` use the tag itself.
    fn repr(&self) -> Self::Repr;
}

impl<R: TagRepr> ErrorTag for R {
    type Repr = R;

    fn repr(&self) -> R {
        *self
    }
}
