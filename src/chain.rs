//! Walkers over the [`StdError::source`] chain of an error.

use crate::{ErrorMatcher, ErrorTag, TaggedError};
use log::Level;
use std::error::Error as StdError;

struct It<'a> {
    curr_source: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for It<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let err = self.curr_source?;
        self.curr_source = err.source();
        Some(err)
    }
}

/// Iterates over `err` followed by each of its transitive sources.
pub fn error_chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    It {
        curr_source: Some(err),
    }
}

/// Returns true if `err` or any error it transitively wraps matches `target`.
pub fn chain_matches(err: &(dyn StdError + 'static), target: &impl ErrorMatcher) -> bool {
    error_chain(err).any(|e| target.matches(Some(e)))
}

/// First [`TaggedError<T>`] in the chain of `err`, if any.
pub fn find_tagged<'a, T: ErrorTag>(
    err: &'a (dyn StdError + 'static),
) -> Option<&'a TaggedError<T>> {
    error_chain(err).find_map(|e| e.downcast_ref::<TaggedError<T>>())
}

/// Returns true if the chain of `err` contains a [`TaggedError<T>`] with the given tag.
pub fn chain_has_tag<T: ErrorTag>(err: &(dyn StdError + 'static), tag: T) -> bool {
    error_chain(err)
        .filter_map(|e| e.downcast_ref::<TaggedError<T>>())
        .any(|tagged| *tagged.tag() == tag)
}

pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut curr = err;
    while let Some(next) = curr.source() {
        curr = next;
    }
    curr
}

pub fn error_recursive_msg(err: &(dyn StdError + 'static)) -> String {
    let mut chain_iter = error_chain(err);
    let mut buf = String::new();
    let mut closing_buf = String::new();

    if let Some(first) = chain_iter.next() {
        buf.push_str(&first.to_string());
    }

    for item in chain_iter {
        buf.push_str(", source_msg=[");
        buf.push_str(&item.to_string());
        closing_buf.push(']');
    }

    buf.push_str(&closing_buf);

    buf
}

/// Logs one record per element of the chain of `err`, outermost first.
pub fn log_error_chain(err: &(dyn StdError + 'static), level: Level) {
    for (depth, item) in error_chain(err).enumerate() {
        log::log!(target: "typed_error::chain", level, "[{depth}] {item}");
    }
}
