//! Selection-key collection.

use vmatch_stack::ensure_sufficient_stack;

use crate::{Pattern, SelectionKey};

/// Every selection key `pattern` can produce, in pattern order.
///
/// Duplicates are kept. Map values and set members are searched too, so
/// the keys of a pattern nested there are seeded like any other.
pub fn selection_keys(pattern: &Pattern) -> Vec<SelectionKey> {
    ensure_sufficient_stack(|| match pattern {
        Pattern::Literal(_) => Vec::new(),
        Pattern::Matcher(matcher) => matcher.selection_keys(),
        Pattern::Tuple(items) | Pattern::Set(items) => flat_keys(items),
        Pattern::Object(fields) => flat_keys(fields.iter().map(|(_, sub)| sub)),
        Pattern::Map(entries) => flat_keys(entries.iter().map(|(_, sub)| sub)),
    })
}

/// Concatenate the keys of several patterns.
pub fn flat_keys<'a>(patterns: impl IntoIterator<Item = &'a Pattern>) -> Vec<SelectionKey> {
    patterns.into_iter().flat_map(selection_keys).collect()
}
