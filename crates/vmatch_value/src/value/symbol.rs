//! Unique symbols.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A unique symbol.
///
/// Every call to [`Symbol::new`] yields a symbol distinct from all others,
/// even when the descriptions are equal. Clones share the identity.
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a fresh symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        Symbol {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    /// Create a fresh symbol with a description.
    pub fn described(description: &str) -> Self {
        Symbol::new(Some(description))
    }

    /// Identity of this symbol.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol#{}({})", self.id, self.description().unwrap_or(""))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}
