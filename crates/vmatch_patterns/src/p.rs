//! Pattern builders.
//!
//! ```text
//! use vmatch_patterns::p;
//!
//! let pat = Pattern::object([
//!     ("type", Pattern::from("success")),
//!     ("data", p::select_as("data")),
//!     ("tags", p::optional(p::array(p::string()))),
//! ]);
//! ```

use std::marker::PhantomData;

use vmatch_value::{ClassRef, Value};

use crate::matchers::{
    AndMatcher, ArrayMatcher, GuardMatcher, NotMatcher, OptionalMatcher, OrMatcher, SelectMatcher,
};
use crate::{Pattern, SelectionKey};

/// `undefined` or a value matching `pattern`.
pub fn optional(pattern: impl Into<Pattern>) -> Pattern {
    Pattern::matcher(OptionalMatcher::new(pattern.into()))
}

/// An array whose every element matches `pattern`.
pub fn array(pattern: impl Into<Pattern>) -> Pattern {
    Pattern::matcher(ArrayMatcher::new(pattern.into()))
}

/// All of `patterns`.
pub fn intersection<P, I>(patterns: I) -> Pattern
where
    P: Into<Pattern>,
    I: IntoIterator<Item = P>,
{
    Pattern::matcher(AndMatcher::new(patterns.into_iter().map(Into::into).collect()))
}

/// Any of `patterns`.
pub fn union<P, I>(patterns: I) -> Pattern
where
    P: Into<Pattern>,
    I: IntoIterator<Item = P>,
{
    Pattern::matcher(OrMatcher::new(patterns.into_iter().map(Into::into).collect()))
}

/// Anything `pattern` does not match.
pub fn not(pattern: impl Into<Pattern>) -> Pattern {
    Pattern::matcher(NotMatcher::new(pattern.into()))
}

/// Values for which `predicate` holds.
pub fn when(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Pattern {
    Pattern::matcher(GuardMatcher::new(predicate))
}

/// Anonymous capture of the whole value.
pub fn select() -> Pattern {
    Pattern::matcher(SelectMatcher::new(SelectionKey::Anonymous, None))
}

/// Named capture of the whole value.
pub fn select_as(key: impl Into<String>) -> Pattern {
    Pattern::matcher(SelectMatcher::new(SelectionKey::named(key), None))
}

/// Named capture of a value matching `pattern`.
pub fn select_with(key: impl Into<String>, pattern: impl Into<Pattern>) -> Pattern {
    Pattern::matcher(SelectMatcher::new(
        SelectionKey::named(key),
        Some(pattern.into()),
    ))
}

/// Anonymous capture of a value matching `pattern`.
pub fn select_pattern(pattern: impl Into<Pattern>) -> Pattern {
    Pattern::matcher(SelectMatcher::new(
        SelectionKey::Anonymous,
        Some(pattern.into()),
    ))
}

/// Matches anything.
pub fn any() -> Pattern {
    Pattern::matcher(GuardMatcher::labelled("any", |_| true))
}

/// Alias of [`any`].
pub fn wildcard() -> Pattern {
    any()
}

pub fn string() -> Pattern {
    Pattern::matcher(GuardMatcher::labelled("string", |v| {
        matches!(v, Value::Str(_))
    }))
}

pub fn number() -> Pattern {
    Pattern::matcher(GuardMatcher::labelled("number", |v| {
        matches!(v, Value::Number(_))
    }))
}

pub fn boolean() -> Pattern {
    Pattern::matcher(GuardMatcher::labelled("boolean", |v| {
        matches!(v, Value::Bool(_))
    }))
}

pub fn bigint() -> Pattern {
    Pattern::matcher(GuardMatcher::labelled("bigint", |v| {
        matches!(v, Value::BigInt(_))
    }))
}

pub fn symbol() -> Pattern {
    Pattern::matcher(GuardMatcher::labelled("symbol", |v| {
        matches!(v, Value::Symbol(_))
    }))
}

/// `null` or `undefined`.
pub fn nullish() -> Pattern {
    Pattern::matcher(GuardMatcher::labelled("nullish", Value::is_nullish))
}

/// Instances of `class` or of any class extending it.
pub fn instance_of(class: &ClassRef) -> Pattern {
    let class = ClassRef::clone(class);
    Pattern::matcher(GuardMatcher::labelled("instance_of", move |v| {
        v.is_instance_of(&class)
    }))
}

/// The composite builders, tagged with the input type `T` they are meant
/// for.
///
/// The tag exists for the caller's type annotations only: every method
/// builds exactly what the free function of the same name builds.
pub fn typed<T: ?Sized>() -> Typed<T> {
    Typed(PhantomData)
}

/// Builder set returned by [`typed`].
pub struct Typed<T: ?Sized>(PhantomData<fn() -> T>);

impl<T: ?Sized> Typed<T> {
    pub fn array(&self, pattern: impl Into<Pattern>) -> Pattern {
        array(pattern)
    }

    pub fn optional(&self, pattern: impl Into<Pattern>) -> Pattern {
        optional(pattern)
    }

    pub fn intersection<P, I>(&self, patterns: I) -> Pattern
    where
        P: Into<Pattern>,
        I: IntoIterator<Item = P>,
    {
        intersection(patterns)
    }

    pub fn union<P, I>(&self, patterns: I) -> Pattern
    where
        P: Into<Pattern>,
        I: IntoIterator<Item = P>,
    {
        union(patterns)
    }

    pub fn not(&self, pattern: impl Into<Pattern>) -> Pattern {
        not(pattern)
    }

    pub fn when(&self, predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Pattern {
        when(predicate)
    }

    pub fn select(&self) -> Pattern {
        select()
    }

    pub fn select_as(&self, key: impl Into<String>) -> Pattern {
        select_as(key)
    }

    pub fn select_pattern(&self, pattern: impl Into<Pattern>) -> Pattern {
        select_pattern(pattern)
    }

    pub fn select_with(&self, key: impl Into<String>, pattern: impl Into<Pattern>) -> Pattern {
        select_with(key, pattern)
    }
}

#[cfg(test)]
mod tests;
