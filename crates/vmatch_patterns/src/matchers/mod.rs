//! Built-in matchers behind the `p` builders.

mod and;
mod array;
mod guard;
mod not;
mod optional;
mod or;
mod select;

pub use and::AndMatcher;
pub use array::ArrayMatcher;
pub use guard::{GuardFn, GuardMatcher};
pub use not::NotMatcher;
pub use optional::OptionalMatcher;
pub use or::OrMatcher;
pub use select::SelectMatcher;
