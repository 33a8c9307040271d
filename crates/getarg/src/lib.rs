//! argv-style option store with typed lookups.
//!
//! Tokens of the form `-name`, `--name`, `-name=value` and `--name=value` are
//! collected into an [`ArgStore`] keyed by `name`. Lookups never fail:
//! - an absent key yields the caller's default
//! - a present key with an unparseable integer yields `0`
//! - `-noNAME` sets `NAME` to the negated boolean unless `NAME` was given
//!
//! ```
//! use getarg::ArgStore;
//!
//! let args = ArgStore::parse(["-threads=4", "--nocolor", "input.txt"]);
//! assert_eq!(args.get_int("-threads", 1), 4);
//! assert!(!args.get_bool("-color", true));
//! assert_eq!(args.get_str("-mode", "auto"), "auto");
//! assert_eq!(args.rest(), ["input.txt"]);
//! ```

pub mod global;
mod load;
mod store;
pub mod value;

pub use load::NEGATION_PREFIX;
pub use store::ArgStore;
pub use value::{interpret_bool, parse_int};
