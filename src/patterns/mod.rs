//! Static pattern data used by the analyzers.
//!
//! - `tables`: lowercase keyword families for every heuristic
//! - `naming`: identifier casing classification
//! - `syntax`: pre-compiled declaration/call regexes

pub mod naming;
pub mod syntax;
pub mod tables;

pub use naming::NamingStyle;
pub use tables::{KeywordFamily, WeightedFamily};
