//! A coarse-locked ordered map backed by a skip list.
//!
//! Keys need no `Hash` or `Eq`, only the total order supplied at
//! construction. Lookup, insert and delete run in expected O(log n).

mod level;
mod map;
mod node;
mod order;

pub use crate::level::{DEFAULT_SEED, MAX_LEVELS};
pub use crate::map::SkipMap;
pub use crate::order::{Natural, Order, OrderFn};
