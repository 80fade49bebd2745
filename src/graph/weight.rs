//! Edge weight domain.

use core::fmt;
use num_traits::{PrimInt, Unsigned};

/// An unsigned integer edge weight.
///
/// `0` is reserved for "no edge" and `max_value()` doubles as the unreachable
/// distance, so every weight type carries both sentinels for free. Being
/// unsigned is what keeps Dijkstra's greedy extraction optimal.
///
/// Implemented for every primitive unsigned integer.
pub trait Weight: PrimInt + Unsigned + fmt::Debug + fmt::Display {}

impl<T> Weight for T where T: PrimInt + Unsigned + fmt::Debug + fmt::Display {}
