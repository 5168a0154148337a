use num_traits::{PrimInt, Unsigned};
use std::fmt::{Debug, Display};

/// Edge weight and path-length type.
///
/// Restricted to unsigned primitive integers, so a negative edge weight cannot
/// be constructed and the label-setting invariant always holds. Path sums are
/// accumulated with `checked_add`, so `W::max_value()` is never wrapped past.
pub trait Weight: PrimInt + Unsigned + Debug + Display + Send + Sync {}

impl<W> Weight for W where W: PrimInt + Unsigned + Debug + Display + Send + Sync {}
