use core::fmt::Debug;
use num_traits::{Num, NumCast};

/// Element type of every container in this crate.
///
/// Implemented for all primitive integer and floating point types.
pub trait Scalar: Copy + PartialOrd + Debug + Num + NumCast {}

impl<T> Scalar for T where T: Copy + PartialOrd + Debug + Num + NumCast {}
