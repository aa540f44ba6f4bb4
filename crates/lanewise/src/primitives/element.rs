//! Element and scalar-operand traits.
//!
//! ## Purpose
//!
//! This module defines which scalar types may populate vector lanes
//! (`SimdElement`) and which scalar types may appear as the scalar operand of
//! a mixed scalar/vector operator (`Arithmetic`).
//!
//! ## Design notes
//!
//! * **Sealed**: Both traits are sealed; only the primitive numeric types
//!   implement them, so the operator overload set can never become ambiguous
//!   with user types.
//! * **Arithmetic closure**: Every element supports `+ - * /` returning itself
//!   (`num_traits::NumOps`), which is what the portable backends build on.
//!
//! ## Invariants
//!
//! * `T::default()` is the additive identity (zero) for every element type.
//!
//! ## Non-goals
//!
//! * This module does not decide lane counts or storage (see `abi`).

// External dependencies
use core::fmt::Debug;
use num_traits::{AsPrimitive, NumOps};

mod sealed {
    pub trait Sealed {}
}

use sealed::Sealed;

// ============================================================================
// Lane Element
// ============================================================================

/// A scalar type that may be stored in a vector lane.
pub trait SimdElement:
    Sealed + Copy + Default + PartialOrd + Debug + NumOps + Send + Sync + 'static
{
}

// ============================================================================
// Arithmetic Scalar Operand
// ============================================================================

/// A primitive arithmetic scalar usable as the scalar side of a mixed
/// scalar/vector operator.
///
/// The conversion to the lane type follows `as` semantics.
pub trait Arithmetic: Sealed + Copy + 'static {
    /// Convert to the lane element type `T`.
    #[inline]
    fn to_lane<T>(self) -> T
    where
        T: SimdElement,
        Self: AsPrimitive<T>,
    {
        self.as_()
    }
}

macro_rules! impl_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sealed for $t {}
            impl SimdElement for $t {}
            impl Arithmetic for $t {}
        )*
    };
}

impl_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
