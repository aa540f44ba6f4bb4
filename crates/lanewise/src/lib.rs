//! # lanewise: Width-Agnostic SIMD Values for Rust
//!
//! Vector values, boolean lane masks and masked assignment over a lane count
//! chosen at compile time by an execution-target tag, with elementwise math
//! that works for every (element, width) combination.
//!
//! ## What is lanewise?
//!
//! A `Simd<T, A>` holds `A::LANES` elements of type `T`. The tag `A` decides
//! the physical layout: a single scalar, a plain array, or a `wide` register.
//! Code written against `Simd<T, A>` reads like scalar arithmetic and runs on
//! any tag: operators, comparisons, masked writes and transcendental
//! functions are all defined in terms of a small per-tag backend contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! type V = Simd<f32, Fixed<4>>;
//!
//! let mut a = V::from_array([0.0, 1.0, 2.0, 3.0]);
//! let mask = SimdMask::<f32, Fixed<4>>::from_array([true, false, true, false]);
//!
//! // Elementwise math
//! let s = sin(a);
//! assert_eq!(s.lane(1), 1.0_f32.sin());
//!
//! // Masked assignment
//! where_(&mask, &mut a).assign(10.0_f32);
//! assert_eq!(a.to_array(), [10.0, 1.0, 10.0, 3.0]);
//!
//! // Mixed scalar/vector operators
//! let mut b = V::from_array([1.0, 2.0, 3.0, 4.0]);
//! b += 1.0_f32;
//! assert_eq!(b.to_array(), [2.0, 3.0, 4.0, 5.0]);
//! assert_eq!((3.0_f32 - V::from_array([2.0, 3.0, 4.0, 5.0])).to_array(), [1.0, 0.0, -1.0, -2.0]);
//!
//! // Mask reductions
//! assert!(any_of(mask) && !all_of(mask));
//! ```
//!
//! ## Execution Targets
//!
//! | Tag        | Elements            | Lanes         | Storage            |
//! |------------|---------------------|---------------|--------------------|
//! | `Scalar`   | every primitive     | 1             | the element itself |
//! | `Fixed<N>` | every primitive     | `N`           | `[T; N]`           |
//! | `Wide128`  | `f32`, `f64`        | 4, 2          | `wide` registers   |
//! | `Wide256`  | `f32`, `f64`        | 8, 4          | `wide` registers   |
//!
//! `Wide128` and `Wide256` use register kernels for `exp`, `sin`, `cos` and
//! `sqrt`; every other function, and every function on the other tags, runs
//! through the lane-array fallbacks in [`fallback`].
//!
//! ## Result and Error Handling
//!
//! Type mismatches are compile errors. A mask for another element type is
//! rejected:
//!
//! ```compile_fail
//! use lanewise::prelude::*;
//!
//! let mut a = Simd::<f32, Fixed<4>>::splat(1.0);
//! let mask = SimdMask::<f64, Fixed<4>>::splat(true);
//! where_(&mask, &mut a).assign(0.0_f32);
//! ```
//!
//! A read-only view has no write path:
//!
//! ```compile_fail
//! use lanewise::prelude::*;
//!
//! let a = Simd::<f32, Fixed<4>>::splat(1.0);
//! let mask = SimdMask::<f32, Fixed<4>>::splat(true);
//! where_(&mask, &a).assign(0.0_f32);
//! ```
//!
//! Only arithmetic scalars combine with vectors:
//!
//! ```compile_fail
//! use lanewise::prelude::*;
//!
//! let a = Simd::<f32, Fixed<4>>::splat(1.0);
//! let _ = a + true;
//! ```
//!
//! Vectors of different tags never mix:
//!
//! ```compile_fail
//! use lanewise::prelude::*;
//!
//! let a = Simd::<f32, Fixed<4>>::splat(1.0);
//! let b = Simd::<f32, Wide128>::splat(1.0);
//! let _ = a + b;
//! ```
//!
//! A tag with zero lanes is rejected, so slice kernels always make progress:
//!
//! ```compile_fail
//! use lanewise::prelude::*;
//!
//! let input = [1.0_f32, 2.0, 3.0];
//! let mut output = [0.0_f32; 3];
//! let _ = map_slice::<f32, Fixed<0>, _>(&input, &mut output, |v| v);
//! ```
//!
//! Scalar domain errors propagate lane by lane (`sqrt(-1)` is NaN in that
//! lane only). The remaining runtime failures are slice transfers and slice
//! kernels, which return `Result<_, LaneError>`:
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! let mut v = Simd::<f64, Fixed<4>>::default();
//! let err = v.try_copy_from(&[1.0, 2.0]).unwrap_err();
//! assert_eq!(err, LaneError::SliceTooShort { needed: 4, got: 2 });
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate never allocates and supports `no_std`. Disable default features
//! to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! lanewise = { version = "0.3", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - element traits, backend contract and errors.
mod primitives;

// Layer 2: Backends - execution-target tags.
mod backends;

// Layer 3: Types - vector and mask values.
mod types;

// Layer 4: Algebra - operators and reductions.
mod algebra;

// Layer 5: Masking - lane-selective reads and writes.
mod masking;

// Layer 6: Math - elementwise transcendental functions.
mod math;

// Layer 7: Kernels - slice-level drivers.
mod kernels;

// Lane-array fallbacks, callable on every tag.
pub use math::fallback;

// Standard lanewise prelude.
pub mod prelude {
    pub use crate::algebra::reduce::{MaskReduce, all_of, any_of, none_of};
    pub use crate::backends::{fixed::Fixed, packed::Wide128, packed::Wide256, scalar::Scalar};
    pub use crate::kernels::slice::{map_slice, zip_slice};
    pub use crate::masking::where_expr::{
        ConstWhereExpression, WhereExpression, WhereTarget, where_,
    };
    pub use crate::math::transcendental::{
        SimdMath, abs, acos, asin, atan, atan2, cbrt, ceil, copysign, cos, cosh, exp, exp2,
        floor, hypot, ln, log2, log10, pow, round, sin, sinh, sqrt, tan, tanh, trunc,
    };
    pub use crate::primitives::abi::SimdAbi;
    pub use crate::primitives::element::{Arithmetic, SimdElement};
    pub use crate::primitives::errors::LaneError;
    pub use crate::primitives::lanes::LaneArray;
    pub use crate::types::{mask::SimdMask, simd::Simd};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod backends {
        pub use crate::backends::*;
    }
    pub mod types {
        pub use crate::types::*;
    }
    pub mod algebra {
        pub use crate::algebra::*;
    }
    pub mod masking {
        pub use crate::masking::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod kernels {
        pub use crate::kernels::*;
    }
}
