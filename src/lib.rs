//! Fuzzy set algebra.
//!
//! Grades of membership live in `[0, 1]` and are combined by swappable operators
//! from the [`ops`] catalog: t-norms, s-norms, complements, differences and
//! implications. On top of that the crate provides
//!
//! - [`IterableFuzzySet`], a membership function paired with an enumeration of
//!   its universe, and the [`FuzzySetOperations`] shared by every set type;
//! - [`TriangularFuzzyNumber`], with exact addition and subtraction and
//!   approximate multiplication and division;
//! - statically composed [propositions](proposition) evaluated under per-call
//!   [`OperationSettings`].
//!
//! ```
//! use fuzzy_algebra::{FuzzySet, TriangularFuzzyNumber};
//!
//! let about_two = TriangularFuzzyNumber::new(1., 2., 3.)?;
//! let about_five = TriangularFuzzyNumber::new(4., 5., 6.)?;
//! let sum = about_two + about_five;
//!
//! assert_eq!(sum, TriangularFuzzyNumber::new(5., 7., 9.)?);
//! assert_eq!(sum.grade(&8.), 0.5);
//! # Ok::<(), fuzzy_algebra::FuzzyError>(())
//! ```

mod algebra;
mod discrete;
mod error;
mod iterable;
mod linspace;
mod math;
mod membership;
mod number;
pub mod ops;
pub mod proposition;
mod settings;

pub use algebra::FuzzySetOperations;
pub use discrete::DiscreteMutableFuzzySet;
pub use error::{FuzzyError, Result};
pub use iterable::{Enumeration, Iter, IterableFuzzySet};
pub use linspace::Linspace;
pub use membership::{AnyFuzzySet, FuzzySet, MembershipFunction};
pub use number::TriangularFuzzyNumber;
pub use ops::{Complement, Difference, ImplicationOp, SNorm, SymmetricDifference, TNorm};
pub use settings::OperationSettings;

/// A degree of membership between zero and one
pub type Grade = f64;

/// Forces a value into `[0, 1]`. NaN becomes 0.
#[inline]
pub fn clamp_grade(grade: f64) -> Grade {
    if grade.is_nan() {
        0.
    } else {
        grade.clamp(0., 1.)
    }
}

#[test]
fn test_clamp_grade() {
    assert_eq!(clamp_grade(-0.5), 0.);
    assert_eq!(clamp_grade(0.42), 0.42);
    assert_eq!(clamp_grade(7.), 1.);
    assert_eq!(clamp_grade(f64::NAN), 0.);
}
