use std::ops::{Add, Neg, Sub};

use num::{Float, Zero};
use tracing::{debug, trace};

use crate::error::{FuzzyError, Result};
use crate::iterable::IterableFuzzySet;
use crate::linspace::Linspace;
use crate::membership::{triangular_grade, AnyFuzzySet, FuzzySet, MembershipFunction};
use crate::{clamp_grade, Grade};

/// A triangular fuzzy number `(minimum, peak, maximum)` over a real universe.
///
/// `minimum <= peak <= maximum` always holds: the constructors refuse infinite
/// or NaN parameters and out-of-order triples with
/// [`FuzzyError::InvalidFuzzyNumberBounds`], and every operation builds a new
/// value. Equality is exact on the three parameters.
///
/// Sums and differences of finite operands can overflow to infinity, but never
/// to NaN, so the ordering survives the arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangularFuzzyNumber<F = f64> {
    minimum: F,
    peak: F,
    maximum: F,
}

impl<F: Float> TriangularFuzzyNumber<F> {
    pub fn new(minimum: F, peak: F, maximum: F) -> Result<Self> {
        // Infinite bounds would let `inf - inf` put a NaN in a sum or difference
        if minimum.is_finite() && maximum.is_finite() && minimum <= peak && peak <= maximum {
            return Ok(Self::new_unchecked(minimum, peak, maximum));
        }

        let (minimum, peak, maximum) = (to_f64(minimum), to_f64(peak), to_f64(maximum));

        debug!(minimum, peak, maximum, "rejecting triangular fuzzy number");

        Err(FuzzyError::InvalidFuzzyNumberBounds { minimum, peak, maximum })
    }

    /// `(peak - left_interval, peak, peak + right_interval)`. Negative widths are rejected.
    pub fn from_peak(peak: F, left_interval: F, right_interval: F) -> Result<Self> {
        Self::new(peak - left_interval, peak, peak + right_interval)
    }

    /// The crisp number `value`. Fails only for infinite or NaN values.
    pub fn singleton(value: F) -> Result<Self> {
        Self::new(value, value, value)
    }

    fn new_unchecked(minimum: F, peak: F, maximum: F) -> Self {
        Self { minimum, peak, maximum }
    }

    pub fn minimum(&self) -> F {
        self.minimum
    }

    pub fn peak(&self) -> F {
        self.peak
    }

    pub fn maximum(&self) -> F {
        self.maximum
    }

    pub fn is_singleton(&self) -> bool {
        self.minimum == self.peak && self.peak == self.maximum
    }

    /// The interval where the grade is at least `alpha`, as a new number.
    ///
    /// `alpha` is clamped into `[0, 1]`. Cutting at 0 returns the number itself,
    /// cutting at 1 the singleton at its peak.
    pub fn alpha_cut(&self, alpha: Grade) -> Self {
        let alpha = F::from(clamp_grade(alpha)).unwrap_or_else(F::zero);
        let rest = F::one() - alpha;
        let minimum = (rest * self.minimum + alpha * self.peak).max(self.minimum).min(self.peak);
        let maximum = (rest * self.maximum + alpha * self.peak).min(self.maximum).max(self.peak);

        Self::new_unchecked(minimum, self.peak, maximum)
    }

    /// Triangular approximation of the product.
    ///
    /// The support comes from the α=0 cuts and the peak from the α=1 cuts, so
    /// this is not the exact fuzzy product, which is generally not triangular.
    /// Fails when the resulting parameters are out of order, as they are for
    /// some sign combinations.
    pub fn approximately_multiplied(&self, other: &Self) -> Result<Self> {
        let (self_alpha0, other_alpha0) = (self.alpha_cut(0.), other.alpha_cut(0.));
        let minimum = self_alpha0.minimum * other_alpha0.minimum;
        let maximum = self_alpha0.maximum * other_alpha0.maximum;
        let peak = self.alpha_cut(1.).minimum * other.alpha_cut(1.).minimum;

        trace!(
            minimum = to_f64(minimum),
            peak = to_f64(peak),
            maximum = to_f64(maximum),
            "approximate product"
        );

        Self::new(minimum, peak, maximum)
    }

    /// Triangular approximation of the quotient, built like
    /// [`approximately_multiplied`](Self::approximately_multiplied).
    ///
    /// A divisor whose support touches zero yields infinite or NaN bounds,
    /// which are rejected.
    pub fn approximately_divided(&self, other: &Self) -> Result<Self> {
        let (self_alpha0, other_alpha0) = (self.alpha_cut(0.), other.alpha_cut(0.));
        let minimum = self_alpha0.minimum / other_alpha0.maximum;
        let maximum = self_alpha0.maximum / other_alpha0.minimum;
        let peak = self.alpha_cut(1.).minimum / other.alpha_cut(1.).maximum;

        trace!(
            minimum = to_f64(minimum),
            peak = to_f64(peak),
            maximum = to_f64(maximum),
            "approximate quotient"
        );

        Self::new(minimum, peak, maximum)
    }
}

impl<F: Float + Send + Sync + 'static> TriangularFuzzyNumber<F> {
    pub fn membership_function(&self) -> MembershipFunction<F> {
        if self.is_singleton() {
            MembershipFunction::fuzzy_singleton(self.peak)
        } else {
            MembershipFunction::triangular(self.minimum, self.peak, self.maximum)
        }
    }

    pub fn to_any_fuzzy_set(&self) -> AnyFuzzySet<F> {
        AnyFuzzySet::new(self.membership_function())
    }

    /// `samples` evenly spaced points across the support, with their grades.
    pub fn to_iterable(&self, samples: usize) -> IterableFuzzySet<F, Vec<F>> {
        let universe = Linspace::new(self.minimum, self.maximum, samples).collect();

        IterableFuzzySet::new(universe, self.membership_function())
    }
}

impl<F: Float> FuzzySet<F> for TriangularFuzzyNumber<F> {
    fn grade(&self, element: &F) -> Grade {
        if self.is_singleton() {
            return if *element == self.peak { 1. } else { 0. };
        }

        triangular_grade(self.minimum, self.peak, self.maximum, *element)
    }
}

impl<F: Float> Add for TriangularFuzzyNumber<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new_unchecked(
            self.minimum + rhs.minimum,
            self.peak + rhs.peak,
            self.maximum + rhs.maximum,
        )
    }
}

/// Interval subtraction: the bounds of `rhs` swap roles.
impl<F: Float> Sub for TriangularFuzzyNumber<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new_unchecked(
            self.minimum - rhs.maximum,
            self.peak - rhs.peak,
            self.maximum - rhs.minimum,
        )
    }
}

impl<F: Float> Neg for TriangularFuzzyNumber<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_unchecked(-self.maximum, -self.peak, -self.minimum)
    }
}

impl<F: Float> Zero for TriangularFuzzyNumber<F> {
    fn zero() -> Self {
        Self::new_unchecked(F::zero(), F::zero(), F::zero())
    }

    fn is_zero(&self) -> bool {
        self.minimum.is_zero() && self.peak.is_zero() && self.maximum.is_zero()
    }
}

impl<F: Float> Default for TriangularFuzzyNumber<F> {
    fn default() -> Self {
        Self::zero()
    }
}

fn to_f64<F: Float>(value: F) -> f64 {
    num::ToPrimitive::to_f64(&value).unwrap_or(f64::NAN)
}
