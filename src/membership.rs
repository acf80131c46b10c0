use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use num::Float;

use crate::iterable::{Enumeration, IterableFuzzySet};
use crate::math::interp;
use crate::{clamp_grade, Grade};

/// Anything that assigns a grade to elements of the universe `U`.
pub trait FuzzySet<U> {
    fn grade(&self, element: &U) -> Grade;
}

/// A pure, shareable mapping from a universe element to its grade.
///
/// Cloning is cheap: clones share the same underlying closure.
pub struct MembershipFunction<U>(Arc<dyn Fn(&U) -> Grade + Send + Sync>);

impl<U> Clone for MembershipFunction<U> {
    fn clone(&self) -> Self {
        MembershipFunction(Arc::clone(&self.0))
    }
}

impl<U> fmt::Debug for MembershipFunction<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MembershipFunction")
    }
}

impl<U> MembershipFunction<U> {
    pub fn new(function: impl Fn(&U) -> Grade + Send + Sync + 'static) -> Self {
        MembershipFunction(Arc::new(function))
    }

    #[inline]
    pub fn call(&self, element: &U) -> Grade {
        (self.0)(element)
    }
}

impl<U: 'static> MembershipFunction<U> {
    pub fn constant(grade: Grade) -> Self {
        let grade = clamp_grade(grade);

        Self::new(move |_| grade)
    }

    /// Pointwise transform of every grade. The result is clamped.
    pub fn map(&self, f: impl Fn(Grade) -> Grade + Send + Sync + 'static) -> Self {
        let inner = self.clone();

        Self::new(move |u| clamp_grade(f(inner.call(u))))
    }

    /// Pointwise combination with another function over the same universe.
    pub fn zip(&self, other: &Self, f: impl Fn(Grade, Grade) -> Grade + Send + Sync + 'static) -> Self {
        let (lhs, rhs) = (self.clone(), other.clone());

        Self::new(move |u| clamp_grade(f(lhs.call(u), rhs.call(u))))
    }
}

impl<U: PartialEq + Send + Sync + 'static> MembershipFunction<U> {
    /// Grade 1 at exactly `value`, 0 everywhere else.
    pub fn fuzzy_singleton(value: U) -> Self {
        Self::new(move |u| if *u == value { 1. } else { 0. })
    }
}

impl<U: Eq + Hash + Send + Sync + 'static> MembershipFunction<U> {
    pub fn from_crisp_set(set: HashSet<U>) -> Self {
        Self::new(move |u| if set.contains(u) { 1. } else { 0. })
    }

    /// Lookup in `grades`, with grade 0 for absent elements.
    pub fn from_mapping(grades: HashMap<U, Grade>) -> Self {
        Self::from_shared_mapping(Arc::new(grades), 0.)
    }

    pub(crate) fn from_shared_mapping(grades: Arc<HashMap<U, Grade>>, default_grade: Grade) -> Self {
        Self::new(move |u| grades.get(u).copied().unwrap_or(default_grade))
    }
}

impl<F: Float + Send + Sync + 'static> MembershipFunction<F> {
    /// Linear ramp from 0 at `minimum` up to 1 at `peak`, then down to 0 at `maximum`.
    ///
    /// Zero outside `[minimum, maximum]`. A side of zero width is a vertical edge.
    pub fn triangular(minimum: F, peak: F, maximum: F) -> Self {
        Self::new(move |x| triangular_grade(minimum, peak, maximum, *x))
    }

    /// Ramp up over `[a, b]`, plateau of 1 over `[b, c]`, ramp down over `[c, d]`.
    pub fn trapezoidal(a: F, b: F, c: F, d: F) -> Self {
        Self::new(move |&x| {
            let grade = if !(a <= x && x <= d) {
                F::zero()
            } else if b <= x && x <= c {
                F::one()
            } else if x < b {
                (x - a) / (b - a)
            } else {
                (d - x) / (d - c)
            };

            to_grade(grade)
        })
    }

    /// `exp(-(x - center)² / 2σ²)`. A zero `sigma` degenerates to a singleton at `center`.
    pub fn gaussian(center: F, sigma: F) -> Self {
        Self::new(move |&x| {
            if sigma == F::zero() {
                return if x == center { 1. } else { 0. };
            }

            let two = F::one() + F::one();

            to_grade((-(x - center).powi(2) / (two * sigma.powi(2))).exp())
        })
    }

    /// Linear interpolation through `(x, grade)` breakpoints.
    ///
    /// Points are sorted by `x`; left of the first point and right of the last
    /// the grade stays constant. No points means grade 0 everywhere.
    pub fn piecewise_linear(points: impl IntoIterator<Item = (F, F)>) -> Self {
        let mut points: Vec<_> = points.into_iter().collect();

        points.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        Self::new(move |&x| interp(x, &points).map_or(0., to_grade))
    }
}

impl<U> FuzzySet<U> for MembershipFunction<U> {
    fn grade(&self, element: &U) -> Grade {
        self.call(element)
    }
}

pub(crate) fn triangular_grade<F: Float>(minimum: F, peak: F, maximum: F, x: F) -> Grade {
    if !(minimum <= x && x <= maximum) {
        return 0.;
    }
    if x == peak {
        return 1.;
    }

    let grade = if x < peak {
        (x - minimum) / (peak - minimum)
    } else {
        (maximum - x) / (maximum - peak)
    };

    to_grade(grade)
}

pub(crate) fn to_grade<F: Float>(value: F) -> Grade {
    clamp_grade(num::ToPrimitive::to_f64(&value).unwrap_or(0.))
}

/// A fuzzy set known only through its membership function.
pub struct AnyFuzzySet<U> {
    function: MembershipFunction<U>,
}

impl<U> Clone for AnyFuzzySet<U> {
    fn clone(&self) -> Self {
        AnyFuzzySet {
            function: self.function.clone(),
        }
    }
}

impl<U> fmt::Debug for AnyFuzzySet<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyFuzzySet").finish_non_exhaustive()
    }
}

impl<U> AnyFuzzySet<U> {
    pub fn new(function: MembershipFunction<U>) -> Self {
        AnyFuzzySet { function }
    }

    pub fn membership_function(&self) -> &MembershipFunction<U> {
        &self.function
    }

    /// Pairs the membership function with a concrete enumeration of the universe.
    pub fn make_iterable<S: Enumeration<Item = U>>(&self, sequence: S) -> IterableFuzzySet<U, S> {
        IterableFuzzySet::new(sequence, self.function.clone())
    }
}

impl<U> FuzzySet<U> for AnyFuzzySet<U> {
    fn grade(&self, element: &U) -> Grade {
        self.function.call(element)
    }
}

impl<U> From<MembershipFunction<U>> for AnyFuzzySet<U> {
    fn from(function: MembershipFunction<U>) -> Self {
        Self::new(function)
    }
}

#[test]
fn test_triangular() {
    let triangle = MembershipFunction::triangular(1., 2., 4.);

    assert_eq!(triangle.call(&0.5), 0.);
    assert_eq!(triangle.call(&1.), 0.);
    assert_eq!(triangle.call(&1.5), 0.5);
    assert_eq!(triangle.call(&2.), 1.);
    assert_eq!(triangle.call(&3.), 0.5);
    assert_eq!(triangle.call(&4.), 0.);
    assert_eq!(triangle.call(&f64::NAN), 0.);

    let right_angle = MembershipFunction::triangular(0., 0., 2.);

    assert_eq!(right_angle.call(&0.), 1.);
    assert_eq!(right_angle.call(&1.), 0.5);
    assert_eq!(right_angle.call(&-0.5), 0.);
}

#[test]
fn test_trapezoidal_and_gaussian() {
    let trapezoid = MembershipFunction::trapezoidal(0.0f32, 1., 2., 4.);

    assert_eq!(trapezoid.call(&0.5), 0.5);
    assert_eq!(trapezoid.call(&1.5), 1.);
    assert_eq!(trapezoid.call(&3.), 0.5);
    assert_eq!(trapezoid.call(&5.), 0.);

    let gaussian = MembershipFunction::gaussian(0., 1.);

    assert_eq!(gaussian.call(&0.), 1.);
    assert!((gaussian.call(&1.) - (-0.5f64).exp()).abs() < 1e-12);
    assert_eq!(MembershipFunction::gaussian(3., 0.).call(&3.), 1.);
    assert_eq!(MembershipFunction::gaussian(3., 0.).call(&3.5), 0.);
}

#[test]
fn test_piecewise_linear() {
    // Listed out of order on purpose
    let tall = MembershipFunction::piecewise_linear([(185., 0.7), (175., 0.), (190., 1.), (180., 0.2)]);

    assert_eq!(tall.call(&170.), 0.);
    assert_eq!(tall.call(&177.5), 0.1);
    assert_eq!(tall.call(&190.), 1.);
    assert_eq!(tall.call(&200.), 1.);
    assert_eq!(MembershipFunction::<f64>::piecewise_linear([]).call(&1.), 0.);
}

#[test]
fn test_singleton_crisp_and_mapping() {
    let singleton = MembershipFunction::fuzzy_singleton("a");

    assert_eq!(singleton.call(&"a"), 1.);
    assert_eq!(singleton.call(&"b"), 0.);

    let crisp = MembershipFunction::from_crisp_set(HashSet::from(["a", "b", "c"]));

    assert_eq!(crisp.call(&"c"), 1.);
    assert_eq!(crisp.call(&"d"), 0.);
    assert_eq!(crisp.call(&""), 0.);

    let mapping = MembershipFunction::from_mapping(HashMap::from([("a", 0.69), ("c", 1.)]));

    assert_eq!(mapping.call(&"a"), 0.69);
    assert_eq!(mapping.call(&"b"), 0.);
}

#[test]
fn test_constant_map_and_zip() {
    let half = MembershipFunction::<u8>::constant(0.5);
    let quarter = MembershipFunction::constant(0.25);

    assert_eq!(MembershipFunction::<u8>::constant(3.).call(&0), 1.);
    assert_eq!(half.map(|g| g * 3.).call(&7), 1.);
    assert_eq!(half.zip(&quarter, |a, b| a - b).call(&7), 0.25);
}
