use crate::membership::AnyFuzzySet;
use crate::ops::{Complement, Difference, SNorm, SymmetricDifference, TNorm};
use crate::settings::OperationSettings;
use crate::{clamp_grade, Grade};

/// Set algebra shared by every fuzzy set representation.
///
/// Implementors supply the two pointwise primitives; every operation is built
/// on top of them and returns a new set, leaving `self` untouched. Binary
/// operations require both operands to be over the same universe type.
pub trait FuzzySetOperations: Sized {
    /// Applies `f` to every grade.
    fn map_grades(&self, f: impl Fn(Grade) -> Grade + Send + Sync + 'static) -> Self;

    /// Combines the grades `self` and `other` assign to each element.
    fn zip_grades(&self, other: &Self, f: impl Fn(Grade, Grade) -> Grade + Send + Sync + 'static) -> Self;

    /// Raises every grade below `alpha` up to `alpha`.
    ///
    /// This is a floor, not the classical crisp cut: grades are never dropped
    /// to zero. See [`TriangularFuzzyNumber::alpha_cut`](crate::TriangularFuzzyNumber::alpha_cut)
    /// for the interval cut on numbers.
    fn alpha_cut(&self, alpha: Grade) -> Self {
        let alpha = clamp_grade(alpha);

        self.map_grades(move |grade| grade.max(alpha))
    }

    fn complement(&self, method: Complement) -> Self {
        self.map_grades(move |grade| method.call(grade))
    }

    fn intersection(&self, other: &Self, method: TNorm) -> Self {
        self.zip_grades(other, move |a, b| method.call(a, b))
    }

    fn union(&self, other: &Self, method: SNorm) -> Self {
        self.zip_grades(other, move |a, b| method.call(a, b))
    }

    fn difference(&self, other: &Self, method: Difference) -> Self {
        self.zip_grades(other, move |a, b| method.call(a, b))
    }

    fn symmetric_difference(&self, other: &Self, method: SymmetricDifference) -> Self {
        self.zip_grades(other, move |a, b| method.call(a, b))
    }

    /// `grade^n`, the basis of linguistic hedges.
    fn power(&self, n: f64) -> Self {
        self.map_grades(move |grade| grade.powf(n))
    }

    /// Concentration hedge, `grade²`.
    fn very(&self) -> Self {
        self.power(2.)
    }

    /// Dilation hedge, `√grade`.
    fn somewhat(&self) -> Self {
        self.power(0.5)
    }

    fn applied_custom_function(&self, f: impl Fn(Grade) -> Grade + Send + Sync + 'static) -> Self {
        self.map_grades(f)
    }

    /// [`complement`](Self::complement) with the settings' negation.
    fn complement_under(&self, settings: &OperationSettings) -> Self {
        self.complement(settings.negation)
    }

    fn intersection_under(&self, other: &Self, settings: &OperationSettings) -> Self {
        self.intersection(other, settings.conjunction)
    }

    fn union_under(&self, other: &Self, settings: &OperationSettings) -> Self {
        self.union(other, settings.disjunction)
    }

    fn difference_under(&self, other: &Self, settings: &OperationSettings) -> Self {
        self.difference(other, settings.difference)
    }

    fn symmetric_difference_under(&self, other: &Self, settings: &OperationSettings) -> Self {
        self.symmetric_difference(other, settings.symmetric_difference)
    }
}

impl<U: 'static> FuzzySetOperations for AnyFuzzySet<U> {
    fn map_grades(&self, f: impl Fn(Grade) -> Grade + Send + Sync + 'static) -> Self {
        AnyFuzzySet::new(self.membership_function().map(f))
    }

    fn zip_grades(&self, other: &Self, f: impl Fn(Grade, Grade) -> Grade + Send + Sync + 'static) -> Self {
        AnyFuzzySet::new(self.membership_function().zip(other.membership_function(), f))
    }
}
