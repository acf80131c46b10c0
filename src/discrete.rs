use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use crate::algebra::FuzzySetOperations;
use crate::iterable::{Enumeration, IterableFuzzySet};
use crate::membership::{FuzzySet, MembershipFunction};
use crate::{clamp_grade, Grade};

/// A mutable element -> grade map, plus one default grade for every element
/// that was never set.
///
/// The default grade starts at 0 and goes through the same pointwise
/// operations as the stored grades, so the complement of an empty set grades
/// everything 1. Storage is shared between clones and iterable views and
/// copied only when a clone is mutated, so [`make_iterable`](Self::make_iterable)
/// does not copy the grades.
#[derive(Debug)]
pub struct DiscreteMutableFuzzySet<U> {
    grades: Arc<HashMap<U, Grade>>,
    default_grade: Grade,
}

impl<U> Clone for DiscreteMutableFuzzySet<U> {
    fn clone(&self) -> Self {
        DiscreteMutableFuzzySet {
            grades: Arc::clone(&self.grades),
            default_grade: self.default_grade,
        }
    }
}

impl<U> Default for DiscreteMutableFuzzySet<U> {
    fn default() -> Self {
        DiscreteMutableFuzzySet {
            grades: Arc::new(HashMap::new()),
            default_grade: 0.,
        }
    }
}

impl<U: Eq + Hash> DiscreteMutableFuzzySet<U> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grades are clamped into `[0, 1]`.
    pub fn from_grades(grades: impl IntoIterator<Item = (U, Grade)>) -> Self {
        grades.into_iter().collect()
    }

    pub fn from_crisp_set(set: impl IntoIterator<Item = U>) -> Self {
        set.into_iter().map(|element| (element, 1.)).collect()
    }

    pub fn grades(&self) -> &HashMap<U, Grade> {
        &self.grades
    }

    /// Grade of every element that was never set.
    pub fn default_grade(&self) -> Grade {
        self.default_grade
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}

impl<U: Eq + Hash + Clone> DiscreteMutableFuzzySet<U> {
    /// Grades are clamped into `[0, 1]`.
    pub fn set_grade(&mut self, grade: Grade, element: U) {
        Arc::make_mut(&mut self.grades).insert(element, clamp_grade(grade));
    }

    /// In-place variant of [`FuzzySetOperations::alpha_cut`].
    pub fn apply_alpha_cut(&mut self, alpha: Grade) {
        let alpha = clamp_grade(alpha);

        for grade in Arc::make_mut(&mut self.grades).values_mut() {
            *grade = grade.max(alpha);
        }
        self.default_grade = self.default_grade.max(alpha);
    }
}

impl<U: Eq + Hash + Send + Sync + 'static> DiscreteMutableFuzzySet<U> {
    /// A view over the stored elements, sharing this set's storage.
    pub fn make_iterable(&self) -> IterableFuzzySet<U, Arc<HashMap<U, Grade>>> {
        IterableFuzzySet::new(Arc::clone(&self.grades), self.membership_function())
    }

    /// A view over an arbitrary enumeration; elements never set get the default grade.
    pub fn make_iterable_over<S: Enumeration<Item = U>>(&self, sequence: S) -> IterableFuzzySet<U, S> {
        IterableFuzzySet::new(sequence, self.membership_function())
    }

    fn membership_function(&self) -> MembershipFunction<U> {
        MembershipFunction::from_shared_mapping(Arc::clone(&self.grades), self.default_grade)
    }
}

impl<U: Eq + Hash> FuzzySet<U> for DiscreteMutableFuzzySet<U> {
    fn grade(&self, element: &U) -> Grade {
        self.grades.get(element).copied().unwrap_or(self.default_grade)
    }
}

impl<U: Eq + Hash> FromIterator<(U, Grade)> for DiscreteMutableFuzzySet<U> {
    fn from_iter<I: IntoIterator<Item = (U, Grade)>>(iter: I) -> Self {
        let grades = iter
            .into_iter()
            .map(|(element, grade)| (element, clamp_grade(grade)))
            .collect();

        DiscreteMutableFuzzySet {
            grades: Arc::new(grades),
            default_grade: 0.,
        }
    }
}

impl<U: Eq + Hash + Clone> FuzzySetOperations for DiscreteMutableFuzzySet<U> {
    fn map_grades(&self, f: impl Fn(Grade) -> Grade + Send + Sync + 'static) -> Self {
        let mut result: Self = self
            .grades
            .iter()
            .map(|(element, grade)| (element.clone(), f(*grade)))
            .collect();

        result.default_grade = clamp_grade(f(self.default_grade));
        result
    }

    /// Ranges over the elements stored in either operand.
    fn zip_grades(&self, other: &Self, f: impl Fn(Grade, Grade) -> Grade + Send + Sync + 'static) -> Self {
        let elements: HashSet<&U> = self.grades.keys().chain(other.grades.keys()).collect();
        let mut result: Self = elements
            .into_iter()
            .map(|element| (element.clone(), f(self.grade(element), other.grade(element))))
            .collect();

        result.default_grade = clamp_grade(f(self.default_grade, other.default_grade));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Complement, SNorm, TNorm};

    fn assert_expected_grades(expected: &[(&'static str, Grade)], set: &DiscreteMutableFuzzySet<&'static str>) {
        for (element, grade) in expected {
            assert!(
                (set.grade(element) - grade).abs() < 1e-9,
                "grade of {element:?}: {} != {grade}",
                set.grade(element)
            );
        }
    }

    const INITIAL: [(&str, Grade); 6] = [("a", 1.), ("b", 0.88), ("c", 0.69), ("d", 0.42), ("e", 0.001), ("f", 0.)];

    #[test]
    fn test_default_grades_are_zero() {
        let set = DiscreteMutableFuzzySet::new();

        assert!(set.is_empty());
        assert_expected_grades(&[("a", 0.), ("b", 0.), ("c", 0.)], &set);
    }

    #[test]
    fn test_from_grades_and_set_grade() {
        let from_grades = DiscreteMutableFuzzySet::from_grades([("a", 0.69), ("c", 1.)]);
        let mut set = DiscreteMutableFuzzySet::new();

        set.set_grade(0.69, "a");
        set.set_grade(1., "c");
        set.set_grade(1.5, "z");

        let expected = [("a", 0.69), ("b", 0.), ("c", 1.), ("z", 1.)];

        assert_expected_grades(&expected[..3], &from_grades);
        assert_expected_grades(&expected, &set);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_from_crisp_set() {
        let set = DiscreteMutableFuzzySet::from_crisp_set(["a", "b", "c"]);

        assert_expected_grades(&[("a", 1.), ("b", 1.), ("c", 1.), ("d", 0.), (" ", 0.), ("", 0.)], &set);
    }

    #[test]
    fn test_alpha_cut() {
        let expected = [("a", 1.), ("b", 0.88), ("c", 0.69), ("d", 0.5), ("e", 0.5), ("f", 0.5)];
        let set = DiscreteMutableFuzzySet::from_grades(INITIAL);
        let mut in_place = DiscreteMutableFuzzySet::from_grades(INITIAL);

        in_place.apply_alpha_cut(0.5);

        assert_expected_grades(&expected, &set.alpha_cut(0.5));
        assert_expected_grades(&expected, &in_place);
        assert_expected_grades(&INITIAL, &set);
    }

    #[test]
    fn test_complement() {
        let expected = [("a", 0.), ("b", 0.12), ("c", 0.31), ("d", 0.58), ("e", 0.999), ("f", 1.)];
        let set = DiscreteMutableFuzzySet::from_grades(INITIAL);

        assert_expected_grades(&expected, &set.complement(Complement::Standard));
        assert_eq!(set.complement(Complement::Standard).grade(&"g"), 1.);
    }

    #[test]
    fn test_default_grade_follows_operations() {
        let set = DiscreteMutableFuzzySet::from_grades([("a", 0.2)]);
        let mut in_place = set.clone();

        in_place.apply_alpha_cut(0.5);

        assert_eq!(set.alpha_cut(0.5).grade(&"g"), 0.5);
        assert_eq!(in_place.grade(&"g"), 0.5);
        assert_eq!(in_place.default_grade(), 0.5);
        assert_eq!(set.default_grade(), 0.);
        assert_expected_grades(&[("a", 0.8), ("g", 1.)], &set.complement(Complement::Standard));

        let excluded_middle = set.union(&set.complement(Complement::Standard), SNorm::Maximum);

        assert_expected_grades(&[("a", 0.8), ("g", 1.)], &excluded_middle);
        assert_eq!(
            set.complement(Complement::Standard).make_iterable_over(vec!["a", "g"]).iter().collect::<Vec<_>>(),
            vec![(&"a", 0.8), (&"g", 1.)]
        );
    }

    #[test]
    fn test_binary_operations_cover_both_key_sets() {
        let lhs = DiscreteMutableFuzzySet::from_grades([("a", 0.25), ("b", 0.75)]);
        let rhs = DiscreteMutableFuzzySet::from_grades([("b", 0.5), ("c", 1.)]);

        assert_expected_grades(&[("a", 0.25), ("b", 0.75), ("c", 1.)], &lhs.union(&rhs, SNorm::Maximum));
        assert_expected_grades(&[("a", 0.), ("b", 0.5), ("c", 0.)], &lhs.intersection(&rhs, TNorm::Minimum));
        assert_eq!(lhs.union(&rhs, SNorm::Maximum).len(), 3);
    }

    #[test]
    fn test_clones_are_independent() {
        let original = DiscreteMutableFuzzySet::from_grades([("a", 0.25)]);
        let view = original.make_iterable();
        let mut copy = original.clone();

        copy.set_grade(1., "a");

        assert_eq!(original.grade(&"a"), 0.25);
        assert_eq!(copy.grade(&"a"), 1.);
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![(&"a", 0.25)]);
    }

    #[test]
    fn test_make_iterable_over() {
        let set = DiscreteMutableFuzzySet::from_grades([("a", 0.25)]);
        let view = set.make_iterable_over(vec!["a", "b"]);

        assert_eq!(view.iter().collect::<Vec<_>>(), vec![(&"a", 0.25), (&"b", 0.)]);
    }
}
