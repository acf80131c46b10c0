use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::algebra::FuzzySetOperations;
use crate::membership::{FuzzySet, MembershipFunction};
use crate::Grade;

/// A finite, restartable enumeration of universe elements.
///
/// Iterating twice over the same value yields the same elements in the same order.
pub trait Enumeration {
    type Item;
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_>;
}

impl<T> Enumeration for Vec<T> {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T, const N: usize> Enumeration for [T; N] {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T, H> Enumeration for HashSet<T, H> {
    type Item = T;
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> Enumeration for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

/// Enumerates the keys of the map.
impl<K, V, H> Enumeration for HashMap<K, V, H> {
    type Item = K;
    type Iter<'a>
        = std::collections::hash_map::Keys<'a, K, V>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.keys()
    }
}

impl<E: Enumeration + ?Sized> Enumeration for Arc<E> {
    type Item = E::Item;
    type Iter<'a>
        = E::Iter<'a>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        (**self).elements()
    }
}

/// A fuzzy set over an explicit enumeration of its universe.
///
/// Nothing is cached: derived properties such as [`height`](Self::height) walk
/// the enumeration on every call.
pub struct IterableFuzzySet<U, S> {
    sequence: S,
    function: MembershipFunction<U>,
}

impl<U, S: Clone> Clone for IterableFuzzySet<U, S> {
    fn clone(&self) -> Self {
        IterableFuzzySet {
            sequence: self.sequence.clone(),
            function: self.function.clone(),
        }
    }
}

impl<U, S: fmt::Debug> fmt::Debug for IterableFuzzySet<U, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterableFuzzySet")
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

impl<U, S: Enumeration<Item = U>> IterableFuzzySet<U, S> {
    pub fn new(sequence: S, function: MembershipFunction<U>) -> Self {
        IterableFuzzySet { sequence, function }
    }

    pub fn from_fn(sequence: S, function: impl Fn(&U) -> Grade + Send + Sync + 'static) -> Self {
        Self::new(sequence, MembershipFunction::new(function))
    }

    pub fn sequence(&self) -> &S {
        &self.sequence
    }

    pub fn membership_function(&self) -> &MembershipFunction<U> {
        &self.function
    }

    /// `(element, grade)` pairs in enumeration order.
    pub fn iter(&self) -> Iter<'_, U, S> {
        Iter {
            elements: self.sequence.elements(),
            function: &self.function,
        }
    }

    /// Largest grade in the enumeration, 0 when it is empty.
    pub fn height(&self) -> Grade {
        self.iter().map(|(_, grade)| grade).fold(0., Grade::max)
    }

    pub fn is_normal(&self) -> bool {
        self.iter().any(|(_, grade)| grade == 1.)
    }
}

impl<U: Eq + Hash + Clone, S: Enumeration<Item = U>> IterableFuzzySet<U, S> {
    /// Elements with a grade above zero.
    pub fn support(&self) -> HashSet<U> {
        self.iter()
            .filter(|(_, grade)| *grade > 0.)
            .map(|(element, _)| element.clone())
            .collect()
    }

    /// Elements with a grade of exactly one.
    pub fn core(&self) -> HashSet<U> {
        self.iter()
            .filter(|(_, grade)| *grade == 1.)
            .map(|(element, _)| element.clone())
            .collect()
    }
}

impl<U: Eq + Hash + Send + Sync + Clone + 'static> IterableFuzzySet<U, HashSet<U>> {
    /// Every member of `set` with grade 1.
    pub fn from_crisp_set(set: HashSet<U>) -> Self {
        let function = MembershipFunction::from_crisp_set(set.clone());

        Self::new(set, function)
    }
}

impl<U: PartialEq + Send + Sync + Clone + 'static> IterableFuzzySet<U, Vec<U>> {
    pub fn singleton(element: U) -> Self {
        let function = MembershipFunction::fuzzy_singleton(element.clone());

        Self::new(vec![element], function)
    }
}

impl<U, S> FuzzySet<U> for IterableFuzzySet<U, S> {
    fn grade(&self, element: &U) -> Grade {
        self.function.call(element)
    }
}

impl<U: 'static, S: Clone> FuzzySetOperations for IterableFuzzySet<U, S> {
    fn map_grades(&self, f: impl Fn(Grade) -> Grade + Send + Sync + 'static) -> Self {
        IterableFuzzySet {
            sequence: self.sequence.clone(),
            function: self.function.map(f),
        }
    }

    /// The result keeps the enumeration of `self`.
    fn zip_grades(&self, other: &Self, f: impl Fn(Grade, Grade) -> Grade + Send + Sync + 'static) -> Self {
        IterableFuzzySet {
            sequence: self.sequence.clone(),
            function: self.function.zip(&other.function, f),
        }
    }
}

pub struct Iter<'a, U, S: Enumeration<Item = U> + 'a> {
    elements: S::Iter<'a>,
    function: &'a MembershipFunction<U>,
}

impl<'a, U, S: Enumeration<Item = U> + 'a> Iterator for Iter<'a, U, S> {
    type Item = (&'a U, Grade);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.next()?;

        Some((element, self.function.call(element)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<'a, U, S: Enumeration<Item = U>> IntoIterator for &'a IterableFuzzySet<U, S> {
    type Item = (&'a U, Grade);
    type IntoIter = Iter<'a, U, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
fn letters() -> IterableFuzzySet<&'static str, Vec<&'static str>> {
    let grades = HashMap::from([("a", 1.), ("b", 0.5), ("c", 0.)]);

    IterableFuzzySet::new(vec!["a", "b", "c"], MembershipFunction::from_mapping(grades))
}

#[test]
fn test_iteration_order_and_restart() {
    let set = letters();
    let first: Vec<_> = set.iter().collect();
    let second: Vec<_> = (&set).into_iter().collect();

    assert_eq!(first, vec![(&"a", 1.), (&"b", 0.5), (&"c", 0.)]);
    assert_eq!(first, second);
    assert_eq!(set.iter().count(), 3);
}

#[test]
fn test_derived_properties() {
    let set = letters();

    assert_eq!(set.height(), 1.);
    assert!(set.is_normal());
    assert_eq!(set.support(), HashSet::from(["a", "b"]));
    assert_eq!(set.core(), HashSet::from(["a"]));

    let empty = IterableFuzzySet::from_fn(Vec::<u8>::new(), |_| 1.);

    assert_eq!(empty.height(), 0.);
    assert!(!empty.is_normal());
    assert!(empty.support().is_empty());
}

#[test]
fn test_crisp_and_singleton_constructors() {
    let crisp = IterableFuzzySet::from_crisp_set(HashSet::from([1, 2, 3]));

    assert_eq!(crisp.core(), HashSet::from([1, 2, 3]));
    assert_eq!(crisp.grade(&4), 0.);

    let singleton = IterableFuzzySet::singleton('x');

    assert_eq!(singleton.iter().collect::<Vec<_>>(), vec![(&'x', 1.)]);
    assert_eq!(singleton.grade(&'y'), 0.);
}

#[test]
fn test_shared_and_keyed_enumerations() {
    let shared = Arc::new(BTreeSet::from([3, 1, 2]));
    let set = IterableFuzzySet::from_fn(Arc::clone(&shared), |n| f64::from(*n) / 4.);

    assert_eq!(set.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(set.height(), 0.75);

    let keyed = IterableFuzzySet::from_fn(HashMap::from([("k", ())]), |_| 0.5);

    assert_eq!(keyed.iter().collect::<Vec<_>>(), vec![(&"k", 0.5)]);
}
