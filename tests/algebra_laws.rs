use std::collections::{HashMap, HashSet};

use fuzzy_algebra::{
    Complement, DiscreteMutableFuzzySet, FuzzySet, FuzzySetOperations, IterableFuzzySet, MembershipFunction, SNorm,
    TNorm,
};

const SAMPLES: [f64; 6] = [0., 0.1, 0.25, 0.5, 0.9, 1.];

fn letters() -> IterableFuzzySet<&'static str, Vec<&'static str>> {
    let grades = HashMap::from([("a", 1.), ("b", 0.5), ("c", 0.)]);

    IterableFuzzySet::new(vec!["a", "b", "c"], MembershipFunction::from_mapping(grades))
}

fn numbers() -> (IterableFuzzySet<u32, Vec<u32>>, IterableFuzzySet<u32, Vec<u32>>) {
    let universe: Vec<u32> = (0..=10).collect();
    let small = IterableFuzzySet::from_fn(universe.clone(), |n| 1. - f64::from(*n) / 10.);
    let around_six = IterableFuzzySet::new(
        universe,
        MembershipFunction::new(|n: &u32| (1. - (f64::from(*n) - 6.).abs() / 3.).max(0.)),
    );

    (small, around_six)
}

#[test]
fn standard_operators_respect_boundaries() {
    for x in SAMPLES {
        assert_eq!(TNorm::Minimum.call(1., x), x);
        assert_eq!(TNorm::Minimum.call(0., x), 0.);
        assert_eq!(SNorm::Maximum.call(0., x), x);
        assert_eq!(SNorm::Maximum.call(1., x), 1.);
    }

    assert_eq!(Complement::Standard.call(0.), 1.);
    assert_eq!(Complement::Standard.call(1.), 0.);
}

#[test]
fn standard_union_and_intersection_are_idempotent() {
    let (small, around_six) = numbers();

    for set in [letters().union(&letters(), SNorm::Maximum), letters().intersection(&letters(), TNorm::Minimum)] {
        assert_eq!(set.iter().collect::<Vec<_>>(), letters().iter().collect::<Vec<_>>());
    }

    for set in [small, around_six] {
        let union = set.union(&set, SNorm::Maximum);
        let intersection = set.intersection(&set, TNorm::Minimum);

        for ((a, b), c) in set.iter().zip(union.iter()).zip(intersection.iter()) {
            assert_eq!(a, b);
            assert_eq!(a, c);
        }
    }
}

#[test]
fn de_morgan_holds_for_the_standard_catalog() {
    let (a, b) = numbers();
    let lhs = a.union(&b, SNorm::Maximum).complement(Complement::Standard);
    let rhs = a
        .complement(Complement::Standard)
        .intersection(&b.complement(Complement::Standard), TNorm::Minimum);

    for ((element, left), (_, right)) in lhs.iter().zip(rhs.iter()) {
        assert_eq!(left, right, "at {element}");
    }

    let lhs = a.intersection(&b, TNorm::Minimum).complement(Complement::Standard);
    let rhs = a
        .complement(Complement::Standard)
        .union(&b.complement(Complement::Standard), SNorm::Maximum);

    for ((element, left), (_, right)) in lhs.iter().zip(rhs.iter()) {
        assert_eq!(left, right, "at {element}");
    }
}

#[test]
fn floor_alpha_cut_and_derived_properties() {
    let set = letters();
    let cut = set.alpha_cut(0.3);

    assert_eq!(cut.iter().collect::<Vec<_>>(), vec![(&"a", 1.), (&"b", 0.5), (&"c", 0.3)]);
    assert_eq!(set.height(), 1.);
    assert!(set.is_normal());
    assert_eq!(set.support(), HashSet::from(["a", "b"]));
    assert_eq!(set.core(), HashSet::from(["a"]));
    // the cut raised "c" into the support
    assert_eq!(cut.support(), HashSet::from(["a", "b", "c"]));
}

#[test]
fn discrete_sets_wrap_into_the_generic_algebra() {
    let mut discrete = DiscreteMutableFuzzySet::new();

    discrete.set_grade(1., "a");
    discrete.set_grade(0.5, "b");
    discrete.set_grade(0., "c");

    let iterable = discrete.make_iterable();
    let very = iterable.very();

    assert_eq!(iterable.height(), 1.);
    assert_eq!(iterable.core(), HashSet::from(["a"]));
    assert_eq!(very.grade(&"b"), 0.25);
    assert_eq!(very.grade(&"missing"), 0.);

    let over_letters = discrete.make_iterable_over(vec!["a", "z"]);

    assert_eq!(over_letters.iter().collect::<Vec<_>>(), vec![(&"a", 1.), (&"z", 0.)]);
}
