use fuzzy_algebra::{FuzzyError, FuzzySet, FuzzySetOperations, TriangularFuzzyNumber};

fn tfn(minimum: f64, peak: f64, maximum: f64) -> TriangularFuzzyNumber {
    TriangularFuzzyNumber::new(minimum, peak, maximum).unwrap()
}

fn samples() -> Vec<TriangularFuzzyNumber> {
    vec![tfn(1., 2., 3.), tfn(-4., -1., 0.5), tfn(0., 0., 7.), tfn(2., 2., 2.), tfn(-0.3, 0.1, 0.2)]
}

#[test]
fn addition_and_subtraction() {
    assert_eq!(tfn(1., 2., 3.) + tfn(4., 5., 6.), tfn(5., 7., 9.));
    // subtracting a number from itself widens instead of collapsing to zero
    assert_eq!(tfn(1., 2., 3.) - tfn(1., 2., 3.), tfn(-2., 0., 2.));
}

#[test]
fn zero_is_the_additive_identity() {
    let zero = tfn(0., 0., 0.);

    for x in samples() {
        assert_eq!(zero + x, x);
        assert_eq!(x + zero, x);
    }
}

#[test]
fn negation_is_an_involution() {
    for x in samples() {
        assert_eq!(-(-x), x);
        assert_eq!(x - x, x + (-x));
    }
}

#[test]
fn alpha_cut_boundaries() {
    for x in samples() {
        let collapsed = x.alpha_cut(1.);

        assert_eq!(x.alpha_cut(0.), x);
        assert!(collapsed.is_singleton());
        assert_eq!(collapsed.peak(), x.peak());
    }
}

#[test]
fn alpha_cut_narrows_toward_the_peak() {
    let cut = tfn(0., 4., 8.).alpha_cut(0.25);

    assert_eq!(cut, tfn(1., 4., 7.));
    assert_eq!(cut.grade(&1.), 0.);
    assert_eq!(cut.grade(&4.), 1.);
}

#[test]
fn arithmetic_results_stay_ordered() {
    for x in samples() {
        for y in samples() {
            for z in [x + y, x - y, -x] {
                assert!(z.minimum() <= z.peak() && z.peak() <= z.maximum());
            }
        }
    }
}

#[test]
fn approximate_product_and_quotient() {
    let product = tfn(1., 2., 3.).approximately_multiplied(&tfn(4., 5., 6.)).unwrap();
    let quotient = tfn(4., 10., 18.).approximately_divided(&tfn(1., 2., 3.)).unwrap();

    assert_eq!(product, tfn(4., 10., 18.));
    assert_eq!(quotient, tfn(4. / 3., 5., 18.));

    assert!(matches!(
        tfn(-3., -2., -1.).approximately_multiplied(&tfn(1., 2., 3.)),
        Err(FuzzyError::InvalidFuzzyNumberBounds { .. })
    ));
}

#[test]
fn invalid_bounds_are_rejected() {
    let error = TriangularFuzzyNumber::new(2., 1., 3.).unwrap_err();

    assert_eq!(
        error.to_string(),
        "invalid fuzzy number bounds: expected minimum <= peak <= maximum, got (2, 1, 3)"
    );
    assert!(TriangularFuzzyNumber::from_peak(1., 0.5, -0.5).is_err());
    assert!(TriangularFuzzyNumber::<f32>::new(0., 1., f32::NAN).is_err());
}

#[test]
fn numbers_feed_the_generic_set_algebra() {
    let about_two = tfn(1., 2., 3.).to_iterable(5);
    let about_three = tfn(2., 3., 4.).to_any_fuzzy_set();
    let overlap = about_two.intersection(&about_three.make_iterable(vec![1., 1.5, 2., 2.5, 3.]), Default::default());

    assert_eq!(
        overlap.iter().map(|(x, grade)| (*x, grade)).collect::<Vec<_>>(),
        vec![(1., 0.), (1.5, 0.), (2., 0.), (2.5, 0.5), (3., 0.)]
    );
}
