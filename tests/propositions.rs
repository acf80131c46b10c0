use fuzzy_algebra::proposition::{all_of, is, predicate, FuzzyProposition};
use fuzzy_algebra::{MembershipFunction, OperationSettings, SNorm, TNorm, TriangularFuzzyNumber};

#[test]
fn conjunction_and_disjunction_under_the_standard_catalog() {
    let first = predicate(|_: &()| 0.7);
    let second = predicate(|_: &()| 0.4);

    assert_eq!(first.and(second).evaluate(&((), ())), 0.4);
    assert_eq!(first.or(second).evaluate(&((), ())), 0.7);
}

#[test]
fn settings_are_chosen_per_evaluation() {
    let first = predicate(|_: &()| 0.5);
    let second = predicate(|_: &()| 0.5);
    let expression = first.and(second).or(first.and(second));
    let input = (((), ()), ((), ()));
    let probabilistic = OperationSettings::new()
        .with_conjunction(TNorm::Product)
        .with_disjunction(SNorm::ProbabilisticSum);

    assert_eq!(expression.evaluate(&input), 0.5);
    assert_eq!(expression.apply(&input, &probabilistic), 0.4375);
}

#[test]
fn rule_premise_over_several_variables() {
    let score_high = is(MembershipFunction::piecewise_linear([(175., 0.), (180., 0.2), (185., 0.7), (190., 1.)]));
    let ratio_good = is(MembershipFunction::piecewise_linear([(0.3, 1.), (0.4, 0.7), (0.41, 0.3), (0.42, 0.)]));
    let credit_good = is(TriangularFuzzyNumber::new(0., 2., 5.).unwrap());
    let approve = score_high.and(ratio_good.and(credit_good));

    assert_eq!(approve.evaluate(&(190., (0.3, 2.))), 1.);
    assert_eq!(approve.evaluate(&(180., (0.3, 2.))), 0.2);
    assert_eq!(approve.evaluate(&(190., (0.5, 2.))), 0.);
}

#[test]
fn boxed_propositions_share_one_input() {
    let checks = vec![
        predicate(|x: &f64| *x).boxed(),
        predicate(|x: &f64| x * 2.).not().boxed(),
        is(TriangularFuzzyNumber::new(0., 0.25, 1.).unwrap()).boxed(),
    ];

    assert_eq!(all_of(&checks, &0.25, &OperationSettings::default()), 0.25);
    assert_eq!(all_of(&checks, &0.75, &OperationSettings::default()), 0.);
}
