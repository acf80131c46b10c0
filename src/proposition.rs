//! Fuzzy propositions composed at definition time.
//!
//! Composite nodes are generic over their operands, so an expression like
//! `tall.and(heavy.or(strong))` is a concrete nested type evaluated in one
//! traversal without allocation. The operator for each connective comes from
//! the [`OperationSettings`] passed at evaluation time.
//!
//! ```
//! use fuzzy_algebra::proposition::{predicate, FuzzyProposition};
//! use fuzzy_algebra::{OperationSettings, TNorm};
//!
//! let warm = predicate(|celsius: &f64| (celsius - 15.) / 10.);
//! let humid = predicate(|humidity: &f64| *humidity);
//! let muggy = warm.and(humid);
//!
//! assert_eq!(muggy.evaluate(&(22.5, 0.5)), 0.5);
//!
//! let product = OperationSettings::new().with_conjunction(TNorm::Product);
//!
//! assert_eq!(muggy.apply(&(22.5, 0.5), &product), 0.375);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::membership::FuzzySet;
use crate::settings::OperationSettings;
use crate::{clamp_grade, Grade};

pub trait FuzzyProposition {
    /// What the proposition is evaluated against.
    type Input;

    fn apply(&self, input: &Self::Input, settings: &OperationSettings) -> Grade;

    /// Evaluates under the standard operators.
    fn evaluate(&self, input: &Self::Input) -> Grade {
        self.apply(input, &OperationSettings::default())
    }

    fn and<B: FuzzyProposition>(self, rhs: B) -> Conjunction<Self, B>
    where
        Self: Sized,
    {
        Conjunction::new(self, rhs)
    }

    fn or<B: FuzzyProposition>(self, rhs: B) -> Disjunction<Self, B>
    where
        Self: Sized,
    {
        Disjunction::new(self, rhs)
    }

    fn not(self) -> Negation<Self>
    where
        Self: Sized,
    {
        Negation::new(self)
    }

    fn implies<B: FuzzyProposition>(self, rhs: B) -> Implication<Self, B>
    where
        Self: Sized,
    {
        Implication::new(self, rhs)
    }

    fn boxed(self) -> AnyProposition<Self::Input>
    where
        Self: Sized + Send + Sync + 'static,
    {
        AnyProposition(Box::new(self))
    }
}

/// `first AND second` under the settings' t-norm.
#[derive(Clone, Copy, Debug)]
pub struct Conjunction<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Conjunction<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Conjunction { first, second }
    }
}

impl<A: FuzzyProposition, B: FuzzyProposition> FuzzyProposition for Conjunction<A, B> {
    type Input = (A::Input, B::Input);

    fn apply(&self, (first, second): &Self::Input, settings: &OperationSettings) -> Grade {
        settings
            .conjunction
            .call(self.first.apply(first, settings), self.second.apply(second, settings))
    }
}

/// `first OR second` under the settings' s-norm.
#[derive(Clone, Copy, Debug)]
pub struct Disjunction<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Disjunction<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Disjunction { first, second }
    }
}

impl<A: FuzzyProposition, B: FuzzyProposition> FuzzyProposition for Disjunction<A, B> {
    type Input = (A::Input, B::Input);

    fn apply(&self, (first, second): &Self::Input, settings: &OperationSettings) -> Grade {
        settings
            .disjunction
            .call(self.first.apply(first, settings), self.second.apply(second, settings))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Negation<A> {
    pub operand: A,
}

impl<A> Negation<A> {
    pub fn new(operand: A) -> Self {
        Negation { operand }
    }
}

impl<A: FuzzyProposition> FuzzyProposition for Negation<A> {
    type Input = A::Input;

    fn apply(&self, input: &Self::Input, settings: &OperationSettings) -> Grade {
        settings.negation.call(self.operand.apply(input, settings))
    }
}

/// `premise -> consequence` under the settings' implication operator.
#[derive(Clone, Copy, Debug)]
pub struct Implication<A, B> {
    pub premise: A,
    pub consequence: B,
}

impl<A, B> Implication<A, B> {
    pub fn new(premise: A, consequence: B) -> Self {
        Implication { premise, consequence }
    }
}

impl<A: FuzzyProposition, B: FuzzyProposition> FuzzyProposition for Implication<A, B> {
    type Input = (A::Input, B::Input);

    fn apply(&self, (premise, consequence): &Self::Input, settings: &OperationSettings) -> Grade {
        settings.implication.call(
            self.premise.apply(premise, settings),
            self.consequence.apply(consequence, settings),
        )
    }
}

/// A leaf backed by a closure. The closure's result is clamped.
#[derive(Clone, Copy)]
pub struct Predicate<U, P> {
    predicate: P,
    universe: PhantomData<fn(&U)>,
}

impl<U, P> fmt::Debug for Predicate<U, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

pub fn predicate<U, P: Fn(&U) -> Grade>(predicate: P) -> Predicate<U, P> {
    Predicate {
        predicate,
        universe: PhantomData,
    }
}

impl<U, P: Fn(&U) -> Grade> FuzzyProposition for Predicate<U, P> {
    type Input = U;

    fn apply(&self, input: &U, _settings: &OperationSettings) -> Grade {
        clamp_grade((self.predicate)(input))
    }
}

/// The leaf "x is S" for any fuzzy set `S`.
#[derive(Clone, Copy, Debug)]
pub struct Is<S, U> {
    pub set: S,
    universe: PhantomData<fn(&U)>,
}

pub fn is<U, S: FuzzySet<U>>(set: S) -> Is<S, U> {
    Is {
        set,
        universe: PhantomData,
    }
}

impl<U, S: FuzzySet<U>> FuzzyProposition for Is<S, U> {
    type Input = U;

    fn apply(&self, input: &U, _settings: &OperationSettings) -> Grade {
        self.set.grade(input)
    }
}

/// A type-erased proposition, for collections of differently shaped propositions
/// sharing one input type.
pub struct AnyProposition<I>(Box<dyn FuzzyProposition<Input = I> + Send + Sync>);

impl<I> fmt::Debug for AnyProposition<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnyProposition")
    }
}

impl<I> FuzzyProposition for AnyProposition<I> {
    type Input = I;

    fn apply(&self, input: &I, settings: &OperationSettings) -> Grade {
        self.0.apply(input, settings)
    }
}

/// Conjunction of every proposition against the same input. 1 when empty.
pub fn all_of<I>(propositions: &[AnyProposition<I>], input: &I, settings: &OperationSettings) -> Grade {
    propositions
        .iter()
        .fold(1., |grade, proposition| settings.conjunction.call(grade, proposition.apply(input, settings)))
}

/// Disjunction of every proposition against the same input. 0 when empty.
pub fn any_of<I>(propositions: &[AnyProposition<I>], input: &I, settings: &OperationSettings) -> Grade {
    propositions
        .iter()
        .fold(0., |grade, proposition| settings.disjunction.call(grade, proposition.apply(input, settings)))
}
