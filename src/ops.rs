//! The operator catalog: swappable grade-combination functions.
//!
//! Every family is a small `Copy` enum with a `call` method. The algebraic
//! axioms each family documents (commutativity, monotonicity, boundary
//! conditions, ...) are a contract on the chosen variant and are not checked
//! at runtime; a `Custom` function that breaks them still yields a
//! deterministic grade, just not a meaningful one. Results are clamped to
//! `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::{clamp_grade, Grade};

/// Triangular norm, the fuzzy intersection / logical AND.
///
/// Commutative, associative, monotonic, with identity 1 and absorbing element 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum TNorm {
    /// `min(a, b)`
    #[default]
    Minimum,
    /// `a * b`
    Product,
    /// Łukasiewicz: `max(0, a + b - 1)`
    BoundedProduct,
    /// `b` if `a == 1`, `a` if `b == 1`, otherwise 0
    DrasticProduct,
    /// `ab / (2 - (a + b - ab))`
    EinsteinProduct,
    /// `ab / (a + b - ab)`, 0 when both are 0
    HamacherProduct,
    #[serde(skip)]
    Custom(fn(Grade, Grade) -> Grade),
}

impl TNorm {
    pub fn call(self, a: Grade, b: Grade) -> Grade {
        let grade = match self {
            Self::Minimum => a.min(b),
            Self::Product => a * b,
            Self::BoundedProduct => (a + b - 1.).max(0.),
            Self::DrasticProduct => {
                if a == 1. {
                    b
                } else if b == 1. {
                    a
                } else {
                    0.
                }
            },
            Self::EinsteinProduct => a * b / (2. - (a + b - a * b)),
            Self::HamacherProduct => {
                if a == 0. && b == 0. {
                    0.
                } else {
                    a * b / (a + b - a * b)
                }
            },
            Self::Custom(f) => f(a, b),
        };

        clamp_grade(grade)
    }
}

/// Triangular conorm, the fuzzy union / logical OR.
///
/// Dual of [`TNorm`]: identity 0, absorbing element 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum SNorm {
    /// `max(a, b)`
    #[default]
    Maximum,
    /// `a + b - ab`
    ProbabilisticSum,
    /// `min(1, a + b)`
    BoundedSum,
    /// `b` if `a == 0`, `a` if `b == 0`, otherwise 1
    DrasticSum,
    /// `(a + b) / (1 + ab)`
    EinsteinSum,
    #[serde(skip)]
    Custom(fn(Grade, Grade) -> Grade),
}

impl SNorm {
    pub fn call(self, a: Grade, b: Grade) -> Grade {
        let grade = match self {
            Self::Maximum => a.max(b),
            Self::ProbabilisticSum => a + b - a * b,
            Self::BoundedSum => (a + b).min(1.),
            Self::DrasticSum => {
                if a == 0. {
                    b
                } else if b == 0. {
                    a
                } else {
                    1.
                }
            },
            Self::EinsteinSum => (a + b) / (1. + a * b),
            Self::Custom(f) => f(a, b),
        };

        clamp_grade(grade)
    }
}

/// Fuzzy complement / logical NOT.
///
/// Monotonically decreasing with `c(0) == 1` and `c(1) == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Complement {
    /// `1 - a`
    #[default]
    Standard,
    /// `(1 - a) / (1 + λa)`, requires `λ > -1`
    Sugeno(f64),
    /// `(1 - a^w)^(1/w)`, requires `w > 0`
    Yager(f64),
    #[serde(skip)]
    Custom(fn(Grade) -> Grade),
}

impl Complement {
    pub fn call(self, a: Grade) -> Grade {
        let grade = match self {
            Self::Standard => 1. - a,
            Self::Sugeno(lambda) => (1. - a) / (1. + lambda * a),
            Self::Yager(w) => (1. - a.powf(w)).powf(w.recip()),
            Self::Custom(f) => f(a),
        };

        clamp_grade(grade)
    }

    /// The parameter of a parametric complement, if it is out of its domain.
    pub(crate) fn invalid_parameter(self) -> Option<(&'static str, f64)> {
        match self {
            Self::Sugeno(lambda) if !(lambda > -1.) => Some(("Sugeno complement", lambda)),
            Self::Yager(w) if !(w > 0.) => Some(("Yager complement", w)),
            _ => None,
        }
    }
}

/// Fuzzy set difference `A \ B`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Difference {
    /// `t(a, c(b))`
    TNormAndComplement(TNorm, Complement),
    /// `max(0, a - b)`
    BoundedDifference,
    #[serde(skip)]
    Custom(fn(Grade, Grade) -> Grade),
}

impl Default for Difference {
    fn default() -> Self {
        Self::TNormAndComplement(TNorm::Minimum, Complement::Standard)
    }
}

impl Difference {
    pub fn call(self, a: Grade, b: Grade) -> Grade {
        let grade = match self {
            Self::TNormAndComplement(t_norm, complement) => t_norm.call(a, complement.call(b)),
            Self::BoundedDifference => (a - b).max(0.),
            Self::Custom(f) => f(a, b),
        };

        clamp_grade(grade)
    }
}

/// Fuzzy symmetric difference `A △ B`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum SymmetricDifference {
    /// `|a - b|`
    #[default]
    AbsoluteValue,
    #[serde(skip)]
    Custom(fn(Grade, Grade) -> Grade),
}

impl SymmetricDifference {
    pub fn call(self, a: Grade, b: Grade) -> Grade {
        let grade = match self {
            Self::AbsoluteValue => (a - b).abs(),
            Self::Custom(f) => f(a, b),
        };

        clamp_grade(grade)
    }
}

/// Implication operator method for computing the grade of `premise -> consequence`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ImplicationOp {
    /// Łukasiewicz
    Ra,
    /// Zadeh
    Rm,
    /// Mamdani
    #[default]
    Rc,
    /// Kleene-Dienes
    Rb,
    /// Standard sequence
    Rs,
    /// Gödel
    Rg,
    Rsg,
    Rgs,
    Rgg,
    Rss,
}

impl ImplicationOp {
    pub fn call(self, u: Grade, v: Grade) -> Grade {
        let grade = match self {
            Self::Ra => Grade::min(1., 1. - u + v),
            Self::Rm => Grade::max(Grade::min(u, v), 1. - u),
            Self::Rc => Grade::min(u, v),
            Self::Rb => Grade::max(1. - u, v),
            Self::Rs => {
                if u <= v {
                    1.
                } else {
                    0.
                }
            },
            Self::Rg => {
                if u <= v {
                    1.
                } else {
                    v
                }
            },
            Self::Rsg => Grade::min(Self::Rs.call(u, v), Self::Rg.call(1. - u, 1. - v)),
            Self::Rgs => Grade::min(Self::Rg.call(u, v), Self::Rs.call(1. - u, 1. - v)),
            Self::Rgg => Grade::min(Self::Rg.call(u, v), Self::Rg.call(1. - u, 1. - v)),
            Self::Rss => Grade::min(Self::Rs.call(u, v), Self::Rs.call(1. - u, 1. - v)),
        };

        clamp_grade(grade)
    }
}

#[cfg(test)]
const SAMPLES: [Grade; 5] = [0., 0.25, 0.5, 0.75, 1.];

#[test]
fn test_t_norm_boundaries() {
    let t_norms = [
        TNorm::Minimum,
        TNorm::Product,
        TNorm::BoundedProduct,
        TNorm::DrasticProduct,
        TNorm::EinsteinProduct,
        TNorm::HamacherProduct,
    ];

    for t_norm in t_norms {
        for x in SAMPLES {
            assert_eq!(t_norm.call(1., x), x, "{t_norm:?}(1, {x})");
            assert_eq!(t_norm.call(x, 1.), x, "{t_norm:?}({x}, 1)");
            assert_eq!(t_norm.call(0., x), 0., "{t_norm:?}(0, {x})");
        }
    }
}

#[test]
fn test_s_norm_boundaries() {
    let s_norms = [
        SNorm::Maximum,
        SNorm::ProbabilisticSum,
        SNorm::BoundedSum,
        SNorm::DrasticSum,
        SNorm::EinsteinSum,
    ];

    for s_norm in s_norms {
        for x in SAMPLES {
            assert_eq!(s_norm.call(0., x), x, "{s_norm:?}(0, {x})");
            assert_eq!(s_norm.call(x, 0.), x, "{s_norm:?}({x}, 0)");
            assert_eq!(s_norm.call(1., x), 1., "{s_norm:?}(1, {x})");
        }
    }
}

#[test]
fn test_complement_boundaries_and_monotonicity() {
    for complement in [Complement::Standard, Complement::Sugeno(2.), Complement::Yager(2.)] {
        assert_eq!(complement.call(0.), 1.);
        assert_eq!(complement.call(1.), 0.);

        let grades: Vec<_> = SAMPLES.iter().map(|x| complement.call(*x)).collect();

        assert!(grades.windows(2).all(|w| w[0] >= w[1]), "{complement:?} is not decreasing");
    }

    assert_eq!(Complement::Standard.call(0.25), 0.75);
    assert_eq!(Complement::Sugeno(1.).call(0.5), 1. / 3.);
    assert_eq!(Complement::Custom(|a| 1. - a * a).call(0.5), 0.75);
}

#[test]
fn test_difference() {
    assert_eq!(Difference::default().call(0.75, 0.5), 0.5);
    assert_eq!(Difference::default().call(0.25, 0.5), 0.25);
    assert_eq!(Difference::BoundedDifference.call(0.75, 0.5), 0.25);
    assert_eq!(Difference::BoundedDifference.call(0.25, 0.5), 0.);
    assert_eq!(
        Difference::TNormAndComplement(TNorm::Product, Complement::Standard).call(0.5, 0.5),
        0.25
    );
}

#[test]
fn test_symmetric_difference() {
    assert_eq!(SymmetricDifference::AbsoluteValue.call(0.25, 0.75), 0.5);
    assert_eq!(SymmetricDifference::AbsoluteValue.call(0.75, 0.25), 0.5);
    assert_eq!(SymmetricDifference::Custom(|a, b| a.max(b)).call(0.75, 0.25), 0.75);
}

#[test]
fn test_implication() {
    assert_eq!(ImplicationOp::Ra.call(0.75, 0.25), 0.5);
    assert_eq!(ImplicationOp::Rm.call(0.75, 0.25), 0.25);
    assert_eq!(ImplicationOp::Rc.call(0.75, 0.25), 0.25);
    assert_eq!(ImplicationOp::Rb.call(0.75, 0.25), 0.25);
    assert_eq!(ImplicationOp::Rs.call(0.25, 0.75), 1.);
    assert_eq!(ImplicationOp::Rg.call(0.75, 0.25), 0.25);
    assert_eq!(ImplicationOp::Rgg.call(0.25, 0.75), 0.25);
    assert_eq!(ImplicationOp::Rss.call(0.25, 0.75), 0.);
}

#[test]
fn test_custom_results_are_clamped() {
    assert_eq!(TNorm::Custom(|a, b| a + b).call(0.75, 0.75), 1.);
    assert_eq!(SNorm::Custom(|a, b| a - b).call(0.25, 0.75), 0.);
}
