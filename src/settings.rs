use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FuzzyError, Result};
use crate::ops::{Complement, Difference, ImplicationOp, SNorm, SymmetricDifference, TNorm};

/// Which catalog operator to use for each logical connective.
///
/// Passed explicitly to every evaluation. The default is the standard
/// catalog: minimum, maximum, `1 - x`, minimum-and-complement difference,
/// `|a - b|` symmetric difference and Mamdani implication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationSettings {
    pub conjunction: TNorm,
    pub disjunction: SNorm,
    pub negation: Complement,
    pub difference: Difference,
    pub symmetric_difference: SymmetricDifference,
    pub implication: ImplicationOp,
}

impl OperationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conjunction(mut self, conjunction: TNorm) -> Self {
        self.conjunction = conjunction;
        self
    }

    pub fn with_disjunction(mut self, disjunction: SNorm) -> Self {
        self.disjunction = disjunction;
        self
    }

    pub fn with_negation(mut self, negation: Complement) -> Self {
        self.negation = negation;
        self
    }

    pub fn with_difference(mut self, difference: Difference) -> Self {
        self.difference = difference;
        self
    }

    pub fn with_symmetric_difference(mut self, symmetric_difference: SymmetricDifference) -> Self {
        self.symmetric_difference = symmetric_difference;
        self
    }

    pub fn with_implication(mut self, implication: ImplicationOp) -> Self {
        self.implication = implication;
        self
    }

    /// Rejects parametric operators whose parameter is outside its domain.
    ///
    /// Axioms of `Custom` operators are not checked.
    pub fn validate(&self) -> Result<()> {
        let mut complements = vec![self.negation];

        if let Difference::TNormAndComplement(_, complement) = self.difference {
            complements.push(complement);
        }

        for complement in complements {
            if let Some((operator, value)) = complement.invalid_parameter() {
                debug!(operator, value, "rejecting operation settings");
                return Err(FuzzyError::InvalidOperatorParameter { operator, value });
            }
        }

        Ok(())
    }
}

#[test]
fn test_builder() {
    let settings = OperationSettings::new()
        .with_conjunction(TNorm::Product)
        .with_disjunction(SNorm::ProbabilisticSum)
        .with_implication(ImplicationOp::Ra);

    assert_eq!(settings.conjunction, TNorm::Product);
    assert_eq!(settings.disjunction, SNorm::ProbabilisticSum);
    assert_eq!(settings.negation, Complement::Standard);
    assert_eq!(settings.implication, ImplicationOp::Ra);
}

#[test]
fn test_validate() {
    assert!(OperationSettings::default().validate().is_ok());
    assert!(OperationSettings::new().with_negation(Complement::Sugeno(0.5)).validate().is_ok());
    assert_eq!(
        OperationSettings::new().with_negation(Complement::Yager(0.)).validate(),
        Err(FuzzyError::InvalidOperatorParameter {
            operator: "Yager complement",
            value: 0.
        })
    );
    assert_eq!(
        OperationSettings::new()
            .with_difference(Difference::TNormAndComplement(TNorm::Minimum, Complement::Sugeno(-2.)))
            .validate(),
        Err(FuzzyError::InvalidOperatorParameter {
            operator: "Sugeno complement",
            value: -2.
        })
    );
}
