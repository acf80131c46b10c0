use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyError {
    /// A triangular fuzzy number needs `minimum <= peak <= maximum`.
    #[error("invalid fuzzy number bounds: expected minimum <= peak <= maximum, got ({minimum}, {peak}, {maximum})")]
    InvalidFuzzyNumberBounds { minimum: f64, peak: f64, maximum: f64 },
    #[error("invalid parameter {value} for {operator}")]
    InvalidOperatorParameter { operator: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
