use std::fmt;

use num_bigint::BigUint;
use thiserror::Error;

pub mod field {
    use num_bigint::BigUint;
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("modulus must be at least 2, got {0}")]
        InvalidModulus(BigUint),
        #[error("non-canonical {value} >= {modulus} == modulus")]
        NotCanonical { value: BigUint, modulus: BigUint },
        #[error("{value} has no inverse modulo {modulus}")]
        NoInverseExists { value: BigUint, modulus: BigUint },
        #[error("invalid decimal integer `{0}`")]
        InvalidDigits(String),
    }
}

pub mod polynomial {
    use num_bigint::BigUint;
    use thiserror::Error;

    use super::Operation;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error(
            "cannot {operation} polynomials over different fields: \
             GF({lhs}) and GF({rhs})"
        )]
        ModulusMismatch {
            operation: Operation,
            lhs: BigUint,
            rhs: BigUint,
        },
        #[error("division by the zero polynomial")]
        DivisionByZeroPolynomial,
        #[error("interpolation needs at least one point")]
        EmptyInterpolationDomain,
        #[error("domain point {0} appears more than once")]
        DuplicateDomainPoint(BigUint),
    }
}

pub use field::Error as FieldError;
pub use polynomial::Error as PolynomialError;

/// Binary polynomial operation, reported in [`PolynomialError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        };
        f.write_str(name)
    }
}

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

pub type Error = MathError;

impl MathError {
    pub(crate) fn modulus_mismatch(
        operation: Operation,
        lhs: &BigUint,
        rhs: &BigUint,
    ) -> Self {
        PolynomialError::ModulusMismatch {
            operation,
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        }
        .into()
    }
}
