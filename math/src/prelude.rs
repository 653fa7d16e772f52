pub use crate::{fe, fe_vec, poly};
pub use crate::{
    error::{FieldError, MathError, Operation, PolynomialError},
    field::{FieldElement, PrimeField},
    poly::Polynomial,
    zerofier_tree::ZerofierTree,
};
