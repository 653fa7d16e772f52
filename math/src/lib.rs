pub mod constants;
pub mod error;
pub mod field;
pub mod macros;
pub mod poly;
pub mod prelude;
pub mod zerofier_tree;

pub use error::{MathError, Result};
pub use field::{FieldElement, PrimeField};
pub use poly::Polynomial;
