//! Shared macros for constructing core math primitives.
//!
//! Arguments must be `u64` expressions; anything else is a type error
//! rather than a silent cast. Elements built by [`fe!`] and
//! [`fe_vec!`] are not reduced; [`poly!`] reduces every coefficient into
//! the given field.

/// Simplifies constructing [`FieldElement`](crate::field::FieldElement)s.
///
/// ```
/// use math::prelude::*;
///
/// let a = fe!(42);
/// assert_eq!(a, FieldElement::from(42u64));
/// ```
///
/// Values that are not `u64` are rejected instead of truncated:
///
/// ```compile_fail
/// use math::prelude::*;
///
/// let wide = fe!(1u128 << 64);
/// ```
#[macro_export]
macro_rules! fe {
    ($value:expr) => {
        $crate::field::FieldElement::from({
            let value: u64 = $value;
            value
        })
    };
}

/// Create a [`Vec`] of [`FieldElement`](crate::field::FieldElement)s.
///
/// ```
/// use math::prelude::*;
///
/// let repeated = fe_vec![7; 3];
/// assert_eq!(repeated, vec![fe!(7); 3]);
/// assert_eq!(fe_vec![1, 2], vec![fe!(1), fe!(2)]);
/// ```
#[macro_export]
macro_rules! fe_vec {
    ($b:expr; $n:expr) => {
        vec![$crate::fe!($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$($crate::fe!($b)),*]
    };
}

/// Construct a [`Polynomial`](crate::poly::Polynomial) over a field from
/// coefficients, lowest power first.
///
/// ```
/// use math::prelude::*;
///
/// let field = PrimeField::from_u64(17).unwrap();
/// let p = poly![field; 1, 2, 20];
/// assert_eq!(p.coefficients(), &[fe!(1), fe!(2), fe!(3)]);
/// assert!(poly![field].is_zero());
/// ```
///
/// ```compile_fail
/// use math::prelude::*;
///
/// let field = PrimeField::from_u64(17).unwrap();
/// let p = poly![field; -1];
/// ```
#[macro_export]
macro_rules! poly {
    ($field:expr) => {{
        $crate::poly::Polynomial::zero(::core::clone::Clone::clone(&$field))
    }};
    ($field:expr; $($coeff:expr),+ $(,)?) => {{
        $crate::poly::Polynomial::from_reduced(
            ::core::clone::Clone::clone(&$field),
            [$({
                let coeff: u64 = $coeff;
                coeff
            }),+],
        )
    }};
}
