//! Univariate polynomials over a prime field GF(p).
//!
//! Coefficients are stored lowest power first: `coefficients[i]` belongs to
//! `x^i`. Every operation below (arithmetic, degree, evaluation, division,
//! display and the byte codec built on top of this type) follows that
//! convention.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use num_bigint::BigUint;
use rand::RngCore;
use serde::Deserialize;
use serde::Serialize;

use crate::error::FieldError;
use crate::error::MathError;
use crate::error::Operation;
use crate::error::PolynomialError;
use crate::error::Result;
use crate::field::FieldElement;
use crate::field::PrimeField;
use crate::zerofier_tree::ZerofierTree;

/// A polynomial over GF(p) together with its field.
///
/// All stored coefficients are canonical, i.e. lie in `[0, p)`. Zero
/// coefficients above the degree are allowed and preserved by
/// [`coefficients`](Self::coefficients); they are ignored by equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "PolynomialRepr", try_from = "PolynomialRepr")]
pub struct Polynomial {
    field: PrimeField,
    coefficients: Vec<FieldElement>,
}

#[derive(Serialize, Deserialize)]
struct PolynomialRepr {
    modulus: FieldElement,
    coefficients: Vec<FieldElement>,
}

impl From<Polynomial> for PolynomialRepr {
    fn from(poly: Polynomial) -> Self {
        Self {
            modulus: FieldElement::from(poly.field.modulus().clone()),
            coefficients: poly.coefficients,
        }
    }
}

impl TryFrom<PolynomialRepr> for Polynomial {
    type Error = MathError;

    fn try_from(repr: PolynomialRepr) -> Result<Self> {
        let field = PrimeField::new(repr.modulus.into_value())?;
        Polynomial::new(field, repr.coefficients)
    }
}

impl Polynomial {
    /// Build a polynomial from canonical coefficients, lowest power first.
    pub fn new(
        field: PrimeField,
        coefficients: Vec<FieldElement>,
    ) -> Result<Self> {
        if let Some(bad) = coefficients
            .iter()
            .find(|coeff| !field.is_canonical(coeff.value()))
        {
            return Err(FieldError::NotCanonical {
                value: bad.value().clone(),
                modulus: field.modulus().clone(),
            }
            .into());
        }
        Ok(Self::from_canonical(field, coefficients))
    }

    /// Like [`new`](Self::new), starting from plain integers.
    pub fn try_from_integers<I, T>(field: PrimeField, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<BigUint>,
    {
        let coefficients = values
            .into_iter()
            .map(|value| field.try_element(value))
            .collect::<Result<Vec<_>, FieldError>>()?;
        Ok(Self::from_canonical(field, coefficients))
    }

    /// Build a polynomial from arbitrary integers, reducing each modulo p.
    pub fn from_reduced<I, T>(field: PrimeField, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigUint>,
    {
        let coefficients =
            values.into_iter().map(|value| field.element(value)).collect();
        Self::from_canonical(field, coefficients)
    }

    pub(crate) fn from_canonical(
        field: PrimeField,
        coefficients: Vec<FieldElement>,
    ) -> Self {
        Self {
            field,
            coefficients,
        }
    }

    /// The zero polynomial: no coefficients at all.
    pub fn zero(field: PrimeField) -> Self {
        Self::from_canonical(field, Vec::new())
    }

    pub fn one(field: PrimeField) -> Self {
        let one = field.one();
        Self::from_canonical(field, vec![one])
    }

    pub fn from_constant(field: PrimeField, constant: &FieldElement) -> Self {
        let constant = field.element(constant.value().clone());
        Self::from_canonical(field, vec![constant])
    }

    /// `len` uniformly random coefficients.
    pub fn random<R>(field: PrimeField, len: usize, rng: &mut R) -> Self
    where
        R: RngCore + ?Sized,
    {
        let coefficients =
            (0..len).map(|_| field.random_element(rng)).collect();
        Self::from_canonical(field, coefficients)
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    #[inline]
    pub fn prime(&self) -> &BigUint {
        self.field.modulus()
    }

    /// The stored coefficients, lowest power first, including any zero
    /// coefficients above the degree.
    #[inline]
    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<FieldElement> {
        self.coefficients
    }

    /// Number of stored coefficients. Not the degree.
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether no coefficients are stored. See also [`is_zero`](Self::is_zero).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Highest power with a non-zero coefficient; `-1` for the zero
    /// polynomial.
    pub fn degree(&self) -> isize {
        self.coefficients
            .iter()
            .rposition(|coeff| !coeff.is_zero())
            .map_or(-1, |index| index as isize)
    }

    pub fn is_zero(&self) -> bool {
        self.degree() == -1
    }

    /// `None` if (and only if) `self` [is zero](Self::is_zero). Never
    /// `Some(0)`.
    pub fn leading_coefficient(&self) -> Option<&FieldElement> {
        let degree = usize::try_from(self.degree()).ok()?;
        self.coefficients.get(degree)
    }

    /// Drop zero coefficients above the degree.
    pub fn normalize(&mut self) {
        let significant = self.significant().len();
        self.coefficients.truncate(significant);
    }

    #[must_use]
    fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    fn significant(&self) -> &[FieldElement] {
        match usize::try_from(self.degree()) {
            Ok(degree) => &self.coefficients[..=degree],
            Err(_) => &[],
        }
    }

    fn ensure_same_field(&self, other: &Self, operation: Operation) -> Result<()> {
        if self.field == other.field {
            Ok(())
        } else {
            Err(MathError::modulus_mismatch(
                operation,
                self.prime(),
                other.prime(),
            ))
        }
    }

    fn zip_longest_with<F>(&self, other: &Self, combine: F) -> Self
    where
        F: Fn(&FieldElement, &FieldElement) -> FieldElement,
    {
        let zero = self.field.zero();
        let len = self.len().max(other.len());
        let coefficients = (0..len)
            .map(|i| {
                let lhs = self.coefficients.get(i).unwrap_or(&zero);
                let rhs = other.coefficients.get(i).unwrap_or(&zero);
                combine(lhs, rhs)
            })
            .collect();
        Self::from_canonical(self.field.clone(), coefficients)
    }

    /// Coefficient-wise sum. The result has `max(len(self), len(other))`
    /// coefficients.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, Operation::Add)?;
        let field = &self.field;
        Ok(self.zip_longest_with(other, |a, b| field.add(a, b)))
    }

    /// Coefficient-wise `(a - b + p) mod p`, aligned like [`add`](Self::add).
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, Operation::Subtract)?;
        let field = &self.field;
        Ok(self.zip_longest_with(other, |a, b| field.sub(a, b)))
    }

    /// Product in GF(p)[x]. The result has `degree(self) + degree(other) + 1`
    /// coefficients, or none if either factor is zero.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, Operation::Multiply)?;
        Ok(self.naive_multiply(other))
    }

    /// Schoolbook convolution; callers have checked that the fields agree.
    pub(crate) fn naive_multiply(&self, other: &Self) -> Self {
        let field = &self.field;
        let (Ok(degree_lhs), Ok(degree_rhs)) =
            (usize::try_from(self.degree()), usize::try_from(other.degree()))
        else {
            return Self::zero(field.clone());
        };

        let mut product = vec![BigUint::default(); degree_lhs + degree_rhs + 1];
        for (i, lhs) in self.coefficients[..=degree_lhs].iter().enumerate() {
            if lhs.is_zero() {
                continue;
            }
            for (j, rhs) in
                other.coefficients[..=degree_rhs].iter().enumerate()
            {
                product[i + j] += lhs.value() * rhs.value();
            }
        }

        let coefficients =
            product.into_iter().map(|sum| field.element(sum)).collect();
        Self::from_canonical(field.clone(), coefficients)
    }

    #[must_use]
    pub fn scalar_mul(&self, scalar: &FieldElement) -> Self {
        let field = &self.field;
        let coefficients = self
            .coefficients
            .iter()
            .map(|coeff| field.mul(coeff, scalar))
            .collect();
        Self::from_canonical(field.clone(), coefficients)
    }

    /// Value at `x`, by Horner's rule. The zero polynomial evaluates to 0.
    pub fn evaluate(&self, x: &FieldElement) -> FieldElement {
        let field = &self.field;
        self.coefficients
            .iter()
            .rev()
            .fold(field.zero(), |acc, coeff| {
                field.add(&field.mul(&acc, x), coeff)
            })
    }

    /// Long division: returns `(quotient, remainder)` with
    /// `self = quotient · divisor + remainder` and
    /// `degree(remainder) < degree(divisor)`.
    ///
    /// The inverse of the divisor's leading coefficient is computed once.
    /// Both results are normalized.
    ///
    /// # Errors
    ///
    /// - [`PolynomialError::ModulusMismatch`] if the fields differ.
    /// - [`PolynomialError::DivisionByZeroPolynomial`] if `divisor` is zero.
    /// - [`FieldError::NoInverseExists`] if the divisor's leading coefficient
    ///   is not a unit, which only happens for a composite modulus.
    pub fn divide(&self, divisor: &Self) -> Result<(Self, Self)> {
        self.ensure_same_field(divisor, Operation::Divide)?;
        let field = &self.field;

        let Ok(divisor_degree) = usize::try_from(divisor.degree()) else {
            return Err(PolynomialError::DivisionByZeroPolynomial.into());
        };
        let Some(quotient_degree) = usize::try_from(self.degree())
            .ok()
            .and_then(|degree| degree.checked_sub(divisor_degree))
        else {
            return Ok((Self::zero(field.clone()), self.clone().normalized()));
        };

        let divisor = divisor.significant();
        let leading_inverse = field.inverse(&divisor[divisor_degree])?;

        // Private working copy. Its last entry is always the current leading
        // term; every step removes exactly one entry.
        let mut remainder = self.significant().to_vec();
        let mut quotient = vec![field.zero(); quotient_degree + 1];

        for shift in (0..=quotient_degree).rev() {
            let leading_index = shift + divisor_degree;
            let factor = field.mul(&remainder[leading_index], &leading_inverse);
            remainder.truncate(leading_index);

            if !factor.is_zero() {
                // divisor's leading term cancels the dropped entry
                for (i, coeff) in divisor[..divisor_degree].iter().enumerate() {
                    let slot = &mut remainder[shift + i];
                    *slot = field.sub(slot, &field.mul(&factor, coeff));
                }
            }
            quotient[shift] = factor;
        }

        Ok((
            Self::from_canonical(field.clone(), quotient).normalized(),
            Self::from_canonical(field.clone(), remainder).normalized(),
        ))
    }

    /// The monic polynomial of degree `roots.len()` that vanishes exactly on
    /// `roots`.
    pub fn zerofier(field: &PrimeField, roots: &[FieldElement]) -> Self {
        let mut coefficients = vec![field.one()];
        for root in roots {
            // multiply by (x - root)
            let root = field.element(root.value().clone());
            let mut next = vec![field.zero(); coefficients.len() + 1];
            for (i, coeff) in coefficients.iter().enumerate() {
                next[i + 1] = field.add(&next[i + 1], coeff);
                next[i] = field.sub(&next[i], &field.mul(coeff, &root));
            }
            coefficients = next;
        }
        Self::from_canonical(field.clone(), coefficients)
    }

    /// The unique polynomial of degree less than `points.len()` passing
    /// through every `(x, y)` in `points`.
    ///
    /// Each Lagrange basis numerator is obtained by exact division of the
    /// domain's zerofier by `x - x_i`.
    pub fn interpolate(
        field: &PrimeField,
        points: &[(FieldElement, FieldElement)],
    ) -> Result<Self> {
        if points.is_empty() {
            return Err(PolynomialError::EmptyInterpolationDomain.into());
        }

        let domain: Vec<FieldElement> = points
            .iter()
            .map(|(x, _)| field.element(x.value().clone()))
            .collect();
        let mut seen = HashSet::with_capacity(domain.len());
        if let Some(duplicate) = domain.iter().find(|x| !seen.insert(*x)) {
            return Err(PolynomialError::DuplicateDomainPoint(
                duplicate.value().clone(),
            )
            .into());
        }

        let zerofier = ZerofierTree::new_from_domain(field, &domain).zerofier();
        let mut interpolant = Self::zero(field.clone());
        for (x, (_, y)) in domain.iter().zip(points) {
            let linear = Self::from_canonical(
                field.clone(),
                vec![field.neg(x), field.one()],
            );
            let (numerator, _) = zerofier.divide(&linear)?;
            let denominator = field.inverse(&numerator.evaluate(x))?;
            let weight = field.mul(&field.element(y.value().clone()), &denominator);
            interpolant = interpolant.add(&numerator.scalar_mul(&weight))?;
        }

        Ok(interpolant.normalized())
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.significant() == other.significant()
    }
}

impl Eq for Polynomial {}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.significant().hash(state);
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(degree) = usize::try_from(self.degree()) else {
            return write!(f, "0");
        };

        for pow in (0..=degree).rev() {
            let coeff = &self.coefficients[pow];
            if coeff.is_zero() {
                continue;
            }

            if pow != degree {
                write!(f, " + ")?;
            }
            if !coeff.is_one() || pow == 0 {
                write!(f, "{coeff}")?;
            }
            match pow {
                0 => (),
                1 => write!(f, "x")?,
                _ => write!(f, "x^{pow}")?,
            }
        }

        Ok(())
    }
}

impl Add for &Polynomial {
    type Output = Result<Polynomial>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Result<Polynomial>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Result<Polynomial>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        let field = &self.field;
        let coefficients =
            self.coefficients.iter().map(|coeff| field.neg(coeff)).collect();
        Polynomial::from_canonical(field.clone(), coefficients)
    }
}

#[cfg(test)]
mod test_polynomials {
    use num_bigint::BigUint;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use rand::Rng;
    use test_strategy::proptest;

    use super::*;
    use crate::constants::MERSENNE_61;

    const P: u64 = 8380417;

    fn field() -> PrimeField {
        PrimeField::from_u64(P).unwrap()
    }

    fn poly(coefficients: &[u64]) -> Polynomial {
        Polynomial::from_reduced(field(), coefficients.iter().copied())
    }

    fn is_closed(poly: &Polynomial) -> bool {
        poly.coefficients()
            .iter()
            .all(|coeff| poly.field().is_canonical(coeff.value()))
    }

    #[proptest]
    fn arithmetic_results_stay_in_the_field(
        #[strategy(vec(0..P, 0..12))] a: Vec<u64>,
        #[strategy(vec(0..P, 0..12))] b: Vec<u64>,
    ) {
        let (a, b) = (poly(&a), poly(&b));
        prop_assert!(is_closed(&a.add(&b)?));
        prop_assert!(is_closed(&a.subtract(&b)?));
        prop_assert!(is_closed(&a.multiply(&b)?));
    }

    #[proptest]
    fn subtraction_undoes_addition(
        #[strategy(vec(0..P, 0..12))] a: Vec<u64>,
        #[strategy(vec(0..P, 0..12))] b: Vec<u64>,
    ) {
        let (a, b) = (poly(&a), poly(&b));
        prop_assert_eq!(a.add(&b)?.subtract(&b)?, a);
    }

    #[proptest]
    fn sum_has_length_of_longer_operand(
        #[strategy(vec(0..P, 0..12))] a: Vec<u64>,
        #[strategy(vec(0..P, 0..12))] b: Vec<u64>,
    ) {
        let sum = poly(&a).add(&poly(&b))?;
        prop_assert_eq!(sum.len(), a.len().max(b.len()));
    }

    #[proptest]
    fn multiplication_is_commutative(
        #[strategy(vec(0..P, 0..10))] a: Vec<u64>,
        #[strategy(vec(0..P, 0..10))] b: Vec<u64>,
    ) {
        let (a, b) = (poly(&a), poly(&b));
        prop_assert_eq!(a.multiply(&b)?, b.multiply(&a)?);
    }

    #[proptest]
    fn multiplication_distributes_over_addition(
        #[strategy(vec(0..P, 0..8))] a: Vec<u64>,
        #[strategy(vec(0..P, 0..8))] b: Vec<u64>,
        #[strategy(vec(0..P, 0..8))] c: Vec<u64>,
    ) {
        let (a, b, c) = (poly(&a), poly(&b), poly(&c));
        prop_assert_eq!(
            a.multiply(&b.add(&c)?)?,
            a.multiply(&b)?.add(&a.multiply(&c)?)?
        );
    }

    #[proptest]
    fn product_degree_is_sum_of_degrees(
        #[strategy(vec(1..P, 1..10))] a: Vec<u64>,
        #[strategy(vec(1..P, 1..10))] b: Vec<u64>,
    ) {
        let (a, b) = (poly(&a), poly(&b));
        let product = a.multiply(&b)?;
        prop_assert_eq!(product.degree(), a.degree() + b.degree());
        prop_assert_eq!(product.len() as isize, product.degree() + 1);
    }

    #[proptest]
    fn division_reconstructs_dividend(
        #[strategy(vec(0..P, 0..16))] m: Vec<u64>,
        #[strategy(vec(0..P, 1..8))]
        #[filter(#p.iter().any(|&c| c != 0))]
        p: Vec<u64>,
    ) {
        let (m, p) = (poly(&m), poly(&p));
        let (quotient, remainder) = m.divide(&p)?;
        prop_assert!(remainder.degree() < p.degree());
        prop_assert_eq!(quotient.multiply(&p)?.add(&remainder)?, m);
    }

    #[proptest]
    fn division_by_exact_factor_leaves_no_remainder(
        #[strategy(vec(0..P, 1..8))] a: Vec<u64>,
        #[strategy(vec(0..P, 1..8))]
        #[filter(#b.iter().any(|&c| c != 0))]
        b: Vec<u64>,
    ) {
        let (a, b) = (poly(&a), poly(&b));
        let (quotient, remainder) = a.multiply(&b)?.divide(&b)?;
        prop_assert_eq!(quotient, a);
        prop_assert!(remainder.is_zero());
    }

    #[proptest]
    fn division_by_zero_polynomial_fails(
        #[strategy(vec(0..P, 0..10))] m: Vec<u64>,
        #[strategy(0usize..5)] zeros: usize,
    ) {
        let divisor = poly(&vec![0; zeros]);
        prop_assert_eq!(
            poly(&m).divide(&divisor),
            Err(PolynomialError::DivisionByZeroPolynomial.into())
        );
    }

    #[test]
    fn division_over_wide_field_reconstructs_dividend() {
        let f = PrimeField::curve25519();
        let mut rng = rand::rng();
        let m = Polynomial::random(f.clone(), 24, &mut rng);
        let mut p = Polynomial::random(f.clone(), 6, &mut rng);
        if p.is_zero() {
            p = Polynomial::one(f);
        }
        let (quotient, remainder) = m.divide(&p).unwrap();
        assert!(remainder.degree() < p.degree());
        assert_eq!(quotient.multiply(&p).unwrap().add(&remainder).unwrap(), m);
    }

    #[test]
    fn x_squared_minus_one_divided_by_x_minus_one() {
        // (x^2 - 1) / (x - 1) = x + 1
        let m = poly(&[P - 1, 0, 1]);
        let p = poly(&[P - 1, 1]);
        let (quotient, remainder) = m.divide(&p).unwrap();
        assert_eq!(quotient, poly(&[1, 1]));
        assert!(remainder.is_zero());
        assert!(remainder.is_empty());
    }

    #[test]
    fn division_with_remainder() {
        // x^3 + 2x + 5 = (x^2 - x + 3)(x + 1) + 2
        let m = poly(&[5, 2, 0, 1]);
        let p = poly(&[1, 1]);
        let (quotient, remainder) = m.divide(&p).unwrap();
        assert_eq!(quotient, poly(&[3, P - 1, 1]));
        assert_eq!(remainder, poly(&[2]));
        assert_eq!(remainder.coefficients(), &[field().element(2u8)]);
    }

    #[test]
    fn dividing_by_higher_degree_returns_dividend_as_remainder() {
        let m = poly(&[4, 2, 0, 0]);
        let p = poly(&[1, 0, 3]);
        let (quotient, remainder) = m.divide(&p).unwrap();
        assert!(quotient.is_zero());
        assert_eq!(remainder, m);
        assert_eq!(remainder.len(), 2);
    }

    #[test]
    fn dividing_zero_gives_zero_quotient_and_remainder() {
        let (quotient, remainder) = poly(&[]).divide(&poly(&[3, 1])).unwrap();
        assert!(quotient.is_zero());
        assert!(remainder.is_zero());
    }

    #[test]
    fn division_by_constant_scales_by_inverse() {
        let m = poly(&[2, 4, 6]);
        let (quotient, remainder) = m.divide(&poly(&[2])).unwrap();
        assert_eq!(quotient, poly(&[1, 2, 3]));
        assert!(remainder.is_zero());
    }

    #[test]
    fn leading_zeros_dont_affect_division() {
        let m = poly(&[5, 2, 0, 1]);
        let padded = poly(&[1, 1, 0, 0, 0]);
        assert_eq!(m.divide(&padded).unwrap(), m.divide(&poly(&[1, 1])).unwrap());
    }

    #[test]
    fn division_leaves_operands_untouched() {
        let m = poly(&[5, 2, 0, 1, 0]);
        let p = poly(&[1, 1]);
        let (m_before, p_before) = (m.clone(), p.clone());
        m.divide(&p).unwrap();
        assert_eq!(m.coefficients(), m_before.coefficients());
        assert_eq!(p.coefficients(), p_before.coefficients());
    }

    #[test]
    fn composite_modulus_without_inverse_is_reported() {
        let f = PrimeField::from_u64(15).unwrap();
        let m = Polynomial::from_reduced(f.clone(), [1u8, 2, 3]);
        let p = Polynomial::from_reduced(f, [1u8, 3]);
        assert_eq!(
            m.divide(&p),
            Err(FieldError::NoInverseExists {
                value: BigUint::from(3u8),
                modulus: BigUint::from(15u8),
            }
            .into())
        );
    }

    #[test]
    fn mismatched_moduli_are_rejected_by_every_binary_operation() {
        let a = poly(&[1, 2]);
        let b = Polynomial::from_reduced(PrimeField::mersenne_61(), [1u8, 2]);
        let mismatch = |operation| {
            Err::<Polynomial, _>(MathError::modulus_mismatch(
                operation,
                &BigUint::from(P),
                &BigUint::from(MERSENNE_61),
            ))
        };
        assert_eq!(a.add(&b), mismatch(Operation::Add));
        assert_eq!(a.subtract(&b), mismatch(Operation::Subtract));
        assert_eq!(a.multiply(&b), mismatch(Operation::Multiply));
        assert_eq!(
            a.divide(&b).map(|(q, _)| q),
            mismatch(Operation::Divide)
        );
    }

    #[test]
    fn construction_macros_agree_with_constructors() {
        let f = field();
        assert_eq!(crate::poly![f; 5, 2, 0, 1], poly(&[5, 2, 0, 1]));
        assert_eq!(
            crate::poly![f; P + 1, P + 2].coefficients(),
            crate::fe_vec![1, 2].as_slice()
        );
        assert_eq!(crate::poly![f; 0, 0].coefficients(), crate::fe_vec![0; 2]);
        assert!(crate::poly![f].is_empty());
        assert_eq!(crate::fe!(P - 1), f.element(P - 1));
    }

    #[test]
    fn degree_boundaries() {
        assert_eq!(poly(&[]).degree(), -1);
        assert_eq!(poly(&[0, 0, 0]).degree(), -1);
        assert_eq!(poly(&[7]).degree(), 0);
        assert_eq!(poly(&[7, 0, 0]).degree(), 0);
        assert_eq!(poly(&[0, 0, 1]).degree(), 2);
    }

    #[test]
    fn leading_coefficient_of_zero_polynomial_is_none() {
        assert_eq!(poly(&[0, 0]).leading_coefficient(), None);
        assert_eq!(
            poly(&[3, 9, 0]).leading_coefficient(),
            Some(&field().element(9u8))
        );
    }

    #[test]
    fn spurious_high_zeros_dont_affect_equality() {
        assert_eq!(poly(&[1, 2]), poly(&[1, 2, 0, 0]));
        assert_eq!(poly(&[]), poly(&[0]));
        assert_ne!(poly(&[1, 2]), poly(&[2, 1]));
        let mut padded = poly(&[1, 2, 0, 0]);
        padded.normalize();
        assert_eq!(padded.len(), 2);
    }

    #[test]
    fn same_coefficients_over_different_fields_are_not_equal() {
        let other = Polynomial::from_reduced(PrimeField::mersenne_61(), [1u8]);
        assert_ne!(poly(&[1]), other);
    }

    #[test]
    fn multiplication_by_zero_is_zero() {
        let product = poly(&[1, 2, 3]).multiply(&poly(&[0, 0])).unwrap();
        assert!(product.is_zero());
        assert!(product.is_empty());
    }

    #[test]
    fn multiplication_follows_lowest_first_ordering() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        let product = poly(&[1, 2]).multiply(&poly(&[3, 4])).unwrap();
        assert_eq!(product, poly(&[3, 10, 8]));
    }

    #[test]
    fn subtraction_wraps_around_the_modulus() {
        let diff = poly(&[1]).subtract(&poly(&[2, 5])).unwrap();
        assert_eq!(diff, poly(&[P - 1, P - 5]));
    }

    #[test]
    fn operators_agree_with_named_methods() {
        let (a, b) = (poly(&[1, 2, 3]), poly(&[4, 5]));
        assert_eq!((&a + &b).unwrap(), a.add(&b).unwrap());
        assert_eq!((&a - &b).unwrap(), a.subtract(&b).unwrap());
        assert_eq!((&a * &b).unwrap(), a.multiply(&b).unwrap());
        assert!((&a + &-&a).unwrap().is_zero());
    }

    #[test]
    fn evaluate_edge_cases() {
        let f = field();
        let zero = f.zero();
        assert_eq!(poly(&[]).evaluate(&f.element(5u8)), zero);
        assert_eq!(poly(&[9]).evaluate(&f.element(5u8)), f.element(9u8));
        assert_eq!(poly(&[9, 4, 1]).evaluate(&zero), f.element(9u8));
        // 9 + 4·2 + 2^2
        assert_eq!(poly(&[9, 4, 1]).evaluate(&f.element(2u8)), f.element(21u8));
    }

    #[test]
    fn evaluate_matches_independent_power_sum() {
        let mut rng = rand::rng();
        let fields = [
            field(),
            PrimeField::mersenne_61(),
            PrimeField::curve25519(),
        ];
        let f = fields[rng.random_range(0..fields.len())].clone();
        let len = rng.random_range(0..20);
        let a = Polynomial::random(f.clone(), len, &mut rng);
        let x = f.random_element(&mut rng);

        let expected = a
            .coefficients()
            .iter()
            .enumerate()
            .map(|(power, coeff)| {
                coeff.value() * x.value().modpow(&BigUint::from(power), f.modulus())
            })
            .fold(BigUint::default(), |acc, term| (acc + term) % f.modulus());
        assert_eq!(a.evaluate(&x).value(), &expected);
    }

    #[test]
    fn constructors_enforce_canonical_coefficients() {
        let f = field();
        assert!(Polynomial::try_from_integers(f.clone(), [1u64, P - 1]).is_ok());
        assert_eq!(
            Polynomial::try_from_integers(f.clone(), [1u64, P]),
            Err(FieldError::NotCanonical {
                value: BigUint::from(P),
                modulus: BigUint::from(P),
            }
            .into())
        );
        assert!(Polynomial::new(f.clone(), vec![FieldElement::from(P)]).is_err());
        assert_eq!(
            Polynomial::from_reduced(f, [P + 3]).coefficients(),
            &[field().element(3u8)]
        );
    }

    #[test]
    fn polynomial_display_test() {
        assert_eq!(poly(&[]).to_string(), "0");
        assert_eq!(poly(&[0, 0]).to_string(), "0");
        assert_eq!(poly(&[5]).to_string(), "5");
        assert_eq!(poly(&[1, 1]).to_string(), "x + 1");
        assert_eq!(poly(&[5, 1, 3]).to_string(), "3x^2 + x + 5");
        assert_eq!(poly(&[0, 0, 1, 0]).to_string(), "x^2");
        assert_eq!(poly(&[1, 0, 2]).to_string(), "2x^2 + 1");
    }

    #[test]
    fn zerofier_vanishes_on_its_roots_only() {
        let f = field();
        let roots: Vec<_> = [3u8, 7, 11].into_iter().map(|r| f.element(r)).collect();
        let zerofier = Polynomial::zerofier(&f, &roots);
        assert_eq!(zerofier.degree(), 3);
        assert_eq!(zerofier.leading_coefficient(), Some(&f.one()));
        for root in &roots {
            assert!(zerofier.evaluate(root).is_zero());
        }
        assert!(!zerofier.evaluate(&f.element(4u8)).is_zero());
    }

    #[test]
    fn interpolation_recovers_random_polynomial() {
        let f = PrimeField::curve25519();
        let mut rng = rand::rng();
        let secret = Polynomial::random(f.clone(), 5, &mut rng);
        let points: Vec<_> = (1u8..=5)
            .map(|x| {
                let x = f.element(x);
                let y = secret.evaluate(&x);
                (x, y)
            })
            .collect();
        let interpolant = Polynomial::interpolate(&f, &points).unwrap();
        assert_eq!(interpolant, secret);
        assert_eq!(interpolant.evaluate(&f.zero()), secret.evaluate(&f.zero()));
    }

    #[test]
    fn interpolating_single_point_gives_constant() {
        let f = field();
        let points = [(f.element(4u8), f.element(9u8))];
        assert_eq!(Polynomial::interpolate(&f, &points).unwrap(), poly(&[9]));
    }

    #[test]
    fn interpolation_rejects_degenerate_domains() {
        let f = field();
        assert_eq!(
            Polynomial::interpolate(&f, &[]),
            Err(PolynomialError::EmptyInterpolationDomain.into())
        );
        let points = [
            (f.element(2u8), f.element(1u8)),
            (f.element(P + 2), f.element(5u8)),
        ];
        assert_eq!(
            Polynomial::interpolate(&f, &points),
            Err(PolynomialError::DuplicateDomainPoint(BigUint::from(2u8)).into())
        );
    }

    #[test]
    fn serde_round_trip_preserves_stored_coefficients() {
        let original = poly(&[1, 2, 0, 0]);
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(
            json,
            r#"{"modulus":"8380417","coefficients":["1","2","0","0"]}"#
        );
        let back: Polynomial = serde_json::from_str(&json).unwrap();
        assert_eq!(back.coefficients(), original.coefficients());
        assert_eq!(back.field(), original.field());
    }

    #[test]
    fn deserializing_non_canonical_coefficients_fails() {
        let json = r#"{"modulus":"7","coefficients":["1","7"]}"#;
        assert!(serde_json::from_str::<Polynomial>(json).is_err());
        let json = r#"{"modulus":"1","coefficients":[]}"#;
        assert!(serde_json::from_str::<Polynomial>(json).is_err());
    }
}
