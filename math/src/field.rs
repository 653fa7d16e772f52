use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::One;
use num_traits::Zero;
use rand::RngCore;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::constants::CURVE25519_EXCESS;
use crate::constants::CURVE25519_EXPONENT;
use crate::constants::MERSENNE_61;
use crate::error::FieldError;

/// Element of some prime field GF(p), stored as its integer residue.
///
/// A `FieldElement` does not know its modulus. Canonicity (`value < p`) is
/// established by the [`PrimeField`] that produced it, and re-checked by
/// [`Polynomial`](crate::poly::Polynomial) constructors.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldElement(BigUint);

impl FieldElement {
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn into_value(self) -> BigUint {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Minimal big-endian representation. Zero has the empty representation.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.is_zero() {
            Vec::new()
        } else {
            self.0.to_bytes_be()
        }
    }
}

impl From<BigUint> for FieldElement {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

macro_rules! impl_from_unsigned_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for FieldElement {
            fn from(value: $t) -> Self {
                Self(BigUint::from(value))
            }
        }
    )+};
}

impl_from_unsigned_int_for_fe!(u8, u16, u32, u64, u128, usize);

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldElement {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str(s)
            .map(Self)
            .map_err(|_| FieldError::InvalidDigits(s.to_owned()))
    }
}

impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let digits = String::deserialize(deserializer)?;
        digits.parse().map_err(serde::de::Error::custom)
    }
}

/// The prime field GF(p).
///
/// Cloning is cheap: the modulus is shared. Primality of `p` is a caller
/// precondition; a composite modulus shows up as
/// [`FieldError::NoInverseExists`] when a non-unit is inverted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: Arc<BigUint>,
}

impl PrimeField {
    pub fn new(modulus: BigUint) -> Result<Self, FieldError> {
        if modulus < BigUint::from(2u32) {
            return Err(FieldError::InvalidModulus(modulus));
        }
        Ok(Self {
            modulus: Arc::new(modulus),
        })
    }

    pub fn from_u64(modulus: u64) -> Result<Self, FieldError> {
        Self::new(BigUint::from(modulus))
    }

    /// GF(2^61 - 1).
    pub fn mersenne_61() -> Self {
        Self {
            modulus: Arc::new(BigUint::from(MERSENNE_61)),
        }
    }

    /// GF(2^255 - 19). Wide enough to hold any 31-byte chunk unreduced.
    pub fn curve25519() -> Self {
        let modulus =
            (BigUint::one() << CURVE25519_EXPONENT) - CURVE25519_EXCESS;
        Self {
            modulus: Arc::new(modulus),
        }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Number of bytes in the minimal big-endian encoding of the modulus.
    pub fn byte_len(&self) -> usize {
        self.modulus.bits().div_ceil(8) as usize
    }

    #[inline]
    pub fn is_canonical(&self, value: &BigUint) -> bool {
        value < self.modulus()
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement::default()
    }

    pub fn one(&self) -> FieldElement {
        FieldElement(BigUint::one())
    }

    /// Reduce `value` into the field.
    pub fn element(&self, value: impl Into<BigUint>) -> FieldElement {
        FieldElement(value.into() % self.modulus())
    }

    /// Interpret `bytes` as a big-endian unsigned integer and reduce it.
    pub fn element_from_bytes_be(&self, bytes: &[u8]) -> FieldElement {
        self.element(BigUint::from_bytes_be(bytes))
    }

    /// Construct an element iff `value` is canonical, an error otherwise.
    pub fn try_element(
        &self,
        value: impl Into<BigUint>,
    ) -> Result<FieldElement, FieldError> {
        let value = value.into();
        if self.is_canonical(&value) {
            Ok(FieldElement(value))
        } else {
            Err(FieldError::NotCanonical {
                value,
                modulus: self.modulus().clone(),
            })
        }
    }

    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement((&a.0 + &b.0) % self.modulus())
    }

    /// `(a - b + p) mod p`, never negative.
    pub fn sub(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let p = self.modulus();
        let b = &b.0 % p;
        FieldElement((&a.0 + p - b) % p)
    }

    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement((&a.0 * &b.0) % self.modulus())
    }

    pub fn neg(&self, a: &FieldElement) -> FieldElement {
        self.sub(&self.zero(), a)
    }

    pub fn pow(&self, base: &FieldElement, exponent: &BigUint) -> FieldElement {
        FieldElement(base.0.modpow(exponent, self.modulus()))
    }

    /// The unique `x⁻¹` with `x · x⁻¹ ≡ 1 (mod p)`.
    pub fn inverse(&self, x: &FieldElement) -> Result<FieldElement, FieldError> {
        x.0.modinv(self.modulus())
            .map(FieldElement)
            .ok_or_else(|| FieldError::NoInverseExists {
                value: x.0.clone(),
                modulus: self.modulus().clone(),
            })
    }

    /// Uniformly sample a canonical element by rejection sampling.
    pub fn random_element<R>(&self, rng: &mut R) -> FieldElement
    where
        R: RngCore + ?Sized,
    {
        let len = self.byte_len();
        let excess_bits = len * 8 - self.modulus.bits() as usize;
        let mut buffer = vec![0u8; len];
        loop {
            rng.fill_bytes(&mut buffer);
            buffer[0] &= 0xff >> excess_bits;
            let candidate = BigUint::from_bytes_be(&buffer);
            if self.is_canonical(&candidate) {
                return FieldElement(candidate);
            }
        }
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus)
    }
}
