use std::cmp::Ordering;

use crate::errors::ErrorCode::MathOverflow;
use anchor_lang::prelude::*;
use spl_math::uint::U256;

#[derive(Debug, Clone)]
/// Unscaled 256-bit magnitude. Wide enough to hold the product of a raw
/// token amount and a raw oracle price without overflow.
pub struct Decimal(pub U256);

/// Trait to convert a type to a U256
pub trait IntoU256 {
    fn into_u256(self) -> U256;
}

/// Implementation of the IntoU256 trait for u64
impl IntoU256 for u64 {
    fn into_u256(self) -> U256 {
        U256::from(self)
    }
}

/// Implementation of the IntoU256 trait for u128
impl IntoU256 for u128 {
    fn into_u256(self) -> U256 {
        U256::from(self)
    }
}

/// Implementation of the IntoU256 trait for U256
impl IntoU256 for U256 {
    fn into_u256(self) -> U256 {
        self
    }
}

/// Implementation of the PartialEq trait for Decimal
impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Implementation of the Eq trait for Decimal
impl Eq for Decimal {}

/// Implementation of the PartialOrd trait for Decimal
impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

/// Implementation of the Ord trait for Decimal
impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Decimal {
    /// The zero decimal
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));
    /// The one decimal
    pub const ONE: Self = Self(U256([1, 0, 0, 0]));
}

impl Decimal {
    /// Create a new Decimal from a raw integer magnitude, without any scaling.
    ///
    /// # Arguments
    /// * `value` - The raw value to create the Decimal from
    pub fn from_raw<T: IntoU256>(value: T) -> Self {
        Decimal(value.into_u256())
    }

    /// Power of ten, used to move between decimal precisions.
    ///
    /// # Arguments
    /// * `exponent` - The exponent to raise ten to
    pub fn pow10(exponent: u32) -> Result<Self> {
        let result = U256::from(10u64)
            .checked_pow(U256::from(exponent))
            .ok_or(MathOverflow)?;

        Ok(Decimal(result))
    }
}

impl Decimal {
    /// Add two Decimals.
    ///
    /// # Arguments
    /// * `other` - The other Decimal to add
    pub fn add(&self, other: &Self) -> Result<Self> {
        let result = self.0.checked_add(other.0).ok_or(MathOverflow)?;

        Ok(Decimal(result))
    }

    /// Subtract two Decimals.
    ///
    /// # Arguments
    /// * `other` - The other Decimal to subtract
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let result = self.0.checked_sub(other.0).ok_or(MathOverflow)?;

        Ok(Decimal(result))
    }

    /// Multiply two Decimals. No automatic rescaling is done.
    ///
    /// # Arguments
    /// * `other` - The other Decimal to multiply
    pub fn mul(&self, other: &Self) -> Result<Self> {
        let result = self.0.checked_mul(other.0).ok_or(MathOverflow)?;

        Ok(Decimal(result))
    }

    /// Divide two Decimals, truncating toward zero.
    ///
    /// # Arguments
    /// * `other` - The other Decimal to divide
    pub fn div(&self, other: &Self) -> Result<Self> {
        let result = self.0.checked_div(other.0).ok_or(MathOverflow)?;

        Ok(Decimal(result))
    }

    /// Check if the Decimal is zero
    pub fn is_zero(&self) -> bool {
        self.0 == U256::from(0)
    }

    /// Narrow to a u128, saturating at the maximum. Used for event payloads,
    /// never for comparisons.
    pub fn to_u128_saturating(&self) -> u128 {
        if self.0 > U256::from(u128::MAX) {
            u128::MAX
        } else {
            self.0.as_u128()
        }
    }
}
