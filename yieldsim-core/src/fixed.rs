//! Fixed-point arithmetic for deterministic yield math.
//!
//! Modifier arguments arrive as decimal strings ("2", "-0.5", "12.25").
//! They are parsed straight into fixed point so that no float rounding ever
//! leaks into a yield total.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Fixed-point value with scale 10000.
///
/// 0.25 → 2500, 1.0 → 10000. i64 backing, i128 intermediates for mul/div.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Fixed(pub i64);

impl Fixed {
    /// Scale factor: 10000 = 1.0
    pub const SCALE: i64 = 10000;

    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(10000);
    pub const HUNDRED: Fixed = Fixed(1_000_000);

    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Fixed(raw)
    }

    /// Create from integer (5 → 50_000)
    #[inline]
    pub const fn from_int(v: i64) -> Self {
        Fixed(v * Self::SCALE)
    }

    /// Convert from f32 (game-data layer only).
    ///
    /// NaN/Inf map to zero, out-of-range values saturate.
    pub fn from_f32(v: f32) -> Self {
        if !v.is_finite() {
            return Fixed::ZERO;
        }
        let scaled = (v as f64 * Self::SCALE as f64).round();
        if scaled >= i64::MAX as f64 {
            return Fixed(i64::MAX);
        }
        if scaled <= i64::MIN as f64 {
            return Fixed(i64::MIN);
        }
        Fixed(scaled as i64)
    }

    /// Parse a decimal string without going through floats.
    ///
    /// Accepts an optional sign, digits and an optional fraction. Digits past
    /// the fourth decimal place are truncated. Returns `None` for anything
    /// else, including empty strings and exponents.
    pub fn parse(s: &str) -> Option<Fixed> {
        let s = s.trim();
        let (negative, body) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };
        let mut frac: i64 = 0;
        let mut place = Self::SCALE / 10;
        for digit in frac_part.bytes().take(4) {
            frac += (digit - b'0') as i64 * place;
            place /= 10;
        }

        let raw = whole.checked_mul(Self::SCALE)?.checked_add(frac)?;
        Some(Fixed(if negative { -raw } else { raw }))
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Truncate toward zero.
    #[inline]
    pub const fn to_int(self) -> i64 {
        self.0 / Self::SCALE
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a plain count (no scale adjustment needed).
    #[inline]
    pub fn mul_int(self, n: i64) -> Fixed {
        Fixed(self.0.saturating_mul(n))
    }

    /// `self × percent / 100`
    #[inline]
    pub fn percent_of(self, percent: Fixed) -> Fixed {
        self * percent / Fixed::HUNDRED
    }

    #[inline]
    pub fn min(self, other: Fixed) -> Fixed {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }
}

impl Add for Fixed {
    type Output = Fixed;
    #[inline]
    fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0 + other.0)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, other: Fixed) {
        self.0 += other.0;
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    #[inline]
    fn sub(self, other: Fixed) -> Fixed {
        Fixed(self.0 - other.0)
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, other: Fixed) {
        self.0 -= other.0;
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl Mul for Fixed {
    type Output = Fixed;
    #[inline]
    fn mul(self, other: Fixed) -> Fixed {
        Fixed((self.0 as i128 * other.0 as i128 / Fixed::SCALE as i128) as i64)
    }
}

impl Div for Fixed {
    type Output = Fixed;
    /// Division by zero yields zero; callers that care validate first.
    #[inline]
    fn div(self, other: Fixed) -> Fixed {
        if other.0 == 0 {
            return Fixed::ZERO;
        }
        Fixed((self.0 as i128 * Fixed::SCALE as i128 / other.0 as i128) as i64)
    }
}

impl std::iter::Sum for Fixed {
    fn sum<I: Iterator<Item = Fixed>>(iter: I) -> Fixed {
        iter.fold(Fixed::ZERO, |acc, x| acc + x)
    }
}

impl std::fmt::Debug for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fixed({} = {})", self.0, self.to_f64())
    }
}

impl std::fmt::Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.to_f64())
    }
}
