// This file is part of Gear.

// Copyright (C) 2025 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! [Bound] trait definition and implementation for common bound types.

use alloc::string::String;
use core::{cmp::Ordering, time::Duration};

/// Capability of a type to be used as an interval bound.
///
/// The algebra never looks inside bound values: everything it needs is
/// [`Bound::compare`] and [`Clone::clone`].
///
/// # Guaranties
/// - `compare` is a strict total order: consistent, antisymmetric and transitive.
/// - `clone` produces an independent value: mutating the clone is never observable
///   through the original and vice versa. Result intervals are always built from clones,
///   so for reference-like bound types (arbitrary precision numbers) no result aliases
///   an operand.
///
/// Default implementation is provided for all integer types, `char`, `bool`,
/// strings, [`Duration`], floats (by [`f64::total_cmp`]), and behind features
/// for `std` time types and arbitrary precision numbers.
///
/// # Examples
/// ```
/// use core::cmp::Ordering;
/// use interval_algebra::{Bound, Interval};
///
/// /// Version compared by `major` only.
/// #[derive(Clone, Debug)]
/// struct Major { major: u32, patch: u32 }
///
/// impl Bound for Major {
///     fn compare(&self, other: &Self) -> Ordering {
///         self.major.cmp(&other.major)
///     }
/// }
///
/// let x = Interval::closed(Major { major: 1, patch: 5 }, Major { major: 3, patch: 0 });
/// assert!(x.contains(&Major { major: 3, patch: 9 }));
/// ```
pub trait Bound: Clone {
    /// Returns ordering of `self` relative to `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_for_ord {
    ($($t:ty)*) => ($(
        impl Bound for $t {
            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
    )*)
}

impl_for_ord!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize char bool String Duration);

impl Bound for &str {
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

// NaN as a bound breaks interval invariants, so it is a caller error.
// Under `total_cmp` negative zero orders before positive zero.
macro_rules! impl_for_float {
    ($($t:ty)*) => ($(
        impl Bound for $t {
            fn compare(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    )*)
}

impl_for_float!(f32 f64);

#[cfg(feature = "std")]
impl_for_ord!(std::time::SystemTime std::time::Instant);

#[cfg(feature = "bigint")]
impl_for_ord!(num_bigint::BigInt num_bigint::BigUint num_rational::BigRational);

#[cfg(test)]
mod tests {
    use super::*;

    fn check_total<T: Bound + core::fmt::Debug>(sorted: &[T]) {
        for (i, x) in sorted.iter().enumerate() {
            for (j, y) in sorted.iter().enumerate() {
                assert_eq!(x.compare(y), i.cmp(&j), "{x:?} vs {y:?}");
            }
        }
    }

    #[test]
    fn integers() {
        check_total(&[i8::MIN, -1, 0, 1, i8::MAX]);
        check_total(&[0u128, 1, u128::MAX]);
    }

    #[test]
    fn floats() {
        check_total(&[f64::NEG_INFINITY, -1.5, -0.0, 0.0, 1e-9, f64::INFINITY]);
        check_total(&[f32::MIN, 0.5f32, f32::MAX]);
    }

    #[test]
    fn strings() {
        check_total(&["", "a", "aa", "ab", "b"]);
        check_total(&[String::from("aqua"), String::from("bar"), String::from("closed")]);
    }

    #[test]
    fn durations() {
        check_total(&[
            Duration::ZERO,
            Duration::from_nanos(1),
            Duration::from_secs(1),
        ]);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn big_numbers() {
        use num_bigint::BigInt;
        use num_rational::BigRational;

        let big = BigInt::from(u128::MAX) * BigInt::from(u128::MAX);
        check_total(&[-big.clone(), BigInt::from(0), big.clone()]);

        let third = BigRational::new(1.into(), 3.into());
        let half = BigRational::new(1.into(), 2.into());
        check_total(&[third.clone(), half, BigRational::from_integer(big)]);

        // Independent copies.
        let mut copy = third.clone();
        copy += BigRational::from_integer(1.into());
        assert_eq!(third, BigRational::new(1.into(), 3.into()));
    }
}
