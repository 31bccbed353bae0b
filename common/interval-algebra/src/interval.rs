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

//! [`Interval`] implementation.

use crate::{
    algebra,
    bound::Bound,
    class::{Class, Slot},
};
use core::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    ops::{
        self, BitAnd, BitOr, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo,
        RangeToInclusive,
    },
};
use scale_info::{
    TypeInfo,
    scale::{self, Decode, Encode, Input},
};

/// Interval of values of type `T`: a [`Class`] plus the bound values its shape requires.
///
/// `a` is stored iff [`Class::has_a`], `b` iff [`Class::has_b`]. The constructors
/// guarantee this. For proper classes (`Open`, `Closed`, `LeftOpen`, `LeftClosed`)
/// `a` must order strictly before `b`: unchecked constructors rely on the caller here,
/// [`Interval::new_checked`] verifies it. Algebra results on intervals violating
/// that order are unspecified.
///
/// # Examples
/// ```
/// use interval_algebra::{Class, Interval};
///
/// let x = Interval::left_open(1, 2);
/// let y = Interval::left_closed(2, 3);
///
/// let i = &x & &y;
/// assert_eq!(i.class(), Class::Degenerate);
/// assert_eq!(i.to_string(), "{2}");
///
/// let u = (&x | &y).unwrap();
/// assert_eq!(u.to_string(), "(1, 3)");
///
/// // Two pieces with a gap can't be one interval.
/// assert!(Interval::closed(1, 2).union(&Interval::closed(3, 4)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypeInfo, Encode)]
#[codec(crate = scale_info::scale)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval<T> {
    class: Class,
    a: Option<T>,
    b: Option<T>,
}

/// Errors of interval construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IntervalError {
    /// Class requires low bound, but none is given.
    #[display("{_0} interval requires low bound")]
    MissingA(Class),
    /// Class requires high bound, but none is given.
    #[display("{_0} interval requires high bound")]
    MissingB(Class),
    /// Class has no low bound, but one is given.
    #[display("{_0} interval has no low bound")]
    UnexpectedA(Class),
    /// Class has no high bound, but one is given.
    #[display("{_0} interval has no high bound")]
    UnexpectedB(Class),
    /// Low bound does not precede high bound.
    #[display("{_0} interval low bound must precede high bound")]
    Unordered(Class),
}

impl core::error::Error for IntervalError {}

impl<T> Interval<T> {
    /// Creates interval of `class` from bound values.
    ///
    /// Checks only that present values match the shape of `class`;
    /// order of `a` and `b` is a caller obligation.
    pub fn new(class: Class, a: Option<T>, b: Option<T>) -> Result<Self, IntervalError> {
        match (class.has_a(), a.is_some()) {
            (true, false) => return Err(IntervalError::MissingA(class)),
            (false, true) => return Err(IntervalError::UnexpectedA(class)),
            _ => {}
        }
        match (class.has_b(), b.is_some()) {
            (true, false) => return Err(IntervalError::MissingB(class)),
            (false, true) => return Err(IntervalError::UnexpectedB(class)),
            _ => {}
        }
        Ok(Self { class, a, b })
    }

    /// Shape must be guarantied by caller.
    pub(crate) fn new_unchecked(class: Class, a: Option<T>, b: Option<T>) -> Self {
        debug_assert_eq!(class.has_a(), a.is_some(), "Must be guarantied");
        debug_assert_eq!(class.has_b(), b.is_some(), "Must be guarantied");
        Self { class, a, b }
    }

    /// `(-∞, ∞)`.
    pub const fn unbounded() -> Self {
        Self {
            class: Class::Unbounded,
            a: None,
            b: None,
        }
    }

    /// `{}`.
    pub const fn empty() -> Self {
        Self {
            class: Class::Empty,
            a: None,
            b: None,
        }
    }

    /// `{a}`.
    pub fn degenerate(a: T) -> Self {
        Self::new_unchecked(Class::Degenerate, Some(a), None)
    }

    /// `(a, b)`, `a < b` is a caller obligation.
    pub fn open(a: T, b: T) -> Self {
        Self::new_unchecked(Class::Open, Some(a), Some(b))
    }

    /// `[a, b]`, `a < b` is a caller obligation.
    pub fn closed(a: T, b: T) -> Self {
        Self::new_unchecked(Class::Closed, Some(a), Some(b))
    }

    /// `(a, b]`, `a < b` is a caller obligation.
    pub fn left_open(a: T, b: T) -> Self {
        Self::new_unchecked(Class::LeftOpen, Some(a), Some(b))
    }

    /// `[a, b)`, `a < b` is a caller obligation.
    pub fn left_closed(a: T, b: T) -> Self {
        Self::new_unchecked(Class::LeftClosed, Some(a), Some(b))
    }

    /// `(a, ∞)`.
    pub fn left_bounded_open(a: T) -> Self {
        Self::new_unchecked(Class::LeftBoundedOpen, Some(a), None)
    }

    /// `[a, ∞)`.
    pub fn left_bounded_closed(a: T) -> Self {
        Self::new_unchecked(Class::LeftBoundedClosed, Some(a), None)
    }

    /// `(-∞, b)`.
    pub fn right_bounded_open(b: T) -> Self {
        Self::new_unchecked(Class::RightBoundedOpen, None, Some(b))
    }

    /// `(-∞, b]`.
    pub fn right_bounded_closed(b: T) -> Self {
        Self::new_unchecked(Class::RightBoundedClosed, None, Some(b))
    }

    /// Returns interval class.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns low bound value, if class has one.
    pub fn a(&self) -> Option<&T> {
        self.a.as_ref()
    }

    /// Returns high bound value, if class has one.
    pub fn b(&self) -> Option<&T> {
        self.b.as_ref()
    }

    /// Returns `(class, a, b)`.
    pub fn into_parts(self) -> (Class, Option<T>, Option<T>) {
        (self.class, self.a, self.b)
    }

    /// Maps bound values by `f`, keeping the class.
    ///
    /// `f` must preserve order of values, otherwise the result may break
    /// the `a < b` invariant.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Interval<U> {
        Interval {
            class: self.class,
            a: self.a.map(&mut f),
            b: self.b.map(&mut f),
        }
    }

    /// Returns whether interval is [`Class::Empty`].
    pub fn is_empty(&self) -> bool {
        self.class == Class::Empty
    }

    /// Returns value stored in slot `s`.
    ///
    /// Panics if class of `self` does not store `s`: that can't happen
    /// for a situation produced by [`Situation::classify`](crate::Situation::classify).
    #[track_caller]
    pub(crate) fn slot(&self, s: Slot) -> &T {
        let value = match s {
            Slot::A => self.a.as_ref(),
            Slot::B => self.b.as_ref(),
        };
        value.unwrap_or_else(|| {
            log::error!("{} interval has no {s:?} bound", self.class);
            unreachable!("{} interval has no {s:?} bound", self.class)
        })
    }

    /// Returns lower end as [`ops::Bound`], `None` for empty interval.
    pub fn lower_bound(&self) -> Option<ops::Bound<&T>> {
        if self.is_empty() {
            return None;
        }
        Some(match (self.class.lower(), self.a.as_ref()) {
            (Some(end), Some(a)) if end.inclusive => ops::Bound::Included(a),
            (Some(_), Some(a)) => ops::Bound::Excluded(a),
            _ => ops::Bound::Unbounded,
        })
    }

    /// Returns upper end as [`ops::Bound`], `None` for empty interval.
    pub fn upper_bound(&self) -> Option<ops::Bound<&T>> {
        if self.is_empty() {
            return None;
        }
        let Some(end) = self.class.upper() else {
            return Some(ops::Bound::Unbounded);
        };
        let value = match end.slot {
            Slot::A => self.a.as_ref(),
            Slot::B => self.b.as_ref(),
        };
        Some(match value {
            Some(v) if end.inclusive => ops::Bound::Included(v),
            Some(v) => ops::Bound::Excluded(v),
            None => ops::Bound::Unbounded,
        })
    }
}

impl<T: Bound> Interval<T> {
    /// Same as [`Interval::new`], but also checks that `a < b` for proper classes.
    pub fn new_checked(class: Class, a: Option<T>, b: Option<T>) -> Result<Self, IntervalError> {
        let interval = Self::new(class, a, b)?;
        if class.is_proper() && interval.slot(Slot::A).compare(interval.slot(Slot::B)).is_ge() {
            return Err(IntervalError::Unordered(class));
        }
        Ok(interval)
    }

    /// Returns whether `value` belongs to `self`.
    pub fn contains(&self, value: &T) -> bool {
        let (Some(lower), Some(upper)) = (self.lower_bound(), self.upper_bound()) else {
            return false;
        };
        let above = match lower {
            ops::Bound::Included(a) => value.compare(a).is_ge(),
            ops::Bound::Excluded(a) => value.compare(a).is_gt(),
            ops::Bound::Unbounded => true,
        };
        let below = match upper {
            ops::Bound::Included(b) => value.compare(b).is_le(),
            ops::Bound::Excluded(b) => value.compare(b).is_lt(),
            ops::Bound::Unbounded => true,
        };
        above && below
    }

    /// Returns whether `self` and `other` have the same class and their bound values
    /// are equal by [`Bound::compare`].
    pub fn equivalent(&self, other: &Self) -> bool {
        let same = |x: Option<&T>, y: Option<&T>| match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => x.compare(y) == Ordering::Equal,
            _ => false,
        };
        self.class == other.class && same(self.a(), other.a()) && same(self.b(), other.b())
    }

    /// Returns `self ∩ other`. See [`intersection`](crate::intersection).
    pub fn intersection(&self, other: &Self) -> Self {
        algebra::intersection(self, other)
    }

    /// Returns `self ∪ other`, if it is a single interval. See [`union`](crate::union).
    pub fn union(&self, other: &Self) -> Option<Self> {
        algebra::union(self, other)
    }

    fn from_ordered(
        a: T,
        b: T,
        if_less: Class,
        if_equal: impl FnOnce(T) -> Self,
    ) -> Result<Self, IntervalError> {
        match a.compare(&b) {
            Ordering::Less => Ok(Self::new_unchecked(if_less, Some(a), Some(b))),
            Ordering::Equal => Ok(if_equal(a)),
            Ordering::Greater => Err(IntervalError::Unordered(if_less)),
        }
    }
}

impl<T: Bound> BitAnd for &Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Bound> BitOr for &Interval<T> {
    type Output = Option<Interval<T>>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Bound> From<T> for Interval<T> {
    fn from(point: T) -> Self {
        Self::degenerate(point)
    }
}

impl<T: Bound> From<RangeFull> for Interval<T> {
    fn from(_: RangeFull) -> Self {
        Self::unbounded()
    }
}

impl<T: Bound> From<RangeFrom<T>> for Interval<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Self::left_bounded_closed(range.start)
    }
}

impl<T: Bound> From<RangeTo<T>> for Interval<T> {
    fn from(range: RangeTo<T>) -> Self {
        Self::right_bounded_open(range.end)
    }
}

impl<T: Bound> From<RangeToInclusive<T>> for Interval<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Self::right_bounded_closed(range.end)
    }
}

impl<T: Bound> TryFrom<Range<T>> for Interval<T> {
    type Error = IntervalError;

    /// `start..end` is `[start, end)`, empty if `start == end`.
    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::from_ordered(range.start, range.end, Class::LeftClosed, |_| {
            Self::empty()
        })
    }
}

impl<T: Bound> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = IntervalError;

    /// `start..=end` is `[start, end]`, degenerate if `start == end`.
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::from_ordered(start, end, Class::Closed, Self::degenerate)
    }
}

impl<T: Bound> TryFrom<(ops::Bound<T>, ops::Bound<T>)> for Interval<T> {
    type Error = IntervalError;

    fn try_from((start, end): (ops::Bound<T>, ops::Bound<T>)) -> Result<Self, Self::Error> {
        use ops::Bound::*;

        match (start, end) {
            (Unbounded, Unbounded) => Ok(Self::unbounded()),
            (Included(a), Unbounded) => Ok(Self::left_bounded_closed(a)),
            (Excluded(a), Unbounded) => Ok(Self::left_bounded_open(a)),
            (Unbounded, Included(b)) => Ok(Self::right_bounded_closed(b)),
            (Unbounded, Excluded(b)) => Ok(Self::right_bounded_open(b)),
            (Included(a), Included(b)) => Self::from_ordered(a, b, Class::Closed, Self::degenerate),
            (Excluded(a), Excluded(b)) => Self::from_ordered(a, b, Class::Open, |_| Self::empty()),
            (Excluded(a), Included(b)) => {
                Self::from_ordered(a, b, Class::LeftOpen, |_| Self::empty())
            }
            (Included(a), Excluded(b)) => {
                Self::from_ordered(a, b, Class::LeftClosed, |_| Self::empty())
            }
        }
    }
}

impl<T: Decode> Decode for Interval<T> {
    fn decode<I: Input>(input: &mut I) -> Result<Self, scale::Error> {
        let class = Class::decode(input)?;
        let a = Option::<T>::decode(input)?;
        let b = Option::<T>::decode(input)?;
        Self::new(class, a, b).map_err(|err| {
            log::debug!("Interval decode: {err}");
            "Interval decode: bounds don't match class".into()
        })
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Interval<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Interval")]
        struct Raw<T> {
            class: Class,
            a: Option<T>,
            b: Option<T>,
        }

        let Raw { class, a, b } = Raw::deserialize(deserializer)?;
        Self::new(class, a, b).map_err(serde::de::Error::custom)
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (self.class, &self.a, &self.b) {
            (Class::Unbounded, ..) => write!(f, "(-∞, ∞)"),
            (Class::Empty, ..) => write!(f, "{{}}"),
            (Class::Degenerate, Some(a), _) => write!(f, "{{{a}}}"),
            (Class::Open, Some(a), Some(b)) => write!(f, "({a}, {b})"),
            (Class::Closed, Some(a), Some(b)) => write!(f, "[{a}, {b}]"),
            (Class::LeftOpen, Some(a), Some(b)) => write!(f, "({a}, {b}]"),
            (Class::LeftClosed, Some(a), Some(b)) => write!(f, "[{a}, {b})"),
            (Class::LeftBoundedOpen, Some(a), _) => write!(f, "({a}, ∞)"),
            (Class::LeftBoundedClosed, Some(a), _) => write!(f, "[{a}, ∞)"),
            (Class::RightBoundedOpen, _, Some(b)) => write!(f, "(-∞, {b})"),
            (Class::RightBoundedClosed, _, Some(b)) => write!(f, "(-∞, {b}]"),
            (class, ..) => {
                log::error!("{class} interval has wrong bounds shape");
                unreachable!("{class} interval has wrong bounds shape")
            }
        }
    }
}
