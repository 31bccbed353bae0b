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

//! [`Situation`] of an interval pair and its [`SituationKey`] encoding.

use crate::{
    bound::Bound,
    class::{Class, Slot},
    interval::Interval,
};
use core::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
};
use enum_iterator::Sequence;

/// Outcome of one bound comparison of an interval pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
#[repr(u8)]
pub enum Comparison {
    /// One of the intervals does not store the compared bound.
    NotApplicable = 0,
    /// Left bound is less than right bound.
    Less = 1,
    /// Bounds are equal.
    Equal = 2,
    /// Left bound is greater than right bound.
    Greater = 3,
}

impl Comparison {
    /// Returns 2-bit code of the comparison.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Returns comparison for the low 2 bits of `code`.
    pub const fn from_code(code: u16) -> Self {
        match code & 0b11 {
            0 => Self::NotApplicable,
            1 => Self::Less,
            2 => Self::Equal,
            _ => Self::Greater,
        }
    }

    /// Returns ordering, `None` if not applicable.
    pub const fn ordering(self) -> Option<Ordering> {
        match self {
            Self::NotApplicable => None,
            Self::Less => Some(Ordering::Less),
            Self::Equal => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
        }
    }

    /// Swaps the compared sides.
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            other => other,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// Shape relationship of an interval pair `(X, Y)`: both classes and the outcomes
/// of the four bound comparisons which can be meaningful for them.
///
/// Only [`Situation::classify`] touches bound values; everything derived from
/// a situation is independent of the bound type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Situation {
    /// Class of `X`.
    pub x: Class,
    /// Class of `Y`.
    pub y: Class,
    /// `X.A` vs `Y.A`.
    pub aa: Comparison,
    /// `X.A` vs `Y.B`.
    pub ab: Comparison,
    /// `X.B` vs `Y.A`.
    pub ba: Comparison,
    /// `X.B` vs `Y.B`.
    pub bb: Comparison,
}

impl Situation {
    /// Classifies pair `(x, y)`.
    ///
    /// Makes at most four [`Bound::compare`] calls. `X.B` vs `Y.A` is computed
    /// as reversed `Y.A` vs `X.B`, so that it is always consistent with
    /// classification of the swapped pair.
    pub fn classify<T: Bound>(x: &Interval<T>, y: &Interval<T>) -> Self {
        Self {
            x: x.class(),
            y: y.class(),
            aa: Self::compare(x, Slot::A, y, Slot::A),
            ab: Self::compare(x, Slot::A, y, Slot::B),
            ba: Self::compare(y, Slot::A, x, Slot::B).reverse(),
            bb: Self::compare(x, Slot::B, y, Slot::B),
        }
    }

    fn compare<T: Bound>(x: &Interval<T>, xs: Slot, y: &Interval<T>, ys: Slot) -> Comparison {
        if x.class().has(xs) && y.class().has(ys) {
            x.slot(xs).compare(y.slot(ys)).into()
        } else {
            Comparison::NotApplicable
        }
    }

    /// Returns comparison slot `xs` of `X` against slot `ys` of `Y`.
    pub const fn comparison(&self, xs: Slot, ys: Slot) -> Comparison {
        match (xs, ys) {
            (Slot::A, Slot::A) => self.aa,
            (Slot::A, Slot::B) => self.ab,
            (Slot::B, Slot::A) => self.ba,
            (Slot::B, Slot::B) => self.bb,
        }
    }

    /// Returns ordering of slot `xs` of `X` against slot `ys` of `Y`.
    ///
    /// Panics if that comparison is not applicable: resolution never asks
    /// for a bound the classes don't have.
    #[track_caller]
    pub(crate) fn order(&self, xs: Slot, ys: Slot) -> Ordering {
        self.comparison(xs, ys).ordering().unwrap_or_else(|| {
            log::error!("Unreachable situation {:?}: X.{xs:?} vs Y.{ys:?}", self.key());
            unreachable!("Unreachable situation {:?}: X.{xs:?} vs Y.{ys:?}", self.key())
        })
    }

    /// Returns whether each comparison is applicable exactly when
    /// shape signatures of both classes have the compared bounds.
    pub fn is_reachable(&self) -> bool {
        [Slot::A, Slot::B].into_iter().all(|xs| {
            [Slot::A, Slot::B].into_iter().all(|ys| {
                let applicable = self.x.has(xs) && self.y.has(ys);
                applicable == (self.comparison(xs, ys) != Comparison::NotApplicable)
            })
        })
    }

    /// Returns situation of the swapped pair `(Y, X)`.
    pub const fn swap(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            aa: self.aa.reverse(),
            ab: self.ba.reverse(),
            ba: self.ab.reverse(),
            bb: self.bb.reverse(),
        }
    }

    /// Packs situation into [`SituationKey`].
    pub const fn key(&self) -> SituationKey {
        let classes = self.x.code() as u16 * Class::COUNT as u16 + self.y.code() as u16;
        SituationKey(
            classes << 8
                | self.aa.code()
                | self.ab.code() << 2
                | self.ba.code() << 4
                | self.bb.code() << 6,
        )
    }
}

/// Discrete encoding of a [`Situation`].
///
/// Bits `0..2` hold `AA`, `2..4` - `AB`, `4..6` - `BA`, `6..8` - `BB`
/// [`Comparison`] codes; bits `8..` hold `class(X) * 11 + class(Y)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SituationKey(u16);

impl SituationKey {
    /// Amount of possible keys: `11 * 11 * 4^4`.
    pub const COUNT: u16 = (Class::COUNT as u16) * (Class::COUNT as u16) * 256;

    /// Returns raw key.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Decodes situation, `None` if class codes are out of range.
    pub fn situation(self) -> Option<Situation> {
        let classes = self.0 >> 8;
        let count = Class::COUNT as u16;
        let x = Class::from_code(u8::try_from(classes / count).ok()?)?;
        let y = Class::from_code((classes % count) as u8)?;
        Some(Situation {
            x,
            y,
            aa: Comparison::from_code(self.0),
            ab: Comparison::from_code(self.0 >> 2),
            ba: Comparison::from_code(self.0 >> 4),
            bb: Comparison::from_code(self.0 >> 6),
        })
    }
}

impl From<Situation> for SituationKey {
    fn from(situation: Situation) -> Self {
        situation.key()
    }
}

impl From<u16> for SituationKey {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl Debug for SituationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SituationKey({:#06x})", self.0)
    }
}

/// Returns all reachable situations: every class pair with every combination
/// of outcomes of its applicable comparisons.
///
/// Not every reachable situation is geometrically realizable
/// (e.g. `X.A > Y.B` together with `X.B < Y.A`), but each one must resolve.
pub fn reachable() -> impl Iterator<Item = Situation> {
    (0..SituationKey::COUNT)
        .filter_map(|raw| SituationKey(raw).situation())
        .filter(Situation::is_reachable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        let x = Interval::left_open(1, 2);
        let y = Interval::left_closed(2, 3);
        let s = Situation::classify(&x, &y);
        assert_eq!(
            s,
            Situation {
                x: Class::LeftOpen,
                y: Class::LeftClosed,
                aa: Comparison::Less,
                ab: Comparison::Less,
                ba: Comparison::Equal,
                bb: Comparison::Less,
            }
        );
        assert!(s.is_reachable());
        assert_eq!(Situation::classify(&y, &x), s.swap());
    }

    #[test]
    fn classify_not_applicable() {
        let x = Interval::degenerate(5);
        let y = Interval::right_bounded_closed(5);
        let s = Situation::classify(&x, &y);
        assert_eq!(s.aa, Comparison::NotApplicable);
        assert_eq!(s.ab, Comparison::Equal);
        assert_eq!(s.ba, Comparison::NotApplicable);
        assert_eq!(s.bb, Comparison::NotApplicable);
        assert!(s.is_reachable());

        let s = Situation::classify(&Interval::<u8>::empty(), &Interval::unbounded());
        assert_eq!(s.key().get() & 0xff, 0);
    }

    #[test]
    fn key_roundtrip_covers_alphabet() {
        let mut decoded = 0;
        for raw in 0..=u16::MAX {
            let key = SituationKey::from(raw);
            if let Some(situation) = key.situation() {
                assert_eq!(situation.key(), key);
                decoded += 1;
            }
        }
        assert_eq!(decoded, SituationKey::COUNT as usize);
    }

    #[test]
    fn reachable_count() {
        // For each class the amount of stored slots is: 0 for Unbounded and Empty,
        // 1 for Degenerate and four half-bounded classes, 2 for four proper classes.
        // Applicable comparisons of a pair are `slots(x) * slots(y)`,
        // each one has 3 outcomes.
        let slots = |c: Class| c.has_a() as u32 + c.has_b() as u32;
        let expected: usize = enum_iterator::all::<Class>()
            .flat_map(|x| enum_iterator::all::<Class>().map(move |y| (x, y)))
            .map(|(x, y)| 3usize.pow(slots(x) * slots(y)))
            .sum();
        assert_eq!(reachable().count(), expected);
    }

    #[test]
    fn unreachable_comparison_is_fatal() {
        let s = Situation::classify(&Interval::unbounded(), &Interval::closed(1, 2));
        let result = std::panic::catch_unwind(|| s.order(Slot::A, Slot::A));
        assert!(result.is_err());
    }
}
