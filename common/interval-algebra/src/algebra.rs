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

//! Intersection and union of two intervals.
//!
//! Both operations go in three steps:
//! 1. [`Situation::classify`] compares bounds of the pair, this is the only step
//!    which touches bound values.
//! 2. [`resolve_intersection`] / [`resolve_union`] turn the situation into a
//!    [`Resolution`]: result class plus which operand slot supplies each result bound.
//! 3. [`Resolution::materialize`] clones the chosen values into a new interval.

use crate::{
    bound::Bound,
    class::{Class, Slot},
    interval::Interval,
    situation::Situation,
};
use core::cmp::Ordering;

/// Operand of a binary operation: `X` is the left one, `Y` is the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left operand.
    X,
    /// Right operand.
    Y,
}

/// End of one operand: where its value is stored and whether it is included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct End {
    /// Operand owning the value.
    pub side: Side,
    /// Slot of the operand holding the value.
    pub slot: Slot,
    /// Whether the value is included.
    pub inclusive: bool,
}

/// Type-agnostic description of an operation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    /// Result class.
    pub class: Class,
    /// Source of result `A` value, present iff `class.has_a()`.
    pub a: Option<End>,
    /// Source of result `B` value, present iff `class.has_b()`.
    pub b: Option<End>,
}

impl Resolution {
    const EMPTY: Self = Self {
        class: Class::Empty,
        a: None,
        b: None,
    };

    /// Resolution which reproduces operand `side` of class `class`.
    fn operand(side: Side, class: Class) -> Self {
        Self {
            class,
            a: lower(side, class),
            b: upper(side, class).filter(|_| class.has_b()),
        }
    }

    /// Builds the result interval from clones of the chosen operand values.
    ///
    /// `x` and `y` must be the pair this resolution was produced for.
    ///
    /// # Panics
    ///
    /// Panics if a chosen source slot is absent in the given operand, which
    /// can happen only for a pair of other classes than the resolved one.
    pub fn materialize<T: Bound>(&self, x: &Interval<T>, y: &Interval<T>) -> Interval<T> {
        let value = |end: Option<End>| {
            end.map(|end| {
                let operand = match end.side {
                    Side::X => x,
                    Side::Y => y,
                };
                operand.slot(end.slot).clone()
            })
        };
        Interval::new_unchecked(self.class, value(self.a), value(self.b))
    }
}

fn lower(side: Side, class: Class) -> Option<End> {
    class.lower().map(|e| End {
        side,
        slot: e.slot,
        inclusive: e.inclusive,
    })
}

fn upper(side: Side, class: Class) -> Option<End> {
    class.upper().map(|e| End {
        side,
        slot: e.slot,
        inclusive: e.inclusive,
    })
}

/// Orders values of two ends.
///
/// Ends of one operand are ordered by its class: for `Degenerate` both ends are
/// the same slot, for proper classes `A < B` is an interval invariant.
/// Ends of different operands use the situation comparisons.
fn order(s: &Situation, l: End, r: End) -> Ordering {
    if l.side == r.side {
        return match (l.slot, r.slot) {
            (Slot::A, Slot::B) => Ordering::Less,
            (Slot::B, Slot::A) => Ordering::Greater,
            _ => Ordering::Equal,
        };
    }
    match l.side {
        Side::X => s.order(l.slot, r.slot),
        Side::Y => s.order(r.slot, l.slot).reverse(),
    }
}

/// Of two ends picks the one with `preferred` ordering against the other.
/// Equal values are merged: the result is inclusive iff `merge` of both flags is.
fn pick(
    s: &Situation,
    l: End,
    r: End,
    preferred: Ordering,
    merge: fn(bool, bool) -> bool,
) -> End {
    match order(s, l, r) {
        Ordering::Equal => End {
            inclusive: merge(l.inclusive, r.inclusive),
            ..l
        },
        o if o == preferred => l,
        _ => r,
    }
}

/// Builds resolution from the resolved lower and upper ends.
fn finish(s: &Situation, lo: Option<End>, hi: Option<End>) -> Resolution {
    let class = Class::derive(lo.map(|e| e.inclusive), hi.map(|e| e.inclusive), || {
        lo.zip(hi)
            .map_or(Ordering::Less, |(lo, hi)| order(s, lo, hi))
    });
    Resolution {
        class,
        a: lo.filter(|_| class.has_a()),
        b: hi.filter(|_| class.has_b()),
    }
}

/// Resolves `X ∩ Y`.
///
/// The lower end is the more restrictive of the two lower ends (greater value,
/// exclusive on equal values), the upper end is the more restrictive of the
/// two upper ends (lesser value, exclusive on equal values). A missing end loses
/// to any present one.
pub fn resolve_intersection(s: &Situation) -> Resolution {
    if s.x == Class::Empty || s.y == Class::Empty {
        return Resolution::EMPTY;
    }

    let tighter = |l: Option<End>, r: Option<End>, preferred| match (l, r) {
        (Some(l), Some(r)) => Some(pick(s, l, r, preferred, |l, r| l && r)),
        (end, None) | (None, end) => end,
    };

    let lo = tighter(lower(Side::X, s.x), lower(Side::Y, s.y), Ordering::Greater);
    let hi = tighter(upper(Side::X, s.x), upper(Side::Y, s.y), Ordering::Less);
    finish(s, lo, hi)
}

/// Returns whether there is a point between `upper` end of one operand and
/// `lower` end of another, which belongs to neither of them.
fn gap(s: &Situation, upper: Option<End>, lower: Option<End>) -> bool {
    let (Some(upper), Some(lower)) = (upper, lower) else {
        return false;
    };
    match order(s, upper, lower) {
        Ordering::Less => true,
        Ordering::Equal => !upper.inclusive && !lower.inclusive,
        Ordering::Greater => false,
    }
}

/// Resolves `X ∪ Y`, `None` if it is not a single interval.
///
/// The union is a single interval iff there is no gap between the operands.
/// Then the lower end is the less restrictive of the two lower ends (lesser value,
/// inclusive on equal values), the upper end is the less restrictive of the two
/// upper ends (greater value, inclusive on equal values). A missing end wins.
pub fn resolve_union(s: &Situation) -> Option<Resolution> {
    match (s.x, s.y) {
        (Class::Empty, Class::Empty) => return Some(Resolution::EMPTY),
        (Class::Empty, y) => return Some(Resolution::operand(Side::Y, y)),
        (x, Class::Empty) => return Some(Resolution::operand(Side::X, x)),
        _ => {}
    }

    if gap(s, upper(Side::X, s.x), lower(Side::Y, s.y))
        || gap(s, upper(Side::Y, s.y), lower(Side::X, s.x))
    {
        return None;
    }

    let looser = |l: Option<End>, r: Option<End>, preferred| {
        Some(pick(s, l?, r?, preferred, |l, r| l || r))
    };

    let lo = looser(lower(Side::X, s.x), lower(Side::Y, s.y), Ordering::Less);
    let hi = looser(upper(Side::X, s.x), upper(Side::Y, s.y), Ordering::Greater);
    Some(finish(s, lo, hi))
}

/// Returns `x ∩ y`.
///
/// Always a single interval, possibly [`Class::Empty`].
/// Neither operand is changed, bound values of the result are clones.
pub fn intersection<T: Bound>(x: &Interval<T>, y: &Interval<T>) -> Interval<T> {
    let situation = Situation::classify(x, y);
    let resolution = resolve_intersection(&situation);
    log::trace!(
        "intersection {:?}: {} ∩ {} = {}",
        situation.key(),
        situation.x,
        situation.y,
        resolution.class
    );
    resolution.materialize(x, y)
}

/// Returns `x ∪ y`, or `None` if there is a gap between `x` and `y`,
/// so that the union can't be represented by one interval.
///
/// Only two empty intervals give [`Class::Empty`].
/// Neither operand is changed, bound values of the result are clones.
pub fn union<T: Bound>(x: &Interval<T>, y: &Interval<T>) -> Option<Interval<T>> {
    let situation = Situation::classify(x, y);
    let resolution = resolve_union(&situation);
    log::trace!(
        "union {:?}: {} ∪ {} = {:?}",
        situation.key(),
        situation.x,
        situation.y,
        resolution.map(|r| r.class)
    );
    resolution.map(|r| r.materialize(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::situation;
    use alloc::string::ToString;

    fn check<T: Bound + core::fmt::Display>(
        x: Interval<T>,
        y: Interval<T>,
        intersection: &str,
        union: Option<&str>,
    ) {
        assert_eq!(super::intersection(&x, &y).to_string(), intersection);
        assert_eq!(super::intersection(&y, &x).to_string(), intersection);
        assert_eq!(super::union(&x, &y).map(|u| u.to_string()).as_deref(), union);
        assert_eq!(super::union(&y, &x).map(|u| u.to_string()).as_deref(), union);
    }

    #[test]
    fn shared_endpoint() {
        check(
            Interval::left_open(1, 2),
            Interval::left_closed(2, 3),
            "{2}",
            Some("(1, 3)"),
        );
        check(
            Interval::closed(1, 2),
            Interval::left_open(2, 3),
            "{}",
            Some("[1, 3]"),
        );
        check(Interval::left_closed(1, 2), Interval::left_open(2, 3), "{}", None);
        check(Interval::open(1, 2), Interval::open(2, 3), "{}", None);
        check(
            Interval::closed(1, 2),
            Interval::closed(2, 3),
            "{2}",
            Some("[1, 3]"),
        );
    }

    #[test]
    fn disjoint() {
        check(Interval::closed(1, 2), Interval::closed(3, 4), "{}", None);
        check(Interval::degenerate(1), Interval::degenerate(2), "{}", None);
        check(
            Interval::right_bounded_closed(1),
            Interval::left_bounded_closed(2),
            "{}",
            None,
        );
    }

    #[test]
    fn overlapping() {
        check(
            Interval::open(1, 3),
            Interval::closed(2, 4),
            "[2, 3)",
            Some("(1, 4]"),
        );
        check(
            Interval::closed(1, 4),
            Interval::open(2, 3),
            "(2, 3)",
            Some("[1, 4]"),
        );
        check(
            Interval::left_closed(1, 3),
            Interval::left_open(1, 3),
            "(1, 3)",
            Some("[1, 3]"),
        );
        check(
            Interval::degenerate(2),
            Interval::open(1, 3),
            "{2}",
            Some("(1, 3)"),
        );
    }

    #[test]
    fn degenerate_at_open_end() {
        check(
            Interval::degenerate(2),
            Interval::left_open(2, 3),
            "{}",
            Some("[2, 3]"),
        );
        check(
            Interval::degenerate(3),
            Interval::left_closed(2, 3),
            "{}",
            Some("[2, 3]"),
        );
        check(Interval::degenerate(2), Interval::degenerate(2), "{2}", Some("{2}"));
    }

    #[test]
    fn half_bounded() {
        check(
            Interval::left_bounded_open(1),
            Interval::right_bounded_open(3),
            "(1, 3)",
            Some("(-∞, ∞)"),
        );
        check(
            Interval::left_bounded_open(2),
            Interval::right_bounded_closed(2),
            "{}",
            Some("(-∞, ∞)"),
        );
        check(
            Interval::left_bounded_closed(2),
            Interval::right_bounded_closed(2),
            "{2}",
            Some("(-∞, ∞)"),
        );
        check(
            Interval::left_bounded_open(2),
            Interval::right_bounded_open(2),
            "{}",
            None,
        );
        check(
            Interval::left_bounded_closed(1),
            Interval::left_bounded_open(1),
            "(1, ∞)",
            Some("[1, ∞)"),
        );
        check(
            Interval::right_bounded_open(5),
            Interval::closed(1, 7),
            "[1, 5)",
            Some("(-∞, 7]"),
        );
    }

    #[test]
    fn unbounded_and_empty() {
        check(Interval::unbounded(), Interval::open(1, 2), "(1, 2)", Some("(-∞, ∞)"));
        check(Interval::unbounded(), Interval::<i32>::unbounded(), "(-∞, ∞)", Some("(-∞, ∞)"));
        check(Interval::unbounded(), Interval::<i32>::empty(), "{}", Some("(-∞, ∞)"));
        check(Interval::empty(), Interval::left_open(1, 2), "{}", Some("(1, 2]"));
        check(Interval::empty(), Interval::degenerate(1), "{}", Some("{1}"));
        check(Interval::<u8>::empty(), Interval::empty(), "{}", Some("{}"));
    }

    #[test]
    fn strings() {
        check(
            Interval::left_open("aqua", "bar"),
            Interval::left_closed("bar", "closed"),
            "{bar}",
            Some("(aqua, closed)"),
        );
    }

    #[test]
    fn resolution_sources() {
        let x = Interval::closed(1, 3);
        let y = Interval::left_bounded_open(2);
        let s = Situation::classify(&x, &y);
        assert_eq!(
            resolve_intersection(&s),
            Resolution {
                class: Class::LeftOpen,
                a: Some(End {
                    side: Side::Y,
                    slot: Slot::A,
                    inclusive: false
                }),
                b: Some(End {
                    side: Side::X,
                    slot: Slot::B,
                    inclusive: true
                }),
            }
        );
        assert_eq!(
            resolve_union(&s),
            Some(Resolution {
                class: Class::LeftBoundedClosed,
                a: Some(End {
                    side: Side::X,
                    slot: Slot::A,
                    inclusive: true
                }),
                b: None,
            })
        );
    }

    #[test]
    fn every_reachable_situation_resolves() {
        for s in situation::reachable() {
            let i = resolve_intersection(&s);
            assert_eq!(i.a.is_some(), i.class.has_a(), "{s:?}");
            assert_eq!(i.b.is_some(), i.class.has_b(), "{s:?}");
            if let Some(u) = resolve_union(&s) {
                assert_eq!(u.a.is_some(), u.class.has_a(), "{s:?}");
                assert_eq!(u.b.is_some(), u.class.has_b(), "{s:?}");
            }
        }
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn results_do_not_alias_operands() {
        use num_bigint::BigInt;

        let x = Interval::closed(BigInt::from(1), BigInt::from(3));
        let y = Interval::closed(BigInt::from(2), BigInt::from(4));
        let (_, a, b) = intersection(&x, &y).into_parts();
        let (mut a, mut b) = (a.unwrap(), b.unwrap());
        a += 100;
        b *= 100;
        assert_eq!((a, b), (BigInt::from(102), BigInt::from(300)));
        assert_eq!(x, Interval::closed(BigInt::from(1), BigInt::from(3)));
        assert_eq!(y, Interval::closed(BigInt::from(2), BigInt::from(4)));
    }

    #[test]
    fn materialize_needs_resolved_pair() {
        let x = Interval::closed(1, 3);
        let y = Interval::left_bounded_open(2);
        let resolution = resolve_intersection(&Situation::classify(&x, &y));
        assert_eq!(resolution.materialize(&x, &y), Interval::left_open(2, 3));

        // Y of another class has no `A` slot to take the lower bound from.
        let other = Interval::right_bounded_open(2);
        let result = std::panic::catch_unwind(|| resolution.materialize(&x, &other));
        assert!(result.is_err());
    }
}
