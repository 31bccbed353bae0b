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

//! [`Class`] of an interval and its shape signature.

use core::cmp::Ordering;
use enum_iterator::Sequence;
use scale_info::{
    TypeInfo,
    scale::{Decode, Encode},
};

/// Storage slot of an interval bound: `A` holds the low bound, `B` the high one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Low bound slot.
    A,
    /// High bound slot.
    B,
}

/// One end of a class shape: which slot stores the value and whether it is included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Slot holding the end value.
    pub slot: Slot,
    /// Whether the end value itself belongs to the interval.
    pub inclusive: bool,
}

impl Endpoint {
    const fn new(slot: Slot, inclusive: bool) -> Self {
        Self { slot, inclusive }
    }
}

/// Canonical shape of an interval.
///
/// Each class fixes which of the `A` (low) and `B` (high) bounds an interval carries
/// and whether each carried bound is inclusive. Discriminants are stable and are used
/// in [`SituationKey`](crate::SituationKey) encoding.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Sequence,
    TypeInfo,
    Encode,
    Decode,
    derive_more::Display,
)]
#[codec(crate = scale_info::scale)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Class {
    /// `(-∞, ∞)`.
    Unbounded,
    /// `{}`.
    Empty,
    /// `[a, a] = {a}`.
    Degenerate,
    /// `(a, b) = {x | a < x < b}`.
    Open,
    /// `[a, b] = {x | a ≤ x ≤ b}`.
    Closed,
    /// `(a, b] = {x | a < x ≤ b}`.
    LeftOpen,
    /// `[a, b) = {x | a ≤ x < b}`.
    LeftClosed,
    /// `(a, ∞) = {x | x > a}`.
    LeftBoundedOpen,
    /// `[a, ∞) = {x | x ≥ a}`.
    LeftBoundedClosed,
    /// `(-∞, b) = {x | x < b}`.
    RightBoundedOpen,
    /// `(-∞, b] = {x | x ≤ b}`.
    RightBoundedClosed,
}

impl Class {
    /// Amount of classes.
    pub const COUNT: u8 = 11;

    /// Returns stable numeric code of the class, `0..Self::COUNT`.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns class for `code`, if `code` is in `0..Self::COUNT`.
    pub fn from_code(code: u8) -> Option<Self> {
        enum_iterator::all::<Self>().nth(code as usize)
    }

    /// Returns whether interval of this class stores a value in slot `A`.
    pub const fn has_a(self) -> bool {
        matches!(
            self,
            Self::Degenerate
                | Self::Open
                | Self::Closed
                | Self::LeftOpen
                | Self::LeftClosed
                | Self::LeftBoundedOpen
                | Self::LeftBoundedClosed
        )
    }

    /// Returns whether interval of this class stores a value in slot `B`.
    ///
    /// [`Class::Degenerate`] keeps its single value in `A` only.
    pub const fn has_b(self) -> bool {
        matches!(
            self,
            Self::Open
                | Self::Closed
                | Self::LeftOpen
                | Self::LeftClosed
                | Self::RightBoundedOpen
                | Self::RightBoundedClosed
        )
    }

    /// Returns whether slot `s` is stored for this class.
    pub const fn has(self, s: Slot) -> bool {
        match s {
            Slot::A => self.has_a(),
            Slot::B => self.has_b(),
        }
    }

    /// Returns `true` for `Open`, `Closed`, `LeftOpen` and `LeftClosed`:
    /// classes which require `a < b`.
    pub const fn is_proper(self) -> bool {
        matches!(
            self,
            Self::Open | Self::Closed | Self::LeftOpen | Self::LeftClosed
        )
    }

    /// Lower end of the shape, `None` if unbounded below.
    ///
    /// Meaningless for [`Class::Empty`], which also returns `None`.
    pub const fn lower(self) -> Option<Endpoint> {
        match self {
            Self::Unbounded | Self::Empty | Self::RightBoundedOpen | Self::RightBoundedClosed => {
                None
            }
            Self::Degenerate | Self::Closed | Self::LeftClosed | Self::LeftBoundedClosed => {
                Some(Endpoint::new(Slot::A, true))
            }
            Self::Open | Self::LeftOpen | Self::LeftBoundedOpen => {
                Some(Endpoint::new(Slot::A, false))
            }
        }
    }

    /// Upper end of the shape, `None` if unbounded above.
    ///
    /// Upper end of [`Class::Degenerate`] is its `A` slot.
    /// Meaningless for [`Class::Empty`], which also returns `None`.
    pub const fn upper(self) -> Option<Endpoint> {
        match self {
            Self::Unbounded | Self::Empty | Self::LeftBoundedOpen | Self::LeftBoundedClosed => None,
            Self::Degenerate => Some(Endpoint::new(Slot::A, true)),
            Self::Closed | Self::LeftOpen | Self::RightBoundedClosed => {
                Some(Endpoint::new(Slot::B, true))
            }
            Self::Open | Self::LeftClosed | Self::RightBoundedOpen => {
                Some(Endpoint::new(Slot::B, false))
            }
        }
    }

    /// Maps resolved ends back to a class.
    ///
    /// `lower` and `upper` are `None` for an unbounded side, or `Some(inclusive)`.
    /// `order` returns ordering of the lower value against the upper value;
    /// it is called only when both sides are bounded.
    pub fn derive(
        lower: Option<bool>,
        upper: Option<bool>,
        order: impl FnOnce() -> Ordering,
    ) -> Self {
        match (lower, upper) {
            (None, None) => Self::Unbounded,
            (Some(false), None) => Self::LeftBoundedOpen,
            (Some(true), None) => Self::LeftBoundedClosed,
            (None, Some(false)) => Self::RightBoundedOpen,
            (None, Some(true)) => Self::RightBoundedClosed,
            (Some(l), Some(u)) => match order() {
                Ordering::Greater => Self::Empty,
                Ordering::Equal if l && u => Self::Degenerate,
                Ordering::Equal => Self::Empty,
                Ordering::Less => match (l, u) {
                    (false, false) => Self::Open,
                    (true, true) => Self::Closed,
                    (false, true) => Self::LeftOpen,
                    (true, false) => Self::LeftClosed,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        for (code, class) in enum_iterator::all::<Class>().enumerate() {
            assert_eq!(class.code() as usize, code);
            assert_eq!(Class::from_code(code as u8), Some(class));
        }
        assert_eq!(enum_iterator::cardinality::<Class>(), Class::COUNT as usize);
        assert_eq!(Class::from_code(Class::COUNT), None);
    }

    #[test]
    fn ends_agree_with_slots() {
        for class in enum_iterator::all::<Class>() {
            let lower_slot = class.lower().map(|e| e.slot);
            let upper_slot = class.upper().map(|e| e.slot);
            assert_eq!(lower_slot.is_some(), class.has_a(), "{class}");
            assert!(lower_slot.is_none_or(|s| s == Slot::A));
            match class {
                Class::Degenerate => assert_eq!(upper_slot, Some(Slot::A)),
                _ => assert_eq!(upper_slot.is_some(), class.has_b(), "{class}"),
            }
        }
    }

    #[test]
    fn derive_inverts_shape() {
        for class in enum_iterator::all::<Class>() {
            if class == Class::Empty {
                continue;
            }
            let order = if class == Class::Degenerate {
                Ordering::Equal
            } else {
                Ordering::Less
            };
            let lower = class.lower().map(|e| e.inclusive);
            let upper = class.upper().map(|e| e.inclusive);
            assert_eq!(Class::derive(lower, upper, || order), class);
        }
    }

    #[test]
    fn derive_empty() {
        assert_eq!(
            Class::derive(Some(true), Some(true), || Ordering::Greater),
            Class::Empty
        );
        assert_eq!(
            Class::derive(Some(true), Some(false), || Ordering::Equal),
            Class::Empty
        );
        assert_eq!(
            Class::derive(Some(false), Some(false), || Ordering::Equal),
            Class::Empty
        );
    }

    #[test]
    fn derive_skips_order_for_half_bounded() {
        let panic = || -> Ordering { panic!("must not be compared") };
        assert_eq!(Class::derive(None, None, panic), Class::Unbounded);
        assert_eq!(Class::derive(Some(true), None, panic), Class::LeftBoundedClosed);
        assert_eq!(Class::derive(None, Some(false), panic), Class::RightBoundedOpen);
    }

    #[test]
    fn display() {
        assert_eq!(alloc::format!("{}", Class::LeftBoundedOpen), "LeftBoundedOpen");
    }
}
