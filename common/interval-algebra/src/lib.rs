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

//! Intersection and union of intervals over any totally ordered bound type.
//!
//! An [`Interval`] is one of eleven [`Class`]es plus the bound values its shape needs.
//! [`intersection`] and [`union`] derive the result class and bounds from at most four
//! [`Bound::compare`] calls, never inspecting bound values in any other way.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod algebra;
pub mod bound;
pub mod class;
pub mod interval;
pub mod situation;

#[cfg(any(feature = "mock", test))]
pub mod mock;


pub use algebra::{Resolution, intersection, union};
pub use bound::Bound;
pub use class::{Class, Slot};
pub use interval::{Interval, IntervalError};
pub use situation::{Comparison, Situation, SituationKey};
