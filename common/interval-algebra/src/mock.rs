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

//! Checks of interval algebra against point membership on sample values.
//!
//! `samples` must be sorted ascending. Checks of [`union`](crate::union) returning `None`
//! also need `samples` to be dense around the bounds: a sample below the least bound,
//! above the greatest one, at each bound and strictly between any two bounds.

use crate::{Bound, Class, Interval};
use core::fmt::Debug;

/// Returns whether `membership` has a `false` between two `true`s.
pub fn is_disconnected(membership: impl IntoIterator<Item = bool>) -> bool {
    let mut membership = membership.into_iter().skip_while(|m| !m);
    membership.by_ref().find(|m| !m);
    membership.any(|m| m)
}

/// Checks that `x ∩ y` contains exactly the samples contained by both `x` and `y`,
/// and that operands order doesn't matter.
pub fn test_intersection<T: Bound + Debug>(x: &Interval<T>, y: &Interval<T>, samples: &[T]) {
    let result = x.intersection(y);
    log::debug!("{x:?} ∩ {y:?} = {result:?}");

    for v in samples {
        assert_eq!(
            result.contains(v),
            x.contains(v) && y.contains(v),
            "{x:?} ∩ {y:?} = {result:?}, sample {v:?}"
        );
    }

    let swapped = y.intersection(x);
    assert!(result.equivalent(&swapped), "{result:?} != {swapped:?}");
}

/// Checks that `x ∪ y` contains exactly the samples contained by `x` or `y`,
/// that `None` is returned only for disconnected samples,
/// and that operands order doesn't matter.
pub fn test_union<T: Bound + Debug>(x: &Interval<T>, y: &Interval<T>, samples: &[T]) {
    let result = x.union(y);
    log::debug!("{x:?} ∪ {y:?} = {result:?}");

    let swapped = y.union(x);
    match (&result, &swapped) {
        (Some(result), Some(swapped)) => {
            assert!(result.equivalent(swapped), "{result:?} != {swapped:?}");
            if result.is_empty() {
                assert!(x.is_empty() && y.is_empty());
            }
            for v in samples {
                assert_eq!(
                    result.contains(v),
                    x.contains(v) || y.contains(v),
                    "{x:?} ∪ {y:?} = {result:?}, sample {v:?}"
                );
            }
        }
        (None, None) => {
            let membership = samples.iter().map(|v| x.contains(v) || y.contains(v));
            assert!(is_disconnected(membership), "{x:?} ∪ {y:?} is connected");
        }
        _ => panic!("{x:?} ∪ {y:?} = {result:?}, but {y:?} ∪ {x:?} = {swapped:?}"),
    }
}

/// Checks `x ∩ x ≡ x` and `x ∪ x ≡ x`.
pub fn test_idempotence<T: Bound + Debug>(x: &Interval<T>) {
    let i = x.intersection(x);
    assert!(i.equivalent(x), "{x:?} ∩ {x:?} = {i:?}");
    let u = x.union(x);
    assert!(u.as_ref().is_some_and(|u| u.equivalent(x)), "{x:?} ∪ {x:?} = {u:?}");
}

/// Checks that algebra commutes with an order preserving map `f` from `T` to `U`:
/// results for mapped operands are the mapped results.
pub fn test_cross_type<T, U>(x: &Interval<T>, y: &Interval<T>, f: impl Fn(T) -> U)
where
    T: Bound + Debug,
    U: Bound + Debug,
{
    let (mx, my) = (x.clone().map(&f), y.clone().map(&f));

    let expected = x.intersection(y).map(&f);
    let actual = mx.intersection(&my);
    assert!(actual.equivalent(&expected), "{actual:?} != {expected:?}");

    let expected = x.union(y).map(|u| u.map(&f));
    let actual = mx.union(&my);
    match (actual, expected) {
        (Some(actual), Some(expected)) => {
            assert!(actual.equivalent(&expected), "{actual:?} != {expected:?}")
        }
        (None, None) => {}
        (actual, expected) => panic!("{actual:?} != {expected:?}"),
    }
}

/// Builds interval of `class` taking `a` and `b` only if the class stores them.
pub fn interval_of<T>(class: Class, a: T, b: T) -> Interval<T> {
    let a = class.has_a().then_some(a);
    let b = class.has_b().then_some(b);
    match Interval::new(class, a, b) {
        Ok(interval) => interval,
        Err(err) => unreachable!("shape is taken from class: {err}"),
    }
}
