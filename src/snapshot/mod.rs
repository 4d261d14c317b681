//! The observed state of a watched value at one instant.
//!
//! Collection checks only apply to values that expose their items; scalar
//! values (a count, a flag, a string) report `None` and fall back to plain
//! change detection.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

pub trait Snapshot: Clone + PartialEq + Debug {
    type Item: Clone + PartialEq + Debug;

    /// Items of the snapshot in iteration order, or `None` when the value is
    /// not a collection.
    fn items(&self) -> Option<Vec<Self::Item>>;

    /// `true` only for a collection with no items; scalars are never empty.
    fn is_empty_collection(&self) -> bool {
        false
    }
}

impl<T: Clone + PartialEq + Debug> Snapshot for Vec<T> {
    type Item = T;

    fn items(&self) -> Option<Vec<T>> {
        Some(self.clone())
    }

    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Clone + PartialEq + Debug> Snapshot for VecDeque<T> {
    type Item = T;

    fn items(&self) -> Option<Vec<T>> {
        Some(self.iter().cloned().collect())
    }

    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Clone + PartialEq + Debug, const N: usize> Snapshot for [T; N] {
    type Item = T;

    fn items(&self) -> Option<Vec<T>> {
        Some(self.to_vec())
    }

    fn is_empty_collection(&self) -> bool {
        N == 0
    }
}

impl<T: Clone + Ord + Debug> Snapshot for BTreeSet<T> {
    type Item = T;

    fn items(&self) -> Option<Vec<T>> {
        Some(self.iter().cloned().collect())
    }

    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Clone + Eq + Hash + Debug> Snapshot for HashSet<T> {
    type Item = T;

    fn items(&self) -> Option<Vec<T>> {
        Some(self.iter().cloned().collect())
    }

    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! scalar_snapshot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Snapshot for $ty {
                type Item = $ty;

                fn items(&self) -> Option<Vec<$ty>> {
                    None
                }
            }
        )*
    };
}

scalar_snapshot!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, String, &'static str, (),
);
