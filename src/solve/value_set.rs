use std::fmt;
use std::fmt::Debug;

use crate::puzzle::Value;

/// A set of digits 1-9 backed by a bitmask. Used for cell domains, for
/// run combinations and for row/column used-digit sets.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ValueSet(u16);

impl ValueSet {
    pub fn new() -> Self {
        ValueSet(0)
    }

    pub fn contains(self, n: Value) -> bool {
        debug_assert!((1..=9).contains(&n));
        self.0 & (1 << n) != 0
    }

    pub fn insert(&mut self, n: Value) -> bool {
        if self.contains(n) {
            return false;
        }
        self.0 |= 1 << n;
        true
    }

    pub fn remove(&mut self, n: Value) -> bool {
        if !self.contains(n) {
            return false;
        }
        self.0 &= !(1 << n);
        true
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Value> {
        (1..=9).filter(move |&n| self.contains(n))
    }
}

impl Debug for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
