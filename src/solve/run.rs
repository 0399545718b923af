use super::{Unsatisfiable, ValueSet};
use crate::puzzle::Value;

/// One sum-constrained run of cells and the combinations of distinct digits
/// that can still fill it. The combination universe is enumerated once at
/// construction; placements narrow it and undos restore it.
#[derive(Clone, Debug)]
pub(crate) struct Run {
    combinations: Vec<ValueSet>,
}

impl Run {
    /// Enumerates every set of `len` distinct digits 1-9 summing to `target`.
    /// An empty candidate set is a legal outcome, not an error.
    pub fn new(target: Value, len: usize) -> Self {
        let mut combinations = Vec::new();
        collect_combinations(target, len, 0, ValueSet::new(), &mut combinations);
        Self { combinations }
    }

    pub fn is_infeasible(&self) -> bool {
        self.combinations.is_empty()
    }

    /// Whether any remaining combination contains `value`
    pub fn admits(&self, value: Value) -> bool {
        self.combinations.iter().any(|c| c.contains(value))
    }

    /// Narrows the candidate set to the combinations containing `value` and
    /// returns the removed rest for later restoration. Mutates nothing when
    /// no combination contains `value`.
    pub fn place(&mut self, value: Value) -> Result<Vec<ValueSet>, Unsatisfiable> {
        if !self.admits(value) {
            return Err(Unsatisfiable);
        }
        let (keep, removed) = self
            .combinations
            .drain(..)
            .partition(|c| c.contains(value));
        self.combinations = keep;
        Ok(removed)
    }

    /// Adds previously removed combinations back, in no particular order
    pub fn restore(&mut self, removed: Vec<ValueSet>) {
        self.combinations.extend(removed);
    }

    #[cfg(test)]
    pub fn combinations(&self) -> &[ValueSet] {
        &self.combinations
    }
}

/// Recursive choice with a strictly increasing floor bound, so each
/// combination is generated exactly once
fn collect_combinations(
    sum: Value,
    count: usize,
    floor: Value,
    chosen: ValueSet,
    out: &mut Vec<ValueSet>,
) {
    debug_assert!(count >= 1);
    if count == 1 {
        if sum > floor && sum < 10 {
            let mut combination = chosen;
            combination.insert(sum);
            out.push(combination);
        }
        return;
    }
    for value in floor + 1..=9 {
        let mut chosen = chosen;
        chosen.insert(value);
        collect_combinations(sum - value, count - 1, value, chosen, out);
    }
}
