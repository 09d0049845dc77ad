//! The multiset of values removed from a solved grid.

use std::collections::{BTreeMap, btree_map::Entry};

/// A multiset of numbers available for placement into holes.
///
/// # Examples
///
/// ```
/// use mathgrid_core::Bank;
///
/// let mut bank: Bank = [3, 7, 3].into_iter().collect();
/// assert_eq!(bank.count(3), 2);
///
/// bank.take(3)?;
/// assert_eq!(bank.to_vec(), [3, 7]);
/// assert!(bank.take(9).is_err());
/// # Ok::<(), mathgrid_core::BankError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bank {
    counts: BTreeMap<i64, usize>,
    len: usize,
}

/// Error returned when taking a value the bank does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BankError {
    /// The value is not in the bank.
    #[display("{_0} is not in the bank")]
    Missing(#[error(not(source))] i64),
}

impl Bank {
    /// Creates an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one copy of `value`.
    pub fn insert(&mut self, value: i64) {
        *self.counts.entry(value).or_default() += 1;
        self.len += 1;
    }

    /// Removes one copy of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::Missing`] if the bank holds no copy of `value`.
    pub fn take(&mut self, value: i64) -> Result<(), BankError> {
        let Entry::Occupied(mut entry) = self.counts.entry(value) else {
            return Err(BankError::Missing(value));
        };
        if *entry.get() == 1 {
            entry.remove();
        } else {
            *entry.get_mut() -= 1;
        }
        self.len -= 1;
        Ok(())
    }

    /// Returns `true` if at least one copy of `value` is present.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.counts.contains_key(&value)
    }

    /// Returns the number of copies of `value`.
    #[must_use]
    pub fn count(&self, value: i64) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Returns the total number of values, counting repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bank holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over `(value, count)` in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    /// Returns every value, repeats included, in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter()
            .flat_map(|(value, count)| std::iter::repeat_n(value, count))
            .collect()
    }
}

impl FromIterator<i64> for Bank {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut bank = Self::new();
        bank.extend(iter);
        bank
    }
}

impl Extend<i64> for Bank {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_take_last_copy_removes_value() {
        let mut bank: Bank = [4].into_iter().collect();
        assert!(bank.contains(4));
        bank.take(4).unwrap();
        assert!(!bank.contains(4));
        assert!(bank.is_empty());
        assert_eq!(bank.take(4), Err(BankError::Missing(4)));
        assert_eq!(bank.len(), 0);
    }

    proptest! {
        #[test]
        fn take_then_insert_restores(values in prop::collection::vec(-20_i64..20, 1..30), pick in any::<prop::sample::Index>()) {
            let original: Bank = values.iter().copied().collect();
            let value = *pick.get(&values);
            let mut bank = original.clone();
            bank.take(value).unwrap();
            prop_assert_eq!(bank.len(), values.len() - 1);
            bank.insert(value);
            prop_assert_eq!(&bank, &original);

            let mut sorted = values.clone();
            sorted.sort_unstable();
            prop_assert_eq!(original.to_vec(), sorted);
        }
    }
}
