//! Knapsack problem definition.

use crate::error::Error;

/// One item of the knapsack catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackItem {
    /// Weight counted against the capacity.
    pub weight: u64,
    /// Value earned when the item is packed.
    pub value: u64,
}

impl KnapsackItem {
    /// Creates an item.
    pub fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

/// A binary knapsack instance: a fixed item catalog and a capacity.
///
/// # Examples
///
/// ```
/// use metaswarm::ga::{KnapsackItem, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(
///     vec![
///         KnapsackItem::new(2, 3),
///         KnapsackItem::new(3, 4),
///         KnapsackItem::new(4, 5),
///     ],
///     5,
/// )
/// .unwrap();
///
/// // Items 0 and 1 fit (weight 5) for value 7.
/// assert_eq!(problem.evaluate(&[true, true, false]).unwrap(), 7.0);
/// // Overweight selections earn exactly zero.
/// assert_eq!(problem.evaluate(&[true, true, true]).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    items: Vec<KnapsackItem>,
    capacity: u64,
}

impl KnapsackProblem {
    /// Creates a problem instance.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if the catalog has fewer than
    /// two items (single-point crossover needs an interior cut) or the
    /// capacity is zero.
    pub fn new(items: Vec<KnapsackItem>, capacity: u64) -> Result<Self, Error> {
        if items.len() < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "item catalog must contain at least 2 items, got {}",
                items.len()
            )));
        }
        if capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "capacity must be positive".into(),
            ));
        }
        Ok(Self { items, capacity })
    }

    /// The item catalog.
    pub fn items(&self) -> &[KnapsackItem] {
        &self.items
    }

    /// Number of items, which is also the genome length.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The knapsack capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Total weight of the selected items.
    pub fn total_weight(&self, genome: &[bool]) -> u64 {
        self.items
            .iter()
            .zip(genome)
            .filter(|(_, &selected)| selected)
            .map(|(item, _)| item.weight)
            .sum()
    }

    /// Total value of the selected items, ignoring capacity.
    pub fn total_value(&self, genome: &[bool]) -> u64 {
        self.items
            .iter()
            .zip(genome)
            .filter(|(_, &selected)| selected)
            .map(|(item, _)| item.value)
            .sum()
    }

    /// Fitness of a genome: total value if the selection fits,
    /// otherwise exactly zero.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if the genome length differs from
    /// the catalog size.
    pub fn evaluate(&self, genome: &[bool]) -> Result<f64, Error> {
        if genome.len() != self.items.len() {
            return Err(Error::InvalidDimension {
                expected: self.items.len(),
                actual: genome.len(),
            });
        }
        if self.total_weight(genome) > self.capacity {
            return Ok(0.0);
        }
        Ok(self.total_value(genome) as f64)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The ten-item instance the engine was originally tuned on.
    pub(crate) fn ten_item_problem() -> KnapsackProblem {
        KnapsackProblem::new(
            vec![
                KnapsackItem::new(2, 3),
                KnapsackItem::new(3, 4),
                KnapsackItem::new(4, 5),
                KnapsackItem::new(5, 8),
                KnapsackItem::new(9, 10),
                KnapsackItem::new(6, 7),
                KnapsackItem::new(7, 9),
                KnapsackItem::new(8, 11),
                KnapsackItem::new(10, 13),
                KnapsackItem::new(12, 15),
            ],
            30,
        )
        .unwrap()
    }

    #[test]
    fn test_feasible_selection_scores_value() {
        let p = ten_item_problem();
        let mut genome = vec![false; 10];
        genome[0] = true;
        genome[1] = true;
        assert_eq!(p.total_weight(&genome), 5);
        assert_eq!(p.evaluate(&genome).unwrap(), 7.0);
    }

    #[test]
    fn test_overweight_scores_zero() {
        let p = ten_item_problem();
        let genome = vec![true; 10];
        assert!(p.total_weight(&genome) > p.capacity());
        assert_eq!(p.evaluate(&genome).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_selection_scores_zero() {
        let p = ten_item_problem();
        assert_eq!(p.evaluate(&vec![false; 10]).unwrap(), 0.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let p = ten_item_problem();
        assert!(matches!(
            p.evaluate(&[true, false]),
            Err(Error::InvalidDimension {
                expected: 10,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_rejects_tiny_catalog() {
        assert!(KnapsackProblem::new(vec![KnapsackItem::new(1, 1)], 5).is_err());
        assert!(KnapsackProblem::new(vec![], 5).is_err());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let items = vec![KnapsackItem::new(1, 1), KnapsackItem::new(2, 2)];
        assert!(KnapsackProblem::new(items, 0).is_err());
    }
}
