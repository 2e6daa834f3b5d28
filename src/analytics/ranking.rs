use std::collections::HashMap;
use std::hash::Hash;

/// Counts per key, sorted by descending count.
///
/// Keys with equal counts keep the order in which they were first seen, so
/// the first entry is always the stable mode of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<K> {
    entries: Vec<(K, usize)>,
}

/// Ranked counts keyed by a text label.
pub type RankedAggregate = Ranked<String>;

impl<K> Default for Ranked<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Ranked<K> {
    /// Count `keys` and rank them.
    pub fn count<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut entries: Vec<(K, usize)> = Vec::new();

        for key in keys {
            match slots.get(&key) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    slots.insert(key.clone(), entries.len());
                    entries.push((key, 1));
                }
            }
        }

        // `sort_by` is stable: ties stay in first-seen order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }
}

impl<K> Ranked<K> {
    /// Keep only the first `n` entries.
    pub fn truncated(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    /// The most frequent key, ties going to the first seen.
    pub fn mode(&self) -> Option<&K> {
        self.entries.first().map(|(k, _)| k)
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[(K, usize)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count string slices into an owned [`RankedAggregate`].
pub fn rank_labels<'a, I>(labels: I) -> RankedAggregate
where
    I: IntoIterator<Item = &'a str>,
{
    Ranked::count(labels.into_iter().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_descending_count() {
        let ranked = rank_labels(["b", "a", "b", "c", "b", "a"]);
        assert_eq!(
            ranked.entries(),
            [
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
        assert_eq!(ranked.total(), 6);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ranked = rank_labels(["A", "B", "A", "B"]);
        assert_eq!(ranked.mode().map(String::as_str), Some("A"));

        let ranked = rank_labels(["B", "A", "A", "B"]);
        assert_eq!(ranked.mode().map(String::as_str), Some("B"));
    }

    #[test]
    fn truncation_keeps_the_largest() {
        let mut labels = Vec::new();
        for (label, count) in [("d1", 10), ("d2", 9), ("d3", 8), ("d4", 7), ("d5", 6), ("d6", 5), ("d7", 4)] {
            labels.extend(std::iter::repeat(label).take(count));
        }
        // Smallest counts first, so ranking cannot lean on input order.
        labels.reverse();

        let top = rank_labels(labels).truncated(5);
        let names: Vec<&str> = top.iter().map(|(k, _)| k.as_str()).collect();
        let counts: Vec<usize> = top.iter().map(|(_, c)| c).collect();
        assert_eq!(names, ["d1", "d2", "d3", "d4", "d5"]);
        assert_eq!(counts, [10, 9, 8, 7, 6]);
    }

    #[test]
    fn empty_input_has_no_mode() {
        let ranked = rank_labels(std::iter::empty::<&str>());
        assert!(ranked.is_empty());
        assert_eq!(ranked.mode(), None);
        assert_eq!(ranked.total(), 0);
        assert!(ranked.truncated(5).is_empty());
    }
}
