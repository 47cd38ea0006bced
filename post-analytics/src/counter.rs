use std::collections::HashMap;

/// Frequency counter that remembers the order in which labels were first seen.
///
/// Rankings sort by descending count; equal counts keep first-seen order.
#[derive(Debug, Clone, Default)]
pub struct RankedCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl RankedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: impl Into<String>) {
        let label = label.into();
        match self.index.get(&label) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push((label, 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_ranked(self) -> Vec<(String, usize)> {
        let mut entries = self.entries;
        // sort_by is stable, so ties stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    pub fn top(self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.into_ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<S: Into<String>> FromIterator<S> for RankedCounter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = RankedCounter::new();
        for label in iter {
            counter.add(label);
        }
        counter
    }
}

impl<S: Into<String>> Extend<S> for RankedCounter {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for label in iter {
            self.add(label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_keeps_first_seen_order_on_ties() {
        let counter: RankedCounter = ["b", "a", "c", "a", "c", "d"].into_iter().collect();
        assert_eq!(counter.get("a"), 2);
        assert_eq!(counter.get("zzz"), 0);
        assert_eq!(
            counter.into_ranked(),
            vec![
                ("a".to_string(), 2),
                ("c".to_string(), 2),
                ("b".to_string(), 1),
                ("d".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_truncates() {
        let mut counter = RankedCounter::new();
        counter.extend(["x", "y", "y"]);
        assert_eq!(counter.len(), 2);
        assert_eq!(counter.top(1), vec![("y".to_string(), 2)]);
        assert!(RankedCounter::new().top(5).is_empty());
    }
}
