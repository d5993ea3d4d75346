use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts that remember the order values were first seen in.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<T> {
    first_seen: Vec<T>,
    counts: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> FrequencyCounter<T> {
    pub fn new() -> Self {
        FrequencyCounter {
            first_seen: Vec::new(),
            counts: HashMap::new(),
        }
    }

    pub fn add(&mut self, value: T) {
        let count = self.counts.entry(value.clone()).or_insert_with(|| {
            self.first_seen.push(value);
            0
        });
        *count += 1;
    }

    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// The `n` most frequent values with their counts, highest first.
    /// Ties keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(T, usize)> {
        let mut ranked: Vec<(T, usize)> = self
            .first_seen
            .iter()
            .map(|value| (value.clone(), self.count(value)))
            .collect();

        // sort_by is stable, so equal counts stay in first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<T> {
        self.most_common(n).into_iter().map(|(value, _)| value).collect()
    }
}

impl<T: Eq + Hash + Clone> Default for FrequencyCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for FrequencyCounter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyCounter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = FrequencyCounter::new();
        counter.extend(iter);
        counter
    }
}
