/// Insertion-order-preserving counter from class label to number of records.
///
/// Backed by a `Vec` rather than a hash map so iteration, and therefore
/// majority-tie enumeration, always follows first-encounter order. Entries
/// only exist once observed, so a zero count can never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDistribution {
    counts: Vec<(String, u64)>,
}

impl LabelDistribution {
    pub fn new() -> Self {
        Self { counts: Vec::new() }
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distribution = Self::new();
        for label in labels {
            distribution.observe(label.as_ref());
        }
        distribution
    }

    /// Counts one more record carrying `label`, registering the label at the
    /// back of the iteration order on first sight.
    pub fn observe(&mut self, label: &str) {
        match self.counts.iter_mut().find(|(known, _)| known == label) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((label.to_string(), 1)),
        }
    }

    pub fn count(&self, label: &str) -> u64 {
        self.counts
            .iter()
            .find(|(known, _)| known == label)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Every label tied for the maximum count, in encounter order.
    pub fn majority_labels(&self) -> Vec<&str> {
        let max = self.counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
        self.counts
            .iter()
            .filter(|(_, count)| *count == max)
            .map(|(label, _)| label.as_str())
            .collect()
    }

    /// Adds every count of `other` into this distribution; labels unseen so
    /// far join at the back of the order.
    pub fn merge(&mut self, other: &LabelDistribution) {
        for (label, count) in other.iter() {
            match self.counts.iter_mut().find(|(known, _)| known == label) {
                Some((_, existing)) => *existing += count,
                None => self.counts.push((label.to_string(), count)),
            }
        }
    }
}
