use indexmap::IndexMap;

/// A single sample's gene quantification result: an ordered mapping from
/// gene identifier to a non-negative read count, tagged with exactly one
/// sample name.
///
/// Gene keys are unique within a table. If a source file repeats a key the
/// last value wins while the key keeps its first-seen position; upstream
/// quantifiers do not emit duplicates, so this is not re-validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCountTable {
    sample:     String,
    key_column: String,
    counts:     IndexMap<String, u64>,
}

impl SampleCountTable {
    pub fn new<S1, S2>(
        sample: S1,
        key_column: S2,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>, {
        Self {
            sample:     sample.into(),
            key_column: key_column.into(),
            counts:     IndexMap::new(),
        }
    }

    /// Inserts a count for a gene. Returns the previous value if the key
    /// was already present (last write wins).
    pub fn insert<S: Into<String>>(
        &mut self,
        gene: S,
        count: u64,
    ) -> Option<u64> {
        self.counts.insert(gene.into(), count)
    }

    /// Looks up the count for a gene, or `None` if this sample's
    /// quantification output did not mention it.
    pub fn get(
        &self,
        gene: &str,
    ) -> Option<u64> {
        self.counts.get(gene).copied()
    }

    pub fn sample(&self) -> &str { &self.sample }

    /// Name of the gene identifier column from the source file header.
    pub fn key_column(&self) -> &str { &self.key_column }

    /// Gene identifiers in first-seen order.
    pub fn genes(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(gene, count)| (gene.as_str(), *count))
    }

    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }
}
