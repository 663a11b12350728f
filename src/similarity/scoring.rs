use std::fmt::{self, Debug, Display};

/// Ranked search results
pub struct Hits {
    /// (document index, score)
    pub list: Vec<(usize, f64)>,
}

impl Hits {
    pub fn new(list: Vec<(usize, f64)>) -> Self {
        Hits { list }
    }

    /// Pair each score with its document index
    pub fn from_scores(scores: &[f64]) -> Self {
        Hits::new(scores.iter().copied().enumerate().collect())
    }

    /// Sort results by descending score
    /// Equal scores keep ascending document order
    pub fn sort_by_score(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|(_, s)| !s.is_nan());
        self.list
            .sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        self
    }

    /// Keep the first `n` entries
    pub fn top(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Document indices in current order
    pub fn indices(&self) -> Vec<usize> {
        self.list.iter().map(|(i, _)| *i).collect()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for (idx, score) in &self.list {
                writeln!(f, "    {}: {:.6}", idx, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, (idx, score)) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. doc {} ({:.4})", rank + 1, idx, score)?;
        }
        Ok(())
    }
}
