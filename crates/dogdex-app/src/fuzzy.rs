//! Typo-tolerant breed lookup.
//!
//! No ratatui dependencies. Scores are in `0.0..=1.0`-ish where lower is
//! better: the number of edits needed to find the query inside a target,
//! divided by the query length, plus a small penalty for how far into the
//! target the match starts. Candidates scoring above the threshold are
//! dropped.

/// Default cut-off; larger values accept sloppier matches
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Each character of offset from the start costs `1 / LOCATION_DISTANCE`
const LOCATION_DISTANCE: f64 = 100.0;

/// A ranked hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    /// Position of the entry in the corpus
    pub index: usize,
    pub score: f64,
}

/// Breed names prepared for repeated queries
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyIndex {
    entries: Vec<String>,
    lowered: Vec<Vec<char>>,
    threshold: f64,
}

impl Default for FuzzyIndex {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_THRESHOLD)
    }
}

impl FuzzyIndex {
    pub fn new(entries: Vec<String>, threshold: f64) -> Self {
        let lowered = entries
            .iter()
            .map(|entry| entry.to_lowercase().chars().collect())
            .collect();
        Self {
            entries,
            lowered,
            threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Entries matching `query`, best first; ties keep corpus order
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<FuzzyMatch> {
        let query: Vec<char> = query.trim().to_lowercase().chars().collect();
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<FuzzyMatch> = self
            .lowered
            .iter()
            .enumerate()
            .filter_map(|(index, target)| {
                let score = match_score(&query, target, self.threshold);
                (score <= self.threshold).then_some(FuzzyMatch { index, score })
            })
            .collect();

        matches.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.index.cmp(&b.index)));
        matches
    }
}

/// Best score of `query` over every start offset in `target`
fn match_score(query: &[char], target: &[char], threshold: f64) -> f64 {
    let mut best = f64::INFINITY;
    for start in 0..=target.len() {
        let location_penalty = start as f64 / LOCATION_DISTANCE;
        if location_penalty > threshold || location_penalty >= best {
            break;
        }
        let errors = edits_from(query, &target[start..]);
        let score = errors as f64 / query.len() as f64 + location_penalty;
        if score < best {
            best = score;
        }
    }
    best
}

/// Fewest edits turning `query` into some prefix of `target`
///
/// Optimal string alignment distance, so an adjacent swap costs one edit.
fn edits_from(query: &[char], target: &[char]) -> usize {
    let rows = query.len() + 1;
    let cols = target.len() + 1;
    let mut dist = vec![vec![0usize; cols]; rows];

    for (i, row) in dist.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dist[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = usize::from(query[i - 1] != target[j - 1]);
            let mut best = (dist[i - 1][j] + 1)
                .min(dist[i][j - 1] + 1)
                .min(dist[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && query[i - 1] == target[j - 2] && query[i - 2] == target[j - 1] {
                best = best.min(dist[i - 2][j - 2] + 1);
            }
            dist[i][j] = best;
        }
    }

    dist[rows - 1].iter().copied().min().unwrap_or(query.len())
}
