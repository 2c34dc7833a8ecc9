use std::collections::HashMap;

/// A multiset of characters. Whitespace is dropped and letters are
/// case-folded on both sides of a query, so "Car E" carries the same
/// letters as "care".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: HashMap<char, usize>,
}

fn letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
}

impl LetterBag {
    pub fn new(source: &str) -> Self {
        let mut counts = HashMap::new();
        for c in letters(source) {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// True iff every character of the candidate is available with at
    /// least the required multiplicity. The empty candidate always fits.
    pub fn contains(&self, candidate: &str) -> bool {
        let mut needed: HashMap<char, usize> = HashMap::new();
        for c in letters(candidate) {
            *needed.entry(c).or_insert(0) += 1;
        }
        needed
            .iter()
            .all(|(c, n)| self.counts.get(c).is_some_and(|have| have >= n))
    }
}
