use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Build the puzzle string: draw `target_count` words from the vocabulary
/// without replacement, join them with single spaces, and shuffle the whole
/// character sequence. The spaces take part in the shuffle, so word
/// boundaries end up anywhere in the output.
///
/// `target_count` larger than the vocabulary is clamped; zero (or an empty
/// vocabulary) yields the empty string.
pub fn jumbled(vocab: &[String], target_count: usize, rng: &mut impl Rng) -> String {
    let count = target_count.min(vocab.len());
    if count == 0 {
        return String::new();
    }
    let chosen: Vec<&str> = vocab
        .choose_multiple(rng, count)
        .map(String::as_str)
        .collect();
    let mut sequence: Vec<char> = chosen.join(" ").chars().collect();
    sequence.shuffle(rng);
    sequence.into_iter().collect()
}
