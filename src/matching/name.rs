//! Fuzzy counterparty-name comparison
//!
//! Bank statements rarely spell a counterparty exactly the way the invoice
//! does: legal-form suffixes come and go ("Acme" vs "Acme Oy"), and manual
//! entry introduces single-character typos. Comparison therefore tolerates
//! containment and a small, length-dependent edit distance per word, while
//! still rejecting names that genuinely differ.

use strsim::levenshtein;

use crate::normalize::normalize_name;

/// Maximum edit distance allowed for a word of the given character length
///
/// Short words get a tighter bound: a fixed threshold of 2 would let
/// four-letter words match almost anything.
pub fn max_allowed_distance(word_len: usize) -> usize {
    if word_len <= 5 {
        1
    } else {
        2
    }
}

/// Whether a word is within the edit-distance threshold of another
///
/// The threshold is taken from the first word's character length. Distances
/// are computed over characters, so accented letters count as one edit.
fn words_close(a: &str, b: &str) -> bool {
    levenshtein(a, b) <= max_allowed_distance(a.chars().count())
}

/// Whether two counterparty names refer to the same party
///
/// Case-insensitive. Accepts exact matches, containment either way
/// ("John" in "John Doe", "Acme" in "Acme Oy"), and per-word edit distance
/// within [`max_allowed_distance`]. Empty names never match.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = normalize_name(a);
    let b = normalize_name(b);

    if a.is_empty() || b.is_empty() {
        return false;
    }

    if a == b {
        return true;
    }

    if a.contains(&b) || b.contains(&a) {
        return true;
    }

    let parts_a: Vec<&str> = a.split(' ').collect();
    let parts_b: Vec<&str> = b.split(' ').collect();

    if parts_a.len() != parts_b.len() {
        // Every word of the shorter name must find a counterpart somewhere
        // in the longer one.
        let (shorter, longer) = if parts_a.len() < parts_b.len() {
            (&parts_a, &parts_b)
        } else {
            (&parts_b, &parts_a)
        };

        return shorter.iter().all(|part| {
            longer.iter().any(|other| {
                part.contains(other) || other.contains(part) || words_close(part, other)
            })
        });
    }

    // Same word count: every aligned pair must be close.
    parts_a
        .iter()
        .zip(parts_b.iter())
        .all(|(pa, pb)| words_close(pa, pb))
}
