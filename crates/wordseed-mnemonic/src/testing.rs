//! Test helpers: synthetic word lists with controlled contents.

use crate::{Language, Wordlist, WordlistRegistry};

/// Build a 2048-word list starting with `seeds` and padded with
/// `{filler}0000`, `{filler}0001`, ... up to the full length.
pub(crate) fn synthetic(language: Language, seeds: &[&str], filler: &str) -> Wordlist {
    let words = seeds
        .iter()
        .map(|s| s.to_string())
        .chain((seeds.len()..2048).map(|i| format!("{filler}{i:04}")))
        .collect::<Vec<_>>();
    Wordlist::new(language, words).unwrap()
}

/// Build a registry from synthetic lists.
pub(crate) fn registry(lists: Vec<Wordlist>) -> WordlistRegistry {
    let mut registry = WordlistRegistry::new();
    for list in lists {
        registry.insert(list);
    }
    registry
}
