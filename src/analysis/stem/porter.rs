//! Porter stemming algorithm implementation.
//!
//! The stemmer applies the five rewrite steps of the Porter algorithm:
//! 1. Plurals and -ed/-ing suffixes
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Only ASCII words are rewritten; anything else is lower-cased and returned
//! as is, so URLs and tokens with punctuation pass through mostly intact.
//!
//! # Examples
//!
//! ```
//! use mailtab::analysis::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! ```

use crate::analysis::stem::Stemmer;

const STEP2_SUFFIXES: [(&str, &str); 20] = [
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_SUFFIXES: [(&str, &str); 7] = [
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: [&str; 19] = [
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Whether the byte at `pos` acts as a vowel. `y` is a vowel after a consonant.
fn is_vowel(word: &[u8], pos: usize) -> bool {
    match word[pos] {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' => pos > 0 && !is_vowel(word, pos - 1),
        _ => false,
    }
}

/// Number of vowel-consonant sequences in `word`.
fn measure(word: &[u8]) -> usize {
    let n = word.len();
    let mut m = 0;
    let mut i = 0;

    while i < n && !is_vowel(word, i) {
        i += 1;
    }

    while i < n {
        while i < n && is_vowel(word, i) {
            i += 1;
        }
        if i >= n {
            break;
        }
        m += 1;
        while i < n && !is_vowel(word, i) {
            i += 1;
        }
    }

    m
}

fn contains_vowel(word: &[u8]) -> bool {
    (0..word.len()).any(|i| is_vowel(word, i))
}

fn ends_with_double_consonant(word: &[u8]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && !is_vowel(word, n - 1)
}

/// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
fn ends_cvc(word: &[u8]) -> bool {
    let n = word.len();
    n >= 3
        && !is_vowel(word, n - 3)
        && is_vowel(word, n - 2)
        && !is_vowel(word, n - 1)
        && !matches!(word[n - 1], b'w' | b'x' | b'y')
}

fn strip<'a>(word: &'a str, suffix: &str) -> &'a str {
    &word[..word.len() - suffix.len()]
}

/// Replace `old` with `new` when the remaining stem has at least `min_measure`.
fn replace_suffix(word: &str, old: &str, new: &str, min_measure: usize) -> String {
    if word.ends_with(old) {
        let stem = strip(word, old);
        if measure(stem.as_bytes()) >= min_measure {
            return format!("{stem}{new}");
        }
    }
    word.to_string()
}

/// Porter stemmer for lower-case English words.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        PorterStemmer
    }

    fn step1a(word: &str) -> String {
        if word.ends_with("sses") {
            format!("{}ss", strip(word, "sses"))
        } else if word.ends_with("ies") {
            format!("{}i", strip(word, "ies"))
        } else if word.ends_with("ss") {
            word.to_string()
        } else if word.ends_with('s') && word.len() > 1 {
            strip(word, "s").to_string()
        } else {
            word.to_string()
        }
    }

    fn step1b(word: &str) -> String {
        let stripped = if word.ends_with("eed") {
            replace_suffix(word, "eed", "ee", 1)
        } else if let Some(stem) = ["ed", "ing"]
            .iter()
            .find(|suffix| word.ends_with(*suffix))
            .map(|suffix| strip(word, suffix))
        {
            if contains_vowel(stem.as_bytes()) {
                stem.to_string()
            } else {
                word.to_string()
            }
        } else {
            word.to_string()
        };

        if stripped == word {
            return stripped;
        }

        let bytes = stripped.as_bytes();
        if stripped.ends_with("at") || stripped.ends_with("bl") || stripped.ends_with("iz") {
            format!("{stripped}e")
        } else if ends_with_double_consonant(bytes) && !matches!(bytes[bytes.len() - 1], b'l' | b's' | b'z') {
            stripped[..stripped.len() - 1].to_string()
        } else if measure(bytes) == 1 && ends_cvc(bytes) {
            format!("{stripped}e")
        } else {
            stripped
        }
    }

    fn step2(word: &str) -> String {
        STEP2_SUFFIXES
            .iter()
            .find(|(old, _)| word.ends_with(old))
            .map(|(old, new)| replace_suffix(word, old, new, 1))
            .unwrap_or_else(|| word.to_string())
    }

    fn step3(word: &str) -> String {
        STEP3_SUFFIXES
            .iter()
            .find(|(old, _)| word.ends_with(old))
            .map(|(old, new)| replace_suffix(word, old, new, 1))
            .unwrap_or_else(|| word.to_string())
    }

    fn step4(word: &str) -> String {
        for suffix in STEP4_SUFFIXES {
            if !word.ends_with(suffix) {
                continue;
            }
            let stem = strip(word, suffix);
            // -ion only goes after s or t
            if measure(stem.as_bytes()) > 1
                && (suffix != "ion" || stem.ends_with('s') || stem.ends_with('t'))
            {
                return stem.to_string();
            }
        }
        word.to_string()
    }

    fn step5(word: &str) -> String {
        let word = if word.ends_with('e') {
            let stem = strip(word, "e");
            let m = measure(stem.as_bytes());
            if m > 1 || (m == 1 && !ends_cvc(stem.as_bytes())) {
                stem
            } else {
                word
            }
        } else {
            word
        };

        if word.ends_with("ll") && measure(word.as_bytes()) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word.to_string()
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let word = Self::step1a(&word);
        let word = Self::step1b(&word);
        let word = Self::step2(&word);
        let word = Self::step3(&word);
        let word = Self::step4(&word);
        Self::step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
