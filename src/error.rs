use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error("unknown product family '{name}'{}", suggestion_hint(.suggestion))]
    UnknownFamily {
        name: String,
        suggestion: Option<String>,
    },

    #[error("unknown demo '{0}' (expected abstract-factory, factory-method or all)")]
    UnknownDemo(String),
}

impl DemoError {
    pub fn unknown_family(name: impl Into<String>, known: &[&str]) -> Self {
        let name = name.into();
        let suggestion = find_similar(&name, known);
        Self::UnknownFamily { name, suggestion }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(", did you mean '{s}'?"),
        None => String::new(),
    }
}

// =============================================================================
// Typo recovery
// =============================================================================

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for i in 1..=a_chars.len() {
        curr[0] = i;
        for j in 1..=b_chars.len() {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Closest candidate within an edit distance of 2, compared case-insensitively.
pub fn find_similar(typo: &str, candidates: &[&str]) -> Option<String> {
    const MAX_DISTANCE: usize = 2;
    let typo = typo.to_ascii_lowercase();

    candidates
        .iter()
        .map(|&c| (c, levenshtein_distance(&typo, &c.to_ascii_lowercase())))
        .filter(|&(_, d)| d <= MAX_DISTANCE)
        .min_by_key(|&(_, d)| d)
        .map(|(c, _)| c.to_string())
}
