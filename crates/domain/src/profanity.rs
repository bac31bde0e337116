use std::collections::BTreeSet;

const DEFAULT_WORDS: &[&str] = &[
    "arse",
    "arsehole",
    "ass",
    "asshole",
    "bastard",
    "bitch",
    "bollocks",
    "bullshit",
    "cock",
    "crap",
    "cunt",
    "damn",
    "dick",
    "dickhead",
    "fag",
    "fuck",
    "fucker",
    "fucking",
    "goddamn",
    "hell",
    "motherfucker",
    "nigger",
    "piss",
    "prick",
    "pussy",
    "shit",
    "shitty",
    "slut",
    "twat",
    "wank",
    "wanker",
    "whore",
];

/// Whole-word, case-insensitive denylist matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfanityFilter {
    words: BTreeSet<String>,
}

impl ProfanityFilter {
    #[must_use]
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    #[must_use]
    pub fn with_words(mut self, words: &[&str]) -> Self {
        self.words.extend(words.iter().map(|w| w.to_lowercase()));
        self
    }

    #[must_use]
    pub fn is_profane(&self, text: &str) -> bool {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .any(|word| self.words.contains(&word.to_lowercase()))
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}
