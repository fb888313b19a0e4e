//! Built-in English sentiment lexicon.
//!
//! Each sentiment word maps to `(polarity, subjectivity)`. Intensifiers scale
//! the next sentiment word; negations flip it.

use std::collections::{HashMap, HashSet};

lazy_static::lazy_static! {
    /// Sentiment words with `(polarity, subjectivity)`.
    pub static ref SENTIMENT_WORDS: HashMap<&'static str, (f64, f64)> = {
        let entries: &[(&str, f64, f64)] = &[
            // Strongly positive
            ("excellent", 1.0, 1.0),
            ("perfect", 1.0, 1.0),
            ("wonderful", 1.0, 1.0),
            ("awesome", 1.0, 1.0),
            ("outstanding", 0.9, 0.9),
            ("superb", 1.0, 1.0),
            ("magnificent", 1.0, 1.0),
            ("brilliant", 0.9, 1.0),
            ("fantastic", 0.4, 0.9),
            ("best", 1.0, 0.3),
            ("delightful", 0.7, 0.8),
            ("great", 0.8, 0.75),
            ("amazing", 0.6, 0.9),
            ("incredible", 0.9, 0.9),
            ("beautiful", 0.85, 1.0),
            ("lovely", 0.5, 0.75),
            ("love", 0.5, 0.6),
            ("loved", 0.7, 0.8),
            ("loves", 0.5, 0.6),
            ("adore", 0.6, 0.8),
            ("happy", 0.8, 1.0),
            ("glad", 0.5, 1.0),
            ("joy", 0.8, 0.9),
            ("thrilled", 0.8, 0.9),
            ("delighted", 0.7, 0.9),
            ("impressive", 1.0, 1.0),
            ("impressed", 0.7, 0.8),
            ("enjoy", 0.4, 0.5),
            ("enjoyed", 0.4, 0.5),
            ("favorite", 0.5, 1.0),
            ("favourite", 0.5, 1.0),
            // Moderately positive
            ("good", 0.7, 0.6),
            ("better", 0.5, 0.5),
            ("nice", 0.6, 1.0),
            ("pleasant", 0.73, 0.97),
            ("fine", 0.42, 0.5),
            ("ok", 0.5, 0.5),
            ("okay", 0.5, 0.5),
            ("cool", 0.35, 0.65),
            ("fun", 0.3, 0.2),
            ("funny", 0.25, 1.0),
            ("interesting", 0.5, 0.5),
            ("helpful", 0.5, 0.6),
            ("useful", 0.3, 0.0),
            ("easy", 0.43, 0.83),
            ("fast", 0.2, 0.6),
            ("clean", 0.37, 0.69),
            ("clear", 0.1, 0.38),
            ("smooth", 0.4, 0.6),
            ("reliable", 0.5, 0.6),
            ("friendly", 0.38, 0.5),
            ("kind", 0.6, 0.9),
            ("fair", 0.7, 0.9),
            ("right", 0.29, 0.54),
            ("positive", 0.23, 0.55),
            ("success", 0.3, 0.4),
            ("successful", 0.75, 0.95),
            ("win", 0.8, 0.4),
            ("won", 0.8, 0.4),
            ("winning", 0.5, 0.75),
            ("hope", 0.2, 0.4),
            ("hopeful", 0.5, 0.6),
            ("calm", 0.3, 0.75),
            ("safe", 0.5, 0.5),
            ("strong", 0.43, 0.73),
            ("rich", 0.38, 0.5),
            ("free", 0.4, 0.8),
            ("recommend", 0.4, 0.5),
            ("recommended", 0.4, 0.5),
            ("satisfied", 0.5, 1.0),
            ("thanks", 0.2, 0.2),
            ("thank", 0.2, 0.2),
            ("well", 0.1, 0.3),
            ("liked", 0.3, 0.4),
            ("excited", 0.38, 0.75),
            ("exciting", 0.3, 0.8),
            ("proud", 0.8, 1.0),
            ("worth", 0.3, 0.1),
            ("important", 0.4, 1.0),
            // Moderately negative
            ("bad", -0.7, 0.67),
            ("worse", -0.4, 0.6),
            ("poor", -0.4, 0.6),
            ("sad", -0.5, 1.0),
            ("unhappy", -0.6, 0.9),
            ("angry", -0.5, 1.0),
            ("annoying", -0.8, 0.9),
            ("annoyed", -0.4, 0.7),
            ("boring", -1.0, 1.0),
            ("bored", -0.5, 1.0),
            ("difficult", -0.5, 1.0),
            ("hard", -0.29, 0.54),
            ("slow", -0.3, 0.4),
            ("expensive", -0.5, 0.7),
            ("broken", -0.4, 0.4),
            ("wrong", -0.5, 0.9),
            ("weak", -0.38, 0.63),
            ("ugly", -0.7, 1.0),
            ("dirty", -0.6, 0.8),
            ("stupid", -0.8, 1.0),
            ("dumb", -0.38, 0.5),
            ("silly", -0.5, 0.9),
            ("mediocre", -0.3, 0.6),
            ("disappointed", -0.75, 0.75),
            ("disappointing", -0.6, 0.7),
            ("confusing", -0.3, 0.7),
            ("confused", -0.4, 0.7),
            ("problem", -0.2, 0.4),
            ("fail", -0.5, 0.3),
            ("failed", -0.5, 0.3),
            ("failure", -0.32, 0.3),
            ("lose", -0.4, 0.3),
            ("lost", -0.4, 0.3),
            ("negative", -0.3, 0.4),
            ("sick", -0.71, 0.86),
            ("tired", -0.4, 0.7),
            ("sorry", -0.5, 1.0),
            ("unfortunately", -0.5, 1.0),
            ("dislike", -0.4, 0.6),
            ("worried", -0.3, 0.6),
            ("afraid", -0.6, 0.9),
            ("scary", -0.5, 1.0),
            ("dangerous", -0.6, 0.9),
            ("dull", -0.31, 0.76),
            ("useless", -0.5, 0.2),
            ("unreliable", -0.5, 0.6),
            // Strongly negative
            ("terrible", -1.0, 1.0),
            ("horrible", -1.0, 1.0),
            ("awful", -1.0, 1.0),
            ("worst", -1.0, 1.0),
            ("hate", -0.8, 0.9),
            ("hated", -0.9, 0.7),
            ("hates", -0.8, 0.9),
            ("disgusting", -1.0, 1.0),
            ("pathetic", -1.0, 1.0),
            ("miserable", -1.0, 1.0),
            ("dreadful", -1.0, 1.0),
            ("atrocious", -1.0, 1.0),
            ("furious", -0.9, 1.0),
            ("disaster", -0.9, 0.9),
            ("nightmare", -0.9, 0.9),
            ("hopeless", -0.7, 0.8),
            ("evil", -1.0, 1.0),
            ("insane", -1.0, 1.0),
            ("crap", -0.8, 0.8),
        ];
        entries.iter().map(|&(word, p, s)| (word, (p, s))).collect()
    };

    /// Intensifiers and diminishers with the factor they apply.
    pub static ref INTENSIFIERS: HashMap<&'static str, f64> = [
        ("very", 1.3),
        ("really", 1.3),
        ("so", 1.3),
        ("too", 1.3),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("absolutely", 1.5),
        ("totally", 1.4),
        ("completely", 1.4),
        ("highly", 1.4),
        ("truly", 1.3),
        ("super", 1.3),
        ("quite", 1.1),
        ("pretty", 1.1),
        ("rather", 1.05),
        ("fairly", 0.9),
        ("somewhat", 0.75),
        ("slightly", 0.5),
        ("barely", 0.4),
        ("hardly", 0.4),
    ]
    .into_iter()
    .collect();

    /// Words that negate the next sentiment word.
    pub static ref NEGATIONS: HashSet<&'static str> = [
        "not", "no", "never", "neither", "nor", "none", "nothing", "nobody", "without",
        "cannot", "can't", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't",
        "weren't", "won't", "wouldn't", "shouldn't", "couldn't", "haven't", "hasn't",
        "hadn't", "ain't",
    ]
    .into_iter()
    .collect();
}

/// Look up a lowercased word.
pub fn sentiment_of(word: &str) -> Option<(f64, f64)> {
    SENTIMENT_WORDS.get(word).copied()
}

pub fn intensity_of(word: &str) -> Option<f64> {
    INTENSIFIERS.get(word).copied()
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(word)
}
