use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryEntry;

/// Major part-of-speech categories as tagged by the morphological analyzer
/// (IPADIC category set)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Prefix,
    Verb,
    Adjective,
    Adverb,
    Adnominal,
    Conjunction,
    Particle,
    AuxiliaryVerb,
    Exclamation,
    Symbol,
    Filler,
    Other,
}

/// One analyzed word occurrence together with its candidate dictionary
/// entries. Produced by the analyzer, read-only for the ranking engine.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalyzedWord {
    /// Surface form as it appeared in the text
    pub word: String,
    /// Phonetic transcription guessed by the analyzer
    pub reading: String,
    pub part_of_speech: PartOfSpeech,
    /// How often the word occurred in the analyzed text, informational only
    pub count: u32,
    pub entries: Vec<DictionaryEntry>,
}
