use serde::{Deserialize, Serialize};

use crate::analysis::AnalyzedWord;
use crate::dictionary::{Definition, DictionaryEntry, flags};
use crate::kana;

/// A prioritized weighting scheme for ranking a word's candidate entries.
/// Tier order encodes priority: an earlier tier dominates every later one
/// when scores are compared.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub tiers: Vec<FilterTier>,
}

/// One priority level. All items of a tier fold into a single scalar score.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FilterTier {
    pub items: Vec<FilterItem>,
}

/// A single weighted test. The weight is contributed at most once per
/// entry, on the first definition the matcher accepts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FilterItem {
    pub matcher: Matcher,
    pub weight: i32,
}

impl FilterItem {
    /// Item matching a literal usage flag
    pub fn flag(tag: impl Into<String>, weight: i32) -> Self {
        FilterItem {
            matcher: Matcher::Flag(tag.into()),
            weight,
        }
    }

    /// Item matching one of the built-in rules
    pub fn rule(rule: Rule, weight: i32) -> Self {
        FilterItem {
            matcher: Matcher::Rule(rule),
            weight,
        }
    }
}

/// What a filter item tests a definition against
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Matcher {
    /// The definition carries this literal usage flag
    Flag(String),
    /// One of the built-in context rules
    Rule(Rule),
}

impl Matcher {
    pub fn matches(
        &self,
        definition: &Definition,
        entry: &DictionaryEntry,
        context: &AnalyzedWord,
    ) -> bool {
        match self {
            Matcher::Flag(tag) => definition.flags.iter().any(|flag| flag == tag),
            Matcher::Rule(rule) => rule.matches(definition, entry, context),
        }
    }
}

/// Built-in tests relating a definition to the analyzed word. A closed set,
/// so filters remain plain data and can live in configuration files.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// The definition lists the word's analyzed part of speech
    PartOfSpeechMatches,
    /// The definition is marked usually-kana and the word is spelled in kana
    KanaPreferred,
    /// The definition is marked usually-kana but the word is spelled with
    /// kanji or other non-kana
    KanaMismatch,
}

impl Rule {
    pub fn matches(
        &self,
        definition: &Definition,
        _entry: &DictionaryEntry,
        context: &AnalyzedWord,
    ) -> bool {
        match self {
            Rule::PartOfSpeechMatches => definition
                .part_of_speech
                .contains(&context.part_of_speech),
            Rule::KanaPreferred => {
                usually_kana(definition) && kana::is_all_kana(&context.word)
            }
            Rule::KanaMismatch => {
                usually_kana(definition) && !kana::is_all_kana(&context.word)
            }
        }
    }
}

fn usually_kana(definition: &Definition) -> bool {
    definition.flags.iter().any(|flag| flag == flags::USUALLY_KANA)
}
