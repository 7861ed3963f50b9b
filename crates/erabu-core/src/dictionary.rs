use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::PartOfSpeech;

/// JMdict usage/register tags in XML entity form, as carried on
/// [`Definition::flags`]
pub mod flags {
    /// Archaism
    pub const ARCHAIC: &str = "&arch;";
    /// Rarely used term
    pub const RARE: &str = "&rare;";
    /// Obsolete term
    pub const OBSOLETE: &str = "&obs;";
    /// Word usually written using kana alone
    pub const USUALLY_KANA: &str = "&uk;";
    /// Colloquialism
    pub const COLLOQUIAL: &str = "&col;";
}

/// Which upstream dictionary an entry came from, plus its numeric
/// identifier there
#[derive(
    Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy,
)]
pub enum Source {
    WaniKani(i32),
    JmDict(i32),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    /// Surface-form spellings this entry is indexed under
    pub forms: Vec<String>,
    pub source: Source,
    pub definitions: Vec<Definition>,
    pub audio: Vec<String>,
    pub readings: Vec<String>,
    pub examples: Vec<Example>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Definition {
    pub text: String,
    pub part_of_speech: Vec<PartOfSpeech>,
    /// Usage/register tags, see [`flags`]
    pub flags: Vec<String>,
}

impl Definition {
    pub fn new(text: String, part_of_speech: Vec<PartOfSpeech>, flags: Vec<String>) -> Self {
        Definition {
            text,
            part_of_speech,
            flags,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Example {
    /// Index of the definition this example illustrates, if known
    pub for_definition: Option<usize>,
    /// Sentence in the studied language
    pub foreign: String,
    /// Translation in the learner's language
    pub native: String,
}

/// In-memory dictionary: decoded entries keyed by provenance, plus a
/// surface-form index for lookup
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Dictionary {
    pub wanikani_updated_on: Option<DateTime<Utc>>,
    pub jmdict_updated_on: Option<DateTime<Utc>>,
    pub words: HashMap<String, Vec<Source>>,
    pub entries: HashMap<Source, DictionaryEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries registered for a surface form, in source order
    pub fn lookup(&self, word: &str) -> impl Iterator<Item = &DictionaryEntry> {
        self.words.get(word).into_iter().flat_map(|sources| {
            sources
                .iter()
                .copied()
                .filter_map(|source| self.entries.get(&source))
        })
    }

    /// Register an entry under every one of its surface forms. Inserting an
    /// entry with an already-known source replaces the previous entry.
    pub fn insert(&mut self, entry: DictionaryEntry) {
        for form in entry.forms.iter() {
            let sources = self.words.entry(form.clone()).or_default();

            // each form's source list stays sorted so lookup order is stable
            let at = sources.partition_point(|s| s < &entry.source);
            if sources.get(at) != Some(&entry.source) {
                sources.insert(at, entry.source);
            }
        }

        self.entries.insert(entry.source, entry);
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
