use std::cmp::Ordering;
use std::collections::HashSet;

use crate::analysis::AnalyzedWord;
use crate::dictionary::{Definition, DictionaryEntry, Example};
use crate::filter::Filter;

/// The engine's pick for one word occurrence. Definitions and examples come
/// from the best-ranked group of entries; audio and readings may come from
/// lower-ranked groups when the best ones had none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub definitions: Vec<Definition>,
    pub examples: Vec<Example>,
    pub audio: Vec<String>,
    pub readings: HashSet<String>,
}

/// Score an entry against every tier of the filter. The result has one
/// element per tier, most significant first.
///
/// Within a tier, items are tried in order; an item contributes its weight
/// at most once, on the first definition its matcher accepts. An entry with
/// no definitions scores 0 on every tier.
pub fn score_entry(entry: &DictionaryEntry, filter: &Filter, context: &AnalyzedWord) -> Vec<i32> {
    filter
        .tiers
        .iter()
        .map(|tier| {
            let mut total = 0;
            for item in &tier.items {
                if entry
                    .definitions
                    .iter()
                    .any(|def| item.matcher.matches(def, entry, context))
                {
                    total += item.weight;
                }
            }
            total
        })
        .collect()
}

/// Lexicographic order on tier-score vectors: the first tier at which the
/// vectors differ decides, larger value greater.
///
/// Vectors of different lengths never meet within one ranking run, since
/// every entry is scored under the same filter; if they do, the shorter
/// sorts first. Defensive only.
pub fn compare_scores(a: &[i32], b: &[i32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (x, y) in a.iter().zip(b) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

/// Rank the word's candidate entries under the filter and pick the best
/// available definitions, examples, audio and readings.
///
/// Entries are walked in descending score order, grouped by equal score.
/// Each output field stops collecting at the first group boundary where it
/// already holds content; a field still empty keeps collecting from lower
/// groups until something turns up or the entries run out. If no entry
/// supplied a reading, the analyzer's own reading is used. A reading equal
/// to the spelling itself wins over all others: the extra readings on such
/// an entry belong to a different homograph.
pub fn select_best(context: &AnalyzedWord, filter: &Filter) -> Selection {
    let mut ranked: Vec<(&DictionaryEntry, Vec<i32>)> = context
        .entries
        .iter()
        .map(|entry| (entry, score_entry(entry, filter, context)))
        .collect();
    // stable sort: entries with equal scores keep their analyzer order
    ranked.sort_by(|(_, a), (_, b)| compare_scores(b, a));

    tracing::trace!(
        "ranking {} candidates for {}",
        ranked.len(),
        context.word
    );

    let mut selection = Selection::default();

    if let Some((_, best)) = ranked.first() {
        let mut current = best.clone();
        let mut need_definitions = true;
        let mut need_audio = true;
        let mut need_readings = true;

        for (entry, score) in &ranked {
            if compare_scores(&current, score) == Ordering::Greater {
                // entering the next, lower-scoring group: any field that
                // already holds content stops collecting here
                current = score.clone();
                need_definitions &= selection.definitions.is_empty();
                need_audio &= selection.audio.is_empty();
                need_readings &= selection.readings.is_empty();
            }
            if need_definitions {
                selection
                    .definitions
                    .extend(entry.definitions.iter().cloned());
                selection.examples.extend(entry.examples.iter().cloned());
            }
            if need_audio {
                selection.audio.extend(entry.audio.iter().cloned());
            }
            if need_readings {
                for reading in &entry.readings {
                    selection.readings.insert(reading.clone());
                }
            }
        }
    }

    if selection.readings.is_empty() {
        tracing::debug!(
            "no dictionary readings for {}, using analyzer reading {}",
            context.word,
            context.reading
        );
        selection.readings.insert(context.reading.clone());
    }

    if selection.readings.contains(context.word.as_str()) {
        selection.readings.retain(|reading| *reading == context.word);
    }

    selection
}
