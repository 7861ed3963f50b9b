use erabu_core::dictionary::flags;
use erabu_core::filter::{Filter, FilterItem, FilterTier, Rule};

/// Standard disambiguation filter for Japanese lookups.
///
/// Most significant first:
/// 1. the definition's part of speech agrees with the analyzer's tag
/// 2. archaic, rare and obsolete senses are penalized
/// 3. usually-kana senses are preferred for kana spellings and penalized
///    for kanji spellings
pub fn default_filter() -> Filter {
    Filter {
        tiers: vec![
            FilterTier {
                items: vec![FilterItem::rule(Rule::PartOfSpeechMatches, 1)],
            },
            FilterTier {
                items: vec![
                    FilterItem::flag(flags::ARCHAIC, -1),
                    FilterItem::flag(flags::RARE, -1),
                    FilterItem::flag(flags::OBSOLETE, -1),
                ],
            },
            FilterTier {
                items: vec![
                    FilterItem::rule(Rule::KanaPreferred, 1),
                    FilterItem::rule(Rule::KanaMismatch, -1),
                ],
            },
        ],
    }
}
