use std::path::Path;

use serde::{Deserialize, Serialize};

use erabu_core::filter::{Filter, FilterItem, FilterTier, Matcher};

/// On-disk filter description, JSON. Kept separate from the engine types so
/// the file format can evolve without touching them.
///
/// ```json
/// {
///     "tiers": [
///         { "items": [ { "matcher": { "rule": "part_of_speech_matches" }, "weight": 1 } ] },
///         { "items": [ { "matcher": { "flag": "&arch;" }, "weight": -1 } ] }
///     ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FilterSpec {
    pub tiers: Vec<TierSpec>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TierSpec {
    pub items: Vec<ItemSpec>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ItemSpec {
    pub matcher: Matcher,
    pub weight: i32,
}

impl FilterSpec {
    pub fn into_filter(self) -> Filter {
        Filter {
            tiers: self
                .tiers
                .into_iter()
                .map(|tier| FilterTier {
                    items: tier
                        .items
                        .into_iter()
                        .map(|item| FilterItem {
                            matcher: item.matcher,
                            weight: item.weight,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FilterLoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Read and parse a filter file
pub fn load(path: impl AsRef<Path>) -> Result<Filter, FilterLoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FilterLoadError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    from_json(&content)
}

/// Parse a filter from its JSON form
pub fn from_json(json: &str) -> Result<Filter, FilterLoadError> {
    let spec: FilterSpec = serde_json::from_str(json)?;
    let filter = spec.into_filter();
    if filter.tiers.is_empty() {
        tracing::warn!("filter has no tiers, every entry will rank equally");
    }
    Ok(filter)
}
