use serde::{Deserialize, Serialize};

use erabu_core::filter::Filter;

use crate::filter_file::{self, FilterLoadError};

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RankingConfig {
    /// Path to a filter file; callers fall back to the built-in language
    /// filter when unset
    pub filter_path: Option<String>,
}

impl RankingConfig {
    /// Load the configured filter, or `None` when no path is set
    pub fn load_filter(&self) -> Result<Option<Filter>, FilterLoadError> {
        match &self.filter_path {
            Some(path) => filter_file::load(path).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_configured_path_means_no_filter() {
        let config = RankingConfig { filter_path: None };
        assert!(matches!(config.load_filter(), Ok(None)));
    }

    #[test]
    fn a_configured_but_missing_path_is_an_error() {
        let config = RankingConfig {
            filter_path: Some("no/such/filter.json".to_string()),
        };
        assert!(matches!(
            config.load_filter(),
            Err(FilterLoadError::FileNotFound(_))
        ));
    }
}
