use std::env;

use serde::{Deserialize, Serialize};

use self::ranking::RankingConfig;

pub mod filter_file;
pub mod ranking;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub ranking: RankingConfig,
}

impl Config {
    pub fn new() -> Self {
        let filter_path = env::var("ERABU_FILTER").ok();

        Config {
            ranking: RankingConfig { filter_path },
        }
    }
}
