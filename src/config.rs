use std::env;
use std::path::PathBuf;

use crate::error::AppError;
use crate::riot::Region;
use crate::riot::endpoints::match_v5::MatchIdsQuery;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub account_region: Region,
    pub match_region: Region,
    pub match_query: MatchIdsQuery,
    pub output_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        const DEFAULT_ACCOUNT_REGION: Region = Region::Asia;
        const DEFAULT_MATCH_REGION: Region = Region::Sea;
        const DEFAULT_OUTPUT_PATH: &str = "results.txt";

        let riot_api_key = var("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let account_region = match var("ACCOUNT_REGION") {
            Some(v) => v.parse()?,
            None => DEFAULT_ACCOUNT_REGION,
        };

        let match_region = match var("MATCH_REGION") {
            Some(v) => v.parse()?,
            None => DEFAULT_MATCH_REGION,
        };

        let mut match_query = MatchIdsQuery::default();

        if let Some(match_type) = var("MATCH_TYPE").filter(|v| !v.is_empty()) {
            match_query.match_type = match_type;
        }

        if let Some(count) = var("MATCH_COUNT")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&n| n > 0)
        {
            match_query.count = count;
        }

        let output_path = var("OUTPUT_PATH")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.into());

        Ok(Self {
            riot_api_key,
            account_region,
            match_region,
            match_query,
            output_path,
        })
    }
}
