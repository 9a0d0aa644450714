use crate::config::Config;
use crate::error::AppError;
use std::collections::BTreeMap;

use super::endpoints::{FIGHTERS_PATH, TATTOO_PATH};
use super::models::*;

pub struct OctagonClient {
    config: Config,
}

impl OctagonClient {
    pub fn new(config: Config) -> Self {
        OctagonClient { config }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let response = ureq::get(url)
            .set("User-Agent", "octagon_stats/0.1.0")
            .call();

        match response {
            Ok(resp) => resp
                .into_string()
                .map_err(|e| AppError::HttpError(e.to_string())),
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    /// Fetches the full fighter roster in one request. The upstream payload
    /// is a JSON object keyed by fighter id; it is flattened into a list and
    /// each record keeps its id.
    pub fn fetch_fighters(&self) -> Result<Vec<Fighter>, AppError> {
        let url = format!("{}{}", self.config.octagon_api_url, FIGHTERS_PATH);

        let body = self.execute_request(&url)?;
        let keyed: BTreeMap<String, Fighter> =
            serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;

        let fighters: Vec<Fighter> = keyed
            .into_iter()
            .map(|(id, mut fighter)| {
                fighter.id = id;
                fighter
            })
            .collect();

        if fighters.is_empty() {
            return Err(AppError::NoFighters);
        }

        Ok(fighters)
    }

    /// Fetches the tattoo trivia entries from the companion service.
    pub fn fetch_tattoos(&self) -> Result<Vec<Tattoo>, AppError> {
        let url = format!("{}{}", self.config.tattoo_api_url, TATTOO_PATH);

        let body = self.execute_request(&url)?;
        let tattoos: Vec<Tattoo> =
            serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;

        if tattoos.is_empty() {
            return Err(AppError::NoTattoos);
        }

        Ok(tattoos)
    }
}
