use std::env;

const DEFAULT_OCTAGON_API_URL: &str = "https://api.octagon-api.com";
const DEFAULT_TATTOO_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub octagon_api_url: String,
    pub tattoo_api_url: String,
}

impl Config {
    /// Reads endpoint overrides from the environment (and an optional .env
    /// file). Both upstream services are public, so everything has a default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let octagon_api_url = env::var("OCTAGON_API_URL")
            .unwrap_or_else(|_| DEFAULT_OCTAGON_API_URL.to_string());
        let tattoo_api_url = env::var("TATTOO_API_URL")
            .unwrap_or_else(|_| DEFAULT_TATTOO_API_URL.to_string());

        Config {
            octagon_api_url,
            tattoo_api_url,
        }
    }
}
