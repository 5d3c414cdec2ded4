use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Search radius (km) applied when a daily/trip request omits one
    pub default_search_radius_km: f64,

    /// API key for the optional LLM plan-enhancement hook.
    /// When absent, enhancement is a pass-through.
    pub llm_api_key: Option<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_search_radius_km: DEFAULT_SEARCH_RADIUS_KM,
            llm_api_key: None,
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let default_search_radius_km: f64 = env::var("PLANNER_DEFAULT_SEARCH_RADIUS_KM")
            .unwrap_or_else(|_| defaults.default_search_radius_km.to_string())
            .parse()
            .map_err(|_| "Invalid PLANNER_DEFAULT_SEARCH_RADIUS_KM")?;

        if default_search_radius_km <= 0.0 || default_search_radius_km > 100.0 {
            return Err("PLANNER_DEFAULT_SEARCH_RADIUS_KM must be between 0 and 100 km".to_string());
        }

        Ok(Self {
            default_search_radius_km,
            llm_api_key: env::var("LLM_API_KEY").ok(),
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            planner: PlannerConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_config_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.default_search_radius_km, DEFAULT_SEARCH_RADIUS_KM);
        assert!(config.llm_api_key.is_none());
    }
}
