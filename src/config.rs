use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub catalog_api_url: Option<String>,
    pub catalog_api_key: Option<String>,
    pub catalog_path: Option<String>,
    pub api_token: Option<String>,
    pub restrict_to_experience: bool,
    pub seed_fallback: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT").ok_or_else(|| anyhow::anyhow!("PORT must be set"))?;
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            port,
            catalog_api_url: non_empty("CATALOG_API_URL"),
            catalog_api_key: non_empty("CATALOG_API_KEY"),
            catalog_path: non_empty("CATALOG_PATH"),
            api_token: non_empty("API_TOKEN"),
            restrict_to_experience: parse_flag(non_empty("RESTRICT_TO_EXPERIENCE"), false)?,
            seed_fallback: parse_flag(non_empty("SEED_FALLBACK"), true)?,
        })
    }
}

fn parse_flag(value: Option<String>, default: bool) -> anyhow::Result<bool> {
    match value.as_deref().map(|v| v.trim().to_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(v) => Err(anyhow::anyhow!("invalid boolean flag value '{}'", v)),
    }
}
