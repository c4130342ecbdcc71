use std::env;
use std::fmt;

const DEFAULT_TARGET_LANG: &str = "ja";
const MAX_TRANSLATE_CONCURRENCY: usize = 8;

#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub jira_user: String,
    pub jira_token: String,
    pub jira_url: String,
    pub target_lang: String,
    pub translate_concurrency: usize,
    pub wordfreq_table_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("{}: environment variable not found", name))
        };
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let jira_url = required("JIRA_URL")?;
        let parsed = url::Url::parse(&jira_url).map_err(|e| format!("JIRA_URL: {}", e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!("JIRA_URL: unsupported scheme {}", parsed.scheme()));
        }

        let translate_concurrency = match optional("TRANSLATE_CONCURRENCY") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| format!("TRANSLATE_CONCURRENCY: {}", e))?
                .clamp(1, MAX_TRANSLATE_CONCURRENCY),
            None => 1,
        };

        Ok(Self {
            google_api_key: required("GOOGLE_API_KEY")?,
            jira_user: required("JIRA_USER")?,
            jira_token: required("JIRA_TOKEN")?,
            jira_url: jira_url.trim_end_matches('/').to_string(),
            target_lang: optional("TRANSLATE_TARGET_LANG")
                .unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string()),
            translate_concurrency,
            wordfreq_table_path: optional("WORDFREQ_TABLE_PATH"),
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"***")
            .field("jira_user", &self.jira_user)
            .field("jira_token", &"***")
            .field("jira_url", &self.jira_url)
            .field("target_lang", &self.target_lang)
            .field("translate_concurrency", &self.translate_concurrency)
            .field("wordfreq_table_path", &self.wordfreq_table_path)
            .finish()
    }
}
