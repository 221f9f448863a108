use std::fmt;

/// Per-provider secrets. Absence is a normal, degraded-but-valid state.
#[derive(Clone, Default)]
pub struct Credentials {
    pub completion_api_key: Option<String>,
    pub news_api_key: Option<String>,
    /// Reserved for a future social-sentiment integration.
    pub social_api_key: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(key: &Option<String>) -> &'static str {
            if key.is_some() {
                "<set>"
            } else {
                "<unset>"
            }
        }
        f.debug_struct("Credentials")
            .field("completion_api_key", &mask(&self.completion_api_key))
            .field("news_api_key", &mask(&self.news_api_key))
            .field("social_api_key", &mask(&self.social_api_key))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationMode {
    /// Online service first, offline dictionary as fallback.
    #[default]
    Online,
    /// Offline dictionary only.
    Offline,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub completion_url: Option<String>,
    pub completion_model: Option<String>,
    pub translation: TranslationMode,
    pub db_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            completion_url: None,
            completion_model: None,
            translation: TranslationMode::Online,
            db_path: "./marketscope.db".to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |keys: &[&str]| {
            keys.iter()
                .filter_map(|k| lookup(k))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        };

        let translation = match get(&["MARKETSCOPE_TRANSLATION"]).as_deref() {
            Some("offline") => TranslationMode::Offline,
            _ => TranslationMode::Online,
        };

        Self {
            credentials: Credentials {
                completion_api_key: get(&["MARKETSCOPE_COMPLETION_API_KEY", "GROQ_API_KEY"]),
                news_api_key: get(&["MARKETSCOPE_NEWS_API_KEY", "NEWS_API_KEY"]),
                social_api_key: get(&["MARKETSCOPE_SOCIAL_API_KEY"]),
            },
            completion_url: get(&["MARKETSCOPE_COMPLETION_URL"]),
            completion_model: get(&["MARKETSCOPE_COMPLETION_MODEL"]),
            translation,
            db_path: get(&["MARKETSCOPE_DB"]).unwrap_or_else(|| "./marketscope.db".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_empty_environment() {
        let s = settings(&[]);
        assert!(s.credentials.completion_api_key.is_none());
        assert!(s.credentials.news_api_key.is_none());
        assert_eq!(s.translation, TranslationMode::Online);
        assert_eq!(s.db_path, "./marketscope.db");
    }

    #[test]
    fn test_blank_keys_are_unset() {
        let s = settings(&[("MARKETSCOPE_NEWS_API_KEY", "   "), ("NEWS_API_KEY", "fallback")]);
        assert_eq!(s.credentials.news_api_key.as_deref(), Some("fallback"));

        let s = settings(&[("GROQ_API_KEY", "")]);
        assert!(s.credentials.completion_api_key.is_none());
    }

    #[test]
    fn test_offline_translation_mode() {
        let s = settings(&[("MARKETSCOPE_TRANSLATION", "offline"), ("MARKETSCOPE_DB", ":memory:")]);
        assert_eq!(s.translation, TranslationMode::Offline);
        assert_eq!(s.db_path, ":memory:");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials {
            completion_api_key: Some("sk-secret".into()),
            ..Default::default()
        };
        let dbg = format!("{creds:?}");
        assert!(!dbg.contains("sk-secret"));
        assert!(dbg.contains("<set>"));
    }
}
