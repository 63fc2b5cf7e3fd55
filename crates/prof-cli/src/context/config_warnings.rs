use prof_config::ProfConfig;

/// Emit warnings for a missing backend URL and for likely mistyped env keys.
pub fn warn_unconfigured(config: &ProfConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ProfConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.api.is_configured() {
        if has_env_prefix(&env_keys, "PROFSEARCH_API") {
            warnings.push(
                "API config appears default while PROFSEARCH_API* env vars exist. Use double underscores (example: PROFSEARCH_API__BASE_URL)."
                    .to_string(),
            );
        } else if config.api.base_url.trim().is_empty() {
            warnings.push(
                "Backend URL is not set. Set api.base_url in config.toml or PROFSEARCH_API__BASE_URL."
                    .to_string(),
            );
        } else {
            warnings.push(format!(
                "Backend URL '{}' is the sample placeholder. Point api.base_url at the running backend.",
                config.api.base_url
            ));
        }
    }

    if has_env_prefix(&env_keys, "PROFSEARCH_SESSION_")
        && !has_env_prefix(&env_keys, "PROFSEARCH_SESSION__")
    {
        warnings.push(
            "PROFSEARCH_SESSION_* env vars are ignored. Use double underscores (example: PROFSEARCH_SESSION__BACKEND)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use prof_config::ProfConfig;

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn single_underscore_api_key_is_flagged() {
        let warnings = collect_unconfigured_warnings(
            &ProfConfig::default(),
            env(&[("PROFSEARCH_API_BASE_URL", "https://x.example")]),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("PROFSEARCH_API__BASE_URL"));
    }

    #[test]
    fn missing_url_without_env_suggests_setting_it() {
        let warnings = collect_unconfigured_warnings(&ProfConfig::default(), env(&[]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not set"));
    }

    #[test]
    fn placeholder_url_is_flagged() {
        let mut config = ProfConfig::default();
        config.api.base_url = "https://your-ngrok-url.ngrok.io".into();
        let warnings = collect_unconfigured_warnings(&config, env(&[]));
        assert!(warnings[0].contains("placeholder"));
    }

    #[test]
    fn configured_backend_is_quiet() {
        let mut config = ProfConfig::default();
        config.api.base_url = "http://localhost:9787".into();
        assert!(collect_unconfigured_warnings(&config, env(&[])).is_empty());
    }
}
