use std::env;

use anyhow::{Context, Result};

/// Startup configuration, resolved once from the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub supabase_url: String,
    pub anon_key: String,
    pub service_role_key: String,
    pub jwt_secret: String,
    pub allowed_origins: String,
    pub bind_address: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase_url = get("SUPABASE_URL")
            .context("SUPABASE_URL not set")?
            .trim()
            .trim_end_matches('/')
            .to_string();
        let anon_key = get("SUPABASE_ANON_KEY")
            .context("SUPABASE_ANON_KEY not set")?
            .trim()
            .to_string();
        let service_role_key = get("SUPABASE_SERVICE_ROLE_KEY")
            .context("SUPABASE_SERVICE_ROLE_KEY not set")?
            .trim()
            .to_string();
        let jwt_secret = get("SUPABASE_JWT_SECRET")
            .context("SUPABASE_JWT_SECRET not set")?
            .trim()
            .to_string();

        let allowed_origins = get("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000,http://127.0.0.1:3000".into());

        let port = get("PORT").unwrap_or_else(|| "8080".to_string());
        port.parse::<u16>().context("PORT must be a number")?;

        Ok(Self {
            supabase_url,
            anon_key,
            service_role_key,
            jwt_secret,
            allowed_origins,
            bind_address: format!("0.0.0.0:{}", port),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, String> {
        HashMap::from([
            ("SUPABASE_URL", "https://x.supabase.co".to_string()),
            ("SUPABASE_ANON_KEY", "anon-key".to_string()),
            ("SUPABASE_SERVICE_ROLE_KEY", "service-key".to_string()),
            ("SUPABASE_JWT_SECRET", "jwt-secret".to_string()),
        ])
    }

    fn build(vars: &HashMap<&str, String>) -> Result<AppConfig> {
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn trailing_slash_is_trimmed_from_supabase_url() {
        let mut vars = base_vars();
        vars.insert("SUPABASE_URL", "https://x.supabase.co/ ".to_string());
        let config = build(&vars).unwrap();
        assert_eq!(config.supabase_url, "https://x.supabase.co");
    }

    #[test]
    fn missing_required_variable_names_it() {
        let mut vars = base_vars();
        vars.remove("SUPABASE_JWT_SECRET");
        let err = build(&vars).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_JWT_SECRET"));
    }

    #[test]
    fn port_defaults_to_8080() {
        let config = build(&base_vars()).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn explicit_port_is_used() {
        let mut vars = base_vars();
        vars.insert("PORT", "9000".to_string());
        let config = build(&vars).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:9000");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let mut vars = base_vars();
        vars.insert("PORT", "not-a-port".to_string());
        let err = build(&vars).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn allowed_origins_default_to_localhost() {
        let config = build(&base_vars()).unwrap();
        assert_eq!(
            config.allowed_origins,
            "http://localhost:3000,http://127.0.0.1:3000"
        );
    }
}
