use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::{Captures, Regex};
use serde_json::Value;
use tracing::debug;

use crate::config_manager::main::Config;

/// Read a YAML or JSON configuration file with environment variable substitution
pub fn read_config_file(config_path: &str) -> Result<Value> {
    read_config_file_with(config_path, |name| std::env::var(name).ok())
}

pub fn read_config_file_with<F>(config_path: &str, lookup: F) -> Result<Value>
where
    F: Fn(&str) -> Option<String>,
{
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file(config_path)?;
    let content = substitute_env_vars(&content, lookup)?;

    let path_lower = config_path.to_lowercase();
    let value = if path_lower.ends_with(".json") || path_lower.ends_with(".jsonld") {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(value)
}

/// Replace `${VAR_NAME}` placeholders. Unset variables become empty strings.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| {
            debug!("Environment variable {} is not set", var_name);
            String::new()
        })
    });
    Ok(replaced.into_owned())
}

/// Load a UTF-8 text file, dropping a leading byte order mark
pub fn load_text_file(file_path: &str) -> Result<String> {
    let bytes = fs::read(file_path)?;
    let (cow, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        anyhow::bail!("Configuration file is not valid UTF-8: {}", file_path);
    }
    Ok(cow.into_owned())
}

/// Validate configuration data against the Config model
pub fn validate_config(config_data: Value) -> Result<Config> {
    let config: Config = serde_json::from_value(config_data)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn substitutes_known_and_blanks_unknown_vars() {
        let vars: HashMap<&str, &str> = [("GEMINI_API_KEY", "secret")].into_iter().collect();
        let out = substitute_env_vars(
            "key: ${GEMINI_API_KEY}\nother: \"${MISSING}\"",
            |name| vars.get(name).map(|v| v.to_string()),
        )
        .unwrap();
        assert_eq!(out, "key: secret\nother: \"\"");
    }

    #[test]
    fn reads_yaml_with_bom() {
        let dir = std::env::temp_dir().join(format!("rayee-conf-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("conf.yaml");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"system_config:\n  port: ${TEST_PORT}\n");
        fs::write(&path, bytes).unwrap();

        let value = read_config_file_with(path.to_str().unwrap(), |name| {
            (name == "TEST_PORT").then(|| "9100".to_string())
        })
        .unwrap();
        assert_eq!(value["system_config"]["port"], 9100);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_config_file("/definitely/not/here/conf.yaml").is_err());
    }
}
