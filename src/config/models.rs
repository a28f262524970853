use serde::Deserialize;

// Canonical config schema: kebab-case keys, every field defaulted. Absent
// fields decode as empty values and are tolerated by callers.

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "api-key", default)]
    pub api_key: String,

    #[serde(rename = "notify-api-key", default)]
    pub notify_api_key: Option<String>,

    #[serde(rename = "update-target", default)]
    pub targets: Vec<Target>,
}

/// One DNS record to reconcile. Duplicates are processed independently.
#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub id: String,

    #[serde(rename = "zone-id", default)]
    pub zone_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_decode_as_empty() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_key, "");
        assert!(config.notify_api_key.is_none());
        assert!(config.targets.is_empty());
    }

    #[test]
    fn target_fields_default_to_empty() {
        let target: Target = serde_json::from_str(r#"{"name": "home.example.com"}"#).unwrap();
        assert_eq!(target.name, "home.example.com");
        assert_eq!(target.id, "");
        assert_eq!(target.zone_id, "");
    }
}
