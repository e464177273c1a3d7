//! Site entry as declared in a config document.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::config::{ENABLED_KEY, GITHUB_PAGES_IPS, GITHUB_PRESET, YAML_FALSE_WORDS};
use crate::error_handling::DispatchError;

/// Expected values for `ips`: either an explicit list or a named preset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AddressList {
    /// Preset name such as `"github"`
    Preset(String),
    /// Explicit list of values
    Values(Vec<String>),
}

impl AddressList {
    /// Returns the concrete values, expanding a preset name.
    ///
    /// Always returns a fresh vector; the parsed entry is never modified, so
    /// the same document can be checked repeatedly or concurrently.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidField` for an unknown preset name.
    pub fn expand(&self) -> Result<Vec<String>, DispatchError> {
        match self {
            AddressList::Values(values) => Ok(values.clone()),
            AddressList::Preset(name) if name == GITHUB_PRESET => {
                Ok(GITHUB_PAGES_IPS.iter().map(|ip| ip.to_string()).collect())
            }
            AddressList::Preset(name) => Err(DispatchError::InvalidField {
                field: "ips",
                reason: format!("unknown preset '{name}' (expected a list or '{GITHUB_PRESET}')"),
            }),
        }
    }
}

/// One thing to check.
///
/// Every field is optional. The presence of `host`, `ip`, `mx` and `url`
/// decides which checks run; the other fields carry expectations for them.
/// Unknown keys are ignored. `enabled` is read from the raw value with
/// [`SiteEntry::is_disabled`] before the entry is typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteEntry {
    /// Host to resolve forward
    pub host: Option<String>,
    /// Expected addresses for `host`, or expected exchanges for `mx`
    pub ips: Option<AddressList>,
    /// Address to resolve in reverse
    pub ip: Option<String>,
    /// Expected PTR target for `ip`
    pub reverse: Option<String>,
    /// Domain whose MX records are checked
    pub mx: Option<String>,
    /// URL to fetch
    pub url: Option<String>,
    /// Expected HTTP status for `url`
    pub status_code: Option<u16>,
    /// Headers the response must carry, with their exact values
    pub headers: Option<BTreeMap<String, String>>,
    /// Substring the response body must contain
    pub html_contains: Option<String>,
}

impl SiteEntry {
    /// Builds an entry from the generic value produced by the config loader.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Malformed` if a recognized field has the wrong type.
    pub fn from_value(value: &Value) -> Result<Self, DispatchError> {
        Ok(SiteEntry::deserialize(value)?)
    }

    /// True when the raw entry carries a falsy `enabled`.
    ///
    /// Falsy means `false`, null (a key with no value), zero, the empty
    /// string, or a YAML 1.1 false word such as `no` or `off`. Any other
    /// value, or no `enabled` key at all, leaves the entry enabled.
    pub fn is_disabled(raw: &Value) -> bool {
        match raw.get(ENABLED_KEY) {
            None => false,
            Some(Value::Null) => true,
            Some(Value::Bool(flag)) => !flag,
            Some(Value::Number(n)) => n.as_f64() == Some(0.0),
            Some(Value::String(word)) => {
                word.is_empty()
                    || YAML_FALSE_WORDS
                        .iter()
                        .any(|falsy| word.eq_ignore_ascii_case(falsy))
            }
            Some(Value::Array(items)) => items.is_empty(),
            Some(Value::Object(map)) => map.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_sparse_entry() {
        let entry =
            SiteEntry::from_value(&json!({"url": "https://example.com/", "status_code": 200}))
                .expect("should parse");
        assert_eq!(entry.url.as_deref(), Some("https://example.com/"));
        assert_eq!(entry.status_code, Some(200));
        assert!(entry.host.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let entry = SiteEntry::from_value(&json!({"name": "blog", "comment": "x", "host": "a.b"}))
            .expect("unknown keys should be ignored");
        assert_eq!(entry.host.as_deref(), Some("a.b"));
    }

    #[test]
    fn test_falsy_enabled_values_disable() {
        for enabled in [
            json!(false),
            json!(null),
            json!(0),
            json!(""),
            json!("no"),
            json!("No"),
            json!("OFF"),
            json!("n"),
            json!("False"),
        ] {
            let raw = json!({"enabled": enabled, "host": "a.b"});
            assert!(SiteEntry::is_disabled(&raw), "{enabled} should disable");
        }
    }

    #[test]
    fn test_truthy_or_absent_enabled_keeps_entry() {
        assert!(!SiteEntry::is_disabled(&json!({"host": "a.b"})));
        for enabled in [json!(true), json!("yes"), json!("on"), json!(1)] {
            let raw = json!({"enabled": enabled, "host": "a.b"});
            assert!(!SiteEntry::is_disabled(&raw), "{enabled} should keep the entry");
        }
    }

    #[test]
    fn test_non_boolean_enabled_still_parses() {
        let entry = SiteEntry::from_value(&json!({"enabled": "yes", "host": "a.b"}))
            .expect("enabled is not part of the typed entry");
        assert_eq!(entry.host.as_deref(), Some("a.b"));
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let err = SiteEntry::from_value(&json!({"host": 5})).expect_err("host must be a string");
        assert!(matches!(err, DispatchError::Malformed(_)));
    }

    #[test]
    fn test_ips_accepts_list_or_preset() {
        let list = SiteEntry::from_value(&json!({"ips": ["1.1.1.1", "2.2.2.2"]})).unwrap();
        assert_eq!(
            list.ips,
            Some(AddressList::Values(vec![
                "1.1.1.1".to_string(),
                "2.2.2.2".to_string()
            ]))
        );

        let preset = SiteEntry::from_value(&json!({"ips": "github"})).unwrap();
        assert_eq!(preset.ips, Some(AddressList::Preset("github".to_string())));
    }

    #[test]
    fn test_github_preset_expands_to_pages_addresses() {
        let expanded = AddressList::Preset("github".to_string()).expand().unwrap();
        assert_eq!(
            expanded,
            vec![
                "185.199.108.153",
                "185.199.109.153",
                "185.199.110.153",
                "185.199.111.153"
            ]
        );
    }

    #[test]
    fn test_expand_does_not_mutate() {
        let ips = AddressList::Preset("github".to_string());
        let _ = ips.expand().unwrap();
        assert_eq!(ips, AddressList::Preset("github".to_string()));
    }

    #[test]
    fn test_unknown_preset_is_invalid() {
        let err = AddressList::Preset("gitlab".to_string())
            .expand()
            .expect_err("unknown preset");
        assert!(matches!(err, DispatchError::InvalidField { field: "ips", .. }));
    }
}
