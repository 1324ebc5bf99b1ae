use serde::{Deserialize, Serialize};

/// Token usage reported by the service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// Tokens consumed by the request
    #[serde(default)]
    pub input_tokens: u64,
    /// Tokens generated in the response
    #[serde(default)]
    pub output_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_de_ignores_unknown_fields() {
        let u: Usage = serde_json::from_str(
            r#"{"input_tokens": 100, "output_tokens": 10, "cache_read_input_tokens": 0}"#,
        )
        .unwrap();
        assert_eq!(u.input_tokens, 100);
        assert_eq!(u.output_tokens, 10);
    }

    #[test]
    fn usage_de_defaults_missing_counts() {
        let u: Usage = serde_json::from_str("{}").unwrap();
        assert_eq!(u.input_tokens, 0);
        assert_eq!(u.output_tokens, 0);
    }
}
