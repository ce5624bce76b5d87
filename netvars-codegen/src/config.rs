//! Generator configuration.

/// Default outer namespace of the generated header.
pub const DEFAULT_NAMESPACE: &str = "netsender";

/// Default namespace of the identifier constants.
pub const DEFAULT_ID_NAMESPACE: &str = "netsender_var";

/// Options controlling header generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Client to generate for; `None` picks the first declared client.
    pub client: Option<String>,
    /// Outer namespace wrapping the header.
    pub namespace: String,
    /// Namespace holding the `VAR_ID_*` constants.
    pub id_namespace: String,
    /// Reject duplicate or invalid variable names.
    pub strict: bool,
}

impl GeneratorConfig {
    /// Sets the client to generate for.
    #[must_use]
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Enables or disables name validation.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            client: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
            id_namespace: DEFAULT_ID_NAMESPACE.to_string(),
            strict: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.client, None);
        assert_eq!(config.namespace, "netsender");
        assert_eq!(config.id_namespace, "netsender_var");
        assert!(config.strict);
    }

    #[test]
    fn test_config_builders() {
        let config = GeneratorConfig::default()
            .with_client("esp-speaker")
            .with_strict(false);
        assert_eq!(config.client.as_deref(), Some("esp-speaker"));
        assert!(!config.strict);
    }
}
