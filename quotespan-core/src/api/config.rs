//! Configuration API for quote extraction

/// Default configuration constants
pub mod defaults {
    /// Sentinel for "no length limit"
    pub const MAX_LENGTH_UNLIMITED: i32 = -1;
}

/// Extraction configuration
///
/// Values outside their expected domain are normalized, never rejected:
/// every negative `max_length` means "unlimited", so construction is
/// infallible.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) single_quotes: bool,
    pub(crate) smart_quotes: bool,
    pub(crate) ascii_quotes: bool,
    pub(crate) allow_embedded_same: bool,
    pub(crate) extract_unclosed: bool,
    pub(crate) attribute_quotes: bool,
    pub(crate) max_length: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            single_quotes: false,
            smart_quotes: false,
            ascii_quotes: false,
            allow_embedded_same: false,
            extract_unclosed: false,
            attribute_quotes: false,
            max_length: defaults::MAX_LENGTH_UNLIMITED,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether the straight single quote family is active
    pub fn single_quotes(&self) -> bool {
        self.single_quotes
    }

    /// Whether the smart (directional Unicode) families are active
    pub fn smart_quotes(&self) -> bool {
        self.smart_quotes
    }

    /// Whether ASCII families scan an ASCII-converted view
    pub fn ascii_quotes(&self) -> bool {
        self.ascii_quotes
    }

    /// Whether a family may nest directly within itself
    pub fn allow_embedded_same(&self) -> bool {
        self.allow_embedded_same
    }

    /// Whether unmatched opening delimiters are recovered
    pub fn extract_unclosed(&self) -> bool {
        self.extract_unclosed
    }

    /// Whether an installed attributor is invoked after extraction
    pub fn attribute_quotes(&self) -> bool {
        self.attribute_quotes
    }

    /// Maximum accepted span length in scalars, delimiters included;
    /// negative means unlimited
    pub fn max_length(&self) -> i32 {
        self.max_length
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the straight single quote family
    pub fn single_quotes(mut self, enabled: bool) -> Self {
        self.config.single_quotes = enabled;
        self
    }

    /// Enable the smart directional families
    pub fn smart_quotes(mut self, enabled: bool) -> Self {
        self.config.smart_quotes = enabled;
        self
    }

    /// Scan ASCII families over an ASCII-converted view
    pub fn ascii_quotes(mut self, enabled: bool) -> Self {
        self.config.ascii_quotes = enabled;
        self
    }

    /// Allow a family to nest directly within itself
    pub fn allow_embedded_same(mut self, enabled: bool) -> Self {
        self.config.allow_embedded_same = enabled;
        self
    }

    /// Recover unmatched opening delimiters as unclosed spans
    pub fn extract_unclosed(mut self, enabled: bool) -> Self {
        self.config.extract_unclosed = enabled;
        self
    }

    /// Invoke the installed attribution collaborator after extraction
    pub fn attribute_quotes(mut self, enabled: bool) -> Self {
        self.config.attribute_quotes = enabled;
        self
    }

    /// Set the maximum span length; any negative value means unlimited
    pub fn max_length(mut self, max_length: i32) -> Self {
        self.config.max_length = max_length;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.single_quotes());
        assert!(!config.smart_quotes());
        assert!(!config.ascii_quotes());
        assert!(!config.allow_embedded_same());
        assert!(!config.extract_unclosed());
        assert!(!config.attribute_quotes());
        assert_eq!(config.max_length(), defaults::MAX_LENGTH_UNLIMITED);
    }

    #[test]
    fn test_builder_round_trip() {
        let config = Config::builder()
            .single_quotes(true)
            .smart_quotes(true)
            .max_length(120)
            .extract_unclosed(true)
            .build();
        assert!(config.single_quotes());
        assert!(config.smart_quotes());
        assert!(config.extract_unclosed());
        assert_eq!(config.max_length(), 120);
    }
}
