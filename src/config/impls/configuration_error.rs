use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => write!(f, "unable to access config file: {}", e),
            ConfigurationError::ParseError(e) => write!(f, "unable to parse config file: {}", e),
            ConfigurationError::SerializeError(e) => write!(f, "unable to serialize config: {}", e),
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::IOError(e) => Some(e),
            ConfigurationError::ParseError(e) => Some(e),
            ConfigurationError::SerializeError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigurationError {
    fn from(error: std::io::Error) -> Self {
        ConfigurationError::IOError(error)
    }
}

impl From<toml::de::Error> for ConfigurationError {
    fn from(error: toml::de::Error) -> Self {
        ConfigurationError::ParseError(error)
    }
}

impl From<toml::ser::Error> for ConfigurationError {
    fn from(error: toml::ser::Error) -> Self {
        ConfigurationError::SerializeError(error)
    }
}
