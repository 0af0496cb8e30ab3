use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different deployment environments available for the CLI.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment.
    Local,
    /// Staging environment for pre-production testing.
    Staging,
    /// Production catalog and web app.
    #[default]
    Production,
}

impl Environment {
    /// Returns the connector catalog base URL associated with the environment.
    pub fn catalog_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000".to_string(),
            Environment::Staging => "https://staging.quantimo.do".to_string(),
            Environment::Production => "https://app.quantimo.do".to_string(),
        }
    }

    /// Returns the origin of the web app that share links point at.
    pub fn app_origin(&self) -> String {
        match self {
            Environment::Local => "http://localhost:3000".to_string(),
            Environment::Staging => "https://safe-team.staging.gnosisdev.com".to_string(),
            Environment::Production => "https://gnosis-safe.io/app".to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.catalog_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("STAGING".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
        assert!("mainnet".parse::<Environment>().is_err());
    }

    #[test]
    fn test_default_is_production() {
        let env = Environment::default();
        assert_eq!(env, Environment::Production);
        assert_eq!(
            format!("{:?}", env),
            "Environment::Production, URL: https://app.quantimo.do"
        );
    }
}
