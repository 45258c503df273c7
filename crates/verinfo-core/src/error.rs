use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Version info has not been configured")]
    NotConfigured,

    #[error(transparent)]
    Parse(#[from] crate::types::VersionParseError),
}

#[cfg(test)]
mod tests {
    use super::VersionError;
    use crate::types::{VersionComponent, VersionParseError};

    #[test]
    fn not_configured_display_is_stable() {
        assert_eq!(
            VersionError::NotConfigured.to_string(),
            "Version info has not been configured"
        );
    }

    #[test]
    fn parse_error_converts_transparently() {
        let parse = VersionParseError::InvalidComponent {
            component: VersionComponent::Minor,
            value: "x".to_string(),
        };
        let mapped = VersionError::from(parse.clone());

        assert_eq!(mapped.to_string(), parse.to_string());
        assert!(matches!(mapped, VersionError::Parse(_)));
    }
}
