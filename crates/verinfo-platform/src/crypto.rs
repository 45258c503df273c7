use serde::{Deserialize, Serialize};

/// The native crypto library linked into the binary, described by the
/// version strings it reports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CryptoBackend {
    /// OpenSSL: the version loaded at run time and the one built against.
    #[serde(rename = "openssl")]
    OpenSsl { running: String, compiled: String },
    /// A TLS stack provided by the operating system, for example
    /// `Windows SChannel` or `Apple Secure Transport`.
    Platform { name: String },
    #[default]
    Disabled,
}

impl CryptoBackend {
    #[must_use]
    pub fn openssl(running: impl Into<String>, compiled: impl Into<String>) -> Self {
        Self::OpenSsl {
            running: running.into(),
            compiled: compiled.into(),
        }
    }

    #[must_use]
    pub fn windows_schannel() -> Self {
        Self::Platform {
            name: "Windows SChannel".to_string(),
        }
    }

    #[must_use]
    pub fn apple_secure_transport() -> Self {
        Self::Platform {
            name: "Apple Secure Transport".to_string(),
        }
    }

    #[must_use]
    pub fn is_openssl(&self) -> bool {
        matches!(self, Self::OpenSsl { .. })
    }

    /// What is actually in use at run time.
    #[must_use]
    pub fn running(&self) -> &str {
        match self {
            Self::OpenSsl { running, .. } => running,
            Self::Platform { name } => name,
            Self::Disabled => "disabled",
        }
    }

    /// The library version the binary was compiled against. Platform stacks
    /// have none.
    #[must_use]
    pub fn compiled(&self) -> Option<&str> {
        match self {
            Self::OpenSsl { compiled, .. } => Some(compiled),
            Self::Platform { .. } => None,
            Self::Disabled => Some("disabled"),
        }
    }

    /// The running OpenSSL version wrapped in `prefix` and `suffix`, or an
    /// empty string when the backend is not OpenSSL.
    #[must_use]
    pub fn openssl_version(&self, prefix: &str, suffix: &str) -> String {
        match self {
            Self::OpenSsl { running, .. } => format!("{prefix}{running}{suffix}"),
            Self::Platform { .. } | Self::Disabled => String::new(),
        }
    }
}
