use verinfo_core::VersionProvider;

/// The binaries that print a version banner at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    Shell,
    Router,
    Server,
}

impl BinaryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shell => "mongo",
            Self::Router => "mongos",
            Self::Server => "mongod",
        }
    }

    /// Product label printed in front of the version.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shell => "MongoDB shell",
            Self::Router => "mongos",
            Self::Server => "db",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mongo" | "shell" => Some(Self::Shell),
            "mongos" => Some(Self::Router),
            "mongod" => Some(Self::Server),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn version_banner<P>(kind: BinaryKind, provider: &P) -> String
where
    P: VersionProvider + ?Sized,
{
    format!("{} version v{}", kind.label(), provider.version())
}

#[must_use]
pub fn mongo_shell_version<P: VersionProvider + ?Sized>(provider: &P) -> String {
    version_banner(BinaryKind::Shell, provider)
}

#[must_use]
pub fn mongos_version<P: VersionProvider + ?Sized>(provider: &P) -> String {
    version_banner(BinaryKind::Router, provider)
}

#[must_use]
pub fn mongod_version<P: VersionProvider + ?Sized>(provider: &P) -> String {
    version_banner(BinaryKind::Server, provider)
}
