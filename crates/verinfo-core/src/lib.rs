//! Version and build metadata of the running binary.
//!
//! - [`VersionProvider`]: the capability every component asks for version
//!   identity.
//! - The process-wide [`registry`] with its not-configured policy
//!   ([`NotEnabledAction`]).
//! - [`FallbackVersionInfo`], the sentinel provider.
//! - The `major.minor` compatibility check used against peer versions.
//! - [`StaticVersionInfo`], a provider holding fixed values.

mod compat;
mod error;
mod fallback;
pub mod registry;
mod static_info;
mod traits;
mod types;

pub use compat::{is_same_major_version, parse_major_minor};
pub use error::VersionError;
pub use fallback::FallbackVersionInfo;
pub use registry::{ProviderRegistry, enable, instance};
pub use static_info::{StaticVersionInfo, StaticVersionInfoBuilder};
pub use traits::VersionProvider;
pub use types::{
    BuildInfoField, NotEnabledAction, VersionComponent, VersionComponents, VersionParseError,
};
