//! Rendering of version info for diagnostics and logs.
//!
//! - [`BuildInfoDocument`]: the ordered build-info document returned to
//!   diagnostic commands.
//! - [`BuildInfoEvent`]: the filtered attribute set logged at start-up.
//! - Version banners printed by each binary.

mod banner;
mod document;
mod event;
mod reporter;

pub use banner::{
    BinaryKind, mongo_shell_version, mongod_version, mongos_version, version_banner,
};
pub use document::BuildInfoDocument;
pub use event::{BuildInfoEvent, EnvironmentEntry, TargetMinOsEvent};
pub use reporter::{BuildInfoReporter, log_target_min_os};
