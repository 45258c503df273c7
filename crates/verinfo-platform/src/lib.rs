mod crypto;
mod facts;
mod paths;

pub use crypto::CryptoBackend;
pub use facts::{MAX_DOCUMENT_SIZE, PlatformFacts};
pub use paths::{AppPaths, AppPathsError, HOME_ENV};
