//! Compile-time build metadata.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short commit hash captured by `build.rs`.
pub const GIT_COMMIT: &str = env!("CHATSH_BUILD_GIT_HASH");

/// UTC build timestamp captured by `build.rs`.
pub const BUILD_TIMESTAMP: &str = env!("CHATSH_BUILD_TIMESTAMP");

/// Version block printed by `chatsh --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("CHATSH_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("CHATSH_BUILD_TIMESTAMP")
);
