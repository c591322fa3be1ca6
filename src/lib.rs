#![doc(test(attr(deny(warnings))))]

//! Versionflag gives a command-line program a GNU-style `--version` flag that
//! prints the build provenance compiled into the binary and exits
//! successfully.
//!
//! The build pipeline injects the values through the `VERSIONFLAG_PROJECT_NAME`,
//! `VERSIONFLAG_GIT_COMMIT`, `VERSIONFLAG_BUILD_TIME` and
//! `VERSIONFLAG_JENKINS_BUILD` environment variables at compile time:
//!
//! ```text
//! VERSIONFLAG_PROJECT_NAME=demo VERSIONFLAG_GIT_COMMIT=$(git rev-parse --short HEAD) \
//!     VERSIONFLAG_BUILD_TIME=$(date -u +%FT%TZ) cargo build --release
//! ```
//!
//! Call [`print_version_and_exit`] at the top of `main`, after any flags of
//! your own have been parsed:
//!
//! ```no_run
//! fn main() {
//!     versionflag::print_version_and_exit();
//!     // normal work
//! }
//! ```

pub mod build_info;
pub mod config;
pub mod errors;
pub mod flag;
pub mod injection;
pub mod reporter;
pub mod utils;

pub use build_info::{get_build_information, BuildInfo};
pub use config::ReporterConfig;
pub use errors::VersionFlagError;
pub use flag::{DetectionChannel, ParsedArgs, VersionFlag};
pub use reporter::{print_version_and_exit, ProcessExit, Reporter, Terminator, VersionOutcome};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes stderr tracing for host binaries and logs the embedded build.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let info = BuildInfo::compiled();
        tracing::debug!(
            project = %info.project_name,
            commit = %info.git_commit,
            "versionflag tracing initialized."
        );
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
