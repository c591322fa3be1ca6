//! The `--version` handler.
//!
//! GNU Coding Standards 4.7.1: `--version` prints identifying information on
//! standard output and exits successfully. Other options and arguments are
//! ignored once it is seen, and the program does not perform its normal
//! function.

use std::io::{self, Write};

use crate::build_info::BuildInfo;
use crate::config::{ReporterConfig, INCOMPLETE_NOTICE};
use crate::errors::VersionFlagError;
use crate::flag::{DetectionChannel, VersionFlag};

/// Exit status used on the version path.
pub const SUCCESS: i32 = 0;

/// Ends the process. Swapped out in tests to observe the exit instead.
pub trait Terminator {
    fn exit(&self, code: i32);
}

/// Calls [`std::process::exit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn exit(&self, code: i32) {
        std::process::exit(code)
    }
}

impl<F> Terminator for F
where
    F: Fn(i32),
{
    fn exit(&self, code: i32) {
        self(code)
    }
}

/// What the caller should do after the version check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOutcome {
    /// No version request; run normally.
    Continue,
    /// Version information was printed; terminate with `code`.
    Exit { code: i32 },
}

impl VersionOutcome {
    pub fn should_exit(self) -> bool {
        matches!(self, Self::Exit { .. })
    }
}

/// Prints build information when the program was asked for its version.
pub struct Reporter {
    info: BuildInfo,
    config: ReporterConfig,
    flag: VersionFlag,
    terminator: Box<dyn Terminator>,
}

impl Reporter {
    pub fn new(info: BuildInfo, flag: VersionFlag) -> Self {
        Self {
            info,
            config: ReporterConfig::default(),
            flag,
            terminator: Box::new(ProcessExit),
        }
    }

    /// Compiled-in build information checked against the process arguments.
    pub fn from_env() -> Self {
        Self::new(BuildInfo::compiled(), VersionFlag::from_env())
    }

    pub fn with_config(mut self, config: ReporterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_terminator(mut self, terminator: impl Terminator + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    /// Whether a version request is present, and how it was recognised.
    pub fn detect(&self) -> Option<DetectionChannel> {
        self.flag
            .detect(self.config.scan_positional)
            .or(self.config.force_version.then_some(DetectionChannel::Forced))
    }

    /// Output lines for the version path: sorted `name: value` pairs,
    /// followed by the incomplete-build notice when enabled and needed.
    pub fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .info
            .get_build_information()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        lines.sort();

        if self.config.incomplete_notice && !self.info.is_complete() {
            lines.push(INCOMPLETE_NOTICE.to_string());
            lines.extend(
                self.config
                    .documentation_links
                    .iter()
                    .map(|link| format!("\t{link}")),
            );
        }
        lines
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.render() {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }

    /// Writes the report to `out` if a version request is present and tells
    /// the caller whether to exit. Never terminates the process itself.
    pub fn check<W: Write>(&self, out: &mut W) -> Result<VersionOutcome, VersionFlagError> {
        let Some(channel) = self.detect() else {
            return Ok(VersionOutcome::Continue);
        };
        tracing::debug!(?channel, "version requested");

        let missing = self.info.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(?missing, "build information is incomplete");
        }

        self.write_report(out)?;
        Ok(VersionOutcome::Exit { code: SUCCESS })
    }

    /// Prints build information to stdout and terminates with status 0 when
    /// a version request is present; otherwise returns
    /// [`VersionOutcome::Continue`] with nothing printed.
    ///
    /// With the default [`ProcessExit`] terminator this does not return on
    /// the version path.
    pub fn print_version_and_exit(&self) -> VersionOutcome {
        let stdout = io::stdout();
        let outcome = match self.check(&mut stdout.lock()) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "failed to write version information");
                VersionOutcome::Exit { code: SUCCESS }
            }
        };

        if let VersionOutcome::Exit { code } = outcome {
            self.terminator.exit(code);
        }
        outcome
    }
}

/// Handles `--version` for the running process using the compiled-in build
/// information and default policy.
pub fn print_version_and_exit() -> VersionOutcome {
    Reporter::from_env().print_version_and_exit()
}
