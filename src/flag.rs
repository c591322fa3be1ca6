//! Detection of a version request in a process argument list.
//!
//! Flags are read the way a conventional flag parser reads them: after the
//! program name, consume `-name` / `--name` / `-name=value` tokens and stop
//! at the first positional token, a lone `-`, or after `--`. Because that
//! stop hides a `--version` typed after a positional argument, the tokens
//! left over can also be scanned for the `-version` substring.

use once_cell::unsync::OnceCell;

use crate::errors::VersionFlagError;

/// Name of the boolean flag, matched as `-version` or `--version`.
pub const FLAG_NAME: &str = "version";

/// Substring looked for in the remaining arguments. This is deliberately
/// loose: `x-version` or `--version-info` match as well.
pub const POSITIONAL_PATTERN: &str = "-version";

/// How a version request was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionChannel {
    Flag,
    Positional,
    Forced,
}

/// Result of one pass over the argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    version: bool,
    remaining: Vec<String>,
    malformed: Option<String>,
}

impl ParsedArgs {
    /// State handed over by a host that already parsed its own flags.
    pub fn new(version: bool, remaining: Vec<String>) -> Self {
        Self {
            version,
            remaining,
            malformed: None,
        }
    }

    /// Parses a full argument list, program name first. A value that is not
    /// a boolean (`--version=maybe`) leaves the flag untouched and is kept
    /// for [`ParsedArgs::validate`]; parsing carries on past it.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = args
            .into_iter()
            .map(Into::<String>::into)
            .skip(1)
            .peekable();
        let mut version = false;
        let mut malformed = None;

        while let Some(token) = tokens.peek() {
            let Some(body) = flag_body(token) else {
                break;
            };
            if body.is_empty() {
                // `--` ends flag parsing and is not itself an argument.
                tokens.next();
                break;
            }

            let (name, value) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };
            if name == FLAG_NAME {
                match value.map(|raw| (raw, parse_bool(raw))) {
                    None => version = true,
                    Some((_, Some(parsed))) => version = parsed,
                    Some((raw, None)) => malformed = Some(raw.to_string()),
                }
            }
            tokens.next();
        }

        Self {
            version,
            remaining: tokens.collect(),
            malformed,
        }
    }

    /// Fails when the flag was given a value that is not a boolean.
    pub fn validate(&self) -> Result<(), VersionFlagError> {
        match &self.malformed {
            Some(value) => Err(VersionFlagError::InvalidBoolValue {
                flag: FLAG_NAME.to_string(),
                value: value.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn version_flag(&self) -> bool {
        self.version
    }

    /// Arguments left after flag parsing stopped.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// First remaining argument containing [`POSITIONAL_PATTERN`].
    pub fn positional_match(&self) -> Option<&str> {
        self.remaining
            .iter()
            .map(String::as_str)
            .find(|arg| arg.contains(POSITIONAL_PATTERN))
    }

    pub fn detect(&self, scan_positional: bool) -> Option<DetectionChannel> {
        if self.version {
            Some(DetectionChannel::Flag)
        } else if scan_positional && self.positional_match().is_some() {
            Some(DetectionChannel::Positional)
        } else {
            None
        }
    }
}

/// Strips the leading dashes of a flag token. Returns `None` for tokens that
/// end flag parsing as positional arguments and `Some("")` for `--`.
fn flag_body(token: &str) -> Option<&str> {
    if token.len() < 2 || !token.starts_with('-') {
        return None;
    }
    Some(token.strip_prefix("--").unwrap_or(&token[1..]))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// An argument list that is parsed at most once, on first inspection.
#[derive(Debug)]
pub struct VersionFlag {
    args: Vec<String>,
    parsed: OnceCell<ParsedArgs>,
}

impl VersionFlag {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            parsed: OnceCell::new(),
        }
    }

    /// Uses the arguments the current process was started with.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }

    /// Reuses flag state parsed elsewhere; the argument list is never read.
    pub fn from_parsed(parsed: ParsedArgs) -> Self {
        Self {
            args: Vec::new(),
            parsed: OnceCell::with_value(parsed),
        }
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed.get().is_some()
    }

    pub fn parsed(&self) -> &ParsedArgs {
        self.parsed.get_or_init(|| {
            let parsed = ParsedArgs::parse(self.args.iter().cloned());
            if let Err(err) = parsed.validate() {
                tracing::warn!(error = %err, "ignoring malformed version flag");
            }
            tracing::debug!(
                version = parsed.version_flag(),
                remaining = parsed.remaining().len(),
                "parsed command-line flags"
            );
            parsed
        })
    }

    pub fn detect(&self, scan_positional: bool) -> Option<DetectionChannel> {
        self.parsed().detect(scan_positional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ParsedArgs {
        ParsedArgs::parse(args.iter().copied())
    }

    #[test]
    fn single_and_double_dash_set_the_flag() {
        assert!(parse(&["prog", "-version"]).version_flag());
        assert!(parse(&["prog", "--version"]).version_flag());
    }

    #[test]
    fn explicit_boolean_values_are_honoured() {
        assert!(parse(&["prog", "--version=true"]).version_flag());
        assert!(parse(&["prog", "-version=T"]).version_flag());
        assert!(!parse(&["prog", "--version=false"]).version_flag());
        assert!(!parse(&["prog", "--version", "--version=0"]).version_flag());
    }

    #[test]
    fn malformed_boolean_value_fails_validation() {
        let parsed = parse(&["prog", "--version=maybe"]);
        assert!(!parsed.version_flag());
        assert!(parsed.remaining().is_empty());

        let err = parsed.validate().unwrap_err();
        assert!(matches!(
            err,
            VersionFlagError::InvalidBoolValue { ref value, .. } if value == "maybe"
        ));
    }

    #[test]
    fn host_flags_are_skipped() {
        let parsed = parse(&["prog", "-v", "--color=auto", "--version"]);
        assert!(parsed.version_flag());
        assert!(parsed.remaining().is_empty());
    }

    #[test]
    fn parsing_stops_at_first_positional() {
        let parsed = parse(&["prog", "somepositional", "--version"]);

        assert!(!parsed.version_flag());
        assert_eq!(parsed.remaining(), ["somepositional", "--version"]);
        assert_eq!(
            parsed.detect(true),
            Some(DetectionChannel::Positional)
        );
        assert_eq!(parsed.detect(false), None);
    }

    #[test]
    fn double_dash_terminator_is_consumed() {
        let parsed = parse(&["prog", "--", "run"]);
        assert_eq!(parsed.remaining(), ["run"]);
    }

    #[test]
    fn lone_dash_is_positional() {
        let parsed = parse(&["prog", "-", "--version"]);
        assert_eq!(parsed.remaining(), ["-", "--version"]);
    }

    #[test]
    fn positional_scan_matches_substrings() {
        let parsed = parse(&["prog", "run", "x-version-y"]);
        assert_eq!(parsed.positional_match(), Some("x-version-y"));

        let parsed = parse(&["prog", "run", "version"]);
        assert_eq!(parsed.positional_match(), None);
    }

    #[test]
    fn no_arguments_means_no_request() {
        assert_eq!(parse(&["prog"]).detect(true), None);
        assert_eq!(parse(&[]).detect(true), None);
    }

    #[test]
    fn version_flag_parses_once() {
        let flag = VersionFlag::new(["prog", "--version"]);
        assert!(!flag.is_parsed());

        assert_eq!(flag.detect(true), Some(DetectionChannel::Flag));
        assert!(flag.is_parsed());
        let first: *const ParsedArgs = flag.parsed();
        let second: *const ParsedArgs = flag.parsed();
        assert_eq!(first, second);
    }

    #[test]
    fn pre_parsed_state_is_reused() {
        let flag = VersionFlag::from_parsed(ParsedArgs::new(true, Vec::new()));
        assert!(flag.is_parsed());
        assert_eq!(flag.detect(false), Some(DetectionChannel::Flag));
    }

    #[test]
    fn malformed_flag_is_treated_as_no_request() {
        let flag = VersionFlag::new(["prog", "--version=maybe"]);
        assert_eq!(flag.detect(true), None);
        assert!(flag.is_parsed());
    }

    #[test]
    fn malformed_flag_does_not_hide_later_version() {
        let flag = VersionFlag::new(["prog", "--version=maybe", "run", "--version"]);

        assert!(flag.parsed().validate().is_err());
        assert_eq!(flag.parsed().remaining(), ["run", "--version"]);
        assert_eq!(flag.detect(true), Some(DetectionChannel::Positional));
    }

    #[test]
    fn valid_flag_after_malformed_one_still_counts() {
        let parsed = parse(&["prog", "--version=maybe", "-version"]);

        assert!(parsed.version_flag());
        assert!(parsed.validate().is_err());
    }
}
