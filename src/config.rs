use serde::{Deserialize, Serialize};

/// Header printed before the documentation links when build info is incomplete.
pub const INCOMPLETE_NOTICE: &str = "Do not have complete buildinfo, see documentation:";

pub const DEFAULT_DOCUMENTATION_LINKS: [&str; 2] = [
    "https://github.com/stockholmuniversity/goversionflag",
    "https://www.gnu.org/prep/standards/html_node/_002d_002dversion.html",
];

/// Policy switches for [`crate::Reporter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Look for `-version` in arguments left over after flag parsing.
    #[serde(default = "ReporterConfig::default_enabled")]
    pub scan_positional: bool,
    /// Print [`INCOMPLETE_NOTICE`] and the links when any field is empty.
    #[serde(default = "ReporterConfig::default_enabled")]
    pub incomplete_notice: bool,
    #[serde(default = "ReporterConfig::default_documentation_links")]
    pub documentation_links: Vec<String>,
    /// Take the version path regardless of arguments. Test use only.
    #[serde(skip)]
    pub force_version: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            scan_positional: Self::default_enabled(),
            incomplete_notice: Self::default_enabled(),
            documentation_links: Self::default_documentation_links(),
            force_version: false,
        }
    }
}

impl ReporterConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_documentation_links() -> Vec<String> {
        DEFAULT_DOCUMENTATION_LINKS
            .iter()
            .map(|link| link.to_string())
            .collect()
    }

    pub fn scan_positional(mut self, enabled: bool) -> Self {
        self.scan_positional = enabled;
        self
    }

    pub fn incomplete_notice(mut self, enabled: bool) -> Self {
        self.incomplete_notice = enabled;
        self
    }

    pub fn documentation_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.documentation_links = links.into_iter().map(Into::into).collect();
        self
    }

    pub fn force_version(mut self, enabled: bool) -> Self {
        self.force_version = enabled;
        self
    }
}
