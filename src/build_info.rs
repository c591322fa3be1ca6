//! Build provenance baked into the binary at compile time.
//!
//! Values come from `build.rs`, which forwards the pipeline's
//! `VERSIONFLAG_*` variables. Anything the pipeline did not provide is an
//! empty string, never a missing field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const PROJECT_NAME: &str = "projectName";
pub const GIT_COMMIT: &str = "gitCommit";
pub const BUILD_TIME: &str = "buildTime";
pub const JENKINS_BUILD: &str = "jenkinsBuild";

const COMPILED_PROJECT_NAME: &str = env!("VERSIONFLAG_BUILD_PROJECT_NAME");
const COMPILED_GIT_COMMIT: &str = env!("VERSIONFLAG_BUILD_GIT_COMMIT");
const COMPILED_BUILD_TIME: &str = env!("VERSIONFLAG_BUILD_BUILD_TIME");
#[cfg(feature = "ci-build")]
const COMPILED_JENKINS_BUILD: &str = env!("VERSIONFLAG_BUILD_JENKINS_BUILD");

/// Identifying facts about a build.
///
/// `jenkins_build` is `None` when the CI identifier is not part of the
/// record at all, and `Some("")` when it is expected but was not injected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub git_commit: String,
    #[serde(default)]
    pub build_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jenkins_build: Option<String>,
}

impl BuildInfo {
    pub fn new(
        project_name: impl Into<String>,
        git_commit: impl Into<String>,
        build_time: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            git_commit: git_commit.into(),
            build_time: build_time.into(),
            jenkins_build: None,
        }
    }

    /// Adds the CI build identifier, turning this into the four-field record.
    pub fn with_jenkins_build(mut self, jenkins_build: impl Into<String>) -> Self {
        self.jenkins_build = Some(jenkins_build.into());
        self
    }

    /// Returns the values compiled into this crate by `build.rs`.
    pub fn compiled() -> Self {
        let info = Self::new(
            COMPILED_PROJECT_NAME,
            COMPILED_GIT_COMMIT,
            COMPILED_BUILD_TIME,
        );
        #[cfg(feature = "ci-build")]
        let info = info.with_jenkins_build(COMPILED_JENKINS_BUILD);
        info
    }

    /// Snapshot of every recognised field keyed by its printed name.
    pub fn get_build_information(&self) -> BTreeMap<&'static str, String> {
        self.fields()
            .into_iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect()
    }

    /// Names of the fields whose value is empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            (PROJECT_NAME, self.project_name.as_str()),
            (GIT_COMMIT, self.git_commit.as_str()),
            (BUILD_TIME, self.build_time.as_str()),
        ];
        if let Some(jenkins_build) = &self.jenkins_build {
            fields.push((JENKINS_BUILD, jenkins_build.as_str()));
        }
        fields
    }
}

/// Build information compiled into the running binary.
pub fn get_build_information() -> BTreeMap<&'static str, String> {
    BuildInfo::compiled().get_build_information()
}
