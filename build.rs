use std::env;

#[path = "src/injection.rs"]
mod injection;

use injection::{injected_value, INJECTED};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/injection.rs");

    for (source, target) in INJECTED {
        println!("cargo:rerun-if-env-changed={source}");

        let value = injected(source).unwrap_or_else(|| fallback(source));
        println!("cargo:rustc-env={target}={value}");
    }
}

fn injected(name: &str) -> Option<String> {
    injected_value(env::var(name).ok().as_deref())
}

#[cfg(not(feature = "auto-metadata"))]
fn fallback(_name: &str) -> String {
    String::new()
}

#[cfg(feature = "auto-metadata")]
fn fallback(name: &str) -> String {
    match name {
        "VERSIONFLAG_GIT_COMMIT" => {
            println!("cargo:rerun-if-changed=.git/HEAD");
            println!("cargo:rerun-if-changed=.git/refs");
            git_rev_parse()
        }
        "VERSIONFLAG_BUILD_TIME" => {
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        }
        _ => String::new(),
    }
}

#[cfg(feature = "auto-metadata")]
fn git_rev_parse() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
