//! Embeds commit and build-time markers for `chatsh --version`.
//!
//! Missing git or date tooling degrades to "unknown" rather than failing the build.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    if let Ok(head) = std::fs::read_to_string(".git/HEAD") {
        if let Some(reference) = head.trim().strip_prefix("ref: ") {
            println!("cargo:rerun-if-changed=.git/{reference}");
        }
    }
    println!("cargo:rerun-if-env-changed=CHATSH_BUILD_GIT_HASH");
    println!("cargo:rerun-if-env-changed=CHATSH_BUILD_TIMESTAMP");

    let git_hash = env::var("CHATSH_BUILD_GIT_HASH").unwrap_or_else(|_| {
        capture("git", &["rev-parse", "--short=12", "HEAD"]).unwrap_or_else(|| "unknown".into())
    });
    let built = env::var("CHATSH_BUILD_TIMESTAMP").unwrap_or_else(|_| {
        capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            format!("unix:{secs}")
        })
    });

    println!("cargo:rustc-env=CHATSH_BUILD_GIT_HASH={git_hash}");
    println!("cargo:rustc-env=CHATSH_BUILD_TIMESTAMP={built}");
}

fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
