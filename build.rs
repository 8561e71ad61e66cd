//! Build script for the BookMS auth crate
//!
//! Provides `BUILD_TIME`, `GIT_HASH` and `RUST_VERSION` to `bookms_auth::build_info`.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let build_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let git_hash = command_output("git", &["rev-parse", "--short", "HEAD"]);
    let rust_version = command_output("rustc", &["--version"]);

    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=RUST_VERSION={}", rust_version);
    println!("cargo:rerun-if-changed=.git/HEAD");
}

/// Trimmed stdout of a successful command, `unknown` otherwise
fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|stdout| stdout.trim().to_string())
        .filter(|stdout| !stdout.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
