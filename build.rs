use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Per-target-dir counter, bumped on every rebuild of the crate
fn next_build_number(counter: &Path) -> u64 {
    let previous = fs::read_to_string(counter)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let next = previous + 1;
    if let Err(e) = fs::write(counter, next.to_string()) {
        println!("cargo:warning=could not record build number: {}", e);
    }
    next
}

fn short_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap_or_else(|_| ".".to_string()));
    let build = next_build_number(&out_dir.join("build_number"));

    let profile = match env::var("PROFILE").as_deref() {
        Ok("release") => "release",
        _ => "development",
    };

    let stamps = [
        ("CYRCIPHER_VERSION", env!("CARGO_PKG_VERSION").to_string()),
        ("CYRCIPHER_BUILD", build.to_string()),
        ("CYRCIPHER_PROFILE", profile.to_string()),
        ("CYRCIPHER_GIT_HASH", short_commit().unwrap_or_else(|| "unknown".to_string())),
    ];
    for (name, value) in stamps {
        println!("cargo:rustc-env={}={}", name, value);
    }

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
