use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed=QUIZMASTER_GIT_SHA");

    let sha = std::env::var("QUIZMASTER_GIT_SHA")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(short_git_sha)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=QUIZMASTER_GIT_SHA={sha}");
}

/// Abbreviated commit of the working tree, if git is available.
fn short_git_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}
