/// Short commit the bundle was built from, `"unknown"` outside a git checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("QUIZMASTER_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Footer label, e.g. `QuizMaster v0.1.0 (abc1234)`.
pub fn version_label(app_name: &str) -> String {
    format!(
        "{app_name} v{} ({})",
        env!("CARGO_PKG_VERSION"),
        git_commit_hash()
    )
}

#[cfg(test)]
mod tests {
    use super::version_label;

    #[test]
    fn version_label_includes_name_and_version() {
        let label = version_label("QuizMaster");
        assert!(label.starts_with("QuizMaster v"));
        assert!(label.contains(env!("CARGO_PKG_VERSION")));
        assert!(label.ends_with(')'));
    }
}
