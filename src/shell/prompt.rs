//! Prompt Formatting

use std::env;

/// Build the prompt for one input line.
///
/// A custom prompt string wins verbatim; otherwise `user@host:path$ ` with
/// identity taken from the environment.
pub fn format_prompt(custom: Option<&str>, current_path: &str) -> String {
    if let Some(custom) = custom {
        return custom.to_string();
    }
    let user = env::var("USER").unwrap_or_else(|_| "user".to_string());
    let host = env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
    format!("{user}@{host}:{current_path}$ ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_prompt_wins() {
        assert_eq!(format_prompt(Some("> "), "/docs"), "> ");
    }

    #[test]
    fn test_default_prompt_shape() {
        let prompt = format_prompt(None, "/docs");
        assert!(prompt.contains('@'));
        assert!(prompt.ends_with(":/docs$ "));
    }
}
