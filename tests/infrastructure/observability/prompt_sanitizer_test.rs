use docquest::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_unchanged() {
    let prompt = "Extract the questions from this worksheet";
    assert_eq!(sanitize_prompt(prompt), prompt);
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "q".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.starts_with(&"q".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("abc123xyz"));
}

#[test]
fn given_provider_key_literal_when_sanitizing_then_key_is_masked() {
    let result = sanitize_prompt("use sk-ant-api03-secretvalue please");
    assert_eq!(result, "use [REDACTED] please");
}

#[test]
fn given_password_assignment_when_sanitizing_then_redacts_value() {
    let result = sanitize_prompt("login password=hunter2 now");
    assert_eq!(result, "login password=[REDACTED] now");
}

#[test]
fn given_multibyte_prompt_when_truncating_then_char_boundaries_are_respected() {
    let prompt = "é".repeat(120);
    let result = sanitize_prompt(&prompt);
    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}
