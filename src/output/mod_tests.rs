use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_from_str_rejects_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("sarif"));
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn color_mode_explicit_choices() {
    assert!(ColorMode::Always.use_colors());
    assert!(!ColorMode::Never.use_colors());
}

#[test]
fn formatters_share_trait() {
    let diagnostics = crate::checker::run_checks("fix");
    let report = MessageReport {
        commit: Some("deadbeef"),
        message: "fix",
        diagnostics: &diagnostics,
    };
    let formatters: [Box<dyn OutputFormatter>; 2] = [
        Box::new(TextFormatter::with_colors(false)),
        Box::new(JsonFormatter),
    ];
    for formatter in &formatters {
        assert!(!formatter.format(&report).unwrap().is_empty());
    }
}
