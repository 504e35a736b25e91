use super::*;

#[test]
fn no_filter_means_disabled() {
    let config = TracingConfig::from_vars(None, Some("1".to_string()));
    assert!(!config.is_enabled());
    assert!(config.tree);
}

#[test]
fn blank_filter_is_ignored() {
    let config = TracingConfig::from_vars(Some("  ".to_string()), None);
    assert_eq!(config, TracingConfig::default());
}

#[test]
fn filter_is_kept_verbatim() {
    let config = TracingConfig::from_vars(Some("weft_bind=trace".to_string()), None);
    assert_eq!(config.filter.as_deref(), Some("weft_bind=trace"));
    assert!(!config.tree);
}

#[test]
fn tree_flag_values() {
    for on in ["1", "true", "YES", " on "] {
        assert!(is_truthy(on), "{on:?} should enable the tree layer");
    }
    for off in ["0", "false", "", "tree"] {
        assert!(!is_truthy(off), "{off:?} should not enable the tree layer");
    }
}

#[test]
fn disabled_config_installs_nothing() {
    init_tracing_with(&TracingConfig::default());
    assert!(!TRACING_INIT.is_completed());
}
