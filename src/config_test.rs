use super::*;

const VARS: [&str; 7] = [
    "SERVICOS_BASE_URL",
    "SERVICOS_POLL_INTERVAL_SECS",
    "SERVICOS_REQUEST_TIMEOUT_SECS",
    "SERVICOS_CONNECT_TIMEOUT_SECS",
    "SERVICOS_LOADING_REGION",
    "SERVICOS_PREFERENCES_PATH",
    "SERVICOS_PREFERS_DARK",
];

/// # Safety
/// Only `from_env_defaults_then_overrides` touches the `SERVICOS_*` names,
/// so no other test races on them.
unsafe fn clear_servicos_env() {
    for var in VARS {
        unsafe { std::env::remove_var(var) };
    }
}

#[test]
fn from_env_defaults_then_overrides() {
    unsafe { clear_servicos_env() };

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.poll_interval, Duration::from_secs(30));

    unsafe {
        std::env::set_var("SERVICOS_BASE_URL", "https://servicos.example.test/");
        std::env::set_var("SERVICOS_POLL_INTERVAL_SECS", "5");
        std::env::set_var("SERVICOS_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("SERVICOS_CONNECT_TIMEOUT_SECS", "7");
        std::env::set_var("SERVICOS_LOADING_REGION", "#main");
        std::env::set_var("SERVICOS_PREFERENCES_PATH", "/tmp/prefs.json");
        std::env::set_var("SERVICOS_PREFERS_DARK", "yes");
    }

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://servicos.example.test");
    assert_eq!(cfg.poll_interval, Duration::from_secs(5));
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.loading_region, "#main");
    assert_eq!(cfg.preferences_path, PathBuf::from("/tmp/prefs.json"));
    assert!(cfg.prefers_dark);

    unsafe { std::env::set_var("SERVICOS_POLL_INTERVAL_SECS", "0") };
    let err = ClientConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: "SERVICOS_POLL_INTERVAL_SECS", .. }));

    unsafe { std::env::set_var("SERVICOS_POLL_INTERVAL_SECS", "soon") };
    assert!(ClientConfig::from_env().is_err());

    unsafe { clear_servicos_env() };
}

// =============================================================================
// parse_base_url
// =============================================================================

#[test]
fn base_url_defaults_when_absent_or_blank() {
    assert_eq!(parse_base_url(None).unwrap(), DEFAULT_BASE_URL);
    assert_eq!(parse_base_url(Some("   ")).unwrap(), DEFAULT_BASE_URL);
}

#[test]
fn base_url_trims_trailing_slashes() {
    assert_eq!(parse_base_url(Some("http://localhost:8080//")).unwrap(), "http://localhost:8080");
}

#[test]
fn base_url_rejects_non_http_schemes() {
    let err = parse_base_url(Some("ftp://files.example")).unwrap_err();
    assert!(err.to_string().contains("ftp://files.example"));
    assert!(parse_base_url(Some("localhost:5000")).is_err());
}

// =============================================================================
// env_u64 / env_bool — unique names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_u64_uses_default_when_unset() {
    assert_eq!(env_u64("__TEST_SV_U64_UNSET_118__", 9).unwrap(), 9);
}

#[test]
fn env_u64_parses_trimmed_value() {
    let key = "__TEST_SV_U64_SET_119__";
    unsafe { std::env::set_var(key, " 12 ") };
    assert_eq!(env_u64(key, 9).unwrap(), 12);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_variants() {
    for (i, (val, expected)) in [("1", Some(true)), ("On", Some(true)), ("no", Some(false)), ("maybe", None)]
        .iter()
        .enumerate()
    {
        let key = format!("__TEST_SV_BOOL_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), *expected, "unexpected result for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
    assert_eq!(env_bool("__TEST_SV_BOOL_SURELY_UNSET__"), None);
}

#[test]
fn timeouts_convert_to_durations() {
    let t = HttpTimeouts { request_secs: 3, connect_secs: 1 };
    assert_eq!(t.request(), Duration::from_secs(3));
    assert_eq!(t.connect(), Duration::from_secs(1));
}
