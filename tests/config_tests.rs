// Configuration layering: defaults, file, then PORT

use std::collections::HashMap;
use std::io::Write;
use whatsapp_gateway::config::DEFAULT_BROWSER_ARGS;
use whatsapp_gateway::Config;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults_without_file() {
    let cfg = Config::load_with_env("does/not/exist", &HashMap::new()).unwrap();

    assert_eq!(cfg.service.name, "whatsapp-gateway");
    assert_eq!(cfg.service.http.bind, "0.0.0.0");
    assert_eq!(cfg.service.http.port, 8080);
    assert_eq!(cfg.whatsapp.session, "milhasstudio");
    assert_eq!(cfg.whatsapp.nats_url, "nats://localhost:4222");
    assert_eq!(cfg.whatsapp.subject_prefix, "whatsapp");

    let browser = &cfg.whatsapp.browser;
    assert!(browser.headless);
    assert!(!browser.devtools);
    assert_eq!(browser.timeout_ms, 60_000);
    assert_eq!(browser.auto_close, 0);
    assert_eq!(browser.args.len(), DEFAULT_BROWSER_ARGS.len());
    assert_eq!(browser.executable_path, None);
    assert_eq!(browser.executable_candidates[0], "/usr/bin/chromium");
}

#[test]
fn test_file_overrides_defaults() {
    let file = write_config(
        r#"
[service.http]
port = 3000

[whatsapp]
session = "support"

[whatsapp.browser]
headless = false
executable_path = "/opt/chrome/chrome"
"#,
    );

    let cfg = Config::load_with_env(file.path().to_str().unwrap(), &HashMap::new()).unwrap();

    assert_eq!(cfg.service.http.port, 3000);
    assert_eq!(cfg.service.http.bind, "0.0.0.0");
    assert_eq!(cfg.whatsapp.session, "support");
    assert!(!cfg.whatsapp.browser.headless);
    assert_eq!(
        cfg.whatsapp.browser.executable_path.as_deref(),
        Some("/opt/chrome/chrome")
    );
}

#[test]
fn test_port_env_overrides_file() {
    let file = write_config("[service.http]\nport = 3000\n");

    let cfg = Config::load_with_env(file.path().to_str().unwrap(), &env(&[("PORT", "9090")]))
        .unwrap();

    assert_eq!(cfg.service.http.port, 9090);
}

#[test]
fn test_invalid_port_env_is_an_error() {
    let result = Config::load_with_env("does/not/exist", &env(&[("PORT", "not-a-port")]));
    assert!(result.is_err());
}

#[test]
fn test_empty_port_env_falls_back_to_default() {
    let cfg = Config::load_with_env("does/not/exist", &env(&[("PORT", "")])).unwrap();
    assert_eq!(cfg.service.http.port, 8080);
}
