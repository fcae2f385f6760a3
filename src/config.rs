use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Default config file, resolved relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/whatsapp-gateway";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub whatsapp: WhatsAppConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhatsAppConfig {
    /// Session name handed to the automation worker
    pub session: String,
    pub nats_url: String,
    /// First token of every NATS subject used by the bridge
    pub subject_prefix: String,
    pub browser: BrowserConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    pub headless: bool,
    pub devtools: bool,
    pub use_chrome: bool,
    pub debug: bool,
    pub log_qr: bool,
    /// Connect to an already running browser instead of launching one
    pub browser_ws: String,
    pub args: Vec<String>,
    pub ignore_default_args: Vec<String>,
    /// Explicit executable; when unset the first existing candidate is used
    pub executable_path: Option<String>,
    pub executable_candidates: Vec<String>,
    pub timeout_ms: u64,
    pub disable_welcome: bool,
    pub updates_log: bool,
    /// Seconds before the worker closes an unauthenticated session (0 = never)
    pub auto_close: u64,
}

/// Chromium flags suited to running inside a small container
pub const DEFAULT_BROWSER_ARGS: &[&str] = &[
    "--no-sandbox",
    "--disable-setuid-sandbox",
    "--disable-dev-shm-usage",
    "--disable-accelerated-2d-canvas",
    "--no-first-run",
    "--no-zygote",
    "--single-process",
    "--disable-gpu",
    "--disable-features=AudioService",
    "--disable-background-timer-throttling",
    "--disable-backgrounding-occluded-windows",
    "--disable-renderer-backgrounding",
    "--memory-pressure-off",
];

pub const DEFAULT_EXECUTABLE_CANDIDATES: &[&str] = &[
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/usr/bin/google-chrome-stable",
    "/usr/bin/google-chrome",
];

impl Config {
    /// Load defaults, then the optional file at `path`, then `PORT` from the
    /// process environment
    pub fn load(path: &str) -> Result<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_with_env(path, &env)
    }

    /// Same as [`Config::load`] but reads overrides from `env` instead of the
    /// process environment
    pub fn load_with_env(path: &str, env: &HashMap<String, String>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("service.name", "whatsapp-gateway")?
            .set_default("service.http.bind", "0.0.0.0")?
            .set_default("service.http.port", 8080)?
            .set_default("whatsapp.session", "milhasstudio")?
            .set_default("whatsapp.nats_url", "nats://localhost:4222")?
            .set_default("whatsapp.subject_prefix", "whatsapp")?
            .set_default("whatsapp.browser.headless", true)?
            .set_default("whatsapp.browser.devtools", false)?
            .set_default("whatsapp.browser.use_chrome", true)?
            .set_default("whatsapp.browser.debug", false)?
            .set_default("whatsapp.browser.log_qr", true)?
            .set_default("whatsapp.browser.browser_ws", "")?
            .set_default("whatsapp.browser.args", to_strings(DEFAULT_BROWSER_ARGS))?
            .set_default(
                "whatsapp.browser.ignore_default_args",
                vec!["--disable-extensions".to_string()],
            )?
            .set_default(
                "whatsapp.browser.executable_candidates",
                to_strings(DEFAULT_EXECUTABLE_CANDIDATES),
            )?
            .set_default("whatsapp.browser.timeout_ms", 60_000)?
            .set_default("whatsapp.browser.disable_welcome", true)?
            .set_default("whatsapp.browser.updates_log", false)?
            .set_default("whatsapp.browser.auto_close", 0)?
            .add_source(config::File::with_name(path).required(false));

        // An empty PORT counts as unset
        if let Some(port) = env.get("PORT").filter(|p| !p.is_empty()) {
            builder = builder.set_override("service.http.port", port.as_str())?;
        }

        let settings = builder.build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
