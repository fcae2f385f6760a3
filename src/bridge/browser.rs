use super::messages::CreateSessionRequest;
use crate::config::BrowserConfig;
use std::path::Path;
use tracing::{info, warn};

/// Pick the browser executable the worker should launch
///
/// An explicit `executable_path` wins. Otherwise the first candidate that
/// exists on this machine is used. The probe only means something when the
/// worker shares the gateway's filesystem; on `None` the candidate list is
/// still sent and the worker resolves it on its own host.
pub fn resolve_executable(config: &BrowserConfig) -> Option<String> {
    if let Some(path) = &config.executable_path {
        return Some(path.clone());
    }

    let found = config
        .executable_candidates
        .iter()
        .find(|candidate| Path::new(candidate.as_str()).exists())
        .cloned();

    match &found {
        Some(path) => info!("Using Chromium at {}", path),
        None => warn!("No Chromium executable found, worker will use its default"),
    }

    found
}

/// Build the session creation request for `session` from browser settings
pub fn create_session_request(session: &str, config: &BrowserConfig) -> CreateSessionRequest {
    CreateSessionRequest {
        session: session.to_string(),
        headless: config.headless,
        devtools: config.devtools,
        use_chrome: config.use_chrome,
        debug: config.debug,
        log_qr: config.log_qr,
        browser_ws: config.browser_ws.clone(),
        browser_args: config.args.clone(),
        ignore_default_args: config.ignore_default_args.clone(),
        executable_path: resolve_executable(config),
        executable_candidates: config.executable_candidates.clone(),
        timeout_ms: config.timeout_ms,
        disable_welcome: config.disable_welcome,
        updates_log: config.updates_log,
        auto_close: config.auto_close,
    }
}
