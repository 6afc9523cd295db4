//! Startup check: configuration present, store reachable.

use crate::config::Settings;
use crate::gateway::TodoGateway;

pub struct CheckResult {
    pub ok: bool,
    pub errors: Vec<String>,
}

pub fn check_environment() -> CheckResult {
    let mut errors = Vec::new();

    match Settings::load() {
        Ok(settings) => {
            let gateway = TodoGateway::new(&settings);
            if let Err(e) = gateway.probe() {
                errors.push(format!("store is not reachable at {}: {}", settings.url, e));
            }
        }
        Err(e) => errors.push(e.to_string()),
    }

    CheckResult {
        ok: errors.is_empty(),
        errors,
    }
}

/// Run the check and print a human-readable report. Exit code 1 on failure.
pub fn execute() {
    let result = check_environment();
    if result.ok {
        eprintln!("✓ configuration ok, store reachable");
        return;
    }
    for err in &result.errors {
        eprintln!("  ✗ {}", err);
    }
    std::process::exit(1);
}
