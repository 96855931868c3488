use std::path::Path;
use tritrack_engine::{Engine, Session, load_config};
use tritrack_kernel::{Trit, VarId};

/// Load and validate the configuration, then build the engine.
///
/// Both failure classes here — malformed config and cyclic graph — are
/// fatal before any state is read.
pub fn load_engine_or_exit(config_arg: &str) -> Engine {
    let config = load_config(config_arg).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    Engine::new(config).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

/// Load the session from the persisted state file, blank if absent.
pub fn load_session_or_exit(config_arg: &str, state_arg: &str) -> Session {
    let engine = load_engine_or_exit(config_arg);
    let path = Path::new(state_arg);
    if !path.exists() {
        return Session::new(engine);
    }

    let raw = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read {state_arg}: {e}");
        std::process::exit(1);
    });
    let codes: Vec<String> = serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("error: failed to parse {state_arg}: {e}");
        std::process::exit(1);
    });

    let mut session = Session::new(engine);
    session.import(&codes).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    session
}

/// Persist the session's user state.
pub fn save_state_or_exit(session: &Session, state_arg: &str) {
    let path = Path::new(state_arg);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                eprintln!("error: failed to create {}: {e}", parent.display());
                std::process::exit(1);
            });
        }
    }

    let payload = serde_json::to_string(&session.export()).expect("json serialization");
    std::fs::write(path, payload).unwrap_or_else(|e| {
        eprintln!("error: failed to write {state_arg}: {e}");
        std::process::exit(1);
    });
}

pub fn parse_var_or_exit(session: &Session, var: &str) -> VarId {
    let id = VarId::new(var);
    if !session.engine().config().catalog().contains(&id) {
        eprintln!("error: unknown variable: {var}");
        std::process::exit(1);
    }
    id
}

pub fn parse_trit_or_exit(value: &str) -> Trit {
    value.parse().unwrap_or_else(|e: String| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}
