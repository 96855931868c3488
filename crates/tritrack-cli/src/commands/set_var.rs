use crate::support::{load_session_or_exit, parse_trit_or_exit, parse_var_or_exit, save_state_or_exit};
use tritrack_engine::SessionError;

pub fn run(var: String, value: String, config: String, state: String) {
    let mut session = load_session_or_exit(&config, &state);
    let id = parse_var_or_exit(&session, &var);
    let value = parse_trit_or_exit(&value);

    match session.set(&id, value) {
        Ok(()) => {
            save_state_or_exit(&session, &state);
            println!("{id} = {}", session.get(&id));
        }
        Err(SessionError::Locked { variable, cause }) => {
            let label = session.engine().config().catalog().display_name(&cause);
            eprintln!(
                "error: {variable} was derived from \u{201c}{label}\u{201d}; revisit that answer first"
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
