use crate::support::{load_session_or_exit, save_state_or_exit};

pub fn run(config: String, state: String) {
    let mut session = load_session_or_exit(&config, &state);
    session.reset();
    save_state_or_exit(&session, &state);
    println!(
        "state reset ({} variables unknown)",
        session.engine().config().catalog().len()
    );
}
