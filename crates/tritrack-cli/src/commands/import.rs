use crate::support::{load_session_or_exit, save_state_or_exit};

pub fn run(codes: String, config: String, state: String) {
    let mut session = load_session_or_exit(&config, &state);

    let codes: Vec<String> = serde_json::from_str(&codes).unwrap_or_else(|e| {
        eprintln!("error: failed to parse code sequence: {e}");
        std::process::exit(1);
    });
    session.import(&codes).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    save_state_or_exit(&session, &state);
    let known = session.binding().user().known_ids().count();
    println!("imported {} codes ({known} definite)", codes.len());
}
