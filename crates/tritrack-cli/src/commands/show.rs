use crate::support::{load_session_or_exit, parse_var_or_exit};
use serde_json::{Value, json};
use tritrack_engine::Session;
use tritrack_kernel::VarId;

pub fn run(var: Option<String>, config: String, state: String, known: bool, json_output: bool) {
    let session = load_session_or_exit(&config, &state);

    match var {
        Some(var) => {
            let id = parse_var_or_exit(&session, &var);
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&var_payload(&session, &id))
                        .expect("json serialization")
                );
            } else {
                print_line(&session, &id);
            }
        }
        None => {
            let ids: Vec<VarId> = session
                .engine()
                .config()
                .catalog()
                .iter()
                .filter(|id| !known || session.get(id).is_known())
                .cloned()
                .collect();

            if json_output {
                let payload: Vec<Value> =
                    ids.iter().map(|id| var_payload(&session, id)).collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&payload).expect("json serialization")
                );
            } else {
                for id in &ids {
                    print_line(&session, id);
                }
            }
        }
    }
}

fn var_payload(session: &Session, id: &VarId) -> Value {
    let reference = session.var(id);
    json!({
        "id": id.as_str(),
        "display_name": reference.display_name(),
        "overall": reference.get().to_string(),
        "user_choice": reference.user_choice().to_string(),
        "alias": reference.is_alias(),
        "locked": reference.is_locked(),
        "locked_by": reference.locked_by().ok().map(|cause| cause.as_str().to_string()),
    })
}

fn print_line(session: &Session, id: &VarId) {
    let reference = session.var(id);
    let mut line = format!("{id} = {}", reference.get());
    if reference.user_choice().is_known() {
        line.push_str(&format!(" (user: {})", reference.user_choice()));
    }
    if let Ok(cause) = reference.locked_by() {
        line.push_str(&format!(" (locked by {cause})"));
    }
    if reference.is_alias() {
        line.push_str(" (alias)");
    }
    println!("{line}");
}
