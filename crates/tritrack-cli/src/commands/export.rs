use crate::support::load_session_or_exit;
use tritrack_kernel::codec;

pub fn run(config: String, state: String, fingerprint: bool) {
    let session = load_session_or_exit(&config, &state);
    let codes = session.export();

    if fingerprint {
        println!("{}", codec::fingerprint(&codes));
    } else {
        println!(
            "{}",
            serde_json::to_string(&codes).expect("json serialization")
        );
    }
}
