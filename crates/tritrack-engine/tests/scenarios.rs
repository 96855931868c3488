//! Integration tests: end-to-end inference scenarios over small catalogs.
//!
//! Each scenario builds a configuration the way a host would (catalog +
//! requirement table + alias table), drives it through the session
//! surface, and checks the derived state, the lock provenance, and the
//! failure modes.

use std::collections::BTreeMap;
use tritrack_engine::{
    AliasDef, BindError, Engine, EngineConfig, Requirement, Session, SessionError,
};
use tritrack_kernel::{Catalog, State, Trit, VarId, codec};

fn id(s: &str) -> VarId {
    VarId::from(s)
}

fn config(
    variables: &[&str],
    edges: &[(&str, &str)],
    aliases: &[(&str, &str)],
) -> EngineConfig {
    EngineConfig::new(
        Catalog::new(variables.iter().map(|v| VarId::from(*v))),
        edges
            .iter()
            .map(|(requirement, dependent)| Requirement::new(*requirement, *dependent))
            .collect(),
        aliases
            .iter()
            .map(|(alias, truth)| AliasDef::new(*alias, *truth))
            .collect(),
    )
    .expect("scenario config must validate")
}

fn session(
    variables: &[&str],
    edges: &[(&str, &str)],
    aliases: &[(&str, &str)],
) -> Session {
    Session::new(Engine::new(config(variables, edges, aliases)).expect("scenario graph is a DAG"))
}

#[test]
fn false_requirement_locks_dependent_and_names_the_cause() {
    let mut session = session(&["A", "B", "C"], &[("A", "B")], &[]);

    session.set(&id("A"), Trit::False).expect("A is free");
    assert_eq!(session.get(&id("B")), Trit::False);
    assert_eq!(session.locked_by(&id("B")).expect("B is locked"), &id("A"));

    let err = session
        .set(&id("B"), Trit::True)
        .expect_err("B is derived false");
    match err {
        SessionError::Locked { variable, cause } => {
            assert_eq!(variable, id("B"));
            assert_eq!(cause, id("A"));
            // The rendered message points the user at the variable to revisit.
            let message = SessionError::Locked { variable, cause }.to_string();
            assert!(message.contains('A'), "message must mention the cause: {message}");
        }
        other => panic!("expected a lock failure, got: {other}"),
    }
}

#[test]
fn true_dependent_derives_its_requirement() {
    let mut session = session(&["A", "B", "C"], &[("A", "B")], &[]);

    session.set(&id("B"), Trit::True).expect("B is free");
    assert_eq!(session.get(&id("A")), Trit::True);
    assert_eq!(session.locked_by(&id("A")).expect("A is locked"), &id("B"));
}

#[test]
fn mutual_requirement_fails_at_engine_construction() {
    let config = config(&["A", "B"], &[("A", "B"), ("B", "A")], &[]);
    let err = Engine::new(config).expect_err("two-cycle must fail before any user input");
    let unordered: Vec<&str> = err.unordered.iter().map(VarId::as_str).collect();
    assert_eq!(unordered, vec!["A", "B"]);
}

#[test]
fn alias_writes_route_to_ground_truth() {
    let mut session = session(&["A", "B", "D"], &[("A", "B")], &[("D", "A")]);

    session.set(&id("D"), Trit::True).expect("alias set routes to A");
    assert_eq!(session.get(&id("A")), Trit::True);
    assert_eq!(session.user_choice(&id("A")), Trit::True);
}

#[test]
fn retracting_an_assertion_blocked_once_its_closure_is_pinned() {
    // C requires B requires A. While only A=true is asserted nothing is
    // derived from it, so flipping A is free. Once C=true pins the whole
    // chain true, A itself becomes derived and the flip is rejected with
    // C as the cause to revisit.
    let mut free = session(&["A", "B", "C"], &[("A", "B"), ("B", "C")], &[]);
    free.set(&id("A"), Trit::True).expect("A is free");
    free.set(&id("A"), Trit::False).expect("nothing was derived from A");
    assert_eq!(free.get(&id("B")), Trit::False);

    let mut pinned = session(&["A", "B", "C"], &[("A", "B"), ("B", "C")], &[]);
    pinned.set(&id("A"), Trit::True).expect("A is free");
    pinned.set(&id("C"), Trit::True).expect("C is free");
    assert_eq!(pinned.get(&id("B")), Trit::True);

    let err = pinned
        .set(&id("A"), Trit::False)
        .expect_err("the chain from C pins A true");
    assert!(matches!(
        err,
        SessionError::Locked { variable, cause }
            if variable.as_str() == "A" && cause.as_str() == "C"
    ));
}

#[test]
fn inconsistent_assembled_state_is_a_contradiction() {
    // The same clash that `set` preempts through the lock check still
    // surfaces as a fatal contradiction when an already-assembled state
    // arrives wholesale.
    let config = config(&["A", "B", "C"], &[("A", "B"), ("B", "C")], &[]);
    let engine = Engine::new(config).expect("scenario graph is a DAG");

    let mut user = engine.blank_state();
    user.set(&id("A"), Trit::False).expect("A is in the catalog");
    user.set(&id("C"), Trit::True).expect("C is in the catalog");

    let err = Session::restore(engine, &user).expect_err("A=false clashes with C=true");
    assert!(matches!(
        err,
        BindError::Contradiction { variable, cause, .. }
            if variable.as_str() == "C" && cause.as_str() == "A"
    ));
}

#[test]
fn blank_catalog_encodes_to_empty_codes() {
    let config = config(&["A", "B", "C"], &[], &[]);
    let blank = State::blank(config.catalog());

    let codes = codec::encode(&blank, config.catalog());
    assert_eq!(codes, vec!["", "", ""]);

    let decoded = codec::decode(&codes, config.catalog()).expect("blank decodes");
    assert!(decoded.is_blank());
}

// Soundness: along every edge, a true dependent has a true requirement and
// a false requirement has a false dependent.
#[test]
fn propagation_is_sound_across_a_layered_graph() {
    let variables = ["A", "B", "C", "D", "E", "F"];
    let edges = [("A", "C"), ("B", "C"), ("C", "E"), ("D", "E"), ("E", "F")];

    for (var, value) in [("F", Trit::True), ("A", Trit::False), ("C", Trit::False)] {
        let mut session = session(&variables, &edges, &[]);
        session.set(&id(var), value).expect("assertion on a blank session");

        let overall = session.binding().overall();
        for (requirement, dependent) in &edges {
            if overall.get(&id(dependent)) == Trit::True {
                assert_eq!(
                    overall.get(&id(requirement)),
                    Trit::True,
                    "{dependent}=true requires {requirement}=true after {var}={value}"
                );
            }
            if overall.get(&id(requirement)) == Trit::False {
                assert_eq!(
                    overall.get(&id(dependent)),
                    Trit::False,
                    "{requirement}=false forces {dependent}=false after {var}={value}"
                );
            }
        }
    }
}

#[test]
fn alias_mirrors_hold_after_every_bind() {
    let mut session = session(
        &["A", "B", "D", "E"],
        &[("A", "B")],
        &[("D", "A"), ("E", "B")],
    );

    for (var, value) in [("B", Trit::True), ("B", Trit::Unknown), ("A", Trit::False)] {
        session.set(&id(var), value).expect("scenario assertions are free");
        let binding = session.binding();
        for (alias, truth) in [("D", "A"), ("E", "B")] {
            assert_eq!(binding.overall().get(&id(alias)), binding.overall().get(&id(truth)));
            assert_eq!(binding.user().get(&id(alias)), binding.user().get(&id(truth)));
        }
    }
}

#[test]
fn bound_overall_state_renders_stably() {
    let mut session = session(&["A", "B", "C", "D"], &[("A", "B")], &[("D", "A")]);
    session.set(&id("A"), Trit::False).expect("A is free");

    // A=false forces B false, D mirrors A, C stays untouched.
    insta::assert_json_snapshot!(session.binding().overall(), @r###"
    {
      "values": {
        "A": "false",
        "B": "false",
        "C": "unknown",
        "D": "false"
      }
    }
    "###);
}

#[test]
fn export_decode_round_trips_byte_for_byte() {
    let mut session = session(&["A", "B", "C", "D"], &[("A", "B")], &[]);
    session.set(&id("C"), Trit::True).expect("C is free");
    session.set(&id("D"), Trit::False).expect("D is free");

    let codes = session.export();
    let catalog = session.engine().config().catalog();
    let decoded = codec::decode(&codes, catalog).expect("export is well-formed");
    assert_eq!(codec::encode(&decoded, catalog), codes);
    assert_eq!(codec::fingerprint(&codes), codec::fingerprint(&session.export()));
}

// Lock monotonicity: a lock keeps its ultimate cause until the cause's own
// assertion is cleared.
#[test]
fn locks_keep_their_cause_until_it_is_cleared() {
    let mut session = session(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C")], &[]);

    session.set(&id("A"), Trit::False).expect("A is free");
    assert_eq!(session.locked_by(&id("C")).expect("C is locked"), &id("A"));

    // An unrelated mutation leaves the lock and its cause in place.
    session.set(&id("D"), Trit::True).expect("D is free");
    assert_eq!(session.locked_by(&id("C")).expect("C is still locked"), &id("A"));

    // Clearing the cause releases the whole chain.
    session.set(&id("A"), Trit::Unknown).expect("clearing the cause");
    assert!(!session.is_locked(&id("C")));
    assert!(!session.is_locked(&id("B")));
    assert_eq!(session.get(&id("C")), Trit::Unknown);
}

#[test]
fn locked_reason_label_reaches_the_host_wording() {
    let mut session = session(&["A", "quiz.B"], &[("quiz.B", "A")], &[]);
    session.set(&id("A"), Trit::True).expect("A is free");

    // quiz.B is the derived one here: A=true forces its requirement true.
    let derived = session.var(&id("quiz.B"));
    assert_eq!(derived.get(), Trit::True);
    assert!(derived.is_locked());
    assert!(!session.var(&id("A")).is_locked(), "A was asserted, not derived");

    let labels = BTreeMap::from([(id("A"), "Did you open the vault?".to_string())]);
    assert_eq!(
        derived
            .locked_reason_label(&labels)
            .expect("quiz.B is locked"),
        "Did you open the vault?"
    );
}

#[test]
fn derived_lock_label_falls_back_to_display_name() {
    let mut session = session(
        &["quiz.First Answer", "B"],
        &[("quiz.First Answer", "B")],
        &[],
    );
    session.set(&id("B"), Trit::True).expect("B is free");

    assert!(session.is_locked(&id("quiz.First Answer")));
    let label = session
        .locked_reason_label(&id("quiz.First Answer"), &BTreeMap::new())
        .expect("variable is locked");
    assert_eq!(label, "B");

    let labels = BTreeMap::from([(id("B"), "Question 2".to_string())]);
    let label = session
        .locked_reason_label(&id("quiz.First Answer"), &labels)
        .expect("variable is locked");
    assert_eq!(label, "Question 2");
}
