//! End-to-end form flows: build, validate, submit, payload.

use std::sync::{Arc, Mutex};

use formcheck::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Shared recording presenter so tests can inspect callbacks after the
/// form takes ownership of its copy.
#[derive(Clone, Default)]
struct RecordingUi {
    invalid: Arc<Mutex<Vec<(String, String)>>>,
    valid: Arc<Mutex<Vec<String>>>,
}

impl RecordingUi {
    fn invalid(&self) -> Vec<(String, String)> {
        self.invalid.lock().unwrap().clone()
    }

    fn valid(&self) -> Vec<String> {
        self.valid.lock().unwrap().clone()
    }
}

impl FormUi for RecordingUi {
    fn mark_invalid(&self, field: &str, message: &str) {
        self.invalid
            .lock()
            .unwrap()
            .push((field.to_owned(), message.to_owned()));
    }

    fn mark_valid(&self, field: &str) {
        self.valid.lock().unwrap().push(field.to_owned());
    }
}

fn signup_form(ui: RecordingUi) -> Form {
    Form::builder()
        .input(Input::text("email").rules("required|email"))
        .input(Input::text("password").id("password").rules("required|min:6"))
        .input(Input::text("password2").rules("required|confirmation:#password"))
        .ui(ui)
        .build()
        .unwrap()
}

#[test]
fn valid_signup_submits_payload_to_callback() {
    let received = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&received);

    let form = Form::builder()
        .input(Input::text("email").rules("required|email"))
        .input(Input::text("password").id("password").rules("required|min:6"))
        .input(Input::text("password2").rules("required|confirmation:#password"))
        .on_submit(move |payload| {
            *sink.lock().unwrap() = Some(payload.to_json().unwrap());
        })
        .build()
        .unwrap();

    form.set_value("email", "user@example.com");
    form.set_value("password", "hunter42");
    form.set_value("password2", "hunter42");

    assert!(matches!(form.submit(), SubmitOutcome::Submitted(_)));
    assert_eq!(
        received.lock().unwrap().take().unwrap(),
        json!({
            "email": "user@example.com",
            "password": "hunter42",
            "password2": "hunter42",
        })
    );
}

#[test]
fn submit_validates_every_field_without_short_circuit() {
    let ui = RecordingUi::default();
    let form = signup_form(ui.clone());
    // All three fields empty: every one must report, not just the first.
    assert!(matches!(form.submit(), SubmitOutcome::Rejected));

    let reported: Vec<String> = ui.invalid().into_iter().map(|(field, _)| field).collect();
    assert_eq!(reported, vec!["email", "password", "password2"]);
}

#[test]
fn rejected_submit_never_reaches_callback() {
    let calls = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&calls);

    let form = Form::builder()
        .input(Input::text("email").rules("required|email"))
        .on_submit(move |_payload| *counter.lock().unwrap() += 1)
        .build()
        .unwrap();

    form.set_value("email", "not-an-email");
    assert!(matches!(form.submit(), SubmitOutcome::Rejected));
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn valid_submit_without_callback_falls_through() {
    let form = Form::builder()
        .input(Input::text("email").value("a@b.co").rules("required|email"))
        .build()
        .unwrap();
    assert!(matches!(form.submit(), SubmitOutcome::DefaultSubmission));
}

#[test]
fn field_validation_short_circuits_at_first_failure() {
    let ui = RecordingUi::default();
    let form = signup_form(ui.clone());

    // Empty password fails required; min must stay silent.
    assert_eq!(form.validate_field("password"), Some(false));
    assert_eq!(
        ui.invalid(),
        vec![("password".to_owned(), "Please enter a value".to_owned())]
    );

    // A present-but-short password reaches min.
    form.set_value("password", "abc");
    assert_eq!(form.validate_field("password"), Some(false));
    assert_eq!(
        ui.invalid().last().unwrap().1,
        "Please enter at least 6 characters"
    );
}

#[test]
fn revalidation_is_idempotent_and_tracks_edits() {
    let ui = RecordingUi::default();
    let form = signup_form(ui.clone());

    form.set_value("email", "user@example.com");
    assert_eq!(form.validate_field("email"), Some(true));
    assert_eq!(form.validate_field("email"), Some(true));
    assert_eq!(ui.valid(), vec!["email", "email"]);

    form.set_value("email", "broken");
    assert_eq!(form.validate_field("email"), Some(false));
}

#[test]
fn confirmation_reads_referenced_value_lazily() {
    let ui = RecordingUi::default();
    let form = signup_form(ui.clone());

    form.set_value("password", "hunter42");
    form.set_value("password2", "hunter42");
    assert_eq!(form.validate_field("password2"), Some(true));

    // Editing the referenced field invalidates the confirmation without
    // touching the confirming field.
    form.set_value("password", "changed!");
    assert_eq!(form.validate_field("password2"), Some(false));
    assert_eq!(
        ui.invalid().last().unwrap().1,
        "Please enter the same confirmation value"
    );
}

#[test]
fn clear_field_marks_valid_without_running_rules() {
    let ui = RecordingUi::default();
    let form = signup_form(ui.clone());

    assert!(form.clear_field("email"));
    assert_eq!(ui.valid(), vec!["email"]);
    assert!(ui.invalid().is_empty());
    assert!(!form.clear_field("ghost"));
}

#[test]
fn checkbox_group_payload_lists_checked_values() {
    let form = Form::builder()
        .input(Input::checkbox("color", "red"))
        .input(Input::checkbox("color", "blue"))
        .input(Input::checkbox("color", "green"))
        .on_submit(|_| {})
        .build()
        .unwrap();

    form.set_checked("color", "red", true);
    form.set_checked("color", "green", true);

    match form.submit() {
        SubmitOutcome::Submitted(payload) => {
            assert_eq!(payload.to_json().unwrap(), json!({ "color": ["red", "green"] }));
        }
        outcome => panic!("expected submission, got {outcome:?}"),
    }
}

#[test]
fn unchecked_radio_group_payload_is_empty_string() {
    let form = Form::builder()
        .input(Input::radio("gender", "male"))
        .input(Input::radio("gender", "female"))
        .on_submit(|_| {})
        .build()
        .unwrap();

    match form.submit() {
        SubmitOutcome::Submitted(payload) => {
            assert_eq!(payload.to_json().unwrap(), json!({ "gender": "" }));
        }
        outcome => panic!("expected submission, got {outcome:?}"),
    }
}

#[test]
fn required_radio_group_validates_against_checked_option() {
    let ui = RecordingUi::default();
    let form = Form::builder()
        .input(Input::radio("gender", "male").rules("required"))
        .input(Input::radio("gender", "female").rules("required"))
        .ui(ui.clone())
        .build()
        .unwrap();

    assert_eq!(form.validate_field("gender"), Some(false));
    form.set_checked("gender", "female", true);
    assert_eq!(form.validate_field("gender"), Some(true));
}

#[test]
fn disabled_input_validates_but_never_reaches_payload() {
    let form = Form::builder()
        .input(Input::text("email").value("a@b.co").rules("required|email"))
        .input(Input::text("internal").value("secret").disabled(true))
        .on_submit(|_| {})
        .build()
        .unwrap();

    match form.submit() {
        SubmitOutcome::Submitted(payload) => {
            assert_eq!(payload.to_json().unwrap(), json!({ "email": "a@b.co" }));
        }
        outcome => panic!("expected submission, got {outcome:?}"),
    }
}

#[test]
fn file_input_payload_carries_file_refs() {
    let form = Form::builder()
        .input(Input::file("avatar"))
        .on_submit(|_| {})
        .build()
        .unwrap();

    form.field("avatar")
        .unwrap()
        .inputs()[0]
        .set_files(vec![FileRef::new("me.png", 2048)]);

    match form.submit() {
        SubmitOutcome::Submitted(payload) => {
            assert_eq!(
                payload.to_json().unwrap(),
                json!({ "avatar": [{ "name": "me.png", "size": 2048 }] })
            );
        }
        outcome => panic!("expected submission, got {outcome:?}"),
    }
}
