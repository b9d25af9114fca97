//! App-level form behavior: key routing, validation passes and the
//! submit hook contract.

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use fieldwork::config::Config;
use fieldwork::form::{FieldErrorKind, FieldId, FormValues};
use fieldwork::ui::app::{App, Screen};
use fieldwork::ui::input::handle_key;

fn app_with_hook() -> (App, Arc<Mutex<Vec<FormValues>>>) {
    let mut app = App::new(&Config::default(), Screen::Form);
    let submissions = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&submissions);
    app.set_submit_hook(Box::new(move |values| {
        sink.lock().unwrap().push(values.clone());
    }));
    (app, submissions)
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn empty_submit_shows_one_error_per_field_and_no_callback() {
    let (mut app, submissions) = app_with_hook();

    press(&mut app, KeyCode::Enter);

    let form = app.form();
    let name_error = form.fields[0].error.as_ref().expect("name error");
    let email_error = form.fields[1].error.as_ref().expect("email error");
    assert_eq!(name_error.kind, FieldErrorKind::Required);
    assert_eq!(name_error.message, "Please enter your name");
    assert_eq!(email_error.kind, FieldErrorKind::Required);
    assert_eq!(email_error.message, "Please enter your email");

    assert!(!form.modal_open());
    assert!(submissions.lock().unwrap().is_empty());
}

#[test]
fn malformed_email_shows_only_pattern_error() {
    let (mut app, submissions) = app_with_hook();

    type_str(&mut app, "Alice");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "not-an-email");
    press(&mut app, KeyCode::Enter);

    let form = app.form();
    assert!(form.fields[0].error.is_none(), "name must have no error");
    let email_error = form.fields[1].error.as_ref().expect("email error");
    assert_eq!(email_error.kind, FieldErrorKind::Pattern);
    assert_eq!(email_error.message, "Please enter a valid email address");

    assert!(submissions.lock().unwrap().is_empty());
}

#[test]
fn valid_submit_invokes_callback_exactly_once_with_values() {
    let (mut app, submissions) = app_with_hook();

    type_str(&mut app, "Alice");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "alice@example.com");
    press(&mut app, KeyCode::Enter);

    {
        let seen = submissions.lock().unwrap();
        assert_eq!(
            *seen,
            vec![FormValues {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }]
        );
    }
    assert!(app.form().modal_open());

    // Enter while the modal is open dismisses it instead of resubmitting.
    press(&mut app, KeyCode::Enter);
    assert!(!app.form().modal_open());
    assert_eq!(submissions.lock().unwrap().len(), 1);
}

#[test]
fn live_echo_updates_on_each_keystroke() {
    let (mut app, _) = app_with_hook();

    type_str(&mut app, "Al");
    assert_eq!(app.form().value_of(FieldId::Name), "Al");
    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.form().value_of(FieldId::Name), "Ali");
}

// After a failed submit, the error clears on the keystroke that makes
// the field valid — and reappears if it becomes invalid again.
#[test]
fn post_submit_edits_revalidate() {
    let (mut app, _) = app_with_hook();

    press(&mut app, KeyCode::Enter);
    assert!(app.form().fields[0].error.is_some());

    press(&mut app, KeyCode::Char('A'));
    assert!(
        app.form().fields[0].error.is_none(),
        "required error must clear once the name is non-empty"
    );

    press(&mut app, KeyCode::Backspace);
    assert!(
        app.form().fields[0].error.is_some(),
        "required error must return when the name empties again"
    );
}

#[test]
fn errors_do_not_appear_before_first_submit() {
    let (mut app, _) = app_with_hook();

    type_str(&mut app, "not-an-email-yet");
    assert!(!app.form().validated);
    assert!(!app.form().has_errors());
}

#[test]
fn shift_tab_moves_focus_back() {
    let (mut app, _) = app_with_hook();

    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "x");
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
    );
    type_str(&mut app, "y");

    assert_eq!(app.form().value_of(FieldId::Name), "y");
    assert_eq!(app.form().value_of(FieldId::Email), "x");
}

#[test]
fn ctrl_q_requests_quit() {
    let (mut app, _) = app_with_hook();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn ctrl_t_switches_screens() {
    let (mut app, _) = app_with_hook();
    assert_eq!(app.screen(), Screen::Form);
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
    );
    assert_eq!(app.screen(), Screen::Query);
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
    );
    assert_eq!(app.screen(), Screen::Form);
}

#[test]
fn ctrl_chars_are_not_typed_into_fields() {
    let (mut app, _) = app_with_hook();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
    );
    assert_eq!(app.form().value_of(FieldId::Name), "");
}
