use pagedom::{Key, Modifiers, DARK_MODE_CLASS};
use showcase::handlers::CLICK_MESSAGE;
use showcase::page::{ids, DARK_MODE_LABEL, LIGHT_MODE_LABEL};
use showcase::registration::{NAME_REQUIRED, SUCCESS_MESSAGE};
use showcase::Showcase;
use trellis::{Control, Session};

fn session() -> Session<Showcase> {
    Session::new(Showcase)
}

fn text<'a>(session: &'a Session<Showcase>, id: &str) -> &'a str {
    session.document().text_content(id).unwrap()
}

fn press(session: &mut Session<Showcase>, key: Key) -> Control {
    session.handle_key(key, Modifiers::NONE).unwrap()
}

fn is_dark(session: &Session<Showcase>) -> bool {
    session.document().has_class(ids::BODY, DARK_MODE_CLASS).unwrap()
}

// =============================================================================
// Initial page
// =============================================================================

#[test]
fn test_initial_page() {
    let session = session();

    assert_eq!(text(&session, ids::MESSAGE_AREA), "");
    assert_eq!(text(&session, ids::COUNTER), "0");
    assert_eq!(text(&session, ids::THEME_TOGGLE), DARK_MODE_LABEL);
    assert_eq!(text(&session, ids::SUCCESS), "");
    assert!(!is_dark(&session));
}

#[test]
fn test_all_ids_present() {
    let session = session();
    for id in [
        ids::EVENT_BUTTON,
        ids::MESSAGE_AREA,
        ids::INCREMENT_BUTTON,
        ids::COUNTER,
        ids::THEME_TOGGLE,
        ids::FORM,
        ids::NAME,
        ids::EMAIL,
        ids::PASSWORD,
        ids::NAME_ERROR,
        ids::EMAIL_ERROR,
        ids::PASSWORD_ERROR,
        ids::SUCCESS,
        ids::SUBMIT,
    ] {
        assert!(session.document().contains(id), "missing '{}'", id);
    }
}

#[test]
fn test_tab_order() {
    let session = session();
    assert_eq!(
        session.document().focusable_ids(),
        vec![
            ids::EVENT_BUTTON,
            ids::INCREMENT_BUTTON,
            ids::THEME_TOGGLE,
            ids::NAME,
            ids::EMAIL,
            ids::PASSWORD,
            ids::SUBMIT,
        ]
    );
}

// =============================================================================
// Message, counter, theme
// =============================================================================

#[test]
fn test_message_button() {
    let mut session = session();

    session.click(ids::EVENT_BUTTON).unwrap();
    assert_eq!(text(&session, ids::MESSAGE_AREA), CLICK_MESSAGE);

    session.click(ids::EVENT_BUTTON).unwrap();
    assert_eq!(text(&session, ids::MESSAGE_AREA), CLICK_MESSAGE);
}

#[test]
fn test_counter_counts_clicks() {
    let mut session = session();

    for n in 1..=12u64 {
        session.click(ids::INCREMENT_BUTTON).unwrap();
        assert_eq!(text(&session, ids::COUNTER), n.to_string());
        assert_eq!(session.state().count, n);
    }
}

#[test]
fn test_theme_parity() {
    let mut session = session();

    for n in 1..=5 {
        session.click(ids::THEME_TOGGLE).unwrap();
        let odd = n % 2 == 1;
        assert_eq!(is_dark(&session), odd);
        let expected = if odd { LIGHT_MODE_LABEL } else { DARK_MODE_LABEL };
        assert_eq!(text(&session, ids::THEME_TOGGLE), expected);
    }
}

#[test]
fn test_theme_switches_palette() {
    let mut session = session();
    let light = session.palette();

    session.click(ids::THEME_TOGGLE).unwrap();

    assert_eq!(session.palette(), pagedom::Palette::dark());
    assert_ne!(session.palette(), light);
}

#[test]
fn test_reload_resets_everything() {
    let mut session = session();
    session.click(ids::INCREMENT_BUTTON).unwrap();
    session.click(ids::THEME_TOGGLE).unwrap();
    session.click(ids::EVENT_BUTTON).unwrap();
    session.set_value(ids::NAME, "Alice").unwrap();

    session.reload();

    assert_eq!(session.state().count, 0);
    assert_eq!(text(&session, ids::COUNTER), "0");
    assert_eq!(text(&session, ids::MESSAGE_AREA), "");
    assert_eq!(text(&session, ids::THEME_TOGGLE), DARK_MODE_LABEL);
    assert_eq!(session.document().value(ids::NAME).unwrap(), "");
    assert!(!is_dark(&session));
}

// =============================================================================
// Keyboard
// =============================================================================

#[test]
fn test_keyboard_increment() {
    let mut session = session();
    press(&mut session, Key::Tab);
    press(&mut session, Key::Tab);
    assert_eq!(session.focused(), Some(ids::INCREMENT_BUTTON));

    press(&mut session, Key::Enter);
    press(&mut session, Key::Char(' '));

    assert_eq!(text(&session, ids::COUNTER), "2");
}

#[test]
fn test_keyboard_registration() {
    let mut session = session();
    for _ in 0..4 {
        press(&mut session, Key::Tab);
    }
    assert_eq!(session.focused(), Some(ids::NAME));

    for c in "Bob".chars() {
        press(&mut session, Key::Char(c));
    }
    press(&mut session, Key::Tab);
    for c in "bob@example.com".chars() {
        press(&mut session, Key::Char(c));
    }
    press(&mut session, Key::Tab);
    for c in "hunter22".chars() {
        press(&mut session, Key::Char(c));
    }

    // Implicit submission from the password field
    assert_eq!(press(&mut session, Key::Enter), Control::Continue);

    assert_eq!(text(&session, ids::SUCCESS), SUCCESS_MESSAGE);
    assert_eq!(session.document().value(ids::PASSWORD).unwrap(), "");
    assert_eq!(session.reloads(), 0);
}

#[test]
fn test_enter_on_submit_button() {
    let mut session = session();
    press(&mut session, Key::BackTab);
    assert_eq!(session.focused(), Some(ids::SUBMIT));

    press(&mut session, Key::Enter);

    assert_eq!(text(&session, ids::NAME_ERROR), NAME_REQUIRED);
    assert_eq!(session.reloads(), 0);
}

#[test]
fn test_quit_key() {
    let mut session = session();
    assert_eq!(press(&mut session, Key::Escape), Control::Quit);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_rendered_page_reflects_state() {
    let mut session = session();
    session.click(ids::EVENT_BUTTON).unwrap();
    session.set_value(ids::PASSWORD, "secret").unwrap();

    let frame = session.frame(80);
    let rows: Vec<String> = frame.lines.iter().map(|line| line.text()).collect();

    assert!(rows.iter().any(|row| row.contains(CLICK_MESSAGE)));
    assert!(rows.iter().any(|row| row.contains("[ Click Me ]")));
    assert!(!rows.iter().any(|row| row.contains("secret")));
}

#[test]
fn test_click_on_rendered_row() {
    let mut session = session();
    let frame = session.frame(80);
    let row = frame
        .lines
        .iter()
        .position(|line| line.target.as_deref() == Some(ids::INCREMENT_BUTTON))
        .unwrap();

    let target = frame.target_at(row as u16).unwrap().to_string();
    session.pointer_down(&target).unwrap();

    assert_eq!(text(&session, ids::COUNTER), "1");
    assert_eq!(session.focused(), Some(ids::INCREMENT_BUTTON));
}

#[test]
fn test_success_message_visible_on_standard_terminal() {
    let mut session = session();
    session.set_value(ids::NAME, "Alice").unwrap();
    session.set_value(ids::EMAIL, "alice@example.com").unwrap();
    session.set_value(ids::PASSWORD, "longenough1").unwrap();
    session.click(ids::SUBMIT).unwrap();

    let view = session.view(80, 24);

    assert_eq!(session.scroll_offset(), 0);
    let row = view.row_of(ids::SUCCESS).unwrap();
    assert!(row < 24);
    assert_eq!(view.lines[row].text().trim(), SUCCESS_MESSAGE);
    assert!(view.row_of(ids::SUBMIT).is_some());
}

#[test]
fn test_whole_page_fits_standard_terminal() {
    let session = session();
    assert!(session.frame(80).lines.len() <= 24);
}

#[test]
fn test_focus_scrolls_into_view_on_small_terminal() {
    let mut session = session();
    session.view(80, 12);

    press(&mut session, Key::BackTab);
    let view = session.view(80, 12);

    assert_eq!(session.focused(), Some(ids::SUBMIT));
    assert!(session.scroll_offset() > 0);
    assert_eq!(view.lines.len(), 12);
    assert!(view.row_of(ids::SUBMIT).is_some());
}
