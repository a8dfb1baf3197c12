use pagedom::{Document, DomError, DomEvent, Element, EventKind};
use trellis::{DispatchResult, Dispatcher, HandlerError};

fn doc() -> Document {
    Document::new(
        Element::body()
            .child(Element::button("Go").id("go"))
            .child(Element::paragraph("").id("log")),
    )
}

#[test]
fn test_unregistered_event_is_not_handled() {
    let mut dispatcher: Dispatcher<u32> = Dispatcher::new();
    let mut doc = doc();
    let mut state = 0;

    let result = dispatcher
        .dispatch(&mut state, &mut doc, &mut DomEvent::click("go"))
        .unwrap();
    assert_eq!(result, DispatchResult::NotHandled);
    assert!(!result.is_handled());
}

#[test]
fn test_handlers_run_in_registration_order() {
    let mut dispatcher: Dispatcher<Vec<&'static str>> = Dispatcher::new();
    dispatcher
        .on("go", EventKind::Click, |state, _, _| {
            state.push("first");
            Ok(())
        })
        .on("go", EventKind::Click, |state, _, _| {
            state.push("second");
            Ok(())
        });

    let mut doc = doc();
    let mut state = Vec::new();
    dispatcher
        .dispatch(&mut state, &mut doc, &mut DomEvent::click("go"))
        .unwrap();
    assert_eq!(state, vec!["first", "second"]);
}

#[test]
fn test_kind_is_part_of_the_key() {
    let mut dispatcher: Dispatcher<u32> = Dispatcher::new();
    dispatcher.on("go", EventKind::Submit, |state, _, _| {
        *state += 1;
        Ok(())
    });

    assert!(dispatcher.has_handlers("go", EventKind::Submit));
    assert!(!dispatcher.has_handlers("go", EventKind::Click));

    let mut doc = doc();
    let mut state = 0;
    let result = dispatcher
        .dispatch(&mut state, &mut doc, &mut DomEvent::click("go"))
        .unwrap();
    assert_eq!(result, DispatchResult::NotHandled);
    assert_eq!(state, 0);
}

#[test]
fn test_handler_mutates_document_and_prevents_default() {
    let mut dispatcher: Dispatcher<()> = Dispatcher::new();
    dispatcher.on("go", EventKind::Click, |_, doc, event| {
        event.prevent_default();
        doc.set_text_content("log", "clicked")?;
        Ok(())
    });

    let mut doc = doc();
    let result = dispatcher
        .dispatch(&mut (), &mut doc, &mut DomEvent::click("go"))
        .unwrap();
    assert_eq!(
        result,
        DispatchResult::Handled {
            default_prevented: true
        }
    );
    assert_eq!(doc.text_content("log").unwrap(), "clicked");
}

#[test]
fn test_first_error_stops_dispatch() {
    let mut dispatcher: Dispatcher<u32> = Dispatcher::new();
    dispatcher
        .on("go", EventKind::Click, |_, doc, _| {
            doc.set_text_content("missing", "x")?;
            Ok(())
        })
        .on("go", EventKind::Click, |state, _, _| {
            *state += 1;
            Ok(())
        });

    let mut doc = doc();
    let mut state = 0;
    let err = dispatcher
        .dispatch(&mut state, &mut doc, &mut DomEvent::click("go"))
        .unwrap_err();
    assert!(matches!(err, HandlerError::Dom(DomError::NotFound(id)) if id == "missing"));
    assert_eq!(state, 0);
}
