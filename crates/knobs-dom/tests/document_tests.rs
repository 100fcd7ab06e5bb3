//! Surface behaviour of the in-memory document, driven through the trait
//! object the way widgets use it.

use knobs_dom::{Child, DomError, Document, ElementId, EventKind, Prop, Surface, listener};
use knobs_test_utils::Recorder;

fn input(surface: &mut dyn Surface, props: &[(&str, Prop)]) -> ElementId {
    surface.construct("input", props, Vec::new()).unwrap()
}

#[test]
fn test_listeners_run_in_registration_order() {
    let mut doc = Document::new();
    let surface: &mut dyn Surface = &mut doc;
    let button = surface.construct("button", &[], vec![Child::text("Go")]).unwrap();
    let order = Recorder::new();

    for name in ["first", "second", "third"] {
        let order = order.clone();
        surface
            .add_event_listener(button, EventKind::Click, listener(move |_, _| order.push(name)))
            .unwrap();
    }
    surface.dispatch(button, EventKind::Click).unwrap();
    surface.dispatch(button, EventKind::Input).unwrap();

    assert_eq!(order.values(), vec!["first", "second", "third"]);
}

#[test]
fn test_remove_event_listener() {
    let mut doc = Document::new();
    let button = doc.construct("button", &[], Vec::new()).unwrap();
    let hits = Recorder::new();
    let sink = hits.clone();
    let id = doc
        .add_event_listener(button, EventKind::Click, listener(move |_, _| sink.push(())))
        .unwrap();

    doc.user_click(button).unwrap();
    assert!(doc.remove_event_listener(button, id));
    assert!(!doc.remove_event_listener(button, id));
    doc.user_click(button).unwrap();
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_listener_removed_mid_dispatch_is_skipped() {
    let mut doc = Document::new();
    let host = doc.construct("div", &[], Vec::new()).unwrap();
    let button = doc.construct("button", &[], Vec::new()).unwrap();
    doc.append(host, button).unwrap();
    let hits = Recorder::new();

    doc.add_event_listener(
        button,
        EventKind::Click,
        listener(move |surface, event| {
            surface.remove(event.target).unwrap();
        }),
    )
    .unwrap();
    let sink = hits.clone();
    doc.add_event_listener(button, EventKind::Click, listener(move |_, _| sink.push(())))
        .unwrap();

    doc.user_click(button).unwrap();
    assert!(hits.is_empty());
    assert!(!doc.contains(button));
    assert!(doc.children(host).is_empty());
}

#[test]
fn test_set_property_never_dispatches() {
    let mut doc = Document::new();
    let field = input(&mut doc, &[("type", Prop::from("text"))]);
    let hits = Recorder::new();
    let sink = hits.clone();
    doc.add_event_listener(field, EventKind::Input, listener(move |_, _| sink.push(())))
        .unwrap();

    doc.set_value(field, "quiet").unwrap();
    assert!(hits.is_empty());
    doc.user_input(field, "loud").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(doc.value(field), "loud");
}

#[test]
fn test_range_input_sanitizes_like_a_browser() {
    let mut doc = Document::new();
    let slider = input(
        &mut doc,
        &[
            ("type", Prop::from("range")),
            ("min", Prop::from(0.0)),
            ("max", Prop::from(10.0)),
            ("value", Prop::from(4.0)),
        ],
    );
    assert_eq!(doc.value(slider), "4");

    doc.user_input(slider, "42").unwrap();
    assert_eq!(doc.value(slider), "10");
    doc.user_input(slider, "-1").unwrap();
    assert_eq!(doc.value(slider), "0");
    doc.user_input(slider, "junk").unwrap();
    assert_eq!(doc.value(slider), "5");

    // Narrowing the bounds re-sanitizes the current value.
    doc.set_property(slider, "max", Prop::from(2.0)).unwrap();
    assert_eq!(doc.value(slider), "2");
}

#[test]
fn test_number_and_color_inputs() {
    let mut doc = Document::new();
    let number = input(&mut doc, &[("type", Prop::from("number")), ("max", Prop::from(1.0))]);
    doc.user_input(number, "12.5").unwrap();
    assert_eq!(doc.value(number), "12.5");
    doc.user_input(number, "twelve").unwrap();
    assert_eq!(doc.value(number), "");

    let color = input(&mut doc, &[("type", Prop::from("color"))]);
    assert_eq!(doc.value(color), "#000000");
    doc.user_input(color, "#ABCDEF").unwrap();
    assert_eq!(doc.value(color), "#abcdef");
    doc.user_input(color, "red").unwrap();
    assert_eq!(doc.value(color), "#000000");
}

#[test]
fn test_checkbox_toggle_fires_input_then_change() {
    let mut doc = Document::new();
    let checkbox = input(&mut doc, &[("type", Prop::from("checkbox"))]);
    let events = Recorder::new();
    for kind in [EventKind::Input, EventKind::Change] {
        let events = events.clone();
        doc.add_event_listener(
            checkbox,
            kind,
            listener(move |surface, event| {
                events.push((event.kind.name(), surface.checked(event.target)))
            }),
        )
        .unwrap();
    }

    doc.user_toggle(checkbox).unwrap();
    assert_eq!(events.values(), vec![("input", true), ("change", true)]);
}

#[test]
fn test_select_unknown_value_reports_empty() {
    let mut doc = Document::new();
    let options: Vec<Child> = ["x", "y"]
        .iter()
        .map(|text| doc.construct("option", &[], vec![Child::text(*text)]).unwrap().into())
        .collect();
    let select = doc.construct("select", &[], options).unwrap();

    assert_eq!(doc.value(select), "x");
    doc.set_value(select, "y").unwrap();
    assert_eq!(doc.value(select), "y");
    doc.set_value(select, "nope").unwrap();
    assert_eq!(doc.value(select), "");
}

#[test]
fn test_tree_errors() {
    let mut doc = Document::new();
    let parent = doc.construct("div", &[], Vec::new()).unwrap();
    let child = doc.construct("div", &[], Vec::new()).unwrap();
    let stranger = doc.construct("div", &[], Vec::new()).unwrap();
    let ghost = ElementId(999);

    assert_eq!(doc.append(parent, ghost), Err(DomError::NotFound(ghost)));
    assert_eq!(
        doc.insert_before(parent, child, Some(stranger)),
        Err(DomError::NotAChild {
            parent,
            child: stranger,
        })
    );
    assert_eq!(doc.remove(ghost), Err(DomError::NotFound(ghost)));

    let text = doc
        .construct("span", &[], vec![Child::text("t")])
        .map(|span| doc.children(span)[0])
        .unwrap();
    assert_eq!(doc.append(text, child), Err(DomError::NotAnElement(text)));
    assert_eq!(doc.tag(text), None);
}

#[test]
fn test_class_toggle() {
    let mut doc = Document::new();
    let node = doc.construct("div", &[("class", Prop::from("a"))], Vec::new()).unwrap();

    assert_eq!(doc.toggle_class(node, "b", None), Ok(true));
    assert_eq!(doc.toggle_class(node, "b", None), Ok(false));
    assert_eq!(doc.toggle_class(node, "a", Some(true)), Ok(true));
    doc.add_class(node, "c").unwrap();
    doc.remove_class(node, "a").unwrap();
    assert_eq!(doc.attribute(node, "class").as_deref(), Some("c"));
}
