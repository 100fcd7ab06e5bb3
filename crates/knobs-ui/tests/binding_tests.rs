//! Bound-mode tests: controls mirroring a source in both directions.

use knobs_dom::{Document, Surface};
use knobs_test_utils::{Recorder, init_test_logging};
use knobs_ui::{
    Bool, Color, ColorAlpha, Control, Gui, GuiError, HostObject, Lens, Num, NumParams, Range,
    RangeParams, Select, Str, Value,
};
use std::cell::RefCell;
use std::rc::Rc;

fn watch(object: &HostObject, key: &str) -> Recorder<Value> {
    let writes = Recorder::new();
    let sink = writes.clone();
    object.observe(key, move |value| sink.push(value.clone()));
    writes
}

#[test]
fn test_bound_num_clamps_source_at_construction() {
    let mut doc = Document::new();
    let object = HostObject::new().with("x", 42.0).with("y", -3.0);
    let params = NumParams::new().min(0.0).max(10.0);

    let x = Num::bound(&mut doc, "x", object.property("x"), params).unwrap();
    let y = Num::bound(&mut doc, "y", object.property("y"), params).unwrap();

    assert_eq!(object.number("x"), Some(10.0));
    assert_eq!(doc.value(x.input()), "10");
    assert_eq!(object.number("y"), Some(0.0));
    assert_eq!(doc.value(y.input()), "0");
}

#[test]
fn test_bound_num_in_range_is_not_written_back() {
    let mut doc = Document::new();
    let object = HostObject::new().with("x", 4.0);
    let writes = watch(&object, "x");

    let x = Num::bound(&mut doc, "x", object.property("x"), NumParams::new().max(10.0)).unwrap();
    assert!(writes.is_empty());
    assert_eq!(doc.value(x.input()), "4");
}

#[test]
fn test_bound_num_clamps_edits() {
    init_test_logging();
    let mut doc = Document::new();
    let object = HostObject::new().with("x", 5.0);
    let writes = watch(&object, "x");
    let x = Num::bound(&mut doc, "x", object.property("x"), NumParams::new().min(0.0).max(10.0)).unwrap();

    doc.user_input(x.input(), "7").unwrap();
    doc.user_input(x.input(), "20").unwrap();
    assert_eq!(doc.value(x.input()), "10");
    doc.user_input(x.input(), "not a number").unwrap();

    assert_eq!(writes.values(), vec![Value::Number(7.0), Value::Number(10.0)]);
    assert_eq!(object.number("x"), Some(10.0));
}

#[test]
fn test_bound_range_clamps_and_syncs() {
    let mut doc = Document::new();
    let object = HostObject::new().with("gain", 3.0);
    let writes = watch(&object, "gain");
    let gain = Range::bound(&mut doc, "gain", object.property("gain"), RangeParams::default()).unwrap();

    assert_eq!(object.number("gain"), Some(1.0));
    assert_eq!(doc.value(gain.number_input()), "1");
    assert_eq!(doc.value(gain.slider()), "1");

    doc.user_input(gain.number_input(), "0.4").unwrap();
    assert_eq!(doc.value(gain.slider()), "0.4");
    doc.user_input(gain.slider(), "0.6").unwrap();
    assert_eq!(doc.value(gain.number_input()), "0.6");

    // One write for the construction clamp, then one per edit.
    assert_eq!(
        writes.values(),
        vec![Value::Number(1.0), Value::Number(0.4), Value::Number(0.6)]
    );
}

#[test]
fn test_speed_scenario() {
    init_test_logging();
    let mut doc = Document::new();
    let mut gui = Gui::new(&mut doc, "Panel").unwrap();
    let object = HostObject::new().with("speed", 5.0);
    let writes = watch(&object, "speed");

    let speed = Num::new(&mut doc, "speed", NumParams::new().min(0.0).max(10.0)).unwrap();
    speed.bind(&mut doc, object.property("speed")).unwrap();
    gui.add(&mut doc, &speed).unwrap();
    assert_eq!(doc.value(speed.input()), "5");
    // Seeding the control does not write back.
    assert!(writes.is_empty());

    let input = speed.input();
    doc.user_input(input, "20").unwrap();
    assert_eq!(object.number("speed"), Some(20.0));
    assert_eq!(writes.len(), 1);

    assert!(gui.remove(&mut doc, &speed));
    assert!(doc.user_input(input, "3").is_err());
    assert_eq!(object.number("speed"), Some(20.0));
    assert_eq!(writes.len(), 1);
}

#[test]
fn test_speed_scenario_bound_range() {
    let mut doc = Document::new();
    let mut gui = Gui::new(&mut doc, "Panel").unwrap();
    let object = HostObject::new().with("speed", 5.0);
    let writes = watch(&object, "speed");

    let speed = Range::bound(&mut doc, "speed", object.property("speed"), RangeParams::new(0.0, 10.0)).unwrap();
    gui.add(&mut doc, &speed).unwrap();

    doc.user_input(speed.slider(), "20").unwrap();
    assert_eq!(object.number("speed"), Some(10.0));
    doc.user_input(speed.number_input(), "20").unwrap();
    assert_eq!(object.number("speed"), Some(10.0));
    assert_eq!(doc.value(speed.number_input()), "10");
    assert_eq!(writes.len(), 2);

    let slider = speed.slider();
    assert!(gui.remove(&mut doc, &speed));
    assert!(doc.user_input(slider, "1").is_err());
    assert_eq!(writes.len(), 2);
}

#[test]
fn test_missing_property_builds_nothing() {
    let mut doc = Document::new();
    let object = HostObject::new().with("name", "knob");

    let missing = Num::bound(&mut doc, "x", object.property("x"), NumParams::default());
    assert!(matches!(missing, Err(GuiError::MissingProperty { ref key }) if key == "x"));

    let wrong = Bool::bound(&mut doc, "name", object.property("name"));
    assert!(matches!(
        wrong,
        Err(GuiError::PropertyType { expected: "boolean", .. })
    ));
    assert!(doc.is_empty());
}

#[test]
fn test_bound_str_and_bool() {
    let mut doc = Document::new();
    let object = HostObject::new().with("name", "knob").with("on", true);
    let name = Str::bound(&mut doc, "name", object.property("name")).unwrap();
    let on = Bool::bound(&mut doc, "on", object.property("on")).unwrap();

    assert_eq!(doc.value(name.input()), "knob");
    assert!(doc.checked(on.input()));

    doc.user_input(name.input(), "dial").unwrap();
    doc.user_toggle(on.input()).unwrap();
    assert_eq!(object.text("name"), Some("dial".to_string()));
    assert_eq!(object.boolean("on"), Some(false));
}

#[test]
fn test_bound_select_does_not_validate() {
    let mut doc = Document::new();
    let object = HostObject::new().with("mode", "zzz");
    let writes = watch(&object, "mode");
    let mode = Select::bound(&mut doc, "mode", object.property("mode"), ["a", "b"]).unwrap();

    assert_eq!(mode.options(), ["a", "b"]);
    assert!(writes.is_empty());
    doc.user_input(mode.input(), "b").unwrap();
    assert_eq!(object.text("mode"), Some("b".to_string()));
}

#[test]
fn test_bound_colors() {
    let mut doc = Document::new();
    let object = HostObject::new()
        .with("tint", 0x336699u32)
        .with("fill", 0x11223380u32);
    let tint = Color::bound(&mut doc, "tint", object.property("tint")).unwrap();
    let fill = ColorAlpha::bound(&mut doc, "fill", object.property("fill")).unwrap();

    assert_eq!(doc.value(tint.input()), "#336699");
    assert_eq!(doc.value(fill.color_input()), "#112233");
    let alpha = knobs_dom::parse_number(&doc.value(fill.alpha_input())).unwrap();
    assert_eq!((alpha * 255.0).round(), 128.0);

    doc.user_input(tint.input(), "#000001").unwrap();
    assert_eq!(object.color("tint"), Some(0x000001));

    doc.user_input(fill.alpha_input(), "1").unwrap();
    assert_eq!(object.color("fill"), Some(0x112233FF));
    doc.user_input(fill.color_input(), "#ffffff").unwrap();
    assert_eq!(object.color("fill"), Some(0xFFFFFFFF));
}

#[test]
fn test_refresh_follows_external_writes() {
    let mut doc = Document::new();
    let object = HostObject::new().with("x", 1.0).with("tint", 0u32);
    let x = Num::bound(&mut doc, "x", object.property("x"), NumParams::new().max(5.0)).unwrap();
    let tint = ColorAlpha::bound(&mut doc, "tint", object.property("tint")).unwrap();

    object.set("x", 9.0);
    object.set("tint", 0xAABBCCFFu32);
    assert_eq!(x.refresh(&mut doc), Ok(5.0));
    assert_eq!(object.number("x"), Some(5.0));
    assert_eq!(doc.value(x.input()), "5");

    assert_eq!(tint.refresh(&mut doc), Ok(0xAABBCCFF));
    assert_eq!(doc.value(tint.color_input()), "#aabbcc");
    assert_eq!(doc.value(tint.alpha_input()), "1");
}

#[derive(Debug, Default)]
struct Settings {
    speed: f64,
    label: String,
}

#[test]
fn test_lens_and_cell_sources() {
    let mut doc = Document::new();
    let settings = Rc::new(RefCell::new(Settings {
        speed: 2.0,
        label: "a".to_string(),
    }));

    let speed = Num::bound(
        &mut doc,
        "speed",
        Lens::new(Rc::clone(&settings), |s| s.speed, |s, v| s.speed = v),
        NumParams::default(),
    )
    .unwrap();
    let label = Str::new(&mut doc, "label").unwrap();
    label
        .bind(
            &mut doc,
            Lens::new(Rc::clone(&settings), |s: &Settings| s.label.clone(), |s, v| s.label = v),
        )
        .unwrap();

    doc.user_input(speed.input(), "8").unwrap();
    doc.user_input(label.input(), "b").unwrap();
    assert_eq!(settings.borrow().speed, 8.0);
    assert_eq!(settings.borrow().label, "b");

    let flag = Rc::new(RefCell::new(false));
    let toggle = Bool::bound(&mut doc, "flag", Rc::clone(&flag)).unwrap();
    doc.user_toggle(toggle.input()).unwrap();
    assert!(*flag.borrow());
}
