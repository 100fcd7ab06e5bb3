//! Detached-mode control tests: get/set/listen on every variant.

use knobs_dom::{Document, Surface};
use knobs_test_utils::{Recorder, init_test_logging};
use knobs_ui::{
    Bool, Button, Color, ColorAlpha, Control, Labeled, Num, NumParams, Range, RangeParams,
    Select, Str, Widget, WidgetKind,
};

#[test]
fn test_num_set_value_notifies_in_order() {
    let mut doc = Document::new();
    let num = Num::new(&mut doc, "speed", NumParams::new().min(0.0).max(10.0)).unwrap();
    let order = Recorder::new();

    let first = order.clone();
    num.add_listener(&mut doc, move |v| first.push(("first", v))).unwrap();
    let second = order.clone();
    num.add_listener(&mut doc, move |v| second.push(("second", v))).unwrap();

    num.set_value(&mut doc, 3.5).unwrap();
    assert_eq!(order.values(), vec![("first", 3.5), ("second", 3.5)]);
    assert_eq!(num.value(&doc), 3.5);
}

#[test]
fn test_num_detached_never_clamps() {
    let mut doc = Document::new();
    let num = Num::new(&mut doc, "speed", NumParams::new().min(0.0).max(10.0)).unwrap();
    let seen = Recorder::new();
    num.add_listener(&mut doc, seen.sink()).unwrap();

    doc.user_input(num.input(), "20").unwrap();
    assert_eq!(seen.values(), vec![20.0]);
    assert_eq!(num.value(&doc), 20.0);
}

#[test]
fn test_num_empty_input_is_nan() {
    let mut doc = Document::new();
    let num = Num::new(&mut doc, "n", NumParams::default()).unwrap();
    let seen = Recorder::new();
    num.add_listener(&mut doc, seen.sink()).unwrap();

    doc.user_input(num.input(), "abc").unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen.values()[0].is_nan());
    assert!(num.value(&doc).is_nan());
}

#[test]
fn test_range_inputs_stay_in_step() {
    let mut doc = Document::new();
    let range = Range::new(&mut doc, "gain", RangeParams::new(0.0, 10.0).step(0.5)).unwrap();
    let seen = Recorder::new();
    range.add_listener(&mut doc, seen.sink()).unwrap();

    assert_eq!(doc.value(range.number_input()), "0");
    assert_eq!(doc.value(range.slider()), "0");

    doc.user_input(range.number_input(), "4").unwrap();
    assert_eq!(doc.value(range.slider()), "4");

    doc.user_input(range.slider(), "7.5").unwrap();
    assert_eq!(doc.value(range.number_input()), "7.5");

    // One notification per edit, never duplicated by the mirroring.
    assert_eq!(seen.values(), vec![4.0, 7.5]);
}

#[test]
fn test_range_set_value_renders_both_then_notifies_once() {
    let mut doc = Document::new();
    let range = Range::new(&mut doc, "gain", RangeParams::default()).unwrap();
    let slider = range.slider();
    let seen = Recorder::new();
    let sink = seen.clone();
    range
        .add_listener(&mut doc, move |v| sink.push(v))
        .unwrap();

    range.set_value(&mut doc, 0.25).unwrap();
    assert_eq!(seen.values(), vec![0.25]);
    assert_eq!(doc.value(slider), "0.25");
    assert_eq!(range.value(&doc), 0.25);
}

#[test]
fn test_range_mirrors_before_notifying() {
    let mut doc = Document::new();
    let range = Range::new(&mut doc, "gain", RangeParams::new(0.0, 100.0)).unwrap();
    let seen = Recorder::new();
    range.add_listener(&mut doc, seen.sink()).unwrap();

    // Listeners read the number input, so seeing 30 means the slider edit
    // was mirrored first.
    doc.user_input(range.slider(), "30").unwrap();
    assert_eq!(seen.values(), vec![30.0]);
    assert_eq!(doc.value(range.number_input()), "30");
}

#[test]
fn test_range_clamps_into_bounds() {
    let mut doc = Document::new();
    let range = Range::new(&mut doc, "gain", RangeParams::new(0.0, 10.0)).unwrap();
    let seen = Recorder::new();
    range.add_listener(&mut doc, seen.sink()).unwrap();

    range.set_value(&mut doc, 20.0).unwrap();
    assert_eq!(doc.value(range.number_input()), "10");
    assert_eq!(doc.value(range.slider()), "10");
    assert_eq!(range.value(&doc), 10.0);

    doc.user_input(range.number_input(), "-5").unwrap();
    assert_eq!(doc.value(range.number_input()), "0");
    assert_eq!(doc.value(range.slider()), "0");
    assert_eq!(range.value(&doc), 0.0);

    assert_eq!(seen.values(), vec![10.0, 0.0]);
}

#[test]
fn test_select_rejects_unknown_option() {
    init_test_logging();
    let mut doc = Document::new();
    let select = Select::new(&mut doc, "mode", ["a", "b", "c"]).unwrap();
    let first = Recorder::new();
    let second = Recorder::new();
    select.add_listener(&mut doc, first.sink()).unwrap();
    select.add_listener(&mut doc, second.sink()).unwrap();

    select.set_value(&mut doc, "z".to_string()).unwrap();
    assert_eq!(select.value(&doc), "a");
    assert!(first.is_empty());
    assert!(second.is_empty());

    select.set_value(&mut doc, "b".to_string()).unwrap();
    assert_eq!(select.value(&doc), "b");
    assert_eq!(first.values(), vec!["b".to_string()]);
    assert_eq!(second.values(), vec!["b".to_string()]);
}

#[test]
fn test_select_user_choice() {
    let mut doc = Document::new();
    let select = Select::new(&mut doc, "mode", vec!["low".to_string(), "high".to_string()]).unwrap();
    let seen = Recorder::new();
    select.add_listener(&mut doc, seen.sink()).unwrap();

    doc.user_input(select.input(), "high").unwrap();
    assert_eq!(seen.values(), vec!["high".to_string()]);
}

#[test]
fn test_str_round_trip() {
    let mut doc = Document::new();
    let text = Str::new(&mut doc, "name").unwrap();
    let seen = Recorder::new();
    text.add_listener(&mut doc, seen.sink()).unwrap();

    assert_eq!(text.value(&doc), "");
    text.set_value(&mut doc, "hello".to_string()).unwrap();
    doc.user_input(text.input(), "  spaced  ").unwrap();
    assert_eq!(seen.values(), vec!["hello".to_string(), "  spaced  ".to_string()]);
    assert_eq!(text.value(&doc), "  spaced  ");
}

#[test]
fn test_bool_reports_checked_state() {
    let mut doc = Document::new();
    let flag = Bool::new(&mut doc, "enabled").unwrap();
    let seen = Recorder::new();
    flag.add_listener(&mut doc, seen.sink()).unwrap();

    assert!(!flag.value(&doc));
    doc.user_toggle(flag.input()).unwrap();
    flag.set_value(&mut doc, false).unwrap();
    assert_eq!(seen.values(), vec![true, false]);
}

#[test]
fn test_color_hex_view() {
    let mut doc = Document::new();
    let color = Color::new(&mut doc, "tint").unwrap();
    let seen = Recorder::new();
    color.add_listener(&mut doc, seen.sink()).unwrap();

    color.set_value(&mut doc, 0x0a0b0c).unwrap();
    assert_eq!(doc.value(color.input()), "#0a0b0c");
    doc.user_input(color.input(), "#FF8000").unwrap();
    assert_eq!(seen.values(), vec![0x0a0b0c, 0xff8000]);
    assert_eq!(color.value(&doc), 0xff8000);
}

#[test]
fn test_color_alpha_packs_both_inputs() {
    let mut doc = Document::new();
    let picker = ColorAlpha::new(&mut doc, "tint").unwrap();
    let seen = Recorder::new();
    picker.add_listener(&mut doc, seen.sink()).unwrap();

    picker.set_value(&mut doc, 0x112233FF).unwrap();
    assert_eq!(doc.value(picker.color_input()), "#112233");
    assert_eq!(doc.value(picker.alpha_input()), "1");
    assert_eq!(picker.value(&doc), 0x112233FF);

    doc.user_input(picker.alpha_input(), "0.5").unwrap();
    doc.user_input(picker.color_input(), "#445566").unwrap();
    assert_eq!(seen.values(), vec![0x112233FF, 0x11223380, 0x44556680]);
}

#[test]
fn test_color_alpha_round_trips_every_alpha() {
    let mut doc = Document::new();
    let picker = ColorAlpha::new(&mut doc, "tint").unwrap();
    for alpha in 0..=255u32 {
        let value = (0xABCDEF << 8) | alpha;
        picker.set_value(&mut doc, value).unwrap();
        assert_eq!(picker.value(&doc), value);
    }
}

#[test]
fn test_button_callbacks_fire_in_order() {
    let mut doc = Document::new();
    let clicks = Recorder::new();
    let first = clicks.clone();
    let button = Button::with_callback(&mut doc, "Reset", move || first.push("callback")).unwrap();
    let second = clicks.clone();
    button.add_listener(&mut doc, move || second.push("listener")).unwrap();

    doc.user_click(button.root()).unwrap();
    doc.user_click(button.root()).unwrap();
    assert_eq!(clicks.values(), vec!["callback", "listener", "callback", "listener"]);
    assert_eq!(button.text(), "Reset");
    assert_eq!(doc.text_content(button.root()), "Reset");
    assert_eq!(button.kind(), WidgetKind::Button);
}

#[test]
fn test_controls_expose_labels_and_kinds() {
    let mut doc = Document::new();
    let num = Num::new(&mut doc, "speed", NumParams::default()).unwrap();
    let range = Range::new(&mut doc, "gain", RangeParams::default()).unwrap();
    let picker = ColorAlpha::new(&mut doc, "tint").unwrap();

    assert_eq!(num.label(), "speed");
    assert_eq!(range.label(), "gain");
    assert_eq!(picker.kind(), WidgetKind::ColorAlpha);
    assert_eq!(doc.text_content(range.root()), "gain");
}

#[test]
fn test_removed_control_stops_notifying() {
    let mut doc = Document::new();
    let mut gui = knobs_ui::Gui::new(&mut doc, "Panel").unwrap();
    let num = Num::new(&mut doc, "n", NumParams::default()).unwrap();
    let seen = Recorder::new();
    num.add_listener(&mut doc, seen.sink()).unwrap();
    gui.add(&mut doc, &num).unwrap();
    let input = num.input();

    doc.user_input(input, "1").unwrap();
    assert!(gui.remove(&mut doc, &num));
    assert_eq!(doc.listener_count(input), 0);
    assert!(doc.user_input(input, "2").is_err());
    assert!(num.set_value(&mut doc, 3.0).is_err());
    assert_eq!(seen.values(), vec![1.0]);
}
