//! Builds a small tuning panel on the in-memory document, drives it the way
//! a user would and prints the resulting markup.
//!
//! Shows how to:
//! - Nest folders inside the root panel
//! - Bind controls to a shared property bag
//! - Use detached controls with listeners and buttons
//!
//! Run with: cargo run -p knobs --example tuning_panel
//! Set KNOBS_LOG=debug to see tree mutations.

use knobs::prelude::*;

fn main() -> Result<(), GuiError> {
    knobs::init_logging();

    let mut doc = Document::new();
    let mut gui = Gui::new(&mut doc, "Tuning")?;
    gui.open(&mut doc)?;

    let state = HostObject::new()
        .with("speed", 12.0)
        .with("gravity", 9.81)
        .with("name", "player")
        .with("tint", 0x3366ccu32)
        .with("overlay", 0xffffff80u32)
        .with("wireframe", false);

    state.observe("speed", |value| tracing::info!("speed is now {:?}", value));

    // Bound controls: the host object is the source of truth.
    let mut physics = Folder::new(&mut doc, "Physics")?;
    let speed = Range::bound(&mut doc, "speed", state.property("speed"), RangeParams::new(0.0, 10.0).step(0.5))?;
    let gravity = Num::bound(&mut doc, "gravity", state.property("gravity"), NumParams::new().min(0.0))?;
    physics.add(&mut doc, &speed)?;
    physics.add(&mut doc, &gravity)?;
    gui.add(&mut doc, &physics)?;

    let mut look = Folder::new(&mut doc, "Look")?;
    let name = Str::bound(&mut doc, "name", state.property("name"))?;
    let tint = Color::bound(&mut doc, "tint", state.property("tint"))?;
    let overlay = ColorAlpha::bound(&mut doc, "overlay", state.property("overlay"))?;
    let wireframe = Bool::bound(&mut doc, "wireframe", state.property("wireframe"))?;
    look.add(&mut doc, &name)?;
    look.add(&mut doc, &tint)?;
    look.add(&mut doc, &overlay)?;
    look.add(&mut doc, &wireframe)?;
    gui.add(&mut doc, &look)?;

    // Detached controls: values flow to listeners.
    let quality = Select::new(&mut doc, "quality", ["low", "medium", "high"])?;
    quality.add_listener(&mut doc, |choice| tracing::info!("quality -> {}", choice))?;
    gui.add_at(&mut doc, &quality, 0)?;

    let snapshot = state.clone();
    let dump = Button::with_callback(&mut doc, "Dump state", move || {
        println!("{:?}", snapshot);
    })?;
    gui.add(&mut doc, &dump)?;

    // Simulated interaction.
    doc.user_input(speed.slider(), "7.5")?;
    doc.user_input(gravity.input(), "-3")?;
    quality.set_value(&mut doc, "high".to_string())?;
    quality.set_value(&mut doc, "ultra".to_string())?;
    doc.user_input(overlay.alpha_input(), "0.25")?;
    doc.user_toggle(wireframe.input())?;
    doc.user_click(dump.root())?;

    println!("speed = {:?}", state.number("speed"));
    println!("gravity = {:?}", state.number("gravity"));
    println!("{}", doc.outer_html(gui.root()));
    Ok(())
}
