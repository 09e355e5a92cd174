//! Direct DOM work that Yew's diffing can't express.
//!
//! Restarting a CSS animation needs the old class or inline animation
//! removed, a layout read so the browser commits that removal, and then
//! the class or animation applied again. Yew would coalesce the remove
//! and re-add into a no-op, so these helpers touch the element directly.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use playground_rs::progress::IncrementSource;
use playground_rs::{Animator, Effect, Replay, ResultAnimation, Styling, Timings};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// Keyframes the result regions and secondary button animate with.
pub const KEYFRAMES: &str = r#"
@keyframes fadeInUp {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slideInLeft {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes bounceIn {
  0% { opacity: 0; transform: scale(0.3); }
  50% { opacity: 1; transform: scale(1.05); }
  70% { transform: scale(0.9); }
  100% { opacity: 1; transform: scale(1); }
}

@keyframes pulse {
  0% { transform: scale(1); }
  50% { transform: scale(1.05); }
  100% { transform: scale(1); }
}
"#;

/// Append a `<style>` with [`KEYFRAMES`] to the document head.
pub fn install_keyframes() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}

/// Read a layout property so pending style changes are applied.
pub fn force_reflow(el: &HtmlElement) -> i32 {
    el.offset_width()
}

/// Restart an entrance animation on a result region.
pub fn replay_animation(el: &HtmlElement, animation: ResultAnimation) -> Result<(), JsValue> {
    let style = el.style();
    style.set_property("animation", "none")?;
    force_reflow(el);
    style.set_property("animation", animation.css())
}

/// Strip conflicting classes, flush, then apply the replay's styling.
pub fn apply_replay(el: &HtmlElement, replay: &Replay) -> Result<(), JsValue> {
    let classes = el.class_list();
    for class in replay.remove {
        classes.remove_1(class)?;
    }
    force_reflow(el);
    match replay.styling {
        Styling::Class(class) => classes.add_1(class),
        Styling::Inline { property, value } => el.style().set_property(property, value),
    }
}

pub fn undo_styling(el: &HtmlElement, styling: Styling) -> Result<(), JsValue> {
    match styling {
        Styling::Class(class) => el.class_list().remove_1(class),
        Styling::Inline { property, .. } => el.style().remove_property(property).map(|_| ()),
    }
}

/// Trigger `effect` on `el` and schedule its expiry.
pub fn run_effect(
    el: HtmlElement,
    animator: Rc<RefCell<Animator>>,
    effect: Effect,
    timings: &Timings,
) {
    let replay = animator.borrow_mut().trigger(effect, timings);
    if let Err(e) = apply_replay(&el, &replay) {
        gloo::console::warn!("failed to apply effect", e);
    }

    let generation = replay.generation;
    let styling = replay.styling;
    Timeout::new(replay.duration_ms, move || {
        if animator.borrow_mut().expire(generation)
            && let Err(e) = undo_styling(&el, styling)
        {
            gloo::console::warn!("failed to clear effect", e);
        }
    })
    .forget();
}

/// Current time the way the browser formats it for the user's locale.
pub fn current_time() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("default")
        .into()
}

/// Increments from `Math.random`.
pub struct MathRandom;

impl IncrementSource for MathRandom {
    fn next_increment(&mut self, max: f64) -> f64 {
        js_sys::Math::random() * max
    }
}
