//! Console easter eggs.
//!
//! Two functions are hung off the global `window` object so a visitor
//! poking around in devtools can call `barrelRoll()` and `bigBox()`. Each
//! plays a short visual gag and reports back through a callback; the app
//! shell decides what the call means for achievement state.

use yew::Callback;

/// Which egg the visitor triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Egg {
    BarrelRoll,
    BigBox,
}

/// How long the spin animation class stays on the document.
#[cfg(target_arch = "wasm32")]
const BARREL_ROLL_MS: i32 = 1_200;
/// How long the summoned box lingers.
#[cfg(target_arch = "wasm32")]
const BIG_BOX_MS: i32 = 3_000;

/// Install both eggs on `window` and print the hint that makes anyone open
/// enough to read it go try them. No-op outside a browser.
pub fn install(on_egg: &Callback<Egg>) {
    #[cfg(target_arch = "wasm32")]
    {
        wasm::install(on_egg);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = on_egg;
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::{BARREL_ROLL_MS, BIG_BOX_MS, Egg};
    use crate::dom;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use yew::Callback;

    pub(super) fn install(on_egg: &Callback<Egg>) {
        expose("barrelRoll", {
            let on_egg = on_egg.clone();
            move || {
                run_barrel_roll();
                on_egg.emit(Egg::BarrelRoll);
            }
        });
        expose("bigBox", {
            let on_egg = on_egg.clone();
            move || {
                run_big_box();
                on_egg.emit(Egg::BigBox);
            }
        });
        web_sys::console::log_1(&JsValue::from_str(
            "👀 Since you're here anyway... try barrelRoll() or bigBox().",
        ));
    }

    fn expose(name: &str, f: impl FnMut() + 'static) {
        let closure = Closure::<dyn FnMut()>::new(f);
        if let Err(err) = js_sys::Reflect::set(&dom::window(), &JsValue::from_str(name), closure.as_ref())
        {
            dom::console_error(&format!(
                "failed to install `{name}`: {}",
                dom::js_error_message(&err)
            ));
        }
        // Lives for the page; the console can call it any number of times.
        closure.forget();
    }

    fn run_barrel_roll() {
        let Some(html) = dom::window()
            .document()
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let _ = html.class_list().add_1("barrel-roll");
        wasm_bindgen_futures::spawn_local(async move {
            let _ = dom::sleep_ms(BARREL_ROLL_MS).await;
            let _ = html.class_list().remove_1("barrel-roll");
        });
    }

    fn run_big_box() {
        let Some(doc) = dom::window().document() else {
            return;
        };
        let Some(body) = doc.body() else {
            return;
        };
        let Ok(div) = doc.create_element("div") else {
            return;
        };
        div.set_class_name("big-box");
        div.set_text_content(Some("📦"));
        if body.append_child(&div).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = dom::sleep_ms(BIG_BOX_MS).await;
                div.remove();
            });
        }
    }
}
