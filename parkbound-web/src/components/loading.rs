use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

use crate::app::Achievements;
use crate::cosmetics;
use crate::dom;

/// How long the loading overlay stays up.
const LOADING_MS: i32 = 1600;

/// Full-screen loading overlay shown once per page load. Picks a random tip,
/// records it as seen, and dismisses itself. The tip pool doubles as a
/// long-game achievement, so the seen-tip tracking here is not decorative.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let achievements = use_context::<Achievements>().expect("achievements context");
    let visible = use_state(|| true);
    let tip = use_state(|| {
        // Seed from the clock: no OS entropy on the wasm target.
        let mut rng = SmallRng::seed_from_u64(dom::now_ms().wrapping_mul(0x9E37_79B9));
        parkbound_core::random_tip(&mut rng)
    });

    {
        let achievements = achievements.clone();
        let visible = visible.clone();
        let tip_index = tip.0;
        use_effect_with((), move |()| {
            achievements.track(|m| m.record_tip_seen(tip_index));
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                let _ = dom::sleep_ms(LOADING_MS).await;
                visible.set(false);
            });
            #[cfg(not(target_arch = "wasm32"))]
            let _ = visible;
            || {}
        });
    }

    if !*visible {
        return Html::default();
    }

    let bar_class = achievements.read(cosmetics::loading_bar_class);
    html! {
        <div class="loading-screen" aria-busy="true" aria-live="polite">
            <div class="loading-content">
                <div class="loading-coaster">{ "🎢" }</div>
                <div class={bar_class}><div class="loading-bar-fill"></div></div>
                <p class="loading-tip">{ tip.1 }</p>
            </div>
        </div>
    }
}
