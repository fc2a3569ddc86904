use yew::prelude::*;

use crate::dom;

const CONSENT_COOKIE: &str = "cookieConsent";
const CONSENT_DAYS: u32 = 30;

/// Cookie-consent banner. Purely informational on a site with no analytics,
/// but the choice is honored and remembered either way.
#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let show = use_state(|| false);

    {
        let show = show.clone();
        use_effect_with((), move |()| {
            #[cfg(target_arch = "wasm32")]
            if dom::get_cookie(CONSENT_COOKIE).is_none() {
                wasm_bindgen_futures::spawn_local(async move {
                    // Let the page settle before asking questions.
                    let _ = dom::sleep_ms(1_000).await;
                    show.set(true);
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = show;
            || {}
        });
    }

    let choose = |value: &'static str, show: UseStateHandle<bool>| {
        Callback::from(move |_| {
            dom::set_cookie(CONSENT_COOKIE, value, CONSENT_DAYS);
            show.set(false);
        })
    };

    if !*show {
        return Html::default();
    }

    html! {
        <div class="cookie-banner show" role="dialog" aria-label="Cookie consent">
            <p>{ "This site uses a cookie to remember that you said no to cookies. And localStorage, for the fun stuff." }</p>
            <div class="cookie-actions">
                <button type="button" class="cookie-btn-accept" onclick={choose("accepted", show.clone())}>
                    { "Fine" }
                </button>
                <button type="button" class="cookie-btn-decline" onclick={choose("declined", show.clone())}>
                    { "No thanks" }
                </button>
            </div>
        </div>
    }
}
