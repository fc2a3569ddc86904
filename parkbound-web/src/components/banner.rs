use parkbound_core::AchievementDef;
use yew::prelude::*;

/// The achievement unlock banner. At most one exists in the document at a
/// time; the app shell owns the scheduling rules.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub def: &'static AchievementDef,
    /// Close affordance: discard the banner, leave the achievement pending.
    pub on_close: Callback<()>,
    /// Claim affordance: acknowledge and navigate to the unlock page.
    pub on_claim: Callback<()>,
}

#[function_component(Banner)]
pub fn banner(props: &Props) -> Html {
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let on_claim = {
        let cb = props.on_claim.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="achievement-banner show" role="status" onclick={on_claim}>
            <div class="achievement-banner-content">
                <div class="achievement-icon">{ props.def.icon }</div>
                <div class="achievement-text">
                    <div class="achievement-title">{ "Achievement Unlocked!" }</div>
                    <div class="achievement-description">{ props.def.name }</div>
                    <span class="achievement-link">{ "claim your prize →" }</span>
                </div>
                <button type="button" class="achievement-close" aria-label="Close" onclick={on_close}>
                    { "×" }
                </button>
            </div>
        </div>
    }
}
