use parkbound_core::{AchievementId, catalog, progress};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Achievements;
use crate::cosmetics;
use crate::dom;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Achievement id segment from the route, still a string because the
    /// visitor can type anything up there.
    pub id: String,
}

/// The per-achievement celebration page, linked from the unlock banner.
#[function_component(Celebrate)]
pub fn celebrate(props: &Props) -> Html {
    let achievements = use_context::<Achievements>().expect("achievements context");

    let Ok(id) = props.id.parse::<AchievementId>() else {
        log::warn!("celebration page for unknown achievement `{}`", props.id);
        return unknown_achievement();
    };
    let Some(def) = catalog::lookup(id) else {
        return unknown_achievement();
    };

    if !achievements.read(|m| m.is_unlocked(def.id)) {
        // Deep-linking here early spoils nothing.
        let teaser = achievements
            .read(|m| progress(m.store(), def.id, dom::now_ms()))
            .map(|report| {
                html! {
                    <p class="celebrate-progress">
                        { format!("Progress so far: {} / {}", report.current, report.total) }
                    </p>
                }
            });
        return html! {
            <div class="celebrate-page locked">
                <h1>{ "Not yet." }</h1>
                <p>{ "You haven't earned this one. No peeking at how." }</p>
                { teaser }
                <Link<Route> to={Route::Celebration} classes="celebrate-back">
                    { "Back to the hub" }
                </Link<Route>>
            </div>
        };
    }

    let on_reset = {
        let achievements = achievements.clone();
        Callback::from(move |_| {
            if !dom::confirm("Reset this achievement and its progress?") {
                return;
            }
            achievements.mutate(|m| {
                m.reset_achievement(id);
                cosmetics::project_document(m);
            });
            dom::navigate("/");
        })
    };

    html! {
        <div class="celebrate-page">
            <div class="celebrate-icon">{ def.icon }</div>
            <h1>{ def.name }</h1>
            <p class="celebrate-description">{ def.description }</p>
            { def.reward.map(|reward| html! {
                <p class="celebrate-reward">
                    { format!("Reward unlocked: {reward}. Toggle it from the hub.") }
                </p>
            }) }
            <div class="celebrate-actions">
                <Link<Route> to={Route::Celebration} classes="celebrate-back">
                    { "Back to the hub" }
                </Link<Route>>
                <button type="button" class="celebrate-reset" onclick={on_reset}>
                    { "Reset this achievement" }
                </button>
            </div>
        </div>
    }
}

fn unknown_achievement() -> Html {
    html! {
        <div class="celebrate-page unknown">
            <h1>{ "Nothing to celebrate here" }</h1>
            <p>{ "That achievement doesn't exist. Inventing achievements is not an achievement." }</p>
            <Link<Route> to={Route::Celebration} classes="celebrate-back">
                { "Back to the hub" }
            </Link<Route>>
        </div>
    }
}
