use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Achievements;
use crate::router::Route;

/// The 404 page. Arriving here is itself an achievement.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let achievements = use_context::<Achievements>().expect("achievements context");

    {
        let achievements = achievements.clone();
        use_effect_with((), move |()| {
            achievements.track(|m| m.record_404_visit());
            || {}
        });
    }

    html! {
        <div class="not-found-page">
            <h1 class="not-found-code">{ "404" }</h1>
            <p>{ "This page left the station without you." }</p>
            <p class="not-found-hint">{ "Although... wandering off the path has its rewards." }</p>
            <Link<Route> to={Route::Home} classes="not-found-home">{ "Back to the queue" }</Link<Route>>
        </div>
    }
}
