use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Achievements;
use crate::dom;
use crate::router::Route;
use crate::theme;

/// Site navigation: brand, page links, the secret achievements link, the
/// theme toggle, and the mobile hamburger.
#[function_component(Header)]
pub fn header() -> Html {
    let achievements = use_context::<Achievements>().expect("achievements context");
    let menu_open = use_state(|| false);

    // The hub stays incognito until the visitor has unlocked something.
    let secret_label = if achievements.read(|m| m.any_unlocked()) {
        "Achievements"
    } else {
        "???"
    };

    let on_toggle_theme = {
        let achievements = achievements.clone();
        Callback::from(move |_| {
            let store = achievements.read(|m| m.store().clone());
            theme::toggle_theme(&store);
            achievements.track(|m| m.record_theme_toggle(dom::now_ms()));
        })
    };

    let on_hamburger = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let nav_links = |onclick: Callback<MouseEvent>| {
        html! {
            <>
                <Link<Route> to={Route::Home} classes="nav-link">{ "Home" }</Link<Route>>
                <Link<Route> to={Route::Blog} classes="nav-link">{ "Blog" }</Link<Route>>
                <Link<Route> to={Route::Photos} classes="nav-link">{ "Photos" }</Link<Route>>
                <span onclick={onclick}>
                    <Link<Route> to={Route::Celebration} classes="nav-link nav-link-secret">
                        { secret_label }
                    </Link<Route>>
                </span>
            </>
        }
    };

    html! {
        <nav role="navigation" class="site-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-brand">{ "Parkbound" }</Link<Route>>
                <div class="nav-links">
                    { nav_links(close_menu.clone()) }
                    <button
                        type="button"
                        class="theme-toggle"
                        aria-label="Toggle color theme"
                        onclick={on_toggle_theme}
                    >
                        { "🌓" }
                    </button>
                </div>
                <button
                    type="button"
                    class={classes!("hamburger", menu_open.then_some("active"))}
                    aria-label="Menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={on_hamburger}
                >
                    <span></span><span></span><span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", menu_open.then_some("active"))}>
                { nav_links(close_menu) }
            </div>
        </nav>
    }
}
