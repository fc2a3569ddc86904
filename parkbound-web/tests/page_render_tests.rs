use futures::executor::block_on;
use parkbound_core::{KeyValueStore, keys};
use parkbound_web::app::Achievements;
use parkbound_web::components::banner::{Banner, Props as BannerProps};
use parkbound_web::components::lightbox::{Lightbox, Photo, Props as LightboxProps};
use parkbound_web::pages::{Blog, Celebrate, CelebrationHub, Home, NotFound, Photos};
use parkbound_web::storage::LocalStore;
use yew::prelude::*;
use yew::{LocalServerRenderer, html::ChildrenRenderer};
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

#[derive(Properties, PartialEq, Clone)]
struct ShellProps {
    achievements: Achievements,
    children: Children,
}

/// Pages expect the achievements context and a router; this provides both
/// without mounting the full app shell.
#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router {history}>
            <ContextProvider<Achievements> context={props.achievements.clone()}>
                { props.children.clone() }
            </ContextProvider<Achievements>>
        </Router>
    }
}

fn render(store: LocalStore, page: Html) -> String {
    let props = ShellProps {
        achievements: Achievements::standalone(store),
        children: ChildrenRenderer::new(vec![page]),
    };
    block_on(LocalServerRenderer::<Shell>::with_props(props).render())
}

#[test]
fn home_page_renders_the_canonical_ranking() {
    let html = render(LocalStore::new(), html! { <Home /> });
    assert!(html.contains("My Favourite Coasters"));
    assert!(html.contains("#1"));
    assert!(html.contains("Steel Vengeance"));
    assert!(html.contains("Cedar Point"));
    assert!(html.contains("Expedition GeForce"));
    // No cosmetics on a fresh visit.
    assert!(!html.contains("rainbow-text"));
    assert!(!html.contains("edit-mode-hint"));
}

#[test]
fn home_page_applies_unlocked_cosmetics() {
    let store = LocalStore::new();
    store.set(
        keys::UNLOCKED_ACHIEVEMENTS,
        r#"["epilepsyWarning","payRespects","blasphemy"]"#,
    );
    let html = render(store, html! { <Home /> });
    assert!(html.contains("rainbow-text"));
    // The F emoji cosmetic rewrites the hero title.
    assert!(html.contains("🫡avourite"));
    assert!(html.contains("edit-mode-hint"));
}

#[test]
fn home_page_cosmetic_is_off_when_preference_disabled() {
    let store = LocalStore::new();
    store.set(keys::UNLOCKED_ACHIEVEMENTS, r#"["epilepsyWarning"]"#);
    store.set(keys::RAINBOW_TEXT_ENABLED, "false");
    let html = render(store, html! { <Home /> });
    assert!(!html.contains("rainbow-text"));
}

#[test]
fn not_found_page_renders() {
    let html = render(LocalStore::new(), html! { <NotFound /> });
    assert!(html.contains("404"));
    assert!(html.contains("Back to the queue"));
}

#[test]
fn blog_page_shows_loading_state_before_discovery() {
    let html = render(LocalStore::new(), html! { <Blog /> });
    assert!(html.contains("Trip Reports"));
    assert!(html.contains("Checking the logbook"));
}

#[test]
fn photos_page_renders_the_grid_without_a_lightbox() {
    let html = render(LocalStore::new(), html! { <Photos /> });
    assert!(html.contains("Park Photos"));
    assert!(html.contains("photo-thumb"));
    assert!(!html.contains("lightbox-caption"));
}

#[test]
fn celebration_hub_hides_locked_names_and_shows_progress() {
    let html = render(LocalStore::new(), html! { <CelebrationHub /> });
    assert!(html.contains("0 of 11 unlocked (0%)"));
    assert!(html.contains("???"));
    // Long-game achievements get a progress bar even while locked.
    assert!(html.contains("0 / 50"));
    assert!(html.contains("0 / 7"));
    // Locked cards never leak their names.
    assert!(!html.contains("Refresh Ranger"));
}

#[test]
fn celebration_hub_shows_unlocked_cards_and_reward_toggles() {
    let store = LocalStore::new();
    store.set(keys::UNLOCKED_ACHIEVEMENTS, r#"["payRespects","notFound"]"#);
    let html = render(store, html! { <CelebrationHub /> });
    assert!(html.contains("2 of 11 unlocked (18%)"));
    assert!(html.contains("Press F"));
    assert!(html.contains("F Emoji"));
    // No reward on this one, so no toggle label.
    assert!(html.contains("Lost and Found"));
}

#[test]
fn celebration_hub_percent_rounds_half_up() {
    let store = LocalStore::new();
    // 6 of 11 is 54.54%, which rounds up rather than truncating to 54.
    store.set(
        keys::UNLOCKED_ACHIEVEMENTS,
        r#"["loadingTipsMaster","epilepsyWarning","developerConsole","notFound","dedicated","educated"]"#,
    );
    let html = render(store, html! { <CelebrationHub /> });
    assert!(html.contains("6 of 11 unlocked (55%)"));
}

#[test]
fn celebration_hub_marks_pending_cards() {
    let store = LocalStore::new();
    store.set(keys::PENDING_ACHIEVEMENTS, r#"["barrelRoll"]"#);
    let html = render(store, html! { <CelebrationHub /> });
    assert!(html.contains("Something is waiting for you"));
}

#[test]
fn celebrate_page_rejects_unknown_ids() {
    let html = render(
        LocalStore::new(),
        html! { <Celebrate id="definitelyNotReal" /> },
    );
    assert!(html.contains("doesn't exist"));
}

#[test]
fn celebrate_page_teases_locked_achievements() {
    let store = LocalStore::new();
    store.set(keys::VISIT_STREAK, r#"{"streakDays":3,"lastVisit":"2026-08-01"}"#);
    let html = render(store, html! { <Celebrate id="dedicated" /> });
    assert!(html.contains("Not yet."));
    assert!(html.contains("Progress so far: 3 / 7"));
    assert!(!html.contains("Dedicated"));
}

#[test]
fn celebrate_page_celebrates_unlocked_achievements() {
    let store = LocalStore::new();
    store.set(keys::UNLOCKED_ACHIEVEMENTS, r#"["blasphemy"]"#);
    let html = render(store, html! { <Celebrate id="blasphemy" /> });
    assert!(html.contains("Blasphemy"));
    assert!(html.contains("Reward unlocked: Edit Mode"));
    assert!(html.contains("Reset this achievement"));
}

#[test]
fn banner_renders_claim_and_close_affordances() {
    let def = parkbound_core::catalog::lookup(parkbound_core::AchievementId::BigBox)
        .expect("catalog entry");
    let props = BannerProps {
        def,
        on_close: Callback::noop(),
        on_claim: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Banner>::with_props(props).render());
    assert!(html.contains("Achievement Unlocked!"));
    assert!(html.contains("Big Box Energy"));
    assert!(html.contains("claim your prize"));
}

#[test]
fn lightbox_renders_caption_and_counter() {
    let photos = vec![
        Photo {
            src: AttrValue::from("/photos/a.jpg"),
            alt: AttrValue::from("a"),
            caption: AttrValue::from("First"),
        },
        Photo {
            src: AttrValue::from("/photos/b.jpg"),
            alt: AttrValue::from("b"),
            caption: AttrValue::from("Second"),
        },
    ];
    let props = LightboxProps {
        photos,
        index: 1,
        on_close: Callback::noop(),
        on_prev: Callback::noop(),
        on_next: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Lightbox>::with_props(props).render());
    assert!(html.contains("Second"));
    assert!(html.contains("2 / 2"));
}
