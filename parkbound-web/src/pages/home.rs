use parkbound_core::{
    COASTERS, Coaster, DropOutcome, apply_drop, cosmetic_enabled, load_order, save_order,
};
use parkbound_core::AchievementId;
use yew::prelude::*;

use crate::app::Achievements;
use crate::cosmetics;

/// The home page: hero plus the ranked coaster list. Expanding a card
/// counts toward the scholar achievement; with edit mode unlocked the cards
/// become draggable and the ranking is the visitor's to ruin.
#[function_component(Home)]
pub fn home() -> Html {
    let achievements = use_context::<Achievements>().expect("achievements context");

    let order = use_state(|| {
        let store = achievements.read(|m| m.store().clone());
        load_order(&store)
    });
    let expanded: UseStateHandle<Option<usize>> = use_state(|| None);
    let drag_from: UseStateHandle<Option<usize>> = use_state(|| None);

    let edit_mode = achievements.read(|m| cosmetic_enabled(m, AchievementId::Blasphemy));
    let hero_class = achievements.read(cosmetics::hero_title_class);
    let hero_text = achievements.read(|m| cosmetics::hero_title_text(m, "My Favourite Coasters"));
    let intro = achievements.read(|m| {
        cosmetics::hero_title_text(
            m,
            "Ranked by feel, not by stats. Click a card for the stats anyway.",
        )
    });

    let on_card_click = |position: usize, coaster: &'static Coaster| {
        let achievements = achievements.clone();
        let expanded = expanded.clone();
        Callback::from(move |_| {
            if *expanded == Some(position) {
                expanded.set(None);
                return;
            }
            expanded.set(Some(position));
            // The scholar tracker counts coasters, not list positions, so a
            // reordered list still converges on all sixteen.
            if let Some(canonical) = COASTERS.iter().position(|c| c.id == coaster.id) {
                achievements.track(|m| m.record_coaster_click(canonical));
            }
        })
    };

    let on_drag_start = |position: usize| {
        let drag_from = drag_from.clone();
        Callback::from(move |_: DragEvent| drag_from.set(Some(position)))
    };
    let on_drag_over = Callback::from(|e: DragEvent| e.prevent_default());
    let on_drop = |position: usize| {
        let achievements = achievements.clone();
        let order = order.clone();
        let drag_from = drag_from.clone();
        let expanded = expanded.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let Some(from) = *drag_from else {
                return;
            };
            drag_from.set(None);
            let mut next = (*order).clone();
            let outcome = apply_drop(&mut next, from, position);
            if outcome == DropOutcome::Ignored {
                return;
            }
            let store = achievements.read(|m| m.store().clone());
            save_order(&store, &next);
            expanded.set(None);
            order.set(next);
            if outcome == DropOutcome::Blasphemy {
                achievements.track(|m| m.record_blasphemy());
            }
        })
    };

    html! {
        <div class="home-page">
            <section class="hero">
                <h1 class={hero_class}>{ hero_text }</h1>
                <p class="hero-subtitle">{ intro }</p>
                { edit_mode.then(|| html! {
                    <p class="edit-mode-hint">{ "Edit mode is on. Drag cards to re-rank. Carefully." }</p>
                }) }
            </section>
            <section class="coaster-list">
                { for order.iter().enumerate().map(|(position, coaster)| {
                    let is_expanded = *expanded == Some(position);
                    html! {
                        <article
                            key={coaster.id}
                            class={classes!("coaster-card", is_expanded.then_some("expanded"))}
                            draggable={edit_mode.to_string()}
                            ondragstart={edit_mode.then(|| on_drag_start(position))}
                            ondragover={edit_mode.then(|| on_drag_over.clone())}
                            ondrop={edit_mode.then(|| on_drop(position))}
                            onclick={on_card_click(position, coaster)}
                        >
                            <div class="coaster-rank">{ format!("#{}", position + 1) }</div>
                            <div class="coaster-summary">
                                <h2>{ coaster.name }</h2>
                                <p class="coaster-park">{ coaster.park }</p>
                            </div>
                            { is_expanded.then(|| html! {
                                <dl class="coaster-stats">
                                    <dt>{ "Height" }</dt>
                                    <dd>{ format!("{} m", coaster.height_m) }</dd>
                                    <dt>{ "Top speed" }</dt>
                                    <dd>{ format!("{} km/h", coaster.speed_kmh) }</dd>
                                    <dt>{ "Inversions" }</dt>
                                    <dd>{ coaster.inversions }</dd>
                                </dl>
                            }) }
                        </article>
                    }
                }) }
            </section>
        </div>
    }
}
