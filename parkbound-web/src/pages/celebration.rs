use parkbound_core::{
    AchievementDef, CATALOG, ProgressReport, cosmetic_enabled, export_json, import_snapshot,
    progress, toggle_cosmetic,
};
use yew::prelude::*;

use crate::app::Achievements;
use crate::cosmetics;
use crate::dom;

/// ISO-8601 timestamp for the export document.
fn export_date() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// The achievement hub: stats line, one card per catalog entry, and the
/// transfer and reset controls.
#[function_component(CelebrationHub)]
pub fn celebration_hub() -> Html {
    let achievements = use_context::<Achievements>().expect("achievements context");
    let import_text = use_state(String::new);
    let status: UseStateHandle<Option<String>> = use_state(|| None);

    let (unlocked, total) = achievements.read(|m| m.counts());
    // Same rounding as the per-card progress bars.
    #[allow(clippy::cast_possible_truncation)]
    let percent = ProgressReport {
        current: unlocked as u32,
        total: total as u32,
    }
    .percent();

    let on_export = {
        let achievements = achievements.clone();
        let status = status.clone();
        Callback::from(move |_| {
            let store = achievements.read(|m| m.store().clone());
            let json = export_json(&store, &export_date());
            #[cfg(target_arch = "wasm32")]
            {
                let status = status.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let promise = dom::window().navigator().clipboard().write_text(&json);
                    match wasm_bindgen_futures::JsFuture::from(promise).await {
                        Ok(_) => status.set(Some("Progress copied to clipboard.".to_string())),
                        Err(err) => status.set(Some(format!(
                            "Clipboard refused the export: {}",
                            dom::js_error_message(&err)
                        ))),
                    }
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = json;
                status.set(Some("Progress copied to clipboard.".to_string()));
            }
        })
    };

    let on_import_input = {
        let import_text = import_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target_dyn_into::<web_sys::HtmlTextAreaElement>()
            {
                import_text.set(area.value());
            }
        })
    };
    let on_import = {
        let achievements = achievements.clone();
        let import_text = import_text.clone();
        let status = status.clone();
        Callback::from(move |_| {
            if !dom::confirm("Importing replaces all saved progress on this device. Continue?") {
                return;
            }
            let store = achievements.read(|m| m.store().clone());
            match import_snapshot(&store, &import_text) {
                Ok(()) => dom::reload(),
                Err(err) => status.set(Some(format!("Import failed: {err}"))),
            }
        })
    };

    let on_reset_all = {
        let achievements = achievements.clone();
        Callback::from(move |_| {
            if !dom::confirm("Reset ALL achievements and progress? There is no undo.") {
                return;
            }
            achievements.mutate(|m| {
                m.reset_all();
                cosmetics::project_document(m);
            });
        })
    };

    html! {
        <div class="celebration-page">
            <h1>{ "Achievements" }</h1>
            <p class="achievement-stats">
                { format!("{unlocked} of {total} unlocked ({percent}%)") }
            </p>
            <div class="achievement-grid">
                { for CATALOG.iter().map(|def| achievement_card(&achievements, def)) }
            </div>
            <section class="transfer-controls">
                <h2>{ "Take it with you" }</h2>
                <button type="button" class="export-btn" onclick={on_export}>
                    { "Export progress" }
                </button>
                <textarea
                    class="import-area"
                    placeholder="Paste an exported progress document here"
                    value={(*import_text).clone()}
                    oninput={on_import_input}
                />
                <button type="button" class="import-btn" onclick={on_import}>
                    { "Import progress" }
                </button>
                <button type="button" class="reset-all-btn" onclick={on_reset_all}>
                    { "Reset everything" }
                </button>
                { status.as_ref().map(|message| html! {
                    <p class="transfer-status" role="status">{ message }</p>
                }) }
            </section>
        </div>
    }
}

fn achievement_card(achievements: &Achievements, def: &'static AchievementDef) -> Html {
    let is_unlocked = achievements.read(|m| m.is_unlocked(def.id));
    let is_pending = achievements.read(|m| m.is_pending(def.id));

    if is_unlocked {
        let reward_toggle = def.reward.map(|reward| {
            let enabled = achievements.read(|m| cosmetic_enabled(m, def.id));
            let on_toggle = {
                let achievements = achievements.clone();
                Callback::from(move |_| {
                    achievements.mutate(|m| {
                        toggle_cosmetic(m, def.id);
                        cosmetics::project_document(m);
                    });
                })
            };
            html! {
                <label class="reward-toggle">
                    <input type="checkbox" checked={enabled} onchange={on_toggle} />
                    { reward }
                </label>
            }
        });
        return html! {
            <div class="achievement-card unlocked" key={def.id.as_str()}>
                <div class="card-icon">{ def.icon }</div>
                <h3>{ def.name }</h3>
                <p>{ def.description }</p>
                { reward_toggle }
            </div>
        };
    }

    // Locked (or pending) cards keep the name secret; long-game ones show
    // how far along the visitor is.
    let bar = achievements
        .read(|m| progress(m.store(), def.id, dom::now_ms()))
        .map(|report| {
            html! {
                <div class="card-progress">
                    <div class="card-progress-bar">
                        <div
                            class="card-progress-fill"
                            style={format!("width: {}%", report.percent())}
                        />
                    </div>
                    <span class="card-progress-label">
                        { format!("{} / {}", report.current, report.total) }
                    </span>
                </div>
            }
        });
    html! {
        <div
            class={classes!("achievement-card", "locked", is_pending.then_some("pending"))}
            key={def.id.as_str()}
        >
            <div class="card-icon">{ "🔒" }</div>
            <h3>{ "???" }</h3>
            { bar }
            { is_pending.then(|| html! {
                <p class="card-pending-note">{ "Something is waiting for you..." }</p>
            }) }
        </div>
    }
}
