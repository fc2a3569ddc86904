//! The app shell: owns the achievement engine instance, the unlock banner
//! presenter, and the global event wiring (keyboard, resize, console eggs).

use std::cell::RefCell;
use std::rc::Rc;

use parkbound_core::{AchievementId, AchievementManager, catalog};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Banner, CookieBanner, Footer, Header, LoadingScreen};
use crate::cosmetics;
use crate::dom;
use crate::pages;
use crate::router::Route;
use crate::storage::LocalStore;
use crate::theme;

/// The one manager type the site runs on.
pub type Manager = AchievementManager<LocalStore>;

/// Earliest moment a banner may appear, measured from page load. Keeps the
/// banner from fighting the loading overlay for attention.
#[cfg(target_arch = "wasm32")]
const BANNER_FLOOR_MS: u64 = 2_000;

/// How long an unclicked banner stays up before dismissing itself.
#[cfg(target_arch = "wasm32")]
const BANNER_VISIBLE_MS: i32 = 5_000;

/// Engine state shared through context. `version` is bumped on every
/// mutation so consumers re-render; the manager itself lives behind a
/// stable `Rc`.
struct EngineState {
    manager: Rc<RefCell<Manager>>,
    version: u32,
}

impl Reducible for EngineState {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        Rc::new(Self {
            manager: self.manager.clone(),
            version: self.version.wrapping_add(1),
        })
    }
}

/// Handle components use to read and drive the achievement engine.
#[derive(Clone)]
pub struct Achievements {
    manager: Rc<RefCell<Manager>>,
    version: u32,
    notify: Callback<Vec<AchievementId>>,
}

impl PartialEq for Achievements {
    // `notify` is rebuilt every render and deliberately ignored; identity
    // is the engine instance plus its mutation counter.
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && Rc::ptr_eq(&self.manager, &other.manager)
    }
}

impl Achievements {
    /// Build a handle around a fresh engine on `store`. Rendering outside
    /// the app shell (server rendering, tests) uses this; the shell itself
    /// wires the version counter and the banner presenter.
    #[must_use]
    pub fn standalone(store: LocalStore) -> Self {
        Self {
            manager: Rc::new(RefCell::new(AchievementManager::new(store))),
            version: 0,
            notify: Callback::noop(),
        }
    }

    /// Read from the engine without mutating it.
    pub fn read<T>(&self, f: impl FnOnce(&Manager) -> T) -> T {
        f(&self.manager.borrow())
    }

    /// Run a tracker and feed whatever it newly pended into the banner
    /// presenter.
    pub fn track(&self, f: impl FnOnce(&mut Manager) -> Vec<AchievementId>) {
        let newly = f(&mut self.manager.borrow_mut());
        self.notify.emit(newly);
    }

    /// Mutate the engine outside the tracker paths (acknowledge, resets,
    /// cosmetic toggles). Consumers re-render; no banner is scheduled.
    pub fn mutate(&self, f: impl FnOnce(&mut Manager)) {
        f(&mut self.manager.borrow_mut());
        self.notify.emit(Vec::new());
    }
}

/// Banner lifecycle. At most one banner exists at a time; pending
/// achievements beyond the first wait for a later page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BannerPhase {
    Hidden,
    Scheduled(AchievementId),
    Visible(AchievementId),
}

impl BannerPhase {
    /// Display-timer firing: reveal `id` only if its schedule is still the
    /// latest word. A claim, close, or reset may have raced the timer.
    fn revealed(self, id: AchievementId) -> Self {
        if self == Self::Scheduled(id) {
            Self::Visible(id)
        } else {
            self
        }
    }

    /// Visibility-timer firing: an ignored banner dismisses itself. The
    /// achievement stays pending and the banner returns on a later load,
    /// exactly like the close control.
    #[cfg(any(target_arch = "wasm32", test))]
    fn expired(self, id: AchievementId) -> Self {
        if self == Self::Visible(id) {
            Self::Hidden
        } else {
            self
        }
    }
}

/// Whether a keypress on this target is text entry rather than a gesture.
#[cfg(any(target_arch = "wasm32", test))]
fn editable_target(tag: &str, content_editable: bool) -> bool {
    content_editable || matches!(tag, "INPUT" | "TEXTAREA" | "SELECT")
}

fn schedule_banner(
    banner: &Rc<RefCell<BannerPhase>>,
    engine: &UseReducerDispatcher<EngineState>,
    id: AchievementId,
    load_ms: u64,
) {
    *banner.borrow_mut() = BannerPhase::Scheduled(id);
    #[cfg(target_arch = "wasm32")]
    {
        let banner = banner.clone();
        let engine = engine.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let elapsed = dom::now_ms().saturating_sub(load_ms);
            #[allow(clippy::cast_possible_truncation)]
            let wait = BANNER_FLOOR_MS.saturating_sub(elapsed) as i32;
            let _ = dom::sleep_ms(wait).await;
            {
                let mut phase = banner.borrow_mut();
                let next = phase.revealed(id);
                if next == *phase {
                    return;
                }
                *phase = next;
            }
            engine.dispatch(());

            let _ = dom::sleep_ms(BANNER_VISIBLE_MS).await;
            let mut phase = banner.borrow_mut();
            let next = phase.expired(id);
            if next != *phase {
                *phase = next;
                drop(phase);
                engine.dispatch(());
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = load_ms;
        let next = banner.borrow().revealed(id);
        *banner.borrow_mut() = next;
        engine.dispatch(());
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let engine = use_reducer(|| EngineState {
        manager: Rc::new(RefCell::new(AchievementManager::new(LocalStore::new()))),
        version: 0,
    });
    let banner = use_mut_ref(|| BannerPhase::Hidden);
    let load_ms = *use_mut_ref(dom::now_ms).borrow();

    let notify = {
        let dispatcher = engine.dispatcher();
        let banner = banner.clone();
        Callback::from(move |newly: Vec<AchievementId>| {
            if let Some(&first) = newly.first()
                && *banner.borrow() == BannerPhase::Hidden
            {
                schedule_banner(&banner, &dispatcher, first, load_ms);
            }
            dispatcher.dispatch(());
        })
    };
    let achievements = Achievements {
        manager: engine.manager.clone(),
        version: engine.version,
        notify,
    };

    {
        let achievements = achievements.clone();
        let banner = banner.clone();
        let dispatcher = engine.dispatcher();
        use_effect_with((), move |()| {
            let store = achievements.read(|m| m.store().clone());
            theme::apply_theme(&theme::current_theme(&store));

            achievements.track(|m| m.record_daily_visit(dom::today()));
            achievements.track(|m| m.record_zoom_level(dom::zoom_percent()));
            if dom::devtools_open() {
                achievements.track(|m| m.record_console_opened());
            }
            achievements.read(cosmetics::project_document);

            // An earned-but-unclaimed banner from a previous visit comes back.
            if *banner.borrow() == BannerPhase::Hidden
                && let Some(first) = achievements.read(|m| m.pending().first().copied())
            {
                schedule_banner(&banner, &dispatcher, first, load_ms);
            }

            install_global_listeners(&achievements);
            || {}
        });
    }

    let on_claim = {
        let achievements = achievements.clone();
        let banner = banner.clone();
        let dispatcher = engine.dispatcher();
        Callback::from(move |()| {
            let phase = *banner.borrow();
            if let BannerPhase::Visible(id) = phase {
                achievements.mutate(|m| {
                    m.acknowledge_pending(id);
                });
                *banner.borrow_mut() = BannerPhase::Hidden;
                dispatcher.dispatch(());
                if let Some(def) = catalog::lookup(id) {
                    dom::navigate(def.unlock_page);
                }
            }
        })
    };
    let on_close = {
        let banner = banner.clone();
        let dispatcher = engine.dispatcher();
        Callback::from(move |()| {
            // The achievement stays pending; the banner returns next load.
            *banner.borrow_mut() = BannerPhase::Hidden;
            dispatcher.dispatch(());
        })
    };

    let banner_html = match *banner.borrow() {
        BannerPhase::Visible(id) => catalog::lookup(id).map_or_else(Html::default, |def| {
            html! { <Banner {def} on_close={on_close.clone()} on_claim={on_claim.clone()} /> }
        }),
        BannerPhase::Hidden | BannerPhase::Scheduled(_) => Html::default(),
    };

    html! {
        <ContextProvider<Achievements> context={achievements}>
            <BrowserRouter>
                <LoadingScreen />
                <Header />
                <main class="page-content">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
                { banner_html }
                <CookieBanner />
            </BrowserRouter>
        </ContextProvider<Achievements>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::Home /> },
        Route::Blog => html! { <pages::Blog /> },
        Route::Photos => html! { <pages::Photos /> },
        Route::Celebration => html! { <pages::CelebrationHub /> },
        Route::Celebrate { id } => html! { <pages::Celebrate {id} /> },
        Route::NotFound => html! { <pages::NotFound /> },
    }
}

/// Wire up the document-level event sources: console eggs, the F key, and
/// zoom/devtools detection on resize. The listeners live for the page.
fn install_global_listeners(achievements: &Achievements) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::console_eggs;

        let on_egg = {
            let achievements = achievements.clone();
            Callback::from(move |egg| match egg {
                console_eggs::Egg::BarrelRoll => {
                    achievements.track(|m| m.record_barrel_roll());
                }
                console_eggs::Egg::BigBox => {
                    achievements.track(|m| m.record_big_box());
                }
            })
        };
        console_eggs::install(&on_egg);

        let keydown = {
            let achievements = achievements.clone();
            Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                move |event: web_sys::KeyboardEvent| {
                    if event.key() != "f" && event.key() != "F" {
                        return;
                    }
                    // Typing an f into a form field or an editable region
                    // is not paying respects.
                    if let Some(el) = event
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
                        && editable_target(&el.tag_name(), el.is_content_editable())
                    {
                        return;
                    }
                    achievements.track(|m| m.record_pay_respects());
                },
            )
        };
        let _ = dom::window()
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        keydown.forget();

        let resize = {
            let achievements = achievements.clone();
            Closure::<dyn FnMut()>::new(move || {
                achievements.track(|m| m.record_zoom_level(dom::zoom_percent()));
                if dom::devtools_open() {
                    achievements.track(|m| m.record_console_opened());
                }
            })
        };
        let _ = dom::window()
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        resize.forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = achievements;
    }
}
