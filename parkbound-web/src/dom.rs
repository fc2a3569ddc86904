//! Browser plumbing shared across the site.

use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Promise};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::Response;

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Milliseconds since the epoch. Zero outside a browser; callers only use
/// this from event handlers and effects, which never run during server
/// rendering.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            js_sys::Date::now() as u64
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

/// The visitor's local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        NaiveDate::from_ymd_opt(
            date.get_full_year() as i32,
            date.get_month() + 1,
            date.get_date(),
        )
        .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        NaiveDate::default()
    }
}

/// Approximate the browser zoom level as a percentage. Takes the larger of
/// the device-pixel-ratio estimate and the outer/inner width ratio; both
/// overshoot in different situations and the achievement only cares about
/// the extreme.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn zoom_percent() -> u32 {
    let Some(win) = web_sys::window() else {
        return 100;
    };
    let dpr = (win.device_pixel_ratio() * 100.0).round().max(0.0) as u32;
    let inner = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let outer = win.outer_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let ratio = if inner > 0.0 {
        (outer / inner * 100.0).round().max(0.0) as u32
    } else {
        0
    };
    dpr.max(ratio).max(100)
}

/// Heuristic for an open devtools pane: a large gap between the window's
/// outer and inner size.
#[must_use]
pub fn devtools_open() -> bool {
    const GAP_PX: f64 = 160.0;
    let Some(win) = web_sys::window() else {
        return false;
    };
    let inner_w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let outer_w = win.outer_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let inner_h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let outer_h = win.outer_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    outer_w - inner_w > GAP_PX || outer_h - inner_h > GAP_PX
}

/// Show a confirmation dialog. Declining any destructive action aborts it.
#[must_use]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Navigate the browser to `href` (a site-relative route).
pub fn navigate(href: &str) {
    if let Some(win) = web_sys::window()
        && let Err(err) = win.location().set_href(href)
    {
        console_error(&format!("navigation failed: {}", js_error_message(&err)));
    }
}

/// Reload the current page (after an import).
pub fn reload() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().reload();
    }
}

/// Read a cookie by name.
#[must_use]
pub fn get_cookie(name: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let html_doc = doc.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_doc.cookie().ok()?;
    cookies.split(';').find_map(|part| {
        let part = part.trim();
        part.strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
            .map(ToString::to_string)
    })
}

/// Set a cookie with an expiry `days` from now.
pub fn set_cookie(name: &str, value: &str, days: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(html_doc) = doc.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        let expires = js_sys::Date::new_0();
        expires.set_time(js_sys::Date::now() + f64::from(days) * 24.0 * 60.0 * 60.0 * 1000.0);
        let cookie = format!(
            "{name}={value};expires={};path=/",
            String::from(expires.to_utc_string())
        );
        let _ = html_doc.set_cookie(&cookie);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (name, value, days);
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Fetch a URL and return its body text, or `None` for any network failure
/// or non-ok status. The blog loader treats both the same way: the entry
/// does not exist.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
pub async fn fetch_text(url: &str) -> Option<String> {
    let resp_value = JsFuture::from(window().fetch_with_str(url)).await.ok()?;
    let response = resp_value.dyn_into::<Response>().ok()?;
    if !response.ok() {
        return None;
    }
    let text = JsFuture::from(response.text().ok()?).await.ok()?;
    text.as_string()
}

/// Build a URL for a static asset, honoring the deployment base path baked
/// in at compile time (e.g. when hosted under a project subdirectory).
#[must_use]
pub fn asset_path(relative: &str) -> String {
    let base = option_env!("PUBLIC_URL").unwrap_or("").trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
