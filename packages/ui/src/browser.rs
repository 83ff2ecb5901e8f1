//! Thin wrappers over the browser window.
//!
//! Outside the browser (native builds, tests) they are no-ops so shared
//! components still compile and render.

/// Current URL fragment including the leading `#`, or an empty string.
pub fn location_hash() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.location().hash().unwrap_or_default();
        }
    }
    String::new()
}

/// Scheme + host the app is served from.
pub fn origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.location().origin().ok();
        }
    }
    None
}

/// Drop the fragment from the address bar without adding a history entry.
pub fn strip_fragment() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        let replaced = window.history().and_then(|history| {
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&format!("{path}{search}")))
        });
        if replaced.is_err() {
            tracing::warn!("Could not remove the URL fragment");
        }
    }
}

/// Full page load of `path`, discarding all in-memory state.
pub fn reload_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("Reload to {} requested outside the browser", path);
}
