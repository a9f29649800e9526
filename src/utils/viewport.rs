/// Scrolls the page back to the top (smooth), as done after every page change.
/// No-op outside the browser.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    use web_sys::{ScrollBehavior, ScrollToOptions};

    if let Some(win) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {}
