//! Leptos Row Navigation Utilities
//!
//! Arrow-key navigation over focusable table rows.
//! Rows are addressed by DOM id; focus changes are requested through a signal
//! and applied once the current render has been flushed.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Navigation keys handled by a row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// ArrowDown
    Next,
    /// ArrowUp
    Prev,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(NavKey::Next),
            "ArrowUp" => Some(NavKey::Prev),
            _ => None,
        }
    }

    /// Row to focus after this key on row `index` of `len` rows (wraps around)
    pub fn target(self, index: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(match self {
            NavKey::Next => wrap_next(index, len),
            NavKey::Prev => wrap_prev(index, len),
        })
    }
}

/// `(index + 1) mod len`
pub fn wrap_next(index: usize, len: usize) -> usize {
    if index + 1 < len { index + 1 } else { 0 }
}

/// `(index - 1 + len) mod len`
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if index > 0 && index <= len { index - 1 } else { len.saturating_sub(1) }
}

/// Pending request to move focus to a row.
/// `generation` changes on every request so asking twice for the same row still fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusRequest {
    pub index: usize,
    pub generation: u32,
}

/// Row navigation state signals
#[derive(Clone, Copy)]
pub struct RowNavSignals {
    /// Row that currently holds keyboard focus
    pub focused_read: ReadSignal<Option<usize>>,
    pub focused_write: WriteSignal<Option<usize>>,
    /// Latest focus request
    pub request_read: ReadSignal<Option<FocusRequest>>,
    pub request_write: WriteSignal<Option<FocusRequest>>,
}

pub fn create_row_nav_signals() -> RowNavSignals {
    let (focused_read, focused_write) = signal(None::<usize>);
    let (request_read, request_write) = signal(None::<FocusRequest>);
    RowNavSignals {
        focused_read,
        focused_write,
        request_read,
        request_write,
    }
}

/// DOM id of row `index`
pub fn row_element_id(prefix: &str, index: usize) -> String {
    format!("{}-{}", prefix, index)
}

/// Ask for row `index` to be focused after the next render
pub fn request_focus(nav: &RowNavSignals, index: usize) {
    let generation = nav
        .request_read
        .get_untracked()
        .map(|r| r.generation.wrapping_add(1))
        .unwrap_or(0);
    nav.request_write.set(Some(FocusRequest { index, generation }));
}

/// Ask for the first row, used when the add form closes and on mount
pub fn request_first_row(nav: &RowNavSignals) {
    request_focus(nav, 0);
}

/// Row to focus after row `index` was removed, leaving `len` rows
pub fn focus_after_remove(index: usize, len: usize) -> Option<usize> {
    if len == 0 { None } else { Some(index.min(len - 1)) }
}

/// Clear the focus cursor if it still points at `index`
pub fn release_focus(nav: &RowNavSignals, index: usize) {
    if nav.focused_read.get_untracked() == Some(index) {
        nav.focused_write.set(None);
    }
}

/// Focus the element with `id`. Returns false if it is missing or not focusable.
pub fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        return false;
    };
    match element.dyn_into::<web_sys::HtmlElement>() {
        Ok(html) => html.focus().is_ok(),
        Err(_) => false,
    }
}

/// Apply focus requests to rows with ids `{prefix}-{index}`
pub fn bind_focus_requests(nav: RowNavSignals, prefix: &'static str) {
    Effect::new(move |_| {
        let Some(request) = nav.request_read.get() else { return };
        let id = row_element_id(prefix, request.index);
        // Zero delay: runs after rows mounted by this update exist in the DOM
        Timeout::new(0, move || {
            if !focus_element_by_id(&id) {
                log::debug!("[NAV] No focusable row #{}", id);
            }
        })
        .forget();
    });
}

/// Create focus handler for a row: keeps the focus cursor in sync
/// when focus arrives by pointer, Tab or a request
pub fn make_on_row_focus(nav: RowNavSignals, index: usize) -> impl Fn(web_sys::FocusEvent) + Copy + 'static {
    move |_ev: web_sys::FocusEvent| {
        nav.focused_write.set(Some(index));
    }
}

/// Create blur handler for a row: focus left it for the form, another row or the page
pub fn make_on_row_blur(nav: RowNavSignals, index: usize) -> impl Fn(web_sys::FocusEvent) + Copy + 'static {
    move |_ev: web_sys::FocusEvent| {
        release_focus(&nav, index);
    }
}

/// Create keydown handler for a row handling ArrowUp/ArrowDown.
/// `len` reads the current row count; other keys go to `on_other`.
pub fn make_on_row_keydown<L, F>(nav: RowNavSignals, index: usize, len: L, on_other: F) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static
where
    L: Fn() -> usize + Clone + 'static,
    F: Fn(&web_sys::KeyboardEvent) + Clone + 'static,
{
    move |ev: web_sys::KeyboardEvent| {
        match NavKey::from_key(&ev.key()) {
            Some(key) => {
                ev.prevent_default();
                if let Some(target) = key.target(index, len()) {
                    request_focus(&nav, target);
                }
            }
            None => on_other(&ev),
        }
    }
}
