//! The sidebar controller — all open/close, content-load and history logic
//! for the learning-center widget.
//!
//! The controller is deliberately synchronous: it never performs a fetch
//! itself. Operations that need content hand a [`FragmentRequest`] back to
//! the host, which fetches on its own schedule and delivers the outcome via
//! [`SidebarController::apply_fetch`]. That keeps `open` fire-and-forget
//! (visibility flips before any bytes arrive) and makes overlapping fetches
//! last-write-wins by construction.

pub mod history;
pub mod surface;

use url::Url;

use crate::fragment::FragmentNode;
use crate::net::fetch::{root_relative, FetchError};
use history::{HistoryEntry, HistoryStack};
use surface::PanelSurface;

/// Fragment loaded when the panel opens with no explicit URL and no content.
pub const DEFAULT_FRAGMENT: &str = "/learning-center/";

/// Shown in the content container when a fragment fetch fails.
pub const LOAD_ERROR_HTML: &str = "<p>Failed to load content. Please try again.</p>";

/// A fetch the host must perform on the controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRequest {
    /// Root-relative path of the fragment to fetch.
    pub path: String,
}

/// Extract the path portion of a page URL (query string dropped).
pub fn page_path(page_url: &str) -> String {
    match parse_page_url(page_url) {
        Some(url) => url.path().to_string(),
        None => page_url
            .split(['?', '#'])
            .next()
            .unwrap_or(page_url)
            .to_string(),
    }
}

/// Extract the `sidebar` query parameter from a page URL, if present.
pub fn sidebar_param(page_url: &str) -> Option<String> {
    let url = parse_page_url(page_url)?;
    url.query_pairs()
        .find(|(k, _)| k == "sidebar")
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

// Page URLs arrive either absolute or root-relative; resolve the latter
// against a throwaway base so `url` can take them apart.
fn parse_page_url(page_url: &str) -> Option<Url> {
    Url::parse(page_url)
        .ok()
        .or_else(|| Url::parse("http://sidebar.invalid").ok()?.join(page_url).ok())
}

pub struct SidebarController<S: PanelSurface> {
    surface: S,
    history: HistoryStack,
    /// Path of the embedding page, captured at initialization. Address-bar
    /// rewrites are always relative to this path.
    page_path: String,
    /// Pending deep link from the page URL's `sidebar` parameter.
    deep_link: Option<String>,
}

impl<S: PanelSurface> SidebarController<S> {
    /// Bind the controller to a panel surface on the page at `page_url`.
    ///
    /// Marks the toggle script-enabled and sets the initial closed state
    /// (`aria-hidden=true`, `aria-expanded=false`). A `sidebar` query
    /// parameter on `page_url` is held for [`Self::restore_deep_link`].
    pub fn new(mut surface: S, page_url: &str) -> Self {
        surface.mark_script_enabled();
        surface.set_expanded(false);

        Self {
            surface,
            history: HistoryStack::new(page_url),
            page_path: page_path(page_url),
            deep_link: sidebar_param(page_url),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn page_path(&self) -> &str {
        &self.page_path
    }

    pub fn address_bar(&self) -> &str {
        self.history.address_bar()
    }

    /// Open the panel. With a URL, always loads it; without one, loads the
    /// default fragment only when the container is empty.
    pub fn open(&mut self, url: Option<&str>) -> Option<FragmentRequest> {
        self.surface.set_expanded(true);

        match url {
            Some(url) => Some(self.load_content(url)),
            None if self.surface.content_is_empty() => Some(self.load_content(DEFAULT_FRAGMENT)),
            None => None,
        }
    }

    /// Close the panel and rewrite the address bar back to the page path
    /// with the `sidebar` parameter stripped, pushing a stateless entry.
    pub fn close(&mut self) {
        self.surface.set_expanded(false);
        let path = self.page_path.clone();
        self.history.push_state(None, &path);
    }

    /// Toggle-control activation: close when visible, open otherwise.
    pub fn toggle(&mut self) -> Option<FragmentRequest> {
        if self.surface.is_expanded() {
            self.close();
            None
        } else {
            self.open(None)
        }
    }

    /// Start loading a fragment. The returned request is the host's to
    /// fulfil; the controller does not wait on it.
    pub fn load_content(&mut self, url: &str) -> FragmentRequest {
        FragmentRequest {
            path: root_relative(url),
        }
    }

    /// Deliver a finished fetch for `path`.
    ///
    /// Success replaces the container content and pushes
    /// `<page path>?sidebar=<path>` with the fragment path as state. Failure
    /// replaces the content with a fixed error message; visibility is left
    /// untouched either way.
    pub fn apply_fetch(&mut self, path: &str, result: Result<String, FetchError>) {
        match result {
            Ok(html) => {
                self.surface.set_content(&html);
                let fragment = root_relative(path);
                let new_url = format!(
                    "{}?sidebar={}",
                    self.page_path,
                    fragment.trim_start_matches('/')
                );
                self.history.push_state(Some(fragment), &new_url);
            }
            Err(e) => {
                log::error!("Error loading sidebar content {}: {}", path, e);
                self.surface.set_content(LOAD_ERROR_HTML);
            }
        }
    }

    /// Delegated click inside the content container: anchors carrying the
    /// `data-sidebar` marker load in-panel; anything else is left to
    /// navigate normally.
    pub fn content_click(&mut self, target: &FragmentNode) -> Option<FragmentRequest> {
        let href = target.sidebar_href()?.to_string();
        Some(self.load_content(&href))
    }

    /// Browser Back: pop one entry and react to its state.
    pub fn go_back(&mut self) -> Option<FragmentRequest> {
        let entry = self.history.back()?;
        self.handle_pop(entry)
    }

    /// Browser Forward: advance one entry and react to its state.
    pub fn go_forward(&mut self) -> Option<FragmentRequest> {
        let entry = self.history.forward()?;
        self.handle_pop(entry)
    }

    // popstate: an entry with a fragment path reopens and reloads it; a
    // stateless entry closes the panel.
    fn handle_pop(&mut self, entry: HistoryEntry) -> Option<FragmentRequest> {
        match entry.sidebar_url {
            Some(url) => self.open(Some(&url)),
            None => {
                self.close();
                None
            }
        }
    }

    /// Fire the deep link captured at initialization, if any. Call once
    /// after construction.
    pub fn restore_deep_link(&mut self) -> Option<FragmentRequest> {
        let url = self.deep_link.take()?;
        log::debug!("Restoring sidebar deep link {}", url);
        self.open(Some(&url))
    }
}
