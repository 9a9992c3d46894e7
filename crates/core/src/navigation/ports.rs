//! Port interfaces for browser tab and container collaborators
//!
//! These traits define the boundaries between the navigation logic and
//! the browser's tab/window and contextual-identity APIs. Containers
//! exist on one platform only; the orchestrator treats the container port
//! as optional.

use async_trait::async_trait;
use rolehop_domain::Result;

/// A browser tab, as much of it as navigation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub id: i64,
    pub window_id: i64,
    pub url: Option<String>,
}

/// Trait for browser tab and window manipulation.
#[async_trait]
pub trait TabController: Send + Sync {
    /// The active tab of the current window, if any.
    async fn active_tab(&self) -> Result<Option<TabInfo>>;

    /// Navigate an existing tab to `url`.
    async fn update_tab(&self, tab_id: i64, url: &str) -> Result<()>;

    /// Open a new tab at `url`.
    async fn create_tab(&self, url: &str) -> Result<()>;

    /// Highlight (select) a tab within its window.
    async fn highlight_tab(&self, tab_id: i64) -> Result<()>;

    /// Bring a window to the front.
    async fn focus_window(&self, window_id: i64) -> Result<()>;

    /// Close the extension's own popup surface.
    async fn close_popup(&self) -> Result<()>;
}

/// An isolated browsing container, keyed by its cookie store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub cookie_store_id: String,
    pub name: String,
}

/// Trait for the container collaborator (one platform only).
#[async_trait]
pub trait ContainerHost: Send + Sync {
    /// Containers whose name equals `name` exactly.
    async fn find_containers_by_name(&self, name: &str) -> Result<Vec<ContainerRef>>;

    /// Tabs currently open in the given container.
    async fn tabs_in_container(&self, cookie_store_id: &str) -> Result<Vec<TabInfo>>;

    /// Ask the background collaborator to expire the container after
    /// `minutes`.
    async fn request_expiry(&self, cookie_store_id: &str, minutes: u32) -> Result<()>;
}
