//! Recording fakes for the browser tab and container ports.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rolehop_core::{ContainerHost, ContainerRef, TabController, TabInfo};
use rolehop_domain::Result;

/// Everything a navigation run did to the (fake) browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    Updated(i64, String),
    Created(String),
    Highlighted(i64),
    FocusedWindow(i64),
    PopupClosed,
}

/// In-memory [`TabController`] that records every action.
#[derive(Default)]
pub struct FakeTabs {
    active: Mutex<Option<TabInfo>>,
    actions: Mutex<Vec<TabAction>>,
}

impl FakeTabs {
    pub fn with_active_tab(tab: TabInfo) -> Self {
        Self { active: Mutex::new(Some(tab)), actions: Mutex::new(Vec::new()) }
    }

    pub fn actions(&self) -> Vec<TabAction> {
        self.actions.lock().unwrap().clone()
    }

    fn record(&self, action: TabAction) {
        self.actions.lock().unwrap().push(action);
    }
}

#[async_trait]
impl TabController for FakeTabs {
    async fn active_tab(&self) -> Result<Option<TabInfo>> {
        Ok(self.active.lock().unwrap().clone())
    }

    async fn update_tab(&self, tab_id: i64, url: &str) -> Result<()> {
        self.record(TabAction::Updated(tab_id, url.to_string()));
        Ok(())
    }

    async fn create_tab(&self, url: &str) -> Result<()> {
        self.record(TabAction::Created(url.to_string()));
        Ok(())
    }

    async fn highlight_tab(&self, tab_id: i64) -> Result<()> {
        self.record(TabAction::Highlighted(tab_id));
        Ok(())
    }

    async fn focus_window(&self, window_id: i64) -> Result<()> {
        self.record(TabAction::FocusedWindow(window_id));
        Ok(())
    }

    async fn close_popup(&self) -> Result<()> {
        self.record(TabAction::PopupClosed);
        Ok(())
    }
}

/// In-memory [`ContainerHost`] seeded with named containers and their
/// tabs; records expiry requests.
#[derive(Default)]
pub struct FakeContainers {
    containers: Vec<ContainerRef>,
    tabs: HashMap<String, Vec<TabInfo>>,
    expiry_requests: Mutex<Vec<(String, u32)>>,
}

impl FakeContainers {
    pub fn with_container(mut self, name: &str, cookie_store_id: &str, tabs: Vec<TabInfo>) -> Self {
        self.containers.push(ContainerRef {
            cookie_store_id: cookie_store_id.to_string(),
            name: name.to_string(),
        });
        self.tabs.insert(cookie_store_id.to_string(), tabs);
        self
    }

    pub fn expiry_requests(&self) -> Vec<(String, u32)> {
        self.expiry_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContainerHost for FakeContainers {
    async fn find_containers_by_name(&self, name: &str) -> Result<Vec<ContainerRef>> {
        Ok(self.containers.iter().filter(|c| c.name == name).cloned().collect())
    }

    async fn tabs_in_container(&self, cookie_store_id: &str) -> Result<Vec<TabInfo>> {
        Ok(self.tabs.get(cookie_store_id).cloned().unwrap_or_default())
    }

    async fn request_expiry(&self, cookie_store_id: &str, minutes: u32) -> Result<()> {
        self.expiry_requests.lock().unwrap().push((cookie_store_id.to_string(), minutes));
        Ok(())
    }
}
