//! Navigation orchestrator
//!
//! Ties the stores, resolver and URL builder together: resolves which
//! user actually opens the profile, builds the destination URL, and
//! either reuses an existing isolated container or navigates a tab.

use std::sync::Arc;

use tracing::{debug, error};

use rolehop_domain::{ApplicationProfile, Result, Settings, User};

use crate::aggregate::find_user_by_profile_id;
use crate::navigation::label::build_session_label;
use crate::navigation::ports::{ContainerHost, TabController};
use crate::navigation::url::build_console_url;
use crate::settings::SettingsStore;

/// Orchestrates one navigation action from the popup.
pub struct NavigationService {
    tabs: Arc<dyn TabController>,
    containers: Option<Arc<dyn ContainerHost>>,
    settings_store: SettingsStore,
}

impl NavigationService {
    pub fn new(tabs: Arc<dyn TabController>, settings_store: SettingsStore) -> Self {
        Self { tabs, containers: None, settings_store }
    }

    /// Attach the container collaborator on the platform that has one.
    pub fn with_container_host(mut self, containers: Arc<dyn ContainerHost>) -> Self {
        self.containers = Some(containers);
        self
    }

    /// Open `profile` as `user`.
    ///
    /// When `show_all_profiles` is on, the chosen profile may belong to a
    /// different user; the owning user is re-resolved from `all_users`
    /// (most recently active owner wins). Container reuse, when enabled
    /// and matched, highlights the existing session's tabs instead of
    /// opening anything.
    pub async fn navigate(
        &self,
        profile: &ApplicationProfile,
        user: &User,
        all_users: &[User],
        settings: &Settings,
    ) -> Result<()> {
        let profile_id = profile.profile.id.as_str();
        let user = if settings.show_all_profiles && !user.owns_profile(profile_id) {
            find_user_by_profile_id(all_users, profile_id).unwrap_or(user)
        } else {
            user
        };

        if self.reuse_container(profile, user, settings).await? {
            debug!(profile_id, "reused existing container session");
            self.record_last_used(user, profile, settings).await;
            return self.tabs.close_popup().await;
        }

        let current_tab = self.tabs.active_tab().await?;
        let current_url = current_tab.as_ref().and_then(|tab| tab.url.as_deref());
        let url = build_console_url(user, profile, current_url)?;

        match current_tab {
            Some(tab) if !settings.open_in_new_tab => self.tabs.update_tab(tab.id, &url).await?,
            _ => self.tabs.create_tab(&url).await?,
        }
        self.record_last_used(user, profile, settings).await;
        self.tabs.close_popup().await
    }

    /// Focus and highlight an existing container session whose name
    /// matches the computed session label. Returns whether one was found.
    async fn reuse_container(
        &self,
        profile: &ApplicationProfile,
        user: &User,
        settings: &Settings,
    ) -> Result<bool> {
        let Some(host) = &self.containers else {
            return Ok(false);
        };
        if !settings.containers.use_containers || !settings.containers.reuse_containers {
            return Ok(false);
        }

        let label = build_session_label(
            user,
            profile,
            &user.custom.session_label_sso,
            &profile.profile.name,
        );
        let matches = host.find_containers_by_name(&label).await?;
        if matches.is_empty() {
            return Ok(false);
        }

        for container in &matches {
            for tab in host.tabs_in_container(&container.cookie_store_id).await? {
                self.tabs.highlight_tab(tab.id).await?;
                self.tabs.focus_window(tab.window_id).await?;
            }
            if let Some(minutes) = settings.containers.expire_minutes {
                host.request_expiry(&container.cookie_store_id, minutes).await?;
            }
        }
        Ok(true)
    }

    /// Remember the selection for next time. Best effort: two navigations
    /// racing here is last-write-wins, and a failed write must not undo a
    /// navigation that already happened.
    async fn record_last_used(&self, user: &User, profile: &ApplicationProfile, settings: &Settings) {
        let mut updated = settings.clone();
        updated.last_user_id = user.user_id.clone();
        updated.last_profile_id = profile.profile.id.clone();
        if let Err(err) = self.settings_store.save(&updated).await {
            error!(error = %err, "failed to record last-used selection");
        }
    }
}
