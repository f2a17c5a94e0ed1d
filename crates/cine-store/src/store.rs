//! The shot plan store.
//!
//! An explicit state handle (no global singleton): construct it, `hydrate`
//! from the snapshot file, pass clones of the handle to consumers, and
//! `flush` on teardown. Shot plans are ordered newest-first; command history
//! is capped and cascade-cleaned on plan deletion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};

use cine_interpreter::{interpret, recommend};
use cine_models::{CommandHistoryEntry, Recommendation, ShotPlan, ShotPlanId};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::notifications::{Notification, NotificationLevel};

#[derive(Default)]
struct StoreState {
    /// Newest first
    shot_plans: Vec<ShotPlan>,
    current: Option<ShotPlanId>,
    /// Newest first, capped at `history_limit`
    history: Vec<CommandHistoryEntry>,
    /// Recommendations for the most recent plan
    recommendations: Vec<Recommendation>,
    notifications: Vec<Notification>,
}

/// Persisted portion of the store state. Notifications, recommendations and
/// the current-plan pointer are transient and rebuilt at runtime.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    shot_plans: Vec<ShotPlan>,
    command_history: Vec<CommandHistoryEntry>,
}

/// Shared handle to the shot plan collection.
#[derive(Clone)]
pub struct ShotPlanStore {
    config: StoreConfig,
    state: Arc<RwLock<StoreState>>,
}

impl ShotPlanStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    /// Interpret a command into a shot plan and record it.
    ///
    /// Sleeps the configured processing delay first. Concurrent invocations
    /// run independently; each produces its own plan and history entry, and
    /// neither overwrites the other.
    pub async fn execute_command(&self, command: &str) -> StoreResult<ShotPlan> {
        if command.trim().is_empty() {
            return Err(StoreError::EmptyCommand);
        }

        tokio::time::sleep(self.config.processing_delay).await;

        let plan = interpret(command);
        let recommendations = recommend(&plan);
        let entry = CommandHistoryEntry::new(command, Some(plan.id.clone()));

        {
            let mut state = self.state.write().await;
            state.shot_plans.insert(0, plan.clone());
            state.current = Some(plan.id.clone());
            state.history.insert(0, entry);
            state.history.truncate(self.config.history_limit);
            state.recommendations = recommendations;
        }

        info!(shot_plan_id = %plan.id, shot_type = %plan.shot_type, "shot plan generated");
        self.notify("Shot plan generated successfully!", NotificationLevel::Success)
            .await;
        Ok(plan)
    }

    /// All plans, newest first.
    pub async fn shot_plans(&self) -> Vec<ShotPlan> {
        self.state.read().await.shot_plans.clone()
    }

    pub async fn get_shot_plan(&self, id: &ShotPlanId) -> Option<ShotPlan> {
        self.state
            .read()
            .await
            .shot_plans
            .iter()
            .find(|plan| &plan.id == id)
            .cloned()
    }

    /// The plan produced by the most recent command, if it still exists.
    pub async fn current_shot_plan(&self) -> Option<ShotPlan> {
        let state = self.state.read().await;
        let current = state.current.as_ref()?;
        state.shot_plans.iter().find(|plan| &plan.id == current).cloned()
    }

    pub async fn command_history(&self) -> Vec<CommandHistoryEntry> {
        self.state.read().await.history.clone()
    }

    /// Recommendations generated alongside the most recent plan.
    pub async fn recommendations(&self) -> Vec<Recommendation> {
        self.state.read().await.recommendations.clone()
    }

    /// Delete a plan and cascade-remove history entries referencing it.
    pub async fn delete_shot_plan(&self, id: &ShotPlanId) -> StoreResult<()> {
        {
            let mut state = self.state.write().await;
            let before = state.shot_plans.len();
            state.shot_plans.retain(|plan| &plan.id != id);
            if state.shot_plans.len() == before {
                return Err(StoreError::not_found(id.as_str()));
            }
            state
                .history
                .retain(|entry| entry.shot_plan_id.as_ref() != Some(id));
        }
        info!(shot_plan_id = %id, "shot plan deleted");
        self.notify("Shot plan deleted", NotificationLevel::Info).await;
        Ok(())
    }

    pub async fn clear_history(&self) {
        self.state.write().await.history.clear();
        self.notify("History cleared", NotificationLevel::Info).await;
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.state.read().await.notifications.clone()
    }

    pub async fn remove_notification(&self, id: &str) {
        self.state
            .write()
            .await
            .notifications
            .retain(|n| n.id != id);
    }

    /// Push a notification and schedule its auto-expiry.
    pub async fn notify(&self, message: impl Into<String>, level: NotificationLevel) {
        let notification = Notification::new(message, level);
        let id = notification.id.clone();
        self.state.write().await.notifications.push(notification);

        let state = Arc::clone(&self.state);
        let ttl = self.config.notification_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            state.write().await.notifications.retain(|n| n.id != id);
        });
    }

    /// Load persisted plans and history from the snapshot file.
    ///
    /// A missing file is a fresh start. A corrupt snapshot is logged and
    /// surfaced as an error notification, then treated as empty so the
    /// store stays usable.
    pub async fn hydrate(&self) -> StoreResult<()> {
        let Some(path) = self.config.snapshot_path.clone() else {
            return Ok(());
        };

        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice::<Snapshot>(&raw) {
            Ok(snapshot) => {
                let mut state = self.state.write().await;
                state.shot_plans = snapshot.shot_plans;
                state.history = snapshot.command_history;
                state.history.truncate(self.config.history_limit);
                info!(
                    plans = state.shot_plans.len(),
                    history = state.history.len(),
                    "store hydrated"
                );
                Ok(())
            }
            Err(err) => {
                warn!(path = %path.display(), "discarding corrupt snapshot: {err}");
                self.notify("Failed to load saved shot plans", NotificationLevel::Error)
                    .await;
                Ok(())
            }
        }
    }

    /// Write the persisted portion of the state to the snapshot file.
    pub async fn flush(&self) -> StoreResult<()> {
        let Some(path) = self.config.snapshot_path.clone() else {
            return Ok(());
        };

        let snapshot = {
            let state = self.state.read().await;
            Snapshot {
                shot_plans: state.shot_plans.clone(),
                command_history: state.history.clone(),
            }
        };
        let raw = serde_json::to_vec_pretty(&snapshot)?;
        tokio::fs::write(&path, raw).await?;
        info!(path = %path.display(), plans = snapshot.shot_plans.len(), "store flushed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> ShotPlanStore {
        ShotPlanStore::new(StoreConfig::immediate())
    }

    #[tokio::test]
    async fn test_execute_command_populates_state() {
        let store = test_store();
        let plan = store.execute_command("exterior wide shot").await.unwrap();

        let plans = store.shot_plans().await;
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, plan.id);

        let history = store.command_history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].shot_plan_id.as_ref(), Some(&plan.id));

        assert_eq!(store.current_shot_plan().await.unwrap().id, plan.id);
        assert!(!store.recommendations().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_command_rejected() {
        let store = test_store();
        assert!(matches!(
            store.execute_command("   ").await,
            Err(StoreError::EmptyCommand)
        ));
        assert!(store.shot_plans().await.is_empty());
    }

    #[tokio::test]
    async fn test_newest_first_ordering() {
        let store = test_store();
        store.execute_command("first command").await.unwrap();
        let second = store.execute_command("second command").await.unwrap();

        let plans = store.shot_plans().await;
        assert_eq!(plans[0].id, second.id);
        assert_eq!(plans[1].command, "first command");
    }

    #[tokio::test]
    async fn test_history_cap_evicts_oldest() {
        let mut config = StoreConfig::immediate();
        config.history_limit = 3;
        let store = ShotPlanStore::new(config);

        for i in 0..5 {
            store.execute_command(&format!("command {i}")).await.unwrap();
        }

        let history = store.command_history().await;
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].command, "command 4");
        assert_eq!(history[2].command, "command 2");
        // Plans themselves are not capped.
        assert_eq!(store.shot_plans().await.len(), 5);
    }

    #[tokio::test]
    async fn test_delete_cascades_history() {
        let store = test_store();
        let keep = store.execute_command("keep this").await.unwrap();
        let drop = store.execute_command("drop this").await.unwrap();

        store.delete_shot_plan(&drop.id).await.unwrap();

        assert!(store.get_shot_plan(&drop.id).await.is_none());
        assert!(store.get_shot_plan(&keep.id).await.is_some());
        let history = store.command_history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].shot_plan_id.as_ref(), Some(&keep.id));

        // The deleted plan was current; the pointer now resolves to nothing.
        assert!(store.current_shot_plan().await.is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_plan() {
        let store = test_store();
        let missing = ShotPlanId::from_string("missing");
        assert!(matches!(
            store.delete_shot_plan(&missing).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_clear_history_keeps_plans() {
        let store = test_store();
        store.execute_command("a command").await.unwrap();
        store.clear_history().await;
        assert!(store.command_history().await.is_empty());
        assert_eq!(store.shot_plans().await.len(), 1);
    }

    #[tokio::test]
    async fn test_notifications_expire() {
        let store = test_store();
        store.notify("hello", NotificationLevel::Info).await;
        assert_eq!(store.notifications().await.len(), 1);

        // TTL in the immediate config is 50ms.
        tokio::time::sleep(std::time::Duration::from_millis(150)).await;
        assert!(store.notifications().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_commands_both_recorded() {
        let store = test_store();
        let (a, b) = tokio::join!(
            store.execute_command("exterior wide"),
            store.execute_command("interior close up"),
        );
        a.unwrap();
        b.unwrap();
        assert_eq!(store.shot_plans().await.len(), 2);
        assert_eq!(store.command_history().await.len(), 2);
    }

    #[tokio::test]
    async fn test_hydrate_flush_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut config = StoreConfig::immediate();
        config.snapshot_path = Some(path.clone());

        let store = ShotPlanStore::new(config.clone());
        store.execute_command("exterior wide shot").await.unwrap();
        store.flush().await.unwrap();

        let restored = ShotPlanStore::new(config);
        restored.hydrate().await.unwrap();
        assert_eq!(restored.shot_plans().await.len(), 1);
        assert_eq!(restored.command_history().await.len(), 1);
        // Transient state does not survive the roundtrip.
        assert!(restored.recommendations().await.is_empty());
        assert!(restored.current_shot_plan().await.is_none());
    }

    #[tokio::test]
    async fn test_hydrate_missing_file_is_fresh_start() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StoreConfig::immediate();
        config.snapshot_path = Some(dir.path().join("absent.json"));

        let store = ShotPlanStore::new(config);
        store.hydrate().await.unwrap();
        assert!(store.shot_plans().await.is_empty());
    }

    #[tokio::test]
    async fn test_hydrate_corrupt_snapshot_recovers_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        tokio::fs::write(&path, b"not json").await.unwrap();

        let mut config = StoreConfig::immediate();
        config.snapshot_path = Some(path);

        let store = ShotPlanStore::new(config);
        store.hydrate().await.unwrap();
        assert!(store.shot_plans().await.is_empty());
        // The failure surfaced as an error notification.
        let notes = store.notifications().await;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, NotificationLevel::Error);
    }
}
