//! End-to-end pipeline tests: command in, persisted artifacts out.

use cine_models::{CameraAngle, MovementType, SceneType};
use cine_simulation::{look_at_target, position_at_progress};
use cine_store::{DocumentStore, NotificationLevel, ShotPlanStore, SimulationDataService, StoreConfig};

fn immediate_store(snapshot: Option<std::path::PathBuf>) -> ShotPlanStore {
    let mut config = StoreConfig::immediate();
    config.snapshot_path = snapshot;
    ShotPlanStore::new(config)
}

#[tokio::test]
async fn command_to_artifacts() {
    let store = immediate_store(None);
    let plan = store
        .execute_command("exterior rainy street, follow actor with 35mm lens, low angle, noir mood")
        .await
        .unwrap();

    assert_eq!(plan.scene_type, SceneType::Exterior);
    assert_eq!(plan.camera.angle, CameraAngle::Low);
    assert_eq!(plan.camera.movement, "Follow/Tracking");
    assert_eq!(plan.mood, "Noir");

    // Low angle and tracking movement suppress their suggestions, leaving
    // reverse shot, drone, lighting and lens alternatives.
    assert_eq!(store.recommendations().await.len(), 4);

    let service = SimulationDataService::new(DocumentStore::in_memory());
    let (path, composition, simulation) = service.load_all(&plan).await;

    assert_eq!(path.movement_type, MovementType::Tracking);
    assert_eq!(path.path_points.len(), 21);
    let start = position_at_progress(&path, 0.0);
    assert_eq!(start, path.start_position);
    assert_eq!(look_at_target(&path), cine_models::Vec3::new(0.0, 1.0, 0.0));

    assert!(composition.leading_lines_enabled);
    assert_eq!(simulation.environment_type, cine_models::EnvironmentType::Street);
}

#[tokio::test]
async fn artifacts_survive_service_restart() {
    let dir = tempfile::tempdir().unwrap();
    let docs_path = dir.path().join("simulation.json");

    let store = immediate_store(None);
    let plan = store.execute_command("slow crane up city reveal").await.unwrap();

    {
        let documents = DocumentStore::at_path(&docs_path);
        let service = SimulationDataService::new(documents);
        let mut path = service.load_camera_path(&plan).await;
        path.duration = 12.0;
        service.save_camera_path(&path).await.unwrap();
    }

    let documents = DocumentStore::at_path(&docs_path);
    documents.load().await.unwrap();
    let service = SimulationDataService::new(documents);
    let restored = service.load_camera_path(&plan).await;
    assert_eq!(restored.movement_type, MovementType::Crane);
    assert_eq!(restored.duration, 12.0);
}

#[tokio::test]
async fn store_lifecycle_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("store.json");

    let store = immediate_store(Some(snapshot.clone()));
    store.hydrate().await.unwrap();
    let plan = store.execute_command("interior dialogue scene").await.unwrap();
    store.flush().await.unwrap();

    let reopened = immediate_store(Some(snapshot.clone()));
    reopened.hydrate().await.unwrap();
    let plans = reopened.shot_plans().await;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, plan.id);
    assert_eq!(plans[0].command, "interior dialogue scene");

    // Deleting the plan cascades into history, and flushing persists that.
    reopened.delete_shot_plan(&plan.id).await.unwrap();
    assert!(reopened.command_history().await.is_empty());
    reopened.flush().await.unwrap();

    let emptied = immediate_store(Some(snapshot));
    emptied.hydrate().await.unwrap();
    assert!(emptied.shot_plans().await.is_empty());
}

#[tokio::test]
async fn error_notifications_surface() {
    let store = immediate_store(None);
    let err = store.execute_command("").await.unwrap_err();
    assert_eq!(err.to_string(), "Command is empty");

    store.notify("Failed to save camera path", NotificationLevel::Error).await;
    let notes = store.notifications().await;
    assert_eq!(notes[0].level, NotificationLevel::Error);
}
