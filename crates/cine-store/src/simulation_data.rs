//! Lazily materialized simulation artifacts.
//!
//! Camera paths, compositions and scene simulations live in the document
//! store, one record per shot plan. Loads fall back to the pure generators
//! when no record exists (or when a persisted record fails to decode), so a
//! caller always gets an artifact; saves upsert keyed by the shot plan id.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use cine_models::{CameraPath, SceneComposition, SceneSimulation, ShotPlan, ShotPlanId};
use cine_simulation::{analyze, default_simulation, generate_path};

use crate::document_store::DocumentStore;
use crate::error::StoreResult;

const CAMERA_PATHS: &str = "camera_paths";
const SCENE_COMPOSITIONS: &str = "scene_compositions";
const SCENE_SIMULATIONS: &str = "scene_simulations";

/// Per-shot-plan persistence for derived artifacts.
#[derive(Clone)]
pub struct SimulationDataService {
    documents: DocumentStore,
}

impl SimulationDataService {
    pub fn new(documents: DocumentStore) -> Self {
        Self { documents }
    }

    /// Persisted camera path for the plan, or a freshly generated one.
    pub async fn load_camera_path(&self, plan: &ShotPlan) -> CameraPath {
        match self.fetch(CAMERA_PATHS, &plan.id).await {
            Some(path) => path,
            None => generate_path(plan),
        }
    }

    /// Persisted composition for the plan, or a freshly analyzed one.
    pub async fn load_composition(&self, plan: &ShotPlan) -> SceneComposition {
        match self.fetch(SCENE_COMPOSITIONS, &plan.id).await {
            Some(composition) => composition,
            None => analyze(plan),
        }
    }

    /// Persisted scene simulation for the plan, or the default setup.
    pub async fn load_simulation(&self, plan: &ShotPlan) -> SceneSimulation {
        match self.fetch(SCENE_SIMULATIONS, &plan.id).await {
            Some(simulation) => simulation,
            None => default_simulation(plan),
        }
    }

    /// Load all three artifacts; the loads race in parallel with no
    /// ordering dependency between them.
    pub async fn load_all(
        &self,
        plan: &ShotPlan,
    ) -> (CameraPath, SceneComposition, SceneSimulation) {
        tokio::join!(
            self.load_camera_path(plan),
            self.load_composition(plan),
            self.load_simulation(plan),
        )
    }

    pub async fn save_camera_path(&self, path: &CameraPath) -> StoreResult<()> {
        self.save(CAMERA_PATHS, &path.shot_plan_id, path).await
    }

    pub async fn save_composition(&self, composition: &SceneComposition) -> StoreResult<()> {
        self.save(SCENE_COMPOSITIONS, &composition.shot_plan_id, composition)
            .await
    }

    pub async fn save_simulation(&self, simulation: &SceneSimulation) -> StoreResult<()> {
        self.save(SCENE_SIMULATIONS, &simulation.shot_plan_id, simulation)
            .await
    }

    /// Regenerate the camera path from the plan, ignoring persistence.
    pub fn regenerate_camera_path(&self, plan: &ShotPlan) -> CameraPath {
        generate_path(plan)
    }

    /// Regenerate the composition from the plan, ignoring persistence.
    pub fn regenerate_composition(&self, plan: &ShotPlan) -> SceneComposition {
        analyze(plan)
    }

    /// Drop all persisted artifacts for a plan.
    pub async fn delete_for_shot_plan(&self, id: &ShotPlanId) -> StoreResult<()> {
        for collection in [CAMERA_PATHS, SCENE_COMPOSITIONS, SCENE_SIMULATIONS] {
            self.documents.delete(collection, id.as_str()).await;
        }
        self.documents.flush().await
    }

    async fn fetch<T: DeserializeOwned>(&self, collection: &str, id: &ShotPlanId) -> Option<T> {
        let value = self.documents.get(collection, id.as_str()).await?;
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                // A record we cannot decode is the same as no record.
                warn!(collection, shot_plan_id = %id, "regenerating malformed record: {err}");
                None
            }
        }
    }

    async fn save<T: Serialize>(
        &self,
        collection: &str,
        id: &ShotPlanId,
        record: &T,
    ) -> StoreResult<()> {
        let value = serde_json::to_value(record)?;
        self.documents.upsert(collection, id.as_str(), value).await;
        self.documents.flush().await?;
        info!(collection, shot_plan_id = %id, "artifact saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_interpreter::interpret;
    use serde_json::json;

    fn service() -> SimulationDataService {
        SimulationDataService::new(DocumentStore::in_memory())
    }

    #[tokio::test]
    async fn test_load_generates_when_absent() {
        let service = service();
        let plan = interpret("orbit the statue slowly");

        let path = service.load_camera_path(&plan).await;
        assert_eq!(path.shot_plan_id, plan.id);
        assert_eq!(path.path_points.len(), 21);

        let composition = service.load_composition(&plan).await;
        assert_eq!(composition.shot_plan_id, plan.id);
        assert!(composition.rule_of_thirds_enabled);
    }

    #[tokio::test]
    async fn test_saved_artifact_wins_over_generation() {
        let service = service();
        let plan = interpret("dolly in");

        let mut path = service.load_camera_path(&plan).await;
        path.duration = 42.0;
        service.save_camera_path(&path).await.unwrap();

        let loaded = service.load_camera_path(&plan).await;
        assert_eq!(loaded.duration, 42.0);
    }

    #[tokio::test]
    async fn test_malformed_record_regenerates() {
        let documents = DocumentStore::in_memory();
        let service = SimulationDataService::new(documents.clone());
        let plan = interpret("dolly in");

        documents
            .upsert("camera_paths", plan.id.as_str(), json!({"movement_type": "warp"}))
            .await;

        let path = service.load_camera_path(&plan).await;
        // The garbage record was ignored in favor of a fresh generation.
        assert_eq!(path.path_points.len(), 21);
    }

    #[tokio::test]
    async fn test_saves_are_independent_per_artifact() {
        let service = service();
        let plan = interpret("crane up over the plaza");

        let (path, composition, simulation) = service.load_all(&plan).await;
        let (a, b, c) = tokio::join!(
            service.save_camera_path(&path),
            service.save_composition(&composition),
            service.save_simulation(&simulation),
        );
        a.unwrap();
        b.unwrap();
        c.unwrap();

        let (path2, composition2, simulation2) = service.load_all(&plan).await;
        assert_eq!(path, path2);
        assert_eq!(composition, composition2);
        assert_eq!(simulation, simulation2);
    }

    #[tokio::test]
    async fn test_delete_for_shot_plan() {
        let service = service();
        let plan = interpret("dolly in");

        let mut path = service.load_camera_path(&plan).await;
        path.duration = 42.0;
        service.save_camera_path(&path).await.unwrap();
        service.delete_for_shot_plan(&plan.id).await.unwrap();

        // Back to generating: the tweaked duration is gone.
        let fresh = service.load_camera_path(&plan).await;
        assert_eq!(fresh.duration, 812.0);
    }

    #[tokio::test]
    async fn test_regenerate_bypasses_persistence() {
        let service = service();
        let plan = interpret("dolly in");

        let mut path = service.load_camera_path(&plan).await;
        path.duration = 42.0;
        service.save_camera_path(&path).await.unwrap();

        assert_eq!(service.regenerate_camera_path(&plan).duration, 812.0);
    }
}
