//! Plan storage operations for the Planner.

use jiff::Timestamp;

use super::Planner;
use crate::{
    error::Result,
    generator,
    models::Plan,
    params::{GeneratePlan, Id},
    store::PlanStore,
};

impl Planner {
    /// Generates a plan without persisting it.
    pub fn generate_plan(&self, params: &GeneratePlan) -> Plan {
        generator::generate_plan(params)
    }

    /// Prepends `plan` to the stored collection.
    pub async fn save_plan(&self, plan: &Plan) -> Result<()> {
        let plan = plan.clone();
        self.with_storage(move |storage| PlanStore::new(storage).save(&plan))
            .await
    }

    /// Every stored plan, newest first.
    pub async fn list_plans(&self) -> Result<Vec<Plan>> {
        self.with_storage(|storage| PlanStore::new(storage).list())
            .await
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let id = params.id.clone();
        self.with_storage(move |storage| PlanStore::new(storage).find_by_id(&id))
            .await
    }

    /// Removes a plan by ID without any confirmation check.
    pub(crate) async fn remove_plan(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        self.with_storage(move |storage| PlanStore::new(storage).delete_by_id(&id))
            .await
    }

    /// Writes the demo plans when nothing is stored yet.
    pub async fn seed_demo_plans(&self) -> Result<bool> {
        let now = Timestamp::now();
        self.with_storage(move |storage| PlanStore::new(storage).seed_if_empty(now))
            .await
    }
}
