//! Durable, newest-first collection of workout plans.
//!
//! The whole collection lives as one JSON array under [`PLANS_KEY`]. Every
//! mutation is a full read-modify-write of that blob. A blob that is not a
//! JSON array is logged and treated as an empty collection; the next write
//! replaces it. Inside an array, each record decodes on its own: a record
//! that does not fit [`Plan`] is logged, hidden from reads, and written back
//! verbatim so no write ever drops it.

use jiff::{SignedDuration, Timestamp};
use log::{debug, error, info, warn};
use serde_json::Value;

use crate::{
    error::Result,
    generator::generate_plan_at,
    models::{Level, Plan},
    params::GeneratePlan,
    storage::KeyValueStorage,
};

/// Storage key holding the serialized plan list.
pub const PLANS_KEY: &str = "ks_plans_v1";

/// Plan store over any key-value backend.
pub struct PlanStore<S> {
    storage: S,
}

/// Decoded contents of the plan blob.
#[derive(Debug, Default)]
struct Records {
    plans: Vec<Plan>,
    unreadable: Vec<Value>,
}

impl Records {
    fn is_empty(&self) -> bool {
        self.plans.is_empty() && self.unreadable.is_empty()
    }
}

impl<S: KeyValueStorage> PlanStore<S> {
    /// Creates a store over `storage`.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Consumes the store and returns the backend.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Returns every readable stored plan, newest first.
    ///
    /// A missing or malformed blob yields an empty list; only backend
    /// failures are returned as errors.
    pub fn list(&self) -> Result<Vec<Plan>> {
        Ok(self.load()?.plans)
    }

    /// Prepends `plan` to the collection.
    pub fn save(&mut self, plan: &Plan) -> Result<()> {
        let mut records = self.load()?;
        records.plans.insert(0, plan.clone());
        self.write(&records)?;

        info!("Saved plan {} ({})", plan.id, plan.name);
        Ok(())
    }

    /// Looks up a plan by id.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Plan>> {
        Ok(self.list()?.into_iter().find(|plan| plan.id == id))
    }

    /// Removes the plan with `id` and returns whether one was removed.
    ///
    /// Confirming the deletion with the user is the caller's responsibility.
    pub fn delete_by_id(&mut self, id: &str) -> Result<bool> {
        let mut records = self.load()?;
        let before = records.plans.len();
        records.plans.retain(|plan| plan.id != id);
        let removed = records.plans.len() != before;

        self.write(&records)?;

        if removed {
            info!("Deleted plan {id}");
        } else {
            debug!("No plan with id {id} to delete");
        }
        Ok(removed)
    }

    /// Writes the two demonstration plans when the store is empty.
    ///
    /// The demos are backdated 40 and 20 days before `now`. A stored array
    /// holding only unreadable records is not empty. Returns whether
    /// anything was written.
    pub fn seed_if_empty(&mut self, now: Timestamp) -> Result<bool> {
        if !self.load()?.is_empty() {
            return Ok(false);
        }

        let records = Records {
            plans: demo_plans(now)?,
            unreadable: Vec::new(),
        };
        self.write(&records)?;

        info!("Seeded {} demo plans", records.plans.len());
        Ok(true)
    }

    fn load(&self) -> Result<Records> {
        let Some(raw) = self.storage.get_item(PLANS_KEY)? else {
            return Ok(Records::default());
        };

        let values = match serde_json::from_str::<Option<Vec<Value>>>(&raw) {
            Ok(values) => values.unwrap_or_default(),
            Err(e) => {
                error!("Stored plan list under '{PLANS_KEY}' is unreadable, ignoring it: {e}");
                return Ok(Records::default());
            }
        };

        let mut records = Records::default();
        for value in values {
            match serde_json::from_value::<Plan>(value.clone()) {
                Ok(plan) => records.plans.push(plan),
                Err(e) => {
                    warn!("Skipping unreadable plan record under '{PLANS_KEY}': {e}");
                    records.unreadable.push(value);
                }
            }
        }
        Ok(records)
    }

    fn write(&mut self, records: &Records) -> Result<()> {
        let mut values = records
            .plans
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        values.extend(records.unreadable.iter().cloned());

        let raw = serde_json::to_string(&values)?;
        self.storage.set_item(PLANS_KEY, &raw)
    }
}

/// The demonstration plans shown on first visit.
pub fn demo_plans(now: Timestamp) -> Result<Vec<Plan>> {
    let demos = [
        (
            GeneratePlan {
                sport: "Soccer".to_string(),
                level: Level::Intermediate,
                duration_weeks: 8,
                focus: "Endurance".to_string(),
                notes: "Used by local league players — interval progressions.".to_string(),
            },
            40,
        ),
        (
            GeneratePlan {
                sport: "Running".to_string(),
                level: Level::Beginner,
                duration_weeks: 9,
                focus: "Endurance".to_string(),
                notes: "Gradual increase — great for first 10K.".to_string(),
            },
            20,
        ),
    ];

    demos
        .iter()
        .map(|(params, days_ago): &(GeneratePlan, i64)| -> Result<Plan> {
            let created_at = now.checked_sub(SignedDuration::from_hours(24 * days_ago))?;
            Ok(generate_plan_at(params, created_at))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generator::generate_plan, storage::MemoryStorage};

    fn request(sport: &str) -> GeneratePlan {
        GeneratePlan {
            sport: sport.to_string(),
            ..GeneratePlan::default()
        }
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = PlanStore::new(MemoryStorage::new());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_prepends() {
        let mut store = PlanStore::new(MemoryStorage::new());
        let first = generate_plan(&request("Rowing"));
        let second = generate_plan(&request("Cycling"));

        store.save(&first).unwrap();
        store.save(&second).unwrap();

        let plans = store.list().unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0], second);
        assert_eq!(plans[1], first);
    }

    #[test]
    fn test_find_and_delete() {
        let mut store = PlanStore::new(MemoryStorage::new());
        let plan = generate_plan(&request("Rowing"));
        store.save(&plan).unwrap();

        assert_eq!(store.find_by_id(&plan.id).unwrap(), Some(plan.clone()));
        assert_eq!(store.find_by_id("plan_missing").unwrap(), None);

        assert!(!store.delete_by_id("plan_missing").unwrap());
        assert_eq!(store.list().unwrap().len(), 1);

        assert!(store.delete_by_id(&plan.id).unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_blob_is_treated_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set_item(PLANS_KEY, "{not json").unwrap();
        let mut store = PlanStore::new(storage);

        assert!(store.list().unwrap().is_empty());

        let plan = generate_plan(&request("Rowing"));
        store.save(&plan).unwrap();
        assert_eq!(store.list().unwrap(), vec![plan]);
    }

    #[test]
    fn test_null_blob_is_empty() {
        let mut storage = MemoryStorage::new();
        storage.set_item(PLANS_KEY, "null").unwrap();
        let store = PlanStore::new(storage);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_seed_if_empty() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let mut store = PlanStore::new(MemoryStorage::new());

        assert!(store.seed_if_empty(now).unwrap());
        let plans = store.list().unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].sport, "Soccer");
        assert_eq!(plans[1].sport, "Running");
        assert!(plans[0].created_at < plans[1].created_at);
        assert_eq!(
            now.duration_since(plans[0].created_at),
            SignedDuration::from_hours(24 * 40)
        );

        assert!(!store.seed_if_empty(now).unwrap());
        assert_eq!(store.list().unwrap(), plans);
    }

    #[test]
    fn test_unreadable_records_are_kept() {
        let mut storage = MemoryStorage::new();
        storage
            .set_item(PLANS_KEY, r#"[{"id": "plan_odd", "duration": "long"}]"#)
            .unwrap();
        let mut store = PlanStore::new(storage);

        assert!(store.list().unwrap().is_empty());
        assert!(!store.seed_if_empty(Timestamp::UNIX_EPOCH).unwrap());

        let plan = generate_plan(&request("Rowing"));
        store.save(&plan).unwrap();
        assert_eq!(store.list().unwrap(), vec![plan]);

        let raw = store.into_inner().get_item(PLANS_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""id":"plan_odd""#));
    }
}
