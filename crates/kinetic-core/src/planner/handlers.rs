//! Planner operations returning display wrappers.

use log::warn;

use super::Planner;
use crate::{
    display::{DeleteResult, GenerateResult, PlanSummaries, ThemeResult},
    error::{KineticError, Result},
    models::{Plan, PlanSummary},
    params::{DeletePlan, GeneratePlan, Id, ListPlans},
    theme::Theme,
};

impl Planner {
    /// Lists stored plans as summaries, newest first, honouring `limit`.
    ///
    /// # Errors
    ///
    /// Returns `KineticError::InvalidInput` for a limit of zero.
    pub async fn list_plans_summary(&self, params: &ListPlans) -> Result<PlanSummaries> {
        if params.limit == Some(0) {
            return Err(KineticError::invalid_input("limit").with_reason("must be at least 1"));
        }

        let plans = self.list_plans().await?;
        let limit = params.limit.unwrap_or(usize::MAX);

        Ok(PlanSummaries(
            plans.iter().take(limit).map(PlanSummary::from).collect(),
        ))
    }

    /// Retrieves a plan, treating an unknown ID as an error.
    pub async fn show_plan(&self, params: &Id) -> Result<Plan> {
        self.get_plan(params)
            .await?
            .ok_or_else(|| KineticError::PlanNotFound {
                id: params.id.clone(),
            })
    }

    /// Generates a plan and saves it when `save` is set.
    pub async fn generate_plan_result(
        &self,
        params: &GeneratePlan,
        save: bool,
    ) -> Result<GenerateResult> {
        let plan = self.generate_plan(params);
        if save {
            self.save_plan(&plan).await?;
        }
        Ok(GenerateResult::new(plan, save))
    }

    /// Regenerates a stored plan from its original inputs.
    ///
    /// The stored plan is left as is; with `save` the new one is prepended.
    pub async fn continue_plan(&self, params: &Id, save: bool) -> Result<GenerateResult> {
        let plan = self.show_plan(params).await?;
        self.generate_plan_result(&GeneratePlan::from_plan(&plan), save)
            .await
    }

    /// Permanently deletes a plan after explicit confirmation.
    ///
    /// # Errors
    ///
    /// Returns `KineticError::InvalidInput` without `confirmed` and
    /// `KineticError::PlanNotFound` for an unknown ID.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<DeleteResult> {
        if !params.confirmed {
            return Err(KineticError::invalid_input("confirmed")
                .with_reason("deleting a plan cannot be undone; confirm to proceed"));
        }

        let plan = self
            .show_plan(&Id {
                id: params.id.clone(),
            })
            .await?;

        if !self.remove_plan(&plan.id).await? {
            warn!("Plan {} vanished before it could be deleted", plan.id);
            return Err(KineticError::PlanNotFound { id: plan.id });
        }

        Ok(DeleteResult::from(&plan))
    }

    pub async fn theme_result(&self) -> Result<ThemeResult> {
        Ok(ThemeResult::unchanged(self.theme().await?))
    }

    pub async fn set_theme_result(&self, theme: Theme) -> Result<ThemeResult> {
        let previous = self.theme().await?;
        self.set_theme(theme).await?;

        Ok(if previous == theme {
            ThemeResult::unchanged(theme)
        } else {
            ThemeResult::changed(theme)
        })
    }

    pub async fn toggle_theme_result(&self) -> Result<ThemeResult> {
        Ok(ThemeResult::changed(self.toggle_theme().await?))
    }
}
