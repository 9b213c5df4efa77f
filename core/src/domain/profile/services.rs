use tracing::{error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    product_analysis::ports::{LLMClient, ProductSource},
    profile::{
        entities::{HealthGoals, UserProfile},
        ports::ProfileService,
    },
    storage::ports::ClientStateRepository,
};

impl<PS, LLM, ST> ProfileService for Service<PS, LLM, ST>
where
    PS: ProductSource,
    LLM: LLMClient,
    ST: ClientStateRepository,
{
    async fn get_profile(&self) -> Result<UserProfile, CoreError> {
        let state = self.state.read().await;
        Ok(state.profile.clone().unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn save_goals(&self, goals: HealthGoals) -> Result<UserProfile, CoreError> {
        let mut state = self.state.write().await;
        let profile = state.profile.get_or_insert_with(UserProfile::default);
        profile.goals = goals;
        let profile = profile.clone();

        if let Err(e) = self.state_repository.save_profile(&profile).await {
            error!("Failed to persist user profile: {}", e);
        }

        info!("Health goals updated");
        Ok(profile)
    }
}
