use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::entities::{HealthGoals, UserProfile},
};

pub trait ProfileService: Send + Sync {
    /// Returns the stored profile, or the defaults when none was ever saved.
    fn get_profile(&self) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn save_goals(
        &self,
        goals: HealthGoals,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}
