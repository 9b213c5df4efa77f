use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, product_analysis::entities::ProductAnalysis,
    profile::entities::UserProfile,
};

/// Durable key-value style storage for the scan history and the user profile.
#[cfg_attr(test, mockall::automock)]
pub trait ClientStateRepository: Send + Sync {
    /// Returns an empty list when nothing has been stored yet.
    fn load_history(
        &self,
    ) -> impl Future<Output = Result<Vec<ProductAnalysis>, CoreError>> + Send;

    /// Replaces the stored history with `entries`, newest first.
    fn save_history(
        &self,
        entries: &[ProductAnalysis],
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn load_profile(&self) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn save_profile(
        &self,
        profile: &UserProfile,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
