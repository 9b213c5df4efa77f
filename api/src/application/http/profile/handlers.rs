pub mod get_profile;
pub mod update_goals;
