pub mod activity_store;
pub mod seed;

pub use activity_store::{ActivityDirectory, ActivityStore, RemovalOutcome, SignupOutcome};
pub use seed::seed_activities;
