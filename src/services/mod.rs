pub mod assessment;
pub mod badges;
pub mod companion;
pub mod metrics;
pub mod mood;
pub mod streak;
