pub mod config;
pub mod goal;
pub mod health;
pub mod recommendation;
pub mod reminder;
pub mod symptom;
pub mod water;

pub use health::{HealthRecord, HealthSnapshot};
pub use symptom::Symptom;
