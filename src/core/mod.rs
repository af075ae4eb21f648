pub mod bmi;
pub mod catalog;
pub mod context;
pub mod dashboard;
pub mod goal;
pub mod matcher;
pub mod menu;
pub mod progress;
pub mod recommend;
pub mod record;
pub mod reminder;
pub mod rules;
pub mod score;
pub mod symptoms;
pub mod water;
