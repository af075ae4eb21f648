pub mod completions;
pub mod config;
pub mod dashboard;
pub mod goal;
pub mod graph;
pub mod init;
pub mod menu;
pub mod recommend;
pub mod record;
pub mod reminder;
pub mod symptom;
pub mod water;
