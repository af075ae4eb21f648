//! Static rule tables. Order within each table is the order entries appear
//! in the output.

pub mod emotional;
pub mod exercise;
pub mod food;
pub mod menu;
