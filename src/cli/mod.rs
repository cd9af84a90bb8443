pub mod expense;
pub mod list;
pub mod setup;
pub mod ui;
