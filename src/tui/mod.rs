pub mod app;
pub mod controller;
pub mod logger;
pub mod ui;
