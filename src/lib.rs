pub mod api;
pub mod app;
pub mod chat;
pub mod config;
pub mod data;
pub mod model;
pub mod quiz;
pub mod roster;
pub mod storage;
pub mod ui;
pub mod view_models;

pub use app::EduApp;
