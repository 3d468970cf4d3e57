pub mod alert;
pub mod chat;
pub mod home;
pub mod login;
pub mod profile;
pub mod quiz;
pub mod register;
pub mod teacher;
