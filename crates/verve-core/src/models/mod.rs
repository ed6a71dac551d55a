pub mod profile;
pub mod tip;
