pub mod fields;
pub mod show;
