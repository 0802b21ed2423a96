pub mod core;
pub mod head;
