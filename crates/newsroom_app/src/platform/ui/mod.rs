pub mod constants;
pub mod document;
pub mod events;
pub mod layout;
pub mod render;
