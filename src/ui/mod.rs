pub mod events;
pub mod listeners;
pub mod setup;
