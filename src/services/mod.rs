pub mod agent;
pub mod inquiry;
pub mod notifier;
pub mod presenter;
