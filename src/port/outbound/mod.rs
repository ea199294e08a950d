//! Outbound ports: collaborators the poll loop calls into.

pub mod notifier;
pub mod status;
