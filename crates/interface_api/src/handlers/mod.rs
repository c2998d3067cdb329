//! Request handlers, one module per registry

pub mod health;
pub mod policy;
pub mod oracle;
pub mod claims;
