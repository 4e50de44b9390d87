//! Messaging service endpoints.

pub mod publish;
