//! Domains module containing business logic organized by bounded contexts.
//!
//! - **auth**: credential selection and bearer-token management
//! - **tools**: the operation catalog and the generic dispatcher
//! - **youtube**: the outbound REST client

pub mod auth;
pub mod tools;
pub mod youtube;
