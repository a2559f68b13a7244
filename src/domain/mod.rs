//! Domain Layer
//!
//! The core of tprompts - business logic that reaches the outside world only
//! through ports.
//!
//! ## Structure
//!
//! - `entities/` - Repository records, registry state, manifests, targets
//! - `value_objects/` - Identifiers, editors, lexical paths
//! - `services/` - File processor and directory pruner
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
