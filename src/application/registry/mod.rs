//! Registry Use Case
//!
//! CRUD over the persisted repository registry.

mod use_case;


pub use use_case::RegistryUseCase;
