//! Feature modules.
//!
//! Each module follows the same structure: `controller.rs` for HTTP handlers,
//! `service.rs` for business logic, `model.rs` for DTOs and database structs,
//! and `router.rs` for route wiring.

pub mod accounts;
pub mod auth;
pub mod images;
