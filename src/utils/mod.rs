//! Shared utilities.
//!
//! - [`errors`]: application error type with HTTP response conversion
//! - [`pagination`]: limit/offset query parameters for list endpoints

pub mod errors;
pub mod pagination;
