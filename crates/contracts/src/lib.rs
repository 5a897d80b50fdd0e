//! Types shared between the loan pages and the loan API.
//!
//! Nothing in this crate touches the browser, so everything here is tested natively.

pub mod domain;
pub mod shared;
pub mod usecases;
