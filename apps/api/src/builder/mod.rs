//! Resume builder: CRUD over mutable builder documents, JSON-on-disk
//! persistence, and the analyze/apply-fix flow.

pub mod handlers;
pub mod service;
pub mod store;
