//! Merch Visits - REST backend for merchandising field-visit tracking.
//!
//! Companies, retail points, brands, categories, products, visits and the
//! line items recorded during visits, served as generic CRUD groups behind a
//! bearer-token session gate, plus a per-company visit report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
