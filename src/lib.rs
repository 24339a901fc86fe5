//! Client library for the VCC vehicle registration service.
//!
//! Record CRUD against the remote REST service, session handling with
//! durable token storage, schema-driven form validation, a list view with
//! per-row actions, and printable certificate export with an embedded
//! public-view QR code.

pub mod certificate;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod models;
pub mod session;
pub mod view;
