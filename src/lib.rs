//! Shared plumbing for the `cql` and `cqlsh` binaries.
//!
//! Both tools parse their command line into a [`config::ConnectionConfig`],
//! open a session through [`db::connect`], and hand a single CQL statement
//! to [`db::execute`]. Everything protocol-related lives in the `scylla`
//! driver; this crate only wires arguments to it and formats the outcome.

pub mod config;
pub mod db;
pub mod error;
