//! Payroll Computation Engine
//!
//! This crate loads employee master data and attendance logs, then answers
//! payroll queries: employee lookup, hours worked over a date range, gross
//! salary, and net salary after SSS, PhilHealth and Pag-IBIG contributions
//! and progressive withholding tax.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod ingest;
pub mod ledger;
pub mod models;
pub mod service;
