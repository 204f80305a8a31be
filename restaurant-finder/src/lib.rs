//! Restaurant finder server.
//!
//! A web application that answers: "Given my race, budget and cravings,
//! which restaurants should I look at?" Searches are forwarded to a remote
//! restaurant filter API; the full answer is kept server-side and shown
//! one page at a time.

pub mod config;
pub mod domain;
pub mod filter;
pub mod finder;
pub mod pagination;
pub mod search;
pub mod web;
