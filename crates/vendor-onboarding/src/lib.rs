//! Core library for the guided vendor-onboarding wizard.
//!
//! The wizard collects company, contact, currency, product, shipping, PCN,
//! and invoicing data, assigns the submission to one of three vendor
//! entities through an ordered rule engine, and serializes the result into
//! the fixed payload shape expected by the downstream business API.

#![recursion_limit = "256"]

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
