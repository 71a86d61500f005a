//! Extracurricular activity sign-ups.
//!
//! An in-memory [`database::ActivityStore`] seeded at startup, a thin service
//! layer enforcing the sign-up rules, and an axum router exposing:
//!
//! - `GET /activities`
//! - `POST /activities/:name/signup?email=...`
//! - `DELETE /activities/:name/participants?email=...`
//!
//! plus a static front-end under `/static` and `GET /health`.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
