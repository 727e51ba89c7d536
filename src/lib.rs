//! Core library exports for the store catalog.
//!
//! This crate exposes the domain model, Diesel-backed repositories, DTO
//! projections and service layers used by the catalog application. The
//! repository deliberately offers the same product search through a
//! composable criteria list, a raw SQL string and a built SQL statement;
//! all three must stay result-identical.

pub mod db;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
