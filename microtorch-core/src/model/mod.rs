// src/model/mod.rs
//! Containers that chain modules into a network.

pub mod sequential;

pub use sequential::Model;
