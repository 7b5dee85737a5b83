//! LayerPin Core Types
//!
//! This crate provides the foundational types shared by the LayerPin
//! constraint engine and its tools. It includes:
//!
//! - **Identifiers**: Interned element identifiers ([`identifier::Id`])
//! - **Geometry**: Points, sizes, bounds and layer bands ([`geometry`] module)
//! - **Nodes**: The placement model of a laid-out node ([`node`] module)

pub mod geometry;
pub mod identifier;
pub mod node;
