//! Mage AI Core
//!
//! Core types for declarative management of Mage AI resources.
//!
//! This crate contains:
//! - Domain types: resource records as the server reports them (Pipeline, Block, ...)
//! - DTOs: request and response wire shapes for the Mage AI REST API
//! - Graph: the dependency-graph view over a pipeline's blocks

pub mod domain;
pub mod dto;
pub mod graph;
