//! **tilenav-core** — Core types for grid navigation.
//!
//! This crate provides the foundational types used across the *tilenav*
//! workspace: geometry primitives, the obstacle-aware [`Board`] with its
//! passability queries and grid/world coordinate transforms, the
//! configuration surface, and the synchronous reactive primitives
//! ([`Signal`], [`ReactiveValue`]) used to propagate changes between
//! components without tight coupling.

pub mod board;
pub mod config;
pub mod geom;
pub mod reactive;

pub use board::{Board, Tiles};
pub use config::{BoardConfig, ConfigError};
pub use geom::{Point, Vec2};
pub use reactive::{ReactiveReader, ReactiveValue, Signal, Subscription};
