//! Deskpet - physics and window-stacking engine for desktop pet sprites.
//!
//! A pet is a single rigid body falling, walking and being dragged across the
//! desktop. Every few frames the window list is scanned so that other windows
//! become platforms to land on and peer pets push each other away and agree
//! on a z-order. The library talks to the desktop only through the traits in
//! [`platform`]; [`platform::scene`] provides an in-memory desktop used by the
//! CLI and the tests.

pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod physics;
pub mod platform;
pub mod simulation;
pub mod stacking;
