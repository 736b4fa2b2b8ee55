//! Library surface for the InstaPump extension icon generator.
//!
//! The binary is a zero-argument wrapper around [`icon_gen::generate_icons`];
//! everything else is exposed here so tests can render icons in memory
//! without touching the filesystem.

pub mod font;
pub mod icon_gen;
pub mod render;
