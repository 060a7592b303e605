//! LED Animation Project Utilities
//!
//! A library and CLI tool for working with LED animation project files:
//! loading mapping-structured documents from JSON or YAML, writing them back
//! as formatted JSON, plus the color conversion and per-frame reprocessing
//! steps the project files drive.

pub mod color;
pub mod config;
pub mod reprocess;

pub use color::{Hsv, Rgb, hsv2rgb_raw};
pub use config::{ConfigError, Document, dump, dumps, load, loads};
