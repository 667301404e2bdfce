// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Serialization of validated tessellations.

pub mod render;
pub mod tables;

pub use render::{render, render_c, render_rust, OutputFormat};
pub use tables::{flatten, parse_stream, OutputTables, NO_OFFSET, TERMINATOR};
