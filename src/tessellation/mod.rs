// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Case tessellations: expansion from base cases and validation.

pub mod expand;
pub mod validate;

pub use expand::{CaseTessellations, TessellationExpander};
pub use validate::{DefectKind, TessellationDefect, Validator};
