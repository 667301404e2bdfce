// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for table generation.
//!
//! Every stage of the pipeline reports through [`GeneratorError`]. All of
//! them are fatal: the generator never emits a partially checked table.

use std::fmt;
use thiserror::Error;

use crate::tessellation::TessellationDefect;

/// Result type alias for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors that can occur while building or emitting the case tables.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The rotation words did not produce the full group.
    #[error("symmetry group has {distinct} distinct rotations, expected {expected}")]
    SymmetryGroup { distinct: usize, expected: usize },

    /// The first rotation word does not evaluate to the identity.
    #[error("symmetry group does not start with the identity")]
    IdentityNotFirst,

    /// A rotation word used a letter other than `Y` or `Z`.
    #[error("unknown rotation generator '{0}'")]
    UnknownGenerator(char),

    /// Composing two members left the group.
    #[error("composition of rotations {left} and {right} is not in the group")]
    NotClosed { left: usize, right: usize },

    /// No (base case, rotation) pair reproduces this configuration.
    #[error("case {case} is not generated by any base case")]
    Uncovered { case: usize },

    /// A square-face configuration matched no canonical face configuration.
    #[error("face configuration {config:#06b} has no canonical tessellation")]
    FaceUncovered { config: u8 },

    /// The hand-authored base table disagrees with the canonical base cases.
    #[error("base tessellation table entry {index} is for case {found}, expected case {expected}")]
    BaseTableMismatch {
        index: usize,
        found: usize,
        expected: usize,
    },

    /// A base case is missing the tessellation for one of its subcases.
    #[error("base case {base} has no tessellation for subcase {subcase}")]
    MissingSubcase { base: usize, subcase: usize },

    /// A polyhedron does not have 4 to 8 vertices, or names a vertex
    /// outside the cube.
    #[error("polyhedron {vertices:?} is not a supported shape")]
    BadShape { vertices: Vec<u8> },

    /// One or more tessellations failed the watertightness check.
    #[error("{0}")]
    Watertightness(DefectReport),

    /// Case number outside `0..256`.
    #[error("case number {0} is out of range")]
    CaseOutOfRange(usize),

    /// Subcase number outside the case's subcase range.
    #[error("case {case} has no subcase {subcase}")]
    SubcaseOutOfRange { case: usize, subcase: usize },

    /// The flattened tessellation stream is malformed.
    #[error("malformed tessellation stream at offset {offset}: {detail}")]
    StreamFormat { offset: usize, detail: String },

    /// Writing the emitted artifact failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// Create a stream format error.
    #[must_use]
    pub fn stream_format(offset: usize, detail: impl Into<String>) -> Self {
        Self::StreamFormat {
            offset,
            detail: detail.into(),
        }
    }
}

/// The defects found by one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefectReport(pub Vec<TessellationDefect>);

impl DefectReport {
    pub fn defects(&self) -> &[TessellationDefect] {
        &self.0
    }

    /// True when any defect concerns the given case.
    pub fn mentions_case(&self, case: usize) -> bool {
        self.0.iter().any(|defect| defect.case == case)
    }
}

impl fmt::Display for DefectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tessellation defect(s)", self.0.len())?;
        if let Some(first) = self.0.first() {
            write!(f, ", first: {first}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeneratorError::SymmetryGroup {
            distinct: 23,
            expected: 24,
        };
        assert!(format!("{err}").contains("23 distinct"));

        let err = GeneratorError::Uncovered { case: 77 };
        assert!(format!("{err}").contains("case 77"));

        let err = GeneratorError::stream_format(12, "missing terminator");
        assert!(format!("{err}").contains("offset 12"));
        assert!(format!("{err}").contains("missing terminator"));
    }

    #[test]
    fn test_empty_watertightness_display() {
        let err = GeneratorError::Watertightness(DefectReport(Vec::new()));
        assert_eq!(format!("{err}"), "0 tessellation defect(s)");
    }
}
