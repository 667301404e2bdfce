// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Watertightness checking.
//!
//! A tessellation of (case, subcase) is accepted when:
//!
//! 1. no polyhedron has two corners in the same merge class,
//! 2. every polyhedron has positive volume at the merged positions, and
//! 3. in the multiset made of all polyhedron faces plus the reversed
//!    boundary faces of the cube, every face occurs exactly once and so does
//!    its reverse.
//!
//! Condition 3 makes the union of the cells a closed surface matching the
//! prescribed boundary, with every interior face shared by exactly two cells
//! in opposite orientation. Together with positive volumes this rules out
//! gaps and overlaps.
//!
//! All vertices pass through the subcase's merge classes first. Boundary
//! faces that merge down to an edge or a point vanish.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, error, info};

use crate::error::{DefectReport, GeneratorError, GeneratorResult};
use crate::geometry::{CaseConfig, Face, Polyhedron, Tessellation};
use crate::memo::{BaseTessellationTable, Canonicalizer, FaceTessellator, SubcaseResolver};
use crate::tessellation::CaseTessellations;

/// What is wrong with a tessellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefectKind {
    /// A face whose reverse is missing: a gap, or a boundary mismatch.
    UnmatchedFace(Face),
    /// A face that occurs more than once: an overlap.
    DuplicatedFace { face: Face, count: usize },
    /// A polyhedron with two corners in one merge class.
    CollapsedPolyhedron(Polyhedron),
    /// A polyhedron that is flat or inside out.
    NonPositiveVolume { polyhedron: Polyhedron, volume6: i64 },
}

/// A defect in the tessellation of one (case, subcase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TessellationDefect {
    pub case: usize,
    pub subcase: usize,
    pub kind: DefectKind,
}

impl fmt::Display for TessellationDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case {} subcase {}: ", self.case, self.subcase)?;
        match &self.kind {
            DefectKind::UnmatchedFace(face) => write!(f, "face {face} has no opposite"),
            DefectKind::DuplicatedFace { face, count } => {
                write!(f, "face {face} occurs {count} times")
            }
            DefectKind::CollapsedPolyhedron(polyhedron) => {
                write!(f, "{polyhedron} collapses under merging")
            }
            DefectKind::NonPositiveVolume {
                polyhedron,
                volume6,
            } => write!(f, "{polyhedron} has signed volume {volume6}/48"),
        }
    }
}

/// Checks tessellations against the cube boundary of their case.
pub struct Validator<'a> {
    faces: &'a FaceTessellator,
    resolver: &'a SubcaseResolver,
}

impl<'a> Validator<'a> {
    pub fn new(faces: &'a FaceTessellator, resolver: &'a SubcaseResolver) -> Self {
        Validator { faces, resolver }
    }

    /// All defects of `tessellation` as (case, subcase). Empty means
    /// watertight and correct.
    pub fn check(
        &self,
        config: CaseConfig,
        subcase: usize,
        tessellation: &Tessellation,
    ) -> GeneratorResult<Vec<TessellationDefect>> {
        let classes = self.resolver.merge_classes(config, subcase)?;
        let positions = classes.positions();
        let defect = |kind| TessellationDefect {
            case: config.case_number(),
            subcase,
            kind,
        };

        let mut defects = Vec::new();
        let mut counts: BTreeMap<Face, usize> = BTreeMap::new();

        for polyhedron in tessellation.polyhedra() {
            let merged = polyhedron.mapped(|v| classes.representative(v));
            if merged.has_repeated_vertex() {
                defects.push(defect(DefectKind::CollapsedPolyhedron(polyhedron.clone())));
                continue;
            }
            let volume6 = merged.signed_volume6(&positions);
            if volume6 <= 0 {
                defects.push(defect(DefectKind::NonPositiveVolume {
                    polyhedron: polyhedron.clone(),
                    volume6,
                }));
            }
            for face in merged.faces() {
                *counts.entry(face).or_insert(0) += 1;
            }
        }

        for cycle in self.faces.outer_cycles(config) {
            let merged: Vec<u8> = cycle.iter().map(|&v| classes.representative(v)).collect();
            if let Some(face) = Face::collapsed(&merged) {
                *counts.entry(face.reversed()).or_insert(0) += 1;
            }
        }

        for (&face, &count) in &counts {
            if count > 1 {
                defects.push(defect(DefectKind::DuplicatedFace { face, count }));
            }
            if !counts.contains_key(&face.reversed()) {
                defects.push(defect(DefectKind::UnmatchedFace(face)));
            }
        }
        Ok(defects)
    }

    /// Check every subcase of every base case, as authored.
    pub fn validate_base_cases(
        &self,
        canonical: &Canonicalizer,
        table: &BaseTessellationTable,
    ) -> GeneratorResult<usize> {
        let mut checked = 0;
        let mut defects = Vec::new();
        for (index, &base) in canonical.base_cases().iter().enumerate() {
            for (subcase, tessellation) in table.subcases(index).iter().enumerate() {
                defects.extend(self.check(base, subcase, tessellation)?);
                checked += 1;
            }
        }
        finish("base case", checked, defects)
    }

    /// Check every derived (case, subcase).
    pub fn validate_all(&self, tessellations: &CaseTessellations) -> GeneratorResult<usize> {
        let mut checked = 0;
        let mut defects = Vec::new();
        for (config, subcase, tessellation) in tessellations.iter() {
            defects.extend(self.check(config, subcase, tessellation)?);
            checked += 1;
        }
        finish("case", checked, defects)
    }
}

fn finish(
    what: &str,
    checked: usize,
    defects: Vec<TessellationDefect>,
) -> GeneratorResult<usize> {
    if defects.is_empty() {
        info!("[Validator] {checked} {what} tessellations are watertight");
        return Ok(checked);
    }
    for defect in &defects {
        error!("{defect}");
    }
    debug!(
        "[Validator] {} defects across {checked} {what} tessellations",
        defects.len()
    );
    Err(GeneratorError::Watertightness(DefectReport(defects)))
}
