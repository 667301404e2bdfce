// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Flat lookup tables for the stitching runtime.
//!
//! # Layout
//!
//! - `subcase_direction[256]`: ambiguous axes of each case (bit 0 X, bit 1
//!   Y, bit 2 Z), 0 for cases without subcases.
//! - `tessellation_stream`: for each (case, subcase) in order, its
//!   polyhedra as `[n, v0, .., v(n-1)]`, then [`TERMINATOR`].
//! - `case_stream_offsets[256][4]`: where each (case, subcase) run starts,
//!   [`NO_OFFSET`] for unused subcase slots.

use log::info;

use crate::error::{GeneratorError, GeneratorResult};
use crate::geometry::constants::{MAX_SUBCASES, NCASES};
use crate::geometry::{Polyhedron, Tessellation};
use crate::tessellation::CaseTessellations;

/// Ends the run of one (case, subcase) in the stream.
pub const TERMINATOR: i32 = -1;

/// Marks an unused subcase slot in the offset table.
pub const NO_OFFSET: i32 = -1;

/// The emitted tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTables {
    pub subcase_direction: Vec<u8>,
    pub tessellation_stream: Vec<i32>,
    pub case_stream_offsets: Vec<[i32; MAX_SUBCASES]>,
}

impl OutputTables {
    /// Flatten validated tessellations.
    pub fn build(directions: &[u8], tessellations: &CaseTessellations) -> Self {
        let mut stream = Vec::new();
        let mut offsets = vec![[NO_OFFSET; MAX_SUBCASES]; NCASES];
        for (config, subcase, tessellation) in tessellations.iter() {
            offsets[config.case_number()][subcase] = stream.len() as i32;
            flatten(tessellation, &mut stream);
        }
        info!(
            "[TableEmitter] stream of {} entries for {} tessellations",
            stream.len(),
            tessellations.total()
        );
        OutputTables {
            subcase_direction: directions.to_vec(),
            tessellation_stream: stream,
            case_stream_offsets: offsets,
        }
    }

    /// Read one (case, subcase) back out of the stream. `None` when the
    /// slot is unused.
    pub fn tessellation(&self, case: usize, subcase: usize) -> GeneratorResult<Option<Tessellation>> {
        let slots = self
            .case_stream_offsets
            .get(case)
            .ok_or(GeneratorError::CaseOutOfRange(case))?;
        let offset = *slots
            .get(subcase)
            .ok_or(GeneratorError::SubcaseOutOfRange { case, subcase })?;
        if offset == NO_OFFSET {
            return Ok(None);
        }
        parse_stream(&self.tessellation_stream, offset as usize).map(Some)
    }

    /// Number of used (case, subcase) slots.
    pub fn used_slots(&self) -> usize {
        self.case_stream_offsets
            .iter()
            .flat_map(|slots| slots.iter())
            .filter(|&&offset| offset != NO_OFFSET)
            .count()
    }
}

/// Append one tessellation, with its terminator, to `stream`.
pub fn flatten(tessellation: &Tessellation, stream: &mut Vec<i32>) {
    for polyhedron in tessellation.polyhedra() {
        stream.push(polyhedron.len() as i32);
        stream.extend(polyhedron.vertices().iter().map(|&v| v as i32));
    }
    stream.push(TERMINATOR);
}

/// Parse the run starting at `offset`.
pub fn parse_stream(stream: &[i32], offset: usize) -> GeneratorResult<Tessellation> {
    let mut polyhedra = Vec::new();
    let mut i = offset;
    loop {
        let &length = stream
            .get(i)
            .ok_or_else(|| GeneratorError::stream_format(i, "missing terminator"))?;
        if length == TERMINATOR {
            break;
        }
        if !(4..=8).contains(&length) {
            return Err(GeneratorError::stream_format(
                i,
                format!("polyhedron length {length}"),
            ));
        }
        let end = i + 1 + length as usize;
        let body = stream
            .get(i + 1..end)
            .ok_or_else(|| GeneratorError::stream_format(i, "truncated polyhedron"))?;
        let vertices = body
            .iter()
            .map(|&v| u8::try_from(v))
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| GeneratorError::stream_format(i, "negative or oversized vertex"))?;
        let polyhedron = Polyhedron::new(&vertices)
            .map_err(|err| GeneratorError::stream_format(i, err.to_string()))?;
        polyhedra.push(polyhedron);
        i = end;
    }
    Ok(Tessellation::new(polyhedra))
}
