// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Source renderings of the output tables.
//!
//! The C rendering is the artifact the native stitching routine compiles.
//! The Rust rendering carries the same arrays as `pub const` items.

use std::io::{self, Write};

use clap::ValueEnum;
use strum_macros::Display;

use crate::emit::tables::{OutputTables, NO_OFFSET, TERMINATOR};
use crate::geometry::constants::MAX_SUBCASES;

/// Values per line in the direction table.
const DIRECTIONS_PER_LINE: usize = 16;

/// Target language of the emitted artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// C source with `const int` arrays
    C,
    /// Rust source with `pub const` arrays
    Rust,
}

/// Write `tables` as source in `format`.
pub fn render<W: Write>(tables: &OutputTables, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::C => render_c(tables, out),
        OutputFormat::Rust => render_rust(tables, out),
    }
}

/// (case, subcase, start, end) of every stream run, end exclusive of the
/// terminator.
fn runs(tables: &OutputTables) -> Vec<(usize, usize, usize, usize)> {
    let stream = &tables.tessellation_stream;
    let mut result = Vec::new();
    for (case, slots) in tables.case_stream_offsets.iter().enumerate() {
        for (subcase, &offset) in slots.iter().enumerate() {
            if offset == NO_OFFSET {
                continue;
            }
            let start = offset as usize;
            let end = stream[start..]
                .iter()
                .position(|&v| v == TERMINATOR)
                .map_or(stream.len(), |k| start + k);
            result.push((case, subcase, start, end));
        }
    }
    result
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn banner<W: Write>(tables: &OutputTables, out: &mut W, open: &str, close: &str) -> io::Result<()> {
    let lines = [
        "Generated by stitchgen. Do not edit.".to_string(),
        format!(
            "{} cases, {} tessellations, {} stream entries",
            tables.subcase_direction.len(),
            tables.used_slots(),
            tables.tessellation_stream.len()
        ),
    ];
    for line in lines {
        writeln!(out, "{}", format!("{open} {line} {close}").trim_end())?;
    }
    writeln!(out)
}

/// C source with `const int` arrays.
pub fn render_c<W: Write>(tables: &OutputTables, out: &mut W) -> io::Result<()> {
    banner(tables, out, "/*", "*/")?;

    writeln!(
        out,
        "const int subcaseDirection[{}] = {{",
        tables.subcase_direction.len()
    )?;
    for chunk in tables.subcase_direction.chunks(DIRECTIONS_PER_LINE) {
        let values: Vec<i32> = chunk.iter().map(|&d| d as i32).collect();
        writeln!(out, "    {},", join(&values))?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(
        out,
        "const int tessellationStream[{}] = {{",
        tables.tessellation_stream.len()
    )?;
    for (case, subcase, start, end) in runs(tables) {
        writeln!(
            out,
            "    /* {case}.{subcase} */ {}, {TERMINATOR},",
            join(&tables.tessellation_stream[start..end])
        )?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(
        out,
        "const int caseStreamOffsets[{}][{MAX_SUBCASES}] = {{",
        tables.case_stream_offsets.len()
    )?;
    for (case, slots) in tables.case_stream_offsets.iter().enumerate() {
        writeln!(out, "    {{{}}}, /* {case} */", join(slots))?;
    }
    writeln!(out, "}};")
}

/// Rust source with `pub const` arrays.
pub fn render_rust<W: Write>(tables: &OutputTables, out: &mut W) -> io::Result<()> {
    banner(tables, out, "//", "")?;

    writeln!(
        out,
        "pub const SUBCASE_DIRECTION: [u8; {}] = [",
        tables.subcase_direction.len()
    )?;
    for chunk in tables.subcase_direction.chunks(DIRECTIONS_PER_LINE) {
        let values: Vec<i32> = chunk.iter().map(|&d| d as i32).collect();
        writeln!(out, "    {},", join(&values))?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(
        out,
        "pub const TESSELLATION_STREAM: [i32; {}] = [",
        tables.tessellation_stream.len()
    )?;
    for (case, subcase, start, end) in runs(tables) {
        writeln!(out, "    // {case}.{subcase}")?;
        writeln!(
            out,
            "    {}, {TERMINATOR},",
            join(&tables.tessellation_stream[start..end])
        )?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(
        out,
        "pub const CASE_STREAM_OFFSETS: [[i32; {MAX_SUBCASES}]; {}] = [",
        tables.case_stream_offsets.len()
    )?;
    for slots in &tables.case_stream_offsets {
        writeln!(out, "    [{}],", join(slots))?;
    }
    writeln!(out, "];")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tables() -> OutputTables {
        let mut offsets = vec![[NO_OFFSET; MAX_SUBCASES]; 2];
        offsets[1][0] = 0;
        OutputTables {
            subcase_direction: vec![0, 0],
            tessellation_stream: vec![8, 0, 1, 2, 3, 4, 5, 6, 7, -1],
            case_stream_offsets: offsets,
        }
    }

    fn rendered(format: OutputFormat) -> String {
        let mut out = Vec::new();
        render(&small_tables(), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_c() {
        let text = rendered(OutputFormat::C);
        assert!(text.starts_with("/* Generated by stitchgen. Do not edit. */\n"));
        assert!(text.contains("const int subcaseDirection[2] = {\n    0, 0,\n};"));
        assert!(text.contains("    /* 1.0 */ 8, 0, 1, 2, 3, 4, 5, 6, 7, -1,\n"));
        assert!(text.contains("const int caseStreamOffsets[2][4] = {"));
        assert!(text.contains("    {0, -1, -1, -1}, /* 1 */\n"));
    }

    #[test]
    fn test_render_rust() {
        let text = rendered(OutputFormat::Rust);
        assert!(text.contains("pub const TESSELLATION_STREAM: [i32; 10] = ["));
        assert!(text.contains("    [-1, -1, -1, -1],\n"));
        assert!(text.trim_end().ends_with("];"));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_str("rust", false).unwrap(), OutputFormat::Rust);
        assert!(OutputFormat::from_str("fortran", false).is_err());
        for format in OutputFormat::value_variants() {
            let value = format.to_possible_value().unwrap();
            assert_eq!(value.get_name(), format.to_string());
        }
    }
}
