// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the emitted tables and their renderings.

mod common;

use amr_stitch_tables::emit::{parse_stream, render, NO_OFFSET, TERMINATOR};
use amr_stitch_tables::{CaseConfig, CaseTables, OutputFormat};

use common::tables;

#[test]
fn test_table_sizes() {
    let output = &tables().output;
    assert_eq!(output.subcase_direction.len(), 256);
    assert_eq!(output.case_stream_offsets.len(), 256);
    assert_eq!(output.tessellation_stream.len(), 5744);
    assert_eq!(output.used_slots(), 303);
    assert_eq!(output.tessellation_stream.last(), Some(&TERMINATOR));
}

#[test]
fn test_subcase_directions() {
    let directions = &tables().output.subcase_direction;
    assert_eq!(directions[0], 0);
    assert_eq!(directions[3], 0b001);
    assert_eq!(directions[6], 0b010);
    assert_eq!(directions[15], 0b011);
    assert_eq!(directions[17], 0b100);
    assert_eq!(directions[255], 0);
}

#[test]
fn test_stream_layout() {
    let output = &tables().output;
    assert_eq!(output.case_stream_offsets[1], [0, -1, -1, -1]);
    assert_eq!(
        &output.tessellation_stream[..19],
        &[5, 1, 5, 6, 2, 0, 5, 2, 6, 7, 3, 0, 5, 4, 7, 6, 5, 0, -1]
    );
    assert_eq!(output.case_stream_offsets[255], [5734, -1, -1, -1]);
    assert_eq!(
        &output.tessellation_stream[5734..],
        &[8, 0, 1, 2, 3, 4, 5, 6, 7, -1]
    );
}

#[test]
fn test_offsets_match_subcase_counts() {
    let tables = tables();
    for config in CaseConfig::all() {
        let count = tables.memo.subcases.num_sub_cases(config);
        let slots = tables.output.case_stream_offsets[config.case_number()];
        for (s, &offset) in slots.iter().enumerate() {
            assert_eq!(offset != NO_OFFSET, s < count, "case {}", config.case_number());
        }
    }
}

#[test]
fn test_stream_round_trip() {
    let tables = tables();
    for (config, subcase, tessellation) in tables.tessellations.iter() {
        let parsed = tables
            .output
            .tessellation(config.case_number(), subcase)
            .unwrap()
            .unwrap();
        assert_eq!(&parsed, tessellation);
        let offset = tables.output.case_stream_offsets[config.case_number()][subcase];
        assert_eq!(
            &parse_stream(&tables.output.tessellation_stream, offset as usize).unwrap(),
            tessellation
        );
    }
    assert_eq!(tables.output.tessellation(0, 0).unwrap(), None);
}

#[test]
fn test_output_is_deterministic() {
    let first = CaseTables::build().unwrap();
    let second = CaseTables::build().unwrap();
    for format in [OutputFormat::C, OutputFormat::Rust] {
        let mut a = Vec::new();
        let mut b = Vec::new();
        render(&first.output, format, &mut a).unwrap();
        render(&second.output, format, &mut b).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_c_rendering() {
    let mut out = Vec::new();
    render(&tables().output, OutputFormat::C, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("/* 256 cases, 303 tessellations, 5744 stream entries */"));
    assert!(text.contains("const int tessellationStream[5744] = {"));
    assert!(text.contains("    /* 255.0 */ 8, 0, 1, 2, 3, 4, 5, 6, 7, -1,\n"));
    assert!(text.contains("    {5734, -1, -1, -1}, /* 255 */\n"));
}
