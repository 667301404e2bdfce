// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use std::sync::OnceLock;

use amr_stitch_tables::CaseTables;

/// The validated tables, built once per test binary.
pub fn tables() -> &'static CaseTables {
    static TABLES: OnceLock<CaseTables> = OnceLock::new();
    TABLES.get_or_init(|| CaseTables::build().expect("case tables should build"))
}

/// The six configurations with one cube face refined.
#[allow(dead_code)]
pub const SINGLE_FACE_CASES: [u8; 6] = [15, 51, 102, 153, 204, 240];
