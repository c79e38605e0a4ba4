//! CLI exit code registry. Exit codes are part of the shell contract —
//! CI jobs key off them to fail a build when maintainers drift.

/// Success — every roster entry was found in the reference file.
pub const EXIT_SUCCESS: u8 = 0;

/// General error (unspecified). Prefer a specific code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error — bad arguments, unreadable roster file.
pub const EXIT_USAGE: u8 = 2;

/// `check` found roster entries missing from the reference file.
pub const EXIT_CHECK_MISSING: u8 = 3;

/// The reference file could not be fetched (bad URL, timeout, non-2xx).
pub const EXIT_FETCH_FAILED: u8 = 4;

/// No reference URL configured for the project.
pub const EXIT_NO_REFERENCE: u8 = 5;
