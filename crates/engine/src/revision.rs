//! Revision precondition check

use docgraph_core::{DocumentId, Error, Result, Revision};

/// Check the caller's expected revision against the stored one
///
/// Passes when `ignore_revs` is set, when no revision was supplied, or when
/// the two match. Otherwise fails with `Conflict`.
pub(crate) fn check_revision(
    id: &DocumentId,
    stored: &Revision,
    expected: Option<&Revision>,
    ignore_revs: bool,
) -> Result<()> {
    if ignore_revs {
        return Ok(());
    }
    match expected {
        Some(expected) if expected != stored => Err(Error::Conflict {
            id: id.to_string(),
            expected: expected.to_string(),
            actual: stored.to_string(),
        }),
        _ => Ok(()),
    }
}
