use super::{util, Conflict, ConflictKind, ValidationError};
use crate::model::Booking;
use chrono::NaiveDate;

pub(super) fn has_conflict(
    start: NaiveDate,
    end: NaiveDate,
    existing: &[Booking],
) -> Result<bool, ValidationError> {
    if start >= end {
        return Err(ValidationError::InvalidRange);
    }
    Ok(existing
        .iter()
        .any(|b| util::intersects(start, end, b.start, b.end)))
}

pub(super) fn find_conflicts(
    start: NaiveDate,
    end: NaiveDate,
    existing: &[Booking],
) -> Result<Vec<Conflict>, ValidationError> {
    if start >= end {
        return Err(ValidationError::InvalidRange);
    }

    let out = existing
        .iter()
        .filter(|b| util::intersects(start, end, b.start, b.end))
        .map(|b| Conflict {
            booking: b.id,
            kind: if util::touches_only(start, end, b.start, b.end) {
                ConflictKind::SharedBoundary
            } else {
                ConflictKind::Overlap
            },
        })
        .collect();

    Ok(out)
}
