use super::{util, SlotRequest, ValidationError};
use crate::model::{Booking, NewBooking};

/// Valide la saisie dans l'ordre du formulaire ; s'arrête à la première erreur.
pub(super) fn validate_slot(
    request: &SlotRequest,
    existing: &[Booking],
) -> Result<NewBooking, ValidationError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let start = request.start.ok_or(ValidationError::MissingStart)?;
    let end = request.end.ok_or(ValidationError::MissingEnd)?;
    if start >= end {
        return Err(ValidationError::InvalidRange);
    }

    if let Some(clash) = existing
        .iter()
        .find(|b| util::intersects(start, end, b.start, b.end))
    {
        return Err(ValidationError::Conflict(clash.id));
    }

    Ok(NewBooking {
        name: name.to_string(),
        start,
        end,
    })
}
