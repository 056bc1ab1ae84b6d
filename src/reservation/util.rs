use chrono::NaiveDate;

/// Intersection de deux intervalles de jours, bornes incluses des deux côtés.
///
/// Couvre aussi le cas où une borne du candidat tombe dans l'intervalle existant.
pub(super) fn intersects(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && a_end >= b_start
}

pub(super) fn touches_only(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start == b_end || a_end == b_start
}
