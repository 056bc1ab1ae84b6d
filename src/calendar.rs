//! Grille mensuelle : semaines ISO (lundi → dimanche) couvrant le mois entier.

use crate::model::{Booking, BookingStatus};
use anyhow::{bail, Context, Result};
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Mois affiché ; toujours construit avec une grille (lundi → dimanche) représentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            bail!("month must be within 1..=12, got {month}");
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .with_context(|| format!("year out of range: {year}"))?;
        let candidate = Self { first };
        candidate
            .grid_bounds()
            .with_context(|| format!("calendar grid out of range for {candidate}"))?;
        Ok(candidate)
    }

    /// Mois contenant `date` ; sa grille peut déborder des dates représentables
    /// aux extrémités du calendrier (voir [`build_month_grid`]).
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> u32 {
        self.first.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    pub fn last_day(self) -> NaiveDate {
        // le 28 existe dans tout mois valide
        (28..=31)
            .rev()
            .find_map(|day| self.first.with_day(day))
            .unwrap_or(self.first)
    }

    pub fn next(self) -> Option<Self> {
        match self.month() {
            12 => Self::new(self.year().checked_add(1)?, 1).ok(),
            m => Self::new(self.year(), m + 1).ok(),
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self.month() {
            1 => Self::new(self.year().checked_sub(1)?, 12).ok(),
            m => Self::new(self.year(), m - 1).ok(),
        }
    }

    /// Du lundi précédant le 1er au dimanche suivant le dernier jour.
    fn grid_bounds(self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.first_day();
        let last = self.last_day();
        let start = first.checked_sub_days(Days::new(u64::from(
            first.weekday().num_days_from_monday(),
        )))?;
        let end = last.checked_add_days(Days::new(u64::from(
            6 - last.weekday().num_days_from_monday(),
        )))?;
        Some((start, end))
    }

    /// Libellé français, ex. `janvier 2025`.
    pub fn label_fr(self) -> String {
        format!("{} {}", MONTHS_FR[self.first.month0() as usize], self.year())
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for CalendarMonth {
    type Err = anyhow::Error;

    /// Format strict `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        let bytes = raw.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || b.is_ascii_digit());
        if !well_formed {
            bail!("expected YYYY-MM, got {s}");
        }
        let year: i32 = raw[..4].parse().with_context(|| format!("invalid year in {s}"))?;
        let month: u32 = raw[5..].parse().with_context(|| format!("invalid month in {s}"))?;
        Self::new(year, month)
    }
}

/// État affiché d'une journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Past,
    Booked,
    Tentative,
    Free,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_past: bool,
    pub is_today: bool,
    pub booking: Option<Booking>,
}

impl CalendarDay {
    /// Une réservation l'emporte sur l'état « passé ».
    pub fn state(&self) -> DayState {
        match &self.booking {
            Some(b) if b.status == BookingStatus::Tentative => DayState::Tentative,
            Some(_) => DayState::Booked,
            None if self.is_past => DayState::Past,
            None => DayState::Free,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWeek {
    pub days: Vec<CalendarDay>,
}

impl CalendarWeek {
    pub fn monday(&self) -> NaiveDate {
        self.days[0].date
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: CalendarMonth,
    pub weeks: Vec<CalendarWeek>,
}

impl MonthGrid {
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }
}

/// Construit la grille du mois ; `today` sert aux drapeaux `is_past` / `is_today`.
///
/// Chaque jour retient la première réservation qui le couvre (bornes incluses).
/// Échoue si la grille déborde des dates représentables.
pub fn build_month_grid(
    month: CalendarMonth,
    bookings: &[Booking],
    today: NaiveDate,
) -> Result<MonthGrid> {
    let (grid_start, grid_end) = month
        .grid_bounds()
        .with_context(|| format!("calendar grid out of range for {month}"))?;

    let days: Vec<CalendarDay> = grid_start
        .iter_days()
        .take_while(|d| *d <= grid_end)
        .map(|date| CalendarDay {
            date,
            is_current_month: date.year() == month.year() && date.month() == month.month(),
            is_past: date < today,
            is_today: date == today,
            booking: bookings.iter().find(|b| b.contains(date)).cloned(),
        })
        .collect();

    let weeks = days
        .chunks(7)
        .map(|chunk| CalendarWeek {
            days: chunk.to_vec(),
        })
        .collect();

    Ok(MonthGrid { month, weeks })
}
