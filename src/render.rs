use crate::calendar::{CalendarDay, DayState, MonthGrid};
use crate::model::{Booking, BookingStatus};
use chrono::{Datelike, NaiveDate};

const WEEKDAYS_FR: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];
const MONTHS_SHORT_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Permet de customiser le rendu de la grille (texte, HTML, etc.).
pub trait CalendarRenderer {
    fn render(&self, grid: &MonthGrid) -> String;
}

/// Rendu texte pour terminal : une ligne par semaine, puis la légende.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextCalendar;

impl TextCalendar {
    fn marker(state: DayState) -> char {
        match state {
            DayState::Booked => '#',
            DayState::Tentative => '?',
            DayState::Free => '.',
            DayState::Past => '~',
        }
    }

    fn cell(day: &CalendarDay) -> String {
        if !day.is_current_month {
            return " ".repeat(5);
        }
        let inner = format!("{:>2}{}", day.date.day(), Self::marker(day.state()));
        if day.is_today {
            format!("[{inner}]")
        } else {
            format!(" {inner} ")
        }
    }
}

impl CalendarRenderer for TextCalendar {
    fn render(&self, grid: &MonthGrid) -> String {
        let mut lines = vec![grid.month.label_fr()];
        let header: String = WEEKDAYS_FR.iter().map(|d| format!(" {d} ")).collect();
        lines.push(header.trim_end().to_string());
        for week in &grid.weeks {
            let row: String = week.days.iter().map(Self::cell).collect();
            lines.push(row.trim_end().to_string());
        }
        lines.push("# réservé  ? à confirmer  . disponible  ~ passé".to_string());
        lines.join("\n")
    }
}

/// Date courte à la française, ex. `10 janv. 2025`.
pub fn format_day_fr(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_SHORT_FR[date.month0() as usize],
        date.year()
    )
}

pub fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Booked => "Confirmée",
        BookingStatus::Tentative => "À confirmer",
    }
}

/// Tableau compact des prochains occupants.
pub fn render_upcoming(bookings: &[&Booking]) -> String {
    if bookings.is_empty() {
        return "Aucune réservation pour le moment".to_string();
    }
    bookings
        .iter()
        .map(|b| {
            format!(
                "{:>3} | {} | {} → {} | {}",
                b.id,
                b.name,
                format_day_fr(b.start),
                format_day_fr(b.end),
                status_label(b.status)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
