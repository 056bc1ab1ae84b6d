#![forbid(unsafe_code)]
use chantemerle::{
    build_month_grid, sample_bookings, Booking, BookingId, BookingStatus, CalendarMonth,
    CalendarRenderer, TextCalendar,
};
use chrono::{Datelike, NaiveDate, Weekday};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn every_month_of_the_year_is_whole_weeks_from_monday() {
    let bookings = sample_bookings();
    let mut month = CalendarMonth::new(2024, 12).unwrap();
    for _ in 0..14 {
        let grid = build_month_grid(month, &bookings, d(2025, 1, 20)).unwrap();
        assert!(!grid.weeks.is_empty());
        for week in &grid.weeks {
            assert_eq!(week.days.len(), 7);
            assert_eq!(week.days[0].date.weekday(), Weekday::Mon);
        }
        let in_month = grid.days().filter(|c| c.is_current_month).count();
        assert_eq!(in_month as u32, month.last_day().day());
        month = month.next().unwrap();
    }
}

#[test]
fn month_without_bookings_has_no_occupant() {
    let grid = build_month_grid(CalendarMonth::new(2025, 11).unwrap(), &sample_bookings(), d(2025, 1, 1)).unwrap();
    assert!(grid.days().all(|c| c.booking.is_none()));
}

#[test]
fn building_does_not_touch_bookings() {
    let bookings = sample_bookings();
    let before = bookings.clone();
    build_month_grid(CalendarMonth::new(2025, 1).unwrap(), &bookings, d(2025, 1, 1)).unwrap();
    assert_eq!(bookings, before);
}

#[test]
fn text_rendering_of_february_2021() {
    // février 2021 commence un lundi et tient en quatre semaines
    let bookings = vec![
        Booking::new(BookingId::new(1), "Alice", d(2021, 2, 3), d(2021, 2, 5), BookingStatus::Booked).unwrap(),
        Booking::new(BookingId::new(2), "Pierre", d(2021, 2, 20), d(2021, 2, 22), BookingStatus::Tentative).unwrap(),
    ];
    let grid = build_month_grid(CalendarMonth::new(2021, 2).unwrap(), &bookings, d(2021, 2, 10)).unwrap();
    assert_eq!(grid.weeks.len(), 4);

    insta::assert_snapshot!(TextCalendar.render(&grid), @r###"
février 2021
 Lun  Mar  Mer  Jeu  Ven  Sam  Dim
  1~   2~   3#   4#   5#   6~   7~
  8~   9~ [10.] 11.  12.  13.  14.
 15.  16.  17.  18.  19.  20?  21?
 22?  23.  24.  25.  26.  27.  28.
# réservé  ? à confirmer  . disponible  ~ passé
"###);
}
