use crate::model::Booking;
use anyhow::Context;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Import d'un tableau JSON de réservations (même format que `GET /`).
pub fn load_bookings_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Booking>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let bookings: Vec<Booking> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing bookings {}", path.display()))?;
    Ok(bookings)
}

/// Export JSON (jolie mise en forme)
pub fn export_bookings_json<P: AsRef<Path>>(path: P, bookings: &[&Booking]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(bookings)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV : header `id,name,start,end,status`
pub fn export_bookings_csv<P: AsRef<Path>>(path: P, bookings: &[&Booking]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "name", "start", "end", "status"])?;
    for b in bookings {
        let id = b.id.to_string();
        let start = b.start.format("%Y-%m-%d").to_string();
        let end = b.end.format("%Y-%m-%d").to_string();
        w.write_record([
            id.as_str(),
            b.name.as_str(),
            start.as_str(),
            end.as_str(),
            b.status.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
