//! Markdown rendering of an itinerary.

use std::io::{self, Write};

use itinerant_core::{DayPlan, Itinerary, Period, TimeWindow, Visit};

/// Write `itinerary` as a Markdown schedule.
pub(crate) fn write_markdown(writer: &mut dyn Write, itinerary: &Itinerary) -> io::Result<()> {
    let meta = &itinerary.trip_metadata;
    writeln!(writer, "# {}", meta.destination)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{} days for {} travellers. Estimated cost {} of {}.",
        meta.duration,
        meta.preferences.party_size,
        meta.budget.estimated_total,
        meta.budget.trip_ceiling,
    )?;
    for day in &itinerary.days {
        writeln!(writer)?;
        write_day(writer, itinerary, day)?;
    }
    Ok(())
}

fn write_day(writer: &mut dyn Write, itinerary: &Itinerary, day: &DayPlan) -> io::Result<()> {
    write!(writer, "## Day {}: {}", day.day_number, day.title)?;
    if let Some(city) = &day.city {
        write!(writer, " ({city})")?;
    }
    writeln!(writer)?;
    if let Some(date) = itinerary.date_of(day.day_number) {
        writeln!(writer)?;
        writeln!(writer, "{}", date.format("%A %-d %B %Y"))?;
    }
    for window in &day.time_slots {
        writeln!(writer)?;
        write_window(writer, window)?;
    }
    Ok(())
}

fn write_window(writer: &mut dyn Write, window: &TimeWindow) -> io::Result<()> {
    writeln!(
        writer,
        "### {} ({}-{})",
        period_heading(window.period),
        window.start_time,
        window.end_time
    )?;
    writeln!(writer)?;
    if window.is_empty() {
        return writeln!(writer, "_No affordable visits._");
    }
    for visit in &window.activities {
        write_visit(writer, visit)?;
    }
    Ok(())
}

fn write_visit(writer: &mut dyn Write, visit: &Visit) -> io::Result<()> {
    let mark = if visit.completed { "x" } else { " " };
    writeln!(
        writer,
        "- [{mark}] **{}** ({}, {}, {})",
        visit.name, visit.category, visit.duration, visit.cost_range
    )
}

const fn period_heading(period: Period) -> &'static str {
    match period {
        Period::Morning => "Morning",
        Period::Afternoon => "Afternoon",
        Period::Evening => "Evening",
        Period::Night => "Night",
    }
}
