//! Fetching day orders from the timetable API.
//!
//! The API returns the academic calendar as months of day records. Only the
//! first month block is consulted; each record carries a day-of-month number
//! and a day-order label, with "-" marking days that have no order (weekends
//! and holidays).

use anyhow::{Context, Result};
use serde::Deserialize;

use classcal_core::DayOrderMap;

/// How many upcoming working days a fetch covers.
pub const FETCH_DAYS: usize = 5;

/// Top-level timetable API response.
#[derive(Debug, Deserialize)]
pub struct TimetableResponse {
    pub calendar: Vec<CalendarMonth>,
}

/// One month of the academic calendar. The API also carries a month name
/// and other metadata per block; only the day records matter here.
#[derive(Debug, Deserialize)]
pub struct CalendarMonth {
    pub days: Vec<DayRecord>,
}

/// One day as the API reports it.
#[derive(Debug, Deserialize)]
pub struct DayRecord {
    /// Day of month, as a decimal string
    pub date: String,
    #[serde(rename = "dayOrder")]
    pub day_order: String,
}

/// Fetch the day orders for the next [`FETCH_DAYS`] working days.
///
/// Returns Ok(None) when the API answers with a non-success status; the
/// caller treats that the same as an empty window. Network and decode
/// failures are real errors.
pub async fn fetch_day_orders(
    client: &reqwest::Client,
    api_url: &str,
    today: u32,
) -> Result<Option<DayOrderMap>> {
    let response = client
        .get(api_url)
        .send()
        .await
        .context("Timetable API request failed")?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let timetable: TimetableResponse = response
        .json()
        .await
        .context("Failed to parse timetable response")?;

    let month = timetable
        .calendar
        .first()
        .context("Timetable response contained no calendar months")?;

    Ok(Some(select_upcoming(&month.days, today)))
}

/// Pick the next [`FETCH_DAYS`] working days from a month's records.
///
/// Days before `today` are skipped, as are days whose order is "-" and
/// records whose date is not a number. Day numbers are compared
/// numerically, so records from a following month (which restart at 1)
/// never qualify.
pub fn select_upcoming(days: &[DayRecord], today: u32) -> DayOrderMap {
    let mut orders = DayOrderMap::new();

    for day in days {
        if orders.len() >= FETCH_DAYS {
            break;
        }

        let Ok(day_number) = day.date.parse::<u32>() else {
            continue;
        };

        if day_number >= today && day.day_order != "-" {
            orders.insert(day_number, day.day_order.clone());
        }
    }

    orders
}
