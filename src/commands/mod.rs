pub mod orders;
pub mod status;
pub mod sync;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use classcal_core::DayOrderMap;

use crate::timetable;

/// Per-run tallies of calendar mutations.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApplyStats {
    pub created: usize,
    pub deleted: usize,
    pub failed: usize,
}

/// Fetch the upcoming day orders for `today`.
///
/// None means there is nothing to sync: the API answered with a non-success
/// status, or no upcoming day carries an order.
pub async fn fetch_orders(api_url: &str, today: NaiveDate) -> Result<Option<DayOrderMap>> {
    let client = reqwest::Client::new();

    let orders = timetable::fetch_day_orders(&client, api_url, today.day()).await?;
    Ok(orders.filter(|orders| !orders.is_empty()))
}
