use anyhow::Result;

use classcal_core::date_for;
use classcal_core::datetime;

use crate::config;

/// Print the upcoming day orders as the timetable API reports them.
pub async fn run() -> Result<()> {
    let api_url = config::api_url()?;
    let today = datetime::today();

    let Some(orders) = super::fetch_orders(&api_url, today).await? else {
        println!("No valid day orders found.");
        return Ok(());
    };

    for (day, order) in &orders {
        println!("{}  Day Order {}", date_for(today, *day), order);
    }

    Ok(())
}
