use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use classcal_core::datetime;
use classcal_core::{date_for, DayOrderMap, ScheduleTable, SyncWindow};

use crate::config;
use crate::google::CalendarClient;

/// Show what a sync would do, without touching the calendar.
pub async fn run() -> Result<()> {
    let cfg = config::load_config()?;
    let today = datetime::today();

    let Some(orders) = super::fetch_orders(&cfg.api_url, today).await? else {
        println!("No valid day orders found. Nothing to sync.");
        return Ok(());
    };

    let client = CalendarClient::connect(&cfg.credentials, &cfg.calendar_id).await?;

    let table = match ScheduleTable::load(&cfg.schedule_file) {
        Ok(table) => Some(table),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    preview(&client, &orders, today, table.as_ref()).await;

    println!("\nRun `classcal sync` to apply these changes.");

    Ok(())
}

/// Print, per date in the window, the events a sync would delete and the
/// classes it would insert. Reads the calendar, never writes it; a failed
/// listing is reported and the remaining dates are still shown.
async fn preview(
    client: &CalendarClient,
    orders: &DayOrderMap,
    today: NaiveDate,
    table: Option<&ScheduleTable>,
) {
    let Some(window) = SyncWindow::from_orders(orders) else {
        return;
    };

    for day in window.first..=window.last {
        let date = date_for(today, day);
        let order = orders.get(&day);

        match order {
            None => println!("\n📅 {} (holiday)", date),
            Some(order) => println!("\n📅 {} (Day Order: {})", date, order),
        }

        match client.events_for_date(date).await {
            Ok(events) => {
                for event in &events {
                    println!(
                        "  {} {}",
                        "-".red(),
                        event.summary.as_deref().unwrap_or("Unknown event").red()
                    );
                }
            }
            Err(e) => eprintln!("Error listing events for {}: {:#}", date, e),
        }

        let Some(order) = order else {
            continue;
        };

        match table.and_then(|t| t.classes_for(order)) {
            Some(classes) => {
                for entry in classes {
                    println!(
                        "  {} {} {}",
                        "+".green(),
                        entry.subject.green(),
                        format!("{}-{}", entry.start_time, entry.end_time).dimmed()
                    );
                }
            }
            None if table.is_some() => {
                println!("  No schedule found for Day Order {}", order);
            }
            None => {
                println!("  {}", "No schedule table loaded".dimmed());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockito::{Matcher, Server, ServerGuard};

    const CALENDAR_PATH: &str = "/calendars/class%40group.calendar.google.com/events";

    fn orders(pairs: &[(u32, &str)]) -> DayOrderMap {
        pairs
            .iter()
            .map(|(day, order)| (*day, order.to_string()))
            .collect()
    }

    fn test_client(server: &ServerGuard) -> CalendarClient {
        CalendarClient::with_base(server.url(), "class@group.calendar.google.com")
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn table(contents: &str) -> ScheduleTable {
        serde_json::from_str(contents).unwrap()
    }

    #[tokio::test]
    async fn lists_every_date_without_mutating() {
        let mut server = Server::new_async().await;

        // Days 14, 15 (holiday) and 16 are each listed exactly once
        let lists = server
            .mock("GET", CALENDAR_PATH)
            .match_query(Matcher::Regex("timeMin=2025-03-1[456]".to_string()))
            .with_status(200)
            .with_body(r#"{"items": [{"id": "e-1", "summary": "Old DBMS"}]}"#)
            .expect(3)
            .create_async()
            .await;
        let posts = server
            .mock("POST", CALENDAR_PATH)
            .expect(0)
            .create_async()
            .await;
        let deletes = server
            .mock("DELETE", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = test_client(&server);
        let fetched = orders(&[(14, "3"), (16, "1")]);
        let schedule = table(
            r#"{"3": [{"subject": "DBMS", "start_time": "08:00", "end_time": "08:50"}]}"#,
        );

        preview(&client, &fetched, today(), Some(&schedule)).await;

        lists.assert_async().await;
        posts.assert_async().await;
        deletes.assert_async().await;
    }

    #[tokio::test]
    async fn listing_failure_does_not_stop_the_preview() {
        let mut server = Server::new_async().await;

        let list_day_14 = server
            .mock("GET", CALENDAR_PATH)
            .match_query(Matcher::UrlEncoded(
                "timeMin".to_string(),
                "2025-03-14T00:00:00+05:30".to_string(),
            ))
            .with_status(403)
            .with_body(r#"{"error": {"message": "forbidden"}}"#)
            .create_async()
            .await;
        let list_day_15 = server
            .mock("GET", CALENDAR_PATH)
            .match_query(Matcher::UrlEncoded(
                "timeMin".to_string(),
                "2025-03-15T00:00:00+05:30".to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"items": []}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let fetched = orders(&[(14, "3"), (15, "1")]);

        preview(&client, &fetched, today(), None).await;

        list_day_14.assert_async().await;
        list_day_15.assert_async().await;
    }
}
