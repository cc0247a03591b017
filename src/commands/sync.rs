use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;

use classcal_core::datetime;
use classcal_core::{date_for, ClassEntry, DayOrderMap, ScheduleTable, SyncWindow};

use crate::config;
use crate::google::{class_event, CalendarClient};

use super::ApplyStats;

pub async fn run() -> Result<()> {
    let cfg = config::load_config()?;
    let today = datetime::today();

    let Some(orders) = super::fetch_orders(&cfg.api_url, today).await? else {
        println!("No valid day orders found. Skipping calendar update.");
        return Ok(());
    };

    let client = CalendarClient::connect(&cfg.credentials, &cfg.calendar_id).await?;

    let stats = reconcile(&client, &orders, today, &cfg.schedule_file).await;

    println!(
        "\nTotal: {} created, {} deleted, {} failed",
        stats.created, stats.deleted, stats.failed
    );

    Ok(())
}

/// Bring the calendar into agreement with the fetched day orders: clear
/// every holiday in the window, then rewrite each scheduled day. Every
/// failure past this point is logged and counted, never fatal.
async fn reconcile(
    client: &CalendarClient,
    orders: &DayOrderMap,
    today: NaiveDate,
    schedule_file: &Path,
) -> ApplyStats {
    let mut stats = ApplyStats::default();

    let Some(window) = SyncWindow::from_orders(orders) else {
        return stats;
    };
    let holidays = window.holidays(orders);

    println!("\nProcessing schedule updates...");
    println!("Date range: {} to {}", window.first, window.last);
    println!("Found {} holidays in the range", holidays.len());

    // Holidays are cleared before the schedule table is consulted, so a
    // broken table still leaves holiday dates empty.
    for day in &holidays {
        let date = date_for(today, *day);
        println!("\nProcessing holiday on {}", date);
        clear_date(client, date, &mut stats).await;
    }

    let table = match ScheduleTable::load(schedule_file) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {}", e);
            println!("Skipping class events; holidays were still cleared.");
            return stats;
        }
    };

    for (day, order) in orders {
        let date = date_for(today, *day);
        println!("\nProcessing regular day {} (Day Order: {})", date, order);

        clear_date(client, date, &mut stats).await;

        match table.classes_for(order) {
            Some(classes) => {
                for entry in classes {
                    add_event(client, entry, date, order, &mut stats).await;
                }
            }
            None => println!("No schedule found for Day Order {}", order),
        }
    }

    stats
}

/// Delete every event on one date. Failures are logged and counted; the
/// date's remaining events are still attempted.
async fn clear_date(client: &CalendarClient, date: NaiveDate, stats: &mut ApplyStats) {
    println!("Checking for events to delete on {}", date);

    let events = match client.events_for_date(date).await {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Error listing events for {}: {:#}", date, e);
            stats.failed += 1;
            return;
        }
    };

    let mut deleted = 0;
    for event in &events {
        match client.delete_event(&event.id).await {
            Ok(()) => {
                deleted += 1;
                println!(
                    "Deleted event: {} on {}",
                    event.summary.as_deref().unwrap_or("Unknown event"),
                    date
                );
            }
            Err(e) => {
                eprintln!("Error deleting event: {:#}", e);
                stats.failed += 1;
            }
        }
    }

    if deleted > 0 {
        println!("Deleted {} events for {}", deleted, date);
    } else {
        println!("No events found to delete for {}", date);
    }

    stats.deleted += deleted;
}

/// Insert one class event. Failures are logged and counted; the day's
/// remaining classes are still attempted.
async fn add_event(
    client: &CalendarClient,
    entry: &ClassEntry,
    date: NaiveDate,
    order: &str,
    stats: &mut ApplyStats,
) {
    let event = match class_event(entry, date, order) {
        Ok(event) => event,
        Err(e) => {
            eprintln!("Error adding event: {:#}", e);
            stats.failed += 1;
            return;
        }
    };

    match client.insert_event(&event).await {
        Ok(()) => {
            println!("Added event: {} on {}", entry.subject, date);
            stats.created += 1;
        }
        Err(e) => {
            eprintln!("Error adding event: {:#}", e);
            stats.failed += 1;
        }
    }
}
