//! Periodic sweeps: recurrence expansion and reminder dispatch. Two
//! independent timers with no mutual exclusion between them or with
//! command handling, matching the original pair of per-minute cron jobs.

use crate::gateway::{Notifier, SharedNotifier};
use crate::store::{SharedStore, StoreResult, TodoStore};
use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
use std::time::Duration;
use todobot_core::sweep;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// One recurrence pass: every recurring record due on `today` gets a copy
/// with the due date advanced one period. The source record is left
/// untouched, so it will expand again on the next pass if nothing moves it.
/// Returns the number of records created; any store failure aborts the
/// whole tick.
pub async fn recurrence_tick(store: &dyn TodoStore, today: NaiveDate) -> StoreResult<usize> {
    let due = store.recurring_due_on(today).await?;
    let mut created = 0;
    for todo in &due {
        if let Some(next) = sweep::next_occurrence(todo, today) {
            store.create(next).await?;
            created += 1;
        }
    }
    if created > 0 {
        tracing::info!(created, %today, "expanded recurring tasks");
    }
    Ok(created)
}

/// One reminder pass: every record due on `tomorrow` with a user id gets a
/// direct message. Re-sent on every pass, there is no de-duplication. A
/// failed send is logged and skipped; only a store failure aborts the tick.
pub async fn reminder_tick(
    store: &dyn TodoStore,
    notifier: &dyn Notifier,
    tomorrow: NaiveDate,
) -> StoreResult<usize> {
    let due = store.due_on(tomorrow).await?;
    let mut sent = 0;
    for todo in &due {
        let Some(user_id) = &todo.user_id else {
            continue;
        };
        let text = format!("Reminder: Your task \"{}\" is due tomorrow!", todo.item);
        match notifier.direct_message(user_id, &text).await {
            Ok(()) => {
                tracing::info!(user_id, item = %todo.item, "sent reminder");
                sent += 1;
            }
            Err(err) => {
                tracing::error!(
                    user_id,
                    error = %format!("{err:#}"),
                    "failed to send reminder"
                );
            }
        }
    }
    Ok(sent)
}

/// Spawn both sweep loops. Each tick failure is logged and the next tick
/// proceeds independently.
pub fn spawn_sweeps(
    store: SharedStore,
    notifier: SharedNotifier,
    every: Duration,
) -> Vec<JoinHandle<()>> {
    let recurrence = tokio::spawn({
        let store = store.clone();
        async move {
            let mut timer = tokio::time::interval(every);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            timer.tick().await; // consume the immediate first tick
            loop {
                timer.tick().await;
                let today = Utc::now().date_naive();
                if let Err(err) = recurrence_tick(store.as_ref(), today).await {
                    tracing::error!(error = %err, "recurrence sweep failed");
                }
            }
        }
    });

    let reminders = tokio::spawn(async move {
        let mut timer = tokio::time::interval(every);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        timer.tick().await;
        loop {
            timer.tick().await;
            let tomorrow = Utc::now().date_naive() + ChronoDuration::days(1);
            if let Err(err) = reminder_tick(store.as_ref(), notifier.as_ref(), tomorrow).await {
                tracing::error!(error = %err, "reminder sweep failed");
            }
        }
    });

    vec![recurrence, reminders]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
