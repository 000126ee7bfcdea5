//! Challenge countdown.

use crate::interpreter::SharedSession;
use codecrt_core::session::OutputLine;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic task that advances the session's challenge timer.
///
/// Reveal lines produced by a timeout are appended to the session log and
/// forwarded on the channel so the front-end can print them immediately.
pub struct ChallengeClock;

impl ChallengeClock {
    pub fn spawn(
        session: SharedSession,
        period: Duration,
        tx: mpsc::UnboundedSender<Vec<OutputLine>>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if tx.is_closed() {
                    break;
                }
                let lines = {
                    let mut s = session.lock().await;
                    let lines = s.tick();
                    if !lines.is_empty() {
                        s.append_output(lines.iter().cloned());
                    }
                    lines
                };
                if lines.is_empty() {
                    continue;
                }
                tracing::info!("[Clock] Challenge timed out");
                if tx.send(lines).is_err() {
                    break;
                }
            }
        })
    }
}
