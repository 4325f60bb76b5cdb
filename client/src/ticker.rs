use std::{
    sync::mpsc::{self, Sender, TryRecvError},
    thread,
    time::Duration,
};

use libgame::controller::GameEvent;
use tracing::debug;

/// The heartbeat: a background thread that sends one [`GameEvent::Tick`] per interval,
/// whatever the simulation is doing with them.
///
/// It stops when told to, when the host is dropped, or when nobody is listening any more.
/// A sleep that is already in progress is abandoned rather than waited for.
pub struct TickerHost {
    stop_sender: Sender<()>,
}

impl TickerHost {
    pub fn start(interval: Duration, events: Sender<GameEvent>) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel();

        thread::spawn(move || {
            let mut beats: u64 = 0;

            loop {
                spin_sleep::sleep(interval);

                if !matches!(stop_receiver.try_recv(), Err(TryRecvError::Empty)) {
                    break;
                }

                if events.send(GameEvent::Tick).is_err() {
                    break;
                }

                beats += 1;
            }

            debug!(beats, "heartbeat stopped");
        });

        debug!(?interval, "heartbeat started");
        Self { stop_sender }
    }

    pub fn stop(self) {
        // The thread may already be gone, which is just as good.
        let _ = self.stop_sender.send(());
    }
}
