use std::{
    io::Write,
    sync::mpsc::{self, Receiver},
    time::Duration,
};

use anyhow::Context;
use libgame::controller::{Flow, GameEvent, Simulation, Snapshot};
use tracing::info;

use crate::{input::InputHost, renderer, ticker::TickerHost};

/// Drains `events` one at a time into `simulation`, repainting after each, until quit
/// or until every sender is gone.
pub fn event_loop<F>(
    simulation: &mut Simulation,
    events: &Receiver<GameEvent>,
    mut draw: F,
) -> anyhow::Result<()>
where
    F: FnMut(&Snapshot) -> anyhow::Result<()>,
{
    draw(&simulation.snapshot())?;

    for event in events {
        if simulation.handle(event) == Flow::Quit {
            break;
        }

        draw(&simulation.snapshot())?;
    }

    Ok(())
}

/// Runs one simulation on `out` and returns how many generations it reached.
pub fn run<W>(out: &mut W, interval: Duration, height: usize, width: usize) -> anyhow::Result<u64>
where
    W: Write,
{
    let (sender, receiver) = mpsc::channel();

    // The size source reports exactly once, before anything else is queued.
    sender
        .send(GameEvent::Resize { height, width })
        .context("Queueing board size")?;

    let ticker = TickerHost::start(interval, sender.clone());
    let input = InputHost::start(sender);

    let mut simulation = Simulation::new();
    let result = event_loop(&mut simulation, &receiver, |snapshot| {
        renderer::draw(out, snapshot).context("Drawing frame")
    });

    ticker.stop();
    input.stop();

    result?;

    info!(generation = simulation.generation(), "simulation ended");
    Ok(simulation.generation())
}

#[cfg(test)]
mod tests {
    use libgame::{
        board::TileState,
        controller::{Command, SimulationState},
        cursor::Direction,
    };

    use super::*;

    fn queue(events: &[GameEvent]) -> Receiver<GameEvent> {
        let (sender, receiver) = mpsc::channel();
        for event in events {
            sender.send(*event).unwrap();
        }
        receiver
    }

    #[test]
    fn draws_initial_frame_and_after_each_event() {
        let events = queue(&[
            GameEvent::Tick,
            GameEvent::Resize {
                height: 3,
                width: 3,
            },
            Command::Move(Direction::Right).into(),
        ]);
        let mut simulation = Simulation::new();
        let mut frames = Vec::new();

        event_loop(&mut simulation, &events, |snapshot| {
            frames.push((snapshot.state, snapshot.cursor.col));
            Ok(())
        })
        .unwrap();

        assert_eq!(
            frames,
            vec![
                (SimulationState::PreInit, 0),
                (SimulationState::PreInit, 0),
                (SimulationState::Stopped, 0),
                (SimulationState::Stopped, 1),
            ]
        );
    }

    #[test]
    fn quit_ends_loop_and_drops_later_events() {
        let events = queue(&[
            GameEvent::Resize {
                height: 5,
                width: 5,
            },
            Command::ToggleAlive.into(),
            Command::Run.into(),
            GameEvent::Tick,
            Command::Quit.into(),
            GameEvent::Tick,
            GameEvent::Tick,
        ]);
        let mut simulation = Simulation::new();
        let mut frames = 0;

        event_loop(&mut simulation, &events, |_| {
            frames += 1;
            Ok(())
        })
        .unwrap();

        assert!(simulation.has_quit());
        assert_eq!(simulation.generation(), 1);
        assert_eq!(frames, 5);
        assert_eq!(events.try_iter().count(), 2);
        assert_eq!(
            simulation.game().unwrap().board().tile((0, 0)),
            Some(&TileState::Dying)
        );
    }

    #[test]
    fn draw_failure_stops_loop() {
        let events = queue(&[GameEvent::Tick, GameEvent::Tick]);
        let mut simulation = Simulation::new();

        let result = event_loop(&mut simulation, &events, |_| anyhow::bail!("broken pipe"));

        assert!(result.is_err());
        assert_eq!(events.try_iter().count(), 2);
    }
}
