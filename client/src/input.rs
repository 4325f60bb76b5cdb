use std::{
    sync::mpsc::{self, Sender, TryRecvError},
    thread,
    time::Duration,
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use libgame::{
    controller::{Command, GameEvent},
    cursor::Direction,
};
use tracing::{debug, error};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Char('q') => Command::Quit,

        KeyCode::Up | KeyCode::Char('k') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Move(Direction::Right),

        KeyCode::Enter | KeyCode::Char('m') => Command::ToggleAlive,
        KeyCode::Backspace | KeyCode::Char('u') => Command::ToggleDead,

        KeyCode::Char('r') => Command::Run,
        KeyCode::Char('s') => Command::Stop,
        KeyCode::Char('n') => Command::Step,
        KeyCode::Char('c') => Command::Clear,
        KeyCode::Char('x') => Command::Randomize,

        _ => return None,
    };

    Some(command)
}

/// Reads the terminal on its own thread and feeds commands into the event queue.
pub struct InputHost {
    stop_sender: Sender<()>,
}

impl InputHost {
    pub fn start(events: Sender<GameEvent>) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel();

        thread::spawn(move || {
            while let Err(TryRecvError::Empty) = stop_receiver.try_recv() {
                match next_command() {
                    Ok(Some(command)) => {
                        if events.send(command.into()).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        error!("reading terminal input: {e}");
                        // Nothing else can end the run without input.
                        let _ = events.send(Command::Quit.into());
                        break;
                    }
                }
            }

            debug!("input reader stopped");
        });

        Self { stop_sender }
    }

    pub fn stop(self) {
        let _ = self.stop_sender.send(());
    }
}

fn next_command() -> std::io::Result<Option<Command>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(command_for(&key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn movement_keys() {
        assert_eq!(
            command_for(&press(KeyCode::Up)),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            command_for(&press(KeyCode::Char('j'))),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            command_for(&press(KeyCode::Char('h'))),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            command_for(&press(KeyCode::Right)),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn editing_and_control_keys() {
        assert_eq!(
            command_for(&press(KeyCode::Enter)),
            Some(Command::ToggleAlive)
        );
        assert_eq!(
            command_for(&press(KeyCode::Char('u'))),
            Some(Command::ToggleDead)
        );
        assert_eq!(command_for(&press(KeyCode::Char('r'))), Some(Command::Run));
        assert_eq!(command_for(&press(KeyCode::Char('s'))), Some(Command::Stop));
        assert_eq!(command_for(&press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(&press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn ctrl_c_quits_but_c_clears() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(command_for(&ctrl_c), Some(Command::Quit));
        assert_eq!(command_for(&press(KeyCode::Char('c'))), Some(Command::Clear));
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = press(KeyCode::Char('r'));
        release.kind = KeyEventKind::Release;

        assert_eq!(command_for(&release), None);
    }
}
