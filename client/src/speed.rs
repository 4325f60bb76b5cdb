use std::{io::Write, time::Duration};

use anyhow::Context;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::input::is_ctrl_c;

const ITEM_PADDING: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum TickSpeed {
    #[strum(to_string = "1s")]
    Second,
    #[strum(to_string = ".5s")]
    Half,
    #[strum(to_string = ".25s")]
    Quarter,
    #[strum(to_string = ".125s")]
    Eighth,
    #[strum(to_string = ".1s")]
    Tenth,
    #[strum(to_string = ".05s")]
    Twentieth,
}

impl TickSpeed {
    pub fn millis(self) -> u64 {
        match self {
            TickSpeed::Second => 1000,
            TickSpeed::Half => 500,
            TickSpeed::Quarter => 250,
            TickSpeed::Eighth => 125,
            TickSpeed::Tenth => 100,
            TickSpeed::Twentieth => 50,
        }
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(self.millis())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Pending,
    Selected(TickSpeed),
    Quit,
}

#[derive(Debug, Default)]
pub struct SpeedMenu {
    highlighted: usize,
}

impl SpeedMenu {
    pub fn highlighted(&self) -> TickSpeed {
        // highlighted is kept in range by handle_key
        TickSpeed::iter()
            .nth(self.highlighted)
            .unwrap_or(TickSpeed::Second)
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> MenuOutcome {
        if key.kind != KeyEventKind::Press {
            return MenuOutcome::Pending;
        }

        if is_ctrl_c(key) {
            return MenuOutcome::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => MenuOutcome::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.highlighted = self.highlighted.saturating_sub(1);
                MenuOutcome::Pending
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.highlighted + 1 < TickSpeed::iter().len() {
                    self.highlighted += 1;
                }
                MenuOutcome::Pending
            }
            KeyCode::Enter | KeyCode::Char(' ') => MenuOutcome::Selected(self.highlighted()),
            _ => MenuOutcome::Pending,
        }
    }

    pub fn draw<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        queue!(
            out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print("What Speed Would You Like the Game to run at?")
        )?;

        for (index, speed) in TickSpeed::iter().enumerate() {
            let color = if index == self.highlighted {
                Color::Rgb { r: 0, g: 0, b: 255 }
            } else {
                Color::White
            };

            queue!(
                out,
                MoveTo(0, index as u16 + 1),
                SetForegroundColor(color),
                Print(ITEM_PADDING),
                Print(speed),
                ResetColor
            )?;
        }

        out.flush()
    }
}

/// Shows the menu until the user picks a speed (`Some`) or backs out (`None`).
pub fn choose<W>(out: &mut W) -> anyhow::Result<Option<TickSpeed>>
where
    W: Write,
{
    let mut menu = SpeedMenu::default();

    loop {
        menu.draw(out).context("Drawing speed menu")?;

        let Event::Key(key) = event::read().context("Reading speed menu input")? else {
            continue;
        };

        match menu.handle_key(&key) {
            MenuOutcome::Pending => {}
            MenuOutcome::Selected(speed) => return Ok(Some(speed)),
            MenuOutcome::Quit => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(menu: &mut SpeedMenu, code: KeyCode) -> MenuOutcome {
        menu.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn speeds_in_menu_order() {
        let millis: Vec<_> = TickSpeed::iter().map(TickSpeed::millis).collect();

        assert_eq!(millis, vec![1000, 500, 250, 125, 100, 50]);
        assert_eq!(TickSpeed::Eighth.to_string(), ".125s");
    }

    #[test]
    fn enter_selects_highlighted() {
        let mut menu = SpeedMenu::default();

        assert_eq!(press(&mut menu, KeyCode::Down), MenuOutcome::Pending);
        assert_eq!(press(&mut menu, KeyCode::Char('j')), MenuOutcome::Pending);
        assert_eq!(
            press(&mut menu, KeyCode::Enter),
            MenuOutcome::Selected(TickSpeed::Quarter)
        );
    }

    #[test]
    fn highlight_is_clamped() {
        let mut menu = SpeedMenu::default();

        press(&mut menu, KeyCode::Up);
        assert_eq!(menu.highlighted(), TickSpeed::Second);

        for _ in 0..20 {
            press(&mut menu, KeyCode::Down);
        }
        assert_eq!(menu.highlighted(), TickSpeed::Twentieth);
        assert_eq!(
            press(&mut menu, KeyCode::Char(' ')),
            MenuOutcome::Selected(TickSpeed::Twentieth)
        );
    }

    #[test]
    fn quitting_selects_nothing() {
        let mut menu = SpeedMenu::default();

        assert_eq!(press(&mut menu, KeyCode::Char('q')), MenuOutcome::Quit);
        assert_eq!(press(&mut menu, KeyCode::Esc), MenuOutcome::Quit);
        assert_eq!(
            menu.handle_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            MenuOutcome::Quit
        );
    }

    #[test]
    fn draw_lists_every_speed() {
        let mut out = Vec::new();
        SpeedMenu::default().draw(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);

        for speed in TickSpeed::iter() {
            assert!(text.contains(&speed.to_string()));
        }
    }
}
