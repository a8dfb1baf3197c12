use std::io::{self, Stdout, Write};
use std::panic;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::render::{display_width, Frame};
use crate::types::{Palette, Style};

/// Raw-mode, alternate-screen terminal. Restores the terminal on drop and on panic.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the panic message is printed
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore();
            original_hook(panic_info);
        }));

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input, then drain whatever else is pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Paint a full frame.
    pub fn draw(&mut self, frame: &Frame, palette: &Palette) -> io::Result<()> {
        let (width, height) = terminal::size()?;

        queue!(
            self.stdout,
            cursor::Hide,
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(palette.background.into()),
            terminal::Clear(terminal::ClearType::All)
        )?;

        for (row, line) in frame.lines.iter().take(height as usize).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            let mut used = 0;
            for span in &line.spans {
                self.apply_style(&span.style, palette)?;
                queue!(self.stdout, Print(&span.text))?;
                used += display_width(&span.text);
            }
            queue!(
                self.stdout,
                SetAttribute(Attribute::Reset),
                SetBackgroundColor(palette.background.into()),
                Print(" ".repeat((width as usize).saturating_sub(used)))
            )?;
        }

        if let Some((col, row)) = frame.cursor {
            queue!(self.stdout, cursor::MoveTo(col, row), cursor::Show)?;
        }

        self.stdout.flush()
    }

    fn apply_style(&mut self, style: &Style, palette: &Palette) -> io::Result<()> {
        let mut fg = style.fg.unwrap_or(palette.foreground);
        let mut bg = style.bg.unwrap_or(palette.background);
        if style.reversed {
            std::mem::swap(&mut fg, &mut bg);
        }

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(fg.into()),
            SetBackgroundColor(bg.into())
        )?;
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        if style.underline {
            queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore();
    }
}

fn restore() -> io::Result<()> {
    execute!(
        io::stdout(),
        SetAttribute(Attribute::Reset),
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()
}
