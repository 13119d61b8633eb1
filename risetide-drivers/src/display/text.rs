//! Two-line text presenter
//!
//! Renders controller views onto a small character display (16x2 LCD
//! class) and forwards cues to a buzzer.

use core::fmt::Write;

use heapless::String;
use risetide_core::presentation::{Cue, IdleView, RunningView};
use risetide_core::state::Event;
use risetide_core::traits::{CueSink, LineDisplay, Presentation, PresentationError};

/// Formatting buffer, wider than any supported display
type Line = String<32>;

/// Presenter writing text views to a [`LineDisplay`]
pub struct TextPresenter<D, C> {
    display: D,
    cues: C,
}

impl<D: LineDisplay, C: CueSink> TextPresenter<D, C> {
    pub fn new(display: D, cues: C) -> Self {
        Self { display, cues }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn cues(&self) -> &C {
        &self.cues
    }

    /// Write both rows, truncated to the display width
    fn show(&mut self, top: &str, bottom: &str) -> Result<(), PresentationError> {
        self.display.write_line(0, fit::<D>(top))?;
        if D::ROWS > 1 {
            self.display.write_line(1, fit::<D>(bottom))?;
        }
        Ok(())
    }
}

/// Cut `text` to the display width
fn fit<D: LineDisplay>(text: &str) -> &str {
    let cols = D::COLS as usize;
    match text.char_indices().nth(cols) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn format_line(args: core::fmt::Arguments<'_>) -> Result<Line, PresentationError> {
    let mut line = Line::new();
    line.write_fmt(args)
        .map_err(|_| PresentationError::BufferOverflow)?;
    Ok(line)
}

/// Append `mm:ss`
fn write_clock(line: &mut Line, secs: u32) -> Result<(), PresentationError> {
    write!(line, "{:02}:{:02}", secs / 60, secs % 60)
        .map_err(|_| PresentationError::BufferOverflow)
}

/// Top row of the running view: phase and distance
fn running_status(view: &RunningView) -> Result<Line, PresentationError> {
    if view.distance_cm == 0 {
        format_line(format_args!("{:<8}d:--", view.phase.label()))
    } else {
        format_line(format_args!(
            "{:<8}d:{}cm",
            view.phase.label(),
            view.distance_cm
        ))
    }
}

/// Bottom row of the running view: cycle, then the hold countdown or the
/// time spent pumping so far
fn running_progress(view: &RunningView) -> Result<Line, PresentationError> {
    let mut line = format_line(format_args!("C{}/{} ", view.current_cycle(), view.target))?;
    match view.remaining_s() {
        Some(left) => {
            line.push_str("left ")
                .map_err(|_| PresentationError::BufferOverflow)?;
            write_clock(&mut line, left)?;
        }
        None => write_clock(&mut line, view.elapsed_ms / 1000)?,
    }
    Ok(line)
}

impl<D: LineDisplay, C: CueSink> Presentation for TextPresenter<D, C> {
    fn clear(&mut self) -> Result<(), PresentationError> {
        self.display.clear()
    }

    fn show_idle(&mut self, view: &IdleView) -> Result<(), PresentationError> {
        if view.finished {
            let count = format_line(format_args!("Cycles: {}", view.completed))?;
            return self.show("ALL DONE", &count);
        }

        let value = format_line(format_args!("{} {}", view.value, view.page.unit()))?;
        self.show(view.page.label(), &value)
    }

    fn show_running(&mut self, view: &RunningView) -> Result<(), PresentationError> {
        let status = running_status(view)?;
        let progress = running_progress(view)?;
        self.show(&status, &progress)
    }

    fn announce(&mut self, event: &Event) -> Result<(), PresentationError> {
        let detail = match event {
            Event::Started | Event::FinishAcknowledged => Line::new(),
            Event::StoppedByUser { phase, completed } => {
                format_line(format_args!("{} done:{}", phase.label(), completed))?
            }
            Event::PhaseChanged { to, .. } => format_line(format_args!("-> {}", to.label()))?,
            Event::AllCyclesDone { completed } => {
                format_line(format_args!("Cycles: {}", completed))?
            }
        };
        self.show(event.label(), &detail)
    }

    fn cue(&mut self, cue: Cue) -> Result<(), PresentationError> {
        self.cues.play(cue)
    }
}
