//! Console display and buzzer cue sink

use defmt::*;
use heapless::String;

use risetide_core::presentation::Cue;
use risetide_core::traits::{CueSink, LineDisplay, PresentationError};

use crate::channels::CUE;

const ROWS: usize = 2;
const COLS: usize = 16;

/// 16x2 "display" printed over defmt
///
/// Only rows whose text changed are printed.
pub struct ConsoleDisplay {
    rows: [String<COLS>; ROWS],
}

impl ConsoleDisplay {
    pub const fn new() -> Self {
        Self {
            rows: [String::new(), String::new()],
        }
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDisplay for ConsoleDisplay {
    const ROWS: u8 = ROWS as u8;
    const COLS: u8 = COLS as u8;

    fn clear(&mut self) -> Result<(), PresentationError> {
        for row in &mut self.rows {
            row.clear();
        }
        debug!("LCD clear");
        Ok(())
    }

    fn write_line(&mut self, row: u8, text: &str) -> Result<(), PresentationError> {
        let slot = self
            .rows
            .get_mut(row as usize)
            .ok_or(PresentationError::BufferOverflow)?;
        if slot.as_str() == text {
            return Ok(());
        }

        slot.clear();
        slot.push_str(text)
            .map_err(|_| PresentationError::BufferOverflow)?;
        info!("LCD{}: {}", row, slot.as_str());
        Ok(())
    }
}

/// Hands cues to the buzzer task
pub struct BuzzerCues;

impl CueSink for BuzzerCues {
    fn play(&mut self, cue: Cue) -> Result<(), PresentationError> {
        CUE.signal(cue);
        Ok(())
    }
}
