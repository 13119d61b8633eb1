//! Buzzer task
//!
//! Plays cues as pulse trains on a GPIO driving an active buzzer.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Timer;

use crate::channels::CUE;

/// Buzzer task - waits for cues and pulses the pin
#[embassy_executor::task]
pub async fn buzzer_task(mut pin: Output<'static>) {
    info!("Buzzer task started");
    pin.set_low();

    loop {
        let cue = CUE.wait().await;
        trace!("Cue: {}x{}ms", cue.count, cue.pulse_ms);

        let pulse = cue.pulse_ms as u64;
        for i in 0..cue.count {
            // Gap between pulses equals the pulse length
            if i > 0 {
                Timer::after_millis(pulse).await;
            }
            pin.set_high();
            Timer::after_millis(pulse).await;
            pin.set_low();
        }
    }
}
