//! Raw (undebounced) button sampling.
//!
//! Lines are active-low with internal pull-ups: an electrically low line
//! reads as a pressed button. The poll interval is the only filtering.

use embedded_hal::digital::InputPin;

use super::{ButtonMask, LogicalButton, BUTTON_COUNT};

/// Read access to the line bound to each logical button.
pub trait InputLines {
    /// Returns `true` when the line of `button` is driven low.
    fn is_low(&mut self, button: LogicalButton) -> bool;
}

/// Pins ordered like [`LogicalButton::ALL`].
///
/// A failing read is reported as released.
impl<P: InputPin> InputLines for [P; BUTTON_COUNT] {
    fn is_low(&mut self, button: LogicalButton) -> bool {
        self[button.bit() as usize].is_low().unwrap_or(false)
    }
}

/// Packs the state of all input lines into a [`ButtonMask`].
pub struct Sampler<L> {
    lines: L,
}

impl<L: InputLines> Sampler<L> {
    pub fn new(lines: L) -> Self {
        Self { lines }
    }

    /// Read every line once and return the pressed buttons.
    pub fn sample(&mut self) -> ButtonMask {
        LogicalButton::ALL
            .iter()
            .filter(|&&button| self.lines.is_low(button))
            .fold(ButtonMask::EMPTY, |mask, &button| mask.with(button))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Pin that reports a fixed electrical level.
    #[derive(Clone, Copy)]
    struct FixedPin {
        low: bool,
    }

    impl ErrorType for FixedPin {
        type Error = Infallible;
    }

    impl InputPin for FixedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.low)
        }
    }

    /// Pin whose reads always fail.
    struct BrokenPin;

    #[derive(Debug)]
    struct ReadError;

    impl embedded_hal::digital::Error for ReadError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl ErrorType for BrokenPin {
        type Error = ReadError;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ReadError)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ReadError)
        }
    }

    fn released_pins() -> [FixedPin; BUTTON_COUNT] {
        [FixedPin { low: false }; BUTTON_COUNT]
    }

    #[test]
    fn all_lines_high_means_nothing_pressed() {
        let mut sampler = Sampler::new(released_pins());
        assert!(sampler.sample().is_empty());
    }

    #[test]
    fn low_line_sets_its_bit() {
        for button in LogicalButton::ALL {
            let mut pins = released_pins();
            pins[button.bit() as usize].low = true;
            let mask = Sampler::new(pins).sample();
            assert_eq!(mask.bits(), button.mask());
        }
    }

    #[test]
    fn all_lines_low_sets_fifteen_bits() {
        let mut sampler = Sampler::new([FixedPin { low: true }; BUTTON_COUNT]);
        assert_eq!(sampler.sample().bits(), 0x7FFF);
    }

    #[test]
    fn read_errors_count_as_released() {
        let pins: [BrokenPin; BUTTON_COUNT] = core::array::from_fn(|_| BrokenPin);
        let mut sampler = Sampler::new(pins);
        assert!(sampler.sample().is_empty());
    }
}
