//! Time-of-day formatting for the 4-digit display.
//!
//! Pure logic: a sampled wall-clock time plus the display mode fully
//! determine the frame.  The refresh loop samples the clock and hands the
//! resulting frame to the multiplexer; nothing here touches hardware.

use serde::{Deserialize, Serialize};

/// Number of physical digits, left to right: tens-of-hour, ones-of-hour,
/// tens-of-minute, ones-of-minute.
pub const DIGIT_COUNT: usize = 4;

/// 12-hour or 24-hour display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockMode {
    Twelve,
    TwentyFour,
}

/// A validated hour/minute/second sample of the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeValue {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeValue {
    /// Construct a time value; `None` if any field is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
        })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn second(self) -> u8 {
        self.second
    }
}

/// One refresh cycle's worth of display content: a `(character, dot)` pair
/// per digit position.
pub type DisplayFrame = [(char, bool); DIGIT_COUNT];

/// Derive the four displayed characters and two dot flags from a time
/// sample.
///
/// - 12-hour mode: hour 0 shows as 12, 13–23 as 1–11; single-digit hours
///   get a leading space, not a leading zero.  The ones-of-minute dot
///   carries the pm flag.
/// - 24-hour mode: hour is always zero-padded and the pm dot stays unset.
/// - The ones-of-hour dot tracks seconds parity, giving the visible 1 Hz
///   heartbeat blink.
pub fn format_frame(time: TimeValue, mode: ClockMode) -> DisplayFrame {
    let pm = matches!(mode, ClockMode::Twelve) && time.hour >= 12;

    let (hour_tens, hour_ones) = match mode {
        ClockMode::TwentyFour => (ascii_digit(time.hour / 10), ascii_digit(time.hour % 10)),
        ClockMode::Twelve => {
            let hour = match time.hour % 12 {
                0 => 12,
                h => h,
            };
            let tens = if hour >= 10 { '1' } else { ' ' };
            (tens, ascii_digit(hour % 10))
        }
    };

    let seconds_dot = time.second % 2 == 1;

    [
        (hour_tens, false),
        (hour_ones, seconds_dot),
        (ascii_digit(time.minute / 10), false),
        (ascii_digit(time.minute % 10), pm),
    ]
}

fn ascii_digit(n: u8) -> char {
    debug_assert!(n < 10);
    (b'0' + n) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u8, m: u8, s: u8) -> TimeValue {
        TimeValue::new(h, m, s).unwrap()
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(TimeValue::new(24, 0, 0).is_none());
        assert!(TimeValue::new(0, 60, 0).is_none());
        assert!(TimeValue::new(0, 0, 60).is_none());
        assert!(TimeValue::new(23, 59, 59).is_some());
    }

    #[test]
    fn twelve_hour_conversion_edges() {
        // (hour, displayed tens/ones, pm)
        let cases = [
            (0, '1', '2', false),
            (9, ' ', '9', false),
            (11, '1', '1', false),
            (12, '1', '2', true),
            (13, ' ', '1', true),
            (23, '1', '1', true),
        ];
        for (hour, tens, ones, pm) in cases {
            let frame = format_frame(t(hour, 0, 0), ClockMode::Twelve);
            assert_eq!(frame[0].0, tens, "hour {hour} tens");
            assert_eq!(frame[1].0, ones, "hour {hour} ones");
            assert_eq!(frame[3].1, pm, "hour {hour} pm dot");
        }
    }

    #[test]
    fn twenty_four_hour_zero_padded_and_never_pm() {
        let frame = format_frame(t(0, 0, 0), ClockMode::TwentyFour);
        assert_eq!((frame[0].0, frame[1].0), ('0', '0'));
        for hour in 0..24 {
            let frame = format_frame(t(hour, 30, 0), ClockMode::TwentyFour);
            assert_eq!(frame[0].0, ascii_digit(hour / 10));
            assert_eq!(frame[1].0, ascii_digit(hour % 10));
            assert!(!frame[3].1, "pm dot must stay unset in 24-hour mode");
        }
    }

    #[test]
    fn seconds_parity_dot_toggles_at_one_hertz() {
        for second in 0..60 {
            let frame = format_frame(t(10, 20, second), ClockMode::TwentyFour);
            assert_eq!(frame[1].1, second % 2 == 1, "second {second}");
            // Parity blink lives on digit 1 only.
            assert!(!frame[0].1);
            assert!(!frame[2].1);
        }
    }

    #[test]
    fn formatter_is_deterministic() {
        let time = t(17, 42, 31);
        assert_eq!(
            format_frame(time, ClockMode::Twelve),
            format_frame(time, ClockMode::Twelve)
        );
    }

    #[test]
    fn morning_scenario_twelve_hour() {
        // 09:05:30, 12-hour: blank tens, even second, am.
        let frame = format_frame(t(9, 5, 30), ClockMode::Twelve);
        assert_eq!(
            frame,
            [(' ', false), ('9', false), ('0', false), ('5', false)]
        );
    }

    #[test]
    fn late_evening_scenario_twenty_four_hour() {
        // 23:59:45, 24-hour: odd second blinks the heartbeat dot.
        let frame = format_frame(t(23, 59, 45), ClockMode::TwentyFour);
        assert_eq!(
            frame,
            [('2', false), ('3', true), ('5', false), ('9', false)]
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::glyphs;
    use proptest::prelude::*;

    fn arb_time() -> impl Strategy<Value = TimeValue> {
        (0u8..24, 0u8..60, 0u8..60)
            .prop_map(|(h, m, s)| TimeValue::new(h, m, s).unwrap())
    }

    proptest! {
        #[test]
        fn every_formatted_character_is_encodable(time in arb_time(),
                                                  twelve in any::<bool>()) {
            let mode = if twelve { ClockMode::Twelve } else { ClockMode::TwentyFour };
            for (ch, _) in format_frame(time, mode) {
                prop_assert!(glyphs::encode(ch).is_ok(),
                    "formatter produced unencodable {ch:?} for {time:?}");
            }
        }

        #[test]
        fn heartbeat_dot_matches_seconds_parity(time in arb_time(),
                                                twelve in any::<bool>()) {
            let mode = if twelve { ClockMode::Twelve } else { ClockMode::TwentyFour };
            let frame = format_frame(time, mode);
            prop_assert_eq!(frame[1].1, time.second() % 2 == 1);
        }

        #[test]
        fn minute_digits_always_in_range(time in arb_time()) {
            let frame = format_frame(time, ClockMode::TwentyFour);
            prop_assert!(('0'..='5').contains(&frame[2].0));
            prop_assert!(('0'..='9').contains(&frame[3].0));
        }
    }
}
