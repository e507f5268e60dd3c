//! Turning a time of day into the words to light.
//!
//! [`words_for`] is a pure function of [`ClockTime`].  Its minute rules are
//! additive: every band that contains the minute contributes its word, and
//! together they produce phrases such as *zwänzg ab* (twenty past) or
//! *viertel vor* (quarter to).
//!
//! The hour word is always the hour on the clock; there is no look-ahead to
//! the next hour for *vor* or *halbi*.

use std::fmt;

/// A word the clock face can light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Word {
    Es,
    Isch,
    Punkt,
    Foif,
    Zae,
    Viertel,
    Zwaenzg,
    Ab,
    Vor,
    Halbi,
    Eis,
    Zwei,
    Drue,
    Vieri,
    Foifi,
    Saechsi,
    Siebni,
    Achti,
    Nueni,
    Zaeni,
    Elfi,
    Zwoelfi,
}

impl Word {
    /// Every word, in clock-face order.
    pub const ALL: [Word; 22] = [
        Word::Es,
        Word::Isch,
        Word::Punkt,
        Word::Foif,
        Word::Zae,
        Word::Viertel,
        Word::Zwaenzg,
        Word::Ab,
        Word::Vor,
        Word::Halbi,
        Word::Eis,
        Word::Zwei,
        Word::Drue,
        Word::Vieri,
        Word::Foifi,
        Word::Saechsi,
        Word::Siebni,
        Word::Achti,
        Word::Nueni,
        Word::Zaeni,
        Word::Elfi,
        Word::Zwoelfi,
    ];

    /// The hour words, index 0 being one o'clock.
    const HOURS: [Word; 12] = [
        Word::Eis,
        Word::Zwei,
        Word::Drue,
        Word::Vieri,
        Word::Foifi,
        Word::Saechsi,
        Word::Siebni,
        Word::Achti,
        Word::Nueni,
        Word::Zaeni,
        Word::Elfi,
        Word::Zwoelfi,
    ];

    /// The word for `hour` (1–12).
    pub fn hour(hour: u8) -> Option<Word> {
        let i = usize::from(hour).checked_sub(1)?;
        Self::HOURS.get(i).copied()
    }

    /// The letters as they appear on the clock face.
    pub fn text(self) -> &'static str {
        match self {
            Word::Es => "ES",
            Word::Isch => "ISCH",
            Word::Punkt => "PUNKT",
            Word::Foif => "FOIF",
            Word::Zae => "ZÄ",
            Word::Viertel => "VIERTEL",
            Word::Zwaenzg => "ZWÄNZG",
            Word::Ab => "AB",
            Word::Vor => "VOR",
            Word::Halbi => "HALBI",
            Word::Eis => "EIS",
            Word::Zwei => "ZWEI",
            Word::Drue => "DRÜ",
            Word::Vieri => "VIERI",
            Word::Foifi => "FOIFI",
            Word::Saechsi => "SÄCHSI",
            Word::Siebni => "SIEBNI",
            Word::Achti => "ACHTI",
            Word::Nueni => "NÜNI",
            Word::Zaeni => "ZÄNI",
            Word::Elfi => "ELFI",
            Word::Zwoelfi => "ZWÖLFI",
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Errors from constructing a [`ClockTime`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("hour {0} is out of range")]
    Hour(u32),
    #[error("minute {0} is out of range")]
    Minute(u32),
    #[error("cannot parse {0:?} as HH:MM")]
    Parse(String),
}

/// A time as the clock face shows it: hour 1–12 and minute 0–59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build from a 12-hour value.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if !(1..=12).contains(&hour) {
            return Err(TimeError::Hour(hour.into()));
        }
        if minute >= 60 {
            return Err(TimeError::Minute(minute.into()));
        }
        Ok(Self { hour, minute })
    }

    /// Build from a 24-hour wall-clock value.
    ///
    /// Midnight and noon both become twelve.
    pub fn from_tick(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour >= 24 {
            return Err(TimeError::Hour(hour));
        }
        if minute >= 60 {
            return Err(TimeError::Minute(minute));
        }
        let hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        // Both values were range-checked above.
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// The lit words joined by spaces, e.g. `"ES ISCH ZWÖLFI FOIF AB"`.
    pub fn phrase(self) -> String {
        words_for(self)
            .iter()
            .map(|w| w.text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// The words to light for `time`, in rule order.
pub fn words_for(time: ClockTime) -> Vec<Word> {
    let m = time.minute;
    let mut words = vec![Word::Es, Word::Isch];

    if let Some(hour) = Word::hour(time.hour) {
        words.push(hour);
    }

    if m == 0 {
        words.push(Word::Punkt);
    }
    if (5..10).contains(&m) {
        words.push(Word::Foif);
    }
    if (10..15).contains(&m) {
        words.push(Word::Zae);
    }
    if (15..20).contains(&m) {
        words.push(Word::Viertel);
    }
    if (20..25).contains(&m) {
        words.push(Word::Zwaenzg);
    }
    if (5..25).contains(&m) {
        words.push(Word::Ab);
    }
    if (25..40).contains(&m) {
        words.push(Word::Halbi);
    }
    if (25..30).contains(&m) {
        words.push(Word::Vor);
    }
    if (35..40).contains(&m) {
        words.push(Word::Ab);
    }
    if (40..45).contains(&m) {
        words.push(Word::Zwaenzg);
    }
    if (45..50).contains(&m) {
        words.push(Word::Viertel);
    }
    if (50..55).contains(&m) {
        words.push(Word::Zae);
    }
    if m >= 55 && m != 0 {
        words.push(Word::Foif);
    }
    if m > 40 && m != 0 {
        words.push(Word::Vor);
    }

    words
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn words(hour: u32, minute: u32) -> Vec<&'static str> {
        let time = ClockTime::from_tick(hour, minute).unwrap();
        words_for(time).into_iter().map(Word::text).collect()
    }

    #[test]
    fn one_o_clock() {
        assert_eq!(words(1, 0), ["ES", "ISCH", "EIS", "PUNKT"]);
    }

    #[test]
    fn seven_past_twelve() {
        assert_eq!(words(12, 7), ["ES", "ISCH", "ZWÖLFI", "FOIF", "AB"]);
    }

    #[test]
    fn twenty_seven_past_six() {
        assert_eq!(words(6, 27), ["ES", "ISCH", "SÄCHSI", "HALBI", "VOR"]);
    }

    #[test]
    fn two_to_four() {
        assert_eq!(words(3, 58), ["ES", "ISCH", "DRÜ", "FOIF", "VOR"]);
    }

    #[test]
    fn midnight_is_twelve() {
        assert_eq!(words(0, 0), ["ES", "ISCH", "ZWÖLFI", "PUNKT"]);
    }

    #[test]
    fn afternoon_reduces_to_twelve_hour() {
        assert_eq!(words(15, 0), ["ES", "ISCH", "DRÜ", "PUNKT"]);
        assert_eq!(words(23, 0)[2], "ELFI");
    }

    #[test]
    fn overlapping_bands_all_fire() {
        assert_eq!(words(2, 12), ["ES", "ISCH", "ZWEI", "ZÄ", "AB"]);
        assert_eq!(words(2, 17), ["ES", "ISCH", "ZWEI", "VIERTEL", "AB"]);
        assert_eq!(words(2, 22), ["ES", "ISCH", "ZWEI", "ZWÄNZG", "AB"]);
        assert_eq!(words(2, 30), ["ES", "ISCH", "ZWEI", "HALBI"]);
        assert_eq!(words(2, 36), ["ES", "ISCH", "ZWEI", "HALBI", "AB"]);
        assert_eq!(words(2, 40), ["ES", "ISCH", "ZWEI", "ZWÄNZG"]);
        assert_eq!(words(2, 42), ["ES", "ISCH", "ZWEI", "ZWÄNZG", "VOR"]);
        assert_eq!(words(2, 47), ["ES", "ISCH", "ZWEI", "VIERTEL", "VOR"]);
        assert_eq!(words(2, 51), ["ES", "ISCH", "ZWEI", "ZÄ", "VOR"]);
    }

    #[test]
    fn between_full_hour_and_five_only_hour() {
        for m in 1..5 {
            assert_eq!(words(9, m), ["ES", "ISCH", "NÜNI"]);
        }
    }

    #[test]
    fn output_is_deterministic() {
        for h in 0..24 {
            for m in 0..60 {
                let t = ClockTime::from_tick(h, m).unwrap();
                assert_eq!(words_for(t), words_for(t), "{h}:{m}");
            }
        }
    }

    #[test]
    fn exactly_one_hour_word() {
        for h in 1..=12u8 {
            for m in 0..60 {
                let t = ClockTime::new(h, m).unwrap();
                let hours = words_for(t)
                    .into_iter()
                    .filter(|w| Word::HOURS.contains(w))
                    .collect::<Vec<_>>();
                assert_eq!(hours, vec![Word::hour(h).unwrap()], "{t}");
            }
        }
    }

    #[test]
    fn hour_lookup_bounds() {
        assert_eq!(Word::hour(0), None);
        assert_eq!(Word::hour(1), Some(Word::Eis));
        assert_eq!(Word::hour(12), Some(Word::Zwoelfi));
        assert_eq!(Word::hour(13), None);
    }

    #[test]
    fn tick_validation() {
        assert_eq!(ClockTime::from_tick(24, 0), Err(TimeError::Hour(24)));
        assert_eq!(ClockTime::from_tick(1, 60), Err(TimeError::Minute(60)));
        assert_eq!(ClockTime::new(0, 0), Err(TimeError::Hour(0)));
        assert_eq!(ClockTime::from_tick(12, 5).unwrap().hour(), 12);
    }

    #[test]
    fn display_and_phrase() {
        let t = ClockTime::from_tick(0, 7).unwrap();
        assert_eq!(t.to_string(), "12:07");
        assert_eq!(t.phrase(), "ES ISCH ZWÖLFI FOIF AB");
    }
}
