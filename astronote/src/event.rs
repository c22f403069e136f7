//! Digest record types.
//!
//! Everything the digest returns is a plain serde-serializable value:
//! transit records, typed events and the per-body reports that make up a
//! [`DailyDigest`]. Records are created fresh per computation and never
//! mutated.

use serde::{Deserialize, Serialize};

use astronote_ephem::time::{midnight, CalendarDate, SECONDS_PER_DAY};
use astronote_ephem::HorizonError;

/// Calendar split of an engine date: six integer fields in UT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSplit {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateSplit {
    /// Split a Julian date into calendar fields, rounding fractional
    /// seconds up to the next whole second. The round-up happens on the
    /// Julian date itself so the carry propagates through every field.
    pub fn from_jd(jd: f64) -> Self {
        let mut day_start = midnight(jd);
        let mut secs = ((jd - day_start) * SECONDS_PER_DAY).ceil();
        if secs >= SECONDS_PER_DAY {
            day_start += 1.0;
            secs -= SECONDS_PER_DAY;
        }
        let cal = CalendarDate::from_jd(day_start);
        let secs = secs as u32;
        Self {
            year: cal.year,
            month: cal.month,
            day: cal.day,
            hour: secs / 3600,
            minute: (secs % 3600) / 60,
            second: secs % 60,
        }
    }
}

/// Direction of a horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitKind {
    Rise,
    Set,
}

/// Sentinel for a body that never crosses the horizon on the search day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Circumpolar {
    AlwaysUp,
    NeverUp,
}

impl From<HorizonError> for Circumpolar {
    fn from(err: HorizonError) -> Self {
        match err {
            HorizonError::AlwaysUp => Circumpolar::AlwaysUp,
            HorizonError::NeverUp => Circumpolar::NeverUp,
        }
    }
}

/// When a transit happens: a concrete time, or a circumpolar sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransitMoment {
    At(DateSplit),
    Circumpolar(Circumpolar),
}

/// One rise or set record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitTime {
    #[serde(rename = "type")]
    pub kind: TransitKind,
    pub time: TransitMoment,
}

impl TransitTime {
    pub fn at(kind: TransitKind, jd: f64) -> Self {
        Self {
            kind,
            time: TransitMoment::At(DateSplit::from_jd(jd)),
        }
    }

    pub fn circumpolar(kind: TransitKind, err: HorizonError) -> Self {
        Self {
            kind,
            time: TransitMoment::Circumpolar(err.into()),
        }
    }
}

/// Major lunar phase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

/// Lunar orbit extreme reached on the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Apsis {
    Perigee,
    Apogee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConjunctionKind {
    Inferior,
    Superior,
    Conjunction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElongationKind {
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolsticeKind {
    June,
    December,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquinoxKind {
    March,
    September,
}

/// Fixed peak date of a meteor shower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowerPeak {
    pub month: u32,
    pub day: u32,
}

/// The typed payload of an event, tagged with the event name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum EventDetail {
    Opposition {
        body: String,
    },
    Conjunction {
        body: String,
        #[serde(rename = "type")]
        kind: ConjunctionKind,
    },
    Elongation {
        body: String,
        #[serde(rename = "type")]
        kind: ElongationKind,
    },
    Separation {
        body1: String,
        body2: String,
        angle: f64,
    },
    MeteorShower {
        name: String,
        peak: ShowerPeak,
    },
    Solstice {
        #[serde(rename = "type")]
        kind: SolsticeKind,
    },
    Equinox {
        #[serde(rename = "type")]
        kind: EquinoxKind,
    },
}

/// One astronomical occurrence for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub highlight: bool,
    #[serde(flatten)]
    pub detail: EventDetail,
}

impl Event {
    pub fn new(highlight: bool, detail: EventDetail) -> Self {
        Self { highlight, detail }
    }
}

/// Lunar phase summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseReport {
    /// Illuminated percentage of the disk.
    pub percent: u8,
    /// Major phase name when the day lands on one.
    pub name: Option<MoonPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunReport {
    pub transits: Vec<TransitTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonReport {
    pub transits: Vec<TransitTime>,
    pub phase: PhaseReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apsis: Option<Apsis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetReport {
    pub name: String,
    pub transits: Vec<TransitTime>,
}

/// Everything computed for one date and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDigest {
    pub sun: SunReport,
    pub moon: MoonReport,
    pub planets: Vec<PlanetReport>,
    pub events: Vec<Event>,
}
