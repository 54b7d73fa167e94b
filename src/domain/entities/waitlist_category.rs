use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Audience segment a visitor picks in the waitlist form.
///
/// Stored values stay free text; this enum is only consulted when strict
/// category checking is switched on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum WaitlistCategory {
    #[default]
    WellnessWorker,
    Talent,
    Collaboration,
    Investor,
    Other,
}

impl WaitlistCategory {
    pub fn is_known(raw: &str) -> bool {
        raw.parse::<WaitlistCategory>().is_ok()
    }
}
