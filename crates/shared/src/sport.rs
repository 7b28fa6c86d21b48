use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Sports offered at the facility, labelled the way the contact form and the
/// delivered email show them.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
)]
pub enum Sport {
    #[strum(serialize = "Kick-Boxing")]
    KickBoxing,
    #[strum(serialize = "Table Tennis")]
    TableTennis,
    Football,
    Cricket,
    Silambam,
    Archery,
}

impl Sport {
    pub fn description(&self) -> &'static str {
        match self {
            Sport::KickBoxing => "High-intensity combat sport",
            Sport::TableTennis => "Fast-paced indoor sport",
            Sport::Football => "The beautiful game",
            Sport::Cricket => "Gentleman's game",
            Sport::Silambam => "Traditional martial art",
            Sport::Archery => "Precision & focus",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Sport::KickBoxing => "🥊",
            Sport::TableTennis => "🏓",
            Sport::Football => "⚽",
            Sport::Cricket => "🏏",
            Sport::Silambam => "🥋",
            Sport::Archery => "🏹",
        }
    }
}
