use serde::Deserialize;

/// Codeforces rating bands, inclusive lower bounds, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    LegendaryGrandmaster,
    InternationalGrandmaster,
    Grandmaster,
    InternationalMaster,
    Master,
    CandidateMaster,
    Expert,
    Specialist,
    Pupil,
    Newbie,
}

impl Tier {
    pub fn for_rating(rating: i64) -> Self {
        if rating >= 3000 {
            Tier::LegendaryGrandmaster
        } else if rating >= 2600 {
            Tier::InternationalGrandmaster
        } else if rating >= 2400 {
            Tier::Grandmaster
        } else if rating >= 2300 {
            Tier::InternationalMaster
        } else if rating >= 2100 {
            Tier::Master
        } else if rating >= 1900 {
            Tier::CandidateMaster
        } else if rating >= 1600 {
            Tier::Expert
        } else if rating >= 1400 {
            Tier::Specialist
        } else if rating >= 1200 {
            Tier::Pupil
        } else {
            Tier::Newbie
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tier::LegendaryGrandmaster => "Legendary Grandmaster",
            Tier::InternationalGrandmaster => "International Grandmaster",
            Tier::Grandmaster => "Grandmaster",
            Tier::InternationalMaster => "International Master",
            Tier::Master => "Master",
            Tier::CandidateMaster => "Candidate Master",
            Tier::Expert => "Expert",
            Tier::Specialist => "Specialist",
            Tier::Pupil => "Pupil",
            Tier::Newbie => "Newbie",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Tier::LegendaryGrandmaster => "legendary-grandmaster",
            Tier::InternationalGrandmaster => "international-grandmaster",
            Tier::Grandmaster => "grandmaster",
            Tier::InternationalMaster => "international-master",
            Tier::Master => "master",
            Tier::CandidateMaster => "candidate-master",
            Tier::Expert => "expert",
            Tier::Specialist => "specialist",
            Tier::Pupil => "pupil",
            Tier::Newbie => "newbie",
        }
    }
}

/// The page filter. Membership is decided on the record's rating field,
/// never on rendered text, and filtering never re-fetches or re-sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterBand {
    #[default]
    All,
    Expert,
    Specialist,
    Pupil,
    Newbie,
}

impl FilterBand {
    pub fn matches(&self, rating: i64) -> bool {
        match self {
            FilterBand::All => true,
            FilterBand::Expert => rating >= 1600,
            FilterBand::Specialist => (1400..1600).contains(&rating),
            FilterBand::Pupil => (1200..1400).contains(&rating),
            FilterBand::Newbie => rating < 1200,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            FilterBand::All => "all",
            FilterBand::Expert => "expert",
            FilterBand::Specialist => "specialist",
            FilterBand::Pupil => "pupil",
            FilterBand::Newbie => "newbie",
        }
    }
}
