use cf_leaderboard::models::{FilterBand, Tier};

#[test]
fn test_tier_thresholds_are_inclusive_lower_bounds() {
    // At each threshold the tier flips exactly at the boundary
    assert_eq!(Tier::for_rating(3000), Tier::LegendaryGrandmaster);
    assert_eq!(Tier::for_rating(2999), Tier::InternationalGrandmaster);

    assert_eq!(Tier::for_rating(2600), Tier::InternationalGrandmaster);
    assert_eq!(Tier::for_rating(2599), Tier::Grandmaster);

    assert_eq!(Tier::for_rating(2400), Tier::Grandmaster);
    assert_eq!(Tier::for_rating(2399), Tier::InternationalMaster);

    assert_eq!(Tier::for_rating(2300), Tier::InternationalMaster);
    assert_eq!(Tier::for_rating(2299), Tier::Master);

    assert_eq!(Tier::for_rating(2100), Tier::Master);
    assert_eq!(Tier::for_rating(2099), Tier::CandidateMaster);

    assert_eq!(Tier::for_rating(1900), Tier::CandidateMaster);
    assert_eq!(Tier::for_rating(1899), Tier::Expert);

    assert_eq!(Tier::for_rating(1600), Tier::Expert);
    assert_eq!(Tier::for_rating(1599), Tier::Specialist);

    assert_eq!(Tier::for_rating(1400), Tier::Specialist);
    assert_eq!(Tier::for_rating(1399), Tier::Pupil);

    assert_eq!(Tier::for_rating(1200), Tier::Pupil);
    assert_eq!(Tier::for_rating(1199), Tier::Newbie);
}

#[test]
fn test_unrated_and_extreme_ratings() {
    // Unrated users carry rating 0 and land in the lowest tier
    assert_eq!(Tier::for_rating(0), Tier::Newbie);
    assert_eq!(Tier::for_rating(4000), Tier::LegendaryGrandmaster);
}

#[test]
fn test_tier_titles() {
    assert_eq!(Tier::for_rating(3000).title(), "Legendary Grandmaster");
    assert_eq!(Tier::for_rating(2100).title(), "Master");
    assert_eq!(Tier::for_rating(1650).title(), "Expert");
    assert_eq!(Tier::for_rating(800).title(), "Newbie");
}

#[test]
fn test_tier_css_classes() {
    assert_eq!(Tier::for_rating(3000).css_class(), "legendary-grandmaster");
    assert_eq!(Tier::for_rating(1900).css_class(), "candidate-master");
    assert_eq!(Tier::for_rating(1250).css_class(), "pupil");
    assert_eq!(Tier::for_rating(100).css_class(), "newbie");
}

#[test]
fn test_filter_band_membership() {
    // Expert band is open at the top
    assert!(FilterBand::Expert.matches(1600));
    assert!(FilterBand::Expert.matches(3500));
    assert!(!FilterBand::Expert.matches(1599));

    // Middle bands are half-open ranges
    assert!(FilterBand::Specialist.matches(1400));
    assert!(FilterBand::Specialist.matches(1599));
    assert!(!FilterBand::Specialist.matches(1600));
    assert!(!FilterBand::Specialist.matches(1399));

    assert!(FilterBand::Pupil.matches(1200));
    assert!(FilterBand::Pupil.matches(1399));
    assert!(!FilterBand::Pupil.matches(1400));
    assert!(!FilterBand::Pupil.matches(1199));

    assert!(FilterBand::Newbie.matches(1199));
    assert!(FilterBand::Newbie.matches(0));
    assert!(!FilterBand::Newbie.matches(1200));

    // All matches everything
    assert!(FilterBand::All.matches(0));
    assert!(FilterBand::All.matches(3500));
}

#[test]
fn test_filter_band_parses_from_query_values() {
    assert_eq!(
        serde_json::from_str::<FilterBand>("\"all\"").unwrap(),
        FilterBand::All
    );
    assert_eq!(
        serde_json::from_str::<FilterBand>("\"expert\"").unwrap(),
        FilterBand::Expert
    );
    assert_eq!(
        serde_json::from_str::<FilterBand>("\"newbie\"").unwrap(),
        FilterBand::Newbie
    );
    assert!(serde_json::from_str::<FilterBand>("\"grandmaster\"").is_err());

    assert_eq!(FilterBand::default(), FilterBand::All);
}

#[test]
fn test_filter_band_query_params_round_trip() {
    for band in [
        FilterBand::All,
        FilterBand::Expert,
        FilterBand::Specialist,
        FilterBand::Pupil,
        FilterBand::Newbie,
    ] {
        let parsed: FilterBand =
            serde_json::from_str(&format!("\"{}\"", band.as_param())).unwrap();
        assert_eq!(parsed, band);
    }
}
