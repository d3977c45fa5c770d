use homescout_wasm::domain::errors::ValidationError;
use homescout_wasm::domain::listing::{FilterCriteria, Listing, ListingFilter};
use homescout_wasm::infrastructure::sample_listings;
use quickcheck_macros::quickcheck;

const ADDRESS: &str = "123 Oak St, Sunnyvale, CA 94087";
const LOCATIONS: [&str; 7] = ["", "   ", "sunny", "SUNNYVALE", "Cupertino", "oak st", "Oak St, Sunnyvale"];

fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.value()).collect()
}

#[test]
fn cupertino_matches_only_cherry_lane() {
    let criteria = FilterCriteria::new("Cupertino", 0, 2_000_000, 0, 0);
    let matches = ListingFilter::new().filter(&sample_listings(), &criteria);
    assert_eq!(matches.len(), 1);
    assert!(matches[0].address.starts_with("22 Cherry Ln"));
}

#[test]
fn inverted_price_range_matches_nothing() {
    let criteria = FilterCriteria::new("", 1_000_000, 900_000, 0, 0);
    assert!(ListingFilter::new().filter(&sample_listings(), &criteria).is_empty());
    assert_eq!(
        criteria.validate(),
        Err(ValidationError::PriceRangeInverted { min_price: 1_000_000, max_price: 900_000 })
    );
}

#[test]
fn default_form_search_finds_sunnyvale_home() {
    let criteria = FilterCriteria::new("Sunnyvale, CA", 750_000, 1_600_000, 3, 2);
    let matches = ListingFilter::new().filter(&sample_listings(), &criteria);
    assert_eq!(ids(&matches), vec!["HS-001"]);
}

#[test]
fn location_is_case_insensitive() {
    let criteria = FilterCriteria::new("sAnTa ClArA", 0, u64::MAX, 0, 0);
    let matches = ListingFilter::new().filter(&sample_listings(), &criteria);
    assert_eq!(ids(&matches), vec!["HS-003"]);
}

#[test]
fn blank_location_matches_everything() {
    let filter = ListingFilter::new();
    assert_eq!(filter.count_matches(&sample_listings(), &FilterCriteria::any()), 5);
    let whitespace = FilterCriteria::new("  ", 0, u64::MAX, 0, 0);
    assert_eq!(filter.count_matches(&sample_listings(), &whitespace), 5);
}

#[test]
fn price_bounds_are_inclusive() {
    let exact = FilterCriteria::new("", 899_000, 899_000, 0, 0);
    let matches = ListingFilter::new().filter(&sample_listings(), &exact);
    assert_eq!(ids(&matches), vec!["HS-001", "HS-005"]);
}

#[test]
fn room_minimums_are_inclusive() {
    let criteria = FilterCriteria::new("", 0, u64::MAX, 4, 3);
    let matches = ListingFilter::new().filter(&sample_listings(), &criteria);
    assert_eq!(ids(&matches), vec!["HS-002"]);
}

#[quickcheck]
fn single_listing_matches_iff_every_predicate_holds(
    price: u32,
    beds: u8,
    baths: u8,
    min_price: u32,
    max_price: u32,
    min_beds: u8,
    min_baths: u8,
    location_pick: u8,
) -> bool {
    let location = LOCATIONS[location_pick as usize % LOCATIONS.len()];
    let listing = Listing::new("HS-Q", ADDRESS, price as u64).with_rooms(beds as u32, baths as u32);
    let criteria = FilterCriteria::new(
        location,
        min_price as u64,
        max_price as u64,
        min_beds as u32,
        min_baths as u32,
    );

    let location_ok = location.trim().is_empty()
        || ADDRESS.to_lowercase().contains(&location.to_lowercase());
    let expected = location_ok
        && price >= min_price
        && price <= max_price
        && beds >= min_beds
        && baths >= min_baths;

    let matched = !ListingFilter::new().filter(&[listing], &criteria).is_empty();
    matched == expected
}

#[quickcheck]
fn filter_preserves_input_order(prices: Vec<u32>, min_price: u32, max_price: u32) -> bool {
    let listings: Vec<Listing> = prices
        .iter()
        .enumerate()
        .map(|(i, price)| Listing::new(format!("{:05}", i).as_str(), ADDRESS, *price as u64))
        .collect();
    let criteria = FilterCriteria::new("", min_price as u64, max_price as u64, 0, 0);

    let matched = ListingFilter::new().filter(&listings, &criteria);
    let expected: Vec<&Listing> = listings.iter().filter(|l| criteria.matches(l)).collect();

    matched.iter().collect::<Vec<_>>() == expected
        && matched.windows(2).all(|w| w[0].id.value() < w[1].id.value())
}
