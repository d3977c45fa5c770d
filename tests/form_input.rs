use homescout_wasm::app::{
    FieldDraft, commit, fraction_to_percent, parse_decimal, parse_whole, percent_to_fraction,
};
use homescout_wasm::domain::listing::Listing;
use homescout_wasm::domain::mortgage::{LoanTerms, PaymentBreakdown, TermPreset};
use homescout_wasm::presentation::{breakdown_line, join_notes, listing_summary, price_per_sqft_label};
use homescout_wasm::infrastructure::sample_listings;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn blank_fields_read_as_zero() {
    assert_eq!(parse_whole(""), Some(0));
    assert_eq!(parse_whole("  "), Some(0));
    assert_eq!(parse_decimal(""), Some(0.0));
}

#[test]
fn garbage_is_rejected() {
    assert_eq!(parse_whole("3.5"), None);
    assert_eq!(parse_whole("-1"), None);
    assert_eq!(parse_decimal("abc"), None);
    assert_eq!(parse_decimal("inf"), None);
    assert_eq!(parse_decimal("NaN"), None);
}

#[test]
fn down_payment_percent_round_trips_for_display() {
    assert_eq!(percent_to_fraction("20"), Some(0.2));
    assert_eq!(fraction_to_percent(0.2), "20");
    assert_eq!(fraction_to_percent(0.125), "12.50");
}

#[test]
fn term_presets_parse_from_option_values() {
    let years: Vec<u32> = TermPreset::iter().map(|p| p.years()).collect();
    assert_eq!(years, vec![10, 15, 20, 30]);
    assert_eq!(TermPreset::from_str("30").unwrap(), TermPreset::Thirty);
    assert_eq!(TermPreset::Fifteen.to_string(), "15 years");
    assert!(TermPreset::from_str("25").is_err());
}

#[test]
fn card_text_matches_listing() {
    let oak = &sample_listings()[0];
    assert_eq!(listing_summary(oak), "$899,000 • 3 bd / 2 ba • 1420 sqft");
    assert_eq!(join_notes(&oak.pros), "Remodeled kitchen, Quiet street, Central AC");

    let payment = PaymentBreakdown {
        pi: 4664.72,
        tax: 824.08,
        hoa: 120.0,
        insurance: 120.0,
        ..Default::default()
    };
    assert_eq!(breakdown_line(&payment), "P&I $4,665 + Tax $824 + HOA $120 + Ins $120");
}

#[test]
fn rate_typed_one_key_at_a_time_keeps_every_keystroke() {
    let mut terms = LoanTerms::new(0.2, 6.0, 30, 1.1, 120.0);
    let mut rate = FieldDraft::new("6");

    for typed in ["", "6", "6.", "6.7", "6.75"] {
        let accepted = rate.edit(typed.to_string(), |raw| {
            commit(parse_decimal(raw), |r| terms.rate_pct = r)
        });
        assert!(accepted);
        assert_eq!(rate.text(), typed);
    }
    assert_eq!(terms.rate_pct, 6.75);
}

#[test]
fn down_payment_with_trailing_dot_stays_as_typed() {
    let mut terms = LoanTerms::new(0.2, 6.75, 30, 1.1, 120.0);
    let mut down = FieldDraft::new(fraction_to_percent(terms.down_pct));
    assert_eq!(down.text(), "20");

    down.edit("12.".to_string(), |raw| commit(percent_to_fraction(raw), |d| terms.down_pct = d));
    assert_eq!(down.text(), "12.");
    assert!((terms.down_pct - 0.12).abs() < 1e-12);

    down.edit("12.5".to_string(), |raw| commit(percent_to_fraction(raw), |d| terms.down_pct = d));
    assert_eq!(down.text(), "12.5");
    assert!((terms.down_pct - 0.125).abs() < 1e-12);
}

#[test]
fn unparsable_edit_is_flagged_and_keeps_last_good_value() {
    let mut tax = 1.1;
    let mut draft = FieldDraft::new("1.1");
    assert!(draft.is_accepted());

    assert!(!draft.edit("1.1x".to_string(), |raw| commit(parse_decimal(raw), |t| tax = t)));
    assert_eq!(draft.text(), "1.1x");
    assert!(!draft.is_accepted());
    assert_eq!(tax, 1.1);

    assert!(draft.edit("1.2".to_string(), |raw| commit(parse_decimal(raw), |t| tax = t)));
    assert!(draft.is_accepted());
    assert_eq!(tax, 1.2);
}

#[test]
fn card_shows_price_per_square_foot() {
    let listings = sample_listings();
    assert_eq!(price_per_sqft_label(&listings[0]).as_deref(), Some("$633 / sqft"));
    assert_eq!(price_per_sqft_label(&listings[2]).as_deref(), Some("$795 / sqft"));

    let lot = Listing::new("LOT-1", "Empty lot", 400_000);
    assert_eq!(lot.sqft, 0);
    assert_eq!(price_per_sqft_label(&lot), None);
}
