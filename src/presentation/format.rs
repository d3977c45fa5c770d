use crate::domain::{listing::Listing, mortgage::PaymentBreakdown};

/// Whole US dollars with thousands separators: `$5,729`.
///
/// Cents are rounded half away from zero. Non-finite amounts render as `—`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = (rounded.abs() as u128).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}", sign, grouped)
}

/// `$899,000 • 3 bd / 2 ba • 1420 sqft`
pub fn listing_summary(listing: &Listing) -> String {
    format!(
        "{} • {} bd / {} ba • {} sqft",
        format_currency(listing.price as f64),
        listing.beds,
        listing.baths,
        listing.sqft
    )
}

/// `$633 / sqft`, or `None` when the listing has no floor area
pub fn price_per_sqft_label(listing: &Listing) -> Option<String> {
    listing
        .price_per_sqft()
        .map(|per_sqft| format!("{} / sqft", format_currency(per_sqft)))
}

/// `P&I $4,665 + Tax $824 + HOA $120 + Ins $120`
pub fn breakdown_line(payment: &PaymentBreakdown) -> String {
    format!(
        "P&I {} + Tax {} + HOA {} + Ins {}",
        format_currency(payment.pi),
        format_currency(payment.tax),
        format_currency(payment.hoa),
        format_currency(payment.insurance)
    )
}

/// Comma-joined pros or cons, as shown on the result card
pub fn join_notes(notes: &[String]) -> String {
    notes.join(", ")
}
