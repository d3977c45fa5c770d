use std::str::FromStr;

use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{HomeSearchService, ListingQuote},
    domain::{
        logging::LogComponent,
        mortgage::TermPreset,
    },
    global_state::{has_searched, loan_terms, run_search, search_criteria, search_error, search_results},
    infrastructure::MockListingProvider,
    presentation::{breakdown_line, format_currency, join_notes, listing_summary, price_per_sqft_label},
};

/// Parse a whole-number form field. Blank input counts as zero.
pub fn parse_whole(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

/// Parse a decimal form field. Blank input counts as zero; non-finite and
/// unparsable values are rejected.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Down payment entered as a percentage (`20`) to the fraction the
/// calculator expects (`0.2`).
pub fn percent_to_fraction(input: &str) -> Option<f64> {
    parse_decimal(input).map(|pct| pct / 100.0)
}

/// Percentage shown in the down payment field for a stored fraction.
pub fn fraction_to_percent(fraction: f64) -> String {
    let pct = fraction * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{}", pct.round())
    } else {
        format!("{:.2}", pct)
    }
}

/// Hand a parsed form value to `apply`. Returns whether the input parsed.
pub fn commit<T>(parsed: Option<T>, apply: impl FnOnce(T)) -> bool {
    parsed.map(apply).is_some()
}

/// Text of one form input exactly as typed, and whether the last edit
/// parsed.
///
/// Form state only receives parsed values, so an in-progress `6.` or an
/// unparsable entry stays on screen instead of being rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    text: String,
    accepted: bool,
}

impl FieldDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), accepted: true }
    }

    /// Keep `text` and let `apply` commit it; returns `apply`'s verdict.
    pub fn edit(&mut self, text: String, apply: impl FnOnce(&str) -> bool) -> bool {
        self.accepted = apply(&text);
        self.text = text;
        self.accepted
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// 🏡 HomeScout root component
#[component]
pub fn App() -> impl IntoView {
    let service = HomeSearchService::new(MockListingProvider::new());

    view! {
        <style>
            {r#"
            .homescout-app {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                background: #f8fafc;
                color: #1e293b;
                min-height: 100vh;
            }
            .header {
                background: white;
                border-bottom: 1px solid #e2e8f0;
                padding: 16px;
            }
            .header h1 { font-size: 24px; font-weight: 700; margin: 0; }
            .header p { font-size: 14px; color: #475569; margin: 4px 0 0; }
            .main { max-width: 896px; margin: 0 auto; padding: 16px; }
            .panel {
                background: white;
                border-radius: 16px;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                padding: 16px;
                margin-bottom: 24px;
            }
            .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
            .field label { display: block; font-size: 14px; font-weight: 500; }
            .field input.invalid { border-color: #b91c1c; }
            .field input, .field select {
                margin-top: 4px;
                width: 100%;
                border: 1px solid #cbd5e1;
                border-radius: 12px;
                padding: 6px 10px;
                box-sizing: border-box;
            }
            .search-button {
                margin-top: 16px;
                width: 100%;
                border: none;
                border-radius: 12px;
                background: #0f172a;
                color: white;
                padding: 8px 0;
                font-weight: 600;
                cursor: pointer;
            }
            .search-button:hover { background: #1e293b; }
            .card { border: 1px solid #e2e8f0; }
            .card h3 { font-weight: 600; margin: 0 0 4px; }
            .muted { font-size: 14px; color: #64748b; }
            .notes { font-size: 14px; color: #475569; }
            .error { color: #b91c1c; font-size: 14px; }
            "#}
        </style>
        <div class="homescout-app">
            <Header/>
            <main class="main">
                <SearchForm on_search=move || run_search(&service)/>
                <ResultsList/>
            </main>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"HomeScout"</h1>
            <p>"AI real estate aide (demo)"</p>
        </header>
    }
}

/// Labeled text input owning its typed text.
///
/// `on_input` gets every edit and reports whether it parsed; rejected edits
/// are flagged but left as typed.
#[component]
fn Field(
    label: &'static str,
    #[prop(default = "text")] inputmode: &'static str,
    initial: String,
    #[prop(into)] on_input: Callback<String, bool>,
) -> impl IntoView {
    let draft = create_rw_signal(FieldDraft::new(initial));

    view! {
        <div class="field">
            <label>{label}</label>
            <input
                type="text"
                inputmode=inputmode
                class:invalid=move || !draft.with(FieldDraft::is_accepted)
                prop:value=move || draft.with(|d| d.text().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    draft.update(|d| {
                        d.edit(text, |raw| on_input.call(raw.to_string()));
                    });
                }
            />
        </div>
    }
}

#[component]
fn SearchForm<F>(on_search: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    let criteria = search_criteria();
    let terms = loan_terms();

    view! {
        <section class="panel">
            <h2>"Search Filters"</h2>
            <div class="grid">
                <Field
                    label="Location"
                    initial=criteria.with_untracked(|c| c.location.clone())
                    on_input=move |v: String| {
                        criteria.update(|c| c.location = v);
                        true
                    }
                />
                <Field
                    label="Beds (min)"
                    inputmode="numeric"
                    initial=criteria.with_untracked(|c| c.min_beds.to_string())
                    on_input=move |v: String| {
                        let beds = parse_whole(&v).and_then(|b| u32::try_from(b).ok());
                        commit(beds, |beds| criteria.update(|c| c.min_beds = beds))
                    }
                />
                <Field
                    label="Baths (min)"
                    inputmode="numeric"
                    initial=criteria.with_untracked(|c| c.min_baths.to_string())
                    on_input=move |v: String| {
                        let baths = parse_whole(&v).and_then(|b| u32::try_from(b).ok());
                        commit(baths, |baths| criteria.update(|c| c.min_baths = baths))
                    }
                />
                <Field
                    label="Min Price"
                    inputmode="numeric"
                    initial=criteria.with_untracked(|c| c.min_price.to_string())
                    on_input=move |v: String| {
                        commit(parse_whole(&v), |price| criteria.update(|c| c.min_price = price))
                    }
                />
                <Field
                    label="Max Price"
                    inputmode="numeric"
                    initial=criteria.with_untracked(|c| c.max_price.to_string())
                    on_input=move |v: String| {
                        commit(parse_whole(&v), |price| criteria.update(|c| c.max_price = price))
                    }
                />
            </div>

            <h2>"Loan Assumptions"</h2>
            <div class="grid">
                <Field
                    label="Down Payment (%)"
                    inputmode="decimal"
                    initial=terms.with_untracked(|t| fraction_to_percent(t.down_pct))
                    on_input=move |v: String| {
                        commit(percent_to_fraction(&v), |down| terms.update(|t| t.down_pct = down))
                    }
                />
                <Field
                    label="Interest Rate (%)"
                    inputmode="decimal"
                    initial=terms.with_untracked(|t| t.rate_pct.to_string())
                    on_input=move |v: String| {
                        commit(parse_decimal(&v), |rate| terms.update(|t| t.rate_pct = rate))
                    }
                />
                <div class="field">
                    <label>"Term"</label>
                    <select on:change=move |ev| {
                        match TermPreset::from_str(&event_target_value(&ev)) {
                            Ok(preset) => terms.update(|t| t.term_years = preset.years()),
                            Err(_) => {
                                crate::log_warn!(
                                    LogComponent::Presentation("SearchForm"),
                                    "Unknown term option {}",
                                    event_target_value(&ev)
                                );
                            }
                        }
                    }>
                        {TermPreset::iter()
                            .map(|preset| view! {
                                <option
                                    value=preset.as_ref().to_string()
                                    prop:selected=move || terms.with(|t| t.term_years == preset.years())
                                >
                                    {preset.to_string()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <Field
                    label="Property Tax (%/yr)"
                    inputmode="decimal"
                    initial=terms.with_untracked(|t| t.tax_pct.to_string())
                    on_input=move |v: String| {
                        commit(parse_decimal(&v), |tax| terms.update(|t| t.tax_pct = tax))
                    }
                />
                <Field
                    label="Insurance ($/mo)"
                    inputmode="decimal"
                    initial=terms.with_untracked(|t| t.insurance.to_string())
                    on_input=move |v: String| {
                        commit(parse_decimal(&v), |insurance| terms.update(|t| t.insurance = insurance))
                    }
                />
            </div>
            <button class="search-button" on:click=move |_| on_search()>
                "Search Homes"
            </button>
        </section>
    }
}

#[component]
fn ResultsList() -> impl IntoView {
    let results = search_results();
    let searched = has_searched();
    let error = search_error();

    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <Show when=move || searched.get() && error.with(Option::is_none) && results.with(Vec::is_empty)>
            <p class="muted">"No homes match these filters."</p>
        </Show>
        <section>
            <For
                each=move || results.get()
                key=|quote: &ListingQuote| quote.listing.id.clone()
                children=move |quote: ListingQuote| view! { <ListingCard quote=quote/> }
            />
        </section>
    }
}

#[component]
fn ListingCard(quote: ListingQuote) -> impl IntoView {
    let ListingQuote { listing, payment } = quote;

    view! {
        <div class="panel card">
            <h3>{listing.address.clone()}</h3>
            <p>{listing_summary(&listing)}</p>
            {price_per_sqft_label(&listing).map(|label| view! { <p class="muted">{label}</p> })}
            <p class="muted">"Est. Monthly: " {format_currency(payment.total)}</p>
            <p class="muted">{breakdown_line(&payment)}</p>
            <p class="notes">"Pros: " {join_notes(&listing.pros)}</p>
            <p class="notes">"Cons: " {join_notes(&listing.cons)}</p>
        </div>
    }
}
