//! Form and output models
//!
//! The estimator window reads its inputs from [`Form`] and writes results
//! into [`Outputs`]. Views only draw these; request handling only mutates
//! them, so both sides can be exercised without a window.

use crate::constants::{BATH_CHOICES, BHK_CHOICES, DEFAULT_HORIZON_MONTHS, PRICE_UNIT};
use crate::types::{CurrentPriceEstimate, FuturePriceQuery, FutureProjection, PropertyQuery};
use crate::utils::format_number;

/// Group of mutually exclusive toggles (radio semantics).
///
/// Members are stored in display order, so resolution order is stable.
#[derive(Debug, Clone)]
pub struct ChoiceGroup {
    pub name: &'static str,
    checked: Vec<bool>,
}

impl ChoiceGroup {
    pub fn new(name: &'static str, len: usize) -> Self {
        Self {
            name,
            checked: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_checked(&self, idx: usize) -> bool {
        self.checked.get(idx).copied().unwrap_or(false)
    }

    /// Activate one member, deactivating the rest. Out of range clears the group.
    pub fn select(&mut self, idx: usize) {
        for (i, checked) in self.checked.iter_mut().enumerate() {
            *checked = i == idx;
        }
    }

    /// 1-based position of the first active member, or -1 when none is active
    pub fn resolve_selected_index(&self) -> i32 {
        self.checked
            .iter()
            .position(|&c| c)
            .map(|pos| pos as i32 + 1)
            .unwrap_or(-1)
    }
}

/// Location dropdown: ordered options plus the selected one
#[derive(Debug, Clone, Default)]
pub struct LocationSelect {
    options: Vec<String>,
    selected: usize,
}

impl LocationSelect {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, idx: usize) {
        if idx < self.options.len() {
            self.selected = idx;
        }
    }

    /// Drop every existing option, then append `names` in order
    pub fn replace_options(&mut self, names: Vec<String>) {
        self.options.clear();
        self.options.extend(names);
        self.selected = 0;
    }

    /// Selected option text, empty when there are no options yet
    pub fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Everything the user can type or pick
#[derive(Debug, Clone)]
pub struct Form {
    pub sqft: String,
    pub bhk: ChoiceGroup,
    pub bath: ChoiceGroup,
    pub locations: LocationSelect,
    pub horizon: String,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            sqft: String::new(),
            bhk: ChoiceGroup::new("uiBHK", BHK_CHOICES),
            bath: ChoiceGroup::new("uiBathrooms", BATH_CHOICES),
            locations: LocationSelect::default(),
            horizon: String::new(),
        }
    }
}

impl Form {
    pub fn property_query(&self) -> PropertyQuery {
        PropertyQuery {
            total_sqft: parse_leading_float(&self.sqft),
            bhk: self.bhk.resolve_selected_index(),
            bath: self.bath.resolve_selected_index(),
            location: self.locations.value().to_string(),
        }
    }

    /// Horizon as typed, or the default months when left blank
    pub fn horizon_text(&self) -> String {
        if self.horizon.trim().is_empty() {
            DEFAULT_HORIZON_MONTHS.to_string()
        } else {
            self.horizon.clone()
        }
    }

    pub fn future_query(&self) -> FuturePriceQuery {
        FuturePriceQuery {
            property: self.property_query(),
            horizon_months: parse_leading_int(&self.horizon_text()),
        }
    }
}

/// Rendered result regions. Each one is replaced wholesale, never appended to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outputs {
    pub estimated_price: Option<String>,
    pub future_current: Option<String>,
    pub future_price: Option<String>,
    pub risk: Option<String>,
    pub recommendation: Option<String>,
}

impl Outputs {
    pub fn show_current(&mut self, estimate: &CurrentPriceEstimate) {
        self.estimated_price = Some(format!(
            "{} {}",
            format_number(estimate.estimated_price),
            PRICE_UNIT
        ));
    }

    pub fn show_future(&mut self, horizon: &str, projection: &FutureProjection) {
        self.future_current = Some(format!(
            "Current: ₹ {}",
            format_number(projection.current_price)
        ));
        self.future_price = Some(format!(
            "In {} months: ₹ {}",
            horizon,
            format_number(projection.future_price)
        ));
        self.risk = Some(format!(
            "Risk: {} ({}%)",
            projection.risk,
            format_number(projection.expected_growth_percent)
        ));
        self.recommendation = Some(format!("Action: {}", projection.recommendation));
    }

    pub fn has_future(&self) -> bool {
        self.future_current.is_some()
            || self.future_price.is_some()
            || self.risk.is_some()
            || self.recommendation.is_some()
    }
}

/// Parse the longest numeric prefix, ignoring leading whitespace.
/// Returns NaN when there is none, so the value is still sent.
pub fn parse_leading_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }
    // Exponent only counts when followed by at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Parse a leading integer, ignoring leading whitespace (`"18.5"` gives 18)
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse().ok()
}
