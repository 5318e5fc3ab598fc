//! Badge labels and CSS classes.
//!
//! Live results and history entries share these maps so the same format or
//! intent always gets the same colour.

use serde::Serialize;

pub const FALLBACK_CLASS: &str = "bg-secondary";

/// A label plus the CSS class it is shown with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub class: &'static str,
}

impl Badge {
    fn new(label: Option<&str>, placeholder: &str, class: &'static str) -> Self {
        let label = label.filter(|l| !l.is_empty()).unwrap_or(placeholder);
        Self { label: label.to_owned(), class }
    }
}

#[must_use]
pub fn format_class(format: &str) -> &'static str {
    match format {
        "Email" => "bg-primary",
        "JSON" => "bg-warning text-dark",
        "PDF" => "bg-danger",
        _ => FALLBACK_CLASS,
    }
}

#[must_use]
pub fn intent_class(intent: &str) -> &'static str {
    match intent {
        "RFQ" => "bg-info",
        "Complaint" => "bg-danger",
        "Invoice" => "bg-success",
        "Regulation" => "bg-warning text-dark",
        "Fraud Risk" => "bg-dark",
        _ => FALLBACK_CLASS,
    }
}

#[must_use]
pub fn tone_class(tone: &str) -> &'static str {
    match tone {
        "polite" => "bg-success",
        "escalation" => "bg-warning text-dark",
        "threatening" => "bg-danger",
        "urgent" => "bg-info",
        _ => FALLBACK_CLASS,
    }
}

/// Shared by urgency and risk levels.
#[must_use]
pub fn level_class(level: &str) -> &'static str {
    match level {
        "high" => "bg-danger",
        "medium" => "bg-warning text-dark",
        "low" => "bg-success",
        _ => FALLBACK_CLASS,
    }
}

#[must_use]
pub fn format_badge(format: Option<&str>) -> Badge {
    Badge::new(format, "Unknown", format.map_or(FALLBACK_CLASS, format_class))
}

#[must_use]
pub fn intent_badge(intent: Option<&str>) -> Badge {
    Badge::new(intent, "Unknown", intent.map_or(FALLBACK_CLASS, intent_class))
}

#[must_use]
pub fn tone_badge(tone: Option<&str>) -> Badge {
    Badge::new(tone, "Unknown", tone.map_or(FALLBACK_CLASS, tone_class))
}

#[must_use]
pub fn level_badge(level: Option<&str>) -> Badge {
    Badge::new(level, "Unknown", level.map_or(FALLBACK_CLASS, level_class))
}

#[cfg(test)]
#[path = "badge_test.rs"]
mod tests;
