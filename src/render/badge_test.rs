use super::*;

#[test]
fn format_classes_match_known_tags() {
    assert_eq!(format_class("Email"), "bg-primary");
    assert_eq!(format_class("JSON"), "bg-warning text-dark");
    assert_eq!(format_class("PDF"), "bg-danger");
    assert_eq!(format_class("XML"), FALLBACK_CLASS);
}

#[test]
fn intent_classes_cover_known_intents() {
    assert_eq!(intent_class("RFQ"), "bg-info");
    assert_eq!(intent_class("Complaint"), "bg-danger");
    assert_eq!(intent_class("Invoice"), "bg-success");
    assert_eq!(intent_class("Regulation"), "bg-warning text-dark");
    assert_eq!(intent_class("Fraud Risk"), "bg-dark");
    assert_eq!(intent_class("Policy Review"), FALLBACK_CLASS);
}

#[test]
fn tone_and_level_fall_back_to_secondary() {
    assert_eq!(tone_class("threatening"), "bg-danger");
    assert_eq!(tone_class("neutral"), FALLBACK_CLASS);
    assert_eq!(tone_class("angry"), FALLBACK_CLASS);
    assert_eq!(level_class("medium"), "bg-warning text-dark");
    assert_eq!(level_class("HIGH"), FALLBACK_CLASS);
}

#[test]
fn missing_or_empty_labels_become_unknown() {
    let badge = format_badge(None);
    assert_eq!(badge.label, "Unknown");
    assert_eq!(badge.class, FALLBACK_CLASS);

    let badge = level_badge(Some(""));
    assert_eq!(badge.label, "Unknown");

    let badge = intent_badge(Some("Invoice"));
    assert_eq!(badge, Badge { label: "Invoice".into(), class: "bg-success" });
}
