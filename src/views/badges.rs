//! Badge colouring for enumerated backend fields.
//!
//! Every view goes through these functions; none of them branch on raw
//! strings in templates.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Primary,
    Secondary,
}

impl Tone {
    pub fn name(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Primary => "primary",
            Tone::Secondary => "secondary",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Success => "badge badge-success",
            Tone::Warning => "badge badge-warning",
            Tone::Danger => "badge badge-danger",
            Tone::Primary => "badge badge-primary",
            Tone::Secondary => "badge badge-secondary",
        }
    }

    pub fn pill_class(self) -> &'static str {
        match self {
            Tone::Success => "pill pill-success",
            Tone::Warning => "pill pill-warning",
            Tone::Danger => "pill pill-danger",
            Tone::Primary => "pill pill-primary",
            Tone::Secondary => "pill pill-secondary",
        }
    }
}

pub const IN_STOCK: &str = "In Stock";

pub fn stock_tone(status: Option<&str>) -> Tone {
    match status {
        Some(IN_STOCK) => Tone::Success,
        _ => Tone::Warning,
    }
}

pub fn opportunity_tone(value: Option<&str>) -> Tone {
    match value {
        Some("high") => Tone::Success,
        Some("medium") => Tone::Warning,
        Some("low") => Tone::Danger,
        _ => Tone::Danger,
    }
}

pub fn active_tone(active: bool) -> Tone {
    if active { Tone::Success } else { Tone::Danger }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_status_mapping() {
        assert_eq!(stock_tone(Some("In Stock")), Tone::Success);
        assert_eq!(stock_tone(Some("Out of Stock")), Tone::Warning);
        assert_eq!(stock_tone(Some("in stock")), Tone::Warning);
        assert_eq!(stock_tone(Some("")), Tone::Warning);
        assert_eq!(stock_tone(None), Tone::Warning);
    }

    #[test]
    fn opportunity_mapping_has_danger_default() {
        assert_eq!(opportunity_tone(Some("high")), Tone::Success);
        assert_eq!(opportunity_tone(Some("medium")), Tone::Warning);
        assert_eq!(opportunity_tone(Some("low")), Tone::Danger);
        assert_eq!(opportunity_tone(Some("HIGH")), Tone::Danger);
        assert_eq!(opportunity_tone(Some("unknown")), Tone::Danger);
        assert_eq!(opportunity_tone(None), Tone::Danger);
    }

    #[test]
    fn classes_follow_tone() {
        assert_eq!(stock_tone(Some("In Stock")).pill_class(), "pill pill-success");
        assert_eq!(active_tone(false).badge_class(), "badge badge-danger");
    }
}
