//! Rotating availability/activity phrases shown under the hero code panel.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Icon tag attached to a status phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    Code,
    Coffee,
    Learn,
    Opportunity,
}

impl StatusIcon {
    /// Glyph rendered inside the status pill.
    ///
    /// `Opportunity` has no dedicated glyph and shares the code one.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code | Self::Opportunity => "</>",
            Self::Coffee => "☕",
            Self::Learn => ">_",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusItem {
    pub text: &'static str,
    pub icon: StatusIcon,
    /// Marks the phrase the catalog was authored around; informational only.
    pub active: bool,
}

pub static STATUS_ITEMS: [StatusItem; 3] = [
    StatusItem {
        text: "Currently Developing Something Amazing",
        icon: StatusIcon::Code,
        active: true,
    },
    StatusItem {
        text: "Open For New Opportunities",
        icon: StatusIcon::Opportunity,
        active: false,
    },
    StatusItem {
        text: "Learning New Technologies",
        icon: StatusIcon::Learn,
        active: false,
    },
];

/// Look up a status by rotating index, wrapping past the end.
#[must_use]
pub fn status_at(index: usize) -> Option<&'static StatusItem> {
    if STATUS_ITEMS.is_empty() {
        return None;
    }
    STATUS_ITEMS.get(index % STATUS_ITEMS.len())
}
