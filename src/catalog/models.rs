/// A named offering shown in one of the catalogs.
///
/// `identifier` is the hover and overlay key. `display_label` is what the visitor
/// reads. They are the same text today but are kept apart so wording can change
/// without breaking the overlay association.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub identifier: &'static str,
    pub display_label: &'static str,
    pub sub_items: &'static [&'static str],
}

impl ServiceEntry {
    pub const fn new(label: &'static str) -> Self {
        Self {
            identifier: label,
            display_label: label,
            sub_items: &[],
        }
    }

    pub const fn with_sub_items(label: &'static str, sub_items: &'static [&'static str]) -> Self {
        Self {
            identifier: label,
            display_label: label,
            sub_items,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

/// Constant pixel displacement from a region's top-right corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayAnchor {
    pub margin_top_px: i32,
    pub margin_right_px: i32,
}

impl OverlayAnchor {
    pub fn style(&self) -> String {
        format!(
            "margin-top: {}px; margin-right: {}px;",
            self.margin_top_px, self.margin_right_px
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Services,
    Support,
}

/// One independently rendered catalog grouping: its columns of hoverable entries
/// and where its overlay is pinned.
#[derive(Debug, PartialEq, Eq)]
pub struct CatalogRegion {
    pub kind: RegionKind,
    pub section_id: &'static str,
    pub heading: &'static str,
    pub columns: &'static [&'static [ServiceEntry]],
    pub anchor: OverlayAnchor,
}

impl CatalogRegion {
    pub fn entries(&self) -> impl Iterator<Item = &'static ServiceEntry> + '_ {
        self.columns.iter().flat_map(|column| column.iter())
    }

    /// Membership test for the hover policy. Sub-items are not members.
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries().any(|entry| entry.identifier == identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LEFT: [ServiceEntry; 1] = [ServiceEntry::with_sub_items("Parent", &["Child A", "Child B"])];
    static RIGHT: [ServiceEntry; 2] = [ServiceEntry::new("One"), ServiceEntry::new("Two")];
    static REGION: CatalogRegion = CatalogRegion {
        kind: RegionKind::Services,
        section_id: "demo",
        heading: "Demo",
        columns: &[&LEFT, &RIGHT],
        anchor: OverlayAnchor { margin_top_px: 10, margin_right_px: -5 },
    };

    #[test]
    fn membership_covers_every_column_but_not_sub_items() {
        assert!(REGION.contains("Parent"));
        assert!(REGION.contains("Two"));
        assert!(!REGION.contains("Child A"));
        assert!(!REGION.contains(""));
        assert_eq!(REGION.entries().count(), 3);
    }

    #[test]
    fn anchor_renders_margins() {
        assert_eq!(REGION.anchor.style(), "margin-top: 10px; margin-right: -5px;");
    }
}
