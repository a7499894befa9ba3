use log::debug;

use crate::catalog::models::{CatalogRegion, OverlayAnchor, OverlayDescriptor};
use crate::catalog::overlays::OverlayTable;

/// What a region should draw for the current hover value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayPlacement {
    pub identifier: &'static str,
    pub descriptor: &'static OverlayDescriptor,
    pub anchor: OverlayAnchor,
}

/// Each region filters the shared hover slot by its own membership, so one region never
/// reacts to the other's entries. The anchor is the region's, not the hovered element's.
pub fn resolve_overlay(
    hovered: Option<&str>,
    region: &CatalogRegion,
    table: &'static OverlayTable,
) -> Option<OverlayPlacement> {
    let hovered = hovered?;
    let entry = region.entries().find(|entry| entry.identifier == hovered)?;
    let Some(descriptor) = table.lookup(entry.identifier) else {
        debug!("no overlay for `{}` in {}", entry.identifier, region.section_id);
        return None;
    };
    Some(OverlayPlacement {
        identifier: entry.identifier,
        descriptor,
        anchor: region.anchor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{RegionKind, ServiceEntry};
    use crate::catalog::regions::{regions, SERVICE_CATALOG, SUPPORT_CATALOG};
    use crate::hover::mediator::{HoverAction, HoverState};
    use std::rc::Rc;
    use yew::functional::Reducible;
    use yew::AttrValue;

    fn visible(hovered: Option<&str>) -> Vec<(RegionKind, OverlayPlacement)> {
        regions()
            .into_iter()
            .filter_map(|region| {
                resolve_overlay(hovered, region, OverlayTable::standard()).map(|p| (region.kind, p))
            })
            .collect()
    }

    #[test]
    fn nothing_hovered_draws_nothing() {
        assert!(visible(None).is_empty());
    }

    #[test]
    fn core_banking_shows_in_services_only() {
        let shown = visible(Some("SAP Core Banking"));
        assert_eq!(shown.len(), 1);
        let (kind, placement) = shown[0];
        assert_eq!(kind, RegionKind::Services);
        assert_eq!(placement.descriptor.title, "SAP Core Banking Solutions");
        assert_eq!(placement.descriptor.features.len(), 4);
        assert_eq!(placement.anchor, SERVICE_CATALOG.anchor);
    }

    #[test]
    fn support_entries_stay_in_support_region() {
        for entry in SUPPORT_CATALOG.entries() {
            let shown = visible(Some(entry.identifier));
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].0, RegionKind::Support);
            assert!(resolve_overlay(Some(entry.identifier), &SERVICE_CATALOG, OverlayTable::standard()).is_none());
        }
        for entry in SERVICE_CATALOG.entries() {
            assert!(resolve_overlay(Some(entry.identifier), &SUPPORT_CATALOG, OverlayTable::standard()).is_none());
        }
    }

    #[test]
    fn every_entry_in_a_region_shares_one_anchor() {
        for region in regions() {
            for entry in region.entries() {
                let placement = resolve_overlay(Some(entry.identifier), region, OverlayTable::standard()).unwrap();
                assert_eq!(placement.anchor, region.anchor);
            }
        }
    }

    #[test]
    fn unmapped_or_sub_item_labels_draw_nothing() {
        assert!(visible(Some("Hypothetical Unmapped Service")).is_empty());
        assert!(visible(Some("SAP Payment Engine (FS-PE)")).is_empty());
    }

    #[test]
    fn member_without_descriptor_draws_nothing() {
        static ENTRIES: [ServiceEntry; 1] = [ServiceEntry::new("No Overlay Here")];
        static REGION: CatalogRegion = CatalogRegion {
            kind: RegionKind::Services,
            section_id: "x",
            heading: "X",
            columns: &[&ENTRIES],
            anchor: OverlayAnchor { margin_top_px: 0, margin_right_px: 0 },
        };
        assert!(resolve_overlay(Some("No Overlay Here"), &REGION, OverlayTable::standard()).is_none());
    }

    #[test]
    fn btp_overlay_disappears_on_clear() {
        let id = "SAP Business Technology Platform (BTP)";
        let state = Rc::new(HoverState::default()).reduce(HoverAction::Enter(AttrValue::from(id)));
        let shown = visible(state.hovered());
        assert_eq!(shown[0].1.descriptor.title, "SAP BTP Services");

        let state = state.reduce(HoverAction::Leave);
        assert!(visible(state.hovered()).is_empty());
    }

    #[test]
    fn at_most_one_overlay_for_any_event_sequence() {
        let ids: Vec<&'static str> = regions()
            .into_iter()
            .flat_map(|region| region.entries().map(|entry| entry.identifier))
            .chain(["Unmapped", "SAP Core Banking"])
            .collect();

        let mut state = Rc::new(HoverState::default());
        // Interleave enters and leaves in a fixed but irregular order.
        for (step, id) in ids.iter().cycle().take(60).enumerate() {
            let action = if step % 3 == 2 {
                HoverAction::Leave
            } else {
                HoverAction::Enter(AttrValue::from(*id))
            };
            state = state.reduce(action);
            let shown = visible(state.hovered());
            assert!(shown.len() <= 1);
            if let Some((_, placement)) = shown.first() {
                assert_eq!(Some(placement.identifier), state.hovered());
            }
        }
    }
}
