use super::models::{CatalogRegion, NavItem, OverlayAnchor, RegionKind, ServiceEntry};

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "About Us", section_id: "hero" },
    NavItem { label: "SAP Services", section_id: "sap-services" },
    NavItem { label: "SAP AMS", section_id: "sap-ams" },
];

pub const CONTACT_SECTION: &str = "contact";

static CORE_BANKING: [ServiceEntry; 1] = [ServiceEntry::with_sub_items(
    "SAP Core Banking",
    &[
        "SAP Loans Management (CML)",
        "SAP Transactional Banking (TRBK)",
        "SAP Financial Products Subledger (FPSL)",
        "SAP Fioneer Cloud for Banking",
        "SAP Collateral Management (CMS)",
        "SAP S/4HANA Banking for Complex Loans",
        "SAP Payment Engine (FS-PE)",
    ],
)];

static PLATFORM: [ServiceEntry; 3] = [
    ServiceEntry::new("SAP Business Technology Platform (BTP)"),
    ServiceEntry::new("SAP Omnichannel Banking (OCB)"),
    ServiceEntry::new("SAP Software Development"),
];

static S4HANA: [ServiceEntry; 1] = [ServiceEntry::with_sub_items(
    "SAP S/4HANA",
    &[
        "ECC to S/4HANA Transition",
        "Financial Accounting (FI)",
        "SAP Contract and Lease Management (CLM / RE-FX)",
        "SAP Treasury and Risk Management (TRM)",
        "SAP Collections and Dispute Management",
        "SAP Credit Management (CM)",
    ],
)];

static AMS: [ServiceEntry; 5] = [
    ServiceEntry::new("Help Desk Services"),
    ServiceEntry::new("Staff Augmentation for AMS"),
    ServiceEntry::new("AMS Service Management"),
    ServiceEntry::new("Nearshore IT Services"),
    ServiceEntry::new("SAP Basis Services"),
];

pub static SERVICE_CATALOG: CatalogRegion = CatalogRegion {
    kind: RegionKind::Services,
    section_id: "sap-services",
    heading: "SAP Services",
    columns: &[&CORE_BANKING, &PLATFORM, &S4HANA],
    anchor: OverlayAnchor { margin_top_px: 100, margin_right_px: -50 },
};

pub static SUPPORT_CATALOG: CatalogRegion = CatalogRegion {
    kind: RegionKind::Support,
    section_id: "sap-ams",
    heading: "SAP AMS",
    columns: &[&AMS],
    anchor: OverlayAnchor { margin_top_px: 150, margin_right_px: 50 },
};

pub fn regions() -> [&'static CatalogRegion; 2] {
    [&SERVICE_CATALOG, &SUPPORT_CATALOG]
}
