use std::collections::HashMap;
use std::sync::OnceLock;

use super::models::OverlayDescriptor;

const OVERLAY_CATALOG: [(&str, OverlayDescriptor); 10] = [
    (
        "SAP Core Banking",
        OverlayDescriptor {
            title: "SAP Core Banking Solutions",
            description: "Comprehensive banking solutions including loans management, transactional banking, and financial products subledger. Our expertise covers end-to-end implementation and optimization.",
            features: &["Implementation & Migration", "Performance Optimization", "Custom Development", "Integration Services"],
        },
    ),
    (
        "SAP Business Technology Platform (BTP)",
        OverlayDescriptor {
            title: "SAP BTP Services",
            description: "Cloud-native platform services for integration, analytics, and application development. We help businesses leverage the full potential of SAP's technology platform.",
            features: &["Cloud Integration", "Analytics & Reporting", "Application Development", "Platform Management"],
        },
    ),
    (
        "SAP Omnichannel Banking (OCB)",
        OverlayDescriptor {
            title: "SAP Omnichannel Banking",
            description: "Modern banking experiences across all customer touchpoints. We implement unified banking solutions that deliver consistent experiences across web, mobile, and branch channels.",
            features: &["Channel Integration", "Customer Journey", "Digital Banking", "Mobile Solutions"],
        },
    ),
    (
        "SAP Software Development",
        OverlayDescriptor {
            title: "Custom SAP Development",
            description: "Tailored SAP solutions built to meet your specific business requirements. Our development team creates custom applications and extensions.",
            features: &["Custom Applications", "System Extensions", "API Development", "Technical Architecture"],
        },
    ),
    (
        "SAP S/4HANA",
        OverlayDescriptor {
            title: "SAP S/4HANA Implementation",
            description: "Complete S/4HANA transformation services from ECC migration to new implementations. We cover all modules including FI, TRM, and specialized banking components.",
            features: &["ECC Migration", "New Implementation", "Module Configuration", "Post-Go-Live Support"],
        },
    ),
    (
        "Help Desk Services",
        OverlayDescriptor {
            title: "24/7 Help Desk Support",
            description: "Round-the-clock technical support for your SAP systems. Our experienced team provides immediate assistance and resolution for system issues.",
            features: &["24/7 Support", "Incident Management", "User Training", "System Monitoring"],
        },
    ),
    (
        "Staff Augmentation for AMS",
        OverlayDescriptor {
            title: "SAP Staff Augmentation",
            description: "Extend your team with our skilled SAP professionals. We provide experienced consultants to supplement your internal capabilities.",
            features: &["Skilled Consultants", "Flexible Engagement", "Knowledge Transfer", "Team Integration"],
        },
    ),
    (
        "AMS Service Management",
        OverlayDescriptor {
            title: "Application Management Services",
            description: "Comprehensive management of your SAP applications including maintenance, monitoring, and continuous improvement initiatives.",
            features: &["System Maintenance", "Performance Monitoring", "Change Management", "Continuous Improvement"],
        },
    ),
    (
        "Nearshore IT Services",
        OverlayDescriptor {
            title: "Nearshore SAP Services",
            description: "Cost-effective SAP services delivered from our nearshore centers with cultural alignment and timezone compatibility.",
            features: &["Cost Optimization", "Cultural Alignment", "Timezone Coverage", "Quality Delivery"],
        },
    ),
    (
        "SAP Basis Services",
        OverlayDescriptor {
            title: "SAP Basis Administration",
            description: "Complete SAP Basis services including system administration, performance tuning, and infrastructure management.",
            features: &["System Administration", "Performance Tuning", "Infrastructure Management", "Security Management"],
        },
    ),
];

/// Identifier to overlay mapping. Misses are not errors, they just mean "no overlay".
#[derive(Debug)]
pub struct OverlayTable {
    entries: HashMap<&'static str, OverlayDescriptor>,
}

impl OverlayTable {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, OverlayDescriptor)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The site's table, built on first use and shared afterwards.
    pub fn standard() -> &'static OverlayTable {
        static TABLE: OnceLock<OverlayTable> = OnceLock::new();
        TABLE.get_or_init(|| OverlayTable::from_entries(OVERLAY_CATALOG))
    }

    pub fn lookup(&self, identifier: &str) -> Option<&OverlayDescriptor> {
        self.entries.get(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_banking_overlay() {
        let overlay = OverlayTable::standard().lookup("SAP Core Banking").unwrap();
        assert_eq!(overlay.title, "SAP Core Banking Solutions");
        assert_eq!(
            overlay.features,
            ["Implementation & Migration", "Performance Optimization", "Custom Development", "Integration Services"]
        );
    }

    #[test]
    fn btp_overlay_title() {
        let overlay = OverlayTable::standard()
            .lookup("SAP Business Technology Platform (BTP)")
            .unwrap();
        assert_eq!(overlay.title, "SAP BTP Services");
    }

    #[test]
    fn unknown_keys_miss_quietly() {
        let table = OverlayTable::standard();
        for key in ["", "Unmapped Label", "sap core banking", "SAP Core Banking ", "SAP Loans Management (CML)"] {
            assert!(table.lookup(key).is_none(), "unexpected overlay for {key:?}");
        }
    }

    #[test]
    fn every_descriptor_is_filled_in() {
        let table = OverlayTable::standard();
        for (key, _) in OVERLAY_CATALOG {
            let overlay = table.lookup(key).unwrap();
            assert!(!overlay.title.is_empty());
            assert!(!overlay.description.is_empty());
            assert_eq!(overlay.features.len(), 4, "{key}");
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = OVERLAY_CATALOG.iter().map(|(key, _)| *key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), OVERLAY_CATALOG.len());
    }
}
