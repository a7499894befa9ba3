use log::Level;

pub const COMPANY_NAME: &str = "Raarv Inc";
pub const CONTACT_EMAIL: &str = "vasu@raarv.ca";
pub const CONTACT_PHONE: &str = "+14165778708";
pub const ASSET_BASE: &str = "/figmaAssets";

/// How long an overlay takes to enter or leave, in milliseconds.
pub const OVERLAY_TRANSITION_MS: u32 = 200;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose hover/scroll tracing while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", ASSET_BASE.trim_end_matches('/'), name.trim_start_matches('/'))
}

pub fn mailto_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub fn tel_href() -> String {
    format!("tel:{}", CONTACT_PHONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_hrefs_use_outbound_schemes() {
        assert_eq!(mailto_href(), "mailto:vasu@raarv.ca");
        assert_eq!(tel_href(), "tel:+14165778708");
    }

    #[test]
    fn asset_url_joins_without_double_slashes() {
        assert_eq!(asset_url("image-4.png"), "/figmaAssets/image-4.png");
        assert_eq!(asset_url("/image-6.png"), "/figmaAssets/image-6.png");
    }
}
