use crate::config;

pub const CARD_QR_SIZE: u32 = 250;
pub const CARD_QR_MARGIN: u32 = 1;

/// URL for the external QR image service. Only builds the string; the `<img>`
/// that receives it does the fetching.
pub fn build_qr_url(payload: &str, size: u32, fg_color_hex: &str, margin_units: u32) -> String {
    format!(
        "{}?size={size}x{size}&data={}&color={}&bgcolor=ffffff00&qzone={margin_units}",
        config::QR_SERVICE_URL,
        urlencoding::encode(payload),
        fg_color_hex.trim_start_matches('#'),
    )
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_payload_is_percent_encoded() {
        let url = build_qr_url("mailto:jane@janewest.com", 250, "1a050a", 1);
        assert!(url.contains("data=mailto%3Ajane%40janewest.com"));
        assert!(url.contains("size=250x250"));
        assert!(url.contains("color=1a050a"));
        assert!(url.contains("qzone=1"));
        assert!(url.contains("bgcolor=ffffff00"));
    }

    #[test]
    fn deterministic() {
        let a = build_qr_url("https://janewest.com", 250, "fee2e2", 1);
        let b = build_qr_url("https://janewest.com", 250, "fee2e2", 1);
        assert_eq!(a, b);
        assert!(a.starts_with(config::QR_SERVICE_URL));
        assert!(a.contains("data=https%3A%2F%2Fjanewest.com"));
    }

    #[test]
    fn hash_prefix_is_dropped() {
        let url = build_qr_url("x", 100, "#fee2e2", 2);
        assert!(url.contains("color=fee2e2&"));
        assert!(!url.contains('#'));
    }

    #[test]
    fn mailto_prefixes_address() {
        assert_eq!(mailto("a@b.c"), "mailto:a@b.c");
    }
}
