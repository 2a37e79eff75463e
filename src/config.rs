#[cfg(debug_assertions)]
pub fn inquiry_endpoint() -> &'static str {
    option_env!("INQUIRY_ENDPOINT").unwrap_or("http://localhost:3001/inquiry")  // Local mock when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn inquiry_endpoint() -> &'static str {
    option_env!("INQUIRY_ENDPOINT").unwrap_or("https://formspree.io/f/mjkwzrle")
}

pub const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

pub const STORE_URL: &str = "https://janewest.com";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/betterwithjane/?hl=en";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/janewest/";

// Address behind the floating info button (the studio that built the card)
pub const STUDIO_EMAIL: &str = "notary@northmsnotary.com";

pub const COPY_BADGE_MS: u32 = 2_000;
