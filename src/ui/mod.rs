pub mod layout;
mod home;
mod quiz;
mod result;

pub use home::draw_home;
pub use quiz::draw_quiz;
pub use result::draw_result;

/// Outbound links shown on the home and result screens. Rendered as plain
/// text; the app never opens a browser.
pub const TELEGRAM_LINK: &str = "https://t.me/Naret26";
pub const PAYMENT_LINK: &str = "https://aba.onelink.me/oRF8/r1z66abs";
