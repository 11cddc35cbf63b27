//! Theme
//!
//! Shared visual constants, exposed to the stylesheet as CSS custom properties.

pub struct Palette {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_disabled: &'static str,
}

pub const PALETTE: Palette = Palette {
    primary: "#556cd6",
    primary_light: "#888fd6",
    primary_dark: "#334cb2",
    secondary: "#f50057",
    text_primary: "#2e3131",
    text_secondary: "#535353",
    text_disabled: "#acacac",
};

/// Min widths in px
pub const BREAKPOINT_MOBILE: u32 = 0;
pub const BREAKPOINT_DESKTOP: u32 = 1024;

pub const RADIUS_SM: u32 = 4;
pub const RADIUS_MD: u32 = 8;
pub const RADIUS_LG: u32 = 16;
pub const RADIUS_CIRCLE: &str = "50%";

pub const BACKGROUND_IMAGE: &str = "public/pieski.jpg";

/// Height reserved under the fixed nav bar
pub const NAV_BAR_HEIGHT_PX: u32 = 64;

/// Inline style for the app root: all theme variables
pub fn root_style() -> String {
    let vars = [
        ("--color-primary", PALETTE.primary.to_string()),
        ("--color-primary-light", PALETTE.primary_light.to_string()),
        ("--color-primary-dark", PALETTE.primary_dark.to_string()),
        ("--color-secondary", PALETTE.secondary.to_string()),
        ("--color-text", PALETTE.text_primary.to_string()),
        ("--color-text-secondary", PALETTE.text_secondary.to_string()),
        ("--color-text-disabled", PALETTE.text_disabled.to_string()),
        ("--breakpoint-mobile", format!("{BREAKPOINT_MOBILE}px")),
        ("--breakpoint-desktop", format!("{BREAKPOINT_DESKTOP}px")),
        ("--radius-sm", format!("{RADIUS_SM}px")),
        ("--radius-md", format!("{RADIUS_MD}px")),
        ("--radius-lg", format!("{RADIUS_LG}px")),
        ("--radius-circle", RADIUS_CIRCLE.to_string()),
        ("--nav-height", format!("{NAV_BAR_HEIGHT_PX}px")),
        ("--background-image", format!("url({BACKGROUND_IMAGE})")),
    ];
    vars.iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
