//! Theme resolution and stylesheet URLs

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Default path the built-in theme stylesheets are served from
pub const DEFAULT_THEMES_PATH: &str = "/themes";

/// Themes shipped with the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinTheme {
    Light,
    LightHighContrast,
    LightProtanopia,
    LightTritanopia,
    Dark,
    DarkHighContrast,
    DarkProtanopia,
    DarkTritanopia,
    DarkDimmed,
    PreferredColorScheme,
    TransparentDark,
    NoborderLight,
    NoborderDark,
    NoborderGray,
    Cobalt,
    PurpleDark,
    Gruvbox,
    GruvboxDark,
    GruvboxLight,
    Fro,
    CatppuccinLatte,
    CatppuccinFrappe,
    CatppuccinMacchiato,
    CatppuccinMocha,
}

impl BuiltinTheme {
    pub const ALL: [BuiltinTheme; 24] = [
        BuiltinTheme::Light,
        BuiltinTheme::LightHighContrast,
        BuiltinTheme::LightProtanopia,
        BuiltinTheme::LightTritanopia,
        BuiltinTheme::Dark,
        BuiltinTheme::DarkHighContrast,
        BuiltinTheme::DarkProtanopia,
        BuiltinTheme::DarkTritanopia,
        BuiltinTheme::DarkDimmed,
        BuiltinTheme::PreferredColorScheme,
        BuiltinTheme::TransparentDark,
        BuiltinTheme::NoborderLight,
        BuiltinTheme::NoborderDark,
        BuiltinTheme::NoborderGray,
        BuiltinTheme::Cobalt,
        BuiltinTheme::PurpleDark,
        BuiltinTheme::Gruvbox,
        BuiltinTheme::GruvboxDark,
        BuiltinTheme::GruvboxLight,
        BuiltinTheme::Fro,
        BuiltinTheme::CatppuccinLatte,
        BuiltinTheme::CatppuccinFrappe,
        BuiltinTheme::CatppuccinMacchiato,
        BuiltinTheme::CatppuccinMocha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinTheme::Light => "light",
            BuiltinTheme::LightHighContrast => "light_high_contrast",
            BuiltinTheme::LightProtanopia => "light_protanopia",
            BuiltinTheme::LightTritanopia => "light_tritanopia",
            BuiltinTheme::Dark => "dark",
            BuiltinTheme::DarkHighContrast => "dark_high_contrast",
            BuiltinTheme::DarkProtanopia => "dark_protanopia",
            BuiltinTheme::DarkTritanopia => "dark_tritanopia",
            BuiltinTheme::DarkDimmed => "dark_dimmed",
            BuiltinTheme::PreferredColorScheme => "preferred_color_scheme",
            BuiltinTheme::TransparentDark => "transparent_dark",
            BuiltinTheme::NoborderLight => "noborder_light",
            BuiltinTheme::NoborderDark => "noborder_dark",
            BuiltinTheme::NoborderGray => "noborder_gray",
            BuiltinTheme::Cobalt => "cobalt",
            BuiltinTheme::PurpleDark => "purple_dark",
            BuiltinTheme::Gruvbox => "gruvbox",
            BuiltinTheme::GruvboxDark => "gruvbox_dark",
            BuiltinTheme::GruvboxLight => "gruvbox_light",
            BuiltinTheme::Fro => "fro",
            BuiltinTheme::CatppuccinLatte => "catppuccin_latte",
            BuiltinTheme::CatppuccinFrappe => "catppuccin_frappe",
            BuiltinTheme::CatppuccinMacchiato => "catppuccin_macchiato",
            BuiltinTheme::CatppuccinMocha => "catppuccin_mocha",
        }
    }

    /// Look up a built-in theme by its exact tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|theme| theme.as_str() == tag)
    }
}

impl std::fmt::Display for BuiltinTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of resolving a user-supplied theme tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    Builtin(BuiltinTheme),
    /// The tag is not a built-in theme and is used as a stylesheet URL
    Custom,
}

impl ResolvedTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedTheme::Builtin(theme) => theme.as_str(),
            ResolvedTheme::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ResolvedTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResolvedTheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        if tag == "custom" {
            return Ok(ResolvedTheme::Custom);
        }
        BuiltinTheme::from_tag(&tag)
            .map(ResolvedTheme::Builtin)
            .ok_or_else(|| de::Error::custom(format!("unknown theme: {}", tag)))
    }
}

/// Resolve a theme tag.
///
/// An empty tag means "unset" and follows the user's color scheme. Unknown tags
/// resolve to [`ResolvedTheme::Custom`].
pub fn resolve_theme(theme: &str) -> ResolvedTheme {
    if theme.is_empty() {
        return ResolvedTheme::Builtin(BuiltinTheme::PreferredColorScheme);
    }

    BuiltinTheme::from_tag(theme)
        .map(ResolvedTheme::Builtin)
        .unwrap_or(ResolvedTheme::Custom)
}

/// Stylesheet URL for a resolved theme, served under `/themes`
pub fn get_theme_url(resolved: ResolvedTheme, theme: &str) -> String {
    theme_url_in(DEFAULT_THEMES_PATH, resolved, theme)
}

/// Stylesheet URL for a resolved theme under a custom base path.
///
/// Custom themes return the original tag as-is; it is not validated.
pub fn theme_url_in(base: &str, resolved: ResolvedTheme, theme: &str) -> String {
    match resolved {
        ResolvedTheme::Custom => theme.to_string(),
        ResolvedTheme::Builtin(builtin) => {
            format!("{}/{}.css", base.trim_end_matches('/'), builtin.as_str())
        }
    }
}
