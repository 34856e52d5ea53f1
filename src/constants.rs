/// Source names used on the CLI, in logs and in metric labels
pub const FONT_AWESOME_SOURCE: &str = "font_awesome";
pub const MATERIAL_SOURCE: &str = "material";

// Font Awesome free packages, in output order
pub const SOLID_CATEGORY: &str = "solid";
pub const REGULAR_CATEGORY: &str = "regular";
pub const BRANDS_CATEGORY: &str = "brands";

pub const MATERIAL_CATEGORY: &str = "material";

pub const FONT_AWESOME_PACKAGES: [(&str, &str); 3] = [
    (SOLID_CATEGORY, "free-solid-svg-icons"),
    (REGULAR_CATEGORY, "free-regular-svg-icons"),
    (BRANDS_CATEGORY, "free-brands-svg-icons"),
];

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const FONT_AWESOME_REPOSITORY: &str = "FortAwesome/Font-Awesome";
pub const FONT_AWESOME_PACKAGES_PATH: &str = "js-packages/@fortawesome";
pub const MATERIAL_METADATA_URL: &str = "https://fonts.google.com/metadata/icons";

/// Anti JSON-hijacking guard Google prepends to the metadata body
pub const MATERIAL_BODY_PREFIX: &str = ")]}'";

pub const FONT_AWESOME_FILE_PREFIX: &str = "fa";
pub const FONT_AWESOME_FILE_SUFFIX: &str = ".js";
pub const FONT_AWESOME_INDEX_FILE: &str = "index.js";

pub const DEFAULT_FONT_AWESOME_OUTPUT: &str = "icons/fa_free_icons.json";
pub const DEFAULT_MATERIAL_OUTPUT: &str = "icons/material_icons.json";
pub const DEFAULT_CONFIG_PATH: &str = "icons.toml";
pub const CONFIG_PATH_ENV: &str = "ICON_CATALOG_CONFIG";

pub const DEFAULT_USER_AGENT: &str = concat!("icon_catalog/", env!("CARGO_PKG_VERSION"));

