//! The fixed dmidecode keyword list and its category grouping
//!
//! dmidecode exposes 22 standard keyword strings via `dmidecode -s <keyword>`.
//! The list below is a stable contract: order matters for output purposes and
//! the set never changes at runtime.

/// The 22 dmidecode keyword strings, in query order.
pub const KEYWORDS: [&str; 22] = [
    "bios-vendor",
    "bios-version",
    "bios-release-date",
    "system-manufacturer",
    "system-product-name",
    "system-version",
    "system-serial-number",
    "system-uuid",
    "baseboard-manufacturer",
    "baseboard-product-name",
    "baseboard-version",
    "baseboard-serial-number",
    "baseboard-asset-tag",
    "chassis-manufacturer",
    "chassis-type",
    "chassis-version",
    "chassis-serial-number",
    "chassis-asset-tag",
    "processor-family",
    "processor-manufacturer",
    "processor-version",
    "processor-frequency",
];

/// Hardware category a keyword belongs to, derived from its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bios,
    System,
    Baseboard,
    Chassis,
    Processor,
}

impl Category {
    /// All categories, in keyword-list order.
    pub const ALL: [Category; 5] = [
        Category::Bios,
        Category::System,
        Category::Baseboard,
        Category::Chassis,
        Category::Processor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bios => "bios",
            Category::System => "system",
            Category::Baseboard => "baseboard",
            Category::Chassis => "chassis",
            Category::Processor => "processor",
        }
    }

    /// Category of a keyword, determined by its `<category>-` prefix.
    pub fn of(keyword: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| keyword.starts_with(c.as_str()) && keyword[c.as_str().len()..].starts_with('-'))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether `key` is one of the 22 fixed keywords.
pub fn is_keyword(key: &str) -> bool {
    KEYWORDS.contains(&key)
}

/// Keyword with its category prefix stripped, for use as an XML attribute
/// name (`bios-vendor` -> `vendor`).
pub fn attribute_name(keyword: &str) -> &str {
    match Category::of(keyword) {
        Some(category) => &keyword[category.as_str().len() + 1..],
        None => keyword,
    }
}
