use serde::{Deserialize, Serialize};

/// Text carrying both language renderings; the UI picks one at display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nText {
    #[serde(rename = "zh-CN")]
    pub zh_cn: String,
    #[serde(rename = "en-US")]
    pub en_us: String,
}

impl I18nText {
    pub fn new(zh_cn: &str, en_us: &str) -> Self {
        Self {
            zh_cn: zh_cn.to_string(),
            en_us: en_us.to_string(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::ZhCn => &self.zh_cn,
            Locale::EnUs => &self.en_us,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    ZhCn,
    EnUs,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "zh-CN" => Some(Self::ZhCn),
            "en-US" => Some(Self::EnUs),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::ZhCn => Self::EnUs,
            Self::EnUs => Self::ZhCn,
        }
    }
}

/// One catalog entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub name: I18nText,
    pub url: String,
    pub description: I18nText,
    #[serde(default)]
    pub icon: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Navigation category. Tree shaped; children are owned, no cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: I18nText,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: Option<I18nText>,
    #[serde(default)]
    pub hot: bool,
    #[serde(default)]
    pub children: Vec<Category>,
}

/// Which field produced a search result's primary score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Name,
    Description,
    Tag,
    Url,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Tag => "tag",
            Self::Url => "url",
        }
    }
}

/// Ephemeral ranking output; recomputed on every query change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub site: Site,
    pub match_type: MatchType,
    pub score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

/// Read-only settings bag loaded alongside the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site: SiteIdentity,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub seo: SeoSection,
    #[serde(default)]
    pub footer: FooterSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteIdentity {
    pub name: I18nText,
    pub description: I18nText,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub favicon: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: I18nText::new("", ""),
            description: I18nText::new("", ""),
            keywords: String::new(),
            logo: String::new(),
            favicon: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    #[serde(default = "enabled")]
    pub search: bool,
    #[serde(default = "enabled")]
    pub dark_mode: bool,
    #[serde(default = "enabled")]
    pub i18n: bool,
    #[serde(default = "enabled")]
    pub back_to_top: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            search: true,
            dark_mode: true,
            i18n: true,
            back_to_top: true,
        }
    }
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsSection {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_theme")]
    pub theme: Theme,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            language: default_language(),
            theme: default_theme(),
        }
    }
}

fn default_language() -> String {
    Locale::ZhCn.as_str().to_string()
}

fn default_theme() -> Theme {
    Theme::System
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSection {
    #[serde(default)]
    pub og_image: String,
    #[serde(default)]
    pub twitter_card: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    #[serde(default)]
    pub copyright: Option<I18nText>,
    #[serde(default)]
    pub links: Vec<FooterLink>,
    #[serde(default)]
    pub credits: Vec<FooterCredit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub name: I18nText,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterCredit {
    pub name: String,
    pub url: String,
    pub description: I18nText,
}

/// Shared query normalization for the ranker and the session cache.
pub fn normalize_query(input: &str) -> String {
    input.trim().to_lowercase()
}
