use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::logging;
use crate::model::{Category, Site, SiteSettings};

pub const SITES_FILE: &str = "sites.json5";
pub const CATEGORIES_FILE: &str = "categories.json5";
pub const SETTINGS_FILE: &str = "settings.json5";

#[derive(Debug)]
pub enum CatalogError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, String),
    Validate(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, error) => write!(f, "failed to read {}: {error}", path.display()),
            Self::Parse(path, error) => write!(f, "failed to parse {}: {error}", path.display()),
            Self::Validate(error) => write!(f, "invalid catalog: {error}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Deserialize)]
struct SitesDocument {
    #[serde(default)]
    sites: Vec<Site>,
}

#[derive(Debug, Deserialize)]
struct CategoriesDocument {
    #[serde(default)]
    categories: Vec<Category>,
}

/// The immutable site/category catalog plus its settings bag.
///
/// Loading is all-or-nothing: a missing or malformed document fails startup.
/// A site referencing an unknown category id is allowed (it renders as an
/// empty group) but logged at load time.
#[derive(Debug)]
pub struct Catalog {
    sites: Vec<Site>,
    categories: Vec<Category>,
    settings: SiteSettings,
}

impl Catalog {
    pub fn load(data_dir: &Path) -> Result<Self, CatalogError> {
        let sites_doc: SitesDocument = read_document(&data_dir.join(SITES_FILE))?;
        let categories_doc: CategoriesDocument = read_document(&data_dir.join(CATEGORIES_FILE))?;
        let settings: SiteSettings = read_document(&data_dir.join(SETTINGS_FILE))?;
        Self::from_parts(sites_doc.sites, categories_doc.categories, settings)
    }

    pub fn from_parts(
        sites: Vec<Site>,
        categories: Vec<Category>,
        settings: SiteSettings,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            sites,
            categories,
            settings,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let flat = self.flat_categories();
        let mut ids = BTreeSet::new();
        for category in &flat {
            if category.id.trim().is_empty() {
                return Err(CatalogError::Validate("category with empty id".to_string()));
            }
            if !ids.insert(category.id.as_str()) {
                return Err(CatalogError::Validate(format!(
                    "duplicate category id: {}",
                    category.id
                )));
            }
        }

        for site in &self.sites {
            if site.url.trim().is_empty() {
                return Err(CatalogError::Validate(format!(
                    "site '{}' has an empty url",
                    site.name.en_us
                )));
            }
            if site.name.zh_cn.trim().is_empty() && site.name.en_us.trim().is_empty() {
                return Err(CatalogError::Validate(format!(
                    "site '{}' has no name in either language",
                    site.url
                )));
            }
            if !ids.contains(site.category.as_str()) {
                logging::warn(&format!(
                    "site '{}' references unknown category '{}'",
                    site.url, site.category
                ));
            }
        }

        Ok(())
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Depth-first flattening, parent before children, sibling order kept.
    pub fn flat_categories(&self) -> Vec<&Category> {
        let mut flat = Vec::new();
        for category in &self.categories {
            push_depth_first(category, &mut flat);
        }
        flat
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.flat_categories()
            .into_iter()
            .find(|category| category.id == id)
    }

    pub fn sites_by_category(&self, id: &str) -> Vec<&Site> {
        self.sites.iter().filter(|site| site.category == id).collect()
    }

    /// Sites under a category or any of its immediate children.
    /// An unknown id yields an empty list, not an error.
    pub fn sites_by_category_with_children(&self, id: &str) -> Vec<&Site> {
        let Some(category) = self.find_category(id) else {
            return Vec::new();
        };

        let mut ids = vec![category.id.as_str()];
        ids.extend(category.children.iter().map(|child| child.id.as_str()));

        self.sites
            .iter()
            .filter(|site| ids.contains(&site.category.as_str()))
            .collect()
    }

    pub fn featured_sites(&self) -> Vec<&Site> {
        self.sites.iter().filter(|site| site.featured).collect()
    }

    /// Distinct tags in first-seen catalog order.
    pub fn all_tags(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut tags = Vec::new();
        for site in &self.sites {
            for tag in &site.tags {
                if seen.insert(tag.as_str()) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }
}

fn push_depth_first<'a>(category: &'a Category, flat: &mut Vec<&'a Category>) {
    flat.push(category);
    for child in &category.children {
        push_depth_first(child, flat);
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|error| CatalogError::Io(path.to_path_buf(), error))?;
    json5::from_str(&raw).map_err(|error| CatalogError::Parse(path.to_path_buf(), error.to_string()))
}
