use crate::catalog::{Catalog, CatalogError};
use crate::config::{self, Config};
use crate::contract::{
    CategoriesResponse, CategorySitesRequest, CategorySitesResponse, CoreRequest, CoreResponse,
    FeaturedResponse, SearchRequest, SearchResponse, SettingsResponse,
};
use crate::model::{Category, SearchResult, Site, SiteSettings};
use crate::search;

#[derive(Debug)]
pub enum ServiceError {
    Config(String),
    Catalog(CatalogError),
    InvalidRequest(String),
    CategoryNotFound(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Catalog(error) => write!(f, "catalog error: {error}"),
            Self::InvalidRequest(error) => write!(f, "invalid request: {error}"),
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<CatalogError> for ServiceError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

/// Read-only query surface over the loaded catalog.
#[derive(Debug)]
pub struct NavService {
    config: Config,
    catalog: Catalog,
}

impl NavService {
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        config::validate(&config).map_err(ServiceError::Config)?;
        let catalog = Catalog::load(&config.data_dir)?;
        Ok(Self { config, catalog })
    }

    pub fn with_catalog(config: Config, catalog: Catalog) -> Result<Self, ServiceError> {
        config::validate(&config).map_err(ServiceError::Config)?;
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SiteSettings {
        self.catalog.settings()
    }

    /// Limit 0 means "use the configured maximum"; anything larger is
    /// clamped to it. The ranker applies its own hard cap on top.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let effective_limit = if limit == 0 {
            self.config.max_results as usize
        } else {
            limit.min(self.config.max_results as usize)
        };

        let mut results = search::rank(query, self.catalog.sites());
        results.truncate(effective_limit);
        results
    }

    pub fn find_category(&self, id: &str) -> Result<&Category, ServiceError> {
        self.catalog
            .find_category(id)
            .ok_or_else(|| ServiceError::CategoryNotFound(id.to_string()))
    }

    pub fn category_sites(&self, id: &str, with_children: bool) -> Vec<&Site> {
        if with_children {
            self.catalog.sites_by_category_with_children(id)
        } else {
            self.catalog.sites_by_category(id)
        }
    }

    pub fn handle_command(&self, request: CoreRequest) -> Result<CoreResponse, ServiceError> {
        match request {
            CoreRequest::Search(SearchRequest { query, limit }) => {
                let results = self
                    .search(&query, limit.unwrap_or(0))
                    .into_iter()
                    .map(Into::into)
                    .collect();
                Ok(CoreResponse::Search(SearchResponse { results }))
            }
            CoreRequest::Categories => Ok(CoreResponse::Categories(CategoriesResponse {
                categories: self.catalog.categories().to_vec(),
            })),
            CoreRequest::CategorySites(CategorySitesRequest { id, with_children }) => {
                if id.trim().is_empty() {
                    return Err(ServiceError::InvalidRequest(
                        "category id must not be blank".to_string(),
                    ));
                }
                let sites = self
                    .category_sites(&id, with_children)
                    .into_iter()
                    .cloned()
                    .collect();
                Ok(CoreResponse::CategorySites(CategorySitesResponse { sites }))
            }
            CoreRequest::Featured => Ok(CoreResponse::Featured(FeaturedResponse {
                sites: self.catalog.featured_sites().into_iter().cloned().collect(),
            })),
            CoreRequest::Settings => Ok(CoreResponse::Settings(SettingsResponse {
                settings: self.catalog.settings().clone(),
            })),
        }
    }
}
