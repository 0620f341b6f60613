//! Menu catalog access.

use async_trait::async_trait;
use mockall::automock;
use tiffin::menu::{Category, MenuItem};

use crate::api::{ApiClient, ApiError};

/// Read-only access to the published menu.
#[automock]
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    /// List menu items, optionally restricted to one category.
    async fn list(&self, category: Option<Category>) -> Result<Vec<MenuItem>, ApiError>;
}

/// Menu catalog served by the canteen backend.
///
/// The backend publishes the whole menu in one response; category
/// filtering happens client-side.
#[derive(Debug, Clone)]
pub struct HttpMenuCatalog {
    api: ApiClient,
}

impl HttpMenuCatalog {
    /// Create a catalog over the given client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MenuCatalog for HttpMenuCatalog {
    #[tracing::instrument(name = "menu.catalog.list", skip(self), err)]
    async fn list(&self, category: Option<Category>) -> Result<Vec<MenuItem>, ApiError> {
        let mut items = self.api.fetch_menu().await?;

        retain_category(&mut items, category);

        Ok(items)
    }
}

fn retain_category(items: &mut Vec<MenuItem>, category: Option<Category>) {
    if let Some(category) = category {
        items.retain(|item| item.category == category);
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use tiffin::fixtures::Fixture;

    use super::*;

    #[test]
    fn category_filter_keeps_only_matching_items() -> TestResult {
        let mut items = Fixture::sample()?.menu().to_vec();

        retain_category(&mut items, Some(Category::Beverage));

        assert!(!items.is_empty());
        assert!(items.iter().all(|item| item.category == Category::Beverage));

        Ok(())
    }

    #[test]
    fn no_filter_keeps_everything() -> TestResult {
        let fixture = Fixture::sample()?;
        let mut items = fixture.menu().to_vec();

        retain_category(&mut items, None);

        assert_eq!(items.len(), fixture.menu().len());

        Ok(())
    }
}
