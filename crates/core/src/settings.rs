use thiserror::Error;

use crate::model::Category;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("batch size must be > 0")]
    InvalidBatchSize,

    #[error("at least one category must be configured")]
    NoCategories,
}

/// Configuration for an interview session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    batch_size: usize,
    categories: Vec<Category>,
}

impl SessionSettings {
    /// Questions handed out per draw when the caller does not ask for a size.
    pub const DEFAULT_BATCH_SIZE: usize = 3;

    /// Creates custom session settings. Duplicate categories are collapsed.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidBatchSize` if `batch_size` is zero and
    /// `SettingsError::NoCategories` if `categories` is empty.
    pub fn new(
        batch_size: usize,
        categories: impl IntoIterator<Item = Category>,
    ) -> Result<Self, SettingsError> {
        if batch_size == 0 {
            return Err(SettingsError::InvalidBatchSize);
        }
        let mut categories: Vec<Category> = categories.into_iter().collect();
        categories.sort();
        categories.dedup();
        if categories.is_empty() {
            return Err(SettingsError::NoCategories);
        }
        Ok(Self {
            batch_size,
            categories,
        })
    }

    /// Same categories, different batch size.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidBatchSize` if `batch_size` is zero.
    pub fn with_batch_size(self, batch_size: usize) -> Result<Self, SettingsError> {
        Self::new(batch_size, self.categories)
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            batch_size: Self::DEFAULT_BATCH_SIZE,
            categories: Category::ALL.to_vec(),
        }
    }
}
