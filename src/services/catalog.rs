use crate::models::InfluencerProfile;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the influencer catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate influencer id: {0}")]
    DuplicateId(String),

    #[error("Influencer with empty id at position {0}")]
    EmptyId(usize),
}

/// Read-only influencer catalog
///
/// Profiles keep the order they were loaded in; that order is the tie-break
/// for equal match scores.
#[derive(Debug, Clone, Default)]
pub struct InfluencerCatalog {
    profiles: Vec<InfluencerProfile>,
}

impl InfluencerCatalog {
    /// Build a catalog from profiles, rejecting empty or duplicate ids
    pub fn from_profiles(profiles: Vec<InfluencerProfile>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::with_capacity(profiles.len());

            for (position, profile) in profiles.iter().enumerate() {
                if profile.id.trim().is_empty() {
                    return Err(CatalogError::EmptyId(position));
                }
                if !seen.insert(profile.id.as_str()) {
                    return Err(CatalogError::DuplicateId(profile.id.clone()));
                }
            }
        }

        Ok(Self { profiles })
    }

    /// Parse a JSON array of profiles
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let profiles: Vec<InfluencerProfile> = serde_json::from_str(raw)?;
        Self::from_profiles(profiles)
    }

    /// Load a JSON catalog file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::info!("Loading influencer catalog from {}", path.display());

        let raw = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&raw)?;

        tracing::debug!("Catalog contains {} influencers", catalog.len());
        Ok(catalog)
    }

    pub fn all(&self) -> &[InfluencerProfile] {
        &self.profiles
    }

    pub fn get(&self, id: &str) -> Option<&InfluencerProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
