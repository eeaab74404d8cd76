use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading scoring rules
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse rules: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid rules: {0}")]
    Invalid(String),
}

/// Maps a campaign product category to the influencer categories that fit it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMapping {
    pub product_category: String,
    pub influencer_categories: Vec<String>,
}

/// Maps a budget label to the follower interval `[min_followers, max_followers)`
///
/// A missing `max_followers` means the bucket is unbounded above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBucket {
    pub label: String,
    pub min_followers: u64,
    #[serde(default)]
    pub max_followers: Option<u64>,
}

impl BudgetBucket {
    #[inline]
    pub fn contains(&self, followers: u64) -> bool {
        followers >= self.min_followers
            && self.max_followers.map_or(true, |max| followers < max)
    }
}

/// Lookup tables consulted by the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    #[serde(default)]
    pub categories: Vec<CategoryMapping>,
    #[serde(default)]
    pub budgets: Vec<BudgetBucket>,
}

impl ScoringRules {
    /// Parse rules from a TOML document and validate them
    ///
    /// ```toml
    /// [[categories]]
    /// product_category = "Fitness & Sports"
    /// influencer_categories = ["Fitness & Health"]
    ///
    /// [[budgets]]
    /// label = "Over $50,000"
    /// min_followers = 500000
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, RulesError> {
        let rules: ScoringRules = toml::from_str(input)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load rules from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RulesError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        for mapping in &self.categories {
            if mapping.product_category.trim().is_empty() {
                return Err(RulesError::Invalid("category mapping with empty product_category".to_string()));
            }
            if mapping.influencer_categories.iter().all(|c| c.trim().is_empty()) {
                return Err(RulesError::Invalid(format!(
                    "category '{}' maps to no influencer categories",
                    mapping.product_category
                )));
            }
        }

        for bucket in &self.budgets {
            if bucket.label.trim().is_empty() {
                return Err(RulesError::Invalid("budget bucket with empty label".to_string()));
            }
            if let Some(max) = bucket.max_followers {
                if max <= bucket.min_followers {
                    return Err(RulesError::Invalid(format!(
                        "budget '{}' has max_followers {} <= min_followers {}",
                        bucket.label, max, bucket.min_followers
                    )));
                }
            }
        }

        Ok(())
    }

    /// Influencer category substrings acceptable for a product category
    pub fn categories_for(&self, product_category: &str) -> &[String] {
        let wanted = product_category.trim();
        self.categories
            .iter()
            .find(|m| m.product_category == wanted)
            .map(|m| m.influencer_categories.as_slice())
            .unwrap_or(&[])
    }

    pub fn budget_for(&self, label: &str) -> Option<&BudgetBucket> {
        let wanted = label.trim();
        self.budgets.iter().find(|b| b.label == wanted)
    }

    /// Whether an influencer category fits the product category
    ///
    /// Case-insensitive substring match against the mapped categories.
    /// Unknown or empty product categories never match.
    pub fn category_matches(&self, product_category: &str, influencer_category: &str) -> bool {
        let haystack = influencer_category.to_lowercase();
        self.categories_for(product_category)
            .iter()
            .filter(|c| !c.trim().is_empty())
            .any(|c| haystack.contains(&c.to_lowercase()))
    }
}

fn mapping(product: &str, influencer: &[&str]) -> CategoryMapping {
    CategoryMapping {
        product_category: product.to_string(),
        influencer_categories: influencer.iter().map(|c| c.to_string()).collect(),
    }
}

fn bucket(label: &str, min: u64, max: Option<u64>) -> BudgetBucket {
    BudgetBucket {
        label: label.to_string(),
        min_followers: min,
        max_followers: max,
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            categories: vec![
                mapping("Fashion & Apparel", &["Fashion & Style", "Fashion & Lifestyle"]),
                mapping("Beauty & Cosmetics", &["Beauty & Lifestyle", "Health & Wellness"]),
                mapping("Technology & Electronics", &["Technology"]),
                mapping("Health & Wellness", &["Health & Wellness", "Fitness & Health"]),
                mapping("Food & Beverage", &["Food & Cooking"]),
                mapping("Travel & Tourism", &["Travel & Adventure"]),
                mapping("Fitness & Sports", &["Fitness & Health"]),
            ],
            budgets: vec![
                bucket("Under $5,000", 0, Some(50_000)),
                bucket("$5,000 - $15,000", 50_000, Some(200_000)),
                bucket("$15,000 - $50,000", 200_000, Some(500_000)),
                bucket("Over $50,000", 500_000, None),
            ],
        }
    }
}
