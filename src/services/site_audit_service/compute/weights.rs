use crate::models::audit::Category;
use log::error;
use thiserror::Error;

const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("weight table {table} sums to {sum}, expected 1.0")]
    UnbalancedWeights { table: &'static str, sum: f64 },
    #[error("weight table {table} has no score for {category}")]
    MissingCategory {
        table: &'static str,
        category: Category,
    },
}

/// Fixed category weights for one synthesis path.
#[derive(Debug, Clone, Copy)]
pub struct WeightTable {
    pub name: &'static str,
    pub entries: &'static [(Category, f64)],
}

pub const WEBSITE_WEIGHTS: WeightTable = WeightTable {
    name: "website",
    entries: &[
        (Category::Performance, 0.30),
        (Category::Seo, 0.25),
        (Category::Accessibility, 0.15),
        (Category::Reputation, 0.15),
        (Category::LocalVisibility, 0.15),
    ],
};

// performance is the content-length proxy and accessibility the assumed 60
pub const WEBSITE_FALLBACK_WEIGHTS: WeightTable = WeightTable {
    name: "website-fallback",
    entries: &[
        (Category::Performance, 0.30),
        (Category::Seo, 0.25),
        (Category::Reputation, 0.15),
        (Category::LocalVisibility, 0.15),
        (Category::Accessibility, 0.15),
    ],
};

pub const BUSINESS_WEIGHTS: WeightTable = WeightTable {
    name: "business",
    entries: &[
        (Category::GooglePresence, 0.35),
        (Category::ReviewSites, 0.20),
        (Category::LocalVisibility, 0.20),
        (Category::Website, 0.25),
    ],
};

pub const COMPREHENSIVE_WEIGHTS: WeightTable = WeightTable {
    name: "comprehensive",
    entries: &[
        (Category::OnPageSeo, 0.40),
        (Category::BrandClarity, 0.25),
        (Category::LocalSeo, 0.20),
        (Category::Safety, 0.15),
    ],
};

pub const PRESENCE_WEIGHTS: WeightTable = WeightTable {
    name: "presence",
    entries: &[
        (Category::Performance, 0.30),
        (Category::Seo, 0.30),
        (Category::TechDepth, 0.20),
        (Category::Visibility, 0.20),
    ],
};

pub const CRAWL_WEIGHTS: WeightTable = WeightTable {
    name: "crawl",
    entries: &[
        (Category::Seo, 0.40),
        (Category::Content, 0.30),
        (Category::Technology, 0.30),
    ],
};

impl WeightTable {
    fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }

    fn verify(&self) -> Result<(), ScoreError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            error!("weight table {} is unbalanced: sum = {}", self.name, sum);
            return Err(ScoreError::UnbalancedWeights {
                table: self.name,
                sum,
            });
        }
        Ok(())
    }

    /// `round(Σ score × weight)`, clamped to 0..=100. Scores are looked up by
    /// category; every category of the table must be present.
    pub fn overall(&self, scores: &[(Category, f64)]) -> Result<u8, ScoreError> {
        self.verify()?;

        let mut total = 0.0;
        for (category, weight) in self.entries {
            let score = scores
                .iter()
                .find(|(c, _)| c == category)
                .map(|(_, s)| *s)
                .ok_or(ScoreError::MissingCategory {
                    table: self.name,
                    category: *category,
                })?;
            total += score.clamp(0.0, 100.0) * weight;
        }

        Ok(total.round().clamp(0.0, 100.0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TABLES: [WeightTable; 6] = [
        WEBSITE_WEIGHTS,
        WEBSITE_FALLBACK_WEIGHTS,
        BUSINESS_WEIGHTS,
        COMPREHENSIVE_WEIGHTS,
        PRESENCE_WEIGHTS,
        CRAWL_WEIGHTS,
    ];

    #[test]
    fn every_table_sums_to_one() {
        for table in ALL_TABLES {
            assert!(table.verify().is_ok(), "{} sums to {}", table.name, table.sum());
        }
    }

    #[test]
    fn unbalanced_tables_are_flagged() {
        const SKEWED: WeightTable = WeightTable {
            name: "skewed",
            entries: &[(Category::Performance, 0.6), (Category::Seo, 0.6)],
        };
        let err = SKEWED
            .overall(&[(Category::Performance, 50.0), (Category::Seo, 50.0)])
            .unwrap_err();
        assert!(matches!(err, ScoreError::UnbalancedWeights { table: "skewed", .. }));
    }

    #[test]
    fn missing_categories_are_reported() {
        let err = BUSINESS_WEIGHTS
            .overall(&[(Category::GooglePresence, 85.0)])
            .unwrap_err();
        assert_eq!(
            err,
            ScoreError::MissingCategory {
                table: "business",
                category: Category::ReviewSites
            }
        );
    }

    #[test]
    fn joes_pizza_website_scores() {
        let scores = [
            (Category::Performance, 90.0),
            (Category::Seo, 70.0),
            (Category::Accessibility, 80.0),
            (Category::Reputation, 75.0),
            (Category::LocalVisibility, 75.0),
        ];
        assert_eq!(WEBSITE_WEIGHTS.overall(&scores), Ok(79));
        // same inputs, same answer
        assert_eq!(WEBSITE_WEIGHTS.overall(&scores), Ok(79));
    }

    #[test]
    fn overall_stays_in_range() {
        let high = [
            (Category::Seo, 250.0),
            (Category::Content, 100.0),
            (Category::Technology, 100.0),
        ];
        assert_eq!(CRAWL_WEIGHTS.overall(&high), Ok(100));

        let low = [
            (Category::Seo, -40.0),
            (Category::Content, 0.0),
            (Category::Technology, 0.0),
        ];
        assert_eq!(CRAWL_WEIGHTS.overall(&low), Ok(0));
    }

    #[test]
    fn uniform_scores_pass_through() {
        let scores = [
            (Category::Performance, 64.0),
            (Category::Seo, 64.0),
            (Category::TechDepth, 64.0),
            (Category::Visibility, 64.0),
        ];
        assert_eq!(PRESENCE_WEIGHTS.overall(&scores), Ok(64));
    }
}
