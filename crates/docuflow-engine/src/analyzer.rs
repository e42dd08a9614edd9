//! Analysis seam: the trait handlers schedule against, plus the simulated
//! implementation that stands in for a real extraction backend.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use docuflow_core::models::ExtractedData;

/// Vendor stamped on every simulated extraction.
pub const SIMULATED_VENDOR: &str = "Acme Corp";

/// Category stamped on every simulated extraction.
pub const SIMULATED_CATEGORY: &str = "Office Supplies";

/// Lower bound of the simulated amount, inclusive.
pub const AMOUNT_MIN: i64 = 100;

/// Upper bound of the simulated amount, inclusive.
pub const AMOUNT_MAX: i64 = 5099;

/// Amounts strictly above this trigger the approval workflow.
pub const APPROVAL_THRESHOLD: i64 = 1000;

/// Workflow label for amounts above [`APPROVAL_THRESHOLD`].
pub const WORKFLOW_MANAGER_APPROVAL: &str = "Manager Approval Required";

/// Workflow label for amounts at or below [`APPROVAL_THRESHOLD`].
pub const WORKFLOW_AUTO_APPROVED: &str = "Auto-approved";

/// Selects the workflow label for an extracted amount.
pub fn workflow_for_amount(amount: i64) -> &'static str {
    if amount > APPROVAL_THRESHOLD {
        WORKFLOW_MANAGER_APPROVAL
    } else {
        WORKFLOW_AUTO_APPROVED
    }
}

/// Produces extracted fields for an uploaded document.
///
/// Implementations never see file content; the pipeline hands them the
/// intake metadata only. A real extraction backend would widen this seam.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze(&self, filename: &str, content_type: &str) -> Result<ExtractedData>;
}

/// Simulated analyzer: fixed vendor and category, pseudo-random amount,
/// and the current calendar date. Never fails.
#[derive(Debug, Default, Clone)]
pub struct SimulatedAnalyzer;

#[async_trait]
impl DocumentAnalyzer for SimulatedAnalyzer {
    async fn analyze(&self, _filename: &str, _content_type: &str) -> Result<ExtractedData> {
        let amount = rand::rng().random_range(AMOUNT_MIN..=AMOUNT_MAX);
        Ok(ExtractedData {
            vendor: SIMULATED_VENDOR.to_string(),
            amount,
            date: Utc::now().format("%Y-%m-%d").to_string(),
            category: SIMULATED_CATEGORY.to_string(),
        })
    }
}

/// Analyzer that returns the same extraction every time. Useful in tests
/// for pinning the workflow branch taken for a known amount.
#[derive(Debug, Clone)]
pub struct FixedAnalyzer {
    pub extracted: ExtractedData,
}

impl FixedAnalyzer {
    pub fn with_amount(amount: i64) -> Self {
        Self {
            extracted: ExtractedData {
                vendor: SIMULATED_VENDOR.to_string(),
                amount,
                date: Utc::now().format("%Y-%m-%d").to_string(),
                category: SIMULATED_CATEGORY.to_string(),
            },
        }
    }
}

#[async_trait]
impl DocumentAnalyzer for FixedAnalyzer {
    async fn analyze(&self, _filename: &str, _content_type: &str) -> Result<ExtractedData> {
        Ok(self.extracted.clone())
    }
}
