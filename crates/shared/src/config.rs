//! Application configuration management.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Event finance policy.
    #[serde(default)]
    pub finance: FinancePolicy,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Priority tag attached to a budget category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPriority {
    /// Must be funded first.
    High,
    /// Funded after high-priority categories.
    Medium,
    /// First to be cut.
    Low,
}

/// One entry of the default budget split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category display name.
    pub name: String,
    /// Share of the total budget, in percent.
    pub percent: Decimal,
    /// Priority tag.
    pub priority: CategoryPriority,
}

impl CategoryShare {
    fn new(name: &str, percent: Decimal, priority: CategoryPriority) -> Self {
        Self {
            name: name.to_string(),
            percent,
            priority,
        }
    }
}

/// Policy constants used by event finance calculations.
///
/// Every field has a default, so a partial `[finance]` table only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancePolicy {
    /// Length of a fundraising campaign in days.
    pub campaign_days: i64,
    /// Attendee count used for cost-per-attendee until real attendance is wired in.
    pub assumed_attendees: u32,
    /// Contingency reserve as a percentage of the total budget.
    pub contingency_percent: Decimal,
    /// Default category split applied to every new budget.
    pub category_split: Vec<CategoryShare>,
    /// Trailing window covered by a generated report, in days.
    pub report_window_days: i64,
    /// Fundraising completion below this percentage triggers a warning insight.
    pub low_fundraising_percent: Decimal,
    /// Profit margin above this percentage triggers a positive insight.
    pub healthy_margin_percent: Decimal,
    /// Number of vendors listed in a summary.
    pub top_vendor_limit: usize,
    /// Number of donation methods listed in a summary.
    pub top_method_limit: usize,
    /// Currency used when a request does not name one.
    pub default_currency: String,
}

impl Default for FinancePolicy {
    fn default() -> Self {
        Self {
            campaign_days: 90,
            assumed_attendees: 50,
            contingency_percent: dec!(10),
            category_split: default_category_split(),
            report_window_days: 30,
            low_fundraising_percent: dec!(50),
            healthy_margin_percent: dec!(20),
            top_vendor_limit: 5,
            top_method_limit: 3,
            default_currency: "KES".to_string(),
        }
    }
}

fn default_category_split() -> Vec<CategoryShare> {
    use CategoryPriority::{High, Low, Medium};

    vec![
        CategoryShare::new("Venue & Equipment", dec!(30), High),
        CategoryShare::new("Food & Catering", dec!(25), High),
        CategoryShare::new("Marketing & Promotion", dec!(15), Medium),
        CategoryShare::new("Speakers & Entertainment", dec!(15), Medium),
        CategoryShare::new("Materials & Supplies", dec!(10), Low),
        CategoryShare::new("Transportation", dec!(5), Low),
    ]
}

impl FinancePolicy {
    /// Checks that the policy is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the category split does not add up to
    /// 100%, any percentage is out of range, or a window is not positive.
    pub fn validate(&self) -> AppResult<()> {
        if self.category_split.is_empty() {
            return Err(AppError::Config(
                "finance.category_split must not be empty".to_string(),
            ));
        }

        if let Some(share) = self
            .category_split
            .iter()
            .find(|s| s.percent.is_sign_negative())
        {
            return Err(AppError::Config(format!(
                "category '{}' has a negative share",
                share.name
            )));
        }

        let total: Decimal = self.category_split.iter().map(|s| s.percent).sum();
        if total != Decimal::ONE_HUNDRED {
            return Err(AppError::Config(format!(
                "finance.category_split must add up to 100, got {total}"
            )));
        }

        if self.contingency_percent.is_sign_negative()
            || self.contingency_percent > Decimal::ONE_HUNDRED
        {
            return Err(AppError::Config(
                "finance.contingency_percent must be between 0 and 100".to_string(),
            ));
        }

        if self.campaign_days <= 0 || self.report_window_days <= 0 {
            return Err(AppError::Config(
                "finance campaign and report windows must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Attendee divisor for cost-per-attendee, never zero.
    #[must_use]
    pub fn attendee_divisor(&self) -> Decimal {
        Decimal::from(self.assumed_attendees.max(1))
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the finance
    /// policy is inconsistent.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("JAMII")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.finance.validate()?;

        Ok(app_config)
    }
}
