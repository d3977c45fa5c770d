/// Simplified error system - the core functions never fail, only the
/// boundary checks and data loading do.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    PriceRangeInverted { min_price: u64, max_price: u64 },
    TermTooShort { term_years: u32 },
    DownPaymentOutOfRange { down_pct: f64 },
    NegativeRate { rate_pct: f64 },
    NegativeTaxRate { tax_pct: f64 },
    NegativeInsurance { insurance: f64 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::PriceRangeInverted { min_price, max_price } => write!(
                f,
                "Minimum price {} is above maximum price {}",
                min_price, max_price
            ),
            ValidationError::TermTooShort { term_years } => {
                write!(f, "Loan term must be at least 1 year (got {})", term_years)
            }
            ValidationError::DownPaymentOutOfRange { down_pct } => {
                write!(f, "Down payment must be between 0% and 100% (got {})", down_pct)
            }
            ValidationError::NegativeRate { rate_pct } => {
                write!(f, "Interest rate cannot be negative (got {}%)", rate_pct)
            }
            ValidationError::NegativeTaxRate { tax_pct } => {
                write!(f, "Property tax rate cannot be negative (got {}%)", tax_pct)
            }
            ValidationError::NegativeInsurance { insurance } => {
                write!(f, "Insurance cannot be negative (got {})", insurance)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure to load listings from a data source
#[derive(Debug)]
pub enum DataSourceError {
    Parse(serde_json::Error),
    DuplicateId(String),
}

impl std::fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSourceError::Parse(err) => write!(f, "Listing data is malformed: {}", err),
            DataSourceError::DuplicateId(id) => write!(f, "Listing id {} appears more than once", id),
        }
    }
}

impl std::error::Error for DataSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataSourceError::Parse(err) => Some(err),
            DataSourceError::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for DataSourceError {
    fn from(err: serde_json::Error) -> Self {
        DataSourceError::Parse(err)
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
pub type DataSourceResult<T> = Result<T, DataSourceError>;
