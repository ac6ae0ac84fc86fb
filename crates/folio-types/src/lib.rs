pub mod category;
pub mod de;
pub mod investment;
pub mod overview;
pub mod portfolio;
pub mod snapshot;
pub mod vesting;

pub use category::BlockchainCategory;
pub use investment::{IndividualInvestment, Investment};
pub use overview::{ListedProjects, Overview};
pub use portfolio::{IndividualPortfolio, PortfolioSummary};
pub use snapshot::PortfolioSnapshot;
pub use vesting::VestingMonth;
