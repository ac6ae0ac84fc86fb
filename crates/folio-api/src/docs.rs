#![allow(clippy::needless_for_each)]

use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::ServerBuilder;

use folio_types::{
    BlockchainCategory, IndividualInvestment, IndividualPortfolio, Investment, ListedProjects,
    Overview, PortfolioSnapshot, PortfolioSummary,
};

use crate::dto::{ErrorResponse, RefreshResponse};
use crate::handlers;

pub struct ServerAddon;

impl Modify for ServerAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.servers = Some(vec![ServerBuilder::new().url("/").build()]);
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&ServerAddon),
    paths(handlers::portfolio::get_portfolio, handlers::refresh::refresh_prices),
    components(schemas(
        PortfolioSnapshot,
        Overview,
        ListedProjects,
        Investment,
        IndividualPortfolio,
        IndividualInvestment,
        PortfolioSummary,
        BlockchainCategory,
        RefreshResponse,
        ErrorResponse
    )),
    tags(
        (name = "folio_dashboard", description = "Folio, portfolio dashboard"),
        (name = "Portfolio", description = "Spreadsheet proxy endpoints")
    )
)]
pub struct ApiDoc;
