//! Typed client for the HotPepper gourmet web service.
//!
//! # Overview
//! One shop-search resource (`gourmet`), one shop-name lookup (`shop`) and
//! ten master-data lookups (genres, areas, budgets, credit cards, specials)
//! share a single contract: accumulate optional filters, issue one GET,
//! and get back either the typed records or the upstream's failure code and
//! message.
//!
//! # Design
//! - `query::format_params` flattens a filter set into a canonical query
//!   (absent and empty values dropped, lists comma-joined).
//! - `envelope::classify` decides success versus failure from the decoded
//!   body alone; `response::project` turns that into `HotPepperResponse`.
//! - `ResourceClient<R, T>` implements the contract once for every
//!   `Resource`. Requests are built and responses parsed as plain data
//!   (`build_search` / `parse_search`); `search` glues them together through
//!   a `Transport`.
//! - The API key lives in a shared `Credentials` handle passed in through
//!   `ClientConfig`, not in global state.
//!
//! ```no_run
//! # async fn demo() -> Result<(), hotpepper_core::ApiError> {
//! use hotpepper_core::{ClientConfig, Credentials, HotPepper, ReqwestTransport};
//!
//! let config = ClientConfig::new(
//!     hotpepper_core::config::DEFAULT_ENDPOINT,
//!     Credentials::with_key("your-api-key")?,
//! );
//! let hp = HotPepper::new(config, ReqwestTransport::new());
//!
//! let mut search = hp.gourmet();
//! search.keyword(["ramen"]).count(5);
//! match search.search().await? {
//!     hotpepper_core::HotPepperResponse::Success { result, .. } => {
//!         for shop in result {
//!             println!("{} ({})", shop.name, shop.address);
//!         }
//!     }
//!     hotpepper_core::HotPepperResponse::Failure { status, error, .. } => {
//!         eprintln!("upstream error {}: {error}", status.code());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
mod de;
pub mod envelope;
pub mod error;
pub mod http;
pub mod query;
pub mod resources;
pub mod response;
#[cfg(feature = "reqwest")]
pub mod transport;
pub mod types;

pub use client::{HotPepper, Resource, ResourceClient};
pub use config::ClientConfig;
pub use credentials::Credentials;
pub use envelope::{is_success, Envelope, ErrorEntry, FailureCode, ResponseMeta, SUCCESS_STATUS};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, Transport};
pub use query::{format_params, CanonicalQuery, FilterSet, FilterValue, NoFilters};
pub use resources::*;
pub use response::{project, HotPepperResponse};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use types::{
    GourmetShop, LargeArea, MasterRecord, MiddleArea, ServiceArea, ShopSummary, ShopType,
    SmallArea, Special,
};
