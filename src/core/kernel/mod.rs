/// Transport kernel shared by exchange connectors
///
/// The kernel contains only transport logic: building URLs and query strings,
/// attaching authentication produced by a pluggable [`Signer`], dispatching
/// the request and normalizing the response into `Result<Value, ExchangeError>`.
/// Exchange-specific knowledge (paths, parameter shapes, signing scheme) lives
/// under `exchanges`.
///
/// # Example
/// ```rust,no_run
/// use latoken::core::kernel::*;
/// use latoken::exchanges::latoken::LatokenSigner;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), latoken::ExchangeError> {
/// let rest_config = RestClientConfig::new(
///     "https://api.latoken.com".to_string(),
///     "latoken".to_string(),
/// );
/// let signer = Arc::new(LatokenSigner::new("api_key".to_string(), "secret".to_string()));
/// let rest = RestClientBuilder::new(rest_config).with_signer(signer).build()?;
///
/// let markets = rest.get("/public/markets", &Params::new(), false).await?;
/// # let _ = markets;
/// # Ok(())
/// # }
/// ```
pub mod rest;
pub mod signer;

pub use rest::{
    create_query_string, to_params, Params, ReqwestRest, RestClient, RestClientBuilder,
    RestClientConfig,
};
pub use signer::{SignatureResult, Signer};
