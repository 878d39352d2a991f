//! Purchase Endpoint

use gloo_net::http::Request;

use super::{authorized, config, dispatch};
use crate::error::ApiError;
use crate::models::{CartEntry, PurchaseRequest, PurchaseResponse};

/// Submit the whole cart in one request.
///
/// `Ok` means the server accepted the batch; individual lines may still have
/// failed, see `PurchaseResponse::results`.
pub async fn purchase(items: &[CartEntry]) -> Result<PurchaseResponse, ApiError> {
    let request = authorized(Request::post(&config().url("/purchase")))
        .json(&PurchaseRequest { items });
    dispatch("/purchase", request).await
}
