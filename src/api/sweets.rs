//! Sweet Endpoints
//!
//! List/search, create, restock and delete.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{authorized, config, dispatch};
use crate::error::ApiError;
use crate::models::{
    CreateResponse, DeleteResponse, ListResponse, NewSweet, RestockRequest, RestockResponse,
    SearchCriteria, Sweet,
};

/// Unfiltered catalog for default criteria, search otherwise
pub(crate) fn list_path(criteria: &SearchCriteria) -> &'static str {
    if criteria.is_default() { "/getsweets" } else { "/searchsweets" }
}

pub(crate) fn delete_path(sweet_id: &str) -> String {
    format!("/deletesweet/{}", utf8_percent_encode(sweet_id, NON_ALPHANUMERIC))
}

/// Fetch the sweets matching `criteria`, exactly as the server returns them
pub async fn list_sweets(criteria: &SearchCriteria) -> Result<Vec<Sweet>, ApiError> {
    let path = list_path(criteria);
    let mut builder = authorized(Request::get(&config().url(path)));
    if !criteria.is_default() {
        builder = builder.query(criteria.query_params());
    }
    let response: ListResponse = dispatch(path, builder.build()).await?;
    Ok(response.sweets)
}

pub async fn create_sweet(sweet: &NewSweet) -> Result<CreateResponse, ApiError> {
    let request = authorized(Request::post(&config().url("/addsweet"))).json(sweet);
    dispatch("/addsweet", request).await
}

/// Increase a sweet's stock by `quantity`
pub async fn restock_sweet(sweet_id: &str, quantity: u32) -> Result<RestockResponse, ApiError> {
    let request = authorized(Request::post(&config().url("/restock")))
        .json(&RestockRequest { quantity, sweet_id });
    dispatch("/restock", request).await
}

pub async fn delete_sweet(sweet_id: &str) -> Result<DeleteResponse, ApiError> {
    let path = delete_path(sweet_id);
    let request = authorized(Request::delete(&config().url(&path))).build();
    dispatch(&path, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortField;

    #[test]
    fn test_list_path_switches_to_search() {
        let mut criteria = SearchCriteria::default();
        assert_eq!(list_path(&criteria), "/getsweets");

        criteria.category = "Cake".to_string();
        assert_eq!(list_path(&criteria), "/searchsweets");

        let sorted = SearchCriteria { sort_by: SortField::Name, ..Default::default() };
        assert_eq!(list_path(&sorted), "/searchsweets");
    }

    #[test]
    fn test_delete_path_encodes_id() {
        assert_eq!(delete_path("64f1c0ffee"), "/deletesweet/64f1c0ffee");
        assert_eq!(delete_path("a/b c"), "/deletesweet/a%2Fb%20c");
    }
}
