use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::{Json, PlainText},
};

use business::domain::shared::value_objects::{ProductId, UserId};
use business::domain::wishlist::page::PageRequest;
use business::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};
use business::domain::wishlist::use_cases::list::{ListWishlistParams, ListWishlistUseCase};
use business::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{WishlistEntryResponse, WishlistPageResponse};

const DEFAULT_PAGE: u32 = 0;
const DEFAULT_PAGE_SIZE: u32 = 5;

pub struct WishlistApi {
    list_use_case: Arc<dyn ListWishlistUseCase>,
    add_use_case: Arc<dyn AddToWishlistUseCase>,
    remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
}

impl WishlistApi {
    pub fn new(
        list_use_case: Arc<dyn ListWishlistUseCase>,
        add_use_case: Arc<dyn AddToWishlistUseCase>,
        remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            add_use_case,
            remove_use_case,
        }
    }
}

/// Wishlist API
///
/// Endpoints for listing, adding and removing the products a user wishes for.
#[OpenApi]
impl WishlistApi {
    /// Fetch a user's wishlist
    ///
    /// Returns one page of the user's wishlist, oldest entries first. An empty
    /// page is reported as 404.
    #[oai(
        path = "/wishlist/user/:user_id",
        method = "get",
        tag = "ApiTags::Wishlist"
    )]
    async fn get_user_wishlist(
        &self,
        user_id: Path<i64>,
        /// Zero-based page index (default: 0)
        page: Query<Option<u32>>,
        /// Page size, 1 to 100 (default: 5)
        size: Query<Option<u32>>,
    ) -> GetWishlistResponse {
        let request = match PageRequest::new(
            page.0.unwrap_or(DEFAULT_PAGE),
            size.0.unwrap_or(DEFAULT_PAGE_SIZE),
        ) {
            Ok(request) => request,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return GetWishlistResponse::BadRequest(json);
            }
        };

        let params = ListWishlistParams {
            user_id: UserId::new(user_id.0),
            request,
        };

        match self.list_use_case.execute(params).await {
            Ok(page) => GetWishlistResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetWishlistResponse::BadRequest(json),
                    404 => GetWishlistResponse::NotFound(json),
                    _ => GetWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to a wishlist
    ///
    /// The user and product must exist, the product must be in stock and not
    /// already on the wishlist.
    #[oai(
        path = "/wishlist/add/:user_id/:product_id",
        method = "post",
        tag = "ApiTags::Wishlist"
    )]
    async fn add_to_wishlist(
        &self,
        user_id: Path<i64>,
        product_id: Path<i64>,
    ) -> AddToWishlistResponse {
        let params = AddToWishlistParams {
            user_id: UserId::new(user_id.0),
            product_id: ProductId::new(product_id.0),
        };

        match self.add_use_case.execute(params).await {
            Ok(entry) => AddToWishlistResponse::Ok(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToWishlistResponse::BadRequest(json),
                    404 => AddToWishlistResponse::NotFound(json),
                    409 => AddToWishlistResponse::Conflict(json),
                    _ => AddToWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from a wishlist
    #[oai(
        path = "/wishlist/remove/:user_id/:product_id",
        method = "delete",
        tag = "ApiTags::Wishlist"
    )]
    async fn remove_from_wishlist(
        &self,
        user_id: Path<i64>,
        product_id: Path<i64>,
    ) -> RemoveFromWishlistResponse {
        let params = RemoveFromWishlistParams {
            user_id: UserId::new(user_id.0),
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveFromWishlistResponse::Ok(PlainText(
                "Product removed from wishlist successfully".to_string(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveFromWishlistResponse::NotFound(json),
                    _ => RemoveFromWishlistResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistEntryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFromWishlistResponse {
    #[oai(status = 200)]
    Ok(PlainText<String>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
