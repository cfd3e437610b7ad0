use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, MessageResponse, ProductResponse, UpdateProductRequest,
};
use crate::api::product::error_mapper::INVALID_ID;
use crate::api::tags::ApiTags;

pub const PRODUCT_DELETED: &str = "Product deleted successfully";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }

    async fn list_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }
}

fn parse_id(raw: &str) -> Result<ProductId, Json<ErrorResponse>> {
    raw.parse::<ProductId>()
        .map_err(|_| Json(ErrorResponse::new(INVALID_ID)))
}

/// Product catalog API
///
/// Endpoints for listing, reading, creating, updating and deleting products.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product in insertion order.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        self.list_products().await
    }

    /// List all products (legacy path)
    ///
    /// Same as `GET /products`, kept for clients of the original file listing.
    #[oai(
        path = "/productos.json",
        method = "get",
        tag = "ApiTags::Products",
        deprecated
    )]
    async fn get_all_products_legacy(&self) -> GetAllProductsResponse {
        self.list_products().await
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new product
    ///
    /// All six fields are required; zero price or stock counts as missing.
    /// The id is assigned by the catalog.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            title: body.0.title,
            description: body.0.description,
            price: body.0.price,
            thumbnail: body.0.thumbnail,
            code: body.0.code,
            stock: body.0.stock,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Overwrites only the fields present in the body. The id never changes.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id,
            title: body.0.title,
            description: body.0.description,
            price: body.0.price,
            thumbnail: body.0.thumbnail,
            code: body.0.code,
            stock: body.0.stock,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Succeeds whether or not the product exists.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok(Json(MessageResponse {
                message: PRODUCT_DELETED.to_string(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
