use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use validator::Validate;

use crate::{
    shared::interfaces::rest::resources::error_response_resource::{
        ErrorResponseResource, FieldErrorResource,
    },
    suppliers::{
        domain::{
            model::{
                commands::{
                    create_supplier_command::CreateSupplierCommand,
                    delete_supplier_command::DeleteSupplierCommand,
                    update_supplier_command::UpdateSupplierCommand,
                },
                entities::supplier::Supplier,
                enums::supplier_domain_error::SupplierDomainError,
                queries::{
                    get_supplier_by_id_query::GetSupplierByIdQuery,
                    list_suppliers_query::ListSuppliersQuery,
                },
            },
            services::{
                supplier_command_service::SupplierCommandService,
                supplier_query_service::SupplierQueryService,
            },
        },
        interfaces::rest::resources::{
            supplier_request_resource::{ListSuppliersQueryResource, SupplierRequestResource},
            supplier_resource::SupplierResource,
        },
    },
};

type ErrorResponse = (StatusCode, Json<ErrorResponseResource>);

#[derive(Clone)]
pub struct SupplierRestControllerState {
    pub command_service: Arc<dyn SupplierCommandService>,
    pub query_service: Arc<dyn SupplierQueryService>,
}

pub fn router(state: SupplierRestControllerState) -> Router {
    Router::new()
        .route("/suppliers", post(create_supplier))
        .route("/suppliers", get(list_suppliers))
        .route("/suppliers/:supplier_id", get(get_supplier))
        .route("/suppliers/:supplier_id", put(update_supplier))
        .route("/suppliers/:supplier_id", delete(delete_supplier))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/suppliers",
    tag = "suppliers",
    request_body = SupplierRequestResource,
    responses(
        (status = 201, description = "Supplier registered", body = SupplierResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 409, description = "NIF already registered", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn create_supplier(
    State(state): State<SupplierRestControllerState>,
    Json(request): Json<SupplierRequestResource>,
) -> Result<(StatusCode, Json<SupplierResource>), ErrorResponse> {
    if let Err(validation_errors) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::from_validation_errors(&validation_errors)),
        ));
    }

    let command = CreateSupplierCommand::new(request.into_parts()).map_err(map_domain_error)?;

    let created = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_resource(&created))))
}

#[utoipa::path(
    get,
    path = "/suppliers",
    tag = "suppliers",
    params(
        ("search" = Option<String>, Query, description = "Matches name (case-insensitive) or NIF"),
        ("category" = Option<String>, Query, description = "Supplier category"),
        ("limit" = Option<i64>, Query, description = "Page size, 1..=200, default 50"),
        ("offset" = Option<i64>, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "Suppliers ordered by name", body = [SupplierResource]),
        (status = 400, description = "Unknown category", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_suppliers(
    State(state): State<SupplierRestControllerState>,
    Query(query): Query<ListSuppliersQueryResource>,
) -> Result<Json<Vec<SupplierResource>>, ErrorResponse> {
    let query = ListSuppliersQuery::new(query.search, query.category, query.limit, query.offset)
        .map_err(map_domain_error)?;

    let suppliers = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(suppliers.iter().map(to_resource).collect()))
}

#[utoipa::path(
    get,
    path = "/suppliers/{supplier_id}",
    tag = "suppliers",
    params(("supplier_id" = String, Path, description = "Supplier identifier")),
    responses(
        (status = 200, description = "Supplier", body = SupplierResource),
        (status = 400, description = "Invalid supplier id", body = ErrorResponseResource),
        (status = 404, description = "Supplier not found", body = ErrorResponseResource)
    )
)]
pub async fn get_supplier(
    State(state): State<SupplierRestControllerState>,
    Path(supplier_id): Path<String>,
) -> Result<Json<SupplierResource>, ErrorResponse> {
    let query = GetSupplierByIdQuery::new(supplier_id).map_err(map_domain_error)?;

    let supplier = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_resource(&supplier)))
}

#[utoipa::path(
    put,
    path = "/suppliers/{supplier_id}",
    tag = "suppliers",
    params(("supplier_id" = String, Path, description = "Supplier identifier")),
    request_body = SupplierRequestResource,
    responses(
        (status = 200, description = "Supplier updated", body = SupplierResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 404, description = "Supplier not found", body = ErrorResponseResource),
        (status = 409, description = "NIF already registered", body = ErrorResponseResource)
    )
)]
pub async fn update_supplier(
    State(state): State<SupplierRestControllerState>,
    Path(supplier_id): Path<String>,
    Json(request): Json<SupplierRequestResource>,
) -> Result<Json<SupplierResource>, ErrorResponse> {
    if let Err(validation_errors) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::from_validation_errors(&validation_errors)),
        ));
    }

    let command = UpdateSupplierCommand::new(supplier_id, request.into_parts())
        .map_err(map_domain_error)?;

    let updated = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_resource(&updated)))
}

#[utoipa::path(
    delete,
    path = "/suppliers/{supplier_id}",
    tag = "suppliers",
    params(("supplier_id" = String, Path, description = "Supplier identifier")),
    responses(
        (status = 204, description = "Supplier deleted"),
        (status = 400, description = "Invalid supplier id", body = ErrorResponseResource),
        (status = 404, description = "Supplier not found", body = ErrorResponseResource)
    )
)]
pub async fn delete_supplier(
    State(state): State<SupplierRestControllerState>,
    Path(supplier_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let command = DeleteSupplierCommand::new(supplier_id).map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn to_resource(supplier: &Supplier) -> SupplierResource {
    let details = supplier.details();

    SupplierResource {
        id: supplier.id().to_string(),
        name: details.name().value().to_string(),
        nif: details.nif().value().to_string(),
        email: details.email().map(|email| email.value().to_string()),
        phone: details.phone().map(|phone| phone.value().to_string()),
        category: details.category().as_str().to_string(),
        address: details.address().map(str::to_string),
        notes: details.notes().map(str::to_string),
        created_at: supplier.created_at().to_rfc3339(),
        updated_at: supplier.updated_at().to_rfc3339(),
    }
}

fn map_domain_error(error: SupplierDomainError) -> ErrorResponse {
    let status = match error {
        SupplierDomainError::InvalidSupplierId
        | SupplierDomainError::InvalidSupplierName
        | SupplierDomainError::InvalidTaxIdentificationNumber(_)
        | SupplierDomainError::InvalidEmailAddress
        | SupplierDomainError::InvalidPhoneNumber
        | SupplierDomainError::InvalidSupplierCategory
        | SupplierDomainError::InvalidSupplierAddress
        | SupplierDomainError::InvalidSupplierNotes => StatusCode::BAD_REQUEST,
        SupplierDomainError::SupplierNotFound => StatusCode::NOT_FOUND,
        SupplierDomainError::DuplicateTaxIdentificationNumber => StatusCode::CONFLICT,
        SupplierDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = match error {
        SupplierDomainError::InvalidTaxIdentificationNumber(nif_error) => {
            ErrorResponseResource::with_field_error(
                error.to_string(),
                FieldErrorResource::from_tax_identification_number_error("nif", nif_error),
            )
        }
        _ => ErrorResponseResource::new(error.to_string()),
    };

    (status, Json(body))
}
