use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use validator::Validate;

use crate::{
    condominiums::{
        domain::{
            model::{
                commands::{
                    create_condominium_command::CreateCondominiumCommand,
                    delete_condominium_command::DeleteCondominiumCommand,
                    update_condominium_command::UpdateCondominiumCommand,
                },
                entities::condominium::Condominium,
                enums::condominium_domain_error::CondominiumDomainError,
                queries::{
                    get_condominium_by_id_query::GetCondominiumByIdQuery,
                    list_condominiums_query::ListCondominiumsQuery,
                },
            },
            services::{
                condominium_command_service::CondominiumCommandService,
                condominium_query_service::CondominiumQueryService,
            },
        },
        interfaces::rest::resources::{
            condominium_request_resource::{
                CondominiumRequestResource, ListCondominiumsQueryResource,
            },
            condominium_resource::CondominiumResource,
        },
    },
    shared::interfaces::rest::resources::error_response_resource::{
        ErrorResponseResource, FieldErrorResource,
    },
};

type ErrorResponse = (StatusCode, Json<ErrorResponseResource>);

#[derive(Clone)]
pub struct CondominiumRestControllerState {
    pub command_service: Arc<dyn CondominiumCommandService>,
    pub query_service: Arc<dyn CondominiumQueryService>,
}

pub fn router(state: CondominiumRestControllerState) -> Router {
    Router::new()
        .route("/condominiums", post(create_condominium))
        .route("/condominiums", get(list_condominiums))
        .route("/condominiums/:condominium_id", get(get_condominium))
        .route("/condominiums/:condominium_id", put(update_condominium))
        .route("/condominiums/:condominium_id", delete(delete_condominium))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/condominiums",
    tag = "condominiums",
    request_body = CondominiumRequestResource,
    responses(
        (status = 201, description = "Condominium registered", body = CondominiumResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 409, description = "NIF already registered", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn create_condominium(
    State(state): State<CondominiumRestControllerState>,
    Json(request): Json<CondominiumRequestResource>,
) -> Result<(StatusCode, Json<CondominiumResource>), ErrorResponse> {
    if let Err(validation_errors) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::from_validation_errors(&validation_errors)),
        ));
    }

    let command = CreateCondominiumCommand::new(request.into_parts()).map_err(map_domain_error)?;

    let created = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_resource(&created))))
}

#[utoipa::path(
    get,
    path = "/condominiums",
    tag = "condominiums",
    params(
        ("search" = Option<String>, Query, description = "Matches name, city or NIF"),
        ("limit" = Option<i64>, Query, description = "Page size, 1..=200, default 50"),
        ("offset" = Option<i64>, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "Condominiums ordered by name", body = [CondominiumResource]),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_condominiums(
    State(state): State<CondominiumRestControllerState>,
    Query(query): Query<ListCondominiumsQueryResource>,
) -> Result<Json<Vec<CondominiumResource>>, ErrorResponse> {
    let query = ListCondominiumsQuery::new(query.search, query.limit, query.offset);

    let condominiums = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(condominiums.iter().map(to_resource).collect()))
}

#[utoipa::path(
    get,
    path = "/condominiums/{condominium_id}",
    tag = "condominiums",
    params(("condominium_id" = String, Path, description = "Condominium identifier")),
    responses(
        (status = 200, description = "Condominium", body = CondominiumResource),
        (status = 400, description = "Invalid condominium id", body = ErrorResponseResource),
        (status = 404, description = "Condominium not found", body = ErrorResponseResource)
    )
)]
pub async fn get_condominium(
    State(state): State<CondominiumRestControllerState>,
    Path(condominium_id): Path<String>,
) -> Result<Json<CondominiumResource>, ErrorResponse> {
    let query = GetCondominiumByIdQuery::new(condominium_id).map_err(map_domain_error)?;

    let condominium = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_resource(&condominium)))
}

#[utoipa::path(
    put,
    path = "/condominiums/{condominium_id}",
    tag = "condominiums",
    params(("condominium_id" = String, Path, description = "Condominium identifier")),
    request_body = CondominiumRequestResource,
    responses(
        (status = 200, description = "Condominium updated", body = CondominiumResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 404, description = "Condominium not found", body = ErrorResponseResource),
        (status = 409, description = "NIF already registered", body = ErrorResponseResource)
    )
)]
pub async fn update_condominium(
    State(state): State<CondominiumRestControllerState>,
    Path(condominium_id): Path<String>,
    Json(request): Json<CondominiumRequestResource>,
) -> Result<Json<CondominiumResource>, ErrorResponse> {
    if let Err(validation_errors) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::from_validation_errors(&validation_errors)),
        ));
    }

    let command = UpdateCondominiumCommand::new(condominium_id, request.into_parts())
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
    path = "/condominiums/{condominium_id}",
    tag = "condominiums",
    params(("condominium_id" = String, Path, description = "Condominium identifier")),
    responses(
        (status = 204, description = "Condominium deleted"),
        (status = 400, description = "Invalid condominium id", body = ErrorResponseResource),
        (status = 404, description = "Condominium not found", body = ErrorResponseResource)
    )
)]
pub async fn delete_condominium(
    State(state): State<CondominiumRestControllerState>,
    Path(condominium_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let command = DeleteCondominiumCommand::new(condominium_id).map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn to_resource(condominium: &Condominium) -> CondominiumResource {
    let details = condominium.details();

    CondominiumResource {
        id: condominium.id().to_string(),
        name: details.name().value().to_string(),
        nif: details.nif().value().to_string(),
        address: details.address().to_string(),
        postal_code: details.postal_code().value().to_string(),
        city: details.city().to_string(),
        created_at: condominium.created_at().to_rfc3339(),
        updated_at: condominium.updated_at().to_rfc3339(),
    }
}

fn map_domain_error(error: CondominiumDomainError) -> ErrorResponse {
    let status = match error {
        CondominiumDomainError::InvalidCondominiumId
        | CondominiumDomainError::InvalidCondominiumName
        | CondominiumDomainError::InvalidTaxIdentificationNumber(_)
        | CondominiumDomainError::InvalidAddress
        | CondominiumDomainError::InvalidPostalCode
        | CondominiumDomainError::InvalidCity => StatusCode::BAD_REQUEST,
        CondominiumDomainError::CondominiumNotFound => StatusCode::NOT_FOUND,
        CondominiumDomainError::DuplicateTaxIdentificationNumber => StatusCode::CONFLICT,
        CondominiumDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = match error {
        CondominiumDomainError::InvalidTaxIdentificationNumber(nif_error) => {
            ErrorResponseResource::with_field_error(
                error.to_string(),
                FieldErrorResource::from_tax_identification_number_error("nif", nif_error),
            )
        }
        _ => ErrorResponseResource::new(error.to_string()),
    };

    (status, Json(body))
}
