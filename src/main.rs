use axum::Router;
use condoflow_api::{
    condominiums::{
        build_condominiums_router,
        interfaces::rest::resources::{
            condominium_request_resource::{
                CondominiumRequestResource, ListCondominiumsQueryResource,
            },
            condominium_resource::CondominiumResource,
        },
    },
    config::{app_config::AppConfig, tracing_config::init_tracing},
    fiscal_identity::{
        build_fiscal_identity_router,
        interfaces::rest::resources::nif_verification_resource::{
            NifVerificationResource, VerifyNifRequestResource,
        },
    },
    shared::{
        infrastructure::persistence::postgres::postgres_connection::connect_and_migrate,
        interfaces::rest::resources::error_response_resource::{
            ErrorResponseResource, FieldErrorResource,
        },
    },
    suppliers::{
        build_suppliers_router,
        interfaces::rest::resources::{
            supplier_request_resource::{ListSuppliersQueryResource, SupplierRequestResource},
            supplier_resource::SupplierResource,
        },
    },
};
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        condoflow_api::fiscal_identity::interfaces::rest::controllers::fiscal_identity_rest_controller::verify_nif,
        condoflow_api::suppliers::interfaces::rest::controllers::supplier_rest_controller::create_supplier,
        condoflow_api::suppliers::interfaces::rest::controllers::supplier_rest_controller::list_suppliers,
        condoflow_api::suppliers::interfaces::rest::controllers::supplier_rest_controller::get_supplier,
        condoflow_api::suppliers::interfaces::rest::controllers::supplier_rest_controller::update_supplier,
        condoflow_api::suppliers::interfaces::rest::controllers::supplier_rest_controller::delete_supplier,
        condoflow_api::condominiums::interfaces::rest::controllers::condominium_rest_controller::create_condominium,
        condoflow_api::condominiums::interfaces::rest::controllers::condominium_rest_controller::list_condominiums,
        condoflow_api::condominiums::interfaces::rest::controllers::condominium_rest_controller::get_condominium,
        condoflow_api::condominiums::interfaces::rest::controllers::condominium_rest_controller::update_condominium,
        condoflow_api::condominiums::interfaces::rest::controllers::condominium_rest_controller::delete_condominium
    ),
    components(
        schemas(
            VerifyNifRequestResource,
            NifVerificationResource,
            SupplierRequestResource,
            ListSuppliersQueryResource,
            SupplierResource,
            CondominiumRequestResource,
            ListCondominiumsQueryResource,
            CondominiumResource,
            ErrorResponseResource,
            FieldErrorResource
        )
    ),
    tags(
        (name = "fiscal-identity", description = "Tax identification number (NIF) verification"),
        (name = "suppliers", description = "Supplier registry bounded context"),
        (name = "condominiums", description = "Condominium registry bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config);

    let pool = connect_and_migrate(&config)
        .await
        .expect("failed to connect to postgres");

    let app = Router::new()
        .merge(build_fiscal_identity_router())
        .merge(build_suppliers_router(pool.clone()))
        .merge(build_condominiums_router(pool))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("server listening on http://localhost:{}", config.port);
    info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
