use condoflow_api::condominiums::domain::{
    model::{
        entities::condominium::Condominium,
        enums::condominium_domain_error::CondominiumDomainError,
        queries::{
            get_condominium_by_id_query::GetCondominiumByIdQuery,
            list_condominiums_query::ListCondominiumsQuery,
        },
    },
    services::condominium_query_service::CondominiumQueryService,
};

use crate::support::{
    create_harness,
    fixtures::{ALAMEDA_NIF, BOAVISTA_NIF, MARGINAL_NIF},
    harness::CondominiumTestHarness,
    registered_condominium,
};

fn names(condominiums: &[Condominium]) -> Vec<&str> {
    condominiums
        .iter()
        .map(|condominium| condominium.details().name().value())
        .collect()
}

fn seeded_harness() -> CondominiumTestHarness {
    create_harness(vec![
        registered_condominium("Residencial Alameda", ALAMEDA_NIF, "Lisboa"),
        registered_condominium("Edifício Boavista", BOAVISTA_NIF, "Porto"),
        registered_condominium("Torre Marginal", MARGINAL_NIF, "Oeiras"),
    ])
}

#[tokio::test]
async fn handle_list_matches_name_city_or_nif() {
    let harness = seeded_harness();

    let by_city = harness
        .query_service
        .handle_list(ListCondominiumsQuery::new(Some("lisboa".to_string()), None, None))
        .await
        .expect("list should succeed");
    let by_name = harness
        .query_service
        .handle_list(ListCondominiumsQuery::new(Some("TORRE".to_string()), None, None))
        .await
        .expect("list should succeed");
    let by_nif = harness
        .query_service
        .handle_list(ListCondominiumsQuery::new(Some("248915".to_string()), None, None))
        .await
        .expect("list should succeed");

    assert_eq!(names(&by_city), vec!["Residencial Alameda"]);
    assert_eq!(names(&by_name), vec!["Torre Marginal"]);
    assert_eq!(names(&by_nif), vec!["Edifício Boavista"]);
}

#[tokio::test]
async fn handle_list_clamps_paging_parameters() {
    let harness = seeded_harness();

    let everything = harness
        .query_service
        .handle_list(ListCondominiumsQuery::new(Some("   ".to_string()), Some(0), Some(-5)))
        .await
        .expect("list should succeed");
    let tail = harness
        .query_service
        .handle_list(ListCondominiumsQuery::new(None, Some(10), Some(2)))
        .await
        .expect("list should succeed");

    // limit 0 is raised to 1; the negative offset becomes 0
    assert_eq!(names(&everything), vec!["Edifício Boavista"]);
    assert_eq!(names(&tail), vec!["Torre Marginal"]);
}

#[tokio::test]
async fn handle_get_maps_missing_row_to_not_found() {
    let harness = seeded_harness();

    let result = harness
        .query_service
        .handle_get(
            GetCondominiumByIdQuery::new("0190b6a4-8c52-7d5e-9f00-4a2b3c4d5e6f".to_string())
                .expect("valid query"),
        )
        .await;

    assert!(matches!(
        result,
        Err(CondominiumDomainError::CondominiumNotFound)
    ));
}

#[tokio::test]
async fn handle_get_propagates_infrastructure_failure() {
    let existing = registered_condominium("Edifício Boavista", BOAVISTA_NIF, "Porto");
    let harness = create_harness(vec![existing.clone()]);
    harness.repository.fail_reads();

    let result = harness
        .query_service
        .handle_get(GetCondominiumByIdQuery::new(existing.id().to_string()).expect("valid query"))
        .await;

    assert!(matches!(
        result,
        Err(CondominiumDomainError::InfrastructureError(message)) if message == "connection refused"
    ));
}

#[tokio::test]
async fn handle_list_treats_pattern_characters_literally() {
    let harness = create_harness(vec![
        registered_condominium("Bloco_A", BOAVISTA_NIF, "Porto"),
        registered_condominium("Bloco B", ALAMEDA_NIF, "Lisboa"),
    ]);

    let result = harness
        .query_service
        .handle_list(ListCondominiumsQuery::new(Some("o_a".to_string()), None, None))
        .await
        .expect("list should succeed");

    assert_eq!(names(&result), vec!["Bloco_A"]);
}
