pub mod get_condominium_by_id_query;
pub mod list_condominiums_query;
