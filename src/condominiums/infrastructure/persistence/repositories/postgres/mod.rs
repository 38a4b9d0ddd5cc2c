pub mod sqlx_condominium_repository_impl;
