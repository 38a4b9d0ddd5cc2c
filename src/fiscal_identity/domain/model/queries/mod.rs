pub mod verify_nif_query;
