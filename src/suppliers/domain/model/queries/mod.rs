pub mod get_supplier_by_id_query;
pub mod list_suppliers_query;
