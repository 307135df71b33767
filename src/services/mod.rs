pub mod center_service;
pub mod company_service;
pub mod contract_service;
pub mod farmer_service;
pub mod filters;
pub mod inventory_service;
pub mod retailer_service;
pub mod user_service;
pub mod wholesaler_service;
