use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        centers::{CenterList, CreateCenterRequest, UpdateCenterRequest},
        companies::{CompanyList, CreateCompanyRequest, UpdateCompanyRequest},
        contracts::{ContractList, CreateContractRequest, UpdateContractRequest},
        farmers::{CreateFarmerRequest, FarmerList, UpdateFarmerRequest},
        inventories::{
            CreateInventoryItemRequest, CreateInventoryRequest, InventoryItemList, InventoryList,
            InventoryWithItems, UpdateInventoryItemRequest, UpdateInventoryRequest,
        },
        retailers::{CreateRetailerRequest, RetailerList, UpdateRetailerRequest},
        users::{CreateUserRequest, UpdateUserRequest, UserList},
        wholesalers::{CreateWholesalerRequest, UpdateWholesalerRequest, WholesalerList},
    },
    entity::contracts::{ContractStatus, PaymentStatus},
    models::{
        Center, Company, Contract, Farmer, Inventory, InventoryItem, Retailer, User, Wholesaler,
    },
    response::{ApiResponse, Meta},
    routes::{
        centers, companies, contracts, farmers, health, inventories, inventory_items, retailers,
        users, wholesalers,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::get_user_by_external_id,
        users::create_user,
        users::update_user,
        users::delete_user,
        companies::list_companies,
        companies::get_company,
        companies::create_company,
        companies::update_company,
        companies::delete_company,
        wholesalers::list_wholesalers,
        wholesalers::get_wholesaler,
        wholesalers::create_wholesaler,
        wholesalers::update_wholesaler,
        wholesalers::delete_wholesaler,
        centers::list_centers,
        centers::get_center,
        centers::create_center,
        centers::update_center,
        centers::delete_center,
        centers::list_center_wholesalers,
        centers::link_wholesaler,
        centers::unlink_wholesaler,
        farmers::list_farmers,
        farmers::get_farmer,
        farmers::list_farmer_contracts,
        farmers::create_farmer,
        farmers::update_farmer,
        farmers::delete_farmer,
        retailers::list_retailers,
        retailers::get_retailer,
        retailers::create_retailer,
        retailers::update_retailer,
        retailers::delete_retailer,
        contracts::list_contracts,
        contracts::get_contract,
        contracts::create_contract,
        contracts::update_contract,
        contracts::delete_contract,
        inventories::list_inventories,
        inventories::get_inventory,
        inventories::create_inventory,
        inventories::update_inventory,
        inventories::delete_inventory,
        inventory_items::list_items,
        inventory_items::get_item,
        inventory_items::create_item,
        inventory_items::update_item,
        inventory_items::delete_item
    ),
    components(
        schemas(
            User,
            Company,
            Wholesaler,
            Center,
            Farmer,
            Retailer,
            Contract,
            Inventory,
            InventoryItem,
            ContractStatus,
            PaymentStatus,
            CreateUserRequest,
            UpdateUserRequest,
            CreateCompanyRequest,
            UpdateCompanyRequest,
            CreateWholesalerRequest,
            UpdateWholesalerRequest,
            CreateCenterRequest,
            UpdateCenterRequest,
            CreateFarmerRequest,
            UpdateFarmerRequest,
            CreateRetailerRequest,
            UpdateRetailerRequest,
            CreateContractRequest,
            UpdateContractRequest,
            CreateInventoryRequest,
            UpdateInventoryRequest,
            CreateInventoryItemRequest,
            UpdateInventoryItemRequest,
            UserList,
            CompanyList,
            WholesalerList,
            CenterList,
            FarmerList,
            RetailerList,
            ContractList,
            InventoryList,
            InventoryItemList,
            InventoryWithItems,
            Meta,
            ApiResponse<Farmer>,
            ApiResponse<FarmerList>,
            ApiResponse<Contract>,
            ApiResponse<ContractList>,
            ApiResponse<InventoryWithItems>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "Identity records"),
        (name = "Companies", description = "Companies owning centers and wholesalers"),
        (name = "Wholesalers", description = "Wholesaler role records"),
        (name = "Centers", description = "Distribution centers and their wholesalers"),
        (name = "Farmers", description = "Farmer role records"),
        (name = "Retailers", description = "Retailer role records"),
        (name = "Contracts", description = "Supply contracts between farmers and wholesalers"),
        (name = "Inventories", description = "Dated stock snapshots of a center"),
        (name = "Inventory Items", description = "Lines of an inventory snapshot"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
