pub mod center_wholesalers;
pub mod centers;
pub mod companies;
pub mod contracts;
pub mod farmers;
pub mod inventories;
pub mod inventory_items;
pub mod retailers;
pub mod users;
pub mod wholesalers;

pub use center_wholesalers::Entity as CenterWholesalers;
pub use centers::Entity as Centers;
pub use companies::Entity as Companies;
pub use contracts::Entity as Contracts;
pub use farmers::Entity as Farmers;
pub use inventories::Entity as Inventories;
pub use inventory_items::Entity as InventoryItems;
pub use retailers::Entity as Retailers;
pub use users::Entity as Users;
pub use wholesalers::Entity as Wholesalers;
