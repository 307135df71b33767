pub mod centers;
pub mod companies;
pub mod contracts;
pub mod farmers;
pub mod inventories;
pub mod retailers;
pub mod users;
pub mod wholesalers;
