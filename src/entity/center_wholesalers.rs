use sea_orm::entity::prelude::*;

/// Join table between distribution centers and the wholesalers they serve.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "center_wholesalers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub center_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub wholesaler_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::centers::Entity",
        from = "Column::CenterId",
        to = "super::centers::Column::Id",
        on_delete = "Cascade"
    )]
    Center,
    #[sea_orm(
        belongs_to = "super::wholesalers::Entity",
        from = "Column::WholesalerId",
        to = "super::wholesalers::Column::Id",
        on_delete = "Cascade"
    )]
    Wholesaler,
}

impl ActiveModelBehavior for ActiveModel {}
