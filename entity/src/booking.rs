use sea_orm::entity::prelude::*;

/// A booking of an item for a time window.
///
/// `status` holds one of `WAITING`, `APPROVED` or `REJECTED`; the typed
/// `BookingStatus` enum in the application layer converts at the boundary.
/// A booking is created `WAITING` and moved exactly once to a terminal state
/// by the item's owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_id: i32,
    pub booker_id: i32,
    pub start: DateTimeUtc,
    pub end: DateTimeUtc,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Item,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::BookerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Booker,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
