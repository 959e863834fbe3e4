//! Guest entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Guest.
impl From<Model> for marquee_core::domain::Guest {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            mobile: model.mobile,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Guest to SeaORM ActiveModel.
impl From<marquee_core::domain::Guest> for ActiveModel {
    fn from(guest: marquee_core::domain::Guest) -> Self {
        Self {
            id: Set(guest.id),
            name: Set(guest.name),
            mobile: Set(guest.mobile),
            created_at: Set(guest.created_at.into()),
            updated_at: Set(guest.updated_at.into()),
        }
    }
}
