//! Reservation entity for SeaORM.
//!
//! Carries the two foreign keys of the schema; both cascade on delete so
//! removing a guest or a movie removes its reservations at the store level.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub guest_id: Uuid,
    pub movie_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guest::Entity",
        from = "Column::GuestId",
        to = "super::guest::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Guest,
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Movie,
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Reservation.
impl From<Model> for marquee_core::domain::Reservation {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            guest_id: model.guest_id,
            movie_id: model.movie_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Reservation to SeaORM ActiveModel.
impl From<marquee_core::domain::Reservation> for ActiveModel {
    fn from(reservation: marquee_core::domain::Reservation) -> Self {
        Self {
            id: Set(reservation.id),
            guest_id: Set(reservation.guest_id),
            movie_id: Set(reservation.movie_id),
            created_at: Set(reservation.created_at.into()),
            updated_at: Set(reservation.updated_at.into()),
        }
    }
}
