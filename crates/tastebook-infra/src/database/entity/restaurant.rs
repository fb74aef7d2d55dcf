//! Restaurant entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state_id: Option<Uuid>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub zipcode: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub cuisine: Option<String>,
    pub cost: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub about: Option<String>,
    pub rating: i32,
    pub profile_pic: Option<String>,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::state::Entity",
        from = "Column::StateId",
        to = "super::state::Column::Id"
    )]
    State,
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for tastebook_core::domain::Restaurant {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            city: model.city,
            state_id: model.state_id,
            street1: model.street1,
            street2: model.street2,
            zipcode: model.zipcode,
            phone: model.phone,
            website: model.website,
            cuisine: model.cuisine,
            cost: model.cost,
            about: model.about,
            rating: model.rating,
            profile_pic: model.profile_pic,
            owner_id: model.owner_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<tastebook_core::domain::Restaurant> for ActiveModel {
    fn from(restaurant: tastebook_core::domain::Restaurant) -> Self {
        Self {
            id: Set(restaurant.id),
            name: Set(restaurant.name),
            city: Set(restaurant.city),
            state_id: Set(restaurant.state_id),
            street1: Set(restaurant.street1),
            street2: Set(restaurant.street2),
            zipcode: Set(restaurant.zipcode),
            phone: Set(restaurant.phone),
            website: Set(restaurant.website),
            cuisine: Set(restaurant.cuisine),
            cost: Set(restaurant.cost),
            about: Set(restaurant.about),
            rating: Set(restaurant.rating),
            profile_pic: Set(restaurant.profile_pic),
            owner_id: Set(restaurant.owner_id),
            created_at: Set(restaurant.created_at.into()),
        }
    }
}
