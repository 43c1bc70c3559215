//! Table definitions. Every entity registers with the sea-orm entity registry, so
//! [`crate::db::connection::sync_schema`] can create the tables, their foreign keys and
//! `ON DELETE CASCADE` actions straight from these modules.

#[allow(unused_imports)]
pub mod prelude {
    pub use super::dog::Entity as Dog;
    pub use super::hunt::Entity as Hunt;
    pub use super::hunt_dog::Entity as HuntDog;
    pub use super::photo::Entity as Photo;
    pub use super::track::Entity as Track;
    pub use super::user::Entity as User;
}

pub mod dog;
pub mod hunt;
pub mod hunt_dog;
pub mod photo;
pub mod track;
pub mod types;
pub mod user;

pub use types::StringList;
