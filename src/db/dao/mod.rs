pub mod base;
pub mod base_traits;
mod context;
pub mod dog_dao;
pub mod error;
pub mod hunt_dao;
pub mod hunt_dog_dao;
pub mod photo_dao;
pub mod track_dao;
pub mod user_dao;

pub use base::{ColumnFilter, CompareOp, DaoBase, DaoPager, FilterOp, PaginatedResponse};
pub use base_traits::{HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};
pub use context::DaoContext;
pub use dog_dao::DogDao;
pub use error::{DaoLayerError, DaoResult};
pub use hunt_dao::{HuntChanges, HuntDao, HuntQuery, NewHunt};
pub use hunt_dog_dao::HuntDogDao;
pub use photo_dao::{NewPhoto, PhotoDao};
pub use track_dao::TrackDao;
pub use user_dao::UserDao;
