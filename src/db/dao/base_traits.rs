use sea_orm::entity::prelude::DateTimeWithTimeZone;

pub trait HasCreatedAtColumn: sea_orm::EntityTrait {
    fn created_at_column() -> Self::Column;
}

pub trait HasIdActiveModel {
    fn set_id(&mut self, id: uuid::Uuid);
}

/// Generated by `#[base_entity]`. Entities declared `immutable` report no update
/// timestamp and ignore `set_updated_at`.
pub trait TimestampedActiveModel {
    fn created_at(&self) -> Option<DateTimeWithTimeZone>;
    fn set_created_at(&mut self, ts: DateTimeWithTimeZone);
    fn updated_at(&self) -> Option<DateTimeWithTimeZone>;
    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone);
}
