//! Value Objects - Immutable, identity-less domain primitives

mod area_id;
mod rain_chance;
mod temperature;

pub use area_id::AreaId;
pub use rain_chance::RainChance;
pub use temperature::{NullCheck, Sentinel, Temperature};
