pub mod enums;
pub mod projections;
