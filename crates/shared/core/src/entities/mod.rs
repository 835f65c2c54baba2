mod half_type;
mod quarter_type;
mod team;

pub use half_type::HalfType;
pub use quarter_type::QuarterType;
pub use team::Team;
