pub mod bonding_curve;
pub mod global;
pub mod pool;
pub mod reserve_state;

pub use bonding_curve::BondingCurveAccount;
pub use global::{GlobalAccount, GlobalConfigAccount};
pub use pool::{PoolAccount, SplTokenAccount};
pub use reserve_state::{ReserveState, VenueKind};
