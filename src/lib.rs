//! Deterministic swap quoting for PumpFun bonding curves and PumpSwap pools.
//!
//! The crate decodes raw account bytes into typed reserve snapshots, prices
//! constant-product swaps with basis-point fees and slippage floors in
//! 128-bit integer math, packs fixed-layout instruction payloads, assembles
//! the fixed account lists each venue expects, and picks the live venue for
//! a pair. It never touches the network: account bytes and pool candidates
//! are injected through the traits in [`routing`].

pub mod common;
pub mod constants;
pub mod error;
pub mod instruction;
pub mod parser;
pub mod routing;
pub mod utils;

pub use common::{
    BondingCurveAccount, GlobalAccount, GlobalConfigAccount, PoolAccount, ReserveState,
    SplTokenAccount, VenueKind,
};
pub use error::QuoteError;
pub use routing::{select_venue, AccountReader, CandidatePool, PoolLookup, VenueDescriptor};
pub use utils::calc::{quote, spot_price, QuoteResult, TradeDirection};
