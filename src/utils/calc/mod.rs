pub mod common;
pub mod constant_product;

pub use common::{slippage_to_micro_bps, BASIS_POINTS_DENOMINATOR, SLIPPAGE_DENOMINATOR};
pub use constant_product::{market_cap_lamports, quote, spot_price, QuoteResult, TradeDirection};
