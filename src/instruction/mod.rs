pub mod payload;
pub mod pumpfun;
pub mod pumpswap;
pub mod utils;

pub use payload::{
    pack_swap_payload, unpack_swap_payload, SwapPayload, BUY_INSTRUCTION_DISCRIMINATOR,
    SELL_INSTRUCTION_DISCRIMINATOR,
};
pub use pumpfun::BondingCurveSwapAccounts;
pub use pumpswap::PoolSwapAccounts;
