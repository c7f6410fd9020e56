pub mod pumpfun;
pub mod pumpswap;
