//! Pool swap instruction builders for the PumpSwap AMM.
//!
//! Both actions share one 17-account order; only the payload differs. The
//! token programs are passed per mint because a Token-2022 base can pair
//! with a classic-program WSOL quote.

use crate::constants::{ASSOCIATED_TOKEN_PROGRAM_META, SYSTEM_PROGRAM_META};
use crate::error::QuoteError;
use crate::instruction::payload::{
    pack_swap_payload, BUY_INSTRUCTION_DISCRIMINATOR, SELL_INSTRUCTION_DISCRIMINATOR,
};
use crate::instruction::utils::pumpswap::accounts::{AMM_PROGRAM, AMM_PROGRAM_META};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

/// Resolved addresses for a pool swap (see
/// [`crate::instruction::utils::pumpswap`] for the derivations).
#[derive(Debug, Clone)]
pub struct PoolSwapAccounts {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub global_config: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub user_base_token_account: Pubkey,
    pub user_quote_token_account: Pubkey,
    pub pool_base_token_account: Pubkey,
    pub pool_quote_token_account: Pubkey,
    pub protocol_fee_recipient: Pubkey,
    pub protocol_fee_recipient_token_account: Pubkey,
    pub base_token_program: Pubkey,
    pub quote_token_program: Pubkey,
    pub event_authority: Pubkey,
}

fn swap_metas(accounts: &PoolSwapAccounts) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(accounts.pool, false),
        AccountMeta::new(accounts.user, true),
        AccountMeta::new_readonly(accounts.global_config, false),
        AccountMeta::new_readonly(accounts.base_mint, false),
        AccountMeta::new_readonly(accounts.quote_mint, false),
        AccountMeta::new(accounts.user_base_token_account, false),
        AccountMeta::new(accounts.user_quote_token_account, false),
        AccountMeta::new(accounts.pool_base_token_account, false),
        AccountMeta::new(accounts.pool_quote_token_account, false),
        AccountMeta::new_readonly(accounts.protocol_fee_recipient, false),
        AccountMeta::new(accounts.protocol_fee_recipient_token_account, false),
        AccountMeta::new_readonly(accounts.base_token_program, false),
        AccountMeta::new_readonly(accounts.quote_token_program, false),
        SYSTEM_PROGRAM_META,
        ASSOCIATED_TOKEN_PROGRAM_META,
        AccountMeta::new_readonly(accounts.event_authority, false),
        AMM_PROGRAM_META,
    ]
}

/// Buy base tokens from the pool: receive `base_amount_out`, spending at
/// most `max_quote_in` of the quote mint.
pub fn build_buy_instruction(
    accounts: &PoolSwapAccounts,
    base_amount_out: u64,
    max_quote_in: u64,
) -> Result<Instruction, QuoteError> {
    let data = pack_swap_payload(&BUY_INSTRUCTION_DISCRIMINATOR, base_amount_out, max_quote_in)?;
    Ok(Instruction::new_with_bytes(AMM_PROGRAM, &data, swap_metas(accounts)))
}

/// Sell base tokens to the pool: spend `base_amount_in`, receiving at least
/// `min_quote_out` of the quote mint.
pub fn build_sell_instruction(
    accounts: &PoolSwapAccounts,
    base_amount_in: u64,
    min_quote_out: u64,
) -> Result<Instruction, QuoteError> {
    let data = pack_swap_payload(&SELL_INSTRUCTION_DISCRIMINATOR, base_amount_in, min_quote_out)?;
    Ok(Instruction::new_with_bytes(AMM_PROGRAM, &data, swap_metas(accounts)))
}
