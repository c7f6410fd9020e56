//! Bonding-curve swap instruction builders.
//!
//! Account order is part of the wire contract and is fixed per action.
//! All addresses arrive pre-resolved in [`BondingCurveSwapAccounts`]; the
//! builders only fix position and writable/signer roles.

use crate::constants::{RENT_META, SYSTEM_PROGRAM_META, TOKEN_PROGRAM_META};
use crate::error::QuoteError;
use crate::instruction::payload::{
    pack_swap_payload, BUY_INSTRUCTION_DISCRIMINATOR, SELL_INSTRUCTION_DISCRIMINATOR,
};
use crate::instruction::utils::pumpfun::accounts::{PUMPFUN, PUMPFUN_META};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

/// Resolved addresses for a bonding-curve swap. PDAs and the user's
/// associated token account are derived upstream (see
/// [`crate::instruction::utils::pumpfun`]).
#[derive(Debug, Clone)]
pub struct BondingCurveSwapAccounts {
    pub payer: Pubkey,
    pub mint: Pubkey,
    pub bonding_curve: Pubkey,
    pub associated_bonding_curve: Pubkey,
    pub associated_user: Pubkey,
    pub fee_recipient: Pubkey,
    pub creator_vault: Pubkey,
    pub event_authority: Pubkey,
    pub global: Pubkey,
}

/// Buy on the bonding curve: spend up to `max_sol_cost` lamports for
/// `token_amount_out` tokens.
pub fn build_buy_instruction(
    accounts: &BondingCurveSwapAccounts,
    token_amount_out: u64,
    max_sol_cost: u64,
) -> Result<Instruction, QuoteError> {
    let data = pack_swap_payload(&BUY_INSTRUCTION_DISCRIMINATOR, token_amount_out, max_sol_cost)?;
    let metas = vec![
        AccountMeta::new_readonly(accounts.global, false),
        AccountMeta::new(accounts.fee_recipient, false),
        AccountMeta::new_readonly(accounts.mint, false),
        AccountMeta::new(accounts.bonding_curve, false),
        AccountMeta::new(accounts.associated_bonding_curve, false),
        AccountMeta::new(accounts.associated_user, false),
        AccountMeta::new(accounts.payer, true),
        SYSTEM_PROGRAM_META,
        TOKEN_PROGRAM_META,
        RENT_META,
        AccountMeta::new_readonly(accounts.event_authority, false),
        PUMPFUN_META,
    ];
    Ok(Instruction::new_with_bytes(PUMPFUN, &data, metas))
}

/// Sell on the bonding curve: spend `token_amount_in` tokens for at least
/// `min_sol_output` lamports. The creator vault sits at index 8, replacing
/// the rent sysvar from the buy list.
pub fn build_sell_instruction(
    accounts: &BondingCurveSwapAccounts,
    token_amount_in: u64,
    min_sol_output: u64,
) -> Result<Instruction, QuoteError> {
    let data = pack_swap_payload(&SELL_INSTRUCTION_DISCRIMINATOR, token_amount_in, min_sol_output)?;
    let metas = vec![
        AccountMeta::new_readonly(accounts.global, false),
        AccountMeta::new(accounts.fee_recipient, false),
        AccountMeta::new_readonly(accounts.mint, false),
        AccountMeta::new(accounts.bonding_curve, false),
        AccountMeta::new(accounts.associated_bonding_curve, false),
        AccountMeta::new(accounts.associated_user, false),
        AccountMeta::new(accounts.payer, true),
        SYSTEM_PROGRAM_META,
        AccountMeta::new(accounts.creator_vault, false),
        TOKEN_PROGRAM_META,
        AccountMeta::new_readonly(accounts.event_authority, false),
        PUMPFUN_META,
    ];
    Ok(Instruction::new_with_bytes(PUMPFUN, &data, metas))
}
