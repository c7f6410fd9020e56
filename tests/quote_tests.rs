//! End-to-end quoting scenarios: decoded accounts in, bounded quotes out.

use sol_quote_sdk::common::bonding_curve::BONDING_CURVE_DISCRIMINATOR;
use sol_quote_sdk::common::pool::POOL_DISCRIMINATOR;
use sol_quote_sdk::utils::calc::{market_cap_lamports, slippage_to_micro_bps};
use sol_quote_sdk::{
    quote, spot_price, BondingCurveAccount, PoolAccount, QuoteError, ReserveState,
    SplTokenAccount, TradeDirection, VenueKind,
};
use solana_sdk::pubkey::Pubkey;

fn launch_curve() -> BondingCurveAccount {
    BondingCurveAccount {
        discriminator: BONDING_CURVE_DISCRIMINATOR,
        virtual_token_reserves: 1_073_000_000_000_000,
        virtual_sol_reserves: 30_000_000_000,
        real_token_reserves: 793_100_000_000_000,
        real_sol_reserves: 0,
        token_total_supply: 1_000_000_000_000_000,
        complete: false,
        creator: Some(Pubkey::new_unique()),
    }
}

fn vault(mint: Pubkey, amount: u64) -> SplTokenAccount {
    SplTokenAccount {
        mint,
        owner: Pubkey::new_unique(),
        amount,
        delegate: None,
        state: 1,
        is_native: None,
        delegated_amount: 0,
        close_authority: None,
    }
}

#[test]
fn launch_buy_from_decoded_account() {
    let bytes = launch_curve().encode();
    let curve = BondingCurveAccount::decode(&bytes).unwrap();
    let reserves = ReserveState::from_bonding_curve(&curve, 100, 6);

    let result = quote(&reserves, TradeDirection::Buy, 1_000_000, 0.01).unwrap();
    assert_eq!(result.raw_input_amount, 1_000_000);
    assert_eq!(result.estimated_amount_out, 35_407_819_740);
    assert_eq!(result.minimum_amount_out, 35_053_741_542);
}

#[test]
fn launch_sell_mirrors_buy_direction() {
    let reserves = ReserveState::from_bonding_curve(&launch_curve(), 100, 6);
    let result = quote(&reserves, TradeDirection::Sell, 1_000_000_000, 0.01).unwrap();
    assert_eq!(result.estimated_amount_out, 27_679);
    assert_eq!(result.minimum_amount_out, 27_402);
}

#[test]
fn pool_buy_uses_real_vault_balances() {
    let base_mint = Pubkey::new_unique();
    let quote_mint = Pubkey::new_unique();
    let pool = PoolAccount {
        discriminator: POOL_DISCRIMINATOR,
        pool_bump: 253,
        index: 0,
        creator: Pubkey::new_unique(),
        base_mint,
        quote_mint,
        lp_mint: Pubkey::new_unique(),
        pool_base_token_account: Pubkey::new_unique(),
        pool_quote_token_account: Pubkey::new_unique(),
        lp_supply: 316_227_766_016,
    };
    let base_vault = vault(base_mint, 500_000_000_000);
    let quote_vault = vault(quote_mint, 200_000_000_000);
    let reserves =
        ReserveState::from_pool(&pool, &base_vault, &quote_vault, 25, 6, 9).unwrap();
    assert_eq!(reserves.venue, VenueKind::Pool);

    let result = quote(&reserves, TradeDirection::Buy, 1_000_000_000, 0.005).unwrap();
    assert_eq!(result.estimated_amount_out, 2_481_343_284);
    assert_eq!(result.minimum_amount_out, 2_468_936_567);
}

#[test]
fn minimum_never_exceeds_estimate_across_slippage_range() {
    let reserves = ReserveState::from_bonding_curve(&launch_curve(), 100, 6);
    for basis_points in [0u64, 1, 50, 100, 500, 2_500, 9_999, 10_000] {
        let slippage = basis_points as f64 / 10_000.0;
        let result = quote(&reserves, TradeDirection::Buy, 50_000_000, slippage).unwrap();
        assert!(result.minimum_amount_out <= result.estimated_amount_out);
        if basis_points == 0 {
            assert_eq!(result.minimum_amount_out, result.estimated_amount_out);
        } else {
            assert!(result.minimum_amount_out < result.estimated_amount_out);
        }
        // The floor matches the two-stage ppm scaling exactly.
        let ppm = slippage_to_micro_bps(slippage).unwrap();
        let expected = (result.estimated_amount_out as u128) * (1_000_000 - ppm as u128)
            / 1_000_000;
        assert_eq!(result.minimum_amount_out as u128, expected);
    }
}

#[test]
fn graduated_curve_refuses_every_operation() {
    let mut curve = launch_curve();
    curve.complete = true;
    let reserves = ReserveState::from_bonding_curve(&curve, 100, 6);

    assert_eq!(
        quote(&reserves, TradeDirection::Buy, 1_000_000, 0.01),
        Err(QuoteError::VenueGraduated)
    );
    assert_eq!(
        quote(&reserves, TradeDirection::Sell, 1_000_000, 0.01),
        Err(QuoteError::VenueGraduated)
    );
    assert_eq!(spot_price(&reserves), Err(QuoteError::VenueGraduated));
}

#[test]
fn market_cap_tracks_virtual_ratio() {
    let curve = launch_curve();
    let reserves = ReserveState::from_bonding_curve(&curve, 100, 6);
    let cap = market_cap_lamports(&reserves, curve.token_total_supply).unwrap();
    assert_eq!(cap, 27_958_993_476);

    // A buy raises the quote reserve and lowers the base reserve, so the
    // cap can only go up.
    let mut after = reserves;
    after.virtual_quote_reserve += 1_000_000_000;
    after.virtual_base_reserve -= 30_000_000_000_000;
    assert!(market_cap_lamports(&after, curve.token_total_supply).unwrap() > cap);
}

#[test]
fn quote_result_serializes_for_callers() {
    let reserves = ReserveState::from_bonding_curve(&launch_curve(), 100, 6);
    let result = quote(&reserves, TradeDirection::Buy, 1_000_000, 0.01).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["raw_input_amount"], 1_000_000);
    assert_eq!(json["estimated_amount_out"], 35_407_819_740u64);
    assert_eq!(json["minimum_amount_out"], 35_053_741_542u64);
}
