use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::{
    constants::{AGENT_SEED, DRAW_ATTEMPT_SEED, LOTTERY_SEED, TICKET_POOL_SEED},
    error::LotteryError,
    events::WinnersSelected,
    state::{Agent, DrawAttempt, Lottery, TicketPool},
    utils::{draw::select_winners, randomness::DrawRng},
};

/// Accounts required to reveal the randomness and pick the winners.
///
/// Ensures:
/// 1. The randomness account is the one committed in `start_draw`.
/// 2. The draw attempt is the lottery's current one.
#[derive(Accounts)]
pub struct RevealWinners<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [AGENT_SEED, authority.key().as_ref()],
        bump = agent.bump,
        has_one = authority @ LotteryError::Unauthorized,
    )]
    pub agent: Account<'info, Agent>,

    #[account(
        seeds = [LOTTERY_SEED, agent.key().as_ref(), lottery.lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump,
        has_one = agent @ LotteryError::Unauthorized,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(
        seeds = [TICKET_POOL_SEED, lottery.key().as_ref()],
        bump = ticket_pool.bump,
        has_one = lottery,
    )]
    pub ticket_pool: Account<'info, TicketPool>,

    #[account(
        mut,
        seeds = [DRAW_ATTEMPT_SEED, lottery.key().as_ref(), draw_attempt.attempt.to_le_bytes().as_ref()],
        bump = draw_attempt.bump,
        has_one = lottery,
    )]
    pub draw_attempt: Box<Account<'info, DrawAttempt>>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: The account's data is validated manually within the handler.
    #[account(
        constraint = randomness_account_data.key() == draw_attempt.randomness_account
            @ LotteryError::IncorrectRandomnessAccount,
    )]
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Phase one of the draw: selects the winners and stores them on the draw
/// attempt. Running it again for the same attempt fails, so retries can
/// never re-randomize.
pub fn process_reveal_winners(ctx: Context<RevealWinners>) -> Result<()> {
    ctx.accounts.agent.require_active()?;

    let clock = Clock::get()?;
    let lottery = &ctx.accounts.lottery;
    let draw_attempt = &mut ctx.accounts.draw_attempt;
    lottery.require_current_draw(draw_attempt.attempt)?;

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LotteryError::InvalidRandomnessAccount)?;
    let revealed_random_value = randomness_data
        .get_value(&clock)
        .map_err(|_| LotteryError::RandomnessNotResolved)?;

    let lottery_key = lottery.key();
    let mut rng = DrawRng::from_parts(&[
        &revealed_random_value,
        lottery_key.as_ref(),
        &draw_attempt.attempt.to_le_bytes(),
    ]);
    let winners = select_winners(&lottery.prizes, &ctx.accounts.ticket_pool.tickets, &mut rng)?;

    for winner in &winners {
        msg!(
            "Prize {} '{}' -> ticket {} (#{})",
            winner.prize_index,
            winner.prize_name,
            winner.ticket_id,
            winner.ticket_number
        );
    }
    if winners.len() < lottery.prizes.len() {
        msg!(
            "{} of {} prizes awarded, not enough eligible tickets",
            winners.len(),
            lottery.prizes.len()
        );
    }

    emit!(WinnersSelected {
        lottery: lottery_key,
        attempt: draw_attempt.attempt,
        winners: winners.clone(),
    });
    draw_attempt.record_winners(revealed_random_value, winners)?;
    Ok(())
}
