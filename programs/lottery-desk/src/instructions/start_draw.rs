use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::{
    constants::{AGENT_SEED, DRAW_ATTEMPT_SEED, LOTTERY_SEED, TICKET_POOL_SEED},
    error::LotteryError,
    events::DrawStarted,
    state::{Agent, DrawAttempt, Lottery, TicketPool},
};

/// Accounts required to start drawing a lottery.
///
/// Ensures:
/// 1. Only the owning agent's authority can start the draw.
/// 2. The randomness account was committed in the previous slot and has not
///    been revealed.
/// 3. Each attempt gets its own draw attempt account.
#[derive(Accounts)]
pub struct StartDraw<'info> {
    /// The agent's wallet, paying for the draw attempt account.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [AGENT_SEED, authority.key().as_ref()],
        bump = agent.bump,
        has_one = authority @ LotteryError::Unauthorized,
    )]
    pub agent: Account<'info, Agent>,

    #[account(
        mut,
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
        init,
        payer = authority,
        space = 8 + DrawAttempt::INIT_SPACE,
        seeds = [
            DRAW_ATTEMPT_SEED,
            lottery.key().as_ref(),
            lottery.draw_attempts.saturating_add(1).to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub draw_attempt: Box<Account<'info, DrawAttempt>>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Moves the lottery from active to drawing and binds the draw to a freshly
/// committed randomness account. Fails without any change when there are no
/// prizes or no eligible tickets.
pub fn process_start_draw(ctx: Context<StartDraw>) -> Result<()> {
    ctx.accounts.agent.require_active()?;

    let clock = Clock::get()?;
    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LotteryError::InvalidRandomnessAccount)?;
    if randomness_data.seed_slot != clock.slot.saturating_sub(1) {
        msg!("Seed slot: {}", randomness_data.seed_slot);
        msg!("Current slot: {}", clock.slot);
        return err!(LotteryError::RandomnessAlreadyRevealed);
    }

    let lottery_key = ctx.accounts.lottery.key();
    let randomness_account = ctx.accounts.randomness_account_data.key();
    let eligible = ctx.accounts.ticket_pool.eligible_count();
    let lottery = &mut ctx.accounts.lottery;
    let attempt = lottery.begin_draw(eligible, clock.unix_timestamp)?;

    ctx.accounts.draw_attempt.set_inner(DrawAttempt::open(
        lottery_key,
        attempt,
        randomness_account,
        randomness_data.seed_slot,
        clock.unix_timestamp,
        ctx.bumps.draw_attempt,
    ));

    msg!(
        "Draw #{} started for lottery #{}: {} eligible tickets, {} prizes",
        attempt,
        lottery.lottery_id,
        eligible,
        lottery.prizes.len()
    );
    emit!(DrawStarted {
        lottery: lottery_key,
        attempt,
        randomness_account,
    });
    Ok(())
}
