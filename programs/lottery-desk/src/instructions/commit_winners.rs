use anchor_lang::prelude::*;

use crate::{
    constants::{AGENT_SEED, DRAW_ATTEMPT_SEED, LOTTERY_SEED},
    error::LotteryError,
    events::LotteryCompleted,
    state::{Agent, DrawAttempt, Lottery},
};

/// Accounts required to write a selected winner list onto the lottery.
#[derive(Accounts)]
pub struct CommitWinners<'info> {
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
        mut,
        seeds = [DRAW_ATTEMPT_SEED, lottery.key().as_ref(), draw_attempt.attempt.to_le_bytes().as_ref()],
        bump = draw_attempt.bump,
        has_one = lottery,
    )]
    pub draw_attempt: Box<Account<'info, DrawAttempt>>,
}

/// Phase two of the draw: records the stored winners and completes the
/// lottery. Safe to retry with the same draw attempt until it succeeds.
pub fn process_commit_winners(ctx: Context<CommitWinners>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let lottery_key = ctx.accounts.lottery.key();
    let account_len = ctx.accounts.lottery.to_account_info().data_len();
    let draw_attempt = &mut ctx.accounts.draw_attempt;
    let lottery = &mut ctx.accounts.lottery;

    let winners = draw_attempt.pending_winners()?;
    lottery.complete_draw(draw_attempt.attempt, winners, account_len, now)?;
    draw_attempt.committed = true;

    msg!(
        "Lottery #{} completed with {} winners",
        lottery.lottery_id,
        lottery.winners.len()
    );
    emit!(LotteryCompleted {
        lottery: lottery_key,
        attempt: draw_attempt.attempt,
        completed_at: now,
    });
    Ok(())
}
