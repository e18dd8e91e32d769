use anchor_lang::prelude::*;

use crate::{
    constants::{AGENT_SEED, LOTTERY_SEED, TICKET_POOL_SEED},
    error::LotteryError,
    events::{BalanceAdjusted, LotteryCancelled, LotteryDeleted},
    state::{to_delta, Agent, LedgerReason, Lottery, TicketPool},
};

/// Accounts required to cancel a lottery. Inactive agents may still cancel.
#[derive(Accounts)]
pub struct CancelLottery<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
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
        seeds = [TICKET_POOL_SEED, lottery.key().as_ref()],
        bump = ticket_pool.bump,
        has_one = lottery,
    )]
    pub ticket_pool: Account<'info, TicketPool>,
}

/// Cancels an active or drawing lottery: every active ticket is cancelled
/// and the whole prize pool goes back to the agent.
pub fn process_cancel_lottery(ctx: Context<CancelLottery>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let agent_key = ctx.accounts.agent.key();
    let lottery_key = ctx.accounts.lottery.key();
    let agent = &mut ctx.accounts.agent;
    let lottery = &mut ctx.accounts.lottery;

    let tickets_cancelled = lottery.cancel(&mut ctx.accounts.ticket_pool, agent, now)?;
    let refund = lottery.prize_pool;

    msg!(
        "Lottery #{} cancelled: {} tickets cancelled, {} refunded",
        lottery.lottery_id,
        tickets_cancelled,
        refund
    );
    emit!(BalanceAdjusted::entry(
        agent_key,
        agent,
        to_delta(refund)?,
        LedgerReason::LotteryCancelled,
        Some(lottery_key)
    ));
    emit!(LotteryCancelled {
        lottery: lottery_key,
        tickets_cancelled,
        refund,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DeleteLottery<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
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
}

/// Retires an active lottery with no booked tickets and refunds its prize
/// pool. The account is kept with status `Deleted`.
pub fn process_delete_lottery(ctx: Context<DeleteLottery>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let agent_key = ctx.accounts.agent.key();
    let lottery_key = ctx.accounts.lottery.key();
    let agent = &mut ctx.accounts.agent;
    let lottery = &mut ctx.accounts.lottery;

    let refund = lottery.delete(agent, now)?;

    msg!("Lottery #{} deleted, {} refunded", lottery.lottery_id, refund);
    emit!(BalanceAdjusted::entry(
        agent_key,
        agent,
        to_delta(refund)?,
        LedgerReason::LotteryDeleted,
        Some(lottery_key)
    ));
    emit!(LotteryDeleted {
        lottery: lottery_key,
        refund,
    });
    Ok(())
}
