use anchor_lang::prelude::*;

use crate::{
    constants::{AGENT_SEED, LOTTERY_SEED, TICKET_POOL_SEED},
    error::LotteryError,
    events::{BalanceAdjusted, LotteryActivated, LotteryEdited},
    state::{Agent, LedgerReason, Lottery, LotteryEdit, TicketPool},
};

/// Accounts for changes an agent makes to one of its own lotteries.
#[derive(Accounts)]
pub struct ManageLottery<'info> {
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

    /// Read to keep every active ticket number within the capacity.
    #[account(
        seeds = [TICKET_POOL_SEED, lottery.key().as_ref()],
        bump = ticket_pool.bump,
        has_one = lottery,
    )]
    pub ticket_pool: Account<'info, TicketPool>,
}

/// Opens an upcoming lottery for bookings.
pub fn process_activate_lottery(ctx: Context<ManageLottery>) -> Result<()> {
    ctx.accounts.agent.require_active()?;

    let now = Clock::get()?.unix_timestamp;
    let lottery = &mut ctx.accounts.lottery;
    lottery.activate(now)?;

    msg!("Lottery #{} is now active", lottery.lottery_id);
    emit!(LotteryActivated {
        lottery: lottery.key(),
    });
    Ok(())
}

/// Edits an active lottery. A larger prize pool is debited from the agent,
/// a smaller one credited back.
pub fn process_edit_lottery(ctx: Context<ManageLottery>, edit: LotteryEdit) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let agent_key = ctx.accounts.agent.key();
    let lottery_key = ctx.accounts.lottery.key();
    let agent = &mut ctx.accounts.agent;
    let lottery = &mut ctx.accounts.lottery;

    let delta = lottery.apply_edit(edit, &ctx.accounts.ticket_pool, agent, now)?;
    if delta != 0 {
        let reason = if delta < 0 {
            LedgerReason::PrizePoolIncreased
        } else {
            LedgerReason::PrizePoolDecreased
        };
        emit!(BalanceAdjusted::entry(
            agent_key,
            agent,
            delta,
            reason,
            Some(lottery_key)
        ));
    }

    msg!(
        "Lottery #{} edited, prize pool {}, capacity {}",
        lottery.lottery_id,
        lottery.prize_pool,
        lottery.ticket_capacity
    );
    emit!(LotteryEdited {
        lottery: lottery_key,
        prize_pool: lottery.prize_pool,
        ticket_capacity: lottery.ticket_capacity,
    });
    Ok(())
}
