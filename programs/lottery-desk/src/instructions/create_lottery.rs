use anchor_lang::prelude::*;

use crate::{
    constants::{AGENT_SEED, LOTTERY_SEED, TICKET_POOL_SEED},
    error::LotteryError,
    events::{BalanceAdjusted, LotteryCreated},
    state::{to_delta, Agent, LedgerReason, Lottery, LotteryTerms, TicketPool},
    utils::{randomness::DrawRng, ticket_id::TicketIdGenerator},
};

/// Accounts required to create a lottery.
///
/// Ensures:
/// 1. Only the agent's own authority can create lotteries for it.
/// 2. The lottery PDA is derived from the agent's next lottery id.
#[derive(Accounts)]
pub struct CreateLottery<'info> {
    /// The agent's wallet, paying for both new accounts.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [AGENT_SEED, authority.key().as_ref()],
        bump = agent.bump,
        has_one = authority @ LotteryError::Unauthorized,
    )]
    pub agent: Account<'info, Agent>,

    #[account(
        init,
        payer = authority,
        space = Lottery::SPACE,
        seeds = [LOTTERY_SEED, agent.key().as_ref(), agent.lottery_count.to_le_bytes().as_ref()],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Starts empty and grows with each booking.
    #[account(
        init,
        payer = authority,
        space = TicketPool::space(0),
        seeds = [TICKET_POOL_SEED, lottery.key().as_ref()],
        bump
    )]
    pub ticket_pool: Account<'info, TicketPool>,

    pub system_program: Program<'info, System>,
}

/// Creates a lottery and reserves its prize pool from the agent's balance.
///
/// # Arguments
/// * `terms` - Name, pricing, capacity, prizes and draw time
/// * `open_immediately` - `false` creates the lottery as upcoming; it then
///   needs `activate_lottery` before tickets can be booked
pub fn process_create_lottery(
    ctx: Context<CreateLottery>,
    terms: LotteryTerms,
    open_immediately: bool,
) -> Result<()> {
    let clock = Clock::get()?;
    let agent_key = ctx.accounts.agent.key();
    let lottery_key = ctx.accounts.lottery.key();
    let agent = &mut ctx.accounts.agent;

    let lottery_id = agent.next_lottery_id()?;
    let debit = -to_delta(terms.prize_pool)?;
    let lottery = Lottery::create(
        agent_key,
        agent,
        lottery_id,
        terms,
        open_immediately,
        clock.unix_timestamp,
        ctx.bumps.lottery,
    )?;

    let generator = TicketIdGenerator::new(DrawRng::from_parts(&[
        lottery_key.as_ref(),
        &clock.slot.to_le_bytes(),
    ]));
    ctx.accounts.ticket_pool.set_inner(TicketPool::init(
        lottery_key,
        generator.base_set(),
        ctx.bumps.ticket_pool,
    ));

    msg!(
        "Lottery #{} '{}' created, prize pool {}, ticket ids from {}",
        lottery_id,
        lottery.name,
        lottery.prize_pool,
        generator.current_base_set()
    );
    emit!(BalanceAdjusted::entry(
        agent_key,
        agent,
        debit,
        LedgerReason::LotteryCreated,
        Some(lottery_key)
    ));
    emit!(LotteryCreated {
        lottery: lottery_key,
        agent: agent_key,
        lottery_id,
        prize_pool: lottery.prize_pool,
        status: lottery.status,
    });

    ctx.accounts.lottery.set_inner(lottery);
    Ok(())
}
