use anchor_lang::prelude::*;

use crate::{
    constants::{AGENT_SEED, LOTTERY_SEED, TICKET_POOL_SEED},
    error::LotteryError,
    events::{TicketCancelled, TicketUpdated},
    state::{Agent, Lottery, Player, TicketPool},
    utils::validation::validate_player,
};

#[derive(Accounts)]
pub struct ManageTicket<'info> {
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
        seeds = [TICKET_POOL_SEED, lottery.key().as_ref()],
        bump = ticket_pool.bump,
        has_one = lottery,
    )]
    pub ticket_pool: Account<'info, TicketPool>,
}

/// Replaces the holder details of an active ticket.
pub fn process_update_ticket(ctx: Context<ManageTicket>, number: u16, player: Player) -> Result<()> {
    ctx.accounts.agent.require_active()?;
    ctx.accounts.lottery.require_active()?;
    validate_player(&player)?;

    let now = Clock::get()?.unix_timestamp;
    let lottery_key = ctx.accounts.lottery.key();
    let ticket = ctx.accounts.ticket_pool.active_ticket_mut(number)?;
    ticket.player = player;
    let ticket_id = ticket.id.clone();
    ctx.accounts.lottery.updated_at = now;

    msg!("Ticket {} updated", ticket_id);
    emit!(TicketUpdated {
        lottery: lottery_key,
        ticket_id,
    });
    Ok(())
}

/// Cancels an active ticket. The entry stays in the pool and its number can
/// be booked again.
pub fn process_cancel_ticket(ctx: Context<ManageTicket>, number: u16) -> Result<()> {
    ctx.accounts.lottery.require_active()?;

    let now = Clock::get()?.unix_timestamp;
    let lottery_key = ctx.accounts.lottery.key();
    let ticket_id = ctx.accounts.ticket_pool.cancel_ticket(number, now)?;
    let lottery = &mut ctx.accounts.lottery;
    lottery.release_booking(now);

    msg!(
        "Ticket {} (#{}) cancelled, {}/{} sold",
        ticket_id,
        number,
        lottery.tickets_booked,
        lottery.ticket_capacity
    );
    emit!(TicketCancelled {
        lottery: lottery_key,
        ticket_id,
        number,
    });
    Ok(())
}
