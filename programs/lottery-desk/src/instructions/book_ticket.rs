use anchor_lang::prelude::*;

use crate::{
    constants::{AGENT_SEED, LOTTERY_SEED, TICKET_POOL_SEED},
    error::LotteryError,
    events::TicketBooked,
    state::{Agent, Lottery, Player, TicketKind, TicketPool},
    utils::{
        randomness::DrawRng,
        ticket_id::TicketIdGenerator,
        validation::{validate_player, validate_ticket_kind},
    },
};

/// Accounts required to book a ticket on behalf of a player.
///
/// The ticket pool is reallocated to hold one more ticket; the agent's
/// wallet pays the extra rent.
#[derive(Accounts)]
pub struct BookTicket<'info> {
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
        mut,
        seeds = [TICKET_POOL_SEED, lottery.key().as_ref()],
        bump = ticket_pool.bump,
        has_one = lottery,
        realloc = TicketPool::space(ticket_pool.tickets.len() + 1),
        realloc::payer = authority,
        realloc::zero = false,
    )]
    pub ticket_pool: Account<'info, TicketPool>,

    pub system_program: Program<'info, System>,
}

/// Books ticket `number` for `player`.
///
/// # Arguments
/// * `number` - Seat number in `1..=ticket_capacity`, free among active tickets
/// * `player` - Name and phone of the ticket holder
/// * `kind` - Must match the lottery kind; game lotteries need game details
pub fn process_book_ticket(
    ctx: Context<BookTicket>,
    number: u16,
    player: Player,
    kind: TicketKind,
) -> Result<()> {
    ctx.accounts.agent.require_active()?;
    validate_player(&player)?;
    validate_ticket_kind(&kind)?;

    let clock = Clock::get()?;
    let lottery_key = ctx.accounts.lottery.key();
    let lottery = &mut ctx.accounts.lottery;
    let pool = &mut ctx.accounts.ticket_pool;

    require!(lottery.kind.accepts(&kind), LotteryError::TicketKindMismatch);
    lottery.record_booking(clock.unix_timestamp)?;

    let entries = pool.tickets.len() as u64;
    let mut generator = TicketIdGenerator::with_base_set(
        pool.base_set,
        DrawRng::from_parts(&[
            lottery_key.as_ref(),
            &clock.slot.to_le_bytes(),
            &entries.to_le_bytes(),
        ]),
    );
    let id = generator.generate_unique(&pool.ticket_ids())?;
    pool.base_set = generator.base_set();

    let ticket = pool.book(
        id,
        number,
        lottery.ticket_capacity,
        player,
        kind,
        clock.unix_timestamp,
    )?;

    msg!(
        "Ticket {} (#{}) booked, {}/{} sold",
        ticket.id,
        ticket.number,
        lottery.tickets_booked,
        lottery.ticket_capacity
    );
    emit!(TicketBooked {
        lottery: lottery_key,
        ticket_id: ticket.id.clone(),
        number: ticket.number,
    });
    Ok(())
}
