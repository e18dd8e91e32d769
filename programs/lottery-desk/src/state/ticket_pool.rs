use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_POOL_ENTRIES, TICKET_ID_LEN},
    error::LotteryError,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum TicketStatus {
    Active,
    Cancelled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, InitSpace)]
pub struct Player {
    #[max_len(32)]
    pub name: String,
    #[max_len(16)]
    pub phone: String,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, InitSpace)]
pub enum TicketKind {
    Standard,
    GameLinked {
        #[max_len(16)]
        game_id: String,
        #[max_len(16)]
        server_id: String,
    },
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, InitSpace)]
pub struct Ticket {
    /// Permutation of the pool's base set at booking time.
    #[max_len(6)]
    pub id: String,
    /// 1..=capacity; unique among the lottery's active tickets.
    pub number: u16,
    pub booked: bool,
    pub status: TicketStatus,
    pub player: Player,
    pub kind: TicketKind,
    pub booked_at: i64,
    pub cancelled_at: Option<i64>,
}

impl Ticket {
    /// Only booked, active tickets take part in a draw.
    pub fn is_eligible(&self) -> bool {
        self.booked && self.status == TicketStatus::Active
    }

    fn cancel(&mut self, now: i64) {
        self.booked = false;
        self.status = TicketStatus::Cancelled;
        self.cancelled_at = Some(now);
    }
}

/// All tickets ever booked for one lottery, cancelled ones included.
/// Grows by one entry per booking.
#[account]
#[derive(InitSpace)]
pub struct TicketPool {
    /// The lottery these tickets belong to.
    pub lottery: Pubkey,

    /// Base character set of the current ticket id session. Rotated when
    /// its permutations run out.
    pub base_set: [u8; 6],

    /// Booking order. Space is reallocated one ticket at a time.
    #[max_len(0)]
    pub tickets: Vec<Ticket>,

    pub bump: u8,
}

impl TicketPool {
    /// Account size holding `ticket_count` tickets.
    pub fn space(ticket_count: usize) -> usize {
        8 + TicketPool::INIT_SPACE + ticket_count * Ticket::INIT_SPACE
    }

    pub fn init(lottery: Pubkey, base_set: [u8; TICKET_ID_LEN], bump: u8) -> Self {
        Self {
            lottery,
            base_set,
            tickets: vec![],
            bump,
        }
    }

    pub fn ticket_ids(&self) -> Vec<String> {
        self.tickets.iter().map(|ticket| ticket.id.clone()).collect()
    }

    pub fn eligible_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.is_eligible()).count()
    }

    /// Highest number held by an active ticket, 0 when there is none.
    pub fn highest_active_number(&self) -> u16 {
        self.tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Active)
            .map(|t| t.number)
            .max()
            .unwrap_or(0)
    }

    /// Adds a booked ticket. `id` must already be unique in the pool.
    pub fn book(
        &mut self,
        id: String,
        number: u16,
        capacity: u16,
        player: Player,
        kind: TicketKind,
        now: i64,
    ) -> Result<&Ticket> {
        require!(
            number >= 1 && number <= capacity,
            LotteryError::InvalidTicketNumber
        );
        require!(
            !self
                .tickets
                .iter()
                .any(|t| t.number == number && t.status == TicketStatus::Active),
            LotteryError::TicketNumberTaken
        );
        require!(
            self.tickets.len() < MAX_POOL_ENTRIES,
            LotteryError::SoldOut
        );

        self.tickets.push(Ticket {
            id,
            number,
            booked: true,
            status: TicketStatus::Active,
            player,
            kind,
            booked_at: now,
            cancelled_at: None,
        });
        let index = self.tickets.len() - 1;
        Ok(&self.tickets[index])
    }

    /// The active ticket holding `number`.
    pub fn active_ticket_mut(&mut self, number: u16) -> Result<&mut Ticket> {
        if let Some(index) = self
            .tickets
            .iter()
            .position(|t| t.number == number && t.status == TicketStatus::Active)
        {
            return Ok(&mut self.tickets[index]);
        }
        if self.tickets.iter().any(|t| t.number == number) {
            return err!(LotteryError::TicketAlreadyCancelled);
        }
        err!(LotteryError::TicketNotFound)
    }

    /// Cancels the active ticket holding `number`; returns its id.
    pub fn cancel_ticket(&mut self, number: u16, now: i64) -> Result<String> {
        let ticket = self.active_ticket_mut(number)?;
        ticket.cancel(now);
        Ok(ticket.id.clone())
    }

    /// Cancels every active ticket, returning how many were cancelled.
    pub fn cancel_all(&mut self, now: i64) -> u16 {
        let mut cancelled: u16 = 0;
        for ticket in self
            .tickets
            .iter_mut()
            .filter(|t| t.status == TicketStatus::Active)
        {
            ticket.cancel(now);
            cancelled = cancelled.saturating_add(1);
        }
        cancelled
    }
}
