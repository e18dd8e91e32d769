use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_PRIZES, MAX_TICKETS},
    error::LotteryError,
    state::{to_delta, Agent, LedgerReason, Player, Ticket, TicketKind, TicketPool},
    utils::validation::{validate_description, validate_lottery_name, validate_prizes},
};

/// ```text
/// upcoming -> active
/// active   -> drawing | cancelled | deleted (no tickets booked)
/// drawing  -> completed | cancelled
/// ```
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum LotteryStatus {
    Upcoming,
    Active,
    Drawing,
    Completed,
    Cancelled,
    Deleted,
}

impl LotteryStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            LotteryStatus::Completed | LotteryStatus::Cancelled | LotteryStatus::Deleted
        )
    }

    pub fn can_transition_to(self, next: LotteryStatus) -> bool {
        use LotteryStatus::*;
        matches!(
            (self, next),
            (Upcoming, Active)
                | (Active, Drawing)
                | (Active, Cancelled)
                | (Active, Deleted)
                | (Drawing, Completed)
                | (Drawing, Cancelled)
        )
    }
}

/// Normal lotteries take standard tickets, game lotteries take tickets
/// linked to a player's game account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum LotteryKind {
    Normal,
    Game,
}

impl LotteryKind {
    pub fn accepts(self, ticket: &TicketKind) -> bool {
        matches!(
            (self, ticket),
            (LotteryKind::Normal, TicketKind::Standard)
                | (LotteryKind::Game, TicketKind::GameLinked { .. })
        )
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, InitSpace)]
pub enum PrizeValue {
    Amount(u64),
    Description(#[max_len(32)] String),
}

impl PrizeValue {
    pub fn amount(&self) -> Option<u64> {
        match self {
            PrizeValue::Amount(amount) => Some(*amount),
            PrizeValue::Description(_) => None,
        }
    }
}

/// Index 0 of a lottery's prize list is the grand prize.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, InitSpace)]
pub struct Prize {
    #[max_len(32)]
    pub name: String,
    pub value: PrizeValue,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, InitSpace)]
pub struct Winner {
    #[max_len(6)]
    pub ticket_id: String,
    pub ticket_number: u16,
    pub player: Player,
    pub kind: TicketKind,
    pub prize_index: u8,
    #[max_len(32)]
    pub prize_name: String,
    pub prize_value: PrizeValue,
}

impl Winner {
    pub fn new(ticket: &Ticket, prize_index: u8, prize: &Prize) -> Self {
        Self {
            ticket_id: ticket.id.clone(),
            ticket_number: ticket.number,
            player: ticket.player.clone(),
            kind: ticket.kind.clone(),
            prize_index,
            prize_name: prize.name.clone(),
            prize_value: prize.value.clone(),
        }
    }
}

/// Everything an agent chooses when creating a lottery.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct LotteryTerms {
    pub name: String,
    pub description: String,
    pub kind: LotteryKind,
    pub ticket_price: u64,
    pub ticket_capacity: u16,
    pub prize_pool: u64,
    pub prizes: Vec<Prize>,
    pub draw_time: i64,
}

impl LotteryTerms {
    pub fn validate(&self, now: i64) -> Result<()> {
        validate_lottery_name(&self.name)?;
        validate_description(&self.description)?;
        require!(self.ticket_price > 0, LotteryError::InvalidTicketPrice);
        require!(
            self.ticket_capacity > 0 && self.ticket_capacity <= MAX_TICKETS,
            LotteryError::InvalidTicketCapacity
        );
        require!(self.prize_pool > 0, LotteryError::InvalidPrizePool);
        validate_prizes(&self.prizes, self.prize_pool)?;
        require!(self.draw_time > now, LotteryError::InvalidDrawTime);
        Ok(())
    }
}

/// Fields an agent may change while the lottery is active. `None` keeps the
/// current value.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct LotteryEdit {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ticket_price: Option<u64>,
    pub ticket_capacity: Option<u16>,
    pub prize_pool: Option<u64>,
    pub prizes: Option<Vec<Prize>>,
    pub draw_time: Option<i64>,
}

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The agent account that owns this lottery and backs its prize pool.
    pub agent: Pubkey,

    /// Per-agent sequence number, part of the PDA seeds.
    pub lottery_id: u64,

    #[max_len(32)]
    pub name: String,

    #[max_len(128)]
    pub description: String,

    pub kind: LotteryKind,

    /// Price of one ticket in the smallest currency unit.
    pub ticket_price: u64,

    pub ticket_capacity: u16,

    /// Amount reserved from the agent's balance for the prizes.
    pub prize_pool: u64,

    #[max_len(10)]
    pub prizes: Vec<Prize>,

    /// Always within `0..=ticket_capacity`.
    pub tickets_booked: u16,

    pub status: LotteryStatus,

    /// Scheduled draw time (unix seconds). Informational: the agent starts
    /// the draw.
    pub draw_time: i64,

    pub created_at: i64,

    pub updated_at: i64,

    pub completed_at: Option<i64>,

    pub cancelled_at: Option<i64>,

    /// Number of draws started; the latest is the only one that may commit.
    pub draw_attempts: u32,

    /// Filled once, by the committed draw. Ordered by prize index.
    #[max_len(10)]
    pub winners: Vec<Winner>,

    pub bump: u8,
}

impl Lottery {
    pub const SPACE: usize = 8 + Lottery::INIT_SPACE;

    /// Validates the terms and reserves the prize pool from the agent.
    pub fn create(
        agent_key: Pubkey,
        agent: &mut Agent,
        lottery_id: u64,
        terms: LotteryTerms,
        open_immediately: bool,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        agent.require_active()?;
        terms.validate(now)?;
        agent.adjust_balance(-to_delta(terms.prize_pool)?, LedgerReason::LotteryCreated)?;

        Ok(Self {
            agent: agent_key,
            lottery_id,
            name: terms.name,
            description: terms.description,
            kind: terms.kind,
            ticket_price: terms.ticket_price,
            ticket_capacity: terms.ticket_capacity,
            prize_pool: terms.prize_pool,
            prizes: terms.prizes,
            tickets_booked: 0,
            status: if open_immediately {
                LotteryStatus::Active
            } else {
                LotteryStatus::Upcoming
            },
            draw_time: terms.draw_time,
            created_at: now,
            updated_at: now,
            completed_at: None,
            cancelled_at: None,
            draw_attempts: 0,
            winners: vec![],
            bump,
        })
    }

    /// Compare-and-set on the status: fails with `ConcurrentModification`
    /// when the stored status is no longer `expected`.
    pub fn set_status(
        &mut self,
        next: LotteryStatus,
        expected: LotteryStatus,
        now: i64,
    ) -> Result<()> {
        require!(!self.status.is_terminal(), LotteryError::LotteryClosed);
        require!(self.status == expected, LotteryError::ConcurrentModification);
        require!(
            expected.can_transition_to(next),
            LotteryError::InvalidStatusTransition
        );

        self.status = next;
        self.updated_at = now;
        Ok(())
    }

    pub fn require_active(&self) -> Result<()> {
        require!(!self.status.is_terminal(), LotteryError::LotteryClosed);
        require!(
            self.status == LotteryStatus::Active,
            LotteryError::LotteryNotActive
        );
        Ok(())
    }

    pub fn activate(&mut self, now: i64) -> Result<()> {
        self.set_status(LotteryStatus::Active, LotteryStatus::Upcoming, now)
    }

    /// Applies an edit, settling any prize-pool change against the agent's
    /// balance. Returns the ledger delta (negative when the pool grew).
    ///
    /// Capacity may not drop below the number of booked tickets nor below
    /// any active ticket's number in `pool`.
    pub fn apply_edit(
        &mut self,
        edit: LotteryEdit,
        pool: &TicketPool,
        agent: &mut Agent,
        now: i64,
    ) -> Result<i64> {
        self.require_active()?;
        agent.require_active()?;

        let ticket_capacity = edit.ticket_capacity.unwrap_or(self.ticket_capacity);
        let prize_pool = edit.prize_pool.unwrap_or(self.prize_pool);
        let merged = LotteryTerms {
            name: edit.name.unwrap_or_else(|| self.name.clone()),
            description: edit.description.unwrap_or_else(|| self.description.clone()),
            kind: self.kind,
            ticket_price: edit.ticket_price.unwrap_or(self.ticket_price),
            ticket_capacity,
            prize_pool,
            prizes: edit.prizes.unwrap_or_else(|| self.prizes.clone()),
            draw_time: edit.draw_time.unwrap_or(self.draw_time),
        };

        validate_lottery_name(&merged.name)?;
        validate_description(&merged.description)?;
        require!(merged.ticket_price > 0, LotteryError::InvalidTicketPrice);
        require!(
            ticket_capacity > 0 && ticket_capacity <= MAX_TICKETS,
            LotteryError::InvalidTicketCapacity
        );
        require_gte!(
            ticket_capacity,
            self.tickets_booked,
            LotteryError::CapacityBelowBooked
        );
        require_gte!(
            ticket_capacity,
            pool.highest_active_number(),
            LotteryError::CapacityBelowBooked
        );
        require!(prize_pool > 0, LotteryError::InvalidPrizePool);
        validate_prizes(&merged.prizes, prize_pool)?;
        if edit.draw_time.is_some() {
            require!(merged.draw_time > now, LotteryError::InvalidDrawTime);
        }

        let delta = to_delta(self.prize_pool)?
            .checked_sub(to_delta(prize_pool)?)
            .ok_or(LotteryError::MathOverflow)?;
        if delta != 0 {
            let reason = if delta < 0 {
                LedgerReason::PrizePoolIncreased
            } else {
                LedgerReason::PrizePoolDecreased
            };
            agent.adjust_balance(delta, reason)?;
        }

        self.name = merged.name;
        self.description = merged.description;
        self.ticket_price = merged.ticket_price;
        self.ticket_capacity = ticket_capacity;
        self.prize_pool = prize_pool;
        self.prizes = merged.prizes;
        self.draw_time = merged.draw_time;
        self.updated_at = now;

        Ok(delta)
    }

    pub fn record_booking(&mut self, now: i64) -> Result<()> {
        self.require_active()?;
        require!(
            self.tickets_booked < self.ticket_capacity,
            LotteryError::SoldOut
        );
        self.tickets_booked += 1;
        self.updated_at = now;
        Ok(())
    }

    pub fn release_booking(&mut self, now: i64) {
        self.tickets_booked = self.tickets_booked.saturating_sub(1);
        self.updated_at = now;
    }

    /// Moves an active lottery to `Drawing` and returns the new attempt
    /// number. Nothing changes unless prizes and eligible tickets exist.
    pub fn begin_draw(&mut self, eligible_tickets: usize, now: i64) -> Result<u32> {
        require!(!self.status.is_terminal(), LotteryError::LotteryClosed);
        require!(
            self.status == LotteryStatus::Active,
            LotteryError::ConcurrentModification
        );
        require!(!self.prizes.is_empty(), LotteryError::NoPrizes);
        require!(eligible_tickets > 0, LotteryError::NoEligibleTickets);

        let attempt = self
            .draw_attempts
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        self.set_status(LotteryStatus::Drawing, LotteryStatus::Active, now)?;
        self.draw_attempts = attempt;
        Ok(attempt)
    }

    /// Checks that `attempt` is the draw currently in progress.
    pub fn require_current_draw(&self, attempt: u32) -> Result<()> {
        require!(!self.status.is_terminal(), LotteryError::LotteryClosed);
        require!(
            self.status == LotteryStatus::Drawing,
            LotteryError::ConcurrentModification
        );
        require_eq!(attempt, self.draw_attempts, LotteryError::StaleDrawAttempt);
        Ok(())
    }

    /// Writes the winner list and completes the lottery in one step.
    ///
    /// `account_len` is the allocated size of the lottery account. The
    /// completed record is serialized up front so a record that would not
    /// fit fails with `WinnersNotRecorded` and leaves the lottery drawing.
    pub fn complete_draw(
        &mut self,
        attempt: u32,
        winners: Vec<Winner>,
        account_len: usize,
        now: i64,
    ) -> Result<()> {
        self.require_current_draw(attempt)?;
        require!(
            winners.len() <= MAX_PRIZES && winners.len() <= self.prizes.len(),
            LotteryError::WinnersNotRecorded
        );

        let mut completed = self.clone();
        completed.set_status(LotteryStatus::Completed, LotteryStatus::Drawing, now)?;
        completed.winners = winners;
        completed.completed_at = Some(now);

        let needed = completed
            .try_to_vec()
            .map(|bytes| 8 + bytes.len())
            .map_err(|_| error!(LotteryError::WinnersNotRecorded))?;
        if needed > account_len {
            msg!(
                "Completed lottery needs {} bytes, account holds {}",
                needed,
                account_len
            );
            return err!(LotteryError::WinnersNotRecorded);
        }

        *self = completed;
        Ok(())
    }

    /// Cancels every active ticket and refunds the whole prize pool,
    /// whatever was sold. Returns the number of tickets cancelled.
    pub fn cancel(&mut self, pool: &mut TicketPool, agent: &mut Agent, now: i64) -> Result<u16> {
        let current = self.status;
        require!(!current.is_terminal(), LotteryError::LotteryClosed);
        require!(
            current.can_transition_to(LotteryStatus::Cancelled),
            LotteryError::InvalidStatusTransition
        );

        agent.adjust_balance(to_delta(self.prize_pool)?, LedgerReason::LotteryCancelled)?;
        let cancelled = pool.cancel_all(now);

        self.set_status(LotteryStatus::Cancelled, current, now)?;
        self.tickets_booked = self.tickets_booked.saturating_sub(cancelled);
        self.cancelled_at = Some(now);
        Ok(cancelled)
    }

    /// Retires an active lottery that never sold a ticket and refunds the
    /// prize pool. The record stays for reporting.
    pub fn delete(&mut self, agent: &mut Agent, now: i64) -> Result<u64> {
        require!(!self.status.is_terminal(), LotteryError::LotteryClosed);
        require!(
            self.status.can_transition_to(LotteryStatus::Deleted),
            LotteryError::InvalidStatusTransition
        );
        require_eq!(self.tickets_booked, 0, LotteryError::TicketsAlreadyBooked);

        let refund = self.prize_pool;
        agent.adjust_balance(to_delta(refund)?, LedgerReason::LotteryDeleted)?;
        self.set_status(LotteryStatus::Deleted, LotteryStatus::Active, now)?;
        Ok(refund)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state::TicketStatus, test_utils::assert_lottery_error};

    const NOW: i64 = 1_700_000_000;

    fn agent_with(balance: u64) -> Agent {
        let mut agent = Agent::init(Pubkey::new_unique(), NOW, 255);
        agent.balance = balance;
        agent
    }

    fn amount_prize(name: &str, value: u64) -> Prize {
        Prize {
            name: name.to_string(),
            value: PrizeValue::Amount(value),
        }
    }

    fn terms(prize_pool: u64) -> LotteryTerms {
        LotteryTerms {
            name: "Weekly Draw".to_string(),
            description: "Two prizes".to_string(),
            kind: LotteryKind::Normal,
            ticket_price: 50,
            ticket_capacity: 10,
            prize_pool,
            prizes: vec![
                amount_prize("Grand", prize_pool / 2),
                amount_prize("Runner-up", prize_pool / 4),
            ],
            draw_time: NOW + 86_400,
        }
    }

    fn create(agent: &mut Agent, prize_pool: u64) -> Lottery {
        Lottery::create(Pubkey::new_unique(), agent, 0, terms(prize_pool), true, NOW, 254)
            .unwrap()
    }

    fn pool_with_tickets(count: u16) -> TicketPool {
        let mut pool = TicketPool::init(Pubkey::new_unique(), *b"ABC234", 253);
        for number in 1..=count {
            pool.book(
                format!("T{:05}", number),
                number,
                10,
                Player {
                    name: "Ravi".to_string(),
                    phone: "9876543210".to_string(),
                },
                TicketKind::Standard,
                NOW,
            )
            .unwrap();
        }
        pool
    }

    #[test]
    fn create_then_delete_restores_balance() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        assert_eq!(agent.balance, 6_000);
        assert_eq!(lottery.status, LotteryStatus::Active);

        assert_eq!(lottery.delete(&mut agent, NOW + 1).unwrap(), 4_000);
        assert_eq!(agent.balance, 10_000);
        assert_eq!(lottery.status, LotteryStatus::Deleted);
    }

    #[test]
    fn create_with_insufficient_balance_changes_nothing() {
        let mut agent = agent_with(500);
        let result =
            Lottery::create(Pubkey::new_unique(), &mut agent, 0, terms(1_000), true, NOW, 254);

        assert_lottery_error(result, LotteryError::InsufficientBalance);
        assert_eq!(agent.balance, 500);
        assert_eq!(agent.ledger_seq, 0);
    }

    #[test]
    fn inactive_agent_cannot_create() {
        let mut agent = agent_with(10_000);
        agent.is_active = false;
        let result =
            Lottery::create(Pubkey::new_unique(), &mut agent, 0, terms(1_000), true, NOW, 254);
        assert_lottery_error(result, LotteryError::AgentInactive);
    }

    #[test]
    fn upcoming_lottery_needs_activation() {
        let mut agent = agent_with(10_000);
        let mut lottery =
            Lottery::create(Pubkey::new_unique(), &mut agent, 0, terms(1_000), false, NOW, 254)
                .unwrap();
        assert_eq!(lottery.status, LotteryStatus::Upcoming);
        assert_lottery_error(lottery.record_booking(NOW), LotteryError::LotteryNotActive);

        lottery.activate(NOW + 5).unwrap();
        assert_eq!(lottery.status, LotteryStatus::Active);
        assert_lottery_error(lottery.activate(NOW + 6), LotteryError::ConcurrentModification);
    }

    #[test]
    fn cancel_refunds_whole_pool_and_cancels_all_tickets() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        let mut pool = pool_with_tickets(3);
        for _ in 0..3 {
            lottery.record_booking(NOW).unwrap();
        }

        let cancelled = lottery.cancel(&mut pool, &mut agent, NOW + 10).unwrap();

        assert_eq!(cancelled, 3);
        assert_eq!(agent.balance, 10_000);
        assert_eq!(lottery.status, LotteryStatus::Cancelled);
        assert_eq!(lottery.cancelled_at, Some(NOW + 10));
        assert_eq!(lottery.tickets_booked, 0);
        assert!(pool
            .tickets
            .iter()
            .all(|t| t.status == TicketStatus::Cancelled));
    }

    #[test]
    fn drawing_lottery_can_still_be_cancelled() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        let mut pool = pool_with_tickets(2);
        lottery.begin_draw(pool.eligible_count(), NOW).unwrap();

        assert_eq!(lottery.cancel(&mut pool, &mut agent, NOW + 1).unwrap(), 2);
        assert_eq!(agent.balance, 10_000);
    }

    #[test]
    fn terminal_lottery_rejects_every_operation() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        let mut pool = pool_with_tickets(0);
        lottery.cancel(&mut pool, &mut agent, NOW).unwrap();
        let balance = agent.balance;

        assert_lottery_error(lottery.require_active(), LotteryError::LotteryClosed);
        assert_lottery_error(lottery.record_booking(NOW), LotteryError::LotteryClosed);
        assert_lottery_error(
            lottery.apply_edit(LotteryEdit::default(), &pool, &mut agent, NOW),
            LotteryError::LotteryClosed,
        );
        assert_lottery_error(lottery.begin_draw(1, NOW), LotteryError::LotteryClosed);
        assert_lottery_error(
            lottery.cancel(&mut pool, &mut agent, NOW),
            LotteryError::LotteryClosed,
        );
        assert_lottery_error(lottery.delete(&mut agent, NOW), LotteryError::LotteryClosed);
        assert_lottery_error(
            lottery.set_status(LotteryStatus::Active, LotteryStatus::Cancelled, NOW),
            LotteryError::LotteryClosed,
        );
        assert_eq!(agent.balance, balance);
    }

    #[test]
    fn second_draw_start_sees_concurrent_modification() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);

        assert_eq!(lottery.begin_draw(5, NOW).unwrap(), 1);
        assert_lottery_error(lottery.begin_draw(5, NOW), LotteryError::ConcurrentModification);
        assert_eq!(lottery.status, LotteryStatus::Drawing);
        assert_eq!(lottery.draw_attempts, 1);
    }

    #[test]
    fn draw_without_eligible_tickets_stays_active() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);

        assert_lottery_error(lottery.begin_draw(0, NOW), LotteryError::NoEligibleTickets);
        assert_eq!(lottery.status, LotteryStatus::Active);
        assert_eq!(lottery.draw_attempts, 0);

        lottery.prizes.clear();
        assert_lottery_error(lottery.begin_draw(3, NOW), LotteryError::NoPrizes);
        assert_eq!(lottery.status, LotteryStatus::Active);
    }

    #[test]
    fn completing_a_draw_records_winners_once() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        let pool = pool_with_tickets(3);
        let attempt = lottery.begin_draw(pool.eligible_count(), NOW).unwrap();
        let winners = vec![Winner::new(&pool.tickets[1], 0, &lottery.prizes[0].clone())];

        assert_lottery_error(
            lottery.complete_draw(attempt + 1, winners.clone(), Lottery::SPACE, NOW),
            LotteryError::StaleDrawAttempt,
        );
        assert_lottery_error(
            lottery.complete_draw(attempt, winners.clone(), 64, NOW),
            LotteryError::WinnersNotRecorded,
        );
        assert_eq!(lottery.status, LotteryStatus::Drawing);
        assert!(lottery.winners.is_empty());

        lottery
            .complete_draw(attempt, winners.clone(), Lottery::SPACE, NOW + 3)
            .unwrap();
        assert_eq!(lottery.status, LotteryStatus::Completed);
        assert_eq!(lottery.completed_at, Some(NOW + 3));
        assert_eq!(lottery.winners, winners);

        assert_lottery_error(
            lottery.complete_draw(attempt, winners, Lottery::SPACE, NOW + 4),
            LotteryError::LotteryClosed,
        );
    }

    #[test]
    fn edit_increase_without_funds_leaves_everything_unchanged() {
        let mut agent = agent_with(5_000);
        let mut lottery = create(&mut agent, 4_000);
        let edit = LotteryEdit {
            name: Some("Renamed".to_string()),
            prize_pool: Some(6_000),
            ..LotteryEdit::default()
        };

        assert_lottery_error(
            lottery.apply_edit(edit, &pool_with_tickets(0), &mut agent, NOW),
            LotteryError::InsufficientBalance,
        );
        assert_eq!(agent.balance, 1_000);
        assert_eq!(lottery.prize_pool, 4_000);
        assert_eq!(lottery.name, "Weekly Draw");
    }

    #[test]
    fn edit_settles_prize_pool_changes() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        let pool = pool_with_tickets(0);

        let grow = LotteryEdit {
            prize_pool: Some(5_000),
            ..LotteryEdit::default()
        };
        assert_eq!(lottery.apply_edit(grow, &pool, &mut agent, NOW).unwrap(), -1_000);
        assert_eq!(agent.balance, 5_000);

        let shrink = LotteryEdit {
            prize_pool: Some(3_000),
            ..LotteryEdit::default()
        };
        assert_eq!(lottery.apply_edit(shrink, &pool, &mut agent, NOW).unwrap(), 2_000);
        assert_eq!(agent.balance, 7_000);
        assert_eq!(lottery.prize_pool, 3_000);
    }

    #[test]
    fn capacity_cannot_drop_below_booked() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        let pool = pool_with_tickets(4);
        for _ in 0..4 {
            lottery.record_booking(NOW).unwrap();
        }

        let edit = LotteryEdit {
            ticket_capacity: Some(3),
            ..LotteryEdit::default()
        };
        assert_lottery_error(
            lottery.apply_edit(edit, &pool, &mut agent, NOW),
            LotteryError::CapacityBelowBooked,
        );

        let edit = LotteryEdit {
            ticket_capacity: Some(4),
            ..LotteryEdit::default()
        };
        lottery.apply_edit(edit, &pool, &mut agent, NOW).unwrap();
        assert_lottery_error(lottery.record_booking(NOW), LotteryError::SoldOut);
    }

    #[test]
    fn capacity_cannot_cut_off_a_booked_number() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        let mut pool = TicketPool::init(Pubkey::new_unique(), *b"ABC234", 253);
        pool.book(
            "T00009".to_string(),
            9,
            lottery.ticket_capacity,
            Player {
                name: "Meera".to_string(),
                phone: "9876543210".to_string(),
            },
            TicketKind::Standard,
            NOW,
        )
        .unwrap();
        lottery.record_booking(NOW).unwrap();

        let shrink_to = |capacity| LotteryEdit {
            ticket_capacity: Some(capacity),
            ..LotteryEdit::default()
        };
        assert_lottery_error(
            lottery.apply_edit(shrink_to(5), &pool, &mut agent, NOW),
            LotteryError::CapacityBelowBooked,
        );
        assert_eq!(lottery.ticket_capacity, 10);

        lottery.apply_edit(shrink_to(9), &pool, &mut agent, NOW).unwrap();
        assert_eq!(lottery.ticket_capacity, 9);

        pool.cancel_ticket(9, NOW).unwrap();
        lottery.release_booking(NOW);
        lottery.apply_edit(shrink_to(5), &pool, &mut agent, NOW).unwrap();
        assert_eq!(lottery.ticket_capacity, 5);
    }

    #[test]
    fn oversized_record_is_not_committed() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        let pool = pool_with_tickets(2);
        let attempt = lottery.begin_draw(pool.eligible_count(), NOW).unwrap();
        let winners = vec![Winner::new(&pool.tickets[0], 0, &lottery.prizes[0].clone())];

        // content beyond the name's allotted 32 bytes
        lottery.name = format!("{}{}", "x".repeat(32), " ".repeat(Lottery::SPACE));
        assert_lottery_error(
            lottery.complete_draw(attempt, winners.clone(), Lottery::SPACE, NOW),
            LotteryError::WinnersNotRecorded,
        );
        assert_eq!(lottery.status, LotteryStatus::Drawing);
        assert!(lottery.winners.is_empty());
        assert_eq!(lottery.completed_at, None);

        lottery.name = "Weekly Draw".to_string();
        lottery
            .complete_draw(attempt, winners, Lottery::SPACE, NOW)
            .unwrap();
        assert_eq!(lottery.status, LotteryStatus::Completed);
    }

    #[test]
    fn fully_loaded_record_fits_the_account() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        lottery.name = "N".repeat(32);
        lottery.description = "D".repeat(128);
        lottery.prizes = (0..MAX_PRIZES)
            .map(|_| Prize {
                name: "P".repeat(32),
                value: PrizeValue::Description("V".repeat(32)),
            })
            .collect();
        let ticket = Ticket {
            id: "ABC234".to_string(),
            number: 1,
            booked: true,
            status: TicketStatus::Active,
            player: Player {
                name: "A".repeat(32),
                phone: "+".to_string() + &"9".repeat(15),
            },
            kind: TicketKind::GameLinked {
                game_id: "G".repeat(16),
                server_id: "S".repeat(16),
            },
            booked_at: NOW,
            cancelled_at: None,
        };
        let winners: Vec<Winner> = lottery
            .prizes
            .iter()
            .enumerate()
            .map(|(i, prize)| Winner::new(&ticket, i as u8, prize))
            .collect();
        let attempt = lottery.begin_draw(1, NOW).unwrap();

        lottery
            .complete_draw(attempt, winners, Lottery::SPACE, NOW)
            .unwrap();
        assert_eq!(lottery.winners.len(), MAX_PRIZES);
    }

    #[test]
    fn delete_requires_no_booked_tickets() {
        let mut agent = agent_with(10_000);
        let mut lottery = create(&mut agent, 4_000);
        lottery.record_booking(NOW).unwrap();

        assert_lottery_error(lottery.delete(&mut agent, NOW), LotteryError::TicketsAlreadyBooked);

        lottery.release_booking(NOW);
        lottery.delete(&mut agent, NOW).unwrap();
        assert_eq!(agent.balance, 10_000);
    }

    #[test]
    fn ticket_kind_must_match_lottery_kind() {
        let game = TicketKind::GameLinked {
            game_id: "PLAYER42".to_string(),
            server_id: "S1".to_string(),
        };
        assert!(LotteryKind::Normal.accepts(&TicketKind::Standard));
        assert!(!LotteryKind::Normal.accepts(&game));
        assert!(LotteryKind::Game.accepts(&game));
        assert!(!LotteryKind::Game.accepts(&TicketKind::Standard));
    }
}
