use anchor_lang::prelude::*;

use crate::state::{Agent, LedgerReason, LotteryStatus, Winner};

#[event]
pub struct AgentRegistered {
    pub agent: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct AgentStatusChanged {
    pub agent: Pubkey,
    pub is_active: bool,
}

/// One entry of an agent's transaction history.
#[event]
#[derive(Debug)]
pub struct BalanceAdjusted {
    pub agent: Pubkey,
    pub delta: i64,
    pub balance: u64,
    pub reason: LedgerReason,
    pub seq: u64,
    pub lottery: Option<Pubkey>,
}

impl BalanceAdjusted {
    /// Snapshot of `agent` right after an adjustment of `delta`.
    pub fn entry(
        agent_key: Pubkey,
        agent: &Agent,
        delta: i64,
        reason: LedgerReason,
        lottery: Option<Pubkey>,
    ) -> Self {
        Self {
            agent: agent_key,
            delta,
            balance: agent.balance,
            reason,
            seq: agent.ledger_seq,
            lottery,
        }
    }
}

#[event]
pub struct LotteryCreated {
    pub lottery: Pubkey,
    pub agent: Pubkey,
    pub lottery_id: u64,
    pub prize_pool: u64,
    pub status: LotteryStatus,
}

#[event]
pub struct LotteryActivated {
    pub lottery: Pubkey,
}

#[event]
pub struct LotteryEdited {
    pub lottery: Pubkey,
    pub prize_pool: u64,
    pub ticket_capacity: u16,
}

#[event]
#[derive(Debug)]
pub struct TicketBooked {
    pub lottery: Pubkey,
    pub ticket_id: String,
    pub number: u16,
}

#[event]
pub struct TicketUpdated {
    pub lottery: Pubkey,
    pub ticket_id: String,
}

#[event]
pub struct TicketCancelled {
    pub lottery: Pubkey,
    pub ticket_id: String,
    pub number: u16,
}

#[event]
pub struct DrawStarted {
    pub lottery: Pubkey,
    pub attempt: u32,
    pub randomness_account: Pubkey,
}

#[event]
pub struct WinnersSelected {
    pub lottery: Pubkey,
    pub attempt: u32,
    pub winners: Vec<Winner>,
}

#[event]
pub struct LotteryCompleted {
    pub lottery: Pubkey,
    pub attempt: u32,
    pub completed_at: i64,
}

#[event]
pub struct LotteryCancelled {
    pub lottery: Pubkey,
    pub tickets_cancelled: u16,
    pub refund: u64,
}

#[event]
pub struct LotteryDeleted {
    pub lottery: Pubkey,
    pub refund: u64,
}
