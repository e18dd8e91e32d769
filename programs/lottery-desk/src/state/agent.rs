use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// Why a ledger adjustment happened. Every balance change carries one.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LedgerReason {
    Deposit,
    LotteryCreated,
    PrizePoolIncreased,
    PrizePoolDecreased,
    LotteryCancelled,
    LotteryDeleted,
}

#[account]
#[derive(InitSpace)]
pub struct Agent {
    /// Wallet that operates this agent's lotteries.
    pub authority: Pubkey,

    /// Inactive agents keep their balance but cannot run lotteries.
    pub is_active: bool,

    /// Funds available to back new prize pools.
    pub balance: u64,

    /// Lifetime sum of credits.
    pub total_credited: u64,

    /// Lifetime sum of debits.
    pub total_debited: u64,

    /// Number of ledger adjustments applied; the seq of the latest one.
    pub ledger_seq: u64,

    /// Seed counter for this agent's lottery PDAs.
    pub lottery_count: u64,

    pub created_at: i64,

    pub bump: u8,
}

impl Agent {
    pub fn init(authority: Pubkey, now: i64, bump: u8) -> Self {
        Self {
            authority,
            is_active: true,
            balance: 0,
            total_credited: 0,
            total_debited: 0,
            ledger_seq: 0,
            lottery_count: 0,
            created_at: now,
            bump,
        }
    }

    pub fn require_active(&self) -> Result<()> {
        require!(self.is_active, LotteryError::AgentInactive);
        Ok(())
    }

    /// Applies a signed adjustment and returns the new balance.
    ///
    /// Debits re-check sufficiency against the balance being written, so the
    /// check and the write can never observe different values. Nothing is
    /// modified when the adjustment fails.
    pub fn adjust_balance(&mut self, delta: i64, reason: LedgerReason) -> Result<u64> {
        let magnitude = delta.unsigned_abs();

        let (balance, total_credited, total_debited) = if delta < 0 {
            require_gte!(self.balance, magnitude, LotteryError::InsufficientBalance);
            (
                self.balance - magnitude,
                self.total_credited,
                self.total_debited
                    .checked_add(magnitude)
                    .ok_or(LotteryError::MathOverflow)?,
            )
        } else {
            (
                self.balance
                    .checked_add(magnitude)
                    .ok_or(LotteryError::MathOverflow)?,
                self.total_credited
                    .checked_add(magnitude)
                    .ok_or(LotteryError::MathOverflow)?,
                self.total_debited,
            )
        };
        let ledger_seq = self
            .ledger_seq
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;

        self.balance = balance;
        self.total_credited = total_credited;
        self.total_debited = total_debited;
        self.ledger_seq = ledger_seq;

        msg!(
            "Ledger #{} {:?}: {} -> balance {}",
            ledger_seq,
            reason,
            delta,
            balance
        );

        Ok(balance)
    }

    /// Hands out the id for the next lottery and advances the counter.
    pub fn next_lottery_id(&mut self) -> Result<u64> {
        let id = self.lottery_count;
        self.lottery_count = id.checked_add(1).ok_or(LotteryError::MathOverflow)?;
        Ok(id)
    }
}

/// Converts an unsigned amount into a ledger delta.
pub fn to_delta(amount: u64) -> Result<i64> {
    i64::try_from(amount).map_err(|_| error!(LotteryError::AmountTooLarge))
}
