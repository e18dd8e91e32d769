use anchor_lang::prelude::*;

use crate::{error::LotteryError, state::Winner};

/// One try at drawing a lottery. Winners land here first and are copied onto
/// the lottery by `commit_winners`, so a failed commit can be retried without
/// drawing again.
#[account]
#[derive(InitSpace)]
pub struct DrawAttempt {
    pub lottery: Pubkey,

    /// Matches `Lottery::draw_attempts` at the time the draw started.
    pub attempt: u32,

    /// Switchboard randomness account committed for this attempt.
    pub randomness_account: Pubkey,

    pub seed_slot: u64,

    /// Revealed randomness; `None` until winners are selected.
    pub randomness: Option<[u8; 32]>,

    #[max_len(10)]
    pub winners: Vec<Winner>,

    pub committed: bool,

    pub opened_at: i64,

    pub bump: u8,
}

impl DrawAttempt {
    pub fn open(
        lottery: Pubkey,
        attempt: u32,
        randomness_account: Pubkey,
        seed_slot: u64,
        now: i64,
        bump: u8,
    ) -> Self {
        Self {
            lottery,
            attempt,
            randomness_account,
            seed_slot,
            randomness: None,
            winners: vec![],
            committed: false,
            opened_at: now,
            bump,
        }
    }

    pub fn record_winners(&mut self, randomness: [u8; 32], winners: Vec<Winner>) -> Result<()> {
        require!(self.randomness.is_none(), LotteryError::WinnersAlreadySelected);
        self.randomness = Some(randomness);
        self.winners = winners;
        Ok(())
    }

    /// Winners waiting to be written to the lottery.
    pub fn pending_winners(&self) -> Result<Vec<Winner>> {
        require!(self.randomness.is_some(), LotteryError::WinnersNotSelected);
        require!(!self.committed, LotteryError::LotteryClosed);
        Ok(self.winners.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_lottery_error;

    #[test]
    fn winners_are_selected_once_and_committed_once() {
        let mut attempt = DrawAttempt::open(
            Pubkey::new_unique(),
            1,
            Pubkey::new_unique(),
            99,
            1_000,
            253,
        );
        assert_lottery_error(attempt.pending_winners(), LotteryError::WinnersNotSelected);

        attempt.record_winners([7u8; 32], vec![]).unwrap();
        assert_lottery_error(
            attempt.record_winners([8u8; 32], vec![]),
            LotteryError::WinnersAlreadySelected,
        );
        assert_eq!(attempt.randomness, Some([7u8; 32]));
        assert!(attempt.pending_winners().unwrap().is_empty());

        attempt.committed = true;
        assert_lottery_error(attempt.pending_winners(), LotteryError::LotteryClosed);
    }
}
