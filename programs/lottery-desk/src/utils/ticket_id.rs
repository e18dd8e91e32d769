use anchor_lang::prelude::*;

use crate::{
    constants::{
        MAX_BASE_SET_ROTATIONS, MAX_TICKET_ID_ATTEMPTS, TICKET_ID_DIGITS, TICKET_ID_LEN,
        TICKET_ID_LETTERS, TICKET_ID_LETTER_COUNT,
    },
    error::LotteryError,
    utils::randomness::DrawRng,
};

/// Mints ticket ids that are all permutations of one base set, so every
/// ticket of a batch "looks related".
///
/// The base set is session state: it lives on the ticket pool and is handed
/// back in through [`TicketIdGenerator::with_base_set`] for each booking.
/// Permutations can collide, callers check [`is_unique`] (or use
/// [`TicketIdGenerator::generate_unique`]).
pub struct TicketIdGenerator {
    base_set: [u8; TICKET_ID_LEN],
    rng: DrawRng,
}

impl TicketIdGenerator {
    /// Starts a new session with a fresh base set.
    pub fn new(mut rng: DrawRng) -> Self {
        let base_set = random_base_set(&mut rng);
        Self { base_set, rng }
    }

    /// Resumes a session from a stored base set.
    pub fn with_base_set(base_set: [u8; TICKET_ID_LEN], rng: DrawRng) -> Self {
        Self { base_set, rng }
    }

    /// Fisher-Yates shuffle of the base set.
    pub fn generate(&mut self) -> String {
        let mut chars = self.base_set;
        for i in (1..chars.len()).rev() {
            let j = self.rng.gen_index(i + 1);
            chars.swap(i, j);
        }
        to_string(&chars)
    }

    /// Replaces the base set with a new, different one and returns it.
    pub fn reset(&mut self) -> String {
        let previous = self.base_set;
        while self.base_set == previous {
            self.base_set = random_base_set(&mut self.rng);
        }
        self.current_base_set()
    }

    pub fn current_base_set(&self) -> String {
        to_string(&self.base_set)
    }

    pub fn base_set(&self) -> [u8; TICKET_ID_LEN] {
        self.base_set
    }

    /// Generates until an id not in `existing` turns up, rotating to a new
    /// base set whenever one stops producing fresh permutations.
    pub fn generate_unique(&mut self, existing: &[String]) -> Result<String> {
        for rotation in 0..=MAX_BASE_SET_ROTATIONS {
            if rotation > 0 {
                let base = self.reset();
                msg!("Ticket id base set rotated to {}", base);
            }
            for _ in 0..MAX_TICKET_ID_ATTEMPTS {
                let id = self.generate();
                if is_unique(&id, existing) {
                    return Ok(id);
                }
            }
        }

        err!(LotteryError::TicketIdSpaceExhausted)
    }
}

pub fn is_unique(id: &str, existing: &[String]) -> bool {
    !existing.iter().any(|other| other == id)
}

fn random_base_set(rng: &mut DrawRng) -> [u8; TICKET_ID_LEN] {
    let mut base_set = [0u8; TICKET_ID_LEN];
    for (i, slot) in base_set.iter_mut().enumerate() {
        *slot = if i < TICKET_ID_LETTER_COUNT {
            rng.pick(TICKET_ID_LETTERS)
        } else {
            rng.pick(TICKET_ID_DIGITS)
        };
    }
    base_set
}

fn to_string(chars: &[u8]) -> String {
    chars.iter().map(|c| *c as char).collect()
}
