use anchor_lang::prelude::*;

#[constant]
pub const CONFIG_SEED: &[u8] = b"config";
#[constant]
pub const AGENT_SEED: &[u8] = b"agent";
#[constant]
pub const LOTTERY_SEED: &[u8] = b"lottery";
#[constant]
pub const TICKET_POOL_SEED: &[u8] = b"ticket_pool";
#[constant]
pub const DRAW_ATTEMPT_SEED: &[u8] = b"draw_attempt";

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_DESCRIPTION_LEN: usize = 128;
pub const MAX_PRIZE_NAME_LEN: usize = 32;
pub const MAX_PRIZE_DESCRIPTION_LEN: usize = 32;
pub const MAX_PRIZES: usize = 10;
pub const MAX_TICKETS: u16 = 1_000;
/// Cancelled tickets stay in the pool, so it may hold more entries than seats.
pub const MAX_POOL_ENTRIES: usize = 2 * MAX_TICKETS as usize;

pub const MAX_PLAYER_NAME_LEN: usize = 32;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;
pub const MIN_GAME_ID_LEN: usize = 4;
pub const MAX_GAME_ID_LEN: usize = 16;
pub const MIN_SERVER_ID_LEN: usize = 2;
pub const MAX_SERVER_ID_LEN: usize = 16;

/// Ticket ids are a permutation of a 3-letter + 3-digit base set.
pub const TICKET_ID_LEN: usize = 6;
pub const TICKET_ID_LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ"; // no I or O
pub const TICKET_ID_DIGITS: &[u8] = b"23456789"; // no 0 or 1
pub const TICKET_ID_LETTER_COUNT: usize = 3;

/// Shuffles tried against one base set before the pool rotates to a new one.
pub const MAX_TICKET_ID_ATTEMPTS: usize = 32;
pub const MAX_BASE_SET_ROTATIONS: usize = 8;
