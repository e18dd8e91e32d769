use anchor_lang::prelude::*;

use crate::{
    constants::*,
    error::LotteryError,
    state::{Player, Prize, PrizeValue, TicketKind},
};

pub fn validate_lottery_name(name: &str) -> Result<()> {
    require!(
        !name.trim().is_empty() && name.len() <= MAX_NAME_LEN,
        LotteryError::InvalidLotteryName
    );
    Ok(())
}

pub fn validate_description(description: &str) -> Result<()> {
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        LotteryError::DescriptionTooLong
    );
    Ok(())
}

/// Checks the prize list and, when every prize is an amount, that the pool
/// covers their total. Descriptive prizes have no value to add up, so any
/// one of them turns the total check off.
pub fn validate_prizes(prizes: &[Prize], prize_pool: u64) -> Result<()> {
    require!(!prizes.is_empty(), LotteryError::PrizesRequired);
    require!(prizes.len() <= MAX_PRIZES, LotteryError::TooManyPrizes);

    for prize in prizes {
        let name = prize.name.trim();
        require!(
            !name.is_empty() && prize.name.len() <= MAX_PRIZE_NAME_LEN,
            LotteryError::InvalidPrizeName
        );
        match &prize.value {
            PrizeValue::Amount(amount) => {
                require!(*amount > 0, LotteryError::InvalidPrizeValue)
            }
            PrizeValue::Description(text) => require!(
                !text.trim().is_empty() && text.len() <= MAX_PRIZE_DESCRIPTION_LEN,
                LotteryError::InvalidPrizeValue
            ),
        }
    }

    let amounts: Option<Vec<u64>> = prizes.iter().map(|prize| prize.value.amount()).collect();
    if let Some(amounts) = amounts {
        let mut total: u64 = 0;
        for amount in amounts {
            total = total
                .checked_add(amount)
                .ok_or(LotteryError::PrizeTotalExceedsPool)?;
        }
        require_gte!(prize_pool, total, LotteryError::PrizeTotalExceedsPool);
    }

    Ok(())
}

pub fn validate_player(player: &Player) -> Result<()> {
    let name = player.name.trim();
    require!(
        !name.is_empty() && player.name.len() <= MAX_PLAYER_NAME_LEN,
        LotteryError::InvalidPlayerName
    );
    require!(is_valid_phone(&player.phone), LotteryError::InvalidPhoneNumber);
    Ok(())
}

pub fn validate_ticket_kind(kind: &TicketKind) -> Result<()> {
    if let TicketKind::GameLinked { game_id, server_id } = kind {
        require!(
            is_alphanumeric_between(game_id, MIN_GAME_ID_LEN, MAX_GAME_ID_LEN),
            LotteryError::InvalidGameId
        );
        require!(
            is_alphanumeric_between(server_id, MIN_SERVER_ID_LEN, MAX_SERVER_ID_LEN),
            LotteryError::InvalidServerId
        );
    }
    Ok(())
}

/// `^\+?[0-9]{10,15}$`
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_alphanumeric_between(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_alphanumeric())
}
