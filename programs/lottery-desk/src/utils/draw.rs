use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Prize, Ticket, Winner},
    utils::randomness::DrawRng,
};

/// Draws one ticket per prize, grand prize first, without replacement.
///
/// Only eligible tickets take part. When there are fewer eligible tickets
/// than prizes, the lowest prizes go unawarded and the result holds
/// `min(prizes, eligible)` winners.
pub fn select_winners(
    prizes: &[Prize],
    tickets: &[Ticket],
    rng: &mut DrawRng,
) -> Result<Vec<Winner>> {
    require!(!prizes.is_empty(), LotteryError::NoPrizes);

    let mut remaining: Vec<&Ticket> = tickets.iter().filter(|t| t.is_eligible()).collect();
    require!(!remaining.is_empty(), LotteryError::NoEligibleTickets);

    let mut winners = Vec::with_capacity(prizes.len().min(remaining.len()));
    for (prize_index, prize) in prizes.iter().enumerate() {
        if remaining.is_empty() {
            msg!(
                "Ran out of tickets, prizes {}..{} not awarded",
                prize_index,
                prizes.len()
            );
            break;
        }
        let pick = rng.gen_index(remaining.len());
        let ticket = remaining.swap_remove(pick);
        let index = u8::try_from(prize_index).map_err(|_| LotteryError::MathOverflow)?;
        winners.push(Winner::new(ticket, index, prize));
    }

    Ok(winners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        state::{Player, PrizeValue, TicketKind, TicketStatus},
        test_utils::assert_lottery_error,
    };

    fn prizes(n: usize) -> Vec<Prize> {
        (0..n)
            .map(|i| Prize {
                name: format!("Prize {}", i + 1),
                value: PrizeValue::Amount(1_000 / (i as u64 + 1)),
            })
            .collect()
    }

    fn ticket(number: u16, status: TicketStatus) -> Ticket {
        Ticket {
            id: format!("T{:05}", number),
            number,
            booked: status == TicketStatus::Active,
            status,
            player: Player {
                name: format!("Player {}", number),
                phone: "9876543210".to_string(),
            },
            kind: TicketKind::Standard,
            booked_at: 0,
            cancelled_at: None,
        }
    }

    fn active(count: u16) -> Vec<Ticket> {
        (1..=count).map(|n| ticket(n, TicketStatus::Active)).collect()
    }

    #[test]
    fn two_prizes_five_tickets() {
        let tickets = active(5);
        let winners =
            select_winners(&prizes(2), &tickets, &mut DrawRng::new([3u8; 32])).unwrap();

        assert_eq!(winners.len(), 2);
        assert_eq!(winners[0].prize_index, 0);
        assert_eq!(winners[0].prize_name, "Prize 1");
        assert_eq!(winners[1].prize_index, 1);
        assert_ne!(winners[0].ticket_id, winners[1].ticket_id);
        for winner in &winners {
            assert!(tickets.iter().any(|t| t.id == winner.ticket_id));
        }
    }

    #[test]
    fn no_ticket_wins_twice() {
        let tickets = active(12);
        for seed in 0u8..32 {
            let winners =
                select_winners(&prizes(10), &tickets, &mut DrawRng::new([seed; 32])).unwrap();
            let mut numbers: Vec<u16> = winners.iter().map(|w| w.ticket_number).collect();
            numbers.sort_unstable();
            numbers.dedup();
            assert_eq!(numbers.len(), winners.len());
        }
    }

    #[test]
    fn fewer_tickets_than_prizes_awards_the_top_prizes() {
        let tickets = active(3);
        let winners =
            select_winners(&prizes(5), &tickets, &mut DrawRng::new([9u8; 32])).unwrap();

        assert_eq!(winners.len(), 3);
        let indices: Vec<u8> = winners.iter().map(|w| w.prize_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn cancelled_tickets_never_win() {
        let mut tickets = active(4);
        tickets.push(ticket(5, TicketStatus::Cancelled));
        tickets.push(ticket(6, TicketStatus::Cancelled));

        for seed in 0u8..16 {
            let winners =
                select_winners(&prizes(6), &tickets, &mut DrawRng::new([seed; 32])).unwrap();
            assert_eq!(winners.len(), 4);
            assert!(winners.iter().all(|w| w.ticket_number <= 4));
        }
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let mut rng = DrawRng::new([1u8; 32]);
        assert_lottery_error(
            select_winners(&prizes(1), &[], &mut rng),
            LotteryError::NoEligibleTickets,
        );
        assert_lottery_error(
            select_winners(&prizes(1), &[ticket(1, TicketStatus::Cancelled)], &mut rng),
            LotteryError::NoEligibleTickets,
        );
        assert_lottery_error(
            select_winners(&[], &active(3), &mut rng),
            LotteryError::NoPrizes,
        );
    }

    #[test]
    fn same_seed_same_winners() {
        let tickets = active(20);
        let a = select_winners(&prizes(3), &tickets, &mut DrawRng::new([42u8; 32])).unwrap();
        let b = select_winners(&prizes(3), &tickets, &mut DrawRng::new([42u8; 32])).unwrap();
        assert_eq!(a, b);
    }
}
