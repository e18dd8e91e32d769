use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use state::{LotteryEdit, LotteryTerms, Player, TicketKind};

declare_id!("2RTh2Y4e2N421EbSnUYTKdGqDHJH7etxZb3VrWDMpNMY");

#[program]
pub mod lottery_desk {
    use super::*;

    pub fn initialize_config(ctx: Context<InitializeConfig>) -> Result<()> {
        process_initialize_config(ctx)
    }

    pub fn register_agent(ctx: Context<RegisterAgent>) -> Result<()> {
        process_register_agent(ctx)
    }

    pub fn set_agent_active(ctx: Context<ManageAgent>, is_active: bool) -> Result<()> {
        process_set_agent_active(ctx, is_active)
    }

    pub fn credit_agent(ctx: Context<ManageAgent>, amount: u64) -> Result<()> {
        process_credit_agent(ctx, amount)
    }

    pub fn create_lottery(
        ctx: Context<CreateLottery>,
        terms: LotteryTerms,
        open_immediately: bool,
    ) -> Result<()> {
        process_create_lottery(ctx, terms, open_immediately)
    }

    pub fn activate_lottery(ctx: Context<ManageLottery>) -> Result<()> {
        process_activate_lottery(ctx)
    }

    pub fn edit_lottery(ctx: Context<ManageLottery>, edit: LotteryEdit) -> Result<()> {
        process_edit_lottery(ctx, edit)
    }

    pub fn book_ticket(
        ctx: Context<BookTicket>,
        number: u16,
        player: Player,
        kind: TicketKind,
    ) -> Result<()> {
        process_book_ticket(ctx, number, player, kind)
    }

    pub fn update_ticket(ctx: Context<ManageTicket>, number: u16, player: Player) -> Result<()> {
        process_update_ticket(ctx, number, player)
    }

    pub fn cancel_ticket(ctx: Context<ManageTicket>, number: u16) -> Result<()> {
        process_cancel_ticket(ctx, number)
    }

    pub fn start_draw(ctx: Context<StartDraw>) -> Result<()> {
        process_start_draw(ctx)
    }

    pub fn reveal_winners(ctx: Context<RevealWinners>) -> Result<()> {
        process_reveal_winners(ctx)
    }

    pub fn commit_winners(ctx: Context<CommitWinners>) -> Result<()> {
        process_commit_winners(ctx)
    }

    pub fn cancel_lottery(ctx: Context<CancelLottery>) -> Result<()> {
        process_cancel_lottery(ctx)
    }

    pub fn delete_lottery(ctx: Context<DeleteLottery>) -> Result<()> {
        process_delete_lottery(ctx)
    }
}
