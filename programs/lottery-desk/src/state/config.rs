use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct ProgramConfig {
    /// Registers agents, toggles them and credits approved deposits.
    pub admin: Pubkey,

    /// Number of agents registered so far.
    pub agent_count: u64,

    pub bump: u8,
}
