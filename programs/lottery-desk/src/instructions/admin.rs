use anchor_lang::prelude::*;

use crate::{
    constants::{AGENT_SEED, CONFIG_SEED},
    error::LotteryError,
    events::{AgentRegistered, AgentStatusChanged, BalanceAdjusted},
    state::{to_delta, Agent, LedgerReason, ProgramConfig},
};

/// Accounts required to create the program configuration.
/// The signer becomes the admin.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The admin wallet, also paying for the account.
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + ProgramConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, ProgramConfig>,

    pub system_program: Program<'info, System>,
}

/// Accounts required to register an agent for a wallet.
#[derive(Accounts)]
pub struct RegisterAgent<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ LotteryError::Unauthorized,
    )]
    pub config: Account<'info, ProgramConfig>,

    /// CHECK: any wallet may be registered; it only has to sign later on.
    pub authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + Agent::INIT_SPACE,
        seeds = [AGENT_SEED, authority.key().as_ref()],
        bump
    )]
    pub agent: Account<'info, Agent>,

    pub system_program: Program<'info, System>,
}

/// Accounts shared by the admin's agent-management instructions.
#[derive(Accounts)]
pub struct ManageAgent<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ LotteryError::Unauthorized,
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        mut,
        seeds = [AGENT_SEED, agent.authority.as_ref()],
        bump = agent.bump,
    )]
    pub agent: Account<'info, Agent>,
}

pub fn process_initialize_config(ctx: Context<InitializeConfig>) -> Result<()> {
    ctx.accounts.config.set_inner(ProgramConfig {
        admin: ctx.accounts.admin.key(),
        agent_count: 0,
        bump: ctx.bumps.config,
    });
    msg!("Config initialized, admin {}", ctx.accounts.admin.key());
    Ok(())
}

pub fn process_register_agent(ctx: Context<RegisterAgent>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();

    let config = &mut ctx.accounts.config;
    config.agent_count = config
        .agent_count
        .checked_add(1)
        .ok_or(LotteryError::MathOverflow)?;

    ctx.accounts
        .agent
        .set_inner(Agent::init(authority, now, ctx.bumps.agent));

    msg!("Agent #{} registered for {}", config.agent_count, authority);
    emit!(AgentRegistered {
        agent: ctx.accounts.agent.key(),
        authority,
    });
    Ok(())
}

/// Inactive agents keep their lotteries and balance but cannot create, edit,
/// book or draw until re-activated.
pub fn process_set_agent_active(ctx: Context<ManageAgent>, is_active: bool) -> Result<()> {
    let agent = &mut ctx.accounts.agent;
    agent.is_active = is_active;

    msg!("Agent {} active: {}", agent.authority, is_active);
    emit!(AgentStatusChanged {
        agent: agent.key(),
        is_active,
    });
    Ok(())
}

/// Credits an approved deposit to the agent's balance.
pub fn process_credit_agent(ctx: Context<ManageAgent>, amount: u64) -> Result<()> {
    require!(amount > 0, LotteryError::InvalidDepositAmount);

    let agent_key = ctx.accounts.agent.key();
    let agent = &mut ctx.accounts.agent;
    let delta = to_delta(amount)?;
    agent.adjust_balance(delta, LedgerReason::Deposit)?;

    emit!(BalanceAdjusted::entry(
        agent_key,
        agent,
        delta,
        LedgerReason::Deposit,
        None
    ));
    Ok(())
}
