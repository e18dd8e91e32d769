use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // access
    #[msg("The signer is not permitted to perform this action")]
    Unauthorized,
    #[msg("This agent account is not active")]
    AgentInactive,

    // validation
    #[msg("Ticket price must be greater than zero")]
    InvalidTicketPrice,
    #[msg("Ticket capacity must be between 1 and the maximum allowed")]
    InvalidTicketCapacity,
    #[msg("Ticket capacity cannot be reduced below the number of tickets already booked")]
    CapacityBelowBooked,
    #[msg("Prize pool must be greater than zero")]
    InvalidPrizePool,
    #[msg("At least one prize must be defined")]
    PrizesRequired,
    #[msg("Too many prizes for a single lottery")]
    TooManyPrizes,
    #[msg("Every prize needs a name no longer than 32 chars")]
    InvalidPrizeName,
    #[msg("Prize value must be a positive amount or a non-empty description of at most 32 chars")]
    InvalidPrizeValue,
    #[msg("Total prize value exceeds the prize pool")]
    PrizeTotalExceedsPool,
    #[msg("Lottery name is required and can be at most 32 chars")]
    InvalidLotteryName,
    #[msg("Lottery description can be at most 128 chars")]
    DescriptionTooLong,
    #[msg("Draw time must be in the future")]
    InvalidDrawTime,
    #[msg("Amount does not fit a signed ledger adjustment")]
    AmountTooLarge,
    #[msg("Deposit amount must be greater than zero")]
    InvalidDepositAmount,

    // tickets
    #[msg("Player name is required and can be at most 32 chars")]
    InvalidPlayerName,
    #[msg("Phone number must be 10 to 15 digits with an optional leading +")]
    InvalidPhoneNumber,
    #[msg("Game ID must be at least 4 alphanumeric characters")]
    InvalidGameId,
    #[msg("Server ID must be at least 2 alphanumeric characters")]
    InvalidServerId,
    #[msg("Ticket number is outside the lottery's capacity")]
    InvalidTicketNumber,
    #[msg("This ticket number is already booked")]
    TicketNumberTaken,
    #[msg("Lottery is fully booked")]
    SoldOut,
    #[msg("Ticket not found in this lottery")]
    TicketNotFound,
    #[msg("Ticket has already been cancelled")]
    TicketAlreadyCancelled,
    #[msg("Ticket kind does not match the lottery kind")]
    TicketKindMismatch,
    #[msg("Could not mint a unique ticket id")]
    TicketIdSpaceExhausted,

    // lifecycle
    #[msg("Balance is too low for this operation")]
    InsufficientBalance,
    #[msg("Lottery status changed before this write; refetch and retry")]
    ConcurrentModification,
    #[msg("Lottery is in a terminal state and can no longer change")]
    LotteryClosed,
    #[msg("This status transition is not allowed")]
    InvalidStatusTransition,
    #[msg("Lottery must be active for this operation")]
    LotteryNotActive,
    #[msg("Cannot delete a lottery with booked tickets; cancel it instead")]
    TicketsAlreadyBooked,

    // draw
    #[msg("No prizes are defined for this lottery")]
    NoPrizes,
    #[msg("No eligible tickets are available for drawing")]
    NoEligibleTickets,
    #[msg("Randomness account does not match this draw attempt")]
    IncorrectRandomnessAccount,
    #[msg("Randomness account data could not be parsed")]
    InvalidRandomnessAccount,
    #[msg("Randomness has already been revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness has not been resolved yet")]
    RandomnessNotResolved,
    #[msg("Draw attempt does not belong to the current draw")]
    StaleDrawAttempt,
    #[msg("Winners were already selected for this draw attempt")]
    WinnersAlreadySelected,
    #[msg("Winners have not been selected for this draw attempt yet")]
    WinnersNotSelected,
    #[msg("Winners were selected but could not be recorded on the lottery; retry commit_winners with the same draw attempt")]
    WinnersNotRecorded,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
