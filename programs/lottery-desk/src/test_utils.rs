use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

use crate::error::LotteryError;

pub fn assert_lottery_error<T>(result: anchor_lang::Result<T>, expected: LotteryError) {
    match result {
        Ok(_) => panic!("expected {:?}, got Ok", expected),
        Err(Error::AnchorError(anchor_err)) => {
            assert_eq!(
                anchor_err.error_code_number,
                ERROR_CODE_OFFSET + expected as u32,
                "expected {:?}, got {}",
                expected,
                anchor_err.error_name
            );
        }
        Err(other) => panic!("expected {:?}, got {:?}", expected, other),
    }
}
