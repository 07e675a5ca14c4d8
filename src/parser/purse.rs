use crate::domain::model::PurseModel;
use crate::parser::format::parse_amount;
use crate::parser::markers::{
    ATTRIBUTE_END, HIGHLIGHT_END, PROFILE_EMAIL, PROFILE_NAME, PROFILE_USER_NAME, PURSE_BALANCE,
    PURSE_NUMBER,
};
use crate::parser::scan::field_until;
use crate::utils::error::Result;

/// Reads the profile form and the purse summary of the profile page.
pub fn parse_user_purse(page: &str) -> Result<PurseModel> {
    let balance = field_until(page, PURSE_BALANCE, HIGHLIGHT_END, "balance")?;

    Ok(PurseModel {
        user_name: field_until(page, PROFILE_USER_NAME, ATTRIBUTE_END, "user name")?.to_string(),
        name: field_until(page, PROFILE_NAME, ATTRIBUTE_END, "name")?.to_string(),
        email: field_until(page, PROFILE_EMAIL, ATTRIBUTE_END, "email")?.to_string(),
        purse: field_until(page, PURSE_NUMBER, HIGHLIGHT_END, "purse")?
            .trim()
            .to_string(),
        balance: parse_amount(balance)?,
    })
}
