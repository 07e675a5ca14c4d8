// Markup fixtures of the PingPing pages. Matched verbatim, attribute
// spacing included.

pub const ODD_ROW: &str = "<tr class=\"\" >";
pub const EVEN_ROW: &str = "<tr class=\"even \" >";
pub const ROW_END: &str = "</tr>";

pub const CELL: &str = "<td>";
pub const CELL_END: &str = "</td>";
pub const DESCRIPTION_CELL: &str = "<td style=\"word-wrap:break-all;\">";
pub const PRICE_CELL: &str = "<td class=\"\">";
pub const CREDIT_HIGHLIGHT: &str = "<span class=\"g-green\">";
pub const HIGHLIGHT_END: &str = "</span>";

pub const SESSION_DATE_CELL: &str = "<td data-label=\"Laatst actief\">";
pub const SESSION_AGENT_CELL: &str = "<td data-label=\"Browser\">";
pub const SESSION_DELETE_BUTTON: &str = "<button type=\"submit\" name=\"delete\" value=\"";
pub const ATTRIBUTE_END: &str = "\"";

pub const PROFILE_USER_NAME: &str = "name=\"Username\" value=\"";
pub const PROFILE_NAME: &str = "name=\"Name\" value=\"";
pub const PROFILE_EMAIL: &str = "name=\"Email\" value=\"";
pub const PURSE_NUMBER: &str = "<span class=\"purse-number\">";
pub const PURSE_BALANCE: &str = "<span class=\"purse-balance\">";

pub const INVALID_PASSWORD: &str = "Error Invalid Password";
pub const UNKNOWN_ACCOUNT: &str = "Error Specified account does not exist";
