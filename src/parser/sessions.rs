use crate::domain::model::{SessionModel, SessionsModelList};
use crate::parser::format::parse_session_date;
use crate::parser::markers::{
    ATTRIBUTE_END, CELL_END, SESSION_AGENT_CELL, SESSION_DATE_CELL, SESSION_DELETE_BUTTON,
};
use crate::parser::scan::field_until;
use crate::parser::user_agent::UserAgentParser;
use crate::utils::error::{PingPingError, Result};

/// The three columns of the session table, each in page order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionColumns {
    pub timestamps: Vec<String>,
    pub user_agents: Vec<String>,
    pub session_ids: Vec<String>,
}

/// Collects the session columns from the tab-stripped page lines.
pub fn session_columns(lines: &[&str]) -> Result<SessionColumns> {
    let mut columns = SessionColumns::default();

    for line in lines {
        if line.contains(SESSION_DATE_CELL) {
            let value = field_until(line, SESSION_DATE_CELL, CELL_END, "last active date")?;
            columns.timestamps.push(value.to_string());
        }
        if line.contains(SESSION_AGENT_CELL) {
            let value = field_until(line, SESSION_AGENT_CELL, CELL_END, "user agent")?;
            columns.user_agents.push(value.to_string());
        }
        if line.contains(SESSION_DELETE_BUTTON) {
            let value = field_until(line, SESSION_DELETE_BUTTON, ATTRIBUTE_END, "session id")?;
            columns.session_ids.push(value.to_string());
        }
    }

    Ok(columns)
}

/// Brings a column back in line with the timestamp column around the blank
/// row at `blank`. A column of the same length has its entry at `blank`
/// discarded; a column one entry short gets an empty entry inserted there.
fn realign(
    mut column: Vec<String>,
    blank: usize,
    expected: usize,
    allow_same_length: bool,
    name: &str,
) -> Result<Vec<String>> {
    if allow_same_length && column.len() == expected {
        column[blank].clear();
    } else if column.len() + 1 == expected {
        column.insert(blank, String::new());
    } else {
        return Err(PingPingError::alignment(format!(
            "{} column has {} entries for {} timestamps",
            name,
            column.len(),
            expected
        )));
    }
    Ok(column)
}

/// Zips the session columns into session records.
///
/// The site renders one extra row whose timestamp is empty and which has no
/// delete button. Exactly one such row must be present; the user-agent
/// column may or may not carry an entry for it, the session-id column must
/// not. Anything else is reported as a [`PingPingError::SessionAlignment`].
/// Rows whose timestamp is only whitespace are kept aligned and skipped.
pub fn align_sessions(
    timestamps: Vec<String>,
    user_agents: Vec<String>,
    session_ids: Vec<String>,
    agent_parser: &dyn UserAgentParser,
) -> Result<Vec<SessionModel>> {
    let blanks: Vec<usize> = timestamps
        .iter()
        .enumerate()
        .filter(|(_, value)| value.is_empty())
        .map(|(idx, _)| idx)
        .collect();

    let blank = match blanks.as_slice() {
        [blank] => *blank,
        [] => return Err(PingPingError::alignment("no blank timestamp row found")),
        many => {
            return Err(PingPingError::alignment(format!(
                "{} blank timestamp rows found at {:?}",
                many.len(),
                many
            )))
        }
    };

    let expected = timestamps.len();
    let user_agents = realign(user_agents, blank, expected, true, "user agent")?;
    let session_ids = realign(session_ids, blank, expected, false, "session id")?;

    timestamps
        .into_iter()
        .zip(user_agents)
        .zip(session_ids)
        .filter(|((timestamp, _), _)| !timestamp.trim().is_empty())
        .map(|((timestamp, user_agent), session_id)| {
            Ok(SessionModel {
                last_active_date: parse_session_date(&timestamp)?,
                user_agent: agent_parser.parse(&user_agent).unwrap_or_default(),
                session_id,
            })
        })
        .collect()
}

/// Reads the session table of the "remember me" page.
pub fn parse_user_sessions(
    page: &str,
    agent_parser: &dyn UserAgentParser,
) -> Result<SessionsModelList> {
    let page = page.replace('\t', "");
    let lines: Vec<&str> = page.split('\n').collect();

    let columns = session_columns(&lines)?;
    let sessions = align_sessions(
        columns.timestamps,
        columns.user_agents,
        columns.session_ids,
        agent_parser,
    )?;

    Ok(SessionsModelList { sessions })
}
