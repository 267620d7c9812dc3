use bank::ids::ClientId;
use bank::timestamp::{self, Timestamp};
use bank::OperationKind;

use anyhow::Result;
use serde::Deserialize;
use thiserror::Error;

/// Represents an input command that a CSV record would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputCommand {
    #[serde(rename = "type")]
    pub typ: String,

    pub client: String,
    pub amount: Option<String>,
    pub description: Option<String>,
    pub since: Option<String>,
    pub till: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Operation {
        client_id: ClientId,
        kind: OperationKind,
        amount: String,
        description: Option<String>,
    },
    Statement {
        client_id: ClientId,
        since: Timestamp,
        till: Option<Timestamp>,
    },
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input command: amount value missing from {1}: {0:?}")]
    NoAmount(InputCommand, OperationKind),

    #[error("Error parsing input command: `since` value missing from statement: {0:?}")]
    NoSince(InputCommand),
}

const STATEMENT: &str = "statement";

impl InputCommand {
    pub fn parse_command(self) -> Result<Command> {
        let client_id = ClientId::parse(&self.client)?;

        if self.typ.trim().eq_ignore_ascii_case(STATEMENT) {
            let since = non_blank(&self.since).ok_or_else(|| InputParseError::NoSince(self.clone()))?;
            let since = timestamp::parse_timestamp(since)?;

            let till = match non_blank(&self.till) {
                Some(till) => Some(timestamp::parse_timestamp(till)?),
                None => None,
            };

            return Ok(Command::Statement {
                client_id,
                since,
                till,
            });
        }

        let kind: OperationKind = self.typ.parse()?;

        let amount = non_blank(&self.amount)
            .ok_or_else(|| InputParseError::NoAmount(self.clone(), kind))?
            .to_string();

        Ok(Command::Operation {
            client_id,
            kind,
            amount,
            description: non_blank(&self.description).map(str::to_string),
        })
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use bank::LedgerError;

    use super::*;

    const SOME_CLIENT: &str = "joe";
    const SOME_SINCE: &str = "2020-01-01 00:00:00";
    const SOME_TILL: &str = "2022-01-01 00:00:00";

    fn build_input(typ: &str, amount: Option<&str>, since: Option<&str>) -> InputCommand {
        InputCommand {
            typ: typ.to_string(),
            client: SOME_CLIENT.to_string(),
            amount: amount.map(str::to_string),
            description: None,
            since: since.map(str::to_string),
            till: None,
        }
    }

    #[test]
    fn parse_operation() {
        let mut input = build_input("Deposit", Some("200"), None);
        input.description = Some("ATM deposit".to_string());

        assert_eq!(
            input.parse_command().unwrap(),
            Command::Operation {
                client_id: ClientId::from(SOME_CLIENT),
                kind: OperationKind::Deposit,
                amount: "200".to_string(),
                description: Some("ATM deposit".to_string()),
            }
        );
    }

    #[test]
    fn parse_operation_without_amount() {
        let err = build_input("withdraw", Some(" "), None)
            .parse_command()
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<InputParseError>(),
            Some(InputParseError::NoAmount(_, OperationKind::Withdraw))
        ));
    }

    #[test]
    fn parse_unknown_type() {
        let err = build_input("transfer", Some("1"), None)
            .parse_command()
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<LedgerError>(),
            Some(&LedgerError::InvalidOperationKind("transfer".to_string()))
        );
    }

    #[test]
    fn parse_blank_client() {
        let mut input = build_input("deposit", Some("1"), None);
        input.client = "".to_string();

        let err = input.parse_command().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LedgerError>(),
            Some(LedgerError::InvalidClientId(_))
        ));
    }

    #[test]
    fn parse_statement() {
        let mut input = build_input("STATEMENT", None, Some(SOME_SINCE));
        input.till = Some(SOME_TILL.to_string());

        let command = input.parse_command().unwrap();

        assert_eq!(
            command,
            Command::Statement {
                client_id: ClientId::from(SOME_CLIENT),
                since: timestamp::parse_timestamp(SOME_SINCE).unwrap(),
                till: Some(timestamp::parse_timestamp(SOME_TILL).unwrap()),
            }
        );
    }

    #[test]
    fn parse_statement_till_is_optional() {
        let command = build_input("statement", None, Some(SOME_SINCE))
            .parse_command()
            .unwrap();

        assert!(matches!(command, Command::Statement { till: None, .. }));
    }

    #[test]
    fn parse_statement_errors() {
        let err = build_input("statement", None, None)
            .parse_command()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputParseError>(),
            Some(InputParseError::NoSince(_))
        ));

        let err = build_input("statement", None, Some("01/01/2020"))
            .parse_command()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LedgerError>(),
            Some(LedgerError::InvalidTimestamp(_))
        ));
    }
}
