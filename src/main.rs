mod args;
mod config;
mod format;
mod input;
mod output;
mod reader;
mod writer;

use bank::{timestamp, Currency, Registry, StatementReport};
use config::AppConfig;
use format::Locale;
use input::{Command, InputCommand};

use anyhow::Result;

fn main() -> Result<()> {
    let config = config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let reports = process_commands(&config)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&reports, &config.locale)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read commands, apply them to the accounts, and collect the requested statements
fn process_commands(config: &AppConfig) -> Result<Vec<StatementReport>> {
    let source = args::parse_input_arg()?;
    log::debug!("Reading commands from: {source:?}");

    let mut rdr = reader::build_csv_reader(source)?;
    let mut reports = vec![];

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputCommand>() {
        log::debug!("Parsing record into InputCommand: {record:?}");
        let input_command = match record {
            Ok(input_command) => input_command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_command into Command: {input_command:?}");
        let command = match input_command.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e:#}");
                continue;
            }
        };

        match execute(command, config.currency) {
            Ok(Some(report)) => reports.push(report),
            Ok(None) => {}
            Err(e) => log::warn!("{e}"),
        }
    }

    Ok(reports)
}

fn execute(command: Command, currency: Currency) -> bank::Result<Option<StatementReport>> {
    match command {
        Command::Operation {
            client_id,
            kind,
            amount,
            description,
        } => {
            let account = Registry::global().get_or_create_in(client_id, currency)?;

            account.create_and_append(kind.as_str(), amount.as_str(), description.as_deref())?;

            log::info!("{kind} for {} was successful", account.client_id());
            Ok(None)
        }
        Command::Statement {
            client_id,
            since,
            till,
        } => {
            let account = Registry::global().get_or_create_in(client_id, currency)?;
            let till = till.unwrap_or_else(timestamp::now);

            Ok(Some(account.statement(&since, &till)?))
        }
    }
}

/// Lay out every statement as table rows, and write them to stdout as one CSV
fn report_to_std_out(reports: &[StatementReport], locale: &Locale) -> Result<()> {
    let lines: Vec<output::StatementLine> = reports
        .iter()
        .flat_map(|report| output::statement_lines(report, locale))
        .collect();

    log::debug!("Built {} lines for {} statements", lines.len(), reports.len());

    let output = writer::write_statements(&lines)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{output}");

    Ok(())
}
