use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use shared::brazilian_format;
use shared::models::{Decision, NumberKind};
use std::fs::File;
use std::io::{BufReader, Read};

use crate::error::EngineError;

// Date and time cells as written by pt-BR spreadsheets
pub mod brazilian_datetime {
    use anyhow::{anyhow, Result};
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

    // Parses date "dd/mm/yyyy" and time "HH:MM:SS" into DateTime<Utc>
    pub fn parse_datetime(date_str: &str, time_str: &str) -> Result<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(date_str, "%d/%m/%Y")
            .map_err(|e| anyhow!("Failed to parse date '{}': {}", date_str, e))?;
        let time = NaiveTime::parse_from_str(time_str, "%H:%M:%S")
            .map_err(|e| anyhow!("Failed to parse time '{}': {}", time_str, e))?;

        // Sheets carry no timezone; times are stored as UTC
        Ok(DateTime::from_naive_utc_and_offset(date.and_time(time), Utc))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{Datelike, Timelike};

        #[test]
        fn test_parse_datetime_valid() {
            let dt = parse_datetime("30/12/2024", "18:20:00").unwrap();
            assert_eq!(dt.year(), 2024);
            assert_eq!(dt.month(), 12);
            assert_eq!(dt.day(), 30);
            assert_eq!(dt.hour(), 18);
            assert_eq!(dt.minute(), 20);
            assert_eq!(dt.second(), 0);
        }

        #[test]
        fn test_parse_datetime_invalid_date() {
            assert!(parse_datetime("32/12/2024", "18:20:00").is_err());
        }

        #[test]
        fn test_parse_datetime_invalid_time() {
            assert!(parse_datetime("30/12/2024", "25:20:00").is_err());
        }

        #[test]
        fn test_parse_datetime_invalid_date_format() {
            assert!(parse_datetime("2024/12/30", "18:20:00").is_err());
        }
    }
}

// Column positions, looked up by header name so sheets may reorder columns.
// "Equipe", "Data" and "Hora" are optional.
struct SheetColumns {
    team: Option<usize>,
    round: usize,
    field: usize,
    kind: usize,
    value: usize,
    date: Option<usize>,
    time: Option<usize>,
}

impl SheetColumns {
    fn locate(headers: &StringRecord) -> Result<Self, EngineError> {
        let position = |name: &str| headers.iter().position(|header| header.eq_ignore_ascii_case(name));
        let required = |name: &str| {
            position(name).ok_or_else(|| EngineError::SheetFormatError(format!("Missing '{}' column in header", name)))
        };
        Ok(SheetColumns {
            team: position("Equipe"),
            round: required("Rodada")?,
            field: required("Campo")?,
            kind: required("Tipo")?,
            value: required("Valor")?,
            date: position("Data"),
            time: position("Hora"),
        })
    }
}

pub struct DecisionSheetParser;

impl DecisionSheetParser {
    // CSV Header: Equipe;Rodada;Campo;Tipo;Valor;Data;Hora
    // Example Row: Equipe Azul;1;preco;moeda;R$ 1.234,56;14/03/2025;10:30:00
    pub fn load_decisions_from_csv(file_path: &str, default_team: &str) -> Result<Vec<Decision>, EngineError> {
        let file = File::open(file_path)?;
        Self::read_decisions(BufReader::new(file), default_team, Utc::now())
    }

    /// Reads decisions from any reader. Rows without date and time get `loaded_at`.
    pub fn read_decisions<R: Read>(
        reader: R,
        default_team: &str,
        loaded_at: DateTime<Utc>,
    ) -> Result<Vec<Decision>, EngineError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let columns = SheetColumns::locate(&headers)?;

        let mut decisions = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2; // header is line 1
            let record = result?;
            let decision = Self::parse_record(&record, &columns, default_team, loaded_at)
                .map_err(|e| EngineError::SheetFormatError(format!("line {}: {:#}", line, e)))?;
            decisions.push(decision);
        }
        tracing::debug!(count = decisions.len(), "Decision sheet parsed");
        Ok(decisions)
    }

    fn parse_record(
        record: &StringRecord,
        columns: &SheetColumns,
        default_team: &str,
        loaded_at: DateTime<Utc>,
    ) -> Result<Decision> {
        let team = columns
            .team
            .and_then(|pos| record.get(pos))
            .filter(|team| !team.is_empty())
            .unwrap_or(default_team);
        if team.is_empty() {
            bail!("Empty 'Equipe' and no default team given");
        }

        let round_str = Self::get_field(record, columns.round, "Rodada")?;
        let round = round_str
            .parse::<u32>()
            .with_context(|| format!("Invalid 'Rodada' '{}'", round_str))?;

        let field = Self::get_field(record, columns.field, "Campo")?.to_lowercase();

        let kind_str = Self::get_field(record, columns.kind, "Tipo")?;
        let kind = kind_str
            .parse::<NumberKind>()
            .map_err(|e| anyhow!("Invalid 'Tipo': {}", e))?;

        let value_str = Self::get_field(record, columns.value, "Valor")?;
        let value = brazilian_format::try_parse(value_str)
            .ok_or_else(|| anyhow!("Failed to parse decimal '{}' in 'Valor'", value_str))?;

        let submitted_at = match (columns.date, columns.time) {
            (Some(date_pos), Some(time_pos)) => {
                let date_str = Self::get_field(record, date_pos, "Data")?;
                let time_str = Self::get_field(record, time_pos, "Hora")?;
                brazilian_datetime::parse_datetime(date_str, time_str)?
            }
            _ => loaded_at,
        };

        Ok(Decision {
            team: team.to_string(),
            round,
            field,
            kind,
            value,
            submitted_at,
        })
    }

    // Cell by position; an empty or absent cell is an error naming the column.
    fn get_field<'a>(record: &'a StringRecord, pos: usize, name: &str) -> Result<&'a str> {
        match record.get(pos) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(anyhow!("Missing '{}' field", name)),
        }
    }
}
