//! Commodity records and the per-location commodity table.
//!
//! Snapshot bodies are semicolon-delimited. After the header, every line maps
//! to one [`CommodityRecord`] by fixed column positions.

use serde::Serialize;
use thiserror::Error;

const FIELD_DELIMITER: char = ';';

const COLUMN_NAME: usize = 2;
const COLUMN_BUY_FROM_PLAYER_PRICE: usize = 3;
const COLUMN_SELL_TO_PLAYER_PRICE: usize = 4;
const COLUMN_BUY_DEMAND: usize = 6;
const COLUMN_SELL_SUPPLY: usize = 7;

/// Number of fields a record line must have to reach every mapped column.
pub const REQUIRED_FIELDS: usize = COLUMN_SELL_SUPPLY + 1;

/// Why a record line could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordErrorKind {
    #[error("expected at least {required} fields, found {found}")]
    TooFewFields { found: usize, required: usize },

    #[error("column {column} is not an integer: {value:?}")]
    NotAnInteger { column: usize, value: String },

    #[error("column {column} is negative: {value}")]
    Negative { column: usize, value: i64 },
}

/// A snapshot line that failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("row {row}: {kind}")]
pub struct RecordError {
    /// 1-based row within the snapshot body (header excluded).
    pub row: usize,
    /// The offending line as read.
    pub record: String,
    pub kind: RecordErrorKind,
}

impl RecordError {
    /// Zero-based index of the field at fault, if the failure is tied to one.
    pub fn field(&self) -> Option<usize> {
        match self.kind {
            RecordErrorKind::TooFewFields { .. } => None,
            RecordErrorKind::NotAnInteger { column, .. }
            | RecordErrorKind::Negative { column, .. } => Some(column),
        }
    }
}

/// One tradable good's market state at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommodityRecord {
    pub name: String,
    /// Credits the station pays when a player sells to it.
    pub buy_from_player_price: i64,
    /// Quantity the station will buy at that price.
    pub buy_demand: i64,
    /// Credits a player pays to buy from the station.
    pub sell_to_player_price: i64,
    /// Quantity a player can buy. Zero means not purchasable here.
    pub sell_supply: i64,
}

impl CommodityRecord {
    /// Whether a player can buy this commodity at the location.
    pub fn is_purchasable(&self) -> bool {
        self.sell_supply != 0
    }

    /// Parse one body line. `row` is only used for error reporting.
    pub fn parse_line(line: &str, row: usize) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let fail = |kind| RecordError {
            row,
            record: line.to_string(),
            kind,
        };

        if fields.len() < REQUIRED_FIELDS {
            return Err(fail(RecordErrorKind::TooFewFields {
                found: fields.len(),
                required: REQUIRED_FIELDS,
            }));
        }

        let integer = |column: usize| -> Result<i64, RecordError> {
            let value = fields[column].trim();
            let parsed: i64 = value.parse().map_err(|_| {
                fail(RecordErrorKind::NotAnInteger {
                    column,
                    value: value.to_string(),
                })
            })?;
            if parsed < 0 {
                return Err(fail(RecordErrorKind::Negative {
                    column,
                    value: parsed,
                }));
            }
            Ok(parsed)
        };
        // Quantities may be left blank by the capture tool; blank is absent.
        let quantity = |column: usize| -> Result<i64, RecordError> {
            if fields[column].trim().is_empty() {
                Ok(0)
            } else {
                integer(column)
            }
        };

        Ok(Self {
            name: fields[COLUMN_NAME].to_string(),
            buy_from_player_price: integer(COLUMN_BUY_FROM_PLAYER_PRICE)?,
            buy_demand: quantity(COLUMN_BUY_DEMAND)?,
            sell_to_player_price: integer(COLUMN_SELL_TO_PLAYER_PRICE)?,
            sell_supply: quantity(COLUMN_SELL_SUPPLY)?,
        })
    }
}

/// Parsed view of one location's latest snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommodityTable {
    records: Vec<CommodityRecord>,
}

impl CommodityTable {
    /// Parse body lines (header already stripped), preserving order.
    ///
    /// Blank lines are skipped. The first malformed line fails the whole
    /// table; a short or non-numeric line means the snapshot is corrupt.
    pub fn parse<I, S>(lines: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = lines
            .into_iter()
            .enumerate()
            .filter(|(_, line)| !line.as_ref().trim().is_empty())
            .map(|(index, line)| {
                let line = line.as_ref();
                CommodityRecord::parse_line(line.trim_end_matches(&['\r', '\n'][..]), index + 1)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    /// Parse a full snapshot body, discarding its header line.
    pub fn parse_snapshot<I, S>(lines: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse(lines.into_iter().skip(1))
    }

    pub fn records(&self) -> &[CommodityRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommodityRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with exactly this name.
    pub fn get(&self, name: &str) -> Option<&CommodityRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Records a player can buy here, in table order.
    pub fn purchasable(&self) -> impl Iterator<Item = &CommodityRecord> {
        self.records.iter().filter(|record| record.is_purchasable())
    }
}

impl From<Vec<CommodityRecord>> for CommodityTable {
    fn from(records: Vec<CommodityRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a CommodityTable {
    type Item = &'a CommodityRecord;
    type IntoIter = std::slice::Iter<'a, CommodityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "System;Station;Commodity;Sell;Buy;Demand;;Supply;;Date;";

    #[test]
    fn parses_fixed_columns() {
        let table =
            CommodityTable::parse(["Sol;Galileo;Gold;9401;9120;;1200;350;;2024-01-01T00:00:00Z;"])
                .unwrap();

        assert_eq!(
            table.records(),
            [CommodityRecord {
                name: "Gold".into(),
                buy_from_player_price: 9401,
                buy_demand: 1200,
                sell_to_player_price: 9120,
                sell_supply: 350,
            }]
        );
    }

    #[test]
    fn parsed_fields_match_input_columns() {
        let lines = [
            "Lave;Lave Station;Tea;1520;1400;;880;4100;;",
            "Lave;Lave Station;Grain;210;190;;12000;99;;",
            "Lave;Lave Station;Palladium;13100;12800;;40;7;;",
        ];
        let table = CommodityTable::parse(lines).unwrap();

        for (line, record) in lines.iter().zip(table.iter()) {
            let columns: Vec<&str> = line.split(';').collect();
            assert_eq!(record.name, columns[2]);
            assert_eq!(record.buy_from_player_price.to_string(), columns[3]);
            assert_eq!(record.sell_to_player_price.to_string(), columns[4]);
            assert_eq!(record.buy_demand.to_string(), columns[6]);
            assert_eq!(record.sell_supply.to_string(), columns[7]);
        }
    }

    #[test]
    fn blank_quantities_read_as_zero() {
        let table = CommodityTable::parse(["Sol;Galileo;Water;120;0;;;;;"]).unwrap();
        let water = table.get("Water").unwrap();
        assert_eq!(water.buy_demand, 0);
        assert_eq!(water.sell_supply, 0);
        assert!(!water.is_purchasable());
    }

    #[test]
    fn short_line_is_malformed() {
        let err = CommodityTable::parse(["Sol;Galileo;Gold;9401"]).unwrap_err();
        assert_eq!(err.row, 1);
        assert_eq!(
            err.kind,
            RecordErrorKind::TooFewFields {
                found: 4,
                required: REQUIRED_FIELDS
            }
        );
        assert_eq!(err.field(), None);
    }

    #[test]
    fn non_numeric_price_is_malformed() {
        let err = CommodityTable::parse([
            "Sol;Galileo;Gold;9401;9120;;1200;350;;",
            "Sol;Galileo;Silver;lots;4000;;10;10;;",
        ])
        .unwrap_err();
        assert_eq!(err.row, 2);
        assert_eq!(err.field(), Some(3));
        assert!(err.to_string().contains("\"lots\""));
    }

    #[test]
    fn negative_values_are_malformed() {
        let err = CommodityTable::parse(["S;O;Gold;0;-9223372036854775808;;1;5;;"]).unwrap_err();
        assert_eq!(err.field(), Some(4));
        assert!(matches!(
            err.kind,
            RecordErrorKind::Negative {
                column: 4,
                value: i64::MIN
            }
        ));

        let err = CommodityTable::parse(["S;O;Gold;10;20;;-1;5;;"]).unwrap_err();
        assert_eq!(err.field(), Some(6));
    }

    #[test]
    fn blank_price_is_malformed() {
        let err = CommodityTable::parse(["Sol;Galileo;Gold;;9120;;1200;350;;"]).unwrap_err();
        assert_eq!(err.field(), Some(3));
    }

    #[test]
    fn snapshot_header_is_discarded_and_blank_lines_skipped() {
        let table =
            CommodityTable::parse_snapshot([HEADER, "Sol;Galileo;Gold;9401;9120;;1200;350;;", ""])
                .unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookups_take_the_first_match() {
        let table = CommodityTable::parse([
            "Sol;Galileo;Gold;100;90;;1;1;;",
            "Sol;Galileo;Gold;200;190;;1;1;;",
        ])
        .unwrap();
        assert_eq!(table.get("Gold").unwrap().buy_from_player_price, 100);
    }

    #[test]
    fn purchasable_filters_on_supply() {
        let table = CommodityTable::parse([
            "Sol;Galileo;Gold;100;90;;1;5;;",
            "Sol;Galileo;Beer;20;15;;100;;;",
        ])
        .unwrap();
        let names: Vec<&str> = table.purchasable().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Gold"]);
    }
}
