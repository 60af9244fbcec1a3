use crate::error::{Result, SonosetError};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use log::warn;
use std::path::Path;

/// Clinical score column in the scoring spreadsheet
pub const SCORE_COLUMN: &str = "UCLA Score (Similar to PIRADS v2)";

/// Patient identifier column in the scoring spreadsheet
pub const PATIENT_ID_COLUMN: &str = "Patient ID";

/// Series identifier column in the scoring spreadsheet
pub const SERIES_UID_COLUMN: &str = "seriesInstanceUID_US";

/// One row of the clinical scoring spreadsheet
#[derive(Debug, Clone)]
pub struct ScoreRow {
    /// UCLA-like numeric score used to derive the label
    pub score: f64,

    pub patient_id: String,

    /// Series identifier, shared with the study metadata table
    pub series_uid: String,
}

/// Loads score rows from the named worksheet
///
/// Rows without a usable numeric score or series UID are dropped with a
/// warning; a missing sheet or missing column is fatal.
pub fn load_scores(path: &Path, sheet: &str) -> Result<Vec<ScoreRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook.worksheet_range(sheet)?;
    parse_score_rows(&range)
}

fn parse_score_rows(range: &Range<Data>) -> Result<Vec<ScoreRow>> {
    let mut row_iter = range.rows();
    let header = row_iter
        .next()
        .ok_or_else(|| SonosetError::MissingColumn(SCORE_COLUMN.to_string()))?;

    let score_idx = find_column(header, SCORE_COLUMN)?;
    let patient_idx = find_column(header, PATIENT_ID_COLUMN)?;
    let series_idx = find_column(header, SERIES_UID_COLUMN)?;

    let mut rows = Vec::new();
    for (number, row) in row_iter.enumerate() {
        let score = row.get(score_idx).and_then(cell_to_f64);
        let series_uid = row.get(series_idx).and_then(cell_to_string);

        match (score, series_uid) {
            (Some(score), Some(series_uid)) => rows.push(ScoreRow {
                score,
                patient_id: row
                    .get(patient_idx)
                    .and_then(cell_to_string)
                    .unwrap_or_default(),
                series_uid,
            }),
            _ => {
                // Header row is row 1, data starts at row 2.
                warn!("dropping score row {}: no usable score or series UID", number + 2);
            }
        }
    }

    Ok(rows)
}

fn find_column(header: &[Data], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim() == name))
        .ok_or_else(|| SonosetError::MissingColumn(name.to_string()))
}

fn cell_to_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(value) => Some(*value),
        Data::Int(value) => Some(*value as f64),
        Data::String(value) => value.trim().parse().ok(),
        _ => None,
    }
}

fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) => Some(value.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(cells: &[(u32, u32, Data)]) -> Range<Data> {
        let max_row = cells.iter().map(|(r, _, _)| *r).max().unwrap_or(0);
        let max_col = cells.iter().map(|(_, c, _)| *c).max().unwrap_or(0);
        let mut range = Range::new((0, 0), (max_row, max_col));
        for (row, col, value) in cells {
            range.set_value((*row, *col), value.clone());
        }
        range
    }

    fn header_cells() -> Vec<(u32, u32, Data)> {
        vec![
            (0, 0, Data::String(PATIENT_ID_COLUMN.to_string())),
            (0, 1, Data::String(SCORE_COLUMN.to_string())),
            (0, 2, Data::String("Biopsy Date".to_string())),
            (0, 3, Data::String(SERIES_UID_COLUMN.to_string())),
        ]
    }

    #[test]
    fn test_rows_are_projected_by_header_name() {
        let mut cells = header_cells();
        cells.extend([
            (1, 0, Data::String("P-001".to_string())),
            (1, 1, Data::Float(4.0)),
            (1, 2, Data::String("2019-01-01".to_string())),
            (1, 3, Data::String("1.2.3".to_string())),
            (2, 0, Data::Int(17)),
            (2, 1, Data::Int(2)),
            (2, 3, Data::String("1.2.4".to_string())),
        ]);

        let rows = parse_score_rows(&sheet(&cells)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].patient_id, "P-001");
        assert_eq!(rows[0].score, 4.0);
        assert_eq!(rows[0].series_uid, "1.2.3");
        assert_eq!(rows[1].patient_id, "17");
        assert_eq!(rows[1].score, 2.0);
    }

    #[test]
    fn test_rows_without_score_or_uid_are_dropped() {
        let mut cells = header_cells();
        cells.extend([
            // no score
            (1, 0, Data::String("P-001".to_string())),
            (1, 3, Data::String("1.2.3".to_string())),
            // no series UID
            (2, 0, Data::String("P-002".to_string())),
            (2, 1, Data::Float(5.0)),
            // complete
            (3, 0, Data::String("P-003".to_string())),
            (3, 1, Data::Float(3.0)),
            (3, 3, Data::String("1.2.5".to_string())),
        ]);

        let rows = parse_score_rows(&sheet(&cells)).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].series_uid, "1.2.5");
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let cells = vec![
            (0, 0, Data::String(PATIENT_ID_COLUMN.to_string())),
            (0, 1, Data::String(SCORE_COLUMN.to_string())),
        ];

        let err = parse_score_rows(&sheet(&cells)).unwrap_err();

        match err {
            SonosetError::MissingColumn(name) => assert_eq!(name, SERIES_UID_COLUMN),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_strings_parse_as_scores() {
        let mut cells = header_cells();
        cells.extend([
            (1, 0, Data::String("P-001".to_string())),
            (1, 1, Data::String(" 4 ".to_string())),
            (1, 3, Data::String("1.2.3".to_string())),
        ]);

        let rows = parse_score_rows(&sheet(&cells)).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].score, 4.0);
    }
}
