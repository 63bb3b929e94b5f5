//! Streams rows into a table from CSV text, a JSON array or column/value pairs.
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

use crate::http::tabledata::insert_all::{InsertAllRequest, InsertAllResponse, Row};
use crate::task::{connect, required, run, Credentials, Error, Options, Outcome, TaskError};

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum SourceFormat {
    #[default]
    #[serde(rename = "CSV", alias = "Csv")]
    Csv,
    #[serde(rename = "JSON", alias = "Json")]
    Json,
    RowData,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnValue {
    pub column_name: String,
    pub value: Value,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RowValues {
    pub row: Vec<ColumnValue>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    pub base_uri: String,
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Input {
    pub source_format: SourceFormat,
    /// Header line followed by data lines.
    pub csv: String,
    /// Defaults to `,`.
    pub delimiter: String,
    /// Lines dropped before the header.
    pub skip_top_rows: usize,
    /// Array of row objects.
    pub json: String,
    pub row_data: Vec<RowValues>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            source_format: SourceFormat::Csv,
            csv: String::new(),
            delimiter: ",".to_string(),
            skip_top_rows: 0,
            json: String::new(),
            row_data: vec![],
        }
    }
}

pub async fn insert(
    connection: &Connection,
    input: &Input,
    options: &Options,
    cancel: &CancellationToken,
) -> Result<Outcome, TaskError> {
    run(options.throw_on_error, cancel, insert_rows(connection, input)).await
}

async fn insert_rows(connection: &Connection, input: &Input) -> Result<Outcome, Error> {
    let project_id = required(&connection.project_id, "ProjectId")?;
    let dataset_id = required(&connection.dataset_id, "DatasetId")?;
    let table_id = required(&connection.table_id, "TableId")?;
    let rows: Vec<Map<String, Value>> = match input.source_format {
        SourceFormat::Csv => parse_csv(&input.csv, &input.delimiter, input.skip_top_rows)?,
        SourceFormat::Json => serde_json::from_str(&input.json)?,
        SourceFormat::RowData => input
            .row_data
            .iter()
            .map(|r| {
                r.row
                    .iter()
                    .map(|c| (c.column_name.clone(), c.value.clone()))
                    .collect()
            })
            .collect(),
    };
    let request = InsertAllRequest {
        rows: rows.into_iter().map(|json| Row { insert_id: None, json }).collect(),
        ..Default::default()
    };
    let client = connect(&connection.base_uri, &connection.credentials).await?;
    let response = client
        .tabledata()
        .insert(project_id, dataset_id, table_id, &request)
        .await?;
    check_insert_errors(response)?;
    tracing::debug!("inserted {} rows into {}.{}", request.rows.len(), dataset_id, table_id);
    Ok(Outcome::ok())
}

/// Splits CSV text into rows keyed by the header. Every value is kept as a string.
fn parse_csv(csv: &str, delimiter: &str, skip_top_rows: usize) -> Result<Vec<Map<String, Value>>, Error> {
    let split = |line: &str| -> Vec<String> {
        if delimiter.is_empty() {
            vec![line.to_string()]
        } else {
            line.split(delimiter).map(str::to_string).collect()
        }
    };
    let mut lines = csv.split('\n').map(str::trim).skip(skip_top_rows);
    let headers = match lines.next() {
        Some(header) if !header.is_empty() => split(header),
        _ => return Err(Error::InvalidHeaderRow),
    };
    lines
        .filter(|line| !line.is_empty())
        .map(|line| {
            let values = split(line);
            if values.len() != headers.len() {
                return Err(Error::ColumnCountMismatch);
            }
            Ok(headers.iter().cloned().zip(values.into_iter().map(Value::String)).collect())
        })
        .collect()
}

fn check_insert_errors(response: InsertAllResponse) -> Result<(), Error> {
    let first = response.insert_errors.and_then(|errors| errors.into_iter().next());
    match first {
        None => Ok(()),
        Some(row) => {
            let message = match row.errors.into_iter().next() {
                Some(e) => e.message,
                None => format!("row {} was rejected", row.index),
            };
            Err(Error::Insert(message))
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use tokio_util::sync::CancellationToken;

    use crate::http::tabledata::insert_all::InsertAllResponse;
    use crate::task::insert::{
        check_insert_errors, insert, parse_csv, ColumnValue, Connection, Input, RowValues, SourceFormat,
    };
    use crate::task::test::{credentials, invalid_credentials, mock_credentials, MockServer};
    use crate::task::{Error, Failure, Options, Outcome};

    fn connection() -> Connection {
        Connection {
            project_id: "p1".to_string(),
            dataset_id: "ds1".to_string(),
            table_id: "t1".to_string(),
            credentials: credentials(),
            ..Default::default()
        }
    }

    #[test]
    fn test_input_defaults() {
        let input: Input = serde_json::from_str("{}").unwrap();
        assert_eq!(SourceFormat::Csv, input.source_format);
        assert_eq!(",", input.delimiter);
        assert_eq!(0, input.skip_top_rows);
        let input: Input = serde_json::from_value(json!({
            "sourceFormat": "RowData",
            "rowData": [{"row": [{"columnName": "id", "value": 1}]}]
        }))
        .unwrap();
        assert_eq!(SourceFormat::RowData, input.source_format);
        assert_eq!(json!(1), input.row_data[0].row[0].value);
    }

    #[test]
    fn test_parse_csv() {
        let csv = "exported by tool\nid;name\n 1;Alice \n2;Bob\n";
        let rows = parse_csv(csv, ";", 1).unwrap();
        assert_eq!(
            vec![json!({"id": "1", "name": "Alice"}), json!({"id": "2", "name": "Bob"})],
            rows.into_iter().map(serde_json::Value::Object).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_parse_csv_errors() {
        let err = parse_csv("id,name", ",", 1).unwrap_err();
        assert_eq!("Invalid header row", err.to_string());

        let err = parse_csv("id,name\n1,Alice,extra", ",", 0).unwrap_err();
        assert_eq!("Number of values doesn't match the number of headers.", err.to_string());
    }

    #[test]
    fn test_check_insert_errors() {
        assert!(check_insert_errors(InsertAllResponse::default()).is_ok());
        let response: InsertAllResponse = serde_json::from_value(json!({
            "insertErrors": [
                {"index": 0, "errors": [{"reason": "invalid", "location": "Invalid", "message": "no such field: Invalid."}]},
                {"index": 1, "errors": [{"reason": "stopped", "message": ""}]}
            ]
        }))
        .unwrap();
        let err = check_insert_errors(response).unwrap_err();
        assert!(matches!(err, Error::Insert(_)));
        assert_eq!("no such field: Invalid.", err.to_string());
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let input = Input {
            source_format: SourceFormat::Json,
            json: "{not json".to_string(),
            ..Default::default()
        };
        let options = Options { throw_on_error: false };
        let outcome = insert(&connection(), &input, &options, &CancellationToken::new())
            .await
            .unwrap();
        assert!(!outcome.success);
        assert!(outcome.error_message.unwrap().starts_with("Error occured: "));
    }

    #[tokio::test]
    async fn test_invalid_credentials() {
        let mut connection = connection();
        connection.credentials = invalid_credentials();
        let input = Input {
            csv: "id\n1".to_string(),
            ..Default::default()
        };
        let err = insert(&connection, &input, &Options::default(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(
            "Error occured: Error creating credential from JSON or JSON parameters. Unrecognized credential type .",
            err.to_string()
        );
    }

    #[tokio::test]
    async fn test_missing_table() {
        let mut connection = connection();
        connection.table_id = String::new();
        let options = Options { throw_on_error: false };
        let outcome = insert(&connection, &Input::default(), &options, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(Outcome::failure("Error occured: TableId is required.".to_string()), outcome);
    }

    #[tokio::test]
    async fn test_insert_errors_fail_the_task() {
        let server = MockServer::start(|method, target, body| {
            if method != "POST" || target != "/projects/p1/datasets/ds1/tables/t1/insertAll" {
                return (404, r#"{"error": {"code": 404, "message": "Not found"}}"#.to_string());
            }
            let request: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
            if request["rows"][0]["json"].get("Invalid").is_some() {
                (
                    200,
                    r#"{"insertErrors": [{"index": 0, "errors": [{"reason": "invalid", "location": "Invalid", "message": "no such field: Invalid."}]}]}"#
                        .to_string(),
                )
            } else {
                (200, r#"{"kind": "bigquery#tableDataInsertAllResponse"}"#.to_string())
            }
        })
        .await;
        let mut connection = connection();
        connection.base_uri = server.base_uri.clone();
        connection.credentials = mock_credentials(&server);

        let input = Input {
            source_format: SourceFormat::Json,
            json: r#"[{"id": 1, "Invalid": "x"}]"#.to_string(),
            ..Default::default()
        };
        let err = insert(&connection, &input, &Options::default(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!("Error occured: no such field: Invalid.", err.to_string());

        let input = Input {
            source_format: SourceFormat::RowData,
            row_data: vec![RowValues {
                row: vec![ColumnValue {
                    column_name: "id".to_string(),
                    value: json!(1),
                }],
            }],
            ..Default::default()
        };
        let outcome = insert(&connection, &input, &Options::default(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(Outcome::ok(), outcome);
    }
}
