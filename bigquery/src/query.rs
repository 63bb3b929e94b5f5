//! Decoding of `f`/`v` encoded result rows into JSON objects keyed by column name.
use serde_json::{Map, Number, Value};

use crate::http::table::{TableFieldSchema, TableSchema};
use crate::http::tabledata::list::Tuple;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("row has {actual} values but the schema has {expected} fields")]
    ColumnCount { expected: usize, actual: usize },
    #[error("invalid {data_type} value for column {column}: {value}")]
    InvalidValue {
        column: String,
        data_type: String,
        value: Value,
    },
}

/// Converts result rows using the column types of `schema`.
pub fn decode_rows(schema: &TableSchema, rows: Vec<Tuple>) -> Result<Vec<Value>, Error> {
    rows.into_iter().map(|row| decode_tuple(&schema.fields, row)).collect()
}

fn decode_tuple(fields: &[TableFieldSchema], row: Tuple) -> Result<Value, Error> {
    if fields.len() != row.f.len() {
        return Err(Error::ColumnCount {
            expected: fields.len(),
            actual: row.f.len(),
        });
    }
    let mut object = Map::with_capacity(fields.len());
    for (field, cell) in fields.iter().zip(row.f) {
        let value = decode_field(field, cell.v)?;
        object.insert(field.name.clone(), value);
    }
    Ok(Value::Object(object))
}

fn decode_field(field: &TableFieldSchema, value: Value) -> Result<Value, Error> {
    if !field.is_repeated() {
        return decode_single(field, value);
    }
    match value {
        Value::Null => Ok(Value::Array(vec![])),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(mut cell) => decode_single(field, cell.remove("v").unwrap_or(Value::Null)),
                other => decode_single(field, other),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(invalid(field, other)),
    }
}

fn decode_single(field: &TableFieldSchema, value: Value) -> Result<Value, Error> {
    if value.is_null() {
        return Ok(Value::Null);
    }
    match field.data_type.as_str() {
        "INTEGER" | "INT64" => match &value {
            Value::String(s) => s
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| invalid(field, value.clone())),
            Value::Number(_) => Ok(value),
            _ => Err(invalid(field, value)),
        },
        "FLOAT" | "FLOAT64" => match &value {
            // NaN and Infinity have no JSON number form
            Value::String(s) => match s.parse::<f64>().ok().and_then(Number::from_f64) {
                Some(n) => Ok(Value::Number(n)),
                None if s.parse::<f64>().is_ok() => Ok(value),
                None => Err(invalid(field, value.clone())),
            },
            Value::Number(_) => Ok(value),
            _ => Err(invalid(field, value)),
        },
        "BOOLEAN" | "BOOL" => match &value {
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
            Value::Bool(_) => Ok(value),
            _ => Err(invalid(field, value)),
        },
        "RECORD" | "STRUCT" => {
            let nested = field.fields.as_deref().unwrap_or_default();
            let tuple: Tuple = serde_json::from_value(value.clone()).map_err(|_| invalid(field, value))?;
            decode_tuple(nested, tuple)
        }
        _ => Ok(value),
    }
}

fn invalid(field: &TableFieldSchema, value: Value) -> Error {
    Error::InvalidValue {
        column: field.name.clone(),
        data_type: field.data_type.clone(),
        value,
    }
}
