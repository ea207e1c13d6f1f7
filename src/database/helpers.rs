use sea_query::{
    Alias,
    ColumnRef,
    IntoIden,
    TableRef,
    Value
};
use crate::database::enums::database_error::DatabaseError;
use crate::database::enums::dialect::Dialect;

pub fn quote_identifier(dialect: Dialect, identifier: &str) -> String {
    let quote = dialect.identifier_quote();
    let mut quoted = String::with_capacity(identifier.len() + 2);
    quoted.push(quote);
    for c in identifier.chars() {
        if c == quote {
            quoted.push(quote);
        }
        quoted.push(c);
    }
    quoted.push(quote);
    quoted
}

/// `name` or `qualifier.name`, each part `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(name: &str) -> bool {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 {
        return false;
    }
    parts.iter().all(|part| {
        let mut chars = part.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    })
}

pub fn table_ref(name: &str) -> TableRef {
    match name.split_once('.') {
        Some((schema, table)) => TableRef::SchemaTable(
            Alias::new(schema).into_iden(),
            Alias::new(table).into_iden(),
        ),
        None => TableRef::Table(Alias::new(name).into_iden()),
    }
}

pub fn column_ref(name: &str) -> ColumnRef {
    match name.split_once('.') {
        Some((table, column)) => ColumnRef::TableColumn(
            Alias::new(table).into_iden(),
            Alias::new(column).into_iden(),
        ),
        None => ColumnRef::Column(Alias::new(name).into_iden()),
    }
}

pub fn is_null_value(value: &Value) -> bool {
    matches!(
        value,
        Value::Bool(None)
            | Value::TinyInt(None)
            | Value::SmallInt(None)
            | Value::Int(None)
            | Value::BigInt(None)
            | Value::TinyUnsigned(None)
            | Value::SmallUnsigned(None)
            | Value::Unsigned(None)
            | Value::BigUnsigned(None)
            | Value::Float(None)
            | Value::Double(None)
            | Value::String(None)
            | Value::Char(None)
            | Value::Bytes(None)
    )
}

/// Replaces every `?` in `sql` with the next value rendered as a `dialect`
/// literal.
///
/// Quoted strings and identifiers, `--` line comments and `/* */` block
/// comments are copied verbatim, as are `#` comments on MySQL. `??` stands
/// for a literal `?`. The number of placeholders has to match the number of
/// values exactly.
pub fn interpolate(dialect: Dialect, sql: &str, values: &[Value]) -> Result<String, DatabaseError> {
    let chars: Vec<char> = sql.chars().collect();
    let mut output = String::with_capacity(sql.len() + values.len() * 8);
    let mut remaining = values.iter();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let end = match c {
            '\'' | '"' | '`' => quoted_end(dialect, &chars, i)?,
            '-' if chars.get(i + 1) == Some(&'-') && opens_line_comment(dialect, chars.get(i + 2)) => {
                line_end(&chars, i)
            }
            '#' if dialect == Dialect::MySQL => line_end(&chars, i),
            '/' if chars.get(i + 1) == Some(&'*') => block_comment_end(dialect, &chars, i)?,
            '?' if chars.get(i + 1) == Some(&'?') => {
                output.push('?');
                i += 2;
                continue;
            }
            '?' => {
                match remaining.next() {
                    Some(value) => output.push_str(&dialect.value_to_string(value)),
                    None => {
                        return Err(DatabaseError::BuildFailed(format!(
                            "more placeholders than the {} value(s) supplied",
                            values.len()
                        )));
                    }
                }
                i += 1;
                continue;
            }
            _ => i + 1,
        };
        output.extend(&chars[i..end]);
        i = end;
    }

    let unused = remaining.count();
    if unused > 0 {
        return Err(DatabaseError::BuildFailed(format!(
            "{} value(s) supplied but only {} placeholder(s) found",
            values.len(),
            values.len() - unused
        )));
    }

    Ok(output)
}

/// Index just past the quote closing the one at `start`. Doubled quotes
/// escape everywhere, MySQL strings also take backslash escapes.
fn quoted_end(dialect: Dialect, chars: &[char], start: usize) -> Result<usize, DatabaseError> {
    let quote = chars[start];
    let backslash = dialect == Dialect::MySQL && quote != '`';
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' if backslash => i += 2,
            c if c == quote => {
                if chars.get(i + 1) != Some(&quote) {
                    return Ok(i + 1);
                }
                i += 2;
            }
            _ => i += 1,
        }
    }
    Err(DatabaseError::BuildFailed(format!("unterminated {quote} quote")))
}

/// MySQL only reads `--` as a comment when whitespace follows it.
fn opens_line_comment(dialect: Dialect, next: Option<&char>) -> bool {
    dialect != Dialect::MySQL || next.is_none_or(|c| c.is_whitespace())
}

fn line_end(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|&c| c == '\n')
        .map_or(chars.len(), |offset| start + offset)
}

/// Index just past the `*/` closing the comment at `start`. PostgreSQL block
/// comments nest.
fn block_comment_end(dialect: Dialect, chars: &[char], start: usize) -> Result<usize, DatabaseError> {
    let nested = dialect == Dialect::PostgreSQL;
    let mut depth = 0usize;
    let mut i = start;
    while i + 1 < chars.len() {
        match (chars[i], chars[i + 1]) {
            ('/', '*') if depth == 0 || nested => {
                depth += 1;
                i += 2;
            }
            ('*', '/') => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => i += 1,
        }
    }
    Err(DatabaseError::BuildFailed(String::from("unterminated block comment")))
}
