use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use ansi_term::Colour;

/// Colour for a log row based on the operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "client" | "group" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct AuditLogic;

impl AuditLogic {
    /// Print the internal log table, optionally filtered with a regex
    /// matched against operation, target and message.
    pub fn print_log(pool: &mut DbPool, _cfg: &Config, filter: &Option<String>) -> AppResult<()> {
        let re = match filter {
            Some(pattern) => Some(
                regex::Regex::new(pattern)
                    .map_err(|e| AppError::Other(format!("Invalid log filter: {e}")))?,
            ),
            None => None,
        };

        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            let e = r?;
            if let Some(re) = &re {
                let haystack = format!("{} {} {}", e.2, e.3, e.4);
                if !re.is_match(&haystack) {
                    continue;
                }
            }
            entries.push(e);
        }

        if entries.is_empty() {
            println!("📜 Internal log: empty");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(2);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| {
                if target.is_empty() {
                    op.len()
                } else {
                    op.len() + target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            // pad before painting: ANSI escapes must not count as width
            let padded_op = format!("{:<width$}", op_target, width = op_w);

            println!(
                "{:>id_w$}  {:<date_w$}  {}  {}",
                id,
                date,
                color.paint(padded_op),
                message,
                id_w = id_w,
                date_w = date_w,
            );
        }

        Ok(())
    }
}
