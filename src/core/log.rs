use crate::db::log::LogRow;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour by audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "publish" => Colour::Cyan,
        "settings" | "team" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render audit rows as `id: date | op (target) => message`.
    pub fn render(rows: &[LogRow]) -> Vec<String> {
        let entries: Vec<(&LogRow, String, String)> = rows
            .iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone());

                let op_target = if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                };

                (r, date, op_target)
            })
            .collect();

        let op_w = entries
            .iter()
            .map(|(_, _, op)| op.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|(r, _, _)| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, d, _)| d.len())
            .max()
            .unwrap_or(10);

        entries
            .into_iter()
            .map(|(r, date, op_target)| {
                let visible = if op_target.chars().count() > MAX_OP_WIDTH {
                    let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                    s.push_str("...");
                    s
                } else {
                    op_target
                };

                // only the operation word is coloured
                let color = color_for_operation(&r.operation);
                let colored = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    r.id,
                    date,
                    colored,
                    padding,
                    r.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }
}
