//! Table and JSON output shared by the listing commands.

use std::ptr;

use chrono::{DateTime, Local, Utc};
use pantry::{
    Config, Ingredient,
    domain::{days_until, is_expired, ripeness::RIPE},
};
use serde::Serialize;

use super::terminal::{Colorize, is_narrow};

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// A selected ingredient together with what the views flag about it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row<'a> {
    /// Position in the stored list, as accepted by `pantry delete`.
    position: usize,
    #[serde(flatten)]
    ingredient: &'a Ingredient,
    days_left: Option<u64>,
    expired: bool,
    needs_check: bool,
}

impl<'a> Row<'a> {
    /// Rows for `selected`, a subset borrowed from `all`.
    pub fn collect(
        all: &'a [Ingredient],
        selected: &[&'a Ingredient],
        now: &DateTime<Local>,
        config: &Config,
    ) -> Vec<Self> {
        let local = now.naive_local();
        let utc = now.with_timezone(&Utc);
        let policy = config.recheck_policy();

        selected
            .iter()
            .filter_map(|&item| {
                let position = all.iter().position(|candidate| ptr::eq(candidate, item))?;
                Some(Self {
                    position,
                    ingredient: item,
                    days_left: item
                        .expiration()
                        .map(|_| days_until(&item.expiration_date, local)),
                    expired: is_expired(&item.expiration_date, local),
                    needs_check: policy.needs_recheck(item, utc),
                })
            })
            .collect()
    }

    fn days_cell(&self) -> String {
        self.days_left
            .map_or_else(|| "-".to_string(), |days| days.to_string())
    }

    fn notes(&self) -> String {
        let mut notes = Vec::new();
        if self.expired {
            notes.push("EXPIRED".danger());
        }
        if self.needs_check {
            notes.push("needs check".warning());
        }
        if let Some(status) = self.ingredient.status() {
            if status == RIPE {
                notes.push(status.warning());
            } else {
                notes.push(status.to_string());
            }
        }
        if self.ingredient.is_open() {
            notes.push("opened".to_string());
        }
        notes.join(" ")
    }
}

pub fn print(rows: &[Row<'_>], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Table if is_narrow() => print_stacked(rows),
        OutputFormat::Table => print_table(rows),
    }
    Ok(())
}

fn print_table(rows: &[Row<'_>]) {
    let name_width = rows
        .iter()
        .map(|row| row.ingredient.name.as_str().chars().count())
        .max()
        .unwrap_or_default()
        .max(4);

    let header = format!(
        "{:>3}  {:<name_width$}  {:<10}  {:>4}  {:<12}  {:<12}  {:<10}  Notes",
        "#", "Name", "Expires", "Days", "Category", "Location", "Packing"
    );
    println!("{}", header.dim());

    for row in rows {
        let item = row.ingredient;
        println!(
            "{:>3}  {:<name_width$}  {:<10}  {:>4}  {:<12}  {:<12}  {:<10}  {}",
            row.position,
            item.name.as_str(),
            or_dash(Some(item.expiration_date.as_str()).filter(|d| !d.is_empty())),
            row.days_cell(),
            or_dash(item.category()),
            or_dash(item.location()),
            or_dash(item.packing()),
            row.notes(),
        );
    }
}

fn print_stacked(rows: &[Row<'_>]) {
    for row in rows {
        let item = row.ingredient;
        println!("#{} {}", row.position, item.name.as_str());

        let expires = match row.days_left {
            Some(days) => format!("expires {} ({days}d)", item.expiration_date),
            None => "no expiration date".to_string(),
        };
        let details: Vec<&str> = [item.category(), item.location(), item.packing()]
            .into_iter()
            .flatten()
            .collect();
        if details.is_empty() {
            println!("   {}", expires.dim());
        } else {
            println!("   {}", format!("{expires} · {}", details.join(" · ")).dim());
        }

        let notes = row.notes();
        if !notes.is_empty() {
            println!("   {notes}");
        }
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
