use chrono::NaiveDate;
use clap::builder::PossibleValuesParser;
use pantry::{Estimate, IngredientForm, domain::expiration};

/// Ingredient fields shared by `add` and `edit`.
///
/// Flags that are not given leave the form unchanged. An empty value clears
/// the field.
#[derive(Debug, clap::Args)]
pub struct Fields {
    /// Free-text label, such as the brand
    #[arg(long)]
    label: Option<String>,

    /// Food category, such as "dairy"
    #[arg(long)]
    category: Option<String>,

    /// Storage location, such as "fridge"
    #[arg(long)]
    location: Option<String>,

    /// Packaging, such as "fresh" or "confection"
    #[arg(long)]
    packing: Option<String>,

    /// Ripeness status (fresh packaging only)
    #[arg(long)]
    status: Option<String>,

    /// Whether the item has been opened (confection packaging only)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    open: Option<bool>,

    /// Exact expiration date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, conflicts_with = "estimate")]
    date: Option<NaiveDate>,

    /// Estimated shelf life, counted from today
    #[arg(long, value_parser = PossibleValuesParser::new(Estimate::ALL.map(Estimate::keyword)))]
    estimate: Option<String>,
}

impl Fields {
    /// Copy the given flags into `form`.
    ///
    /// Packaging is applied first, since it decides whether the status and
    /// the opened flag are kept.
    pub fn apply(self, form: &mut IngredientForm) {
        if let Some(label) = self.label {
            form.set_label(label);
        }
        if let Some(category) = self.category {
            form.set_category(category);
        }
        if let Some(location) = self.location {
            form.set_location(location);
        }
        if let Some(packing) = self.packing {
            form.set_packing(packing);
        }
        if let Some(status) = self.status {
            if !form.is_fresh() {
                tracing::warn!("Ignoring status '{status}': only fresh items have a ripeness status");
            }
            form.set_status(status);
        }
        if let Some(open) = self.open {
            if !form.is_confectioned() {
                tracing::warn!("Ignoring --open: only confections can be opened");
            }
            form.set_open(open);
        }
        if let Some(date) = self.date {
            form.set_exact_date(date);
        }
        if let Some(keyword) = self.estimate {
            form.set_estimate(keyword);
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    expiration::parse_date(s).ok_or_else(|| format!("expected a date as YYYY-MM-DD, got '{s}'"))
}
