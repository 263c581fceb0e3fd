use crate::amounts::Figure;
use crate::forecast_runner::ForecastReport;
use crate::transfer::Transfer;
use chrono::NaiveDate;
use comfy_table::Table;

pub fn format_forecast_report(report: &ForecastReport) -> String {
    let mut components = vec![title(&format!(
        "Forecast from {} to {}",
        report.start_date, report.end_date,
    ))];

    for month in month_sections(&report.forecast) {
        let Some((first_transfer, _)) = month.first() else {
            continue;
        };

        let mut table = Table::new();
        table.set_header(vec!["Date", "Amount", "Reason", "Balance"]);
        for (transfer, balance) in month.iter() {
            table.add_row(vec![
                transfer.date.to_string(),
                format_money(&transfer.amount),
                transfer.reason.clone(),
                format_money(balance),
            ]);
        }

        components.push(format!(
            "{}\n{}",
            title(&ctime(&first_transfer.date)),
            table
        ));
    }

    let mut summary = Table::new();
    summary.set_header(vec!["Monthly gains", "Monthly dumps", "Monthly balance"]);
    summary.add_row(vec![
        format_money(&report.monthly_gains),
        format_money(&-report.monthly_dumps),
        format_money(&report.monthly_balance),
    ]);
    components.push(format!("{}\n{}", title("Monthly averages"), summary));

    components.push(format!("Release: {}", env!("RELEASE")));

    components.join("\n\n")
}

/// Splits a forecast wherever two consecutive transfers fall in different months.
fn month_sections(forecast: &[(Transfer, Figure)]) -> Vec<&[(Transfer, Figure)]> {
    let mut sections = vec![];
    let mut section_start = 0;
    for (index, pair) in forecast.windows(2).enumerate() {
        if Transfer::leaps_month(&pair[0].0, &pair[1].0) {
            sections.push(&forecast[section_start..=index]);
            section_start = index + 1;
        }
    }
    if section_start < forecast.len() {
        sections.push(&forecast[section_start..]);
    }
    sections
}

fn format_money(value: &Figure) -> String {
    let value = value.round_dp(2).normalize();
    if value.is_zero() {
        "0".to_string()
    } else if value > Figure::ZERO {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

// Same layout as C's ctime(), e.g. "Sat Feb  1 00:00:00 2014"
fn ctime(date: &NaiveDate) -> String {
    date.format("%a %b %e 00:00:00 %Y").to_string()
}

fn title(string: &str) -> String {
    let string_length = string.len();
    string.to_string() + "\n" + &"=".repeat(string_length)
}
