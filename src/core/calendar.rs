//! Date label shown in the expanded sidebar header

use chrono::{Local, NaiveDate};

/// `dd/mm/yyyy`
pub fn format_sidebar_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn today_label() -> String {
    format_sidebar_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_sidebar_date(date), "07/03/2025");
    }

    #[test]
    fn test_format_end_of_year() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_sidebar_date(date), "31/12/2024");
    }
}
