//! Fixed-column text rendering for catalog reports.
//!
//! Every record is written as its own block: the header line, the values
//! joined by `" , "`, and a blank line. The header is repeated per record so
//! existing consumers of the report files keep parsing them unchanged.

use crate::domain::entities::{Destination, Organization};

/// Separator between columns on both the header and value lines.
pub const COLUMN_SEPARATOR: &str = " , ";

/// A record that can be rendered into a report block.
pub trait ReportRecord {
    /// Column labels, in the order [`Self::columns`] returns values.
    const HEADER: &'static str;

    fn columns(&self) -> Vec<String>;
}

impl ReportRecord for Destination {
    const HEADER: &'static str =
        "Country from , Duration , Place , Cruise ship , Route , Price , Date";

    fn columns(&self) -> Vec<String> {
        vec![
            self.country_from.to_string(),
            self.duration.to_string(),
            self.place.clone(),
            self.cruise_ship.clone(),
            self.route.clone(),
            self.price.to_string(),
            self.date.clone(),
        ]
    }
}

impl ReportRecord for Organization {
    const HEADER: &'static str = "Name , Type , Country , About , Website , Email , Location";

    fn columns(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.kind.clone(),
            self.country.to_string(),
            self.about.clone(),
            self.website.clone(),
            self.email.clone(),
            self.location.clone(),
        ]
    }
}

/// Renders one record as `HEADER\nvalues\n\n`.
pub fn render_record<R: ReportRecord>(record: &R) -> String {
    format!(
        "{}\n{}\n\n",
        R::HEADER,
        record.columns().join(COLUMN_SEPARATOR)
    )
}

/// Renders all records followed by the trailing blank line of the file.
pub fn render_report<R: ReportRecord>(records: &[R]) -> String {
    let mut report = String::new();
    for record in records {
        report.push_str(&render_record(record));
    }
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Country, Duration};

    fn langkawi() -> Destination {
        Destination::new(
            Country::Malaysia,
            Duration::TwoNights,
            "Langkawi".to_string(),
            "Star".to_string(),
            "A-B".to_string(),
            500,
            "2025-01-01".to_string(),
        )
    }

    #[test]
    fn test_destination_block() {
        assert_eq!(
            render_record(&langkawi()),
            "Country from , Duration , Place , Cruise ship , Route , Price , Date\n\
             Malaysia , 2 Nights , Langkawi , Star , A-B , 500 , 2025-01-01\n\n"
        );
    }

    #[test]
    fn test_organization_block() {
        let org = Organization::new(
            "Ocean Aid".to_string(),
            "Environment".to_string(),
            Country::Singapore,
            "Beach clean-ups".to_string(),
            "oceanaid.sg".to_string(),
            "hello@oceanaid.sg".to_string(),
            "Sentosa".to_string(),
        );

        assert_eq!(
            render_record(&org),
            "Name , Type , Country , About , Website , Email , Location\n\
             Ocean Aid , Environment , Singapore , Beach clean-ups , oceanaid.sg , hello@oceanaid.sg , Sentosa\n\n"
        );
    }

    #[test]
    fn test_price_has_no_currency_symbol() {
        let mut destination = langkawi();
        destination.price = 1250;

        let block = render_record(&destination);
        assert!(block.contains(" , 1250 , "));
        assert!(!block.contains("RM"));
    }

    #[test]
    fn test_header_repeats_for_every_record() {
        let report = render_report(&[langkawi(), langkawi(), langkawi()]);

        assert_eq!(report.matches(Destination::HEADER).count(), 3);
        assert!(report.ends_with("\n\n\n"));
    }

    #[test]
    fn test_empty_report_is_single_blank_line() {
        let records: Vec<Organization> = Vec::new();
        assert_eq!(render_report(&records), "\n");
    }
}
