//! Filtered, sorted projection of the request collection
//!
//! Projection never mutates the backing collection: it selects matching
//! records, clones them, and orders them by ascending urgency rank.

use chrono::{DateTime, Utc};

use crate::model::{MaintenanceRequest, Status, Urgency};

/// Status criterion for [`RequestFilter`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep every record
    #[default]
    All,

    /// Keep records with exactly this status
    Only(Status),
}

/// Filter criteria for projecting the request collection.
///
/// The default filter keeps everything. The date-range criterion only
/// applies when both bounds are set; a lone `from` or `to` is ignored.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    status: StatusFilter,
    apartment: String,
    area: Option<String>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
}

impl RequestFilter {
    /// Create a filter that keeps every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only records with this status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    /// Keep only records whose apartment number contains `fragment`
    /// (case-sensitive substring match)
    pub fn with_apartment(mut self, fragment: &str) -> Self {
        self.apartment = fragment.to_string();
        self
    }

    /// Keep only records whose area matches `area` exactly
    pub fn with_area(mut self, area: &str) -> Self {
        self.area = Some(area.to_string());
        self
    }

    /// Set the lower date bound
    pub fn with_from(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the upper date bound
    pub fn with_to(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    /// Set both date bounds, inclusive
    pub fn with_date_range(self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.with_from(from).with_to(to)
    }

    /// Whether a record passes every active criterion
    fn matches(&self, request: &MaintenanceRequest) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => request.status == status,
        };

        let apartment_ok =
            self.apartment.is_empty() || request.apartment_number.contains(&self.apartment);

        let area_ok = self
            .area
            .as_deref()
            .map_or(true, |area| request.area == area);

        // Both bounds must be present for the range to apply.
        let date_ok = match (self.from, self.to) {
            (Some(from), Some(to)) => request.date_time >= from && request.date_time <= to,
            _ => true,
        };

        status_ok && apartment_ok && area_ok && date_ok
    }
}

/// Project a filtered copy of `requests`, ordered by ascending urgency rank.
///
/// Ties in urgency carry no ordering guarantee.
pub fn project(requests: &[MaintenanceRequest], filter: &RequestFilter) -> Vec<MaintenanceRequest> {
    let mut selected: Vec<MaintenanceRequest> = requests
        .iter()
        .filter(|request| filter.matches(request))
        .cloned()
        .collect();
    selected.sort_by_key(|request| Urgency::rank_of(&request.urgency));
    selected
}

/// Count of pending requests over the unfiltered collection
pub fn pending_count(requests: &[MaintenanceRequest]) -> usize {
    requests
        .iter()
        .filter(|request| request.status == Status::Pending)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(id: &str, apartment: &str, area: &str, urgency: &str) -> MaintenanceRequest {
        MaintenanceRequest {
            id: id.to_string(),
            apartment_number: apartment.to_string(),
            area: area.to_string(),
            description: format!("issue in {}", area),
            date_time: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            photo: None,
            status: Status::Pending,
            urgency: urgency.to_string(),
            comment: None,
        }
    }

    #[test]
    fn sorts_by_urgency_rank_ascending() {
        let requests = vec![
            request("A", "10", "Kitchen", "low"),
            request("B", "10", "Kitchen", "urgent"),
            request("C", "10", "Kitchen", "moderate"),
        ];

        let projected = project(&requests, &RequestFilter::new());
        let ids: Vec<&str> = projected.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "C", "A"]);
    }

    #[test]
    fn unknown_urgency_sorts_after_every_known_level() {
        let requests = vec![
            request("A", "10", "Kitchen", "whenever"),
            request("B", "10", "Kitchen", "low"),
            request("C", "10", "Kitchen", "urgent"),
        ];

        let projected = project(&requests, &RequestFilter::new());
        let ids: Vec<&str> = projected.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "B", "A"]);
    }

    #[test]
    fn apartment_filter_matches_substrings_case_sensitively() {
        let requests = vec![
            request("A", "10", "Kitchen", "low"),
            request("B", "110", "Kitchen", "low"),
            request("C", "20", "Kitchen", "low"),
        ];

        let projected = project(&requests, &RequestFilter::new().with_apartment("10"));
        let ids: Vec<&str> = projected.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"A"));
        assert!(ids.contains(&"B"));
    }

    #[test]
    fn status_filter_keeps_only_matching_records() {
        let mut completed = request("A", "10", "Kitchen", "low");
        completed.status = Status::Completed;
        let requests = vec![completed, request("B", "10", "Kitchen", "low")];

        let projected = project(&requests, &RequestFilter::new().with_status(Status::Completed));
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].id, "A");
    }

    #[test]
    fn area_filter_is_an_exact_match() {
        let requests = vec![
            request("A", "10", "Living Room", "low"),
            request("B", "10", "Living", "low"),
        ];

        let filter = RequestFilter::new().with_area(crate::model::Area::LivingRoom.as_str());
        let projected = project(&requests, &filter);
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].id, "A");
    }

    #[test]
    fn date_range_with_only_one_bound_applies_no_filter() {
        let requests = vec![request("A", "10", "Kitchen", "low")];
        let after_everything = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        let projected = project(&requests, &RequestFilter::new().with_from(after_everything));
        assert_eq!(projected.len(), 1);

        let projected = project(&requests, &RequestFilter::new().with_to(after_everything));
        assert_eq!(projected.len(), 1);
    }

    #[test]
    fn date_range_with_both_bounds_is_inclusive() {
        let requests = vec![request("A", "10", "Kitchen", "low")];
        let exactly = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

        let projected = project(
            &requests,
            &RequestFilter::new().with_date_range(exactly, exactly),
        );
        assert_eq!(projected.len(), 1);

        let later = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap();
        let even_later = Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap();
        let projected = project(
            &requests,
            &RequestFilter::new().with_date_range(later, even_later),
        );
        assert!(projected.is_empty());
    }

    #[test]
    fn pending_count_ignores_filters() {
        let mut completed = request("A", "10", "Kitchen", "low");
        completed.status = Status::Completed;
        let requests = vec![
            completed,
            request("B", "10", "Kitchen", "low"),
            request("C", "20", "Bedroom", "urgent"),
        ];

        assert_eq!(pending_count(&requests), 2);
    }
}
