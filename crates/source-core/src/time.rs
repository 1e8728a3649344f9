//! Appointment time normalization and ordering.

use std::cmp::Ordering;

use crate::model::Client;

/// Normalize an operator-entered time to a sortable `HH:MM` form.
///
/// Accepts the shapes seen in the hour column: `"9h"`, `"9h30"`,
/// `"9:30"`, `"09:00"`. The `h` separator common in French time notation
/// is treated like `:`; a missing minute part means `:00`.
pub fn normalize_time(raw: &str) -> String {
    let cleaned = raw.replace('h', ":");
    let mut parts = cleaned.splitn(2, ':');
    let hour = parts.next().unwrap_or("").trim();
    let minute = parts.next().unwrap_or("").trim();
    let minute = if minute.is_empty() { "00" } else { minute };

    format!("{:0>2}:{:0>2}", hour, minute)
}

/// Sort clients by normalized appointment time ascending.
///
/// Entries without a time sort last and keep their relative order
/// (the sort is stable).
pub fn sort_by_appointment_time(clients: &mut [Client]) {
    clients.sort_by(|a, b| match (&a.appointment_time, &b.appointment_time) {
        (Some(a), Some(b)) => normalize_time(a).cmp(&normalize_time(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hour_only() {
        assert_eq!(normalize_time("9h"), "09:00");
        assert_eq!(normalize_time("14h"), "14:00");
    }

    #[test]
    fn test_normalize_hour_minute() {
        assert_eq!(normalize_time("9:30"), "09:30");
        assert_eq!(normalize_time("9h30"), "09:30");
        assert_eq!(normalize_time("09:00"), "09:00");
    }

    #[test]
    fn test_sort_order() {
        let mut times = vec!["14h", "9h", "9:30"];
        times.sort_by_key(|t| normalize_time(t));

        assert_eq!(times, vec!["9h", "9:30", "14h"]);
    }

    #[test]
    fn test_sort_clients_timeless_last() {
        let mut with_time = Client::new("a", "A", "+331");
        with_time.appointment_time = Some("14h".to_string());
        let mut early = Client::new("b", "B", "+332");
        early.appointment_time = Some("9h".to_string());
        let timeless_one = Client::new("c", "C", "+333");
        let timeless_two = Client::new("d", "D", "+334");

        let mut clients = vec![
            timeless_one.clone(),
            with_time.clone(),
            timeless_two.clone(),
            early.clone(),
        ];
        sort_by_appointment_time(&mut clients);

        let ids: Vec<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        // Timeless entries trail in their original relative order.
        assert_eq!(ids, vec!["b", "a", "c", "d"]);
    }
}
