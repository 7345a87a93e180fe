use super::models::{ReminderKind, ReminderOutput};
use super::templates::render;
use super::time::parse_outlook_date;
use crate::components::outlook::CalendarEvent;
use crate::error::{date_time_error, AppResult, Error};

/// Build the reminder for one calendar event from its subject line.
///
/// The subject is split on every `-`: the first piece is the reminder code
/// and the second the comma separated event info. Anything after a second
/// `-` is not used. The last info field is always reported as the phone
/// number. Unknown codes give an empty reminder; known codes with too few
/// fields are an error.
pub fn parse_subject(event: &CalendarEvent) -> AppResult<ReminderOutput> {
    let mut segments = event.subject.split('-');
    let (Some(code), Some(info)) = (segments.next(), segments.next()) else {
        return Ok(ReminderOutput::default());
    };

    let kind = ReminderKind::from_code(code.trim());
    let event_info: Vec<String> = info.split(',').map(|field| field.trim().to_string()).collect();

    let mut output = ReminderOutput {
        phone: event_info.last().cloned(),
        ..ReminderOutput::default()
    };

    if let ReminderKind::Unknown(_) = kind {
        return Ok(output);
    }

    let required = kind.required_fields();
    if event_info.len() < required.len() {
        let index = event_info.len();
        return Err(Error::MissingEventField {
            code: kind.code().to_string(),
            field: required[index],
            index,
        });
    }

    let start = event
        .start
        .as_ref()
        .ok_or_else(|| date_time_error("Event has no start time"))?;
    let when = parse_outlook_date(&start.date_time)?;

    output.event_type = kind.label().to_string();
    output.event_template = render(&kind, &event_info, &event.location.display_name, &when);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::outlook::{DateTimeTimeZone, Location};

    fn event(subject: &str) -> CalendarEvent {
        CalendarEvent {
            subject: subject.to_string(),
            location: Location {
                display_name: "Ringwood".to_string(),
            },
            start: Some(DateTimeTimeZone {
                date_time: "2016-09-16T09:30:00.0000000".to_string(),
                time_zone: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_subject_without_dash_is_empty() {
        let output = parse_subject(&event("Team lunch")).unwrap();
        assert_eq!(output, ReminderOutput::default());
        assert!(output.phone.is_none());
    }

    #[test]
    fn test_unknown_code_keeps_phone() {
        let output = parse_subject(&event("XYZ - a,b")).unwrap();
        assert_eq!(output.event_type, "");
        assert_eq!(output.event_template, "");
        assert_eq!(output.phone.as_deref(), Some("b"));
    }

    #[test]
    fn test_second_dash_truncates_info() {
        let output = parse_subject(&event("CR - Anne Smith, 9269 0234 - after hours")).unwrap();
        assert_eq!(output.phone.as_deref(), Some("9269 0234"));
        assert!(!output.event_template.contains("after hours"));

        // A hyphenated name loses everything after the hyphen
        let err = parse_subject(&event("CR - Anne Smith-Jones, 9269 0234")).unwrap_err();
        assert!(matches!(err, Error::MissingEventField { index: 1, .. }));
    }

    #[test]
    fn test_missing_field_is_reported() {
        let err = parse_subject(&event("SAR - Dr Lee, 9269 0234")).unwrap_err();
        match err {
            Error::MissingEventField { code, field, index } => {
                assert_eq!(code, "SAR");
                assert_eq!(field, "phone");
                assert_eq!(index, 2);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_missing_start_is_reported() {
        let mut ev = event("CBM - Sam, 9269 0234");
        ev.start = None;
        assert!(matches!(parse_subject(&ev), Err(Error::InvalidDateTime(_))));
    }

    #[test]
    fn test_unknown_code_ignores_bad_date() {
        let mut ev = event("NOTE - something");
        ev.start = None;
        assert!(parse_subject(&ev).unwrap().is_empty());
    }

    #[test]
    fn test_phone_is_last_field_even_with_extra_fields() {
        let output = parse_subject(&event("CR - Sam, 9269 0000, 0400 111 222")).unwrap();
        assert_eq!(output.phone.as_deref(), Some("0400 111 222"));
        assert!(output.event_template.ends_with("on 9269 0000."));
    }
}
