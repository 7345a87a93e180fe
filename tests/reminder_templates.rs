use vla_reminders::components::outlook::{CalendarEvent, DateTimeTimeZone, Location};
use vla_reminders::components::reminder::{parse_outlook_date, parse_subject, ReminderOutput};
use vla_reminders::error::Error;

/// Event starting 2016-09-16 09:30 at `location`
fn event(subject: &str, location: &str) -> CalendarEvent {
    CalendarEvent {
        id: Some("event1".to_string()),
        subject: subject.to_string(),
        location: Location {
            display_name: location.to_string(),
        },
        start: Some(DateTimeTimeZone {
            date_time: "2016-09-16T09:30:00.0000000".to_string(),
            time_zone: Some("AUS Eastern Standard Time".to_string()),
        }),
        body_preview: None,
    }
}

fn format(subject: &str, location: &str) -> ReminderOutput {
    parse_subject(&event(subject, location)).unwrap()
}

#[test]
fn test_court_reminder() {
    let output = format("CR - Jane Citizen, 9269 0234", "Ringwood Magistrates' Court");
    assert_eq!(output.event_type, "Court Reminder");
    assert_eq!(
        output.event_template,
        "Hi, reminder to attend Ringwood Magistrates' Court on Fri, 16/09/2016 at 9:30 am. \
         Any questions call Jane Citizen, Victoria Legal Aid on 9269 0234."
    );
    assert_eq!(output.phone.as_deref(), Some("9269 0234"));
}

#[test]
fn test_appointment_reminder() {
    let output = format("VAR - Jane Citizen, 9269 0234", "570 Bourke St");
    assert_eq!(output.event_type, "VLA Appointment Reminder");
    assert_eq!(
        output.event_template,
        "Hi, reminder to attend your appointment with Victoria Legal Aid at 570 Bourke St \
         on Fri, 16/09/2016 at 9:30 am. To change, call Jane Citizen on 9269 0234."
    );
}

#[test]
fn test_specialist_appointment_reminder() {
    let output = format("SAR - Dr Lee, Jane Citizen, 9269 0234", "Collins St clinic");
    assert_eq!(output.event_type, "Specialist appointment reminder");
    assert_eq!(
        output.event_template,
        "Reminder of your appointment with Dr Lee on Fri, 16/09/2016 at 9:30 am \
         at Collins St clinic. Any questions call Jane Citizen, Victoria Legal Aid on 9269 0234."
    );
    assert_eq!(output.phone.as_deref(), Some("9269 0234"));
}

#[test]
fn test_supply_info_reminder() {
    let output = format("RSI - send us your payslips by, Jane Citizen, 9269 0234", "");
    assert_eq!(output.event_type, "Reminder to supply info/docs");
    assert_eq!(
        output.event_template,
        "Hi, reminder to send us your payslips by Fri, 16/09/2016. \
         Any questions call Jane Citizen, Victoria Legal Aid on 9269 0234."
    );
}

#[test]
fn test_barrister_briefed_reminder() {
    let output = format("RBB - Ms Brown, Jane Citizen, 9269 0234", "Dandenong");
    assert_eq!(output.event_type, "Reminder of barrister briefed");
    assert_eq!(
        output.event_template,
        "Hi, reminder to meet your barrister Ms Brown at Dandenong Court 9:30 am Fri, 16/09/2016. \
         Any questions call Jane Citizen, Victoria Legal Aid on 9269 0234."
    );
}

#[test]
fn test_call_back_message() {
    let output = format("CBM - Jane Citizen, 9269 0234", "");
    assert_eq!(output.event_type, "Call back message");
    assert_eq!(
        output.event_template,
        "Hi, I rang you on Fri, 16/09/2016 but there was no answer. \
         Could you please call Jane Citizen, Victoria Legal Aid on 9269 0234."
    );
}

#[test]
fn test_compact_subject_fields() {
    let output = format("CR-a,b", "Court");
    assert_eq!(output.phone.as_deref(), Some("b"));
    assert!(output.event_template.ends_with("Any questions call a, Victoria Legal Aid on b."));

    let output = format("SAR - a,b,c", "Clinic");
    assert_eq!(output.phone.as_deref(), Some("c"));
    assert!(output.event_template.starts_with("Reminder of your appointment with a on"));
}

#[test]
fn test_unrecognised_or_missing_code() {
    for subject in ["XYZ - a,b", "Team meeting", "", " - a,b"] {
        let output = format(subject, "Somewhere");
        assert_eq!(output.event_type, "", "subject {:?}", subject);
        assert_eq!(output.event_template, "", "subject {:?}", subject);
    }
}

#[test]
fn test_short_event_info_is_an_error() {
    let err = parse_subject(&event("RBB - Ms Brown", "Dandenong")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "RBB reminder is missing field 'name2' at position 1"
    );
}

#[test]
fn test_outlook_date_parts() {
    let parts = parse_outlook_date("2016-09-16T09:30:00.0000000").unwrap();
    assert_eq!(parts.date, "Fri, 16/09/2016");
    assert_eq!(parts.time, "9:30 am");

    assert!(matches!(
        parse_outlook_date("not a date"),
        Err(Error::InvalidDateTime(_))
    ));
}
