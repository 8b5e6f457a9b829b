use drivetime_core::models::{day::Weekday, slot::SlotRange};
use drivetime_core::scheduling::template;
use drivetime_core::scheduling::validate::{RejectReason, SlotDecision};
use drivetime_store::AvailabilityStore;
use pretty_assertions::assert_eq;
use uuid::Uuid;

const MIN_GAP: u16 = 30;

#[test]
fn admitted_slot_is_stored() {
    let store = AvailabilityStore::new();
    let instructor = Uuid::new_v4();

    let (decision, slot) = store
        .admit(instructor, Weekday::Mon, SlotRange::new(540, 600), MIN_GAP)
        .unwrap();

    assert_eq!(decision, SlotDecision::Accepted);
    let slot = slot.expect("accepted admission returns the stored slot");

    let week = store.week_of(instructor).unwrap();
    assert_eq!(week.len(), 1);
    assert_eq!(week[0].id, slot.id);
    assert_eq!(week[0].range, SlotRange::new(540, 600));
}

#[test]
fn rejected_slot_leaves_the_book_untouched() {
    let store = AvailabilityStore::new();
    let instructor = Uuid::new_v4();

    store
        .admit(instructor, Weekday::Mon, SlotRange::new(540, 600), MIN_GAP)
        .unwrap();
    let (decision, slot) = store
        .admit(instructor, Weekday::Mon, SlotRange::new(550, 590), MIN_GAP)
        .unwrap();

    assert_eq!(
        decision,
        SlotDecision::Rejected(RejectReason::Overlaps {
            start: 540,
            end: 600
        })
    );
    assert!(slot.is_none());
    assert_eq!(store.week_of(instructor).unwrap().len(), 1);
}

#[test]
fn same_times_on_different_days_coexist() {
    let store = AvailabilityStore::new();
    let instructor = Uuid::new_v4();

    for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed] {
        let (decision, _) = store
            .admit(instructor, day, SlotRange::new(540, 600), MIN_GAP)
            .unwrap();
        assert_eq!(decision, SlotDecision::Accepted);
    }

    assert_eq!(store.week_of(instructor).unwrap().len(), 3);
}

#[test]
fn week_listing_is_day_then_start_ordered() {
    let store = AvailabilityStore::new();
    let instructor = Uuid::new_v4();

    // Inserted out of order on purpose
    store
        .admit(instructor, Weekday::Tue, SlotRange::new(540, 600), MIN_GAP)
        .unwrap();
    store
        .admit(instructor, Weekday::Mon, SlotRange::new(720, 780), MIN_GAP)
        .unwrap();
    store
        .admit(instructor, Weekday::Mon, SlotRange::new(540, 600), MIN_GAP)
        .unwrap();

    let week = store.week_of(instructor).unwrap();
    let order: Vec<(Weekday, u16)> = week
        .iter()
        .map(|s| (s.day, s.range.start_minutes))
        .collect();
    assert_eq!(
        order,
        vec![
            (Weekday::Mon, 540),
            (Weekday::Mon, 720),
            (Weekday::Tue, 540),
        ]
    );
}

#[test]
fn remove_by_id() {
    let store = AvailabilityStore::new();
    let instructor = Uuid::new_v4();

    let (_, slot) = store
        .admit(instructor, Weekday::Fri, SlotRange::new(540, 600), MIN_GAP)
        .unwrap();
    let slot_id = slot.unwrap().id;

    assert!(store.remove(instructor, slot_id).unwrap());
    assert!(store.week_of(instructor).unwrap().is_empty());

    // Second removal finds nothing
    assert!(!store.remove(instructor, slot_id).unwrap());
    // Unknown instructor finds nothing either
    assert!(!store.remove(Uuid::new_v4(), slot_id).unwrap());
}

#[test]
fn replace_week_overwrites_previous_slots() {
    let store = AvailabilityStore::new();
    let instructor = Uuid::new_v4();

    // A pre-existing slot that the template does not contain
    store
        .admit(instructor, Weekday::Mon, SlotRange::new(480, 510), MIN_GAP)
        .unwrap();

    let week = store
        .replace_week(instructor, &template::default_week())
        .unwrap();

    assert_eq!(week.len(), 30);
    assert!(week
        .iter()
        .all(|s| s.range != SlotRange::new(480, 510)));

    // First Monday lesson is 09:00-10:00
    assert_eq!(week[0].day, Weekday::Mon);
    assert_eq!(week[0].range, SlotRange::new(540, 600));
}

#[test]
fn generated_week_accepts_candidates_matching_its_spacing() {
    let store = AvailabilityStore::new();
    let instructor = Uuid::new_v4();
    store
        .replace_week(instructor, &template::default_week())
        .unwrap();

    // 18:00-19:00 sits exactly one break after the 17:30 close
    let (decision, _) = store
        .admit(instructor, Weekday::Thu, SlotRange::new(1080, 1140), MIN_GAP)
        .unwrap();
    assert_eq!(decision, SlotDecision::Accepted);

    // Inside the lunch lesson it still rejects
    let (decision, _) = store
        .admit(instructor, Weekday::Thu, SlotRange::new(730, 740), MIN_GAP)
        .unwrap();
    assert_eq!(
        decision,
        SlotDecision::Rejected(RejectReason::Overlaps {
            start: 720,
            end: 780
        })
    );
}

#[test]
fn unknown_instructor_has_an_empty_week() {
    let store = AvailabilityStore::new();
    assert!(store.week_of(Uuid::new_v4()).unwrap().is_empty());
}
