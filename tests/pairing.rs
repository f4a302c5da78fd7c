//! Unit tests for commander pairing validation.

use decklog_server::pairing::{
    single_association, validate_registration, Association, CommanderProfile, PairingError,
    PairingFlags,
};
use uuid::Uuid;

fn card(name: &str, flags: PairingFlags) -> CommanderProfile {
    CommanderProfile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        flags,
    }
}

fn partner(name: &str) -> CommanderProfile {
    card(
        name,
        PairingFlags {
            partner: true,
            ..Default::default()
        },
    )
}

#[test]
fn more_than_one_association_is_rejected() {
    let result = single_association(vec![
        (Association::Partner, Uuid::new_v4()),
        (Association::Background, Uuid::new_v4()),
    ]);
    assert_eq!(result, Err(PairingError::MultipleAssociations));
}

#[test]
fn zero_or_one_associations_pass_through() {
    assert_eq!(single_association(vec![]), Ok(None));
    let id = Uuid::new_v4();
    assert_eq!(
        single_association(vec![(Association::Partner, id)]),
        Ok(Some((Association::Partner, id)))
    );
}

#[test]
fn partner_pair_is_legal() {
    let primary = partner("Halana");
    let other = partner("Alena");
    assert_eq!(
        validate_registration(&primary, Some((Association::Partner, &other))),
        Ok(())
    );
}

#[test]
fn commander_cannot_pair_with_itself() {
    let primary = partner("Halana");
    let err = validate_registration(&primary, Some((Association::Partner, &primary)));
    assert_eq!(err, Err(PairingError::SameCommander("Halana".to_string())));
}

#[test]
fn associate_must_carry_the_capability() {
    let primary = partner("Halana");
    let vanilla = card("Krenko", PairingFlags::default());
    let err = validate_registration(&primary, Some((Association::Partner, &vanilla)));
    assert_eq!(
        err,
        Err(PairingError::AssociateNotCapable {
            name: "Krenko".to_string(),
            wanted: "Partner",
        })
    );
}

#[test]
fn primary_must_permit_the_pairing() {
    let vanilla = card("Krenko", PairingFlags::default());
    let bg = card(
        "Scion of Halaster",
        PairingFlags {
            background: true,
            ..Default::default()
        },
    );
    let err = validate_registration(&vanilla, Some((Association::Background, &bg)));
    assert_eq!(
        err,
        Err(PairingError::PrimaryNotCapable {
            name: "Krenko".to_string(),
            wanted: "Background",
        })
    );
}

#[test]
fn background_chooser_accepts_a_background() {
    let primary = card(
        "Wilson",
        PairingFlags {
            choose_a_background: true,
            ..Default::default()
        },
    );
    let bg = card(
        "Raised by Giants",
        PairingFlags {
            background: true,
            ..Default::default()
        },
    );
    assert_eq!(
        validate_registration(&primary, Some((Association::Background, &bg))),
        Ok(())
    );
}

#[test]
fn doctor_pairs_with_companion_and_vice_versa() {
    let doctor = card(
        "The Tenth Doctor",
        PairingFlags {
            time_lord_doctor: true,
            ..Default::default()
        },
    );
    let companion = card(
        "Rose Tyler",
        PairingFlags {
            doctor_companion: true,
            ..Default::default()
        },
    );
    // Doctor as primary chooses a companion.
    assert_eq!(
        validate_registration(&doctor, Some((Association::DoctorCompanion, &companion))),
        Ok(())
    );
    // Companion as primary chooses a Doctor.
    assert_eq!(
        validate_registration(&companion, Some((Association::TimeLordDoctor, &doctor))),
        Ok(())
    );
    // A companion cannot sit in the Doctor slot.
    assert!(matches!(
        validate_registration(&doctor, Some((Association::TimeLordDoctor, &companion))),
        Err(PairingError::AssociateNotCapable { .. })
    ));
}

#[test]
fn missing_partner_is_named_in_the_error() {
    let primary = partner("Halana");
    let err = validate_registration(&primary, None);
    assert_eq!(
        err,
        Err(PairingError::MissingAssociate {
            name: "Halana".to_string(),
            wanted: "Partner",
        })
    );
    let msg = err.unwrap_err().to_string();
    assert!(msg.contains("Partner"), "message names the required type");
}

#[test]
fn missing_background_is_named_in_the_error() {
    let primary = card(
        "Wilson",
        PairingFlags {
            choose_a_background: true,
            ..Default::default()
        },
    );
    assert_eq!(
        validate_registration(&primary, None),
        Err(PairingError::MissingAssociate {
            name: "Wilson".to_string(),
            wanted: "Background",
        })
    );
}

#[test]
fn plain_commander_needs_no_associate() {
    let vanilla = card("Krenko", PairingFlags::default());
    assert_eq!(validate_registration(&vanilla, None), Ok(()));
}
