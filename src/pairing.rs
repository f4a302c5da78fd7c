//! Commander pairing legality for deck registration.
//!
//! Pure rule checks over capability flags; all card lookups happen in the
//! caller. Failures are expected outcomes surfaced as HTTP 400, not bugs.

use thiserror::Error;
use uuid::Uuid;

/// Which association key a registration request used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    Partner,
    FriendsForever,
    DoctorCompanion,
    TimeLordDoctor,
    Background,
}

impl Association {
    /// Stable key stored in `decks.association`.
    pub fn as_key(self) -> &'static str {
        match self {
            Association::Partner => "partner",
            Association::FriendsForever => "friends_forever",
            Association::DoctorCompanion => "doctor_companion",
            Association::TimeLordDoctor => "time_lord_doctor",
            Association::Background => "background",
        }
    }

    /// Human label for the card the associate slot must contain.
    pub fn associate_label(self) -> &'static str {
        match self {
            Association::Partner => "Partner",
            Association::FriendsForever => "Friends Forever",
            Association::DoctorCompanion => "Doctor's Companion",
            Association::TimeLordDoctor => "Doctor",
            Association::Background => "Background",
        }
    }
}

/// Capability flags carried by a commander card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairingFlags {
    pub partner: bool,
    pub friends_forever: bool,
    pub doctor_companion: bool,
    pub time_lord_doctor: bool,
    pub choose_a_background: bool,
    pub background: bool,
}

impl PairingFlags {
    /// Can a card with these flags sit in the associate slot for `assoc`?
    fn allows_as_associate(&self, assoc: Association) -> bool {
        match assoc {
            Association::Partner => self.partner,
            Association::FriendsForever => self.friends_forever,
            Association::DoctorCompanion => self.doctor_companion,
            Association::TimeLordDoctor => self.time_lord_doctor,
            Association::Background => self.background,
        }
    }

    /// Does a primary with these flags permit the `assoc` pairing at all?
    fn permits_as_primary(&self, assoc: Association) -> bool {
        match assoc {
            Association::Partner => self.partner,
            Association::FriendsForever => self.friends_forever,
            // A Doctor chooses a companion, and vice versa.
            Association::DoctorCompanion => self.time_lord_doctor,
            Association::TimeLordDoctor => self.doctor_companion,
            Association::Background => self.choose_a_background,
        }
    }

    /// The companion type a primary with these flags must be registered
    /// with, if any.
    fn required_associate(&self) -> Option<&'static str> {
        if self.partner {
            Some("Partner")
        } else if self.friends_forever {
            Some("Friends Forever")
        } else if self.choose_a_background {
            Some("Background")
        } else if self.time_lord_doctor {
            Some("Doctor's Companion")
        } else if self.doctor_companion {
            Some("Doctor")
        } else {
            None
        }
    }
}

/// A commander as seen by the validator: identity plus flags.
#[derive(Debug, Clone)]
pub struct CommanderProfile {
    pub id: Uuid,
    pub name: String,
    pub flags: PairingFlags,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    #[error("only one commander association may be supplied")]
    MultipleAssociations,
    #[error("{0} cannot be paired with itself")]
    SameCommander(String),
    #[error("{name} is not a {wanted} card")]
    AssociateNotCapable { name: String, wanted: &'static str },
    #[error("{name} does not allow a {wanted} pairing")]
    PrimaryNotCapable { name: String, wanted: &'static str },
    #[error("{name} requires a {wanted} to be registered")]
    MissingAssociate { name: String, wanted: &'static str },
}

/// Collapse the optional association id fields of a registration request.
///
/// More than one supplied key fails here, before any lookup or write.
pub fn single_association(
    supplied: Vec<(Association, Uuid)>,
) -> Result<Option<(Association, Uuid)>, PairingError> {
    if supplied.len() > 1 {
        return Err(PairingError::MultipleAssociations);
    }
    Ok(supplied.into_iter().next())
}

/// Validate a (primary, associate) pair for the requested association.
///
/// Rules run in order: distinct cards, associate capability, primary
/// capability; with no associate, a primary that requires a companion type
/// fails naming that type.
pub fn validate_registration(
    primary: &CommanderProfile,
    associate: Option<(Association, &CommanderProfile)>,
) -> Result<(), PairingError> {
    match associate {
        Some((assoc, other)) => {
            if other.id == primary.id {
                return Err(PairingError::SameCommander(primary.name.clone()));
            }
            if !other.flags.allows_as_associate(assoc) {
                return Err(PairingError::AssociateNotCapable {
                    name: other.name.clone(),
                    wanted: assoc.associate_label(),
                });
            }
            if !primary.flags.permits_as_primary(assoc) {
                return Err(PairingError::PrimaryNotCapable {
                    name: primary.name.clone(),
                    wanted: assoc.associate_label(),
                });
            }
            Ok(())
        }
        None => match primary.flags.required_associate() {
            Some(wanted) => Err(PairingError::MissingAssociate {
                name: primary.name.clone(),
                wanted,
            }),
            None => Ok(()),
        },
    }
}
