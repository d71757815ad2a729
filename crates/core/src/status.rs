//! Status enums for console records and the single-record status transition.
//!
//! Every enum serializes to the lowercase label the console shows (e.g.
//! `"no-show"`), parses from that label case-insensitively, and exposes the
//! full label list for validation messages.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every valid label, in declaration order.
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            /// The wire/display label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(CoreError::Validation(format!(
                    "Unknown {} '{}'. Expected one of: {}",
                    stringify!($name),
                    s,
                    Self::LABELS.join(", "),
                )))
            }
        }
    };
}

define_status_enum! {
    /// Turf owner account status.
    OwnerStatus {
        Pending = "pending",
        Active = "active",
        Suspended = "suspended",
        Deleted = "deleted",
    }
}

define_status_enum! {
    /// Turf listing status.
    TurfStatus {
        Pending = "pending",
        Active = "active",
        Inactive = "inactive",
    }
}

define_status_enum! {
    /// Booking status as shown in the console.
    BookingStatus {
        Confirmed = "confirmed",
        Cancelled = "cancelled",
        Refunded = "refunded",
        NoShow = "no-show",
    }
}

define_status_enum! {
    /// End-user account status.
    UserStatus {
        Active = "active",
        Suspended = "suspended",
        Blocked = "blocked",
    }
}

define_status_enum! {
    /// Event lifecycle status.
    EventStatus {
        Upcoming = "upcoming",
        Ongoing = "ongoing",
        Completed = "completed",
        Cancelled = "cancelled",
    }
}

define_status_enum! {
    /// Owner registration request status (upstream uses capitalized labels).
    RequestStatus {
        Pending = "Pending",
        Approved = "Approved",
        Rejected = "Rejected",
    }
}

define_status_enum! {
    /// Outcome of a notification send.
    DeliveryStatus {
        Sent = "sent",
        Delivered = "delivered",
        Failed = "failed",
    }
}

define_status_enum! {
    /// Delivery channel for notifications and generated owner credentials.
    Channel {
        Whatsapp = "whatsapp",
        Email = "email",
        Sms = "sms",
    }
}

define_status_enum! {
    /// Weekly settlement payout state.
    SettlementStatus {
        Pending = "pending",
        PartiallySettled = "partially-settled",
        Settled = "settled",
    }
}

// ---------------------------------------------------------------------------
// Record identity and status transitions
// ---------------------------------------------------------------------------

/// A console record addressable by a string id.
pub trait Identified {
    /// Entity name used in not-found errors.
    const ENTITY: &'static str;

    fn record_id(&self) -> &str;
}

/// A console record with a mutable status field.
pub trait HasStatus: Identified {
    type Status: Copy;

    fn set_status(&mut self, status: Self::Status);
}

/// Set the status of exactly the record whose id is `id`.
///
/// All other records are left untouched. Returns the updated record, or
/// [`CoreError::NotFound`] if no record has that id.
pub fn transition<'a, T: HasStatus>(
    records: &'a mut [T],
    id: &str,
    status: T::Status,
) -> Result<&'a T, CoreError> {
    let record = records
        .iter_mut()
        .find(|r| r.record_id() == id)
        .ok_or_else(|| CoreError::not_found(T::ENTITY, id))?;
    record.set_status(status);
    Ok(record)
}

/// Find a record by id.
pub fn find<'a, T: Identified>(records: &'a [T], id: &str) -> Result<&'a T, CoreError> {
    records
        .iter()
        .find(|r| r.record_id() == id)
        .ok_or_else(|| CoreError::not_found(T::ENTITY, id))
}

/// Remove a record by id, returning it.
pub fn remove<T: Identified>(records: &mut Vec<T>, id: &str) -> Result<T, CoreError> {
    let index = records
        .iter()
        .position(|r| r.record_id() == id)
        .ok_or_else(|| CoreError::not_found(T::ENTITY, id))?;
    Ok(records.remove(index))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        status: UserStatus,
    }

    impl Identified for Item {
        const ENTITY: &'static str = "Item";

        fn record_id(&self) -> &str {
            &self.id
        }
    }

    impl HasStatus for Item {
        type Status = UserStatus;

        fn set_status(&mut self, status: UserStatus) {
            self.status = status;
        }
    }

    fn items() -> Vec<Item> {
        ["a", "b", "c"]
            .into_iter()
            .map(|id| Item {
                id: id.to_string(),
                status: UserStatus::Active,
            })
            .collect()
    }

    #[test]
    fn transition_changes_only_target() {
        let mut records = items();
        let updated = transition(&mut records, "b", UserStatus::Blocked).unwrap();
        assert_eq!(updated.status, UserStatus::Blocked);

        assert_eq!(records[0].status, UserStatus::Active);
        assert_eq!(records[1].status, UserStatus::Blocked);
        assert_eq!(records[2].status, UserStatus::Active);
    }

    #[test]
    fn transition_unknown_id_is_not_found() {
        let mut records = items();
        let err = transition(&mut records, "zzz", UserStatus::Blocked).unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Item", .. });
        assert!(records.iter().all(|r| r.status == UserStatus::Active));
    }

    #[test]
    fn remove_returns_record_and_keeps_order() {
        let mut records = items();
        let removed = remove(&mut records, "a").unwrap();
        assert_eq!(removed.id, "a");
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn status_labels_round_trip_through_from_str() {
        assert_eq!("no-show".parse::<BookingStatus>().unwrap(), BookingStatus::NoShow);
        assert_eq!("Approved".parse::<RequestStatus>().unwrap(), RequestStatus::Approved);
        assert_eq!("approved".parse::<RequestStatus>().unwrap(), RequestStatus::Approved);
        assert_eq!(BookingStatus::NoShow.to_string(), "no-show");
    }

    #[test]
    fn unknown_label_lists_valid_options() {
        let err = "frozen".parse::<TurfStatus>().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("pending, active, inactive"));
    }

    #[test]
    fn status_serializes_to_label() {
        let json = serde_json::to_string(&SettlementStatus::PartiallySettled).unwrap();
        assert_eq!(json, "\"partially-settled\"");
    }
}
