//! Bundled demo dataset.
//!
//! Seeds the console's working sets when the upstream API is unreachable and
//! backs the unit tests across this crate.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::bookings::Booking;
use crate::events::Event;
use crate::featured::FeaturedTurf;
use crate::owners::Owner;
use crate::settlement::WeeklySettlement;
use crate::status::{BookingStatus, EventStatus, OwnerStatus, TurfStatus, UserStatus};
use crate::turfs::{BankDetails, SportPrice, Turf};
use crate::types::Timestamp;
use crate::users::User;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn midnight(y: i32, m: u32, d: u32) -> Option<Timestamp> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn owners() -> Vec<Owner> {
    let owner = |id: &str, name: &str, email: &str, phone: &str, status, created, stats: (i64, i64, i64)| Owner {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        status,
        created_at: created,
        city: None,
        total_turfs: 0,
        total_bookings_30d: stats.0,
        revenue_30d: stats.1,
        pending_settlements: stats.2,
    };
    vec![
        owner(
            "OWN001",
            "Rajesh Kumar",
            "rajesh@example.com",
            "+91 98765 43210",
            OwnerStatus::Active,
            midnight(2024, 1, 15),
            (145, 87_500, 12_500),
        ),
        owner(
            "OWN002",
            "Priya Sharma",
            "priya@example.com",
            "+91 98765 43211",
            OwnerStatus::Active,
            midnight(2024, 2, 20),
            (98, 52_000, 8_000),
        ),
        owner(
            "OWN003",
            "Amit Patel",
            "amit@example.com",
            "+91 98765 43212",
            OwnerStatus::Pending,
            midnight(2024, 10, 10),
            (0, 0, 0),
        ),
    ]
}

pub fn turfs() -> Vec<Turf> {
    vec![
        Turf {
            id: "TURF001".into(),
            owner_id: "OWN001".into(),
            owner_name: None,
            name: "Elite Sports Arena".into(),
            city: "Mumbai".into(),
            address: "123 Marine Drive, Mumbai 400001".into(),
            description: None,
            sports: strings(&["Football", "Cricket", "Badminton"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1459865264687-595d652de67e",
                "https://images.unsplash.com/photo-1574629810360-7efbbe195018",
                "https://images.unsplash.com/photo-1551958219-acbc608c6377",
            ]),
            status: TurfStatus::Active,
            total_bookings_30d: 145,
            revenue_30d: 87_500,
            pending_settlements: 12_500,
            pricing: vec![
                SportPrice { sport: "Football".into(), price_per_hour: 800.0 },
                SportPrice { sport: "Cricket".into(), price_per_hour: 1000.0 },
            ],
            available_slots: strings(&["06:00-08:00", "08:00-10:00", "18:00-20:00", "20:00-22:00"]),
            cancellation_policy: "Free cancellation up to 24 hours before booking".into(),
            bank_details: Some(BankDetails {
                account_name: "Rajesh Kumar".into(),
                account_number: "1234567890".into(),
                ifsc: "HDFC0001234".into(),
            }),
        },
        Turf {
            id: "TURF002".into(),
            owner_id: "OWN002".into(),
            owner_name: None,
            name: "Victory Sports Complex".into(),
            city: "Bangalore".into(),
            address: "45 MG Road, Bangalore 560001".into(),
            description: None,
            sports: strings(&["Football", "Basketball"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1556817411-31ae72fa3ea0",
                "https://images.unsplash.com/photo-1575361204480-aadea25e6e68",
            ]),
            status: TurfStatus::Active,
            total_bookings_30d: 98,
            revenue_30d: 52_000,
            pending_settlements: 8_000,
            pricing: vec![SportPrice { sport: "Football".into(), price_per_hour: 700.0 }],
            available_slots: strings(&["07:00-09:00", "17:00-19:00", "19:00-21:00"]),
            cancellation_policy: "Free cancellation up to 12 hours before booking".into(),
            bank_details: None,
        },
    ]
}

pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "BKG001".into(),
            user_id: "USR001".into(),
            user_name: "Vikram Singh".into(),
            user_phone: Some("+91 98765 00001".into()),
            turf_id: "TURF001".into(),
            turf_name: "Elite Sports Arena".into(),
            sport: "Football".into(),
            date: date(2025, 10, 20),
            time: "18:00 - 20:00".into(),
            duration_hours: Some(2.0),
            amount: 1600.0,
            status: BookingStatus::Confirmed,
            payment_method: "UPI".into(),
            transaction_id: "TXN001".into(),
        },
        Booking {
            id: "BKG002".into(),
            user_id: "USR002".into(),
            user_name: "Sneha Reddy".into(),
            user_phone: Some("+91 98765 00002".into()),
            turf_id: "TURF002".into(),
            turf_name: "Victory Sports Complex".into(),
            sport: "Football".into(),
            date: date(2025, 10, 21),
            time: "07:00 - 09:00".into(),
            duration_hours: Some(2.0),
            amount: 1400.0,
            status: BookingStatus::Confirmed,
            payment_method: "Credit Card".into(),
            transaction_id: "TXN002".into(),
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "USR001".into(),
            name: "Vikram Singh".into(),
            email: "vikram@example.com".into(),
            phone: "+91 98765 00001".into(),
            status: UserStatus::Active,
            joined_at: midnight(2024, 6, 1),
            total_bookings: 23,
            total_spent: Some(45_000.0),
            city: None,
            wallet_balance: None,
            user_type: None,
        },
        User {
            id: "USR002".into(),
            name: "Sneha Reddy".into(),
            email: "sneha@example.com".into(),
            phone: "+91 98765 00002".into(),
            status: UserStatus::Active,
            joined_at: midnight(2024, 7, 15),
            total_bookings: 15,
            total_spent: Some(28_000.0),
            city: None,
            wallet_balance: None,
            user_type: None,
        },
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "evt_001".into(),
            name: "Summer Football Championship".into(),
            turf_id: "TURF001".into(),
            date: date(2025, 11, 15),
            time: "18:00".into(),
            description: "Join us for an exciting 5v5 football tournament with amazing prizes!"
                .into(),
            registration_cap: 100,
            registration_fee: 500,
            registered: 45,
            status: EventStatus::Upcoming,
        },
        Event {
            id: "evt_002".into(),
            name: "Cricket Fest 2025".into(),
            turf_id: "TURF002".into(),
            date: date(2025, 11, 20),
            time: "09:00".into(),
            description: "Annual cricket tournament for all age groups.".into(),
            registration_cap: 80,
            registration_fee: 800,
            registered: 62,
            status: EventStatus::Upcoming,
        },
    ]
}

pub fn featured() -> Vec<FeaturedTurf> {
    let entry = |turf_id: &str, position, badge: &str| FeaturedTurf {
        turf_id: turf_id.into(),
        position,
        badge: badge.into(),
        start_date: date(2025, 10, 20),
        end_date: date(2025, 11, 20),
        active: true,
    };
    vec![entry("TURF001", 1, "#1 Featured"), entry("TURF002", 2, "Top Pick")]
}

/// Seed settlements for the week starting at `week_start`.
pub fn settlements(week_start: NaiveDate) -> Vec<WeeklySettlement> {
    vec![
        WeeklySettlement::new("TURF001", "Elite Sports Arena", "OWN001", week_start, 15_000),
        WeeklySettlement::new("TURF002", "Victory Sports Complex", "OWN002", week_start, 8_200),
    ]
}
