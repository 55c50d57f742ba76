//! Demo users and shipments loaded at startup when seeding is enabled.
//!
//! One account per role so every visitor can be exercised by logging in.
//! Identifiers are fixed, which keeps re-seeding idempotent.

use crate::domain::{Shipment, ShipmentId, User, UserId};

struct DemoUser {
    id: i64,
    name: &'static str,
    email: &'static str,
    role: &'static str,
    profile_message: Option<&'static str>,
}

struct DemoShipment {
    id: i64,
    tracking_number: &'static str,
    sender: &'static str,
    receiver: &'static str,
    status: &'static str,
}

const USERS: [DemoUser; 3] = [
    DemoUser {
        id: 1,
        name: "Ada Admin",
        email: "admin@example.com",
        role: "admin",
        profile_message: None,
    },
    DemoUser {
        id: 2,
        name: "Grace Customer",
        email: "customer@example.com",
        role: "customer",
        profile_message: Some("Keep up the great work!"),
    },
    DemoUser {
        id: 3,
        name: "Linus Guest",
        email: "guest@example.com",
        role: "guest",
        profile_message: None,
    },
];

const SHIPMENTS: [DemoShipment; 3] = [
    DemoShipment {
        id: 1,
        tracking_number: "TN1",
        sender: "Acme Widgets",
        receiver: "Grace Customer",
        status: "Shipped",
    },
    DemoShipment {
        id: 2,
        tracking_number: "TN2",
        sender: "Globex Parts",
        receiver: "Grace Customer",
        status: "Processing",
    },
    DemoShipment {
        id: 3,
        tracking_number: "TN3",
        sender: "Initech Supplies",
        receiver: "Linus Guest",
        status: "Delivered",
    },
];

/// Demo users; ids are compile-time constants, so invalid ones are skipped.
pub fn demo_users() -> Vec<User> {
    USERS
        .iter()
        .filter_map(|demo| {
            let id = UserId::new(demo.id).ok()?;
            Some(
                User::builder(id, demo.name, demo.email)
                    .role(demo.role)
                    .profile_message(demo.profile_message.map(str::to_owned))
                    .build(),
            )
        })
        .collect()
}

/// Demo shipments.
pub fn demo_shipments() -> Vec<Shipment> {
    SHIPMENTS
        .iter()
        .filter_map(|demo| {
            let id = ShipmentId::new(demo.id).ok()?;
            Some(
                Shipment::builder(id, demo.tracking_number)
                    .sender(demo.sender)
                    .receiver(demo.receiver)
                    .status(demo.status)
                    .build(),
            )
        })
        .collect()
}
