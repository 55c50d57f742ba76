//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! to and from domain entities.

use diesel::prelude::*;

use super::schema::{shipments, users};

/// Row read from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub profile_message: Option<String>,
}

/// Insertable user record; ids are explicit so demo seeding is repeatable.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: i64,
    pub name: &'a str,
    pub email: &'a str,
    pub role: &'a str,
    pub profile_message: Option<&'a str>,
}

/// Changeset for saving an existing user.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub role: &'a str,
    pub profile_message: Option<&'a str>,
}

/// Row read from the shipments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = shipments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ShipmentRow {
    pub id: i64,
    pub tracking_number: String,
    pub sender: String,
    pub receiver: String,
    pub status: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = shipments)]
pub(crate) struct NewShipmentRow<'a> {
    pub id: i64,
    pub tracking_number: &'a str,
    pub sender: &'a str,
    pub receiver: &'a str,
    pub status: &'a str,
}

/// Changeset for saving an existing shipment.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = shipments)]
pub(crate) struct ShipmentUpdate<'a> {
    pub tracking_number: &'a str,
    pub sender: &'a str,
    pub receiver: &'a str,
    pub status: &'a str,
}
