//! Entity to model mappers
//!
//! This module provides conversions between domain entities (portal-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `TryFrom<Model>` where a stored string must parse back into a value object

mod app_link;
mod company_settings;
mod contact;
mod executive_message;
mod it_tip;
mod news;
mod push_subscription;
mod refresh_token;
mod suggestion;
mod toolbox_talk;
mod user;
