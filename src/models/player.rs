//! Player identifiers, profile names and tournament registrations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player profile.
pub type PlayerId = Uuid;

/// The joined `profiles` row: only the display name is used here.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProfileRef {
    #[serde(default)]
    pub full_name: Option<String>,
}

impl ProfileRef {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
        }
    }

    /// The profile's name, treating a blank name as missing.
    pub fn name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// A tournament registration: a player, optionally with a named partner.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub player_id: PlayerId,
    #[serde(default)]
    pub partner_id: Option<PlayerId>,
    #[serde(default)]
    pub player: Option<ProfileRef>,
    #[serde(default)]
    pub partner: Option<ProfileRef>,
}

impl Participant {
    /// Register a solo player looking for a partner.
    pub fn solo(player_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player_id,
            partner_id: None,
            player: Some(ProfileRef::new(name)),
            partner: None,
        }
    }

    /// Register a player together with their partner.
    pub fn with_partner(
        player_id: PlayerId,
        name: impl Into<String>,
        partner_id: PlayerId,
        partner_name: impl Into<String>,
    ) -> Self {
        Self {
            player_id,
            partner_id: Some(partner_id),
            player: Some(ProfileRef::new(name)),
            partner: Some(ProfileRef::new(partner_name)),
        }
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player.as_ref().and_then(ProfileRef::name)
    }

    pub fn partner_name(&self) -> Option<&str> {
        self.partner.as_ref().and_then(ProfileRef::name)
    }
}
