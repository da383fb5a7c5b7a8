//! Domain records for the access-governance portal.
//!
//! Everything here is a plain serde record. Identity is the `id` field;
//! no record carries invariants beyond id uniqueness inside a selection
//! store.

pub mod fixtures;

use serde::{Deserialize, Serialize};

/// A directory user as shown in the user pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub emp_id: String,
    pub manager: String,
    pub store_code: String,
    pub brand: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub start_date: String,
}

/// A pre-defined user group (e.g. "IT Administrators").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    pub id: String,
    pub group_name: String,
    pub description: String,
    pub creation_date: String,
    pub number_of_users: u32,
}

/// An onboarded application access can be requested for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub application_name: String,
    pub application_type: String,
    pub owner: String,
    pub department: String,
    pub status: String,
    pub last_sync: String,
}

/// Risk rating attached to an entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Risk {
    High,
    Medium,
    Low,
}

impl Risk {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// An entitlement within an application (role, profile or permission).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entitlement {
    pub id: String,
    pub entitlement_name: String,
    pub entitlement_type: String,
    /// Foreign key to [`Application::application_name`].
    pub application_name: String,
    pub description: String,
    pub risk: Risk,
    pub last_reviewed: String,
    pub scope: String,
}

/// A store in the franchise inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub id: String,
    pub store_name: String,
    pub store_number: String,
    pub location: String,
    pub brand: String,
    pub region: String,
    pub status: String,
}

/// A sales region grouping many stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub region_name: String,
    pub description: String,
    pub number_of_stores: u32,
    pub states: String,
    pub status: String,
}

/// A user-defined group of stores ("High Volume Stores", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomGroup {
    pub id: String,
    pub group_name: String,
    pub description: String,
    pub created_by: String,
    pub creation_date: String,
    pub number_of_stores: u32,
    pub status: String,
}

/// Which picker a location selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationKind {
    Store,
    Region,
    CustomGroup,
}

/// A selected location, normalized from a store, region or custom group.
///
/// The three pickers feed the same selection store, so ids are namespaced
/// by kind to keep a store and a region with the same raw id distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub kind: LocationKind,
    #[serde(default)]
    pub store_number: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_of_stores: Option<u32>,
}

impl Location {
    pub fn from_store(store: &StoreRecord) -> Self {
        Self {
            id: format!("store-{}", store.id),
            name: store.store_name.clone(),
            kind: LocationKind::Store,
            store_number: Some(store.store_number.clone()),
            brand: Some(store.brand.clone()),
            region: Some(store.region.clone()),
            description: None,
            number_of_stores: None,
        }
    }

    pub fn from_region(region: &Region) -> Self {
        Self {
            id: format!("region-{}", region.id),
            name: region.region_name.clone(),
            kind: LocationKind::Region,
            store_number: None,
            brand: None,
            region: Some(region.states.clone()),
            description: Some(region.description.clone()),
            number_of_stores: Some(region.number_of_stores),
        }
    }

    pub fn from_custom_group(group: &CustomGroup) -> Self {
        Self {
            id: format!("group-{}", group.id),
            name: group.group_name.clone(),
            kind: LocationKind::CustomGroup,
            store_number: None,
            brand: None,
            region: None,
            description: Some(group.description.clone()),
            number_of_stores: Some(group.number_of_stores),
        }
    }
}

/// Category tabs on the admin roles screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Regional,
    Store,
    Corporate,
}

impl RoleCategory {
    pub const ALL: [RoleCategory; 3] = [Self::Regional, Self::Store, Self::Corporate];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Regional => "Regional",
            Self::Store => "Store",
            Self::Corporate => "Corporate",
        }
    }
}

/// An administrative role with its default privilege set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub description: String,
    pub category: RoleCategory,
    pub privileges: Vec<String>,
}

/// The record rendered on the profile screen.
///
/// Handed between screens through the handoff store; every field tolerates
/// absence so a partially-populated handoff still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub display_name: String,
    pub alias: String,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub start_date: Option<String>,
    pub user_type: Option<String>,
    pub manager_email: Option<String>,
    pub tags: Vec<String>,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
            display_name: "John Doe".into(),
            alias: "jdoe".into(),
            phone: Some("+1 (555) 123-4567".into()),
            title: Some("Franchise Admin".into()),
            department: Some("IT Department".into()),
            start_date: Some("2023-01-15".into()),
            user_type: Some("Internal".into()),
            manager_email: Some("manager@example.com".into()),
            tags: vec!["User".into(), "Internal".into()],
        }
    }
}

impl ProfileRecord {
    pub fn from_user(user: &User) -> Self {
        let (first, last) = match user.name.split_once(' ') {
            Some((f, l)) => (f.to_string(), l.to_string()),
            None => (user.name.clone(), String::new()),
        };
        Self {
            first_name: first,
            last_name: last,
            email: user.email.clone(),
            display_name: user.name.clone(),
            alias: user.emp_id.to_lowercase(),
            phone: None,
            title: user.title.clone(),
            department: user.department.clone(),
            start_date: Some(user.start_date.clone()),
            user_type: Some("Internal".into()),
            manager_email: None,
            tags: vec!["User".into()],
        }
    }
}
