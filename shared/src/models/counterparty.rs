//! Counterparty model

use serde::{Deserialize, Serialize};

/// Customer or supplier attached to a transaction
///
/// Customers carry loyalty points, suppliers carry a contact person;
/// both shapes share this record with the unused fields left `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Counterparty {
    pub name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub loyalty_points: Option<i64>,
    pub contact_person: Option<String>,
}

impl Counterparty {
    /// Labelled detail rows in display order, skipping absent fields
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        if let Some(ref address) = self.address {
            rows.push(("Address", address.clone()));
        }
        if let Some(ref email) = self.email {
            rows.push(("Email", email.clone()));
        }
        if let Some(ref phone) = self.phone {
            rows.push(("Phone", phone.clone()));
        }
        if let Some(points) = self.loyalty_points {
            rows.push(("Loyalty Points", points.to_string()));
        }
        if let Some(ref contact) = self.contact_person {
            rows.push(("Contact Person", contact.clone()));
        }
        rows
    }
}
