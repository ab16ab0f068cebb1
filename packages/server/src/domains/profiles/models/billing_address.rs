use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::profile::is_present;
use crate::common::{BillingAddressId, ProfileId};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BillingAddress {
    pub id: BillingAddressId,
    pub profile_id: ProfileId,
    pub name: Option<String>,
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl BillingAddress {
    /// Unsaved address for a profile that has none yet.
    pub fn build(profile_id: ProfileId) -> Self {
        Self {
            id: BillingAddressId::new(),
            profile_id,
            name: None,
            street: None,
            zip: None,
            city: None,
            country: None,
        }
    }

    pub async fn find_by_profile(profile_id: ProfileId, pool: &PgPool) -> Result<Option<Self>> {
        let address =
            sqlx::query_as::<_, Self>("SELECT * FROM billing_addresses WHERE profile_id = $1")
                .bind(profile_id)
                .fetch_optional(pool)
                .await?;
        Ok(address)
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.street, &self.zip, &self.city, &self.country]
            .into_iter()
            .all(is_present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_address_is_blank() {
        let address = BillingAddress::build(ProfileId::new());
        assert!(address.name.is_none());
        assert!(!address.is_complete());
    }

    #[test]
    fn test_complete_address() {
        let mut address = BillingAddress::build(ProfileId::new());
        address.name = Some("Jane Doe".to_string());
        address.street = Some("Reeperbahn 1".to_string());
        address.zip = Some("20359".to_string());
        address.city = Some("Hamburg".to_string());
        address.country = Some("DE".to_string());
        assert!(address.is_complete());

        address.zip = Some(String::new());
        assert!(!address.is_complete());
    }
}
