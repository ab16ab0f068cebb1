//! The acting profile, resolved once per request by the authorization gate.

use anyhow::{Context, Result};
use serde::Serialize;

use super::{BillingAddress, Profile, Rider, RiderKind, User};
use crate::common::ProfileId;
use crate::kernel::BaseMarketplaceStore;

/// Profile of the authenticated actor together with the records the
/// inquiry endpoints read from it.
#[derive(Debug, Clone)]
pub struct CurrentProfile {
    pub profile: Profile,
    pub main_user: User,
    pub billing_address: Option<BillingAddress>,
    pub technical_rider: Option<Rider>,
    pub catering_rider: Option<Rider>,
}

/// Values the artist entered on their most recent inquiry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastInquired {
    pub artist_contact: Option<String>,
    pub travel_party_count: Option<i32>,
}

/// Profile plus the billing address shown on the application form.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileBillingForm {
    pub profile: Profile,
    pub billing_address: BillingAddress,
}

impl CurrentProfile {
    /// Load the profile and its related records. `None` if the profile is gone.
    pub async fn load(id: ProfileId, store: &dyn BaseMarketplaceStore) -> Result<Option<Self>> {
        let Some(profile) = store.find_profile(id).await? else {
            return Ok(None);
        };

        let main_user = store
            .find_user(profile.main_user_id)
            .await?
            .with_context(|| format!("profile {} has no main user", id))?;
        let billing_address = store.find_billing_address(id).await?;

        let technical_rider = match profile.technical_rider_id {
            Some(rider_id) => store.find_rider(rider_id).await?,
            None => None,
        };
        let catering_rider = match profile.catering_rider_id {
            Some(rider_id) => store.find_rider(rider_id).await?,
            None => None,
        };

        Ok(Some(Self {
            profile,
            main_user,
            billing_address,
            technical_rider,
            catering_rider,
        }))
    }

    pub fn id(&self) -> ProfileId {
        self.profile.id
    }

    pub fn is_artist(&self) -> bool {
        self.profile.is_artist()
    }

    pub fn rider(&self, kind: RiderKind) -> Option<&Rider> {
        match kind {
            RiderKind::Technical => self.technical_rider.as_ref(),
            RiderKind::Catering => self.catering_rider.as_ref(),
        }
    }

    pub fn has_complete_billing_address(&self) -> bool {
        self.billing_address
            .as_ref()
            .is_some_and(BillingAddress::is_complete)
    }

    pub fn epk_complete(&self) -> bool {
        self.profile.epk_complete()
    }

    pub fn complete_for_inquiry(&self) -> bool {
        self.has_complete_billing_address()
            && self.epk_complete()
            && self.profile.tax_rate.is_some()
    }

    /// Whether the application form has to ask for billing details.
    pub fn needs_billing_details(&self) -> bool {
        self.billing_address.is_none() || self.profile.tax_rate.is_none()
    }

    /// Billing section for the application form. A profile without an
    /// address gets an unsaved one named after its main user.
    pub fn billing_form(&self) -> ProfileBillingForm {
        let billing_address = self.billing_address.clone().unwrap_or_else(|| {
            let mut address = BillingAddress::build(self.profile.id);
            address.name = Some(self.main_user.full_name());
            address
        });

        ProfileBillingForm {
            profile: self.profile.clone(),
            billing_address,
        }
    }

    pub async fn last_inquired(&self, store: &dyn BaseMarketplaceStore) -> Result<LastInquired> {
        let last = store.find_last_inquiry_by_artist(self.profile.id).await?;
        Ok(last
            .map(|inquiry| LastInquired {
                artist_contact: inquiry.artist_contact,
                travel_party_count: inquiry.travel_party_count,
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::UserId;
    use crate::domains::profiles::ProfileRole;
    use rust_decimal::Decimal;

    fn current(billing_address: Option<BillingAddress>, tax_rate: Option<Decimal>) -> CurrentProfile {
        let user_id = UserId::new();
        let mut profile = Profile::builder()
            .role(ProfileRole::Artist)
            .name("The Night Owls")
            .main_user_id(user_id)
            .bio("Indie rock")
            .photo_url("https://cdn.example.com/owls.jpg")
            .genres(vec!["indie".to_string()])
            .build();
        profile.tax_rate = tax_rate;

        let main_user = User::builder()
            .id(user_id)
            .profile_id(profile.id)
            .first_name("Jane")
            .last_name("Doe")
            .email("jane@example.com")
            .build();

        CurrentProfile {
            profile,
            main_user,
            billing_address,
            technical_rider: None,
            catering_rider: None,
        }
    }

    fn complete_address(profile_id: ProfileId) -> BillingAddress {
        BillingAddress {
            name: Some("Jane Doe".to_string()),
            street: Some("Reeperbahn 1".to_string()),
            zip: Some("20359".to_string()),
            city: Some("Hamburg".to_string()),
            country: Some("DE".to_string()),
            ..BillingAddress::build(profile_id)
        }
    }

    #[test]
    fn test_billing_form_prefills_main_user_name() {
        let current = current(None, None);
        let form = current.billing_form();

        assert_eq!(form.billing_address.name.as_deref(), Some("Jane Doe"));
        assert_eq!(form.billing_address.profile_id, current.id());
        assert!(current.needs_billing_details());
    }

    #[test]
    fn test_billing_form_keeps_existing_address() {
        let mut current = current(None, None);
        let mut address = BillingAddress::build(current.id());
        address.name = Some("Night Owls GbR".to_string());
        current.billing_address = Some(address);

        let form = current.billing_form();
        assert_eq!(form.billing_address.name.as_deref(), Some("Night Owls GbR"));
        // tax rate still missing
        assert!(current.needs_billing_details());
    }

    #[test]
    fn test_complete_for_inquiry_requires_tax_rate() {
        let mut current = current(None, None);
        current.billing_address = Some(complete_address(current.id()));
        assert!(current.has_complete_billing_address());
        assert!(!current.complete_for_inquiry());

        current.profile.tax_rate = Some(Decimal::new(19, 2));
        assert!(current.complete_for_inquiry());
        assert!(!current.needs_billing_details());
    }
}
