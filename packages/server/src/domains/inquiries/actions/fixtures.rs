//! Seed data shared by the action tests.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::common::UserId;
use crate::domains::auth::JwtService;
use crate::domains::gigs::Gig;
use crate::domains::profiles::{
    BillingAddress, CurrentProfile, Profile, ProfileRole, Rider, RiderKind, User,
};
use crate::kernel::{MockMarketplaceStore, ServerDeps, TestDependencies};

pub(super) fn current_profile(role: ProfileRole) -> CurrentProfile {
    let user_id = UserId::new();
    let profile = Profile::builder()
        .role(role)
        .name("The Night Owls")
        .main_user_id(user_id)
        .genres(vec!["indie".to_string()])
        .build();
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
        billing_address: None,
        technical_rider: None,
        catering_rider: None,
    }
}

/// Artist with a complete press kit, billing address and tax rate.
pub(super) fn complete_artist() -> CurrentProfile {
    let mut current = current_profile(ProfileRole::Artist);
    current.profile.bio = Some("Indie rock from Hamburg".to_string());
    current.profile.photo_url = Some("https://cdn.example.com/owls.jpg".to_string());
    current.profile.tax_rate = Some(Decimal::new(19, 2));
    current.billing_address = Some(BillingAddress {
        name: Some("Night Owls GbR".to_string()),
        street: Some("Reeperbahn 1".to_string()),
        zip: Some("20359".to_string()),
        city: Some("Hamburg".to_string()),
        country: Some("DE".to_string()),
        ..BillingAddress::build(current.profile.id)
    });
    current
}

pub(super) fn with_rider(mut current: CurrentProfile, kind: RiderKind, hash: &str) -> CurrentProfile {
    let rider = Rider::builder()
        .profile_id(current.profile.id)
        .user_id(current.main_user.id)
        .kind(kind)
        .item_hash(hash)
        .file_name(format!("{}.pdf", kind))
        .build();
    match kind {
        RiderKind::Technical => current.technical_rider = Some(rider),
        RiderKind::Catering => current.catering_rider = Some(rider),
    }
    current
}

pub(super) fn gig() -> Gig {
    Gig::builder()
        .promoter_id(crate::common::ProfileId::new())
        .title("Harbour Festival")
        .build()
}

pub(super) fn deps(store: MockMarketplaceStore) -> (TestDependencies, ServerDeps) {
    let test_deps = TestDependencies::new().mock_store(store);
    let jwt = Arc::new(JwtService::new("test-secret", "marketplace".to_string()));
    let deps = test_deps.clone().into_server_deps(jwt);
    (test_deps, deps)
}
