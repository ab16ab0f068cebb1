//! Test fixtures for seeding the in-memory store.

use marketplace_core::common::UserId;
use marketplace_core::domains::gigs::Gig;
use marketplace_core::domains::profiles::{
    BillingAddress, Profile, ProfileRole, Rider, RiderKind, User,
};
use marketplace_core::kernel::MockMarketplaceStore;
use rust_decimal::Decimal;

/// A profile together with its main user.
#[derive(Clone)]
pub struct Account {
    pub profile: Profile,
    pub user: User,
}

pub fn account(role: ProfileRole, name: &str) -> Account {
    let user_id = UserId::new();
    let profile = Profile::builder()
        .role(role)
        .name(name)
        .main_user_id(user_id)
        .build();
    let user = User::builder()
        .id(user_id)
        .profile_id(profile.id)
        .first_name("Jane")
        .last_name("Doe")
        .email(format!("{}@example.com", user_id))
        .build();
    Account { profile, user }
}

/// Artist without billing address, tax rate or press kit.
pub fn new_artist() -> Account {
    account(ProfileRole::Artist, "The Night Owls")
}

/// Artist whose press kit is complete; pair with `complete_billing_address`.
pub fn complete_artist() -> Account {
    let mut artist = new_artist();
    artist.profile.bio = Some("Indie rock from Hamburg".to_string());
    artist.profile.photo_url = Some("https://cdn.example.com/owls.jpg".to_string());
    artist.profile.genres = vec!["indie".to_string()];
    artist.profile.tax_rate = Some(Decimal::new(19, 2));
    artist
}

pub fn promoter() -> Account {
    account(ProfileRole::Promoter, "Harbour Events")
}

pub fn complete_billing_address(account: &Account) -> BillingAddress {
    BillingAddress {
        name: Some("Night Owls GbR".to_string()),
        street: Some("Reeperbahn 1".to_string()),
        zip: Some("20359".to_string()),
        city: Some("Hamburg".to_string()),
        country: Some("DE".to_string()),
        ..BillingAddress::build(account.profile.id)
    }
}

pub fn gig_by(promoter: &Account) -> Gig {
    Gig::builder()
        .promoter_id(promoter.profile.id)
        .title("Harbour Festival")
        .build()
}

/// Give the account a current rider of `kind` and return it.
pub fn give_rider(account: &mut Account, kind: RiderKind, hash: &str) -> Rider {
    let rider = Rider::builder()
        .profile_id(account.profile.id)
        .user_id(account.user.id)
        .kind(kind)
        .item_hash(hash)
        .file_name(format!("{}-rider.pdf", kind))
        .build();
    match kind {
        RiderKind::Technical => account.profile.technical_rider_id = Some(rider.id),
        RiderKind::Catering => account.profile.catering_rider_id = Some(rider.id),
    }
    rider
}

/// Seed a profile and its main user.
pub fn with_account(store: MockMarketplaceStore, account: &Account) -> MockMarketplaceStore {
    store
        .with_profile(account.profile.clone())
        .with_user(account.user.clone())
}
