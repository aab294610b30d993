//! DTOs for decoding the user collection JSON.
//!
//! The adapter decodes into these transport DTOs first, then maps into
//! domain [`User`] records in one pass.

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::{Address, Company, Geo, User, UserId};

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(super) struct UsersResponseDto {
    pub(super) users: Vec<UserDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) username: String,
    pub(super) email: String,
    pub(super) address: AddressDto,
    pub(super) phone: String,
    pub(super) website: String,
    pub(super) company: CompanyDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddressDto {
    pub(super) street: String,
    pub(super) suite: String,
    pub(super) city: String,
    pub(super) zipcode: String,
    pub(super) geo: GeoDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeoDto {
    pub(super) lat: String,
    pub(super) lng: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CompanyDto {
    pub(super) name: String,
    pub(super) catch_phrase: String,
    pub(super) bs: String,
}

impl UsersResponseDto {
    pub(super) fn into_domain_users(self) -> Result<Vec<User>, String> {
        let mut seen = HashSet::with_capacity(self.users.len());
        self.users
            .into_iter()
            .map(|dto| {
                if seen.insert(dto.id) {
                    Ok(dto.into_domain_user())
                } else {
                    Err(format!("duplicate user id {}", dto.id))
                }
            })
            .collect()
    }
}

impl UserDto {
    fn into_domain_user(self) -> User {
        User {
            id: UserId::new(self.id),
            name: self.name,
            username: self.username,
            email: self.email,
            address: Address {
                street: self.address.street,
                suite: self.address.suite,
                city: self.address.city,
                zipcode: self.address.zipcode,
                geo: Geo {
                    lat: self.address.geo.lat,
                    lng: self.address.geo.lng,
                },
            },
            phone: self.phone,
            website: self.website,
            company: Company {
                name: self.company.name,
                catch_phrase: self.company.catch_phrase,
                tagline: self.company.bs,
            },
        }
    }
}
