use rand::Rng;

use crate::models::identity::Identity;

/// Mint an ephemeral guest identity for this session.
///
/// Guests exist only inside the cookie session: the id is random, shown as
/// "Guest xxxxxx", and nothing about it is ever persisted.
pub fn generate() -> Identity {
    let mut rng = rand::rng();
    let bytes: [u8; 6] = rng.random();
    let tag = hex::encode(bytes);
    Identity {
        id: format!("guest-{tag}"),
        username: format!("Guest {}", &tag[..6]),
        avatar_url: None,
        guest: true,
    }
}
