#![allow(dead_code)]

use std::sync::OnceLock;

use group_envelope::*;

/// RSA keygen is slow; every test binary shares these three keypairs.
pub fn recipients() -> &'static [(RecipientPub, RecipientPriv)] {
    static KEYS: OnceLock<Vec<(RecipientPub, RecipientPriv)>> = OnceLock::new();
    KEYS.get_or_init(|| {
        ["alice", "bob", "carol"]
            .iter()
            .map(|id| gen_recipient_keypair(id).unwrap())
            .collect()
    })
}

pub fn alice() -> &'static (RecipientPub, RecipientPriv) {
    &recipients()[0]
}

pub fn bob() -> &'static (RecipientPub, RecipientPriv) {
    &recipients()[1]
}

pub fn carol() -> &'static (RecipientPub, RecipientPriv) {
    &recipients()[2]
}

pub fn pubs(ids: &[&(RecipientPub, RecipientPriv)]) -> Vec<RecipientPub> {
    ids.iter().map(|(p, _)| p.clone()).collect()
}
