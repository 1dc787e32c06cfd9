//! End-to-end scenarios driving a [`LightClient`] through its public API.

mod helpers;

use helpers::*;
use sp1_ics07_tendermint_client::{
    encoding::encode, Error, Height, KVPair, LightClient, MembershipOutput, MsgMembership, MsgUpdateClient,
    Sp1Proof, UpdateClientOutput, UpdateResult,
};

fn update_msg(vkey: [u8; 32], output: &UpdateClientOutput) -> MsgUpdateClient {
    MsgUpdateClient {
        sp1_proof: Sp1Proof {
            vkey,
            public_values: encode(output),
            proof: vec![0xde, 0xad, 0xbe, 0xef],
        },
    }
}

#[test]
fn happy_path_update_advances_height() {
    let trusted = consensus_state_at(1_000, 0xaa);
    let mut client = LightClient::new(config_at(10, &trusted), MockVerifier::accepting());

    let new_consensus_state = consensus_state_at(2_000, 0xbb);
    let output = UpdateClientOutput {
        trusted_height: Height::new(1, 10),
        trusted_consensus_state: trusted,
        new_height: Height::new(1, 20),
        new_consensus_state,
        client_state: client_state_at(10),
        time: 2_000,
    };

    let result = client
        .update_client(&update_msg(UPDATE_CLIENT_VKEY, &output), 2_100)
        .expect("happy path update should succeed");

    assert_eq!(result, UpdateResult::Update);
    assert_eq!(client.client_state().latest_height, Height::new(1, 20));
    assert_eq!(
        client.consensus_state_hash(20).unwrap(),
        new_consensus_state.canonical_hash()
    );
}

#[test]
fn resubmitting_the_same_update_is_a_noop_and_skips_the_verifier() {
    let trusted = consensus_state_at(1_000, 0xaa);
    let verifier = MockVerifier::accepting();
    let mut client = LightClient::new(config_at(10, &trusted), verifier);

    let new_consensus_state = consensus_state_at(2_000, 0xbb);
    let output = UpdateClientOutput {
        trusted_height: Height::new(1, 10),
        trusted_consensus_state: trusted,
        new_height: Height::new(1, 20),
        new_consensus_state,
        client_state: client_state_at(10),
        time: 2_000,
    };

    client
        .update_client(&update_msg(UPDATE_CLIENT_VKEY, &output), 2_100)
        .unwrap();

    let result = client
        .update_client(&update_msg(UPDATE_CLIENT_VKEY, &output), 2_200)
        .expect("resubmitting an already-applied update is a NoOp, not an error");

    assert_eq!(result, UpdateResult::NoOp);
}

#[test]
fn conflicting_consensus_state_at_a_trusted_height_is_self_misbehaviour() {
    let trusted = consensus_state_at(1_000, 0xaa);
    let mut client = LightClient::new(config_at(10, &trusted), MockVerifier::accepting());

    let first_new = consensus_state_at(2_000, 0xbb);
    let first_output = UpdateClientOutput {
        trusted_height: Height::new(1, 10),
        trusted_consensus_state: trusted,
        new_height: Height::new(1, 20),
        new_consensus_state: first_new,
        client_state: client_state_at(10),
        time: 2_000,
    };
    client
        .update_client(&update_msg(UPDATE_CLIENT_VKEY, &first_output), 2_100)
        .unwrap();

    let conflicting_new = consensus_state_at(2_500, 0xcc);
    let conflicting_output = UpdateClientOutput {
        trusted_height: Height::new(1, 10),
        trusted_consensus_state: trusted,
        new_height: Height::new(1, 20),
        new_consensus_state: conflicting_new,
        client_state: client_state_at(10),
        time: 2_100,
    };

    let result = client
        .update_client(&update_msg(UPDATE_CLIENT_VKEY, &conflicting_output), 2_200)
        .expect("misbehaviour is a reported outcome, not an error");

    assert_eq!(result, UpdateResult::Misbehaviour);
    assert!(client.client_state().is_frozen);
}

#[test]
fn membership_batch_populates_the_cache_for_later_hits() {
    let trusted = consensus_state_at(1_000, 0xaa);
    let mut client = LightClient::new(config_at(10, &trusted), MockVerifier::accepting());

    let p1 = KVPair::new(vec![b"path1".to_vec()], b"value1".to_vec());
    let p2 = KVPair::new(vec![b"path2".to_vec()], b"value2".to_vec());
    let output = MembershipOutput {
        commitment_root: trusted.root,
        kv_pairs: vec![p1.clone(), p2.clone()],
    };

    let proof = sp1_ics07_tendermint_client::messages::Sp1MembershipProof {
        sp1_proof: Sp1Proof {
            vkey: MEMBERSHIP_VKEY,
            public_values: encode(&output),
            proof: vec![0x01],
        },
        trusted_consensus_state: trusted,
    };
    let envelope = sp1_ics07_tendermint_client::MembershipProof {
        proof_type: 0,
        proof: encode(&proof),
    };

    let msg = MsgMembership {
        proof_height: Height::new(1, 10),
        path: p1.path.clone(),
        value: p1.value.clone(),
        proof: encode(&envelope),
    };
    client.membership(&msg, 1_000).expect("first pair should verify");

    let cached_hit = MsgMembership {
        proof_height: Height::new(1, 10),
        path: p2.path.clone(),
        value: p2.value.clone(),
        proof: vec![],
    };
    client
        .membership(&cached_hit, 1_000)
        .expect("second pair should be served from the cache");

    let cached_miss = MsgMembership {
        proof_height: Height::new(1, 10),
        path: p1.path,
        value: b"wrong".to_vec(),
        proof: vec![],
    };
    let err = client.membership(&cached_miss, 1_000).unwrap_err();
    assert!(matches!(err, Error::KeyValuePairNotInCache));
}

#[test]
fn stale_update_proof_is_rejected_as_too_old() {
    let trusted = consensus_state_at(1_000, 0xaa);
    let mut client = LightClient::new(config_at(10, &trusted), MockVerifier::accepting());

    let output = UpdateClientOutput {
        trusted_height: Height::new(1, 10),
        trusted_consensus_state: trusted,
        new_height: Height::new(1, 20),
        new_consensus_state: consensus_state_at(2_000, 0xbb),
        client_state: client_state_at(10),
        time: 1_000,
    };

    let err = client
        .update_client(&update_msg(UPDATE_CLIENT_VKEY, &output), 1_000 + 1_801)
        .unwrap_err();

    assert!(matches!(err, Error::ProofIsTooOld { .. }));
}

#[test]
fn wrong_verification_key_is_rejected_before_decoding_public_values() {
    let trusted = consensus_state_at(1_000, 0xaa);
    let mut client = LightClient::new(config_at(10, &trusted), MockVerifier::accepting());

    let output = UpdateClientOutput {
        trusted_height: Height::new(1, 10),
        trusted_consensus_state: trusted,
        new_height: Height::new(1, 20),
        new_consensus_state: consensus_state_at(2_000, 0xbb),
        client_state: client_state_at(10),
        time: 2_000,
    };

    let wrong_vkey = vkey_from_hex("5f000000000000000000000000000000000000000000000000000000000000ab");
    let err = client
        .update_client(&update_msg(wrong_vkey, &output), 2_100)
        .unwrap_err();

    assert!(matches!(err, Error::VerificationKeyMismatch { .. }));
}

#[test]
fn frozen_client_rejects_writes_but_reads_keep_working() {
    let trusted = consensus_state_at(1_000, 0xaa);
    let mut client = LightClient::new(config_at(10, &trusted), MockVerifier::accepting());

    let first_new = consensus_state_at(2_000, 0xbb);
    let first_output = UpdateClientOutput {
        trusted_height: Height::new(1, 10),
        trusted_consensus_state: trusted,
        new_height: Height::new(1, 20),
        new_consensus_state: first_new,
        client_state: client_state_at(10),
        time: 2_000,
    };
    client
        .update_client(&update_msg(UPDATE_CLIENT_VKEY, &first_output), 2_100)
        .unwrap();

    let conflicting_output = UpdateClientOutput {
        trusted_height: Height::new(1, 10),
        trusted_consensus_state: trusted,
        new_height: Height::new(1, 20),
        new_consensus_state: consensus_state_at(2_500, 0xcc),
        client_state: client_state_at(10),
        time: 2_100,
    };
    client
        .update_client(&update_msg(UPDATE_CLIENT_VKEY, &conflicting_output), 2_200)
        .unwrap();
    assert!(client.client_state().is_frozen);

    let another_output = UpdateClientOutput {
        trusted_height: Height::new(1, 20),
        trusted_consensus_state: first_new,
        new_height: Height::new(1, 30),
        new_consensus_state: consensus_state_at(3_000, 0xdd),
        client_state: client_state_at(10),
        time: 2_300,
    };
    let err = client
        .update_client(&update_msg(UPDATE_CLIENT_VKEY, &another_output), 2_400)
        .unwrap_err();
    assert!(matches!(err, Error::FrozenClientState));

    assert!(client.consensus_state_hash(20).is_ok());
    assert!(client.client_state().is_frozen);
}
