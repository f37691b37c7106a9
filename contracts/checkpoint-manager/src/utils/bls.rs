use blst::min_sig::{PublicKey, Signature};
use blst::BLST_ERROR;

use crate::verifier::AggregateVerifier;

/// BLS12-381 aggregate verification in the minimal-signature-size setting:
/// signatures in G1, public keys in G2.
pub struct BlsAggregateVerifier {
    /// hash-to-curve domain separation tag
    dst: Vec<u8>,
}

impl BlsAggregateVerifier {
    pub fn new(dst: &[u8]) -> Self {
        BlsAggregateVerifier { dst: dst.to_vec() }
    }
}

impl AggregateVerifier for BlsAggregateVerifier {
    fn verify(&self, message: &[u8], aggregate_signature: &[u8], public_keys: &[&[u8]]) -> bool {
        if public_keys.is_empty() {
            return false;
        }
        let Ok(sig) = Signature::from_bytes(aggregate_signature) else {
            return false;
        };
        let Ok(pks) = public_keys
            .iter()
            .map(|pk| PublicKey::key_validate(pk))
            .collect::<Result<Vec<_>, _>>()
        else {
            return false;
        };
        let pk_refs: Vec<&PublicKey> = pks.iter().collect();

        sig.fast_aggregate_verify(true, message, &self.dst, &pk_refs) == BLST_ERROR::BLST_SUCCESS
    }
}
