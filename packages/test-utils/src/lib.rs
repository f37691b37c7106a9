use blst::min_sig::{AggregateSignature, SecretKey, Signature};
use cosmwasm_std::Binary;

use checkpoint_merkle::hash::leaf_hash;
use checkpoint_merkle::MerkleTree;

const WORD_SIZE: usize = 32;

/// A committee member's BLS key pair, derived deterministically from a seed byte
pub struct BlsKey {
    sk: SecretKey,
}

impl BlsKey {
    pub fn from_seed(seed: u8) -> Self {
        // `key_gen` needs at least 32 bytes of input key material
        let ikm = [seed; 32];
        let sk = SecretKey::key_gen(&ikm, &[]).unwrap();
        BlsKey { sk }
    }

    /// Compressed G2 public key (96 bytes)
    pub fn public_key(&self) -> Vec<u8> {
        self.sk.sk_to_pk().compress().to_vec()
    }

    /// Uncompressed G2 public key (192 bytes)
    pub fn public_key_uncompressed(&self) -> Vec<u8> {
        self.sk.sk_to_pk().serialize().to_vec()
    }

    pub fn sign(&self, msg: &[u8], dst: &[u8]) -> Signature {
        self.sk.sign(msg, dst, &[])
    }
}

/// `bls_keys` returns `n` distinct deterministic keys
pub fn bls_keys(n: usize) -> Vec<BlsKey> {
    (1..=n).map(|i| BlsKey::from_seed(i as u8)).collect()
}

/// `aggregate_sign` signs `msg` with every key and aggregates the signatures into
/// one compressed G1 point (48 bytes)
pub fn aggregate_sign(keys: &[&BlsKey], msg: &[u8], dst: &[u8]) -> Vec<u8> {
    let sigs: Vec<Signature> = keys.iter().map(|k| k.sign(msg, dst)).collect();
    let sig_refs: Vec<&Signature> = sigs.iter().collect();
    AggregateSignature::aggregate(&sig_refs, true)
        .unwrap()
        .to_signature()
        .to_bytes()
        .to_vec()
}

/// `bitmap` packs the selected validator indices LSB first
pub fn bitmap(selected: &[usize]) -> Vec<u8> {
    let len = selected.iter().max().map(|max| max / 8 + 1).unwrap_or(0);
    let mut bytes = vec![0u8; len];
    for &i in selected {
        bytes[i / 8] |= 1 << (i % 8);
    }
    bytes
}

fn word(value: u128) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// `price_leaf` encodes a `(key, value)` price update as two big-endian words
pub fn price_leaf(key: u128, value: u128) -> Vec<u8> {
    let mut leaf = Vec::with_capacity(2 * WORD_SIZE);
    leaf.extend_from_slice(&word(key));
    leaf.extend_from_slice(&word(value));
    leaf
}

/// A batch of raw leaves committed under a single event root
pub struct FeedTree {
    pub leaves: Vec<Vec<u8>>,
    tree: MerkleTree,
}

impl FeedTree {
    pub fn new(leaves: Vec<Vec<u8>>) -> Self {
        let hashes = leaves.iter().map(|l| leaf_hash(l)).collect();
        let tree = MerkleTree::from_leaf_hashes(hashes).unwrap();
        FeedTree { leaves, tree }
    }

    /// Shortcut for a tree of price leaves
    pub fn from_prices(prices: &[(u128, u128)]) -> Self {
        Self::new(prices.iter().map(|&(k, v)| price_leaf(k, v)).collect())
    }

    pub fn root(&self) -> Binary {
        self.tree.root().into()
    }

    pub fn proof(&self, index: usize) -> Vec<Binary> {
        self.tree.proof(index as u64).unwrap().siblings
    }
}
