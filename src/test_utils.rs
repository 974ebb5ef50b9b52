//! Header fixtures for unit tests

use crate::core::hash::Hash256;
use crate::core::header::{HeaderFields, HeaderView};
use crate::core::proof_of_work::ProofOfWork;

/// Bitcoin genesis block header, serialized
pub const BITCOIN_GENESIS_HEADER: &str = "0100000000000000000000000000000000000000000000000000000000000000\
     000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa\
     4b1e5e4a29ab5f49ffff001d1dac2b7c";

/// Groestl-512 then SHA-256 of `BITCOIN_GENESIS_HEADER`, raw digest bytes.
///
/// Self-derived with an independent Groestl-512 implementation that matches the
/// published Groestl test vectors; no live-chain header is involved.
pub const BITCOIN_GENESIS_POW_DIGEST: &str =
    "3b603c09aa8ef9aa9063e2c21f244cea2e9db34c276e858a1260915a93c23377";

/// Extends mainnet checkpoint 516999 and meets its own bits (0x2000ffff)
pub const MINED_HEADER: &str = "02000000287b0b87f28677d7514f5e3499e22d53bce753205426e5ca3b7461a4\
     7dd42e576d0d33cd16cc153cc0e1c69bc4f1cc2fa75516f5bc8416f91482ab39\
     dac41ffc480d4e57ffff002030010000";

pub const MINED_HEADER_IDENTITY: &str =
    "00d584662144b1ce952c630311b3d260a2991a1bc90a9f0df0677f2d35a4c454";

/// `MINED_HEADER` with nonce 0, which misses the target
pub const UNMINED_HEADER: &str = "02000000287b0b87f28677d7514f5e3499e22d53bce753205426e5ca3b7461a4\
     7dd42e576d0d33cd16cc153cc0e1c69bc4f1cc2fa75516f5bc8416f91482ab39\
     dac41ffc480d4e57ffff002000000000";

/// Child of `MINED_HEADER`, also meeting 0x2000ffff
pub const CHILD_HEADER: &str = "0200000054c4a4352d7f67f00d9f0ac91b1a99a260d2b31103632c95ceb14421\
     6684d500863a48b4ef527e642b3c6b9797c1bd61427ba82b06ab9a9a0edba578\
     d50bd053de0d4e57ffff002043000000";

pub const CHILD_HEADER_IDENTITY: &str =
    "0084e1b0e45bdacc08e82c9f7939971af37c6cfe80d9379e10214bce85a4920e";

pub fn header_bytes(hex_header: &str) -> Vec<u8> {
    hex::decode(hex_header).unwrap()
}

/// View of a serialized header, identified by its proof-of-work hash
pub fn view_of(hex_header: &str, height: u32) -> HeaderView {
    let raw = header_bytes(hex_header);
    let fields = HeaderFields::parse(&raw).unwrap();
    let identity = ProofOfWork::pow_hash(&raw).unwrap();
    fields.view(height, Hash256::from_bytes(identity))
}

/// Synthetic view whose hash is `seed` repeated
pub fn view_at(height: u32, seed: u8) -> HeaderView {
    HeaderView::new(
        height,
        Hash256::from_bytes([seed; 32]),
        Hash256::from_bytes([seed.wrapping_sub(1); 32]),
        1_500_000_000,
        0x1c0ffff0,
    )
}

/// Synthetic direct child of `previous`
pub fn child_of(previous: &HeaderView, seed: u8) -> HeaderView {
    HeaderView::new(
        previous.height.wrapping_add(1),
        Hash256::from_bytes([seed; 32]),
        previous.block_hash,
        previous.timestamp + 150,
        previous.bits,
    )
}
