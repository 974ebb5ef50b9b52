use groestl::{Digest, Groestl512};
use ring::digest::{Context, SHA256};

pub const SHA256_LEN: usize = 32;
pub const GROESTL512_LEN: usize = 64;

pub fn sha256_digest(data: &[u8]) -> [u8; SHA256_LEN] {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();

    let mut out = [0u8; SHA256_LEN];
    out.copy_from_slice(digest.as_ref());
    out
}

pub fn groestl512_digest(data: &[u8]) -> [u8; GROESTL512_LEN] {
    let mut hasher = Groestl512::new();
    hasher.update(data);

    let mut out = [0u8; GROESTL512_LEN];
    out.copy_from_slice(hasher.finalize().as_slice());
    out
}
