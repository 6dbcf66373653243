//! Short numeric id generation for new records
//!
//! The backend keys both collections by short zero-padded ids generated on
//! the client. The format is part of the wire contract, so it is kept here
//! in one place; a collision-resistant generator would slot in by replacing
//! these two functions.

use rand::Rng;

/// Generate a request id of the form `REQ042`
pub fn request_id() -> String {
    let n: u16 = rand::thread_rng().gen_range(0..1000);
    format!("REQ{:03}", n)
}

/// Generate a zero-padded four-digit tenant id
pub fn tenant_id() -> String {
    let n: u16 = rand::thread_rng().gen_range(0..1000);
    format!("{:04}", n)
}
