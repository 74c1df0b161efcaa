//! Wire identifier codec
//!
//! Entity identifiers cross the wire as strings; the store works with native
//! ObjectIds. Every id leaving the store passes through [`encode`], every id
//! argument accepted from a client passes through [`decode`].

use mongodb::bson::oid::ObjectId;

use crate::error::AppError;

/// Parse a wire identifier into its store-native form.
///
/// Fails with [`AppError::InvalidIdentifier`] when the string is not a
/// well-formed ObjectId (wrong length or charset).
pub fn decode(wire: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(wire).map_err(|_| AppError::InvalidIdentifier(wire.to_string()))
}

/// Render a store-native identifier in its wire form. Total and lossless:
/// `decode(encode(id))` always round-trips.
pub fn encode(id: &ObjectId) -> String {
    id.to_hex()
}
