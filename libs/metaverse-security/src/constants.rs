use uuid::Uuid;

/// Subject used by the static identity provider when no identity is configured.
pub const DEFAULT_SUBJECT_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0001);
