mod serde;
mod serde_json;

pub(crate) use self::serde_json::decode;
