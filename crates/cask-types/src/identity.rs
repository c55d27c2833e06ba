use serde::{Deserialize, Serialize};

use crate::document::{str_array_field, str_field, Document, FromDocument};
use crate::error::{DecodeError, DecodeResult};

/// The daemon node's identity, from `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "PublicKey")]
    pub public_key: String,
    #[serde(rename = "Addresses")]
    pub addresses: Vec<String>,
    #[serde(rename = "AgentVersion")]
    pub agent_version: String,
    #[serde(rename = "ProtocolVersion")]
    pub protocol_version: String,
}

impl FromDocument for Identity {
    const RESOURCE: &'static str = "Identity";

    fn from_document(doc: &Document) -> DecodeResult<Self> {
        let mut missing = Vec::new();
        let id = str_field(doc, "ID", &mut missing);
        let public_key = str_field(doc, "PublicKey", &mut missing);
        let addresses = str_array_field(doc, "Addresses", &mut missing);
        let agent_version = str_field(doc, "AgentVersion", &mut missing);
        let protocol_version = str_field(doc, "ProtocolVersion", &mut missing);
        match (id, public_key, addresses, agent_version, protocol_version) {
            (Some(id), Some(public_key), Some(addresses), Some(agent_version), Some(protocol_version)) => {
                Ok(Self {
                    id,
                    public_key,
                    addresses,
                    agent_version,
                    protocol_version,
                })
            }
            _ => Err(DecodeError::missing(Self::RESOURCE, missing)),
        }
    }
}
