use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PixError;

/// CPF formatado ocupa 14 caracteres; acima disso tratamos como CNPJ.
const MAX_CPF_LEN: usize = 14;

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct PixRequest {
    pub public_key: String,
    pub secret_key: String,
    pub name: String,
    pub email: String,
    pub document: String,
    pub amount: f64,
    pub version: String,
}

impl fmt::Debug for PixRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixRequest")
            .field("public_key", &self.public_key)
            .field("secret_key", &"***")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("document", &self.document)
            .field("amount", &self.amount)
            .field("version", &self.version)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PixResponse {
    pub qr_code_base64: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_url: Option<String>,
    pub pix_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Cpf,
    Cnpj,
}

impl DocumentType {
    pub fn infer(document: &str) -> Self {
        if document.len() > MAX_CPF_LEN {
            DocumentType::Cnpj
        } else {
            DocumentType::Cpf
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayVersion {
    V1,
    V2,
}

impl FromStr for GatewayVersion {
    type Err = PixError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag.eq_ignore_ascii_case("v1") {
            Ok(GatewayVersion::V1)
        } else if tag.eq_ignore_ascii_case("v2") {
            Ok(GatewayVersion::V2)
        } else {
            Err(PixError::UnsupportedVersion(tag.to_string()))
        }
    }
}

impl fmt::Display for GatewayVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayVersion::V1 => f.write_str("v1"),
            GatewayVersion::V2 => f.write_str("v2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_document_type_boundary() {
        assert_eq!(DocumentType::infer("12345678901"), DocumentType::Cpf);
        assert_eq!(DocumentType::infer("123.456.789-01"), DocumentType::Cpf);
        assert_eq!(DocumentType::infer("12.345.678/0001-90"), DocumentType::Cnpj);
        assert_eq!(DocumentType::infer("123456789012345"), DocumentType::Cnpj);
        assert_eq!(DocumentType::infer(""), DocumentType::Cpf);
    }

    #[test]
    fn test_version_parsing_is_case_insensitive() {
        assert_eq!("v1".parse::<GatewayVersion>().unwrap(), GatewayVersion::V1);
        assert_eq!("V1".parse::<GatewayVersion>().unwrap(), GatewayVersion::V1);
        assert_eq!("v2".parse::<GatewayVersion>().unwrap(), GatewayVersion::V2);
        assert_eq!("V2".parse::<GatewayVersion>().unwrap(), GatewayVersion::V2);
    }

    #[test]
    fn test_unknown_version_names_raw_value() {
        for tag in ["", "v3", " v1", "version1"] {
            let err = tag.parse::<GatewayVersion>().unwrap_err();
            assert!(matches!(&err, PixError::UnsupportedVersion(raw) if raw == tag));
            assert_eq!(
                err.to_string(),
                format!("unsupported paynux version: {} (must be v1 or v2)", tag)
            );
        }
    }

    #[test]
    fn test_request_decodes_with_missing_fields() {
        let req: PixRequest = serde_json::from_str(r#"{"amount": 10.5, "version": "v1"}"#).unwrap();
        assert_eq!(req.amount, 10.5);
        assert!(req.public_key.is_empty());
        assert!(req.secret_key.is_empty());
    }

    #[test]
    fn test_debug_hides_secret_key() {
        let req = PixRequest {
            public_key: "pk".to_string(),
            secret_key: "super-secret".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", req);
        assert!(rendered.contains("pk"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_response_omits_absent_fields() {
        let response = PixResponse {
            qr_code_base64: String::new(),
            qr_code_url: None,
            pix_string: "000201".to_string(),
            transaction_id: None,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"qr_code_base64": "", "pix_string": "000201"})
        );
    }

    proptest! {
        #[test]
        fn prop_long_documents_are_cnpj(doc in "[0-9./-]{15,40}") {
            prop_assert_eq!(DocumentType::infer(&doc), DocumentType::Cnpj);
        }

        #[test]
        fn prop_short_documents_are_cpf(doc in "[0-9./-]{0,14}") {
            prop_assert_eq!(DocumentType::infer(&doc), DocumentType::Cpf);
        }
    }
}
