use url::Url;

use crate::error::{ElawsError, Result};

/// Identifies a law either by its law ID or by its official law number.
///
/// The `lawdata` endpoint accepts either one in the same path position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LawIdentifier {
    /// Law ID, e.g. `129AC0000000089`
    Id(String),
    /// Law number, e.g. `明治二十九年法律第八十九号`
    Number(String),
}

impl LawIdentifier {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Id(value) | Self::Number(value) => value,
        }
    }
}

/// Selector for the `articles` endpoint.
///
/// Exactly one of `law_id` / `law_num` must be set. `appdx_table` cannot
/// be combined with `article` or `paragraph`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LawContentRequest {
    /// Law ID
    pub law_id: Option<String>,
    /// Law number
    pub law_num: Option<String>,
    /// Article number
    pub article: Option<String>,
    /// Paragraph number
    pub paragraph: Option<String>,
    /// Appendix table number
    pub appdx_table: Option<String>,
}

impl LawContentRequest {
    /// Request addressing a law by its law ID.
    pub fn by_law_id(law_id: impl Into<String>) -> Self {
        Self {
            law_id: Some(law_id.into()),
            ..Default::default()
        }
    }

    /// Request addressing a law by its law number.
    pub fn by_law_num(law_num: impl Into<String>) -> Self {
        Self {
            law_num: Some(law_num.into()),
            ..Default::default()
        }
    }

    /// Validate the selector combination. Runs before any I/O.
    pub fn validate(&self) -> Result<()> {
        match (&self.law_id, &self.law_num) {
            (Some(_), Some(_)) => {
                return Err(ElawsError::Validation(
                    "law_id and law_num are mutually exclusive".to_string(),
                ));
            }
            (None, None) => {
                return Err(ElawsError::Validation(
                    "either law_id or law_num is required".to_string(),
                ));
            }
            _ => {}
        }

        if self.appdx_table.is_some() && (self.article.is_some() || self.paragraph.is_some()) {
            return Err(ElawsError::Validation(
                "appdx_table cannot be combined with article or paragraph".to_string(),
            ));
        }

        Ok(())
    }
}

/// URL for the law list endpoint: `{base}/{version}/lawlists/{lawtype}`.
pub fn lawlists_url(base_url: &str, version: u32, lawtype: u32) -> Result<Url> {
    parse_url(format!(
        "{}/{}/lawlists/{}",
        base_url.trim_end_matches('/'),
        version,
        lawtype
    ))
}

/// URL for the full law text endpoint: `{base}/{version}/lawdata/{id_or_num}`.
pub fn lawdata_url(base_url: &str, version: u32, law: &LawIdentifier) -> Result<Url> {
    parse_url(format!(
        "{}/{}/lawdata/{}",
        base_url.trim_end_matches('/'),
        version,
        law.as_str()
    ))
}

/// URL for the law content endpoint.
///
/// Selectors are appended as semicolon-delimited path segments; an unset
/// selector is omitted entirely rather than sent with an empty value.
pub fn articles_url(base_url: &str, version: u32, request: &LawContentRequest) -> Result<Url> {
    request.validate()?;

    let mut path = format!("{}/{}/articles", base_url.trim_end_matches('/'), version);
    let segments = [
        ("lawNum", &request.law_num),
        ("lawId", &request.law_id),
        ("article", &request.article),
        ("paragraph", &request.paragraph),
        ("appdxTable", &request.appdx_table),
    ];
    for (key, value) in segments {
        if let Some(value) = value {
            path.push_str(&format!(";{}={}", key, value));
        }
    }

    parse_url(path)
}

/// URL for the updated-law list endpoint: `{base}/{version}/updatelawlists/{date}`.
pub fn updatelawlists_url(base_url: &str, version: u32, date: u32) -> Result<Url> {
    parse_url(format!(
        "{}/{}/updatelawlists/{}",
        base_url.trim_end_matches('/'),
        version,
        date
    ))
}

fn parse_url(url: String) -> Result<Url> {
    Url::parse(&url).map_err(|e| ElawsError::Validation(format!("invalid request URL {:?}: {}", url, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lawlists_url() {
        let url = lawlists_url("https://elaws.e-gov.go.jp/api", 1, 2).unwrap();
        assert_eq!(url.as_str(), "https://elaws.e-gov.go.jp/api/1/lawlists/2");
    }

    #[test]
    fn test_lawdata_url_by_id() {
        let law = LawIdentifier::Id("129AC0000000089".to_string());
        let url = lawdata_url("https://elaws.e-gov.go.jp/api", 1, &law).unwrap();
        assert_eq!(
            url.as_str(),
            "https://elaws.e-gov.go.jp/api/1/lawdata/129AC0000000089"
        );
    }

    #[test]
    fn test_updatelawlists_url() {
        let url = updatelawlists_url("https://elaws.e-gov.go.jp/api/", 1, 20200401).unwrap();
        assert_eq!(
            url.as_str(),
            "https://elaws.e-gov.go.jp/api/1/updatelawlists/20200401"
        );
    }

    #[test]
    fn test_articles_url_omits_unset_selectors() {
        let request = LawContentRequest {
            article: Some("32".to_string()),
            ..LawContentRequest::by_law_id("129AC0000000089")
        };
        let url = articles_url("https://elaws.e-gov.go.jp/api", 1, &request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://elaws.e-gov.go.jp/api/1/articles;lawId=129AC0000000089;article=32"
        );
        assert!(!url.as_str().contains("paragraph"));
        assert!(!url.as_str().contains("appdxTable"));
    }

    #[test]
    fn test_articles_url_appdx_table_alone() {
        let request = LawContentRequest {
            appdx_table: Some("1".to_string()),
            ..LawContentRequest::by_law_num("明治二十九年法律第八十九号")
        };
        let url = articles_url("https://elaws.e-gov.go.jp/api", 1, &request).unwrap();
        assert!(url.as_str().ends_with(";appdxTable=1"));
        assert!(url.as_str().contains("lawNum="));
    }

    #[test]
    fn test_validate_rejects_both_identifiers() {
        let request = LawContentRequest {
            law_num: Some("昭和二十二年法律第六十七号".to_string()),
            ..LawContentRequest::by_law_id("322AC0000000067")
        };
        assert!(matches!(
            request.validate(),
            Err(ElawsError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_missing_identifier() {
        let request = LawContentRequest::default();
        assert!(matches!(
            request.validate(),
            Err(ElawsError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_appdx_table_with_article() {
        let request = LawContentRequest {
            article: Some("9".to_string()),
            appdx_table: Some("1".to_string()),
            ..LawContentRequest::by_law_id("322AC0000000067")
        };
        assert!(matches!(
            request.validate(),
            Err(ElawsError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_appdx_table_with_paragraph() {
        let request = LawContentRequest {
            paragraph: Some("2".to_string()),
            appdx_table: Some("1".to_string()),
            ..LawContentRequest::by_law_id("322AC0000000067")
        };
        assert!(matches!(
            request.validate(),
            Err(ElawsError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_accepts_appdx_table_alone() {
        let request = LawContentRequest {
            appdx_table: Some("1".to_string()),
            ..LawContentRequest::by_law_id("322AC0000000067")
        };
        assert!(request.validate().is_ok());
    }
}
