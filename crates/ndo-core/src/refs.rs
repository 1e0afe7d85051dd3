//! Object reference paths.
//!
//! The controller addresses template-level objects through slash-delimited
//! reference strings:
//!
//! - `bdRef`:  `/schemas/{schemaId}/templates/{templateName}/bds/{bdName}`
//! - `epgRef`: `/schemas/{schemaId}/templates/{templateName}/anps/{anpName}/epgs/{epgName}`
//!
//! Every mutation path in the JSON-Patch surface is derived from one of
//! these, so parsing is fallible and strict: a malformed reference is a
//! validation error, never a panic.

use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Parsed `bdRef` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BdRef {
    pub schema_id: String,
    pub template: String,
    pub bd: String,
}

impl BdRef {
    #[must_use]
    pub fn new(schema_id: &str, template: &str, bd: &str) -> Self {
        Self {
            schema_id: schema_id.to_owned(),
            template: template.to_owned(),
            bd: bd.to_owned(),
        }
    }
}

impl FromStr for BdRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            ["", "schemas", schema_id, "templates", template, "bds", bd]
                if !schema_id.is_empty() && !template.is_empty() && !bd.is_empty() =>
            {
                Ok(Self::new(schema_id, template, bd))
            }
            _ => Err(CoreError::MalformedRef {
                kind: "bd",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for BdRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/schemas/{}/templates/{}/bds/{}",
            self.schema_id, self.template, self.bd
        )
    }
}

/// Parsed `epgRef` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpgRef {
    pub schema_id: String,
    pub template: String,
    pub anp: String,
    pub epg: String,
}

impl EpgRef {
    #[must_use]
    pub fn new(schema_id: &str, template: &str, anp: &str, epg: &str) -> Self {
        Self {
            schema_id: schema_id.to_owned(),
            template: template.to_owned(),
            anp: anp.to_owned(),
            epg: epg.to_owned(),
        }
    }
}

impl FromStr for EpgRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            ["", "schemas", schema_id, "templates", template, "anps", anp, "epgs", epg]
                if !schema_id.is_empty()
                    && !template.is_empty()
                    && !anp.is_empty()
                    && !epg.is_empty() =>
            {
                Ok(Self::new(schema_id, template, anp, epg))
            }
            _ => Err(CoreError::MalformedRef {
                kind: "epg",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for EpgRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/schemas/{}/templates/{}/anps/{}/epgs/{}",
            self.schema_id, self.template, self.anp, self.epg
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bd_ref_roundtrip() {
        let raw = "/schemas/5f2a/templates/Tmpl1/bds/WEB_BD";
        let parsed: BdRef = raw.parse().expect("valid bdRef");
        assert_eq!(parsed.schema_id, "5f2a");
        assert_eq!(parsed.template, "Tmpl1");
        assert_eq!(parsed.bd, "WEB_BD");
        assert_eq!(parsed.to_string(), raw);
    }

    #[test]
    fn epg_ref_roundtrip() {
        let raw = "/schemas/5f2a/templates/Tmpl1/anps/AP1/epgs/WEB_EPG";
        let parsed: EpgRef = raw.parse().expect("valid epgRef");
        assert_eq!(parsed.schema_id, "5f2a");
        assert_eq!(parsed.template, "Tmpl1");
        assert_eq!(parsed.anp, "AP1");
        assert_eq!(parsed.epg, "WEB_EPG");
        assert_eq!(parsed.to_string(), raw);
    }

    #[test]
    fn bd_ref_rejects_epg_shape() {
        let err = "/schemas/a/templates/b/anps/c/epgs/d".parse::<BdRef>();
        assert!(matches!(
            err,
            Err(CoreError::MalformedRef { kind: "bd", .. })
        ));
    }

    #[test]
    fn epg_ref_rejects_truncated_path() {
        for raw in [
            "",
            "/schemas/a",
            "/schemas/a/templates/b/anps/c/epgs/",
            "schemas/a/templates/b/anps/c/epgs/d",
        ] {
            assert!(raw.parse::<EpgRef>().is_err(), "should reject '{raw}'");
        }
    }

    #[test]
    fn bd_ref_rejects_empty_segments() {
        assert!("/schemas//templates/b/bds/c".parse::<BdRef>().is_err());
        assert!("/schemas/a/templates/b/bds/".parse::<BdRef>().is_err());
    }
}
